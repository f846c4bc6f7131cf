use std::collections::VecDeque;
use std::fmt;

use log::trace;

use super::input::InputCursor;
use super::state::TokenizerState;
use super::token::{Attribute, Token};
use crate::errors::{ParseErrorSink, ParseIssue};

/// Knobs fixed at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizerOptions {
    /// The state to start in. Fragment parsing and tests start elsewhere than Data.
    pub initial_state: TokenizerState,
    /// Seeds the "last start tag" used by the appropriate end tag check.
    pub last_start_tag: Option<String>,
    /// Drop a leading U+FEFF BYTE ORDER MARK.
    pub discard_bom: bool,
    /// Switch to RCDATA, RAWTEXT, script data or PLAINTEXT after emitting the
    /// matching start tag. A tree builder normally does this itself.
    pub infer_text_states: bool,
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        Self {
            initial_state: TokenizerState::Data,
            last_start_tag: None,
            discard_bom: true,
            infer_text_states: false,
        }
    }
}

/// [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
///
/// "Implementations must act as if they used the following state machine to tokenize HTML."
///
/// The tokenizer is pull based: [`HTMLTokenizer::next_token`] runs the state
/// machine until at least one token is ready. States that emit several tokens
/// at once queue them, and the queue drains before the machine moves again.
pub struct HTMLTokenizer<'a> {
    pub(super) input: InputCursor<'a>,
    pub(super) state: TokenizerState,
    pub(super) return_state: TokenizerState,
    pub(super) current_input_character: Option<char>,
    /// The tag, comment or DOCTYPE under construction.
    pub(super) current_token: Option<Token>,
    /// The attribute under construction. Committed to `current_token` when the
    /// next attribute starts or the tag is emitted.
    pub(super) current_attribute: Option<Attribute>,
    /// Set when the attribute being built repeats a name already on the tag.
    pub(super) current_attribute_is_duplicate: bool,

    /// [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#temporary-buffer)
    /// "The temporary buffer is used to temporarily store characters during certain
    /// tokenization operations."
    pub(super) temporary_buffer: String,

    /// [§ 13.2.5.75 Numeric character reference state](https://html.spec.whatwg.org/multipage/parsing.html#numeric-character-reference-state)
    pub(super) character_reference_code: u32,

    /// "The last start tag token emitted is used as part of the tree construction stage
    /// and in the RCDATA, RAWTEXT, and script data states."
    pub(super) last_start_tag_name: Option<String>,

    pub(super) pending: VecDeque<Token>,
    /// The end-of-file token has been queued; the machine must not step again.
    pub(super) eof_queued: bool,
    /// The end-of-file token has been handed out.
    pub(super) eof_returned: bool,

    /// Whether the adjusted current node is in a foreign namespace. Gates CDATA.
    pub(super) in_foreign_content: bool,
    pub(super) infer_text_states: bool,

    pub(super) parse_errors: Vec<ParseIssue>,
    pub(super) error_sink: Option<Box<dyn ParseErrorSink + 'a>>,
}

impl<'a> HTMLTokenizer<'a> {
    /// Create a tokenizer over `input` starting in the data state.
    ///
    /// "The initial state is the data state."
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self::with_options(InputCursor::new(input), TokenizerOptions::default())
    }

    /// Create a tokenizer over an arbitrary cursor.
    pub fn with_options(mut input: InputCursor<'a>, options: TokenizerOptions) -> Self {
        if options.discard_bom {
            let _ = input.skip_bom();
        }
        HTMLTokenizer {
            input,
            state: options.initial_state,
            return_state: TokenizerState::Data,
            current_input_character: None,
            current_token: None,
            current_attribute: None,
            current_attribute_is_duplicate: false,
            temporary_buffer: String::new(),
            character_reference_code: 0,
            last_start_tag_name: options.last_start_tag,
            pending: VecDeque::new(),
            eof_queued: false,
            eof_returned: false,
            in_foreign_content: false,
            infer_text_states: options.infer_text_states,
            parse_errors: Vec::new(),
            error_sink: None,
        }
    }

    /// Route parse errors to `sink` as they are raised, in addition to recording them.
    #[must_use]
    pub fn with_error_sink(mut self, sink: impl ParseErrorSink + 'a) -> Self {
        self.error_sink = Some(Box::new(sink));
        self
    }

    /// Produce the next token.
    ///
    /// Once the end-of-file token has been returned, further calls keep
    /// returning it.
    pub fn next_token(&mut self) -> Token {
        loop {
            if let Some(token) = self.pending.pop_front() {
                if token.is_eof() {
                    self.eof_returned = true;
                }
                trace!(target: "quill.html.tokenizer", "token {token}");
                return token;
            }
            if self.eof_queued {
                return Token::EndOfFile;
            }
            self.step();
        }
    }

    /// Run to completion and collect every token, end-of-file included.
    pub fn run(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        while !self.eof_returned {
            tokens.push(self.next_token());
        }
        tokens
    }

    /// The state the machine is in.
    #[must_use]
    pub const fn state(&self) -> TokenizerState {
        self.state
    }

    /// Switch state from outside, as a tree builder does after `<title>` or `<script>`.
    pub fn set_state(&mut self, state: TokenizerState) {
        trace!(target: "quill.html.tokenizer", "state set externally: {} -> {state}", self.state);
        self.state = state;
    }

    /// Override the last start tag name used by the appropriate end tag check.
    pub fn set_last_start_tag(&mut self, name: Option<&str>) {
        self.last_start_tag_name = name.map(str::to_ascii_lowercase);
    }

    /// The most recently emitted start tag's name.
    #[must_use]
    pub fn last_start_tag(&self) -> Option<&str> {
        self.last_start_tag_name.as_deref()
    }

    /// Tell the tokenizer whether the adjusted current node is a foreign
    /// (SVG or MathML) element. Only then is `<![CDATA[` a CDATA section.
    pub fn set_foreign_content(&mut self, foreign: bool) {
        self.in_foreign_content = foreign;
    }

    /// Every parse error raised so far, in input order.
    #[must_use]
    pub fn parse_errors(&self) -> &[ParseIssue] {
        &self.parse_errors
    }

    /// Take the recorded parse errors, leaving the list empty.
    pub fn take_parse_errors(&mut self) -> Vec<ParseIssue> {
        std::mem::take(&mut self.parse_errors)
    }

    /// Run one state of the machine.
    ///
    /// Every state except the few that only look ahead starts by consuming the
    /// next input character. "Reconsume" pushes that character back into the
    /// cursor, so it is consumed again here on the next step.
    fn step(&mut self) {
        if !self.state.peeks_on_entry() {
            self.current_input_character = self.input.next();
        }
        match self.state {
            TokenizerState::Data => self.handle_data_state(),
            TokenizerState::RCDATA => self.handle_rcdata_state(),
            TokenizerState::RAWTEXT => self.handle_rawtext_state(),
            TokenizerState::ScriptData => self.handle_script_data_state(),
            TokenizerState::PLAINTEXT => self.handle_plaintext_state(),
            TokenizerState::TagOpen => self.handle_tag_open_state(),
            TokenizerState::EndTagOpen => self.handle_end_tag_open_state(),
            TokenizerState::TagName => self.handle_tag_name_state(),
            TokenizerState::RCDATALessThanSign => self.handle_rcdata_less_than_sign_state(),
            TokenizerState::RCDATAEndTagOpen => self.handle_rcdata_end_tag_open_state(),
            TokenizerState::RCDATAEndTagName => self.handle_rcdata_end_tag_name_state(),
            TokenizerState::RAWTEXTLessThanSign => self.handle_rawtext_less_than_sign_state(),
            TokenizerState::RAWTEXTEndTagOpen => self.handle_rawtext_end_tag_open_state(),
            TokenizerState::RAWTEXTEndTagName => self.handle_rawtext_end_tag_name_state(),
            TokenizerState::ScriptDataLessThanSign => {
                self.handle_script_data_less_than_sign_state();
            }
            TokenizerState::ScriptDataEndTagOpen => self.handle_script_data_end_tag_open_state(),
            TokenizerState::ScriptDataEndTagName => self.handle_script_data_end_tag_name_state(),
            TokenizerState::ScriptDataEscapeStart => {
                self.handle_script_data_escape_start_state();
            }
            TokenizerState::ScriptDataEscapeStartDash => {
                self.handle_script_data_escape_start_dash_state();
            }
            TokenizerState::ScriptDataEscaped => self.handle_script_data_escaped_state(),
            TokenizerState::ScriptDataEscapedDash => self.handle_script_data_escaped_dash_state(),
            TokenizerState::ScriptDataEscapedDashDash => {
                self.handle_script_data_escaped_dash_dash_state();
            }
            TokenizerState::ScriptDataEscapedLessThanSign => {
                self.handle_script_data_escaped_less_than_sign_state();
            }
            TokenizerState::ScriptDataEscapedEndTagOpen => {
                self.handle_script_data_escaped_end_tag_open_state();
            }
            TokenizerState::ScriptDataEscapedEndTagName => {
                self.handle_script_data_escaped_end_tag_name_state();
            }
            TokenizerState::ScriptDataDoubleEscapeStart => {
                self.handle_script_data_double_escape_start_state();
            }
            TokenizerState::ScriptDataDoubleEscaped => {
                self.handle_script_data_double_escaped_state();
            }
            TokenizerState::ScriptDataDoubleEscapedDash => {
                self.handle_script_data_double_escaped_dash_state();
            }
            TokenizerState::ScriptDataDoubleEscapedDashDash => {
                self.handle_script_data_double_escaped_dash_dash_state();
            }
            TokenizerState::ScriptDataDoubleEscapedLessThanSign => {
                self.handle_script_data_double_escaped_less_than_sign_state();
            }
            TokenizerState::ScriptDataDoubleEscapeEnd => {
                self.handle_script_data_double_escape_end_state();
            }
            TokenizerState::BeforeAttributeName => self.handle_before_attribute_name_state(),
            TokenizerState::AttributeName => self.handle_attribute_name_state(),
            TokenizerState::AfterAttributeName => self.handle_after_attribute_name_state(),
            TokenizerState::BeforeAttributeValue => self.handle_before_attribute_value_state(),
            TokenizerState::AttributeValueDoubleQuoted => {
                self.handle_attribute_value_quoted_state('"');
            }
            TokenizerState::AttributeValueSingleQuoted => {
                self.handle_attribute_value_quoted_state('\'');
            }
            TokenizerState::AttributeValueUnquoted => self.handle_attribute_value_unquoted_state(),
            TokenizerState::AfterAttributeValueQuoted => {
                self.handle_after_attribute_value_quoted_state();
            }
            TokenizerState::SelfClosingStartTag => self.handle_self_closing_start_tag_state(),
            TokenizerState::BogusComment => self.handle_bogus_comment_state(),
            TokenizerState::MarkupDeclarationOpen => self.handle_markup_declaration_open_state(),
            TokenizerState::CommentStart => self.handle_comment_start_state(),
            TokenizerState::CommentStartDash => self.handle_comment_start_dash_state(),
            TokenizerState::Comment => self.handle_comment_state(),
            TokenizerState::CommentLessThanSign => self.handle_comment_less_than_sign_state(),
            TokenizerState::CommentLessThanSignBang => {
                self.handle_comment_less_than_sign_bang_state();
            }
            TokenizerState::CommentLessThanSignBangDash => {
                self.handle_comment_less_than_sign_bang_dash_state();
            }
            TokenizerState::CommentLessThanSignBangDashDash => {
                self.handle_comment_less_than_sign_bang_dash_dash_state();
            }
            TokenizerState::CommentEndDash => self.handle_comment_end_dash_state(),
            TokenizerState::CommentEnd => self.handle_comment_end_state(),
            TokenizerState::CommentEndBang => self.handle_comment_end_bang_state(),
            TokenizerState::DOCTYPE => self.handle_doctype_state(),
            TokenizerState::BeforeDOCTYPEName => self.handle_before_doctype_name_state(),
            TokenizerState::DOCTYPEName => self.handle_doctype_name_state(),
            TokenizerState::AfterDOCTYPEName => self.handle_after_doctype_name_state(),
            TokenizerState::AfterDOCTYPEPublicKeyword => {
                self.handle_after_doctype_public_keyword_state();
            }
            TokenizerState::BeforeDOCTYPEPublicIdentifier => {
                self.handle_before_doctype_public_identifier_state();
            }
            TokenizerState::DOCTYPEPublicIdentifierDoubleQuoted => {
                self.handle_doctype_public_identifier_quoted_state('"');
            }
            TokenizerState::DOCTYPEPublicIdentifierSingleQuoted => {
                self.handle_doctype_public_identifier_quoted_state('\'');
            }
            TokenizerState::AfterDOCTYPEPublicIdentifier => {
                self.handle_after_doctype_public_identifier_state();
            }
            TokenizerState::BetweenDOCTYPEPublicAndSystemIdentifiers => {
                self.handle_between_doctype_public_and_system_identifiers_state();
            }
            TokenizerState::AfterDOCTYPESystemKeyword => {
                self.handle_after_doctype_system_keyword_state();
            }
            TokenizerState::BeforeDOCTYPESystemIdentifier => {
                self.handle_before_doctype_system_identifier_state();
            }
            TokenizerState::DOCTYPESystemIdentifierDoubleQuoted => {
                self.handle_doctype_system_identifier_quoted_state('"');
            }
            TokenizerState::DOCTYPESystemIdentifierSingleQuoted => {
                self.handle_doctype_system_identifier_quoted_state('\'');
            }
            TokenizerState::AfterDOCTYPESystemIdentifier => {
                self.handle_after_doctype_system_identifier_state();
            }
            TokenizerState::BogusDOCTYPE => self.handle_bogus_doctype_state(),
            TokenizerState::CDATASection => self.handle_cdata_section_state(),
            TokenizerState::CDATASectionBracket => self.handle_cdata_section_bracket_state(),
            TokenizerState::CDATASectionEnd => self.handle_cdata_section_end_state(),
            TokenizerState::CharacterReference => self.handle_character_reference_state(),
            TokenizerState::NamedCharacterReference => {
                self.handle_named_character_reference_state();
            }
            TokenizerState::AmbiguousAmpersand => self.handle_ambiguous_ampersand_state(),
            TokenizerState::NumericCharacterReference => {
                self.handle_numeric_character_reference_state();
            }
            TokenizerState::HexadecimalCharacterReferenceStart => {
                self.handle_hexadecimal_character_reference_start_state();
            }
            TokenizerState::DecimalCharacterReferenceStart => {
                self.handle_decimal_character_reference_start_state();
            }
            TokenizerState::HexadecimalCharacterReference => {
                self.handle_hexadecimal_character_reference_state();
            }
            TokenizerState::DecimalCharacterReference => {
                self.handle_decimal_character_reference_state();
            }
            TokenizerState::NumericCharacterReferenceEnd => {
                self.handle_numeric_character_reference_end_state();
            }
        }
    }
}

impl Iterator for HTMLTokenizer<'_> {
    type Item = Token;

    /// Yields every token up to and including end-of-file, then `None`.
    fn next(&mut self) -> Option<Token> {
        if self.eof_returned {
            return None;
        }
        Some(self.next_token())
    }
}

impl std::iter::FusedIterator for HTMLTokenizer<'_> {}

impl fmt::Debug for HTMLTokenizer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HTMLTokenizer")
            .field("state", &self.state)
            .field("return_state", &self.return_state)
            .field("input", &self.input)
            .field("current_token", &self.current_token)
            .field("pending", &self.pending)
            .field("last_start_tag_name", &self.last_start_tag_name)
            .field("parse_errors", &self.parse_errors.len())
            .finish_non_exhaustive()
    }
}
