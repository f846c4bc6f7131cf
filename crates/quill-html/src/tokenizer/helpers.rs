use log::debug;

use super::core::HTMLTokenizer;
use super::state::TokenizerState;
use super::token::{Attribute, Token};
use crate::errors::{ParseError, ParseIssue};

// "U+0009 CHARACTER TABULATION (tab), U+000A LINE FEED (LF), U+000C FORM FEED (FF),
// U+0020 SPACE"
pub(super) use quill_common::chars::is_html_whitespace as is_whitespace_char;

impl HTMLTokenizer<'_> {
    // =========================================================================
    // State Transition Helpers
    // =========================================================================

    /// "Switch to the X state."
    pub(super) const fn switch_to(&mut self, new_state: TokenizerState) {
        self.state = new_state;
    }

    /// "Reconsume in the X state."
    ///
    /// The current input character goes back into the cursor. End of input is
    /// never pushed back; the cursor simply reports it again.
    pub(super) fn reconsume_in(&mut self, new_state: TokenizerState) {
        self.input.rewind(self.current_input_character);
        self.state = new_state;
    }

    /// Reconsume in the return state.
    pub(super) fn reconsume_in_return_state(&mut self) {
        self.reconsume_in(self.return_state);
    }

    // =========================================================================
    // Lookahead Helpers
    // =========================================================================

    /// Whether the upcoming characters are exactly `target`.
    pub(super) fn next_few_characters_are(&mut self, target: &str) -> bool {
        target
            .chars()
            .enumerate()
            .all(|(i, expected)| self.input.peek(i) == Some(expected))
    }

    /// Whether the upcoming characters are `target`, ignoring ASCII case.
    pub(super) fn next_few_characters_are_case_insensitive(&mut self, target: &str) -> bool {
        target.chars().enumerate().all(|(i, expected)| {
            self.input
                .peek(i)
                .is_some_and(|c| c.eq_ignore_ascii_case(&expected))
        })
    }

    /// Consume `target.len()` characters after a successful lookahead match.
    pub(super) fn consume_string(&mut self, target: &str) {
        self.input.skip(target.chars().count());
    }

    // =========================================================================
    // Emission Helpers
    // =========================================================================

    /// "Emit the current input character as a character token."
    pub(super) fn emit_character_token(&mut self, c: char) {
        self.pending.push_back(Token::new_character(c));
    }

    /// Emit each character of `s` as its own character token.
    pub(super) fn emit_characters(&mut self, s: &str) {
        self.pending.extend(s.chars().map(Token::new_character));
    }

    /// "Emit an end-of-file token."
    pub(super) fn emit_eof_token(&mut self) {
        self.pending.push_back(Token::EndOfFile);
        self.eof_queued = true;
    }

    /// "Emit the current tag token" (or comment, or DOCTYPE).
    ///
    /// Commits any pending attribute first. Records the name of emitted start
    /// tags and reports attributes or a trailing solidus on end tags.
    pub(super) fn emit_current_token(&mut self) {
        self.commit_current_attribute();
        let Some(token) = self.current_token.take() else {
            return;
        };
        match &token {
            Token::StartTag { name, .. } => {
                self.last_start_tag_name = Some(name.clone());
                if let Some(state) =
                    TokenizerState::for_text_element(name).filter(|_| self.infer_text_states)
                {
                    self.switch_to(state);
                }
            }
            Token::EndTag {
                self_closing,
                attributes,
                ..
            } => {
                if !attributes.is_empty() {
                    self.parse_error(ParseError::EndTagWithAttributes);
                }
                if *self_closing {
                    self.parse_error(ParseError::EndTagWithTrailingSolidus);
                }
            }
            _ => {}
        }
        self.pending.push_back(token);
    }

    /// Emit the current token followed by end-of-file.
    pub(super) fn emit_current_token_and_eof(&mut self) {
        self.emit_current_token();
        self.emit_eof_token();
    }

    /// Apply `f` to the token under construction, if there is one.
    pub(super) fn with_current_token(&mut self, f: impl FnOnce(&mut Token)) {
        if let Some(token) = self.current_token.as_mut() {
            f(token);
        }
    }

    // =========================================================================
    // Attribute Helpers
    // =========================================================================

    /// "Start a new attribute in the current tag token. Set that attribute
    /// name and value to the empty string."
    pub(super) fn start_new_attribute(&mut self) {
        self.commit_current_attribute();
        self.current_attribute = Some(Attribute::new(String::new(), String::new()));
        self.current_attribute_is_duplicate = false;
    }

    /// "Append the current input character to the current attribute's name."
    pub(super) fn append_to_attribute_name(&mut self, c: char) {
        if let Some(attr) = self.current_attribute.as_mut() {
            attr.name.push(c);
        }
    }

    /// "Append the current input character to the current attribute's value."
    pub(super) fn append_to_attribute_value(&mut self, c: char) {
        if let Some(attr) = self.current_attribute.as_mut() {
            attr.value.push(c);
        }
    }

    /// Append a string to the current attribute's value.
    pub(super) fn append_str_to_attribute_value(&mut self, s: &str) {
        if let Some(attr) = self.current_attribute.as_mut() {
            attr.value.push_str(s);
        }
    }

    /// [§ 13.2.5.33 Attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-name-state)
    ///
    /// "When the user agent leaves the attribute name state (and before emitting the
    /// tag token, if appropriate), the complete attribute's name must be compared to
    /// the other attributes on the same token; if there is already an attribute on
    /// the token with the exact same name, then this is a duplicate-attribute parse
    /// error and the new attribute must be removed from the token."
    ///
    /// The attribute stays in its slot so its value is still consumed; it is
    /// dropped when committed.
    pub(super) fn check_duplicate_attribute(&mut self) {
        let duplicate = match (&self.current_attribute, &self.current_token) {
            (Some(attr), Some(token)) => token.has_attribute(&attr.name),
            _ => false,
        };
        if duplicate && !self.current_attribute_is_duplicate {
            self.current_attribute_is_duplicate = true;
            self.parse_error(ParseError::DuplicateAttribute);
        }
    }

    /// Move the attribute under construction onto the current tag.
    pub(super) fn commit_current_attribute(&mut self) {
        let Some(attr) = self.current_attribute.take() else {
            return;
        };
        if std::mem::take(&mut self.current_attribute_is_duplicate) {
            return;
        }
        self.with_current_token(|token| token.push_attribute(attr));
    }

    // =========================================================================
    // End Tag Helpers
    // =========================================================================

    /// "An appropriate end tag token is an end tag token whose tag name matches
    /// the tag name of the last start tag to have been emitted from this
    /// tokenizer, if any. If no start tag has been emitted from this tokenizer,
    /// then no end tag token is appropriate."
    pub(super) fn is_appropriate_end_tag_token(&self) -> bool {
        match (&self.current_token, &self.last_start_tag_name) {
            (Some(Token::EndTag { name, .. }), Some(last)) => name == last,
            _ => false,
        }
    }

    /// "Emit a U+003C LESS-THAN SIGN character token, a U+002F SOLIDUS character
    /// token, and a character token for each of the characters in the temporary
    /// buffer (in the order they were added to the buffer)."
    pub(super) fn emit_less_than_solidus_and_temporary_buffer(&mut self) {
        self.emit_character_token('<');
        self.emit_character_token('/');
        let buffer = std::mem::take(&mut self.temporary_buffer);
        self.emit_characters(&buffer);
    }

    /// The "end tag name" states of RCDATA, RAWTEXT, script data and escaped
    /// script data differ only in which state "anything else" returns to.
    pub(super) fn handle_text_end_tag_name(&mut self, text_state: TokenizerState) {
        match self.current_input_character {
            // "U+0009 CHARACTER TABULATION (tab), U+000A LINE FEED (LF), U+000C FORM FEED
            // (FF), U+0020 SPACE - If the current end tag token is an appropriate end tag
            // token, then switch to the before attribute name state."
            Some(c) if is_whitespace_char(c) && self.is_appropriate_end_tag_token() => {
                self.switch_to(TokenizerState::BeforeAttributeName);
            }
            // "U+002F SOLIDUS (/) - If the current end tag token is an appropriate end
            // tag token, then switch to the self-closing start tag state."
            Some('/') if self.is_appropriate_end_tag_token() => {
                self.switch_to(TokenizerState::SelfClosingStartTag);
            }
            // "U+003E GREATER-THAN SIGN (>) - If the current end tag token is an
            // appropriate end tag token, then switch to the data state and emit the
            // current tag token."
            Some('>') if self.is_appropriate_end_tag_token() => {
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            // "ASCII upper alpha - Append the lowercase version of the current input
            // character to the current tag token's tag name. Append the current input
            // character to the temporary buffer."
            // "ASCII lower alpha - Append the current input character to the current
            // tag token's tag name. Append the current input character to the
            // temporary buffer."
            Some(c) if c.is_ascii_alphabetic() => {
                self.with_current_token(|t| t.append_to_tag_name(c.to_ascii_lowercase()));
                self.temporary_buffer.push(c);
            }
            // "Anything else - Emit a U+003C LESS-THAN SIGN character token, a U+002F
            // SOLIDUS character token, and a character token for each of the characters
            // in the temporary buffer. Reconsume in the text state."
            _ => {
                self.current_token = None;
                self.emit_less_than_solidus_and_temporary_buffer();
                self.reconsume_in(text_state);
            }
        }
    }

    // =========================================================================
    // Error Helpers
    // =========================================================================

    /// Record a parse error at the current input position. Tokenization continues.
    pub(super) fn parse_error(&mut self, error: ParseError) {
        let issue = ParseIssue {
            error,
            offset: self.input.offset(),
            line: self.input.line(),
        };
        debug!(
            target: "quill.html.tokenizer",
            "parse error in {} state: {issue}",
            self.state
        );
        if let Some(sink) = self.error_sink.as_mut() {
            sink.report(&issue);
        }
        self.parse_errors.push(issue);
    }
}
