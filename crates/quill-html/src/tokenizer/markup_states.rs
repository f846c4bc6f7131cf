//! Markup declarations: comments, DOCTYPEs and CDATA sections.

use quill_common::chars::REPLACEMENT_CHARACTER;

use super::core::HTMLTokenizer;
use super::helpers::is_whitespace_char;
use super::state::TokenizerState;
use super::token::Token;
use crate::errors::ParseError;

impl HTMLTokenizer<'_> {
    // =========================================================================
    // Comments
    // =========================================================================

    /// [§ 13.2.5.41 Bogus comment state](https://html.spec.whatwg.org/multipage/parsing.html#bogus-comment-state)
    pub(super) fn handle_bogus_comment_state(&mut self) {
        match self.current_input_character {
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            // "EOF - Emit the comment. Emit an end-of-file token."
            None => self.emit_current_token_and_eof(),
            Some('\0') => {
                self.parse_error(ParseError::UnexpectedNullCharacter);
                self.with_current_token(|t| t.append_to_comment(REPLACEMENT_CHARACTER));
            }
            Some(c) => self.with_current_token(|t| t.append_to_comment(c)),
        }
    }

    /// [§ 13.2.5.42 Markup declaration open state](https://html.spec.whatwg.org/multipage/parsing.html#markup-declaration-open-state)
    ///
    /// This state looks ahead instead of consuming a character on entry.
    pub(super) fn handle_markup_declaration_open_state(&mut self) {
        // "Two U+002D HYPHEN-MINUS characters (-) - Consume those two characters,
        // create a comment token whose data is the empty string, and switch to the
        // comment start state."
        if self.next_few_characters_are("--") {
            self.consume_string("--");
            self.current_token = Some(Token::new_comment());
            self.switch_to(TokenizerState::CommentStart);
        // "ASCII case-insensitive match for the word "DOCTYPE" - Consume those
        // characters and switch to the DOCTYPE state."
        } else if self.next_few_characters_are_case_insensitive("DOCTYPE") {
            self.consume_string("DOCTYPE");
            self.switch_to(TokenizerState::DOCTYPE);
        } else if self.next_few_characters_are("[CDATA[") {
            self.consume_string("[CDATA[");
            // "If there is an adjusted current node and it is not an element in the
            // HTML namespace, then switch to the CDATA section state. Otherwise, this
            // is a cdata-in-html-content parse error. Create a comment token whose
            // data is the "[CDATA[" string. Switch to the bogus comment state."
            if self.in_foreign_content {
                self.switch_to(TokenizerState::CDATASection);
            } else {
                self.parse_error(ParseError::CdataInHtmlContent);
                let mut comment = Token::new_comment();
                comment.append_str_to_comment("[CDATA[");
                self.current_token = Some(comment);
                self.switch_to(TokenizerState::BogusComment);
            }
        } else {
            // "Anything else - This is an incorrectly-opened-comment parse error. Create
            // a comment token whose data is the empty string. Switch to the bogus comment
            // state (don't consume anything in the current state)."
            self.parse_error(ParseError::IncorrectlyOpenedComment);
            self.current_token = Some(Token::new_comment());
            self.switch_to(TokenizerState::BogusComment);
        }
    }

    /// [§ 13.2.5.43 Comment start state](https://html.spec.whatwg.org/multipage/parsing.html#comment-start-state)
    pub(super) fn handle_comment_start_state(&mut self) {
        match self.current_input_character {
            Some('-') => self.switch_to(TokenizerState::CommentStartDash),
            // "U+003E GREATER-THAN SIGN (>) - This is an abrupt-closing-of-empty-comment
            // parse error. Switch to the data state. Emit the current comment token."
            Some('>') => {
                self.parse_error(ParseError::AbruptClosingOfEmptyComment);
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            _ => self.reconsume_in(TokenizerState::Comment),
        }
    }

    /// [§ 13.2.5.44 Comment start dash state](https://html.spec.whatwg.org/multipage/parsing.html#comment-start-dash-state)
    pub(super) fn handle_comment_start_dash_state(&mut self) {
        match self.current_input_character {
            Some('-') => self.switch_to(TokenizerState::CommentEnd),
            Some('>') => {
                self.parse_error(ParseError::AbruptClosingOfEmptyComment);
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            None => self.eof_in_comment(),
            Some(_) => {
                self.with_current_token(|t| t.append_to_comment('-'));
                self.reconsume_in(TokenizerState::Comment);
            }
        }
    }

    /// [§ 13.2.5.45 Comment state](https://html.spec.whatwg.org/multipage/parsing.html#comment-state)
    pub(super) fn handle_comment_state(&mut self) {
        match self.current_input_character {
            // "U+003C LESS-THAN SIGN (<) - Append the current input character to the
            // comment token's data. Switch to the comment less-than sign state."
            Some('<') => {
                self.with_current_token(|t| t.append_to_comment('<'));
                self.switch_to(TokenizerState::CommentLessThanSign);
            }
            Some('-') => self.switch_to(TokenizerState::CommentEndDash),
            Some('\0') => {
                self.parse_error(ParseError::UnexpectedNullCharacter);
                self.with_current_token(|t| t.append_to_comment(REPLACEMENT_CHARACTER));
            }
            None => self.eof_in_comment(),
            Some(c) => self.with_current_token(|t| t.append_to_comment(c)),
        }
    }

    /// "EOF - This is an eof-in-comment parse error. Emit the current comment token.
    /// Emit an end-of-file token."
    fn eof_in_comment(&mut self) {
        self.parse_error(ParseError::EofInComment);
        self.emit_current_token_and_eof();
    }

    /// [§ 13.2.5.46 Comment less-than sign state](https://html.spec.whatwg.org/multipage/parsing.html#comment-less-than-sign-state)
    pub(super) fn handle_comment_less_than_sign_state(&mut self) {
        match self.current_input_character {
            Some('!') => {
                self.with_current_token(|t| t.append_to_comment('!'));
                self.switch_to(TokenizerState::CommentLessThanSignBang);
            }
            Some('<') => self.with_current_token(|t| t.append_to_comment('<')),
            _ => self.reconsume_in(TokenizerState::Comment),
        }
    }

    /// [§ 13.2.5.47 Comment less-than sign bang state](https://html.spec.whatwg.org/multipage/parsing.html#comment-less-than-sign-bang-state)
    pub(super) fn handle_comment_less_than_sign_bang_state(&mut self) {
        if self.current_input_character == Some('-') {
            self.switch_to(TokenizerState::CommentLessThanSignBangDash);
        } else {
            self.reconsume_in(TokenizerState::Comment);
        }
    }

    /// [§ 13.2.5.48 Comment less-than sign bang dash state](https://html.spec.whatwg.org/multipage/parsing.html#comment-less-than-sign-bang-dash-state)
    pub(super) fn handle_comment_less_than_sign_bang_dash_state(&mut self) {
        if self.current_input_character == Some('-') {
            self.switch_to(TokenizerState::CommentLessThanSignBangDashDash);
        } else {
            self.reconsume_in(TokenizerState::CommentEndDash);
        }
    }

    /// [§ 13.2.5.49 Comment less-than sign bang dash dash state](https://html.spec.whatwg.org/multipage/parsing.html#comment-less-than-sign-bang-dash-dash-state)
    pub(super) fn handle_comment_less_than_sign_bang_dash_dash_state(&mut self) {
        match self.current_input_character {
            Some('>') | None => self.reconsume_in(TokenizerState::CommentEnd),
            // "Anything else - This is a nested-comment parse error. Reconsume in the
            // comment end state."
            Some(_) => {
                self.parse_error(ParseError::NestedComment);
                self.reconsume_in(TokenizerState::CommentEnd);
            }
        }
    }

    /// [§ 13.2.5.50 Comment end dash state](https://html.spec.whatwg.org/multipage/parsing.html#comment-end-dash-state)
    pub(super) fn handle_comment_end_dash_state(&mut self) {
        match self.current_input_character {
            Some('-') => self.switch_to(TokenizerState::CommentEnd),
            None => self.eof_in_comment(),
            Some(_) => {
                self.with_current_token(|t| t.append_to_comment('-'));
                self.reconsume_in(TokenizerState::Comment);
            }
        }
    }

    /// [§ 13.2.5.51 Comment end state](https://html.spec.whatwg.org/multipage/parsing.html#comment-end-state)
    pub(super) fn handle_comment_end_state(&mut self) {
        match self.current_input_character {
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            Some('!') => self.switch_to(TokenizerState::CommentEndBang),
            // "U+002D HYPHEN-MINUS (-) - Append a U+002D HYPHEN-MINUS character (-) to the
            // comment token's data."
            Some('-') => self.with_current_token(|t| t.append_to_comment('-')),
            None => self.eof_in_comment(),
            Some(_) => {
                self.with_current_token(|t| t.append_str_to_comment("--"));
                self.reconsume_in(TokenizerState::Comment);
            }
        }
    }

    /// [§ 13.2.5.52 Comment end bang state](https://html.spec.whatwg.org/multipage/parsing.html#comment-end-bang-state)
    pub(super) fn handle_comment_end_bang_state(&mut self) {
        match self.current_input_character {
            Some('-') => {
                self.with_current_token(|t| t.append_str_to_comment("--!"));
                self.switch_to(TokenizerState::CommentEndDash);
            }
            // "U+003E GREATER-THAN SIGN (>) - This is an incorrectly-closed-comment parse
            // error. Switch to the data state. Emit the current comment token."
            Some('>') => {
                self.parse_error(ParseError::IncorrectlyClosedComment);
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            None => self.eof_in_comment(),
            Some(_) => {
                self.with_current_token(|t| t.append_str_to_comment("--!"));
                self.reconsume_in(TokenizerState::Comment);
            }
        }
    }

    // =========================================================================
    // DOCTYPE
    // =========================================================================

    /// EOF inside any DOCTYPE state after the token exists.
    ///
    /// "This is an eof-in-doctype parse error. Set the current DOCTYPE token's
    /// force-quirks flag to on. Emit the current DOCTYPE token. Emit an end-of-file token."
    fn eof_in_doctype(&mut self) {
        self.parse_error(ParseError::EofInDoctype);
        self.with_current_token(Token::set_force_quirks);
        self.emit_current_token_and_eof();
    }

    /// Emit a force-quirks DOCTYPE on `>` where an identifier was expected.
    fn abrupt_doctype_end(&mut self, error: ParseError) {
        self.parse_error(error);
        self.with_current_token(Token::set_force_quirks);
        self.switch_to(TokenizerState::Data);
        self.emit_current_token();
    }

    /// [§ 13.2.5.53 DOCTYPE state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-state)
    pub(super) fn handle_doctype_state(&mut self) {
        match self.current_input_character {
            Some(c) if is_whitespace_char(c) => {
                self.switch_to(TokenizerState::BeforeDOCTYPEName);
            }
            Some('>') => self.reconsume_in(TokenizerState::BeforeDOCTYPEName),
            // "EOF - This is an eof-in-doctype parse error. Create a new DOCTYPE token.
            // Set its force-quirks flag to on. Emit the current token. Emit an
            // end-of-file token."
            None => {
                self.current_token = Some(Token::new_doctype());
                self.eof_in_doctype();
            }
            Some(_) => {
                self.parse_error(ParseError::MissingWhitespaceBeforeDoctypeName);
                self.reconsume_in(TokenizerState::BeforeDOCTYPEName);
            }
        }
    }

    /// [§ 13.2.5.54 Before DOCTYPE name state](https://html.spec.whatwg.org/multipage/parsing.html#before-doctype-name-state)
    pub(super) fn handle_before_doctype_name_state(&mut self) {
        match self.current_input_character {
            Some(c) if is_whitespace_char(c) => {}
            Some('\0') => {
                self.parse_error(ParseError::UnexpectedNullCharacter);
                let mut doctype = Token::new_doctype();
                doctype.append_to_doctype_name(REPLACEMENT_CHARACTER);
                self.current_token = Some(doctype);
                self.switch_to(TokenizerState::DOCTYPEName);
            }
            // "U+003E GREATER-THAN SIGN (>) - This is a missing-doctype-name parse error.
            // Create a new DOCTYPE token. Set its force-quirks flag to on. Switch to the
            // data state. Emit the current token."
            Some('>') => {
                self.current_token = Some(Token::new_doctype());
                self.abrupt_doctype_end(ParseError::MissingDoctypeName);
            }
            None => {
                self.current_token = Some(Token::new_doctype());
                self.eof_in_doctype();
            }
            // "ASCII upper alpha - Create a new DOCTYPE token. Set the token's name to the
            // lowercase version of the current input character. Switch to the DOCTYPE
            // name state."
            Some(c) => {
                let mut doctype = Token::new_doctype();
                doctype.append_to_doctype_name(c.to_ascii_lowercase());
                self.current_token = Some(doctype);
                self.switch_to(TokenizerState::DOCTYPEName);
            }
        }
    }

    /// [§ 13.2.5.55 DOCTYPE name state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-name-state)
    pub(super) fn handle_doctype_name_state(&mut self) {
        match self.current_input_character {
            Some(c) if is_whitespace_char(c) => {
                self.switch_to(TokenizerState::AfterDOCTYPEName);
            }
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            Some('\0') => {
                self.parse_error(ParseError::UnexpectedNullCharacter);
                self.with_current_token(|t| t.append_to_doctype_name(REPLACEMENT_CHARACTER));
            }
            None => self.eof_in_doctype(),
            Some(c) => {
                self.with_current_token(|t| t.append_to_doctype_name(c.to_ascii_lowercase()));
            }
        }
    }

    /// [§ 13.2.5.56 After DOCTYPE name state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-name-state)
    pub(super) fn handle_after_doctype_name_state(&mut self) {
        match self.current_input_character {
            Some(c) if is_whitespace_char(c) => {}
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            None => self.eof_in_doctype(),
            Some(_) => {
                // "If the six characters starting from the current input character are an
                // ASCII case-insensitive match for the word "PUBLIC", then consume those
                // characters and switch to the after DOCTYPE public keyword state."
                // The current character was already consumed, so push it back first.
                self.input.rewind(self.current_input_character);
                if self.next_few_characters_are_case_insensitive("PUBLIC") {
                    self.consume_string("PUBLIC");
                    self.switch_to(TokenizerState::AfterDOCTYPEPublicKeyword);
                } else if self.next_few_characters_are_case_insensitive("SYSTEM") {
                    self.consume_string("SYSTEM");
                    self.switch_to(TokenizerState::AfterDOCTYPESystemKeyword);
                } else {
                    // "Otherwise, this is an invalid-character-sequence-after-doctype-name
                    // parse error. Set the current DOCTYPE token's force-quirks flag to on.
                    // Reconsume in the bogus DOCTYPE state."
                    self.parse_error(ParseError::InvalidCharacterSequenceAfterDoctypeName);
                    self.with_current_token(Token::set_force_quirks);
                    self.switch_to(TokenizerState::BogusDOCTYPE);
                }
            }
        }
    }

    /// [§ 13.2.5.57 After DOCTYPE public keyword state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-public-keyword-state)
    pub(super) fn handle_after_doctype_public_keyword_state(&mut self) {
        match self.current_input_character {
            Some(c) if is_whitespace_char(c) => {
                self.switch_to(TokenizerState::BeforeDOCTYPEPublicIdentifier);
            }
            Some(q @ ('"' | '\'')) => {
                self.parse_error(ParseError::MissingWhitespaceAfterDoctypePublicKeyword);
                self.begin_public_identifier(q);
            }
            Some('>') => self.abrupt_doctype_end(ParseError::MissingDoctypePublicIdentifier),
            None => self.eof_in_doctype(),
            Some(_) => self.bogus_doctype(ParseError::MissingQuoteBeforeDoctypePublicIdentifier),
        }
    }

    /// [§ 13.2.5.58 Before DOCTYPE public identifier state](https://html.spec.whatwg.org/multipage/parsing.html#before-doctype-public-identifier-state)
    pub(super) fn handle_before_doctype_public_identifier_state(&mut self) {
        match self.current_input_character {
            Some(c) if is_whitespace_char(c) => {}
            Some(q @ ('"' | '\'')) => self.begin_public_identifier(q),
            Some('>') => self.abrupt_doctype_end(ParseError::MissingDoctypePublicIdentifier),
            None => self.eof_in_doctype(),
            Some(_) => self.bogus_doctype(ParseError::MissingQuoteBeforeDoctypePublicIdentifier),
        }
    }

    /// "Set the current DOCTYPE token's public identifier to the empty string (not
    /// missing), then switch to the DOCTYPE public identifier (double-quoted) state."
    fn begin_public_identifier(&mut self, quote: char) {
        self.with_current_token(Token::set_public_identifier_empty);
        self.switch_to(if quote == '"' {
            TokenizerState::DOCTYPEPublicIdentifierDoubleQuoted
        } else {
            TokenizerState::DOCTYPEPublicIdentifierSingleQuoted
        });
    }

    /// "Set the current DOCTYPE token's system identifier to the empty string (not
    /// missing), then switch to the DOCTYPE system identifier (double-quoted) state."
    fn begin_system_identifier(&mut self, quote: char) {
        self.with_current_token(Token::set_system_identifier_empty);
        self.switch_to(if quote == '"' {
            TokenizerState::DOCTYPESystemIdentifierDoubleQuoted
        } else {
            TokenizerState::DOCTYPESystemIdentifierSingleQuoted
        });
    }

    /// "Set the current DOCTYPE token's force-quirks flag to on. Reconsume in the
    /// bogus DOCTYPE state."
    fn bogus_doctype(&mut self, error: ParseError) {
        self.parse_error(error);
        self.with_current_token(Token::set_force_quirks);
        self.reconsume_in(TokenizerState::BogusDOCTYPE);
    }

    /// [§ 13.2.5.59 DOCTYPE public identifier (double-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-public-identifier-(double-quoted)-state)
    /// and its single-quoted twin.
    pub(super) fn handle_doctype_public_identifier_quoted_state(&mut self, quote: char) {
        match self.current_input_character {
            Some(c) if c == quote => self.switch_to(TokenizerState::AfterDOCTYPEPublicIdentifier),
            Some('\0') => {
                self.parse_error(ParseError::UnexpectedNullCharacter);
                self.with_current_token(|t| t.append_to_public_identifier(REPLACEMENT_CHARACTER));
            }
            Some('>') => self.abrupt_doctype_end(ParseError::AbruptDoctypePublicIdentifier),
            None => self.eof_in_doctype(),
            Some(c) => self.with_current_token(|t| t.append_to_public_identifier(c)),
        }
    }

    /// [§ 13.2.5.61 After DOCTYPE public identifier state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-public-identifier-state)
    pub(super) fn handle_after_doctype_public_identifier_state(&mut self) {
        match self.current_input_character {
            Some(c) if is_whitespace_char(c) => {
                self.switch_to(TokenizerState::BetweenDOCTYPEPublicAndSystemIdentifiers);
            }
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            Some(q @ ('"' | '\'')) => {
                self.parse_error(
                    ParseError::MissingWhitespaceBetweenDoctypePublicAndSystemIdentifiers,
                );
                self.begin_system_identifier(q);
            }
            None => self.eof_in_doctype(),
            Some(_) => self.bogus_doctype(ParseError::MissingQuoteBeforeDoctypeSystemIdentifier),
        }
    }

    /// [§ 13.2.5.62 Between DOCTYPE public and system identifiers state](https://html.spec.whatwg.org/multipage/parsing.html#between-doctype-public-and-system-identifiers-state)
    pub(super) fn handle_between_doctype_public_and_system_identifiers_state(&mut self) {
        match self.current_input_character {
            Some(c) if is_whitespace_char(c) => {}
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            Some(q @ ('"' | '\'')) => self.begin_system_identifier(q),
            None => self.eof_in_doctype(),
            Some(_) => self.bogus_doctype(ParseError::MissingQuoteBeforeDoctypeSystemIdentifier),
        }
    }

    /// [§ 13.2.5.63 After DOCTYPE system keyword state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-system-keyword-state)
    pub(super) fn handle_after_doctype_system_keyword_state(&mut self) {
        match self.current_input_character {
            Some(c) if is_whitespace_char(c) => {
                self.switch_to(TokenizerState::BeforeDOCTYPESystemIdentifier);
            }
            Some(q @ ('"' | '\'')) => {
                self.parse_error(ParseError::MissingWhitespaceAfterDoctypeSystemKeyword);
                self.begin_system_identifier(q);
            }
            Some('>') => self.abrupt_doctype_end(ParseError::MissingDoctypeSystemIdentifier),
            None => self.eof_in_doctype(),
            Some(_) => self.bogus_doctype(ParseError::MissingQuoteBeforeDoctypeSystemIdentifier),
        }
    }

    /// [§ 13.2.5.64 Before DOCTYPE system identifier state](https://html.spec.whatwg.org/multipage/parsing.html#before-doctype-system-identifier-state)
    pub(super) fn handle_before_doctype_system_identifier_state(&mut self) {
        match self.current_input_character {
            Some(c) if is_whitespace_char(c) => {}
            Some(q @ ('"' | '\'')) => self.begin_system_identifier(q),
            Some('>') => self.abrupt_doctype_end(ParseError::MissingDoctypeSystemIdentifier),
            None => self.eof_in_doctype(),
            Some(_) => self.bogus_doctype(ParseError::MissingQuoteBeforeDoctypeSystemIdentifier),
        }
    }

    /// [§ 13.2.5.65 DOCTYPE system identifier (double-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-system-identifier-(double-quoted)-state)
    /// and its single-quoted twin.
    pub(super) fn handle_doctype_system_identifier_quoted_state(&mut self, quote: char) {
        match self.current_input_character {
            Some(c) if c == quote => self.switch_to(TokenizerState::AfterDOCTYPESystemIdentifier),
            Some('\0') => {
                self.parse_error(ParseError::UnexpectedNullCharacter);
                self.with_current_token(|t| t.append_to_system_identifier(REPLACEMENT_CHARACTER));
            }
            Some('>') => self.abrupt_doctype_end(ParseError::AbruptDoctypeSystemIdentifier),
            None => self.eof_in_doctype(),
            Some(c) => self.with_current_token(|t| t.append_to_system_identifier(c)),
        }
    }

    /// [§ 13.2.5.67 After DOCTYPE system identifier state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-system-identifier-state)
    pub(super) fn handle_after_doctype_system_identifier_state(&mut self) {
        match self.current_input_character {
            Some(c) if is_whitespace_char(c) => {}
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            None => self.eof_in_doctype(),
            // "Anything else - This is an
            // unexpected-character-after-doctype-system-identifier parse error. Reconsume
            // in the bogus DOCTYPE state. (This does not set the DOCTYPE token's
            // force-quirks flag to on.)"
            Some(_) => {
                self.parse_error(ParseError::UnexpectedCharacterAfterDoctypeSystemIdentifier);
                self.reconsume_in(TokenizerState::BogusDOCTYPE);
            }
        }
    }

    /// [§ 13.2.5.68 Bogus DOCTYPE state](https://html.spec.whatwg.org/multipage/parsing.html#bogus-doctype-state)
    pub(super) fn handle_bogus_doctype_state(&mut self) {
        match self.current_input_character {
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            Some('\0') => self.parse_error(ParseError::UnexpectedNullCharacter),
            // "EOF - Emit the DOCTYPE token. Emit an end-of-file token."
            None => self.emit_current_token_and_eof(),
            Some(_) => {}
        }
    }

    // =========================================================================
    // CDATA
    // =========================================================================

    /// [§ 13.2.5.69 CDATA section state](https://html.spec.whatwg.org/multipage/parsing.html#cdata-section-state)
    pub(super) fn handle_cdata_section_state(&mut self) {
        match self.current_input_character {
            Some(']') => self.switch_to(TokenizerState::CDATASectionBracket),
            None => {
                self.parse_error(ParseError::EofInCdata);
                self.emit_eof_token();
            }
            Some(c) => self.emit_character_token(c),
        }
    }

    /// [§ 13.2.5.70 CDATA section bracket state](https://html.spec.whatwg.org/multipage/parsing.html#cdata-section-bracket-state)
    pub(super) fn handle_cdata_section_bracket_state(&mut self) {
        if self.current_input_character == Some(']') {
            self.switch_to(TokenizerState::CDATASectionEnd);
        } else {
            self.emit_character_token(']');
            self.reconsume_in(TokenizerState::CDATASection);
        }
    }

    /// [§ 13.2.5.71 CDATA section end state](https://html.spec.whatwg.org/multipage/parsing.html#cdata-section-end-state)
    pub(super) fn handle_cdata_section_end_state(&mut self) {
        match self.current_input_character {
            Some(']') => self.emit_character_token(']'),
            Some('>') => self.switch_to(TokenizerState::Data),
            _ => {
                self.emit_characters("]]");
                self.reconsume_in(TokenizerState::CDATASection);
            }
        }
    }
}
