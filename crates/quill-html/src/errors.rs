//! Tokenizer parse errors.
//!
//! [§ 13.2.2 Parse errors](https://html.spec.whatwg.org/multipage/parsing.html#parse-errors)
//!
//! Parse errors never stop tokenization. Each one is recorded with its input
//! position, logged at debug level and handed to an optional [`ParseErrorSink`].

use strum_macros::{Display, IntoStaticStr};

/// The tokenizer-level parse error codes.
///
/// `Display` yields the standard kebab-case code, e.g. `eof-in-tag`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
#[allow(missing_docs)]
pub enum ParseError {
    AbruptClosingOfEmptyComment,
    AbruptDoctypePublicIdentifier,
    AbruptDoctypeSystemIdentifier,
    AbsenceOfDigitsInNumericCharacterReference,
    CdataInHtmlContent,
    CharacterReferenceOutsideUnicodeRange,
    ControlCharacterReference,
    DuplicateAttribute,
    EndTagWithAttributes,
    EndTagWithTrailingSolidus,
    EofBeforeTagName,
    EofInCdata,
    EofInComment,
    EofInDoctype,
    EofInScriptHtmlCommentLikeText,
    EofInTag,
    IncorrectlyClosedComment,
    IncorrectlyOpenedComment,
    InvalidCharacterSequenceAfterDoctypeName,
    InvalidFirstCharacterOfTagName,
    MissingAttributeValue,
    MissingDoctypeName,
    MissingDoctypePublicIdentifier,
    MissingDoctypeSystemIdentifier,
    MissingEndTagName,
    MissingQuoteBeforeDoctypePublicIdentifier,
    MissingQuoteBeforeDoctypeSystemIdentifier,
    MissingSemicolonAfterCharacterReference,
    MissingWhitespaceAfterDoctypePublicKeyword,
    MissingWhitespaceAfterDoctypeSystemKeyword,
    MissingWhitespaceBeforeDoctypeName,
    MissingWhitespaceBetweenAttributes,
    MissingWhitespaceBetweenDoctypePublicAndSystemIdentifiers,
    NestedComment,
    NoncharacterCharacterReference,
    NullCharacterReference,
    SurrogateCharacterReference,
    UnexpectedCharacterAfterDoctypeSystemIdentifier,
    UnexpectedCharacterInAttributeName,
    UnexpectedCharacterInUnquotedAttributeValue,
    UnexpectedEqualsSignBeforeAttributeName,
    UnexpectedNullCharacter,
    UnexpectedQuestionMarkInsteadOfTagName,
    UnexpectedSolidusInTag,
    UnknownNamedCharacterReference,
}

/// A parse error together with where in the input it was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseIssue {
    /// The error code.
    pub error: ParseError,
    /// Characters consumed (after newline normalization) when the error was raised.
    pub offset: usize,
    /// 1-based line of the input position.
    pub line: usize,
}

impl std::fmt::Display for ParseIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at line {} (offset {})", self.error, self.line, self.offset)
    }
}

/// Receives parse errors as the tokenizer raises them.
pub trait ParseErrorSink {
    /// Called once per parse error, in input order.
    fn report(&mut self, issue: &ParseIssue);
}

impl<F: FnMut(&ParseIssue)> ParseErrorSink for F {
    fn report(&mut self, issue: &ParseIssue) {
        self(issue);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_kebab_case() {
        assert_eq!(ParseError::EofInTag.to_string(), "eof-in-tag");
        assert_eq!(
            ParseError::CdataInHtmlContent.to_string(),
            "cdata-in-html-content"
        );
        assert_eq!(
            ParseError::MissingWhitespaceBetweenDoctypePublicAndSystemIdentifiers.to_string(),
            "missing-whitespace-between-doctype-public-and-system-identifiers"
        );
        let code: &'static str = ParseError::UnexpectedNullCharacter.into();
        assert_eq!(code, "unexpected-null-character");
    }

    #[test]
    fn test_issue_display() {
        let issue = ParseIssue {
            error: ParseError::DuplicateAttribute,
            offset: 12,
            line: 2,
        };
        assert_eq!(issue.to_string(), "duplicate-attribute at line 2 (offset 12)");
    }
}
