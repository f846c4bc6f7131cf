//! Code point classes from the [Infra Standard](https://infra.spec.whatwg.org/#code-points).

/// U+FFFD REPLACEMENT CHARACTER
pub const REPLACEMENT_CHARACTER: char = '\u{FFFD}';

/// U+0000 NULL
pub const NULL: char = '\0';

/// [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
///
/// The tokenizer's whitespace set: tab, LF, FF and space. CR never reaches the
/// state machine because the input stream normalizes it to LF.
#[must_use]
pub const fn is_html_whitespace(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\x0C' | ' ')
}

/// [§ 4.6 ASCII whitespace](https://infra.spec.whatwg.org/#ascii-whitespace)
///
/// "ASCII whitespace is U+0009 TAB, U+000A LF, U+000C FF, U+000D CR, or U+0020 SPACE."
#[must_use]
pub const fn is_ascii_whitespace(c: u32) -> bool {
    matches!(c, 0x09 | 0x0A | 0x0C | 0x0D | 0x20)
}

/// [§ 4.6 Surrogate](https://infra.spec.whatwg.org/#surrogate)
///
/// "A surrogate is a leading surrogate or a trailing surrogate", i.e. a code
/// point in the range U+D800 to U+DFFF, inclusive.
#[must_use]
pub const fn is_surrogate(c: u32) -> bool {
    matches!(c, 0xD800..=0xDFFF)
}

/// [§ 4.6 Noncharacter](https://infra.spec.whatwg.org/#noncharacter)
///
/// "A noncharacter is a code point that is in the range U+FDD0 to U+FDEF,
/// inclusive, or U+FFFE, U+FFFF, U+1FFFE, U+1FFFF, ... U+10FFFE, or U+10FFFF."
#[must_use]
pub const fn is_noncharacter(c: u32) -> bool {
    matches!(c, 0xFDD0..=0xFDEF) || (c <= 0x10_FFFF && (c & 0xFFFE) == 0xFFFE)
}

/// [§ 4.6 C0 control](https://infra.spec.whatwg.org/#c0-control)
///
/// "A C0 control is a code point in the range U+0000 NULL to U+001F
/// INFORMATION SEPARATOR ONE, inclusive."
#[must_use]
pub const fn is_c0_control(c: u32) -> bool {
    c <= 0x1F
}

/// [§ 4.6 Control](https://infra.spec.whatwg.org/#control)
///
/// "A control is a C0 control or a code point in the range U+007F DELETE to
/// U+009F APPLICATION PROGRAM COMMAND, inclusive."
#[must_use]
pub const fn is_control(c: u32) -> bool {
    is_c0_control(c) || matches!(c, 0x7F..=0x9F)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noncharacters() {
        assert!(is_noncharacter(0xFDD0));
        assert!(is_noncharacter(0xFFFE));
        assert!(is_noncharacter(0x10_FFFF));
        assert!(is_noncharacter(0x2_FFFE));
        assert!(!is_noncharacter(0xFFFD));
        assert!(!is_noncharacter(0x41));
    }

    #[test]
    fn test_controls() {
        assert!(is_control(0x00));
        assert!(is_control(0x9F));
        assert!(!is_control(0xA0));
        assert!(is_ascii_whitespace(0x0D));
        assert!(!is_html_whitespace('\r'));
    }
}
