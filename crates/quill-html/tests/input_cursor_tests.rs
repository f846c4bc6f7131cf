//! Tests for the input cursor and newline normalization.

use quill_html::{HTMLTokenizer, InputCursor, Token, TokenizerOptions};

#[test]
fn test_crlf_and_lone_cr_become_lf() {
    let mut cursor = InputCursor::new("a\r\nb\rc");
    let chars: Vec<char> = std::iter::from_fn(|| cursor.next()).collect();
    assert_eq!(chars, vec!['a', '\n', 'b', '\n', 'c']);
    assert_eq!(cursor.offset(), 5);
    assert_eq!(cursor.line(), 3);
}

#[test]
fn test_peek_does_not_consume() {
    let mut cursor = InputCursor::new("abc");
    assert_eq!(cursor.peek(2), Some('c'));
    assert_eq!(cursor.peek(3), None);
    assert_eq!(cursor.peek_as_string(10), "abc");
    assert_eq!(cursor.offset(), 0);
    assert_eq!(cursor.next(), Some('a'));
}

#[test]
fn test_rewind_restores_position() {
    let mut cursor = InputCursor::new("x\ny");
    assert_eq!(cursor.next(), Some('x'));
    let newline = cursor.next();
    assert_eq!((cursor.offset(), cursor.line()), (2, 2));

    cursor.rewind(newline);
    assert_eq!((cursor.offset(), cursor.line()), (1, 1));
    assert_eq!(cursor.next(), Some('\n'));

    // End of input is never pushed back.
    cursor.skip(5);
    cursor.rewind(None);
    assert!(cursor.is_at_end());
    assert_eq!(cursor.next(), None);
}

#[test]
fn test_streaming_source() {
    let source = "<p>\r\n</p>".chars().collect::<Vec<_>>().into_iter();
    let tokens: Vec<Token> =
        HTMLTokenizer::with_options(InputCursor::from_chars(source), TokenizerOptions::default())
            .collect();
    assert_eq!(
        tokens,
        vec![
            Token::start_tag("p", &[]),
            Token::new_character('\n'),
            Token::end_tag("p"),
            Token::EndOfFile,
        ]
    );
}

#[test]
fn test_byte_order_mark() {
    let tokens: Vec<Token> = HTMLTokenizer::new("\u{FEFF}a").collect();
    assert_eq!(tokens, vec![Token::new_character('a'), Token::EndOfFile]);

    let options = TokenizerOptions {
        discard_bom: false,
        ..TokenizerOptions::default()
    };
    let tokens: Vec<Token> =
        HTMLTokenizer::with_options(InputCursor::new("\u{FEFF}a"), options).collect();
    assert_eq!(tokens[0], Token::new_character('\u{FEFF}'));

    // Only a leading mark is dropped.
    let mut cursor = InputCursor::new("a\u{FEFF}");
    assert_eq!(cursor.next(), Some('a'));
    assert!(!cursor.skip_bom());
}
