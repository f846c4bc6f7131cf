//! Property tests for the tokenizer over arbitrary input.

use quickcheck_macros::quickcheck;
use quill_html::{HTMLTokenizer, Token};

#[quickcheck]
fn every_input_ends_with_exactly_one_eof(input: String) -> bool {
    let tokens: Vec<Token> = HTMLTokenizer::new(&input).collect();
    tokens.iter().filter(|t| t.is_eof()).count() == 1 && tokens.last().is_some_and(Token::is_eof)
}

#[quickcheck]
fn names_never_contain_ascii_uppercase(input: String) -> bool {
    HTMLTokenizer::new(&input).all(|token| match token {
        Token::StartTag {
            name, attributes, ..
        }
        | Token::EndTag {
            name, attributes, ..
        } => {
            !name.chars().any(|c| c.is_ascii_uppercase())
                && attributes
                    .iter()
                    .all(|a| !a.name.chars().any(|c| c.is_ascii_uppercase()))
        }
        Token::Doctype { name, .. } => name.is_none_or(|n| !n.chars().any(|c| c.is_ascii_uppercase())),
        _ => true,
    })
}

#[quickcheck]
fn no_carriage_return_survives(input: String) -> bool {
    HTMLTokenizer::new(&input).all(|token| match token {
        Token::Character { data } => data != '\r',
        Token::Comment { data } => !data.contains('\r'),
        _ => true,
    })
}

#[quickcheck]
fn attribute_names_are_unique_per_tag(input: String) -> bool {
    HTMLTokenizer::new(&input).all(|token| match token {
        Token::StartTag { attributes, .. } => attributes
            .iter()
            .enumerate()
            .all(|(i, a)| attributes[..i].iter().all(|b| b.name != a.name)),
        _ => true,
    })
}

#[quickcheck]
fn plain_text_round_trips(input: String) -> bool {
    let text: String = input
        .chars()
        .filter(|c| !matches!(c, '<' | '&' | '\r' | '\u{FEFF}'))
        .collect();
    let output: String = HTMLTokenizer::new(&text)
        .filter_map(|t| match t {
            Token::Character { data } => Some(data),
            _ => None,
        })
        .collect();
    output == text
}
