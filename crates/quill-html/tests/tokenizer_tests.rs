//! Integration tests for the HTML tokenizer.

use std::cell::RefCell;
use std::rc::Rc;

use quill_html::{
    Attribute, HTMLTokenizer, InputCursor, ParseError, ParseIssue, Token, TokenizerOptions,
    TokenizerState,
};

/// Helper to tokenize a string and return the tokens
fn tokenize(input: &str) -> Vec<Token> {
    HTMLTokenizer::new(input).collect()
}

/// Tokenize with the tokenizer switching text states by itself, the way a
/// tree builder would after `<title>`, `<style>`, `<script>` and friends.
fn tokenize_inferring(input: &str) -> Vec<Token> {
    let options = TokenizerOptions {
        infer_text_states: true,
        ..TokenizerOptions::default()
    };
    HTMLTokenizer::with_options(InputCursor::new(input), options).collect()
}

/// Tokenize starting in `state`, with `last_start_tag` as the appropriate end tag.
fn tokenize_in(state: TokenizerState, last_start_tag: Option<&str>, input: &str) -> Vec<Token> {
    let options = TokenizerOptions {
        initial_state: state,
        last_start_tag: last_start_tag.map(str::to_string),
        ..TokenizerOptions::default()
    };
    HTMLTokenizer::with_options(InputCursor::new(input), options).collect()
}

/// The parse error codes raised while tokenizing `input`.
fn errors(input: &str) -> Vec<ParseError> {
    let mut tokenizer = HTMLTokenizer::new(input);
    let _ = tokenizer.run();
    tokenizer.parse_errors().iter().map(|i| i.error).collect()
}

/// Concatenate every character token.
fn text(tokens: &[Token]) -> String {
    tokens
        .iter()
        .filter_map(|t| match t {
            Token::Character { data } => Some(*data),
            _ => None,
        })
        .collect()
}

/// Every token that is not a character token.
fn non_text(tokens: &[Token]) -> Vec<&Token> {
    tokens
        .iter()
        .filter(|t| !matches!(t, Token::Character { .. }))
        .collect()
}

fn comment(data: &str) -> Token {
    Token::Comment {
        data: data.to_string(),
    }
}

// ============================================================================
// Text and tags
// ============================================================================

#[test]
fn test_plain_text() {
    let tokens = tokenize("Hello");
    assert_eq!(tokens.len(), 6); // 5 chars + EOF
    assert!(matches!(tokens[0], Token::Character { data: 'H' }));
    assert!(matches!(tokens[4], Token::Character { data: 'o' }));
    assert!(matches!(tokens[5], Token::EndOfFile));
}

#[test]
fn test_empty_input_is_just_eof() {
    assert_eq!(tokenize(""), vec![Token::EndOfFile]);
}

#[test]
fn test_start_tag() {
    let tokens = tokenize("<div>");
    assert_eq!(tokens, vec![Token::start_tag("div", &[]), Token::EndOfFile]);
}

#[test]
fn test_end_tag() {
    let tokens = tokenize("</div>");
    assert_eq!(tokens, vec![Token::end_tag("div"), Token::EndOfFile]);
}

#[test]
fn test_self_closing_tag() {
    let tokens = tokenize("<br/>");
    match &tokens[0] {
        Token::StartTag {
            name, self_closing, ..
        } => {
            assert_eq!(name, "br");
            assert!(self_closing);
        }
        other => panic!("Expected StartTag token, got {other}"),
    }
}

#[test]
fn test_tag_names_are_lowercased() {
    let tokens = tokenize("<DiV CLASS=X></DIV>");
    assert_eq!(tokens[0], Token::start_tag("div", &[("class", "X")]));
    assert_eq!(tokens[1], Token::end_tag("div"));
}

#[test]
fn test_tag_with_text_content() {
    let tokens = tokenize("<p>Hi</p>");
    assert_eq!(tokens.len(), 5);
    assert_eq!(text(&tokens), "Hi");
    assert_eq!(tokens[3], Token::end_tag("p"));
}

#[test]
fn test_attribute_forms() {
    let tokens = tokenize(r#"<input type="text" name='n' value=v disabled>"#);
    assert_eq!(
        tokens[0],
        Token::start_tag(
            "input",
            &[("type", "text"), ("name", "n"), ("value", "v"), ("disabled", "")]
        )
    );
    assert!(errors(r#"<input type="text" name='n' value=v disabled>"#).is_empty());
}

#[test]
fn test_duplicate_attribute_first_wins() {
    let input = r#"<a href="1" href="2" id=x>"#;
    let tokens = tokenize(input);
    assert_eq!(tokens[0], Token::start_tag("a", &[("href", "1"), ("id", "x")]));
    assert_eq!(errors(input), vec![ParseError::DuplicateAttribute]);
}

#[test]
fn test_duplicate_attribute_is_case_insensitive() {
    let tokens = tokenize("<a ID=1 id=2>");
    assert_eq!(tokens[0], Token::start_tag("a", &[("id", "1")]));
}

#[test]
fn test_missing_whitespace_between_attributes() {
    let input = r#"<a x="1"y="2">"#;
    assert_eq!(tokenize(input)[0], Token::start_tag("a", &[("x", "1"), ("y", "2")]));
    assert_eq!(errors(input), vec![ParseError::MissingWhitespaceBetweenAttributes]);
}

#[test]
fn test_unexpected_characters_in_attributes() {
    assert_eq!(
        errors(r#"<a b"c=d>"#),
        vec![ParseError::UnexpectedCharacterInAttributeName]
    );
    assert_eq!(
        errors("<a b=c`d>"),
        vec![ParseError::UnexpectedCharacterInUnquotedAttributeValue]
    );
    assert_eq!(
        errors("<a =b>"),
        vec![ParseError::UnexpectedEqualsSignBeforeAttributeName]
    );
    assert_eq!(errors("<a b=>"), vec![ParseError::MissingAttributeValue]);
}

#[test]
fn test_end_tag_with_attributes_and_solidus() {
    let tokens = tokenize(r#"</p class="x">"#);
    match &tokens[0] {
        Token::EndTag {
            name, attributes, ..
        } => {
            assert_eq!(name, "p");
            assert_eq!(attributes, &vec![Attribute::new("class", "x")]);
        }
        other => panic!("Expected EndTag token, got {other}"),
    }
    assert_eq!(errors(r#"</p class="x">"#), vec![ParseError::EndTagWithAttributes]);
    assert_eq!(errors("</br/>"), vec![ParseError::EndTagWithTrailingSolidus]);
}

#[test]
fn test_solidus_inside_tag() {
    let input = "<a / b>";
    assert_eq!(tokenize(input)[0], Token::start_tag("a", &[("b", "")]));
    assert_eq!(errors(input), vec![ParseError::UnexpectedSolidusInTag]);
}

#[test]
fn test_invalid_tag_openings() {
    let tokens = tokenize("a < b");
    assert_eq!(text(&tokens), "a < b");
    assert_eq!(errors("a < b"), vec![ParseError::InvalidFirstCharacterOfTagName]);

    let tokens = tokenize("</>x");
    assert_eq!(text(&tokens), "x");
    assert_eq!(errors("</>x"), vec![ParseError::MissingEndTagName]);

    let tokens = tokenize("</ x>");
    assert_eq!(tokens[0], comment(" x"));
}

// ============================================================================
// End of input
// ============================================================================

#[test]
fn test_eof_after_less_than() {
    assert_eq!(tokenize("<"), vec![Token::new_character('<'), Token::EndOfFile]);
    assert_eq!(errors("<"), vec![ParseError::EofBeforeTagName]);
    assert_eq!(text(&tokenize("</")), "</");
}

#[test]
fn test_eof_in_tag_drops_the_tag() {
    assert_eq!(tokenize("<div"), vec![Token::EndOfFile]);
    assert_eq!(tokenize(r#"<div class="x"#), vec![Token::EndOfFile]);
    assert_eq!(errors("<div id=a"), vec![ParseError::EofInTag]);
}

#[test]
fn test_exactly_one_eof_and_fused_iterator() {
    let mut tokenizer = HTMLTokenizer::new("x");
    assert_eq!(tokenizer.next(), Some(Token::new_character('x')));
    assert_eq!(tokenizer.next(), Some(Token::EndOfFile));
    assert_eq!(tokenizer.next(), None);
    assert_eq!(tokenizer.next(), None);
    // The pull API keeps answering end-of-file.
    assert_eq!(tokenizer.next_token(), Token::EndOfFile);
}

// ============================================================================
// Comments
// ============================================================================

#[test]
fn test_comment() {
    let tokens = tokenize("<!-- hello -->");
    assert_eq!(tokens, vec![comment(" hello "), Token::EndOfFile]);
}

#[test]
fn test_empty_comments() {
    assert_eq!(tokenize("<!---->")[0], comment(""));
    assert!(errors("<!---->").is_empty());
    assert_eq!(tokenize("<!-->")[0], comment(""));
    assert_eq!(errors("<!-->"), vec![ParseError::AbruptClosingOfEmptyComment]);
    assert_eq!(errors("<!--->"), vec![ParseError::AbruptClosingOfEmptyComment]);
}

#[test]
fn test_comment_with_dashes() {
    assert_eq!(tokenize("<!--a-b--c--->")[0], comment("a-b--c-"));
}

#[test]
fn test_nested_comment() {
    let input = "<!-- <!-- x -->";
    assert_eq!(tokenize(input)[0], comment(" <!-- x "));
    assert_eq!(errors(input), vec![ParseError::NestedComment]);
}

#[test]
fn test_incorrectly_closed_comment() {
    let input = "<!--a--!>";
    assert_eq!(tokenize(input)[0], comment("a"));
    assert_eq!(errors(input), vec![ParseError::IncorrectlyClosedComment]);
}

#[test]
fn test_eof_in_comment_emits_comment() {
    let input = "<!-- abc";
    assert_eq!(tokenize(input), vec![comment(" abc"), Token::EndOfFile]);
    assert_eq!(errors(input), vec![ParseError::EofInComment]);
}

#[test]
fn test_bogus_comments() {
    assert_eq!(tokenize("<?xml?>")[0], comment("?xml?"));
    assert_eq!(
        errors("<?xml?>"),
        vec![ParseError::UnexpectedQuestionMarkInsteadOfTagName]
    );
    assert_eq!(tokenize("<!x>")[0], comment("x"));
    assert_eq!(errors("<!x>"), vec![ParseError::IncorrectlyOpenedComment]);
}

// ============================================================================
// DOCTYPE
// ============================================================================

#[test]
fn test_doctype() {
    let tokens = tokenize("<!DOCTYPE html>");
    assert_eq!(tokens.len(), 2); // DOCTYPE + EOF
    match &tokens[0] {
        Token::Doctype {
            name,
            public_identifier,
            system_identifier,
            force_quirks,
        } => {
            assert_eq!(name.as_deref(), Some("html"));
            assert_eq!(*public_identifier, None);
            assert_eq!(*system_identifier, None);
            assert!(!force_quirks);
        }
        other => panic!("Expected DOCTYPE token, got {other}"),
    }
}

#[test]
fn test_doctype_keyword_and_name_are_case_insensitive() {
    let tokens = tokenize("<!doctype HTML>");
    assert!(matches!(&tokens[0], Token::Doctype { name: Some(n), .. } if n == "html"));
}

#[test]
fn test_doctype_public_and_system_identifiers() {
    let input = r#"<!DOCTYPE html PUBLIC "-//W3C//DTD HTML 4.01//EN" 'http://www.w3.org/TR/html4/strict.dtd'>"#;
    match &tokenize(input)[0] {
        Token::Doctype {
            public_identifier,
            system_identifier,
            force_quirks,
            ..
        } => {
            assert_eq!(public_identifier.as_deref(), Some("-//W3C//DTD HTML 4.01//EN"));
            assert_eq!(
                system_identifier.as_deref(),
                Some("http://www.w3.org/TR/html4/strict.dtd")
            );
            assert!(!force_quirks);
        }
        other => panic!("Expected DOCTYPE token, got {other}"),
    }
    assert!(errors(input).is_empty());
}

#[test]
fn test_doctype_empty_identifier_is_not_missing() {
    match &tokenize(r#"<!DOCTYPE html SYSTEM "">"#)[0] {
        Token::Doctype {
            public_identifier,
            system_identifier,
            ..
        } => {
            assert_eq!(*public_identifier, None);
            assert_eq!(system_identifier.as_deref(), Some(""));
        }
        other => panic!("Expected DOCTYPE token, got {other}"),
    }
}

#[test]
fn test_doctype_missing_name() {
    let tokens = tokenize("<!DOCTYPE>");
    assert!(matches!(
        &tokens[0],
        Token::Doctype {
            name: None,
            force_quirks: true,
            ..
        }
    ));
    assert_eq!(errors("<!DOCTYPE>"), vec![ParseError::MissingDoctypeName]);
}

#[test]
fn test_doctype_eof_sets_force_quirks() {
    let tokens = tokenize("<!DOCTYPE html");
    assert!(matches!(
        &tokens[0],
        Token::Doctype { name: Some(n), force_quirks: true, .. } if n == "html"
    ));
    assert!(tokens[1].is_eof());
    assert_eq!(errors("<!DOCTYPE html"), vec![ParseError::EofInDoctype]);
}

#[test]
fn test_doctype_bogus_after_name() {
    let input = "<!DOCTYPE html nonsense>";
    assert!(matches!(&tokenize(input)[0], Token::Doctype { force_quirks: true, .. }));
    assert_eq!(
        errors(input),
        vec![ParseError::InvalidCharacterSequenceAfterDoctypeName]
    );
}

#[test]
fn test_doctype_trailing_garbage_keeps_quirks_off() {
    let input = r#"<!DOCTYPE html SYSTEM "about:legacy-compat" x>"#;
    assert!(matches!(&tokenize(input)[0], Token::Doctype { force_quirks: false, .. }));
    assert_eq!(
        errors(input),
        vec![ParseError::UnexpectedCharacterAfterDoctypeSystemIdentifier]
    );
}

#[test]
fn test_doctype_abrupt_public_identifier() {
    let input = r#"<!DOCTYPE html PUBLIC "abc>"#;
    assert!(matches!(
        &tokenize(input)[0],
        Token::Doctype { public_identifier: Some(p), force_quirks: true, .. } if p == "abc"
    ));
    assert_eq!(errors(input), vec![ParseError::AbruptDoctypePublicIdentifier]);
}

// ============================================================================
// Text states
// ============================================================================

#[test]
fn test_title_element_rcdata() {
    let tokens = tokenize_inferring("<title>a &amp; <b></title>");
    assert_eq!(tokens[0], Token::start_tag("title", &[]));
    assert_eq!(text(&tokens), "a & <b>");
    assert_eq!(
        non_text(&tokens),
        vec![&Token::start_tag("title", &[]), &Token::end_tag("title"), &Token::EndOfFile]
    );
}

#[test]
fn test_style_with_fake_tags() {
    let tokens = tokenize_inferring("<style><div>x</div>&amp;</style>");
    assert_eq!(text(&tokens), "<div>x</div>&amp;");
    assert_eq!(tokens[tokens.len() - 2], Token::end_tag("style"));
}

#[test]
fn test_textarea_requires_appropriate_end_tag() {
    let tokens = tokenize_inferring("<textarea></text></textarea >");
    assert_eq!(text(&tokens), "</text>");
    assert_eq!(tokens[tokens.len() - 2], Token::end_tag("textarea"));
}

#[test]
fn test_plaintext_never_ends() {
    let tokens = tokenize_inferring("<plaintext></plaintext>");
    assert_eq!(text(&tokens), "</plaintext>");
}

#[test]
fn test_without_inference_text_elements_are_tokenized_as_data() {
    let tokens = tokenize("<title><b></title>");
    assert_eq!(tokens[1], Token::start_tag("b", &[]));
}

#[test]
fn test_tree_builder_drives_state_switch() {
    let mut tokenizer = HTMLTokenizer::new("<title><b></title>");
    assert_eq!(tokenizer.next_token(), Token::start_tag("title", &[]));
    assert_eq!(tokenizer.last_start_tag(), Some("title"));
    tokenizer.set_state(TokenizerState::RCDATA);
    let rest: Vec<Token> = tokenizer.collect();
    assert_eq!(text(&rest), "<b>");
    assert_eq!(rest[rest.len() - 2], Token::end_tag("title"));
}

#[test]
fn test_seeded_last_start_tag() {
    let tokens = tokenize_in(TokenizerState::RCDATA, Some("textarea"), "x</textarea>");
    assert_eq!(
        tokens,
        vec![Token::new_character('x'), Token::end_tag("textarea"), Token::EndOfFile]
    );

    // With no start tag seen, no end tag is appropriate.
    let tokens = tokenize_in(TokenizerState::RCDATA, None, "</textarea>");
    assert_eq!(text(&tokens), "</textarea>");
}

#[test]
fn test_script_data_escapes() {
    let tokens = tokenize_inferring("<script><!--<script>x</script>--></script>");
    assert_eq!(text(&tokens), "<!--<script>x</script>-->");
    assert_eq!(tokens[tokens.len() - 2], Token::end_tag("script"));
}

#[test]
fn test_script_escaped_end_tag_closes_script() {
    let tokens = tokenize_inferring("<script><!-- a </script>b");
    assert_eq!(
        non_text(&tokens),
        vec![&Token::start_tag("script", &[]), &Token::end_tag("script"), &Token::EndOfFile]
    );
    assert_eq!(text(&tokens), "<!-- a b");
}

#[test]
fn test_eof_in_escaped_script() {
    let input = "<script><!--";
    let options = TokenizerOptions {
        infer_text_states: true,
        ..TokenizerOptions::default()
    };
    let mut tokenizer = HTMLTokenizer::with_options(InputCursor::new(input), options);
    let _ = tokenizer.run();
    let codes: Vec<ParseError> = tokenizer.parse_errors().iter().map(|i| i.error).collect();
    assert_eq!(codes, vec![ParseError::EofInScriptHtmlCommentLikeText]);
}

// ============================================================================
// NULL handling
// ============================================================================

#[test]
fn test_null_in_data_is_kept() {
    assert_eq!(text(&tokenize("a\0b")), "a\0b");
    assert_eq!(errors("a\0b"), vec![ParseError::UnexpectedNullCharacter]);
}

#[test]
fn test_null_in_text_states_is_replaced() {
    for state in [
        TokenizerState::RCDATA,
        TokenizerState::RAWTEXT,
        TokenizerState::ScriptData,
        TokenizerState::PLAINTEXT,
    ] {
        assert_eq!(text(&tokenize_in(state, None, "a\0")), "a\u{FFFD}", "{state}");
    }
}

#[test]
fn test_null_in_names_is_replaced() {
    assert_eq!(
        tokenize("<a\0 b\0=c\0>")[0],
        Token::start_tag("a\u{FFFD}", &[("b\u{FFFD}", "c\u{FFFD}")])
    );
}

// ============================================================================
// Character references
// ============================================================================

#[test]
fn test_bare_ampersand() {
    assert_eq!(text(&tokenize("a & b")), "a & b");
    assert!(errors("a & b").is_empty());
}

#[test]
fn test_named_character_references() {
    assert_eq!(text(&tokenize("a &amp; b")), "a & b");
    assert_eq!(text(&tokenize("&lt;div&gt;")), "<div>");
    assert_eq!(text(&tokenize("&notin;")), "\u{2209}");
    assert_eq!(text(&tokenize("&NotEqualTilde;")), "\u{2242}\u{0338}");
}

#[test]
fn test_named_reference_without_semicolon() {
    assert_eq!(text(&tokenize("&amp is ok")), "& is ok");
    assert_eq!(
        errors("&amp is ok"),
        vec![ParseError::MissingSemicolonAfterCharacterReference]
    );
}

#[test]
fn test_named_reference_longest_prefix() {
    assert_eq!(text(&tokenize("&notit;")), "\u{00AC}it;");
    assert_eq!(
        errors("&notit;"),
        vec![ParseError::MissingSemicolonAfterCharacterReference]
    );
}

#[test]
fn test_unknown_named_reference() {
    assert_eq!(text(&tokenize("&foo;")), "&foo;");
    assert_eq!(errors("&foo;"), vec![ParseError::UnknownNamedCharacterReference]);
    assert!(errors("&foo").is_empty());
}

#[test]
fn test_named_reference_in_attribute() {
    let tokens = tokenize(r#"<a href="?a=1&amp;b=2">"#);
    assert_eq!(tokens[0], Token::start_tag("a", &[("href", "?a=1&b=2")]));
}

#[test]
fn test_attribute_historical_exception() {
    let input = r#"<a href="?x=1&not=2" title="&notit" alt=&not;>"#;
    assert_eq!(
        tokenize(input)[0],
        Token::start_tag(
            "a",
            &[("href", "?x=1&not=2"), ("title", "&notit"), ("alt", "\u{00AC}")]
        )
    );
    assert!(errors(input).is_empty());
}

#[test]
fn test_numeric_character_references() {
    assert_eq!(text(&tokenize("&#65;&#x42;&#X43;")), "ABC");
    assert!(errors("&#65;&#x42;&#X43;").is_empty());
    assert_eq!(text(&tokenize("&#65")), "A");
    assert_eq!(
        errors("&#65"),
        vec![ParseError::MissingSemicolonAfterCharacterReference]
    );
}

#[test]
fn test_numeric_reference_replacements() {
    let cases: [(&str, &str, ParseError); 6] = [
        ("&#0;", "\u{FFFD}", ParseError::NullCharacterReference),
        ("&#x110000;", "\u{FFFD}", ParseError::CharacterReferenceOutsideUnicodeRange),
        ("&#99999999999999;", "\u{FFFD}", ParseError::CharacterReferenceOutsideUnicodeRange),
        ("&#xD800;", "\u{FFFD}", ParseError::SurrogateCharacterReference),
        ("&#128;", "\u{20AC}", ParseError::ControlCharacterReference),
        ("&#x81;", "\u{0081}", ParseError::ControlCharacterReference),
    ];
    for (input, expected, error) in cases {
        assert_eq!(text(&tokenize(input)), expected, "{input}");
        assert_eq!(errors(input), vec![error], "{input}");
    }
}

#[test]
fn test_numeric_reference_noncharacter_is_kept() {
    assert_eq!(text(&tokenize("&#xFFFF;")), "\u{FFFF}");
    assert_eq!(errors("&#xFFFF;"), vec![ParseError::NoncharacterCharacterReference]);
}

#[test]
fn test_numeric_reference_without_digits() {
    assert_eq!(text(&tokenize("&#;")), "&#;");
    assert_eq!(text(&tokenize("&#x;")), "&#x;");
    assert_eq!(
        errors("&#;"),
        vec![ParseError::AbsenceOfDigitsInNumericCharacterReference]
    );
}

#[test]
fn test_numeric_reference_in_attribute() {
    assert_eq!(
        tokenize("<a b='&#x41;&#66'>")[0],
        Token::start_tag("a", &[("b", "AB")])
    );
}

// ============================================================================
// CDATA
// ============================================================================

#[test]
fn test_cdata_in_html_content_is_a_bogus_comment() {
    let input = "<![CDATA[x]]>";
    assert_eq!(tokenize(input)[0], comment("[CDATA[x]]"));
    assert_eq!(errors(input), vec![ParseError::CdataInHtmlContent]);
}

#[test]
fn test_cdata_in_foreign_content() {
    let mut tokenizer = HTMLTokenizer::new("<![CDATA[a]b]]]>c");
    tokenizer.set_foreign_content(true);
    let tokens: Vec<Token> = tokenizer.by_ref().collect();
    assert_eq!(text(&tokens), "a]b]c");
    assert!(tokenizer.parse_errors().is_empty());
}

#[test]
fn test_eof_in_cdata() {
    let mut tokenizer = HTMLTokenizer::new("<![CDATA[abc");
    tokenizer.set_foreign_content(true);
    let tokens = tokenizer.run();
    assert_eq!(text(&tokens), "abc");
    assert_eq!(tokenizer.parse_errors()[0].error, ParseError::EofInCdata);
}

// ============================================================================
// Error reporting
// ============================================================================

#[test]
fn test_parse_error_positions() {
    let mut tokenizer = HTMLTokenizer::new("a\n\0");
    let _ = tokenizer.run();
    assert_eq!(
        tokenizer.parse_errors(),
        &[ParseIssue {
            error: ParseError::UnexpectedNullCharacter,
            offset: 3,
            line: 2,
        }]
    );
}

#[test]
fn test_error_sink_receives_errors_in_order() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let mut tokenizer = HTMLTokenizer::new("\0<a b b>&#0;")
        .with_error_sink(move |issue: &ParseIssue| sink.borrow_mut().push(issue.error));
    let _ = tokenizer.run();
    assert_eq!(
        *seen.borrow(),
        vec![
            ParseError::UnexpectedNullCharacter,
            ParseError::DuplicateAttribute,
            ParseError::NullCharacterReference,
        ]
    );
    assert_eq!(tokenizer.take_parse_errors().len(), 3);
    assert!(tokenizer.parse_errors().is_empty());
}

// ============================================================================
// Whole documents
// ============================================================================

#[test]
fn test_simple_html_document() {
    let html = "<!DOCTYPE html>\n<html>\n<head><title>T</title></head>\n<body class=\"main\"><p>Hi &amp; bye</p></body>\n</html>";
    let tokens = tokenize_inferring(html);
    let tags: Vec<String> = non_text(&tokens).iter().map(|t| t.to_string()).collect();
    assert_eq!(
        tags,
        vec![
            "DOCTYPE html",
            "<html>",
            "<head>",
            "<title>",
            "</title>",
            "</head>",
            "<body class=\"main\">",
            "<p>",
            "</p>",
            "</body>",
            "</html>",
            "EOF",
        ]
    );
    assert!(text(&tokens).contains("Hi & bye"));
}
