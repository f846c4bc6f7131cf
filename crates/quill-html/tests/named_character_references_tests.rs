//! Integration tests for named character reference lookup.

use quill_html::tokenizer::named_character_references::{
    any_entity_has_prefix, longest_match, lookup_entity,
};

#[test]
fn test_lookup_common_entities() {
    assert_eq!(lookup_entity("amp;"), Some("&"));
    assert_eq!(lookup_entity("lt;"), Some("<"));
    assert_eq!(lookup_entity("gt;"), Some(">"));
    assert_eq!(lookup_entity("quot;"), Some("\""));
    assert_eq!(lookup_entity("nbsp;"), Some("\u{00A0}"));
}

#[test]
fn test_lookup_legacy_entities() {
    // Legacy entities without semicolon
    assert_eq!(lookup_entity("amp"), Some("&"));
    assert_eq!(lookup_entity("lt"), Some("<"));
    assert_eq!(lookup_entity("gt"), Some(">"));
}

#[test]
fn test_lookup_unknown_entity() {
    assert_eq!(lookup_entity("notarealentity;"), None);
    assert_eq!(lookup_entity(""), None);
}

#[test]
fn test_prefix_matching() {
    assert!(any_entity_has_prefix("a")); // amp, apos, alpha, etc.
    assert!(any_entity_has_prefix("am")); // amp
    assert!(any_entity_has_prefix("amp")); // amp, amp;
    assert!(any_entity_has_prefix("amp;")); // amp;
    assert!(!any_entity_has_prefix("ampx")); // nothing
    assert!(!any_entity_has_prefix("xyz")); // nothing
}

#[test]
fn test_lookup_multi_code_point_entities() {
    assert_eq!(lookup_entity("NotEqualTilde;"), Some("\u{2242}\u{0338}"));
    assert_eq!(lookup_entity("fjlig;"), Some("fj"));
}

#[test]
fn test_legacy_form_only_exists_for_some_entities() {
    assert_eq!(lookup_entity("not"), Some("\u{00AC}"));
    assert_eq!(lookup_entity("notin;"), Some("\u{2209}"));
    assert_eq!(lookup_entity("notin"), None);
}

#[test]
fn test_longest_match_over_a_char_source() {
    let chars: Vec<char> = "copy;right".chars().collect();
    assert_eq!(longest_match(|i| chars.get(i).copied()), Some((5, "\u{00A9}")));

    let chars: Vec<char> = "copyright".chars().collect();
    assert_eq!(longest_match(|i| chars.get(i).copied()), Some((4, "\u{00A9}")));

    let chars: Vec<char> = "qqq".chars().collect();
    assert_eq!(longest_match(|i| chars.get(i).copied()), None);
}
