//! Integration tests for named character reference lookup and decoding.

use wren_html::entities::named::{LONGEST_NAME, NAMED_CHARACTER_REFERENCES, has_prefix};
use wren_html::entities::{ReferenceContext, decode, longest_match, lookup};

/// Longest match against a complete string.
fn match_name(input: &str) -> Option<&'static str> {
    let chars: Vec<char> = input.chars().collect();
    longest_match(|i| chars.get(i).copied()).map(|m| m.name)
}

#[test]
fn test_lookup_common_entities() {
    assert_eq!(lookup("amp;"), Some("&"));
    assert_eq!(lookup("lt;"), Some("<"));
    assert_eq!(lookup("gt;"), Some(">"));
    assert_eq!(lookup("quot;"), Some("\""));
    assert_eq!(lookup("nbsp;"), Some("\u{00A0}"));
}

#[test]
fn test_lookup_legacy_entities() {
    // Legacy entities without semicolon
    assert_eq!(lookup("amp"), Some("&"));
    assert_eq!(lookup("lt"), Some("<"));
    assert_eq!(lookup("gt"), Some(">"));
    assert_eq!(lookup("eacute"), Some("\u{E9}"));
}

#[test]
fn test_lookup_unknown_entity() {
    assert_eq!(lookup("notarealentity;"), None);
    assert_eq!(lookup("apos"), None);
    assert_eq!(lookup(""), None);
}

#[test]
fn test_prefix_matching() {
    assert!(has_prefix("a"));
    assert!(has_prefix("am"));
    assert!(has_prefix("amp"));
    assert!(has_prefix("amp;"));
    assert!(!has_prefix("ampx"));
    assert!(!has_prefix("xyz"));
}

#[test]
fn test_table_is_sorted_and_bounded() {
    assert!(
        NAMED_CHARACTER_REFERENCES
            .windows(2)
            .all(|pair| pair[0].0.as_bytes() < pair[1].0.as_bytes())
    );
    assert!(
        NAMED_CHARACTER_REFERENCES
            .iter()
            .all(|(name, _)| name.len() <= LONGEST_NAME)
    );
}

#[test]
fn test_longest_match_prefers_longest_name() {
    assert_eq!(match_name("amp;x"), Some("amp;"));
    assert_eq!(match_name("ampx"), Some("amp"));
    assert_eq!(match_name("notin;"), Some("notin;"));
    assert_eq!(match_name("notit;"), Some("not"));
    assert_eq!(match_name("zzz"), None);
    assert_eq!(match_name(""), None);
}

#[test]
fn test_decode_matches_tokenizer_rules() {
    assert_eq!(decode(ReferenceContext::Text, "&copy; 2024"), "\u{A9} 2024");
    assert_eq!(decode(ReferenceContext::Text, "&copy=1"), "\u{A9}=1");
    assert_eq!(decode(ReferenceContext::Attribute, "&copy=1"), "&copy=1");
    assert_eq!(decode(ReferenceContext::Attribute, "&copy;=1"), "\u{A9}=1");
}

#[test]
fn test_html5_names() {
    assert_eq!(NAMED_CHARACTER_REFERENCES.len(), 2231);
    assert_eq!(lookup("NotEqual;"), Some("\u{2260}"));
    assert_eq!(lookup("bigstar;"), Some("\u{2605}"));
    assert_eq!(lookup("lbrace;"), Some("{"));
    assert_eq!(lookup("Tab;"), Some("\t"));
    assert_eq!(lookup("NotEqualTilde;"), Some("\u{2242}\u{338}"));
    assert_eq!(
        lookup("CounterClockwiseContourIntegral;"),
        Some("\u{2233}")
    );
    assert_eq!(LONGEST_NAME, "CounterClockwiseContourIntegral;".len());
}
