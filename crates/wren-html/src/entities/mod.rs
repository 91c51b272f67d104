//! Character reference decoding.
//!
//! [§ 13.2.5.72 Character reference state](https://html.spec.whatwg.org/multipage/parsing.html#character-reference-state)
//!
//! The tokenizer resolves references itself as it reads; the [`decode`]
//! function applies the same rules to a string that has already been
//! extracted, such as an attribute value taken from a token.

pub mod named;
pub mod numeric;

use std::borrow::Cow;

pub use named::{NamedMatch, longest_match, lookup};
pub use numeric::resolve;

/// Where a character reference appears. Legacy references without a trailing
/// semicolon are treated differently in attribute values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceContext {
    /// Text content (Data and RCDATA).
    Text,
    /// An attribute value.
    Attribute,
}

impl ReferenceContext {
    /// [§ 13.2.5.73 Named character reference state](https://html.spec.whatwg.org/multipage/parsing.html#named-character-reference-state)
    ///
    /// "If the character reference was consumed as part of an attribute, and
    /// the last character matched is not a U+003B SEMICOLON character (;), and
    /// the next input character is either a U+003D EQUALS SIGN character (=)
    /// or an ASCII alphanumeric, then, for historical reasons, flush code
    /// points consumed as a character reference and switch to the return state."
    ///
    /// Returns true if the match must be withdrawn and the text kept as is.
    #[must_use]
    pub fn withdraws(self, matched: &NamedMatch, next: Option<char>) -> bool {
        self == Self::Attribute
            && !matched.is_terminated()
            && next.is_some_and(|c| c == '=' || c.is_ascii_alphanumeric())
    }
}

/// Decode every character reference in `text`.
///
/// Unknown references and bare ampersands are kept literally. Returns the
/// input unchanged (and unallocated) when it contains no `&`.
#[must_use]
pub fn decode(context: ReferenceContext, text: &str) -> Cow<'_, str> {
    if !text.contains('&') {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let after = &rest[amp + 1..];
        if let Some(consumed) = decode_reference(context, after, &mut out) {
            rest = &after[consumed..];
        } else {
            out.push('&');
            rest = after;
        }
    }
    out.push_str(rest);
    Cow::Owned(out)
}

/// Decode the reference at the start of `after` (the text following `&`)
/// into `out`, returning how many bytes of `after` it used.
fn decode_reference(context: ReferenceContext, after: &str, out: &mut String) -> Option<usize> {
    let bytes = after.as_bytes();
    if bytes.first() == Some(&b'#') {
        let (radix, prefix) = match bytes.get(1) {
            Some(b'x' | b'X') => (16, 2),
            _ => (10, 1),
        };
        let digits = bytes[prefix..]
            .iter()
            .take_while(|b| char::from(**b).is_digit(radix))
            .count();
        if digits == 0 {
            return None;
        }
        let code = bytes[prefix..prefix + digits]
            .iter()
            .filter_map(|b| char::from(*b).to_digit(radix))
            .fold(0, |code, digit| numeric::accumulate(code, radix, digit));
        out.push(resolve(code).0);
        let terminated = bytes.get(prefix + digits) == Some(&b';');
        return Some(prefix + digits + usize::from(terminated));
    }

    let matched = longest_match(|i| bytes.get(i).map(|b| char::from(*b)))?;
    let next = bytes.get(matched.len()).map(|b| char::from(*b));
    if context.withdraws(&matched, next) {
        return None;
    }
    out.push_str(matched.value);
    Some(matched.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_text_context() {
        assert_eq!(decode(ReferenceContext::Text, "a &amp; b"), "a & b");
        assert_eq!(decode(ReferenceContext::Text, "&ampnbsp;"), "&nbsp;");
        assert_eq!(decode(ReferenceContext::Text, "&lt;p&gt;"), "<p>");
        assert_eq!(decode(ReferenceContext::Text, "&notit;"), "\u{AC}it;");
    }

    #[test]
    fn test_decode_attribute_withdrawal() {
        assert_eq!(decode(ReferenceContext::Attribute, "&ampnbsp;"), "&ampnbsp;");
        assert_eq!(decode(ReferenceContext::Attribute, "?a=1&copy=2"), "?a=1&copy=2");
        assert_eq!(decode(ReferenceContext::Attribute, "&copy 2024"), "\u{A9} 2024");
        assert_eq!(decode(ReferenceContext::Attribute, "&amp;x"), "&x");
    }

    #[test]
    fn test_decode_numeric() {
        assert_eq!(decode(ReferenceContext::Text, "&#65;&#x42;&#X43"), "ABC");
        assert_eq!(decode(ReferenceContext::Text, "&#128;"), "\u{20AC}");
        assert_eq!(decode(ReferenceContext::Text, "&#0;"), "\u{FFFD}");
        assert_eq!(decode(ReferenceContext::Text, "&#xD800;"), "\u{FFFD}");
        assert_eq!(decode(ReferenceContext::Text, "&#;&#x;"), "&#;&#x;");
    }

    #[test]
    fn test_decode_passthrough() {
        assert!(matches!(
            decode(ReferenceContext::Text, "plain"),
            Cow::Borrowed("plain")
        ));
        assert_eq!(decode(ReferenceContext::Text, "a & b &"), "a & b &");
        assert_eq!(decode(ReferenceContext::Text, "&bogus;"), "&bogus;");
        assert_eq!(decode(ReferenceContext::Text, "caf\u{E9} &eacute;"), "caf\u{E9} \u{E9}");
    }
}
