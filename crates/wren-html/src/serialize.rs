//! Writing tokens back out as HTML.
//!
//! [§ 13.3 Serializing HTML fragments](https://html.spec.whatwg.org/multipage/parsing.html#serialising-html-fragments)
//!
//! The escaping rules are those of the fragment serialization algorithm,
//! applied to a flat token stream instead of a tree. Text inside raw-text
//! elements is written as is, which requires tracking raw-text elements the
//! same way the tokenizer does.

use std::fmt::Write as _;

use crate::raw_text::RawTextMode;
use crate::token::{Attribute, Token};

/// Serialize a token stream to HTML.
///
/// Tokenizing the result yields the same tokens for any stream the
/// tokenizer produced from well-formed input.
#[must_use]
pub fn to_html<'a>(tokens: impl IntoIterator<Item = &'a Token>) -> String {
    let mut out = String::new();
    let mut raw_text = RawTextMode::new();
    for token in tokens {
        write_token(&mut out, &mut raw_text, token);
    }
    out
}

fn write_token(out: &mut String, raw_text: &mut RawTextMode, token: &Token) {
    match token {
        Token::Doctype {
            name,
            public_identifier,
            system_identifier,
            ..
        } => write_doctype(
            out,
            name.as_deref(),
            public_identifier.as_deref(),
            system_identifier.as_deref(),
        ),
        Token::StartTag {
            name,
            self_closing,
            attributes,
        } => {
            out.push('<');
            out.push_str(name);
            write_attributes(out, attributes);
            out.push_str(if *self_closing { "/>" } else { ">" });
            let _ = raw_text.enter(name);
        }
        Token::EndTag { name, .. } => {
            out.push_str("</");
            out.push_str(name);
            out.push('>');
            if raw_text.matches_end_tag(name) {
                raw_text.exit();
            }
        }
        Token::Comment { data } => {
            out.push_str("<!--");
            out.push_str(data);
            out.push_str("-->");
        }
        // "If the parent of current node is a style, script, xmp, iframe,
        // noembed, noframes, or plaintext element ... then append the value of
        // current node's data IDL attribute literally."
        Token::Text { data } => {
            if raw_text.kind().is_some_and(|kind| kind.is_literal()) {
                out.push_str(data);
            } else {
                escape_text(out, data);
            }
        }
        Token::EndOfInput => {}
    }
}

fn write_attributes(out: &mut String, attributes: &[Attribute]) {
    for attribute in attributes {
        out.push(' ');
        out.push_str(&attribute.name);
        out.push_str("=\"");
        escape_attribute(out, &attribute.value);
        out.push('"');
    }
}

fn write_doctype(
    out: &mut String,
    name: Option<&str>,
    public_identifier: Option<&str>,
    system_identifier: Option<&str>,
) {
    out.push_str("<!DOCTYPE");
    if let Some(name) = name {
        out.push(' ');
        out.push_str(name);
    }
    match (public_identifier, system_identifier) {
        (Some(public), Some(system)) => {
            let _ = write!(out, " PUBLIC \"{public}\" \"{system}\"");
        }
        (Some(public), None) => {
            let _ = write!(out, " PUBLIC \"{public}\"");
        }
        (None, Some(system)) => {
            let _ = write!(out, " SYSTEM \"{system}\"");
        }
        (None, None) => {}
    }
    out.push('>');
}

/// [§ 13.3 Escaping a string](https://html.spec.whatwg.org/multipage/parsing.html#escapingString)
///
/// "Replace any occurrence of the "&" character by the string "&amp;".
/// Replace any occurrences of the U+00A0 NO-BREAK SPACE character by the
/// string "&nbsp;". Replace any occurrences of the "<" character by the
/// string "&lt;". Replace any occurrences of the ">" character by the
/// string "&gt;"."
fn escape_text(out: &mut String, text: &str) {
    for c in text.chars() {
        escape_char(out, c);
    }
}

/// Attribute mode additionally replaces `"` by `&quot;`.
fn escape_attribute(out: &mut String, value: &str) {
    for c in value.chars() {
        if c == '"' {
            out.push_str("&quot;");
        } else {
            escape_char(out, c);
        }
    }
}

fn escape_char(out: &mut String, c: char) {
    match c {
        '&' => out.push_str("&amp;"),
        '\u{A0}' => out.push_str("&nbsp;"),
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        _ => out.push(c),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_text() {
        let mut out = String::new();
        escape_text(&mut out, "a < b && c > \u{A0}\"");
        assert_eq!(out, "a &lt; b &amp;&amp; c &gt; &nbsp;\"");
    }

    #[test]
    fn test_escape_attribute() {
        let mut out = String::new();
        escape_attribute(&mut out, "say \"hi\" & <go>");
        assert_eq!(out, "say &quot;hi&quot; &amp; &lt;go&gt;");
    }

    #[test]
    fn test_doctype_forms() {
        let doctype = |name: &str, public: Option<&str>, system: Option<&str>| Token::Doctype {
            name: Some(String::from(name)),
            public_identifier: public.map(String::from),
            system_identifier: system.map(String::from),
            force_quirks: false,
        };
        assert_eq!(to_html(&[doctype("html", None, None)]), "<!DOCTYPE html>");
        assert_eq!(
            to_html(&[doctype("html", None, Some("about:legacy-compat"))]),
            "<!DOCTYPE html SYSTEM \"about:legacy-compat\">"
        );
        assert_eq!(
            to_html(&[doctype("html", Some("-//W3C//DTD HTML 4.01//EN"), Some("x.dtd"))]),
            "<!DOCTYPE html PUBLIC \"-//W3C//DTD HTML 4.01//EN\" \"x.dtd\">"
        );
    }

    #[test]
    fn test_literal_text_in_script_only() {
        let tokens = [
            Token::start_tag("script", Vec::new()),
            Token::text("a < b"),
            Token::end_tag("script"),
            Token::text("a < b"),
        ];
        assert_eq!(to_html(&tokens), "<script>a < b</script>a &lt; b");
    }
}
