//! Integration tests for token serialization.

use wren_html::serialize::to_html;
use wren_html::{Attribute, Token, tokenize};

/// Tokenize, serialize, and tokenize again.
fn round_trip(input: &str) -> (Vec<Token>, Vec<Token>) {
    let first = tokenize(input);
    let second = tokenize(&to_html(&first));
    (first, second)
}

#[test]
fn test_serialize_document() {
    let tokens = tokenize("<!DOCTYPE html><p class=intro>Hi &amp; bye</p><!-- note -->");
    assert_eq!(
        to_html(&tokens),
        "<!DOCTYPE html><p class=\"intro\">Hi &amp; bye</p><!-- note -->"
    );
}

#[test]
fn test_serialize_escapes_attribute_values() {
    let tokens = [Token::start_tag(
        "a",
        vec![Attribute::new("title", "\"quoted\" <b> & \u{A0}")],
    )];
    assert_eq!(
        to_html(&tokens),
        "<a title=\"&quot;quoted&quot; &lt;b&gt; &amp; &nbsp;\">"
    );
}

#[test]
fn test_serialize_self_closing() {
    let tokens = tokenize("<br/><img src=x />");
    assert_eq!(to_html(&tokens), "<br/><img src=\"x\"/>");
}

#[test]
fn test_serialize_raw_text_literally() {
    let tokens = tokenize("<style>a > b {}</style><title>&lt;</title><script>1 < 2</script>");
    assert_eq!(
        to_html(&tokens),
        "<style>a > b {}</style><title>&lt;</title><script>1 < 2</script>"
    );
}

#[test]
fn test_serialize_plaintext_literally() {
    let tokens = tokenize("<plaintext><b>&amp;");
    assert_eq!(to_html(&tokens), "<plaintext><b>&amp;");
}

#[test]
fn test_round_trip() {
    let inputs = [
        "<!DOCTYPE html><html><body><p id=a>One &lt; two</p></body></html>",
        "<div title='a \"b\" c'>x&nbsp;y</div>",
        "<script>if (a<b) { document.write('</div>') }</script><p>after",
        "<textarea>&lt;b&gt;</textarea>",
        "<!doctype html public \"-//W3C//DTD HTML 4.01//EN\" \"strict.dtd\">",
        "text only & more > less",
    ];
    for input in inputs {
        let (first, second) = round_trip(input);
        assert_eq!(first, second, "{input}");
    }
}
