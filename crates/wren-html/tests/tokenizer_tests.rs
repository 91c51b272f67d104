//! Integration tests for the HTML tokenizer.

use wren_html::{Attribute, HTMLTokenizer, ParseErrorKind, StringSource, Token, TokenizerState};

/// Helper to tokenize a string and return the tokens
fn tokenize(input: &str) -> Vec<Token> {
    HTMLTokenizer::new(input).run()
}

/// Helper to tokenize a string and return the tokens and the parse error kinds
fn tokenize_with_errors(input: &str) -> (Vec<Token>, Vec<ParseErrorKind>) {
    let mut tokenizer = HTMLTokenizer::new(input);
    let tokens = tokenizer.run();
    let errors = tokenizer.errors().iter().map(|error| error.kind).collect();
    (tokens, errors)
}

#[test]
fn test_plain_text() {
    let tokens = tokenize("Hello");
    assert_eq!(tokens, vec![Token::text("Hello"), Token::EndOfInput]);
}

#[test]
fn test_empty_input() {
    assert_eq!(tokenize(""), vec![Token::EndOfInput]);
}

#[test]
fn test_doctype() {
    let tokens = tokenize("<!DOCTYPE html>");
    assert_eq!(tokens.len(), 2);
    match &tokens[0] {
        Token::Doctype {
            name,
            public_identifier,
            system_identifier,
            force_quirks,
        } => {
            assert_eq!(name.as_deref(), Some("html"));
            assert!(public_identifier.is_none());
            assert!(system_identifier.is_none());
            assert!(!force_quirks);
        }
        _ => panic!("Expected DOCTYPE token"),
    }
}

#[test]
fn test_doctype_with_identifiers() {
    let tokens = tokenize(
        r#"<!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 4.01//EN" 'http://www.w3.org/TR/html4/strict.dtd'>"#,
    );
    match &tokens[0] {
        Token::Doctype {
            name,
            public_identifier,
            system_identifier,
            force_quirks,
        } => {
            assert_eq!(name.as_deref(), Some("html"));
            assert_eq!(public_identifier.as_deref(), Some("-//W3C//DTD HTML 4.01//EN"));
            assert_eq!(
                system_identifier.as_deref(),
                Some("http://www.w3.org/TR/html4/strict.dtd")
            );
            assert!(!force_quirks);
        }
        _ => panic!("Expected DOCTYPE token"),
    }
}

#[test]
fn test_doctype_system_keyword() {
    let tokens = tokenize(r#"<!doctype html system "about:legacy-compat">"#);
    match &tokens[0] {
        Token::Doctype {
            public_identifier,
            system_identifier,
            ..
        } => {
            assert!(public_identifier.is_none());
            assert_eq!(system_identifier.as_deref(), Some("about:legacy-compat"));
        }
        _ => panic!("Expected DOCTYPE token"),
    }
}

#[test]
fn test_doctype_missing_name_forces_quirks() {
    let (tokens, errors) = tokenize_with_errors("<!DOCTYPE>");
    assert!(matches!(
        &tokens[0],
        Token::Doctype { name: None, force_quirks: true, .. }
    ));
    assert_eq!(errors, vec![ParseErrorKind::MissingDoctypeName]);
}

#[test]
fn test_doctype_bogus_keyword() {
    let (tokens, errors) = tokenize_with_errors("<!DOCTYPE html bogus><p>");
    assert!(matches!(
        &tokens[0],
        Token::Doctype { force_quirks: true, .. }
    ));
    assert!(matches!(&tokens[1], Token::StartTag { name, .. } if name == "p"));
    assert_eq!(
        errors,
        vec![ParseErrorKind::InvalidCharacterSequenceAfterDoctypeName]
    );
}

#[test]
fn test_start_tag() {
    let tokens = tokenize("<DIV>");
    assert_eq!(tokens, vec![Token::start_tag("div", Vec::new()), Token::EndOfInput]);
}

#[test]
fn test_end_tag() {
    let tokens = tokenize("</div>");
    assert_eq!(tokens, vec![Token::end_tag("div"), Token::EndOfInput]);
}

#[test]
fn test_self_closing_tag() {
    let tokens = tokenize("<br/>");
    assert_eq!(tokens.len(), 2);
    match &tokens[0] {
        Token::StartTag {
            name, self_closing, ..
        } => {
            assert_eq!(name, "br");
            assert!(self_closing);
        }
        _ => panic!("Expected self-closing StartTag token"),
    }
}

#[test]
fn test_comment() {
    let tokens = tokenize("<!-- hello -->");
    assert_eq!(tokens, vec![Token::comment(" hello "), Token::EndOfInput]);
}

#[test]
fn test_comment_edge_cases() {
    let (tokens, errors) = tokenize_with_errors("<!---->x<!-->y<!--a--!>");
    assert_eq!(
        tokens,
        vec![
            Token::comment(""),
            Token::text("x"),
            Token::comment(""),
            Token::text("y"),
            Token::comment("a"),
            Token::EndOfInput,
        ]
    );
    assert_eq!(
        errors,
        vec![
            ParseErrorKind::AbruptClosingOfEmptyComment,
            ParseErrorKind::IncorrectlyClosedComment,
        ]
    );
}

#[test]
fn test_attribute_double_quoted() {
    let tokens = tokenize(r#"<div class="foo">"#);
    match &tokens[0] {
        Token::StartTag {
            name, attributes, ..
        } => {
            assert_eq!(name, "div");
            assert_eq!(attributes.len(), 1);
            assert_eq!(attributes[0].name, "class");
            assert_eq!(attributes[0].value, "foo");
        }
        _ => panic!("Expected StartTag token"),
    }
}

#[test]
fn test_attribute_single_quoted() {
    let tokens = tokenize("<div class='bar'>");
    assert_eq!(tokens[0].attribute("class"), Some("bar"));
}

#[test]
fn test_attribute_unquoted() {
    let tokens = tokenize("<div class=baz>");
    assert_eq!(tokens[0].attribute("class"), Some("baz"));
}

#[test]
fn test_boolean_attribute() {
    let tokens = tokenize("<input disabled>");
    assert_eq!(
        tokens[0],
        Token::start_tag("input", vec![Attribute::new("disabled", "")])
    );
}

#[test]
fn test_multiple_attributes() {
    let tokens = tokenize(r#"<input TYPE="text" id="name" disabled>"#);
    match &tokens[0] {
        Token::StartTag {
            name, attributes, ..
        } => {
            assert_eq!(name, "input");
            assert_eq!(
                attributes,
                &vec![
                    Attribute::new("type", "text"),
                    Attribute::new("id", "name"),
                    Attribute::new("disabled", ""),
                ]
            );
        }
        _ => panic!("Expected StartTag token"),
    }
}

#[test]
fn test_duplicate_attribute_first_wins() {
    let (tokens, errors) = tokenize_with_errors(r#"<div id="a" ID="b" class=c>"#);
    assert_eq!(
        tokens[0],
        Token::start_tag(
            "div",
            vec![Attribute::new("id", "a"), Attribute::new("class", "c")]
        )
    );
    assert_eq!(errors, vec![ParseErrorKind::DuplicateAttribute]);
}

#[test]
fn test_duplicate_attribute_reported_where_name_ends() {
    let mut tokenizer = HTMLTokenizer::new("<a x=1 x=2>");
    let tokens = tokenizer.run();
    assert_eq!(
        tokens[0],
        Token::start_tag("a", vec![Attribute::new("x", "1")])
    );
    let errors = tokenizer.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, ParseErrorKind::DuplicateAttribute);
    // The "=" that ends the second name.
    assert_eq!(errors[0].position.offset, 8);
    assert_eq!(errors[0].position.column, 9);

    // A duplicate cut off by the end of input is still reported once.
    let (tokens, errors) = tokenize_with_errors("<a x x");
    assert_eq!(tokens[0], Token::start_tag("a", vec![Attribute::new("x", "")]));
    assert_eq!(
        errors,
        vec![ParseErrorKind::DuplicateAttribute, ParseErrorKind::EofInTag]
    );
}

#[test]
fn test_missing_whitespace_between_attributes() {
    let (tokens, errors) = tokenize_with_errors(r#"<a x="1"y="2">"#);
    assert_eq!(tokens[0].attribute("x"), Some("1"));
    assert_eq!(tokens[0].attribute("y"), Some("2"));
    assert_eq!(errors, vec![ParseErrorKind::MissingWhitespaceBetweenAttributes]);
}

#[test]
fn test_end_tag_with_attributes() {
    let (tokens, errors) = tokenize_with_errors(r#"</div class="x"/>"#);
    assert!(matches!(&tokens[0], Token::EndTag { name, self_closing: true, .. } if name == "div"));
    assert_eq!(
        errors,
        vec![
            ParseErrorKind::EndTagWithAttributes,
            ParseErrorKind::EndTagWithTrailingSolidus,
        ]
    );
}

#[test]
fn test_tag_with_text_content() {
    let tokens = tokenize("<p>Hi</p>");
    assert_eq!(
        tokens,
        vec![
            Token::start_tag("p", Vec::new()),
            Token::text("Hi"),
            Token::end_tag("p"),
            Token::EndOfInput,
        ]
    );
}

#[test]
fn test_simple_html_document() {
    let html = r#"<!DOCTYPE html>
<html>
<head><title>Test</title></head>
<body>Hello</body>
</html>"#;
    let tokens = tokenize(html);

    assert!(matches!(&tokens[0], Token::Doctype { name: Some(n), .. } if n == "html"));
    assert_eq!(tokens.last(), Some(&Token::EndOfInput));

    let names: Vec<&str> = tokens.iter().filter_map(Token::tag_name).collect();
    assert_eq!(
        names,
        vec!["html", "head", "title", "title", "head", "body", "body", "html"]
    );
}

#[test]
fn test_style_element_rawtext() {
    let tokens = tokenize("<style>p > a { color: red; }</style>");
    assert_eq!(
        tokens,
        vec![
            Token::start_tag("style", Vec::new()),
            Token::text("p > a { color: red; }"),
            Token::end_tag("style"),
            Token::EndOfInput,
        ]
    );
}

#[test]
fn test_style_with_fake_tags() {
    let tokens = tokenize("<style><div>&amp;</div></style>");
    assert_eq!(tokens[1], Token::text("<div>&amp;</div>"));
    assert_eq!(tokens[2], Token::end_tag("style"));
}

#[test]
fn test_title_element_rcdata() {
    let tokens = tokenize("<title>a &amp; <b></title>");
    assert_eq!(
        tokens,
        vec![
            Token::start_tag("title", Vec::new()),
            Token::text("a & <b>"),
            Token::end_tag("title"),
            Token::EndOfInput,
        ]
    );
}

#[test]
fn test_textarea_with_wrong_end_tag() {
    let tokens = tokenize("<textarea></div></TEXTAREA>");
    assert_eq!(tokens[1], Token::text("</div>"));
    assert_eq!(tokens[2], Token::end_tag("textarea"));
}

#[test]
fn test_xmp_and_iframe_are_rawtext() {
    for element in ["xmp", "iframe", "noembed", "noframes"] {
        let tokens = tokenize(&format!("<{element}><b>x</b></{element}>"));
        assert_eq!(tokens[1], Token::text("<b>x</b>"), "{element}");
        assert_eq!(tokens[2], Token::end_tag(element), "{element}");
    }
}

#[test]
fn test_raw_text_element_follows_tags() {
    let mut tokenizer = HTMLTokenizer::new("<TITLE>a</title><p>");
    assert_eq!(tokenizer.raw_text_element(), None);
    assert_eq!(tokenizer.next_token(), Token::start_tag("title", vec![]));
    assert_eq!(tokenizer.raw_text_element(), Some("title"));
    let _ = tokenizer.run();
    assert_eq!(tokenizer.raw_text_element(), None);
}

#[test]
fn test_script_with_wrong_end_tag() {
    let tokens = tokenize("<script>foo</badtag></script>");
    assert_eq!(
        tokens,
        vec![
            Token::start_tag("script", Vec::new()),
            Token::text("foo</badtag>"),
            Token::end_tag("script"),
            Token::EndOfInput,
        ]
    );
}

#[test]
fn test_script_does_not_decode_references() {
    let tokens = tokenize("<script>if (a < b && c) x = '&lt;';</script>");
    assert_eq!(tokens[1], Token::text("if (a < b && c) x = '&lt;';"));
}

#[test]
fn test_script_double_escaped() {
    let tokens = tokenize("<script><!--<script>x</script>--></script><p>");
    assert_eq!(
        tokens,
        vec![
            Token::start_tag("script", Vec::new()),
            Token::text("<!--<script>x</script>-->"),
            Token::end_tag("script"),
            Token::start_tag("p", Vec::new()),
            Token::EndOfInput,
        ]
    );
}

#[test]
fn test_script_escaped_end_tag() {
    let tokens = tokenize("<script><!-- x </script>y");
    assert_eq!(tokens[1], Token::text("<!-- x "));
    assert_eq!(tokens[2], Token::end_tag("script"));
    assert_eq!(tokens[3], Token::text("y"));
}

#[test]
fn test_script_eof_in_comment_like_text() {
    let (tokens, errors) = tokenize_with_errors("<script><!-- x");
    assert_eq!(tokens[1], Token::text("<!-- x"));
    assert_eq!(errors, vec![ParseErrorKind::EofInScriptHtmlCommentLikeText]);
}

#[test]
fn test_plaintext_never_ends() {
    let tokens = tokenize("<plaintext></plaintext><b>&amp;");
    assert_eq!(
        tokens,
        vec![
            Token::start_tag("plaintext", Vec::new()),
            Token::text("</plaintext><b>&amp;"),
            Token::EndOfInput,
        ]
    );
}

#[test]
fn test_character_reference_bare_ampersand() {
    let (tokens, errors) = tokenize_with_errors("a & b &");
    assert_eq!(tokens, vec![Token::text("a & b &"), Token::EndOfInput]);
    assert!(errors.is_empty());
}

#[test]
fn test_named_character_reference_amp() {
    let (tokens, errors) = tokenize_with_errors("&amp;");
    assert_eq!(tokens, vec![Token::text("&"), Token::EndOfInput]);
    assert!(errors.is_empty());
}

#[test]
fn test_named_character_reference_lt_gt() {
    let tokens = tokenize("&lt;div&gt;");
    assert_eq!(tokens[0], Token::text("<div>"));
}

#[test]
fn test_named_character_reference_without_semicolon() {
    let (tokens, errors) = tokenize_with_errors("&ampnbsp;");
    assert_eq!(tokens[0], Token::text("&nbsp;"));
    assert_eq!(
        errors,
        vec![ParseErrorKind::MissingSemicolonAfterCharacterReference]
    );
}

#[test]
fn test_named_character_reference_longest_prefix() {
    let tokens = tokenize("&notit; &notin;");
    assert_eq!(tokens[0], Token::text("\u{AC}it; \u{2209}"));
}

#[test]
fn test_named_character_reference_unknown() {
    let (tokens, errors) = tokenize_with_errors("&bogus; &zzz");
    assert_eq!(tokens[0], Token::text("&bogus; &zzz"));
    assert_eq!(errors, vec![ParseErrorKind::UnknownNamedCharacterReference]);
}

#[test]
fn test_named_character_reference_html5_names() {
    let (tokens, errors) =
        tokenize_with_errors("&check; &rarr; &NotEqual; &bigstar; &lbrace; &Tab;");
    assert_eq!(
        tokens[0],
        Token::text("\u{2713} \u{2192} \u{2260} \u{2605} { \t")
    );
    assert!(errors.is_empty());
}

#[test]
fn test_named_character_reference_in_attribute() {
    let tokens = tokenize(r#"<a title="&lt;x&gt;" alt='&amp;'>"#);
    assert_eq!(tokens[0].attribute("title"), Some("<x>"));
    assert_eq!(tokens[0].attribute("alt"), Some("&"));
}

#[test]
fn test_legacy_reference_withdrawn_in_attribute() {
    let (tokens, errors) = tokenize_with_errors(r#"<a href="?a=1&copy=2" title="&ampnbsp;">"#);
    assert_eq!(tokens[0].attribute("href"), Some("?a=1&copy=2"));
    assert_eq!(tokens[0].attribute("title"), Some("&ampnbsp;"));
    assert!(errors.is_empty());
}

#[test]
fn test_legacy_reference_accepted_in_unquoted_attribute() {
    let tokens = tokenize("<a title=&copy>");
    assert_eq!(tokens[0].attribute("title"), Some("\u{A9}"));
}

#[test]
fn test_numeric_character_references() {
    let (tokens, errors) = tokenize_with_errors("&#65;&#x42;&#X43;");
    assert_eq!(tokens[0], Token::text("ABC"));
    assert!(errors.is_empty());
}

#[test]
fn test_numeric_character_reference_errors() {
    let cases = [
        ("&#0;", "\u{FFFD}", ParseErrorKind::NullCharacterReference),
        ("&#xD800;", "\u{FFFD}", ParseErrorKind::SurrogateCharacterReference),
        (
            "&#x110000;",
            "\u{FFFD}",
            ParseErrorKind::CharacterReferenceOutsideUnicodeRange,
        ),
        (
            "&#99999999999999999999;",
            "\u{FFFD}",
            ParseErrorKind::CharacterReferenceOutsideUnicodeRange,
        ),
        ("&#xFFFF;", "\u{FFFD}", ParseErrorKind::NoncharacterCharacterReference),
        ("&#128;", "\u{20AC}", ParseErrorKind::ControlCharacterReference),
        ("&#65", "A", ParseErrorKind::MissingSemicolonAfterCharacterReference),
        (
            "&#;",
            "&#;",
            ParseErrorKind::AbsenceOfDigitsInNumericCharacterReference,
        ),
        (
            "&#xg;",
            "&#xg;",
            ParseErrorKind::AbsenceOfDigitsInNumericCharacterReference,
        ),
    ];
    for (input, expected, error) in cases {
        let (tokens, errors) = tokenize_with_errors(input);
        assert_eq!(tokens[0], Token::text(expected), "{input}");
        assert_eq!(errors, vec![error], "{input}");
    }
}

#[test]
fn test_null_character_in_text() {
    let (tokens, errors) = tokenize_with_errors("a\0b");
    assert_eq!(tokens, vec![Token::text("a\u{FFFD}b"), Token::EndOfInput]);
    assert_eq!(errors, vec![ParseErrorKind::UnexpectedNullCharacter]);
}

#[test]
fn test_null_character_in_tag_name_and_attribute() {
    let (tokens, errors) = tokenize_with_errors("<a\0 b\0=\"\0\">");
    assert_eq!(
        tokens[0],
        Token::start_tag("a\u{FFFD}", vec![Attribute::new("b\u{FFFD}", "\u{FFFD}")])
    );
    assert_eq!(errors.len(), 3);
}

#[test]
fn test_truncated_tag() {
    let (tokens, errors) = tokenize_with_errors("<div");
    assert_eq!(tokens, vec![Token::start_tag("div", Vec::new()), Token::EndOfInput]);
    assert_eq!(errors, vec![ParseErrorKind::EofInTag]);
}

#[test]
fn test_truncated_attribute_value() {
    let (tokens, errors) = tokenize_with_errors(r#"<div class="x"#);
    assert_eq!(
        tokens,
        vec![
            Token::start_tag("div", vec![Attribute::new("class", "x")]),
            Token::EndOfInput,
        ]
    );
    assert_eq!(errors, vec![ParseErrorKind::EofInTag]);
}

#[test]
fn test_truncated_comment() {
    let (tokens, errors) = tokenize_with_errors("<!-- abc");
    assert_eq!(tokens, vec![Token::comment(" abc"), Token::EndOfInput]);
    assert_eq!(errors, vec![ParseErrorKind::EofInComment]);
}

#[test]
fn test_truncated_doctype() {
    let (tokens, errors) = tokenize_with_errors("<!DOCTYPE html PUBLIC \"x");
    assert!(matches!(
        &tokens[0],
        Token::Doctype { force_quirks: true, public_identifier: Some(id), .. } if id == "x"
    ));
    assert_eq!(errors, vec![ParseErrorKind::EofInDoctype]);
}

#[test]
fn test_lone_less_than_sign() {
    let (tokens, errors) = tokenize_with_errors("a < b <");
    assert_eq!(tokens, vec![Token::text("a < b <"), Token::EndOfInput]);
    assert_eq!(
        errors,
        vec![
            ParseErrorKind::InvalidFirstCharacterOfTagName,
            ParseErrorKind::EofBeforeTagName,
        ]
    );
}

#[test]
fn test_missing_end_tag_name() {
    let (tokens, errors) = tokenize_with_errors("a</>b");
    assert_eq!(tokens, vec![Token::text("ab"), Token::EndOfInput]);
    assert_eq!(errors, vec![ParseErrorKind::MissingEndTagName]);
}

#[test]
fn test_processing_instruction_is_bogus_comment() {
    let (tokens, errors) = tokenize_with_errors(r#"<?xml version="1.0"?>"#);
    assert_eq!(tokens[0], Token::comment(r#"?xml version="1.0"?"#));
    assert_eq!(
        errors,
        vec![ParseErrorKind::UnexpectedQuestionMarkInsteadOfTagName]
    );
}

#[test]
fn test_cdata_in_html_content() {
    let (tokens, errors) = tokenize_with_errors("<![CDATA[x<y]]>");
    assert_eq!(tokens[0], Token::comment("[CDATA[x<y]]"));
    assert_eq!(errors, vec![ParseErrorKind::CdataInHtmlContent]);
}

#[test]
fn test_cdata_in_foreign_content() {
    let mut tokenizer = HTMLTokenizer::new("<![CDATA[x<y]]]>z");
    tokenizer.set_cdata_allowed(true);
    let tokens = tokenizer.run();
    assert_eq!(tokens, vec![Token::text("x<y]z"), Token::EndOfInput]);
    assert!(tokenizer.errors().is_empty());
}

#[test]
fn test_fragment_in_script_context() {
    let source = StringSource::new("if (a < b) {}</script>after");
    let tokens = HTMLTokenizer::new_fragment(source, "script").run();
    assert_eq!(
        tokens,
        vec![
            Token::text("if (a < b) {}"),
            Token::end_tag("script"),
            Token::text("after"),
            Token::EndOfInput,
        ]
    );
}

#[test]
fn test_fragment_in_title_context() {
    let source = StringSource::new("&lt;b&gt;</title>");
    let tokens = HTMLTokenizer::new_fragment(source, "title").run();
    assert_eq!(tokens[0], Token::text("<b>"));
    assert_eq!(tokens[1], Token::end_tag("title"));
}

#[test]
fn test_end_of_input_is_idempotent() {
    let mut tokenizer = HTMLTokenizer::new("<p");
    let _ = tokenizer.run();
    for _ in 0..3 {
        assert_eq!(tokenizer.next_token(), Token::EndOfInput);
    }
    assert_eq!(tokenizer.state(), TokenizerState::Eof);
}

#[test]
fn test_iterator_yields_one_end_of_input() {
    let tokens: Vec<Token> = HTMLTokenizer::new("<b>x</b>").collect();
    assert_eq!(tokens.len(), 4);
    assert_eq!(tokens.iter().filter(|t| t.is_end_of_input()).count(), 1);
}

#[test]
fn test_newline_normalization() {
    let tokens = tokenize("a\r\nb\rc<p title=\"x\r\ny\">");
    assert_eq!(tokens[0], Token::text("a\nb\nc"));
    assert_eq!(tokens[1].attribute("title"), Some("x\ny"));
}

#[test]
fn test_control_character_in_input_stream() {
    let (tokens, errors) = tokenize_with_errors("a\u{1}b\u{FDD0}");
    assert_eq!(tokens[0], Token::text("a\u{1}b\u{FDD0}"));
    assert_eq!(
        errors,
        vec![
            ParseErrorKind::ControlCharacterInInputStream,
            ParseErrorKind::NoncharacterInInputStream,
        ]
    );
}

#[test]
fn test_error_positions() {
    let mut tokenizer = HTMLTokenizer::new("<p>\nab\0");
    let _ = tokenizer.run();
    let errors = tokenizer.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, ParseErrorKind::UnexpectedNullCharacter);
    assert_eq!(errors[0].position.line, 2);
    assert_eq!(errors[0].position.column, 3);
    assert_eq!(errors[0].position.offset, 6);
}

#[test]
fn test_long_text_is_split_without_loss() {
    let input = "x".repeat(40_000);
    let tokens = tokenize(&input);
    assert!(tokens.len() > 2);
    let text: String = tokens
        .iter()
        .filter_map(|token| match token {
            Token::Text { data } => Some(data.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(text, input);
}
