//! Property tests for the tokenizer and serializer.

use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use wren_html::serialize::to_html;
use wren_html::{Attribute, HTMLTokenizer, Token, tokenize};

/// A token stream built from well-formed pieces.
#[derive(Debug, Clone)]
struct Document(Vec<Token>);

impl Arbitrary for Document {
    fn arbitrary(g: &mut Gen) -> Self {
        const ELEMENTS: &[&str] = &["div", "p", "span", "a", "title", "textarea", "script", "style"];
        const ATTRIBUTES: &[&str] = &["id", "class", "title", "href", "data-x"];
        const COMMENTS: &[&str] = &["", " note ", "a b c", "x"];

        let mut tokens = Vec::new();
        for _ in 0..usize::arbitrary(g) % 6 {
            let element = g.choose(ELEMENTS).copied().unwrap_or("div");
            let mut attributes = Vec::new();
            for _ in 0..usize::arbitrary(g) % 3 {
                let name = g.choose(ATTRIBUTES).copied().unwrap_or("id");
                attributes.push(Attribute::new(name, String::arbitrary(g)));
            }
            tokens.push(Token::start_tag(element, attributes));
            let mut content = String::arbitrary(g);
            if matches!(element, "script" | "style") {
                // Literal content is written as is, so it must not contain markup.
                content.retain(|c| c != '<');
            }
            tokens.push(Token::text(content));
            tokens.push(Token::end_tag(element));
            if bool::arbitrary(g) {
                let comment = g.choose(COMMENTS).copied().unwrap_or("");
                tokens.push(Token::comment(comment));
            }
            tokens.push(Token::text(String::arbitrary(g)));
        }
        Self(tokens)
    }
}

#[quickcheck]
fn prop_single_trailing_end_of_input(input: String) -> bool {
    let tokens = tokenize(&input);
    tokens.last() == Some(&Token::EndOfInput)
        && tokens.iter().filter(|token| token.is_end_of_input()).count() == 1
}

#[quickcheck]
fn prop_end_of_input_is_idempotent(input: String) -> bool {
    let mut tokenizer = HTMLTokenizer::new(input);
    let _ = tokenizer.run();
    (0..3).all(|_| tokenizer.next_token() == Token::EndOfInput)
}

#[quickcheck]
fn prop_attribute_names_are_unique(input: String) -> bool {
    tokenize(&input).iter().all(|token| match token {
        Token::StartTag { attributes, .. } | Token::EndTag { attributes, .. } => attributes
            .iter()
            .enumerate()
            .all(|(i, attr)| attributes[..i].iter().all(|earlier| earlier.name != attr.name)),
        _ => true,
    })
}

#[quickcheck]
fn prop_text_is_coalesced_and_never_empty(input: String) -> bool {
    let tokens = tokenize(&input);
    let texts_never_empty = tokens
        .iter()
        .all(|token| !matches!(token, Token::Text { data } if data.is_empty() || data.contains('\0')));
    let never_adjacent = tokens
        .windows(2)
        .all(|pair| !matches!(pair, [Token::Text { .. }, Token::Text { .. }]));
    texts_never_empty && never_adjacent
}

#[quickcheck]
fn prop_quiet_logging_does_not_change_tokens(input: String) -> bool {
    let mut loud = HTMLTokenizer::new(input.as_str());
    let loud_tokens = loud.run();
    wren_common::warning::set_quiet(true);
    let mut quiet = HTMLTokenizer::new(input.as_str());
    let quiet_tokens = quiet.run();
    wren_common::warning::set_quiet(false);
    loud_tokens == quiet_tokens && loud.errors() == quiet.errors()
}

#[quickcheck]
fn prop_serialization_round_trip(document: Document) -> bool {
    let first = tokenize(&to_html(&document.0));
    let second = tokenize(&to_html(&first));
    first == second
}

#[quickcheck]
fn prop_serialized_tags_come_back(document: Document) -> bool {
    let expected: Vec<&str> = document.0.iter().filter_map(Token::tag_name).collect();
    let tokens = tokenize(&to_html(&document.0));
    let actual: Vec<&str> = tokens.iter().filter_map(Token::tag_name).collect();
    expected == actual
}
