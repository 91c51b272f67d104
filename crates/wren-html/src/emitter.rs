//! Token buffer and emitter.
//!
//! [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
//!
//! "When a token is emitted, it must immediately be handled by the tree
//! construction stage." Here, emitted tokens are queued until the caller
//! pulls them. The emitter also owns the token currently being built, so
//! every mutation of an in-progress tag, comment or DOCTYPE goes through the
//! operations below, and a finalized token can never carry a duplicate
//! attribute or leftover state from the previous one.

use std::collections::VecDeque;
use std::mem;

use crate::token::{Attribute, Token};

/// Text runs longer than this are handed out without waiting for the next
/// tag, so arbitrarily long text never has to be buffered whole.
const MAX_TEXT_RUN: usize = 16 * 1024;

/// Whether a tag token under construction is a start or an end tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TagKind {
    Start,
    End,
}

/// The token under construction.
#[derive(Debug)]
enum PendingToken {
    Tag {
        kind: TagKind,
        name: String,
        self_closing: bool,
        attributes: Vec<Attribute>,
    },
    Comment(String),
    Doctype {
        name: Option<String>,
        public_identifier: Option<String>,
        system_identifier: Option<String>,
        force_quirks: bool,
    },
}

/// Accumulates the pending token and the pending text run, and queues
/// finished tokens in document order.
#[derive(Debug, Default)]
pub(crate) struct Emitter {
    pending: Option<PendingToken>,
    /// "the current attribute", not yet added to the tag.
    current_attribute: Option<Attribute>,
    /// Set once the current attribute's name was found to be a duplicate.
    duplicate_reported: bool,
    text: String,
    ready: VecDeque<Token>,
}

impl Emitter {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    // ===== Tags =====

    /// "Create a new start tag token" / "Create a new end tag token"
    ///
    /// "When a start or end tag token is created, its self-closing flag must be
    /// unset (its other state is that it be set), and its attributes list must
    /// be empty."
    pub(crate) fn start_tag(&mut self, kind: TagKind) {
        self.current_attribute = None;
        self.duplicate_reported = false;
        self.pending = Some(PendingToken::Tag {
            kind,
            name: String::new(),
            self_closing: false,
            attributes: Vec::new(),
        });
    }

    /// "Append the current input character to the current tag token's tag name."
    pub(crate) fn push_tag_name(&mut self, c: char) {
        if let Some(PendingToken::Tag { name, .. }) = &mut self.pending {
            name.push(c);
        }
    }

    /// The name of the tag under construction, or `""` if there is none.
    pub(crate) fn tag_name(&self) -> &str {
        match &self.pending {
            Some(PendingToken::Tag { name, .. }) => name,
            _ => "",
        }
    }

    /// "Set the self-closing flag of the current tag token."
    pub(crate) fn set_self_closing(&mut self) {
        if let Some(PendingToken::Tag { self_closing, .. }) = &mut self.pending {
            *self_closing = true;
        }
    }

    /// "Start a new attribute in the current tag token. Set that attribute
    /// name and value to the empty string."
    ///
    /// Finishes the previous attribute first; returns true if that one was an
    /// unreported duplicate and has been dropped.
    pub(crate) fn start_attribute(&mut self) -> bool {
        let duplicate = self.finish_attribute();
        self.current_attribute = Some(Attribute::new(String::new(), String::new()));
        duplicate
    }

    /// "Append the current input character to the current attribute's name."
    pub(crate) fn push_attribute_name(&mut self, c: char) {
        if let Some(attr) = &mut self.current_attribute {
            attr.name.push(c);
        }
    }

    /// "Append the current input character to the current attribute's value."
    pub(crate) fn push_attribute_value(&mut self, c: char) {
        if let Some(attr) = &mut self.current_attribute {
            attr.value.push(c);
        }
    }

    /// Append decoded character reference text to the current attribute's value.
    pub(crate) fn push_attribute_value_str(&mut self, s: &str) {
        if let Some(attr) = &mut self.current_attribute {
            attr.value.push_str(s);
        }
    }

    /// [§ 13.2.5.33 Attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-name-state)
    ///
    /// "The complete attribute's name must be compared to the other attributes
    /// on the same token; if there is already an attribute on the token with
    /// the exact same name, then this is a duplicate-attribute parse error and
    /// the new attribute must be removed from the token."
    ///
    /// Called when the tokenizer leaves the attribute name state. Returns
    /// true the first time the current attribute's name is found on the tag
    /// already; the attribute is then dropped when it is finished.
    pub(crate) fn check_attribute_name(&mut self) -> bool {
        if self.duplicate_reported || !self.is_duplicate() {
            return false;
        }
        self.duplicate_reported = true;
        true
    }

    /// Adds the current attribute to the tag unless it is a duplicate.
    ///
    /// Returns true if the attribute was a duplicate that
    /// [`Emitter::check_attribute_name`] had not reported. Does nothing (and
    /// returns false) when no attribute is in progress.
    pub(crate) fn finish_attribute(&mut self) -> bool {
        let duplicate = self.is_duplicate();
        let reported = mem::take(&mut self.duplicate_reported);
        let Some(attr) = self.current_attribute.take() else {
            return false;
        };
        if duplicate {
            return !reported;
        }
        if let Some(PendingToken::Tag { attributes, .. }) = &mut self.pending {
            attributes.push(attr);
        }
        false
    }

    fn is_duplicate(&self) -> bool {
        let (Some(attr), Some(PendingToken::Tag { attributes, .. })) =
            (&self.current_attribute, &self.pending)
        else {
            return false;
        };
        attributes.iter().any(|existing| existing.name == attr.name)
    }

    // ===== Comments =====

    /// "Create a comment token whose data is" `data`.
    pub(crate) fn start_comment(&mut self, data: &str) {
        self.current_attribute = None;
        self.pending = Some(PendingToken::Comment(data.to_string()));
    }

    /// "Append the current input character to the comment token's data."
    pub(crate) fn push_comment(&mut self, c: char) {
        if let Some(PendingToken::Comment(data)) = &mut self.pending {
            data.push(c);
        }
    }

    /// Append several characters to the comment token's data.
    pub(crate) fn push_comment_str(&mut self, s: &str) {
        if let Some(PendingToken::Comment(data)) = &mut self.pending {
            data.push_str(s);
        }
    }

    // ===== DOCTYPE =====

    /// "When a DOCTYPE token is created, its name, public identifier, and
    /// system identifier must be marked as missing (which is a distinct state
    /// from the empty string), and the force-quirks flag must be set to off."
    pub(crate) fn start_doctype(&mut self) {
        self.current_attribute = None;
        self.pending = Some(PendingToken::Doctype {
            name: None,
            public_identifier: None,
            system_identifier: None,
            force_quirks: false,
        });
    }

    /// Append to the DOCTYPE name, creating it if it is still missing.
    pub(crate) fn push_doctype_name(&mut self, c: char) {
        if let Some(PendingToken::Doctype { name, .. }) = &mut self.pending {
            name.get_or_insert_with(String::new).push(c);
        }
    }

    /// "Set the current DOCTYPE token's public identifier to the empty string
    /// (not missing)"
    pub(crate) fn set_public_identifier_empty(&mut self) {
        if let Some(PendingToken::Doctype {
            public_identifier, ..
        }) = &mut self.pending
        {
            *public_identifier = Some(String::new());
        }
    }

    /// "Append the current input character to the current DOCTYPE token's
    /// public identifier."
    pub(crate) fn push_public_identifier(&mut self, c: char) {
        if let Some(PendingToken::Doctype {
            public_identifier: Some(id),
            ..
        }) = &mut self.pending
        {
            id.push(c);
        }
    }

    /// "Set the current DOCTYPE token's system identifier to the empty string
    /// (not missing)"
    pub(crate) fn set_system_identifier_empty(&mut self) {
        if let Some(PendingToken::Doctype {
            system_identifier, ..
        }) = &mut self.pending
        {
            *system_identifier = Some(String::new());
        }
    }

    /// "Append the current input character to the current DOCTYPE token's
    /// system identifier."
    pub(crate) fn push_system_identifier(&mut self, c: char) {
        if let Some(PendingToken::Doctype {
            system_identifier: Some(id),
            ..
        }) = &mut self.pending
        {
            id.push(c);
        }
    }

    /// "Set the current DOCTYPE token's force-quirks flag to on."
    pub(crate) fn set_force_quirks(&mut self) {
        if let Some(PendingToken::Doctype { force_quirks, .. }) = &mut self.pending {
            *force_quirks = true;
        }
    }

    // ===== Finalizing =====

    /// Drop the token under construction without emitting it.
    pub(crate) fn discard(&mut self) {
        self.pending = None;
        self.current_attribute = None;
        self.duplicate_reported = false;
    }

    /// Turn the token under construction into an immutable [`Token`].
    ///
    /// Callers finish the current attribute first, so they can report a
    /// duplicate. Leaves the emitter with no pending token.
    pub(crate) fn finalize(&mut self) -> Option<Token> {
        let unreported_duplicate = self.finish_attribute();
        debug_assert!(
            !unreported_duplicate,
            "duplicate attribute must be reported before finalizing"
        );
        let token = match self.pending.take()? {
            PendingToken::Tag {
                kind: TagKind::Start,
                name,
                self_closing,
                attributes,
            } => Token::StartTag {
                name,
                self_closing,
                attributes,
            },
            PendingToken::Tag {
                kind: TagKind::End,
                name,
                self_closing,
                attributes,
            } => Token::EndTag {
                name,
                self_closing,
                attributes,
            },
            PendingToken::Comment(data) => Token::Comment { data },
            PendingToken::Doctype {
                name,
                public_identifier,
                system_identifier,
                force_quirks,
            } => Token::Doctype {
                name,
                public_identifier,
                system_identifier,
                force_quirks,
            },
        };
        Some(token)
    }

    // ===== Text and output queue =====

    /// Append one character to the pending text run.
    pub(crate) fn push_text(&mut self, c: char) {
        self.text.push(c);
        if self.text.len() >= MAX_TEXT_RUN {
            self.flush_text();
        }
    }

    /// Append several characters to the pending text run.
    pub(crate) fn push_text_str(&mut self, s: &str) {
        self.text.push_str(s);
        if self.text.len() >= MAX_TEXT_RUN {
            self.flush_text();
        }
    }

    /// Queue a finished token after whatever text preceded it.
    pub(crate) fn emit(&mut self, token: Token) {
        self.flush_text();
        self.ready.push_back(token);
    }

    /// Queue the final text run and the end-of-input token.
    pub(crate) fn emit_end_of_input(&mut self) {
        self.discard();
        self.emit(Token::EndOfInput);
    }

    /// Take the next queued token.
    pub(crate) fn pop(&mut self) -> Option<Token> {
        self.ready.pop_front()
    }

    fn flush_text(&mut self) {
        if !self.text.is_empty() {
            let data = mem::take(&mut self.text);
            self.ready.push_back(Token::Text { data });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(emitter: &mut Emitter) -> Vec<Token> {
        std::iter::from_fn(|| emitter.pop()).collect()
    }

    #[test]
    fn test_text_is_coalesced_until_next_token() {
        let mut emitter = Emitter::new();
        emitter.push_text('a');
        emitter.push_text_str("bc");
        assert!(emitter.pop().is_none());

        emitter.start_comment("x");
        let comment = emitter.finalize().unwrap();
        emitter.emit(comment);
        emitter.push_text('d');
        emitter.emit_end_of_input();

        assert_eq!(
            drain(&mut emitter),
            vec![
                Token::text("abc"),
                Token::comment("x"),
                Token::text("d"),
                Token::EndOfInput,
            ]
        );
    }

    #[test]
    fn test_duplicate_attribute_first_wins() {
        let mut emitter = Emitter::new();
        emitter.start_tag(TagKind::Start);
        emitter.push_tag_name('a');

        assert!(!emitter.start_attribute());
        emitter.push_attribute_name('x');
        emitter.push_attribute_value('1');

        assert!(!emitter.start_attribute());
        emitter.push_attribute_name('x');
        emitter.push_attribute_value('2');
        assert!(emitter.finish_attribute());

        assert_eq!(
            emitter.finalize(),
            Some(Token::start_tag("a", vec![Attribute::new("x", "1")]))
        );
    }

    #[test]
    fn test_duplicate_reported_once_at_name_end() {
        let mut emitter = Emitter::new();
        emitter.start_tag(TagKind::Start);
        assert!(!emitter.start_attribute());
        emitter.push_attribute_name('x');
        assert!(!emitter.check_attribute_name());

        assert!(!emitter.start_attribute());
        emitter.push_attribute_name('x');
        assert!(emitter.check_attribute_name());
        assert!(!emitter.check_attribute_name());
        emitter.push_attribute_value('2');

        // Already reported, so finishing drops it quietly.
        assert!(!emitter.start_attribute());
        emitter.push_attribute_name('y');
        assert_eq!(
            emitter.finalize(),
            Some(Token::start_tag(
                "",
                vec![Attribute::new("x", ""), Attribute::new("y", "")]
            ))
        );
    }

    #[test]
    fn test_finalize_clears_pending_state() {
        let mut emitter = Emitter::new();
        emitter.start_tag(TagKind::End);
        emitter.push_tag_name('p');
        assert!(!emitter.start_attribute());
        emitter.push_attribute_name('q');
        assert_eq!(emitter.tag_name(), "p");

        let token = emitter.finalize().unwrap();
        assert_eq!(token.attribute("q"), Some(""));
        assert_eq!(emitter.tag_name(), "");
        assert!(emitter.finalize().is_none());

        // A stray attribute operation after finalizing must not leak into
        // the next token.
        emitter.push_attribute_name('z');
        emitter.start_tag(TagKind::Start);
        emitter.push_tag_name('b');
        assert_eq!(emitter.finalize(), Some(Token::start_tag("b", vec![])));
    }

    #[test]
    fn test_doctype_identifiers() {
        let mut emitter = Emitter::new();
        emitter.start_doctype();
        emitter.push_doctype_name('h');
        emitter.push_public_identifier('x');
        emitter.set_system_identifier_empty();
        emitter.push_system_identifier('s');
        emitter.set_force_quirks();
        assert_eq!(
            emitter.finalize(),
            Some(Token::Doctype {
                name: Some("h".to_string()),
                public_identifier: None,
                system_identifier: Some("s".to_string()),
                force_quirks: true,
            })
        );
    }

    #[test]
    fn test_long_text_is_split() {
        let mut emitter = Emitter::new();
        let long = "x".repeat(MAX_TEXT_RUN + 10);
        for c in long.chars() {
            emitter.push_text(c);
        }
        emitter.emit_end_of_input();
        let tokens = drain(&mut emitter);
        assert_eq!(tokens.len(), 3);
        let joined: String = tokens
            .iter()
            .filter_map(|t| match t {
                Token::Text { data } => Some(data.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(joined, long);
    }
}
