//! Raw-text mode tracking.
//!
//! [§ 13.2.6.2 Parsing elements that contain only text](https://html.spec.whatwg.org/multipage/parsing.html#parsing-elements-that-contain-only-text)
//!
//! The content of a handful of elements is tokenized as literal text up to the
//! matching end tag. Which grammar applies depends on the element: RCDATA
//! still decodes character references, RAWTEXT and script data do not, and
//! PLAINTEXT never ends.

use crate::tokenizer::TokenizerState;

/// The text grammar used inside a raw-text element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RawTextKind {
    /// `title`, `textarea`: text with character references.
    RcData,
    /// `style`, `xmp`, `iframe`, `noembed`, `noframes`: literal text.
    RawText,
    /// `script`: literal text with the script escape rules.
    ScriptData,
    /// `plaintext`: literal text to the end of the document.
    PlainText,
}

impl RawTextKind {
    /// The raw-text grammar for an element, if it has one.
    ///
    /// The comparison is ASCII case-insensitive.
    #[must_use]
    pub fn for_element(name: &str) -> Option<Self> {
        const ELEMENTS: [(&str, RawTextKind); 9] = [
            ("title", RawTextKind::RcData),
            ("textarea", RawTextKind::RcData),
            ("style", RawTextKind::RawText),
            ("xmp", RawTextKind::RawText),
            ("iframe", RawTextKind::RawText),
            ("noembed", RawTextKind::RawText),
            ("noframes", RawTextKind::RawText),
            ("script", RawTextKind::ScriptData),
            ("plaintext", RawTextKind::PlainText),
        ];
        ELEMENTS
            .iter()
            .find(|(element, _)| element.eq_ignore_ascii_case(name))
            .map(|&(_, kind)| kind)
    }

    /// The tokenizer state that reads this kind of content.
    #[must_use]
    pub const fn state(self) -> TokenizerState {
        match self {
            Self::RcData => TokenizerState::RCDATA,
            Self::RawText => TokenizerState::RAWTEXT,
            Self::ScriptData => TokenizerState::ScriptData,
            Self::PlainText => TokenizerState::PLAINTEXT,
        }
    }

    /// Whether character references are decoded inside this content.
    #[must_use]
    pub const fn decodes_character_references(self) -> bool {
        matches!(self, Self::RcData)
    }

    /// Whether text inside this content is written back without escaping.
    #[must_use]
    pub const fn is_literal(self) -> bool {
        !self.decodes_character_references()
    }
}

/// Tracks the single raw-text element whose content is being read, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTextMode {
    active: Option<ActiveElement>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ActiveElement {
    name: String,
    kind: RawTextKind,
}

impl RawTextMode {
    /// A controller with no raw-text element open.
    #[must_use]
    pub const fn new() -> Self {
        Self { active: None }
    }

    /// Open the raw-text content of `element_name`.
    ///
    /// Returns the grammar now in effect, or `None` (with no change) if the
    /// element is not a raw-text element or `plaintext` is already active.
    pub fn enter(&mut self, element_name: &str) -> Option<RawTextKind> {
        if self.is_plaintext() {
            return None;
        }
        let kind = RawTextKind::for_element(element_name)?;
        self.active = Some(ActiveElement {
            name: element_name.to_ascii_lowercase(),
            kind,
        });
        Some(kind)
    }

    /// Leave the active raw-text element. `plaintext` cannot be left.
    pub fn exit(&mut self) {
        if !self.is_plaintext() {
            self.active = None;
        }
    }

    /// Returns true while inside a raw-text element.
    ///
    /// For callers such as a tree builder; the tokenizer itself follows
    /// raw text through its states.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// The grammar of the active element.
    #[must_use]
    pub fn kind(&self) -> Option<RawTextKind> {
        self.active.as_ref().map(|active| active.kind)
    }

    /// The lowercase name of the active element.
    ///
    /// Exposed through [`HTMLTokenizer::raw_text_element`](crate::HTMLTokenizer::raw_text_element).
    #[must_use]
    pub fn element(&self) -> Option<&str> {
        self.active.as_ref().map(|active| active.name.as_str())
    }

    /// [§ 13.2.5 Appropriate end tag token](https://html.spec.whatwg.org/multipage/parsing.html#appropriate-end-tag-token)
    ///
    /// "An appropriate end tag token is an end tag token whose tag name matches
    /// the tag name of the last start tag to have been emitted from this
    /// tokenizer, if any."
    ///
    /// Compared against the active element, ASCII case-insensitively.
    /// Nothing ever matches inside `plaintext`.
    #[must_use]
    pub fn matches_end_tag(&self, candidate: &str) -> bool {
        self.active.as_ref().is_some_and(|active| {
            active.kind != RawTextKind::PlainText && active.name.eq_ignore_ascii_case(candidate)
        })
    }

    fn is_plaintext(&self) -> bool {
        self.kind() == Some(RawTextKind::PlainText)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_and_exit() {
        let mut mode = RawTextMode::new();
        assert!(!mode.is_active());
        assert_eq!(mode.enter("div"), None);
        assert!(!mode.is_active());

        assert_eq!(mode.enter("SCRIPT"), Some(RawTextKind::ScriptData));
        assert_eq!(mode.element(), Some("script"));
        assert!(mode.matches_end_tag("Script"));
        assert!(!mode.matches_end_tag("style"));

        mode.exit();
        assert!(!mode.is_active());
        assert!(!mode.matches_end_tag("script"));
    }

    #[test]
    fn test_plaintext_is_irrevocable() {
        let mut mode = RawTextMode::new();
        assert_eq!(mode.enter("plaintext"), Some(RawTextKind::PlainText));
        mode.exit();
        assert!(mode.is_active());
        assert_eq!(mode.enter("title"), None);
        assert_eq!(mode.kind(), Some(RawTextKind::PlainText));
        assert!(!mode.matches_end_tag("plaintext"));
    }

    #[test]
    fn test_grammar_per_element() {
        assert_eq!(RawTextKind::for_element("title"), Some(RawTextKind::RcData));
        assert_eq!(RawTextKind::for_element("TextArea"), Some(RawTextKind::RcData));
        assert_eq!(RawTextKind::for_element("noframes"), Some(RawTextKind::RawText));
        assert_eq!(RawTextKind::for_element("p"), None);
        assert!(RawTextKind::RcData.decodes_character_references());
        assert!(RawTextKind::ScriptData.is_literal());
        assert_eq!(RawTextKind::RawText.state(), TokenizerState::RAWTEXT);
    }
}
