//! Parse errors and character source failures.
//!
//! [§ 13.2.2 Parse errors](https://html.spec.whatwg.org/multipage/parsing.html#parse-errors)
//!
//! "This specification defines the parsing rules for HTML documents, whether they
//! are syntactically correct or not. Certain points in the parsing algorithm are
//! said to be parse errors. The error handling for parse errors is well-defined."
//!
//! Parse errors never stop tokenization. They are appended to the tokenizer's
//! diagnostics channel and the state machine carries on with the recovery step
//! defined for the state that raised them.

use std::fmt;
use std::io;

use serde::Serialize;
use strum_macros::{Display, IntoStaticStr};

/// [§ 13.2.2 Parse errors](https://html.spec.whatwg.org/multipage/parsing.html#parse-errors)
///
/// The tokenizer-level parse errors. `Display` renders the standard error code,
/// e.g. `ParseErrorKind::DuplicateAttribute` prints `duplicate-attribute`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr, Serialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum ParseErrorKind {
    /// `<!-->` or `<!--->`.
    AbruptClosingOfEmptyComment,
    /// `>` inside a DOCTYPE public identifier.
    AbruptDoctypePublicIdentifier,
    /// `>` inside a DOCTYPE system identifier.
    AbruptDoctypeSystemIdentifier,
    /// `&#;` or `&#x;`: a numeric reference with no digits.
    AbsenceOfDigitsInNumericCharacterReference,
    /// `<![CDATA[` outside foreign content.
    CdataInHtmlContent,
    /// A numeric reference above U+10FFFF.
    CharacterReferenceOutsideUnicodeRange,
    /// A C0/C1 control (other than whitespace and NULL) in the input stream.
    ControlCharacterInInputStream,
    /// A numeric reference to a control character or U+000D.
    ControlCharacterReference,
    /// An attribute name repeated on the same tag; the later one is dropped.
    DuplicateAttribute,
    /// An end tag carrying attributes.
    EndTagWithAttributes,
    /// An end tag written as `</div/>`.
    EndTagWithTrailingSolidus,
    /// Input ended right after `<` or `</`.
    EofBeforeTagName,
    /// Input ended inside a CDATA section.
    EofInCdata,
    /// Input ended inside a comment.
    EofInComment,
    /// Input ended inside a DOCTYPE.
    EofInDoctype,
    /// Input ended inside `<!--` text within a script element.
    EofInScriptHtmlCommentLikeText,
    /// Input ended inside a start or end tag.
    EofInTag,
    /// A comment closed with `--!>`.
    IncorrectlyClosedComment,
    /// `<!` not followed by `--`, `DOCTYPE`, or `[CDATA[`.
    IncorrectlyOpenedComment,
    /// Something other than `PUBLIC`/`SYSTEM` after a DOCTYPE name.
    InvalidCharacterSequenceAfterDoctypeName,
    /// `<` or `</` followed by a character that cannot start a tag name.
    InvalidFirstCharacterOfTagName,
    /// `<div id=>`.
    MissingAttributeValue,
    /// `<!DOCTYPE>`.
    MissingDoctypeName,
    /// `<!DOCTYPE html PUBLIC>`.
    MissingDoctypePublicIdentifier,
    /// `<!DOCTYPE html SYSTEM>`.
    MissingDoctypeSystemIdentifier,
    /// `</>`.
    MissingEndTagName,
    /// A public identifier not introduced by a quote.
    MissingQuoteBeforeDoctypePublicIdentifier,
    /// A system identifier not introduced by a quote.
    MissingQuoteBeforeDoctypeSystemIdentifier,
    /// A character reference not terminated by `;`.
    MissingSemicolonAfterCharacterReference,
    /// `PUBLIC"..."` without separating whitespace.
    MissingWhitespaceAfterDoctypePublicKeyword,
    /// `SYSTEM"..."` without separating whitespace.
    MissingWhitespaceAfterDoctypeSystemKeyword,
    /// `<!DOCTYPEhtml>`.
    MissingWhitespaceBeforeDoctypeName,
    /// `<div a="1"b="2">`.
    MissingWhitespaceBetweenAttributes,
    /// Public and system identifiers written back to back.
    MissingWhitespaceBetweenDoctypePublicAndSystemIdentifiers,
    /// `<!--` inside a comment.
    NestedComment,
    /// A numeric reference to a noncharacter.
    NoncharacterCharacterReference,
    /// A noncharacter in the input stream.
    NoncharacterInInputStream,
    /// `&#0;`.
    NullCharacterReference,
    /// A numeric reference in the surrogate range.
    SurrogateCharacterReference,
    /// Trailing garbage after a DOCTYPE system identifier.
    UnexpectedCharacterAfterDoctypeSystemIdentifier,
    /// `"`, `'` or `<` in an attribute name.
    UnexpectedCharacterInAttributeName,
    /// `"`, `'`, `<`, `=` or `` ` `` in an unquoted attribute value.
    UnexpectedCharacterInUnquotedAttributeValue,
    /// `=` where an attribute name should start.
    UnexpectedEqualsSignBeforeAttributeName,
    /// U+0000 NULL in the input.
    UnexpectedNullCharacter,
    /// `<?`.
    UnexpectedQuestionMarkInsteadOfTagName,
    /// `/` inside a tag that is not followed by `>`.
    UnexpectedSolidusInTag,
    /// `&name;` where `name` is not a known reference.
    UnknownNamedCharacterReference,
}

/// A location in the input stream.
///
/// `offset` counts characters (after newline normalization) from the start of
/// the input; `line` and `column` are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    /// Zero-based character offset.
    pub offset: usize,
    /// One-based line number.
    pub line: usize,
    /// One-based column number.
    pub column: usize,
}

impl Position {
    /// The position of the first character of a document.
    #[must_use]
    pub const fn start() -> Self {
        Self {
            offset: 0,
            line: 1,
            column: 1,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::start()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A parse error record: what went wrong and where.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParseError {
    /// The kind of parse error.
    pub kind: ParseErrorKind,
    /// Position of the input character being processed when it was raised.
    pub position: Position,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.kind, self.position)
    }
}

/// Failure of the byte source behind an [`IoSource`](crate::reader::IoSource).
#[derive(Debug, thiserror::Error)]
pub enum ReaderError {
    /// The underlying reader returned an I/O error.
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
}
