//! Streaming HTML tokenizer.
//!
//! # Scope
//!
//! This crate implements:
//! - **HTML Tokenizer** ([WHATWG § 13.2.5](https://html.spec.whatwg.org/multipage/parsing.html#tokenization))
//!   - Data, RCDATA, RAWTEXT, script data and PLAINTEXT states
//!   - Tag, attribute, comment, DOCTYPE and CDATA states
//!   - Named and numeric character references, including the attribute-value legacy rules
//!   - Every tokenizer parse error, with its position in the input
//!
//! - **Input stream preprocessing** ([WHATWG § 13.2.3.5](https://html.spec.whatwg.org/multipage/parsing.html#preprocessing-the-input-stream))
//!   - Newline normalization and input stream errors
//!
//! - **Raw-text switching** ([WHATWG § 13.2.6.2](https://html.spec.whatwg.org/multipage/parsing.html#parsing-elements-that-contain-only-text))
//!   - The tokenizer switches into and out of raw-text content itself, so it
//!     can be used without a tree builder
//!
//! # Not Implemented
//!
//! - Tree construction
//! - Encoding sniffing (input is UTF-8)
//! - Script execution and `document.write`

mod emitter;

/// Character reference tables and decoding.
pub mod entities;
/// Parse errors and input positions.
pub mod error;
/// Raw-text element tracking.
pub mod raw_text;
/// Character sources and the input reader.
pub mod reader;
/// Token serialization back to HTML.
pub mod serialize;
/// Tokens produced by the tokenizer.
pub mod token;
/// HTML tokenizer state machine.
pub mod tokenizer;

pub use error::{ParseError, ParseErrorKind, Position};
pub use raw_text::{RawTextKind, RawTextMode};
pub use reader::{CharSource, IoSource, StringSource};
pub use token::{Attribute, Token};
pub use tokenizer::{HTMLTokenizer, TokenizerState};

/// Tokenize a complete document.
///
/// Returns every token, ending with [`Token::EndOfInput`].
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token> {
    HTMLTokenizer::new(input).run()
}
