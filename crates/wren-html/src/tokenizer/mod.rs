//! HTML tokenizer module.
//!
//! Implements [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
//! of the WHATWG HTML Living Standard.
//!
//! The state handlers are split by the part of the grammar they cover; all
//! of them are methods on [`HTMLTokenizer`].

mod character_reference;
mod helpers;
mod machine;
mod markup;
mod script;
mod state;
mod tag;
mod text;

pub use machine::HTMLTokenizer;
pub use state::TokenizerState;
