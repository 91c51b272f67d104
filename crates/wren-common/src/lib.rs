//! Common utilities for the Wren tokenizer.
//!
//! This crate provides shared infrastructure used by the tokenizer and its
//! command-line front end:
//! - **Warning System** - colored, deduplicated terminal output for parse
//!   diagnostics

pub mod warning;
