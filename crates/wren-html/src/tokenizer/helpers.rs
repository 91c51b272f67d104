//! Helper functions for the HTML tokenizer.
//!
//! [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
//!
//! This module contains utility functions used throughout the tokenizer:
//! - State transitions ("Switch to", "Reconsume in")
//! - Input handling ("Consume the next input character")
//! - Token emission ("Emit the current token")
//! - End tag helpers for raw text elements
//! - Parse error reporting

use wren_common::warning::warn_once;

use super::machine::HTMLTokenizer;
use super::state::TokenizerState;
use crate::emitter::TagKind;
use crate::error::{ParseError, ParseErrorKind, Position};
use crate::reader::{CharSource, input_stream_error};
use crate::token::Token;

// =============================================================================
// State Transition Helpers
// =============================================================================

impl<S: CharSource> HTMLTokenizer<S> {
    /// "Switch to the X state"
    ///
    /// The next character will be consumed on the next step.
    pub(super) const fn switch_to(&mut self, new_state: TokenizerState) {
        self.state = new_state;
    }

    /// "Reconsume in the X state"
    ///
    /// Pushes the current input character back onto the reader so that the
    /// new state sees it again. At EOF there is nothing to push back; the
    /// new state simply sees EOF again.
    pub(super) fn reconsume_in(&mut self, new_state: TokenizerState) {
        if let Some(c) = self.current_input_character {
            self.reader.unread(c);
        }
        self.state = new_state;
    }

    /// "Switch to the return state"
    pub(super) const fn switch_to_return_state(&mut self) {
        self.state = self.return_state;
    }

    /// "Reconsume in the return state"
    pub(super) fn reconsume_in_return_state(&mut self) {
        self.reconsume_in(self.return_state);
    }
}

// =============================================================================
// Input Helpers
// =============================================================================

impl<S: CharSource> HTMLTokenizer<S> {
    /// "Consume the next input character"
    ///
    /// Characters seen for the first time are checked for the input stream
    /// parse errors of [§ 13.2.3.5](https://html.spec.whatwg.org/multipage/parsing.html#preprocessing-the-input-stream).
    /// A reconsumed character was already checked.
    pub(super) fn consume_next_input_character(&mut self) -> Option<char> {
        let fresh = !self.reader.has_pushback();
        let c = self.reader.consume()?;
        if let Some(kind) = input_stream_error(c).filter(|_| fresh) {
            self.record_error(kind, self.reader.last_position());
        }
        Some(c)
    }

    /// [Infra § 4.6 ASCII whitespace](https://infra.spec.whatwg.org/#ascii-whitespace)
    ///
    /// "ASCII whitespace is U+0009 TAB, U+000A LF, U+000C FF, U+000D CR,
    /// or U+0020 SPACE."
    ///
    /// CR never reaches the state machine, the reader normalizes it to LF.
    pub(super) const fn is_whitespace_char(input_char: char) -> bool {
        matches!(input_char, ' ' | '\t' | '\n' | '\x0C')
    }
}

// =============================================================================
// Token Emission Helpers
// =============================================================================

impl<S: CharSource> HTMLTokenizer<S> {
    /// "Emit the current token"
    ///
    /// Start tags for raw-text elements switch the tokenizer into that
    /// element's text grammar, standing in for
    /// [§ 13.2.6.2](https://html.spec.whatwg.org/multipage/parsing.html#parsing-elements-that-contain-only-text)
    /// of tree construction. Callers switch to the data state first, so the
    /// raw-text state set here wins.
    pub(super) fn emit_current_token(&mut self) {
        if self.emitter.finish_attribute() {
            self.parse_error(ParseErrorKind::DuplicateAttribute);
        }
        let Some(token) = self.emitter.finalize() else {
            return;
        };
        match &token {
            Token::StartTag { name, .. } => {
                if let Some(kind) = self.raw_text.enter(name) {
                    self.switch_to(kind.state());
                }
            }
            // [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
            //
            // "When an end tag token is emitted with attributes, that is an
            // end-tag-with-attributes parse error. When an end tag token is
            // emitted with its self-closing flag set, that is an
            // end-tag-with-trailing-solidus parse error."
            Token::EndTag {
                name,
                self_closing,
                attributes,
            } => {
                if !attributes.is_empty() {
                    self.parse_error(ParseErrorKind::EndTagWithAttributes);
                }
                if *self_closing {
                    self.parse_error(ParseErrorKind::EndTagWithTrailingSolidus);
                }
                if self.raw_text.matches_end_tag(name) {
                    self.raw_text.exit();
                }
            }
            _ => {}
        }
        self.emitter.emit(token);
    }

    /// "Emit the current input character as a character token."
    pub(super) fn emit_char(&mut self, c: char) {
        self.emitter.push_text(c);
    }

    /// Emit several character tokens at once.
    pub(super) fn emit_str(&mut self, s: &str) {
        self.emitter.push_text_str(s);
    }

    /// "Emit an end-of-file token."
    pub(super) fn emit_eof_token(&mut self) {
        self.emitter.emit_end_of_input();
        self.switch_to(TokenizerState::Eof);
    }

    /// EOF inside a start or end tag.
    ///
    /// "This is an eof-in-tag parse error. Emit an end-of-file token."
    /// The tag read so far is emitted first, as written.
    pub(super) fn emit_partial_tag_at_eof(&mut self) {
        self.parse_error(ParseErrorKind::EofInTag);
        self.emit_current_token();
        self.emit_eof_token();
    }

    /// EOF inside a comment: "This is an eof-in-comment parse error. Emit
    /// the current comment token. Emit an end-of-file token."
    pub(super) fn emit_comment_at_eof(&mut self) {
        self.parse_error(ParseErrorKind::EofInComment);
        self.emit_current_token();
        self.emit_eof_token();
    }

    /// EOF inside a DOCTYPE: "This is an eof-in-doctype parse error. Set the
    /// current DOCTYPE token's force-quirks flag to on. Emit the current
    /// DOCTYPE token. Emit an end-of-file token."
    pub(super) fn emit_doctype_at_eof(&mut self) {
        self.parse_error(ParseErrorKind::EofInDoctype);
        self.emitter.set_force_quirks();
        self.emit_current_token();
        self.emit_eof_token();
    }
}

// =============================================================================
// Raw Text End Tag Helpers
// =============================================================================

impl<S: CharSource> HTMLTokenizer<S> {
    /// [§ 13.2.5 Appropriate end tag token](https://html.spec.whatwg.org/multipage/parsing.html#appropriate-end-tag-token)
    ///
    /// Used to decide whether `</title>` closes the current `<title>`.
    pub(super) fn is_appropriate_end_tag_token(&self) -> bool {
        self.raw_text.matches_end_tag(self.emitter.tag_name())
    }

    /// Begin a provisional end tag inside raw text.
    pub(super) fn start_end_tag(&mut self) {
        self.emitter.start_tag(TagKind::End);
    }

    /// The "anything else" entry of every raw-text end tag name state.
    ///
    /// "Emit a U+003C LESS-THAN SIGN character token, a U+002F SOLIDUS
    /// character token, and a character token for each of the characters in
    /// the temporary buffer (in the order they were added to the buffer).
    /// Reconsume in the `text_state` state."
    ///
    /// The provisional end tag is dropped: `</badtag>` inside a script stays
    /// part of the script's text.
    pub(super) fn emit_end_tag_name_anything_else(&mut self, text_state: TokenizerState) {
        self.emitter.push_text_str("</");
        self.emitter.push_text_str(&self.temporary_buffer);
        self.emitter.discard();
        self.reconsume_in(text_state);
    }
}

// =============================================================================
// Error Handling
// =============================================================================

impl<S: CharSource> HTMLTokenizer<S> {
    /// [§ 13.2.2 Parse errors](https://html.spec.whatwg.org/multipage/parsing.html#parse-errors)
    ///
    /// Records a parse error at the current input character (or at the end
    /// of input) and reports it through the warning channel. Parse errors
    /// are not fatal; the caller continues with the state's recovery step.
    pub(super) fn parse_error(&mut self, kind: ParseErrorKind) {
        let position = if self.current_input_character.is_some() {
            self.reader.last_position()
        } else {
            self.reader.position()
        };
        self.record_error(kind, position);
    }

    fn record_error(&mut self, kind: ParseErrorKind, position: Position) {
        let code: &'static str = kind.into();
        warn_once("HTML Tokenizer", code);
        self.errors.push(ParseError { kind, position });
    }
}
