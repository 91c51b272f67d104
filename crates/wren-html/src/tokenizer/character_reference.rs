//! Character reference states.
//!
//! [§ 13.2.5.72 Character reference state](https://html.spec.whatwg.org/multipage/parsing.html#character-reference-state)
//!
//! A reference is entered from a text state or an attribute value state,
//! which is remembered as the return state. Whatever the reference resolves
//! to goes back to that state: appended to the attribute value or emitted
//! as text.

use super::machine::HTMLTokenizer;
use super::state::TokenizerState;
use crate::entities::{ReferenceContext, longest_match, numeric};
use crate::error::ParseErrorKind;
use crate::reader::CharSource;

impl<S: CharSource> HTMLTokenizer<S> {
    /// [§ 13.2.5.72 Character reference state](https://html.spec.whatwg.org/multipage/parsing.html#character-reference-state)
    pub(super) fn handle_character_reference_state(&mut self) {
        // "Set the temporary buffer to the empty string. Append a U+0026 AMPERSAND (&)
        // character to the temporary buffer."
        self.temporary_buffer.clear();
        self.temporary_buffer.push('&');
        match self.current_input_character {
            // "ASCII alphanumeric - Reconsume in the named character reference state."
            Some(c) if c.is_ascii_alphanumeric() => {
                self.reconsume_in(TokenizerState::NamedCharacterReference);
            }
            // "U+0023 NUMBER SIGN (#) - Append the current input character to the temporary
            // buffer. Switch to the numeric character reference state."
            Some('#') => {
                self.temporary_buffer.push('#');
                self.switch_to(TokenizerState::NumericCharacterReference);
            }
            // "Anything else - Flush code points consumed as a character reference.
            // Reconsume in the return state."
            _ => {
                self.flush_code_points_consumed_as_character_reference();
                self.reconsume_in_return_state();
            }
        }
    }

    /// [§ 13.2.5.73 Named character reference state](https://html.spec.whatwg.org/multipage/parsing.html#named-character-reference-state)
    ///
    /// "Consume the maximum number of characters possible, where the consumed
    /// characters are one of the identifiers in the named character references
    /// table. Append each character to the temporary buffer when it's consumed."
    ///
    /// Nothing is consumed unless a name matches.
    pub(super) fn handle_named_character_reference_state(&mut self) {
        let reader = &mut self.reader;
        let Some(matched) = longest_match(|i| reader.peek(i)) else {
            // "Otherwise - Flush code points consumed as a character reference. Switch to
            // the ambiguous ampersand state."
            self.flush_code_points_consumed_as_character_reference();
            self.switch_to(TokenizerState::AmbiguousAmpersand);
            return;
        };
        self.reader.skip(matched.len());
        self.temporary_buffer.push_str(matched.name);

        let next = self.reader.peek(0);
        if self.reference_context().withdraws(&matched, next) {
            self.flush_code_points_consumed_as_character_reference();
            self.switch_to_return_state();
            return;
        }

        // "If the last character matched is not a U+003B SEMICOLON character (;), then
        // this is a missing-semicolon-after-character-reference parse error."
        if !matched.is_terminated() {
            self.parse_error(ParseErrorKind::MissingSemicolonAfterCharacterReference);
        }
        // "Set the temporary buffer to the empty string. Append one or two characters
        // corresponding to the character reference name to the temporary buffer. Flush code
        // points consumed as a character reference. Switch to the return state."
        self.temporary_buffer.clear();
        self.temporary_buffer.push_str(matched.value);
        self.flush_code_points_consumed_as_character_reference();
        self.switch_to_return_state();
    }

    /// [§ 13.2.5.74 Ambiguous ampersand state](https://html.spec.whatwg.org/multipage/parsing.html#ambiguous-ampersand-state)
    pub(super) fn handle_ambiguous_ampersand_state(&mut self) {
        match self.current_input_character {
            // "ASCII alphanumeric - If the character reference was consumed as part of an
            // attribute, then append the current input character to the current attribute's
            // value. Otherwise, emit the current input character as a character token."
            Some(c) if c.is_ascii_alphanumeric() => {
                if self.consumed_as_part_of_attribute() {
                    self.emitter.push_attribute_value(c);
                } else {
                    self.emit_char(c);
                }
            }
            // "U+003B SEMICOLON (;) - This is an unknown-named-character-reference parse
            // error. Reconsume in the return state."
            Some(';') => {
                self.parse_error(ParseErrorKind::UnknownNamedCharacterReference);
                self.reconsume_in_return_state();
            }
            _ => {
                self.reconsume_in_return_state();
            }
        }
    }

    /// [§ 13.2.5.75 Numeric character reference state](https://html.spec.whatwg.org/multipage/parsing.html#numeric-character-reference-state)
    pub(super) fn handle_numeric_character_reference_state(&mut self) {
        // "Set the character reference code to zero (0)."
        self.character_reference_code = 0;
        match self.current_input_character {
            // "U+0078 LATIN SMALL LETTER X, U+0058 LATIN CAPITAL LETTER X - Append the
            // current input character to the temporary buffer. Switch to the hexadecimal
            // character reference start state."
            Some(c @ ('x' | 'X')) => {
                self.temporary_buffer.push(c);
                self.switch_to(TokenizerState::HexadecimalCharacterReferenceStart);
            }
            _ => {
                self.reconsume_in(TokenizerState::DecimalCharacterReferenceStart);
            }
        }
    }

    /// [§ 13.2.5.76 Hexadecimal character reference start state](https://html.spec.whatwg.org/multipage/parsing.html#hexadecimal-character-reference-start-state)
    /// [§ 13.2.5.77 Decimal character reference start state](https://html.spec.whatwg.org/multipage/parsing.html#decimal-character-reference-start-state)
    pub(super) fn handle_numeric_character_reference_start_state(&mut self, radix: u32) {
        match self.current_input_character {
            Some(c) if c.is_digit(radix) => {
                self.reconsume_in(if radix == 16 {
                    TokenizerState::HexadecimalCharacterReference
                } else {
                    TokenizerState::DecimalCharacterReference
                });
            }
            // "Anything else - This is an absence-of-digits-in-numeric-character-reference
            // parse error. Flush code points consumed as a character reference. Reconsume in
            // the return state."
            _ => {
                self.parse_error(ParseErrorKind::AbsenceOfDigitsInNumericCharacterReference);
                self.flush_code_points_consumed_as_character_reference();
                self.reconsume_in_return_state();
            }
        }
    }

    /// [§ 13.2.5.78 Hexadecimal character reference state](https://html.spec.whatwg.org/multipage/parsing.html#hexadecimal-character-reference-state)
    /// [§ 13.2.5.79 Decimal character reference state](https://html.spec.whatwg.org/multipage/parsing.html#decimal-character-reference-state)
    pub(super) fn handle_numeric_character_reference_digits_state(&mut self, radix: u32) {
        match self.current_input_character {
            Some(c) if c.is_digit(radix) => {
                if let Some(digit) = c.to_digit(radix) {
                    self.character_reference_code =
                        numeric::accumulate(self.character_reference_code, radix, digit);
                }
            }
            // "U+003B SEMICOLON - Switch to the numeric character reference end state."
            Some(';') => {
                self.switch_to(TokenizerState::NumericCharacterReferenceEnd);
            }
            // "Anything else - This is a missing-semicolon-after-character-reference parse
            // error. Reconsume in the numeric character reference end state."
            _ => {
                self.parse_error(ParseErrorKind::MissingSemicolonAfterCharacterReference);
                self.reconsume_in(TokenizerState::NumericCharacterReferenceEnd);
            }
        }
    }

    /// [§ 13.2.5.80 Numeric character reference end state](https://html.spec.whatwg.org/multipage/parsing.html#numeric-character-reference-end-state)
    ///
    /// Checks the character reference code without consuming anything.
    pub(super) fn handle_numeric_character_reference_end_state(&mut self) {
        let (c, error) = numeric::resolve(self.character_reference_code);
        if let Some(kind) = error {
            self.parse_error(kind);
        }
        // "Set the temporary buffer to the empty string. Append a code point equal to the
        // character reference code to the temporary buffer. Flush code points consumed as a
        // character reference. Switch to the return state."
        self.temporary_buffer.clear();
        self.temporary_buffer.push(c);
        self.flush_code_points_consumed_as_character_reference();
        self.switch_to_return_state();
    }

    /// "If the character reference was consumed as part of an attribute (return state is
    /// either attribute value (double-quoted) state, attribute value (single-quoted) state
    /// or attribute value (unquoted) state)..."
    fn consumed_as_part_of_attribute(&self) -> bool {
        matches!(
            self.return_state,
            TokenizerState::AttributeValueDoubleQuoted
                | TokenizerState::AttributeValueSingleQuoted
                | TokenizerState::AttributeValueUnquoted
        )
    }

    fn reference_context(&self) -> ReferenceContext {
        if self.consumed_as_part_of_attribute() {
            ReferenceContext::Attribute
        } else {
            ReferenceContext::Text
        }
    }

    /// "Flush code points consumed as a character reference"
    ///
    /// "If the character reference was consumed as part of an attribute, then append each
    /// character to the current attribute's value. Otherwise, emit each character as a
    /// character token."
    fn flush_code_points_consumed_as_character_reference(&mut self) {
        if self.consumed_as_part_of_attribute() {
            self.emitter.push_attribute_value_str(&self.temporary_buffer);
        } else {
            self.emitter.push_text_str(&self.temporary_buffer);
        }
        self.temporary_buffer.clear();
    }
}
