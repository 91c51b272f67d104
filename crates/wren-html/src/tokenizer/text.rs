//! Text content states: data, RCDATA, RAWTEXT and PLAINTEXT, with the
//! end tag recognition shared by every raw-text grammar.

use super::machine::HTMLTokenizer;
use super::state::TokenizerState;
use crate::error::ParseErrorKind;
use crate::reader::CharSource;

impl<S: CharSource> HTMLTokenizer<S> {
    /// [§ 13.2.5.1 Data state](https://html.spec.whatwg.org/multipage/parsing.html#data-state)
    pub(super) fn handle_data_state(&mut self) {
        match self.current_input_character {
            // "U+0026 AMPERSAND (&) - Set the return state to the data state.
            // Switch to the character reference state."
            Some('&') => {
                self.return_state = TokenizerState::Data;
                self.switch_to(TokenizerState::CharacterReference);
            }
            // "U+003C LESS-THAN SIGN (<) - Switch to the tag open state."
            Some('<') => {
                self.switch_to(TokenizerState::TagOpen);
            }
            // "U+0000 NULL - This is an unexpected-null-character parse error."
            //
            // NOTE: The standard emits the NULL and lets tree construction
            // drop it. Text tokens never carry a NULL here; it becomes U+FFFD
            // as in the other text states.
            Some('\0') => {
                self.parse_error(ParseErrorKind::UnexpectedNullCharacter);
                self.emit_char('\u{FFFD}');
            }
            // "EOF - Emit an end-of-file token."
            None => {
                self.emit_eof_token();
            }
            // "Anything else - Emit the current input character as a character token."
            Some(c) => {
                self.emit_char(c);
            }
        }
    }

    /// [§ 13.2.5.2 RCDATA state](https://html.spec.whatwg.org/multipage/parsing.html#rcdata-state)
    pub(super) fn handle_rcdata_state(&mut self) {
        match self.current_input_character {
            // "U+0026 AMPERSAND (&)"
            // "Set the return state to the RCDATA state. Switch to the character reference state."
            Some('&') => {
                self.return_state = TokenizerState::RCDATA;
                self.switch_to(TokenizerState::CharacterReference);
            }
            // "U+003C LESS-THAN SIGN (<)"
            // "Switch to the RCDATA less-than sign state."
            Some('<') => {
                self.switch_to(TokenizerState::RCDATALessThanSign);
            }
            // "U+0000 NULL"
            // "This is an unexpected-null-character parse error. Emit a U+FFFD REPLACEMENT
            // CHARACTER character token."
            Some('\0') => {
                self.parse_error(ParseErrorKind::UnexpectedNullCharacter);
                self.emit_char('\u{FFFD}');
            }
            // "EOF"
            // "Emit an end-of-file token."
            None => {
                self.emit_eof_token();
            }
            // "Anything else"
            // "Emit the current input character as a character token."
            Some(c) => {
                self.emit_char(c);
            }
        }
    }

    /// [§ 13.2.5.3 RAWTEXT state](https://html.spec.whatwg.org/multipage/parsing.html#rawtext-state)
    pub(super) fn handle_rawtext_state(&mut self) {
        match self.current_input_character {
            // "U+003C LESS-THAN SIGN (<)"
            // "Switch to the RAWTEXT less-than sign state."
            Some('<') => {
                self.switch_to(TokenizerState::RAWTEXTLessThanSign);
            }
            // "U+0000 NULL"
            // "This is an unexpected-null-character parse error. Emit a U+FFFD REPLACEMENT
            // CHARACTER character token."
            Some('\0') => {
                self.parse_error(ParseErrorKind::UnexpectedNullCharacter);
                self.emit_char('\u{FFFD}');
            }
            // "EOF"
            // "Emit an end-of-file token."
            None => {
                self.emit_eof_token();
            }
            // "Anything else"
            // "Emit the current input character as a character token."
            Some(c) => {
                self.emit_char(c);
            }
        }
    }

    /// [§ 13.2.5.5 PLAINTEXT state](https://html.spec.whatwg.org/multipage/parsing.html#plaintext-state)
    ///
    /// There is no way out of this state other than EOF.
    pub(super) fn handle_plaintext_state(&mut self) {
        match self.current_input_character {
            Some('\0') => {
                self.parse_error(ParseErrorKind::UnexpectedNullCharacter);
                self.emit_char('\u{FFFD}');
            }
            None => {
                self.emit_eof_token();
            }
            Some(c) => {
                self.emit_char(c);
            }
        }
    }

    /// [§ 13.2.5.9 RCDATA less-than sign state](https://html.spec.whatwg.org/multipage/parsing.html#rcdata-less-than-sign-state)
    /// [§ 13.2.5.12 RAWTEXT less-than sign state](https://html.spec.whatwg.org/multipage/parsing.html#rawtext-less-than-sign-state)
    ///
    /// Both states differ only in where they go next.
    pub(super) fn handle_raw_less_than_sign_state(
        &mut self,
        end_tag_open: TokenizerState,
        text_state: TokenizerState,
    ) {
        match self.current_input_character {
            // "U+002F SOLIDUS (/)"
            // "Set the temporary buffer to the empty string. Switch to the ... end tag open state."
            Some('/') => {
                self.temporary_buffer.clear();
                self.switch_to(end_tag_open);
            }
            // "Anything else"
            // "Emit a U+003C LESS-THAN SIGN character token. Reconsume in the ... state."
            _ => {
                self.emit_char('<');
                self.reconsume_in(text_state);
            }
        }
    }

    /// [§ 13.2.5.10 RCDATA end tag open state](https://html.spec.whatwg.org/multipage/parsing.html#rcdata-end-tag-open-state)
    /// [§ 13.2.5.13 RAWTEXT end tag open state](https://html.spec.whatwg.org/multipage/parsing.html#rawtext-end-tag-open-state)
    /// [§ 13.2.5.16 Script data end tag open state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-end-tag-open-state)
    /// [§ 13.2.5.24 Script data escaped end tag open state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-escaped-end-tag-open-state)
    pub(super) fn handle_raw_end_tag_open_state(
        &mut self,
        end_tag_name: TokenizerState,
        text_state: TokenizerState,
    ) {
        match self.current_input_character {
            // "ASCII alpha"
            // "Create a new end tag token, set its tag name to the empty string. Reconsume in
            // the ... end tag name state."
            Some(c) if c.is_ascii_alphabetic() => {
                self.start_end_tag();
                self.reconsume_in(end_tag_name);
            }
            // "Anything else"
            // "Emit a U+003C LESS-THAN SIGN character token and a U+002F SOLIDUS character token.
            // Reconsume in the ... state."
            _ => {
                self.emit_str("</");
                self.reconsume_in(text_state);
            }
        }
    }

    /// [§ 13.2.5.11 RCDATA end tag name state](https://html.spec.whatwg.org/multipage/parsing.html#rcdata-end-tag-name-state)
    /// [§ 13.2.5.14 RAWTEXT end tag name state](https://html.spec.whatwg.org/multipage/parsing.html#rawtext-end-tag-name-state)
    /// [§ 13.2.5.17 Script data end tag name state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-end-tag-name-state)
    /// [§ 13.2.5.25 Script data escaped end tag name state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-escaped-end-tag-name-state)
    ///
    /// The end tag is only real if it closes the open raw-text element.
    /// Otherwise everything read since the `<` goes back out as text.
    pub(super) fn handle_raw_end_tag_name_state(&mut self, text_state: TokenizerState) {
        match self.current_input_character {
            // "U+0009 CHARACTER TABULATION (tab)"
            // "U+000A LINE FEED (LF)"
            // "U+000C FORM FEED (FF)"
            // "U+0020 SPACE"
            // "If the current end tag token is an appropriate end tag token, then switch to the
            // before attribute name state. Otherwise, treat it as per the "anything else" entry below."
            Some(c) if Self::is_whitespace_char(c) && self.is_appropriate_end_tag_token() => {
                self.switch_to(TokenizerState::BeforeAttributeName);
            }
            // "U+002F SOLIDUS (/)"
            // "If the current end tag token is an appropriate end tag token, then switch to the
            // self-closing start tag state."
            Some('/') if self.is_appropriate_end_tag_token() => {
                self.switch_to(TokenizerState::SelfClosingStartTag);
            }
            // "U+003E GREATER-THAN SIGN (>)"
            // "If the current end tag token is an appropriate end tag token, then switch to the
            // data state and emit the current tag token."
            Some('>') if self.is_appropriate_end_tag_token() => {
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            // "ASCII upper alpha"
            // "Append the lowercase version of the current input character (add 0x0020 to the
            // character's code point) to the current tag token's tag name. Append the current
            // input character to the temporary buffer."
            // "ASCII lower alpha"
            // "Append the current input character to the current tag token's tag name. Append
            // the current input character to the temporary buffer."
            Some(c) if c.is_ascii_alphabetic() => {
                self.emitter.push_tag_name(c.to_ascii_lowercase());
                self.temporary_buffer.push(c);
            }
            // "Anything else"
            _ => {
                self.emit_end_tag_name_anything_else(text_state);
            }
        }
    }
}
