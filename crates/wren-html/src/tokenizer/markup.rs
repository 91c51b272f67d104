//! Markup declarations: comments, DOCTYPEs and CDATA sections.

use super::machine::HTMLTokenizer;
use super::state::TokenizerState;
use crate::error::ParseErrorKind;
use crate::reader::CharSource;

impl<S: CharSource> HTMLTokenizer<S> {
    /// [§ 13.2.5.41 Bogus comment state](https://html.spec.whatwg.org/multipage/parsing.html#bogus-comment-state)
    pub(super) fn handle_bogus_comment_state(&mut self) {
        match self.current_input_character {
            // "U+003E GREATER-THAN SIGN (>) - Switch to the data state. Emit the current comment token."
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            // "EOF - Emit the comment. Emit an end-of-file token."
            None => {
                self.emit_current_token();
                self.emit_eof_token();
            }
            // "U+0000 NULL - This is an unexpected-null-character parse error. Append a
            // U+FFFD REPLACEMENT CHARACTER character to the comment token's data."
            Some('\0') => {
                self.parse_error(ParseErrorKind::UnexpectedNullCharacter);
                self.emitter.push_comment('\u{FFFD}');
            }
            // "Anything else - Append the current input character to the comment token's data."
            Some(c) => {
                self.emitter.push_comment(c);
            }
        }
    }

    /// [§ 13.2.5.42 Markup declaration open state](https://html.spec.whatwg.org/multipage/parsing.html#markup-declaration-open-state)
    ///
    /// This state does not consume a character up front; it looks at what
    /// follows the `!` and only consumes a keyword it recognizes.
    pub(super) fn handle_markup_declaration_open_state(&mut self) {
        // "Two U+002D HYPHEN-MINUS characters (-) - Consume those two characters, create a
        // comment token whose data is the empty string, and switch to the comment start state."
        if self.reader.next_few_characters_are("--", false) {
            self.reader.skip(2);
            self.emitter.start_comment("");
            self.switch_to(TokenizerState::CommentStart);
        }
        // "ASCII case-insensitive match for the word "DOCTYPE" - Consume those characters and
        // switch to the DOCTYPE state."
        else if self.reader.next_few_characters_are("DOCTYPE", true) {
            self.reader.skip(7);
            self.switch_to(TokenizerState::DOCTYPE);
        }
        // "The string "[CDATA[" (the five uppercase letters "CDATA" with a U+005B LEFT SQUARE
        // BRACKET character before and after) - Consume those characters. If there is an
        // adjusted current node and it is not an element in the HTML namespace, then switch to
        // the CDATA section state. Otherwise, this is a cdata-in-html-content parse error.
        // Create a comment token whose data is the "[CDATA[" string. Switch to the bogus
        // comment state."
        else if self.reader.next_few_characters_are("[CDATA[", false) {
            self.reader.skip(7);
            if self.cdata_allowed {
                self.switch_to(TokenizerState::CDATASection);
            } else {
                self.parse_error(ParseErrorKind::CdataInHtmlContent);
                self.emitter.start_comment("[CDATA[");
                self.switch_to(TokenizerState::BogusComment);
            }
        }
        // "Anything else - This is an incorrectly-opened-comment parse error. Create a comment
        // token whose data is the empty string. Switch to the bogus comment state (don't consume
        // anything in the current state)."
        else {
            self.parse_error(ParseErrorKind::IncorrectlyOpenedComment);
            self.emitter.start_comment("");
            self.switch_to(TokenizerState::BogusComment);
        }
    }

    // ===== Comments =====

    /// [§ 13.2.5.43 Comment start state](https://html.spec.whatwg.org/multipage/parsing.html#comment-start-state)
    pub(super) fn handle_comment_start_state(&mut self) {
        match self.current_input_character {
            Some('-') => {
                self.switch_to(TokenizerState::CommentStartDash);
            }
            // "U+003E GREATER-THAN SIGN (>) - This is an abrupt-closing-of-empty-comment parse
            // error. Switch to the data state. Emit the current comment token."
            Some('>') => {
                self.parse_error(ParseErrorKind::AbruptClosingOfEmptyComment);
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            _ => {
                self.reconsume_in(TokenizerState::Comment);
            }
        }
    }

    /// [§ 13.2.5.44 Comment start dash state](https://html.spec.whatwg.org/multipage/parsing.html#comment-start-dash-state)
    pub(super) fn handle_comment_start_dash_state(&mut self) {
        match self.current_input_character {
            Some('-') => {
                self.switch_to(TokenizerState::CommentEnd);
            }
            Some('>') => {
                self.parse_error(ParseErrorKind::AbruptClosingOfEmptyComment);
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            None => {
                self.emit_comment_at_eof();
            }
            // "Anything else - Append a U+002D HYPHEN-MINUS character (-) to the comment
            // token's data. Reconsume in the comment state."
            Some(_) => {
                self.emitter.push_comment('-');
                self.reconsume_in(TokenizerState::Comment);
            }
        }
    }

    /// [§ 13.2.5.45 Comment state](https://html.spec.whatwg.org/multipage/parsing.html#comment-state)
    pub(super) fn handle_comment_state(&mut self) {
        match self.current_input_character {
            // "U+003C LESS-THAN SIGN (<) - Append the current input character to the comment
            // token's data. Switch to the comment less-than sign state."
            Some('<') => {
                self.emitter.push_comment('<');
                self.switch_to(TokenizerState::CommentLessThanSign);
            }
            Some('-') => {
                self.switch_to(TokenizerState::CommentEndDash);
            }
            Some('\0') => {
                self.parse_error(ParseErrorKind::UnexpectedNullCharacter);
                self.emitter.push_comment('\u{FFFD}');
            }
            None => {
                self.emit_comment_at_eof();
            }
            Some(c) => {
                self.emitter.push_comment(c);
            }
        }
    }

    /// [§ 13.2.5.46 Comment less-than sign state](https://html.spec.whatwg.org/multipage/parsing.html#comment-less-than-sign-state)
    pub(super) fn handle_comment_less_than_sign_state(&mut self) {
        match self.current_input_character {
            Some('!') => {
                self.emitter.push_comment('!');
                self.switch_to(TokenizerState::CommentLessThanSignBang);
            }
            Some('<') => {
                self.emitter.push_comment('<');
            }
            _ => {
                self.reconsume_in(TokenizerState::Comment);
            }
        }
    }

    /// [§ 13.2.5.47 Comment less-than sign bang state](https://html.spec.whatwg.org/multipage/parsing.html#comment-less-than-sign-bang-state)
    pub(super) fn handle_comment_less_than_sign_bang_state(&mut self) {
        match self.current_input_character {
            Some('-') => {
                self.switch_to(TokenizerState::CommentLessThanSignBangDash);
            }
            _ => {
                self.reconsume_in(TokenizerState::Comment);
            }
        }
    }

    /// [§ 13.2.5.48 Comment less-than sign bang dash state](https://html.spec.whatwg.org/multipage/parsing.html#comment-less-than-sign-bang-dash-state)
    pub(super) fn handle_comment_less_than_sign_bang_dash_state(&mut self) {
        match self.current_input_character {
            Some('-') => {
                self.switch_to(TokenizerState::CommentLessThanSignBangDashDash);
            }
            _ => {
                self.reconsume_in(TokenizerState::CommentEndDash);
            }
        }
    }

    /// [§ 13.2.5.49 Comment less-than sign bang dash dash state](https://html.spec.whatwg.org/multipage/parsing.html#comment-less-than-sign-bang-dash-dash-state)
    pub(super) fn handle_comment_less_than_sign_bang_dash_dash_state(&mut self) {
        match self.current_input_character {
            // "U+003E GREATER-THAN SIGN (>), EOF - Reconsume in the comment end state."
            Some('>') | None => {
                self.reconsume_in(TokenizerState::CommentEnd);
            }
            // "Anything else - This is a nested-comment parse error. Reconsume in the
            // comment end state."
            Some(_) => {
                self.parse_error(ParseErrorKind::NestedComment);
                self.reconsume_in(TokenizerState::CommentEnd);
            }
        }
    }

    /// [§ 13.2.5.50 Comment end dash state](https://html.spec.whatwg.org/multipage/parsing.html#comment-end-dash-state)
    pub(super) fn handle_comment_end_dash_state(&mut self) {
        match self.current_input_character {
            Some('-') => {
                self.switch_to(TokenizerState::CommentEnd);
            }
            None => {
                self.emit_comment_at_eof();
            }
            Some(_) => {
                self.emitter.push_comment('-');
                self.reconsume_in(TokenizerState::Comment);
            }
        }
    }

    /// [§ 13.2.5.51 Comment end state](https://html.spec.whatwg.org/multipage/parsing.html#comment-end-state)
    pub(super) fn handle_comment_end_state(&mut self) {
        match self.current_input_character {
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            Some('!') => {
                self.switch_to(TokenizerState::CommentEndBang);
            }
            // "U+002D HYPHEN-MINUS (-) - Append a U+002D HYPHEN-MINUS character (-) to the
            // comment token's data."
            Some('-') => {
                self.emitter.push_comment('-');
            }
            None => {
                self.emit_comment_at_eof();
            }
            // "Anything else - Append two U+002D HYPHEN-MINUS characters (-) to the comment
            // token's data. Reconsume in the comment state."
            Some(_) => {
                self.emitter.push_comment_str("--");
                self.reconsume_in(TokenizerState::Comment);
            }
        }
    }

    /// [§ 13.2.5.52 Comment end bang state](https://html.spec.whatwg.org/multipage/parsing.html#comment-end-bang-state)
    pub(super) fn handle_comment_end_bang_state(&mut self) {
        match self.current_input_character {
            Some('-') => {
                self.emitter.push_comment_str("--!");
                self.switch_to(TokenizerState::CommentEndDash);
            }
            // "U+003E GREATER-THAN SIGN (>) - This is an incorrectly-closed-comment parse
            // error. Switch to the data state. Emit the current comment token."
            Some('>') => {
                self.parse_error(ParseErrorKind::IncorrectlyClosedComment);
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            None => {
                self.emit_comment_at_eof();
            }
            Some(_) => {
                self.emitter.push_comment_str("--!");
                self.reconsume_in(TokenizerState::Comment);
            }
        }
    }

    // ===== DOCTYPE =====

    /// [§ 13.2.5.53 DOCTYPE state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-state)
    pub(super) fn handle_doctype_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {
                self.switch_to(TokenizerState::BeforeDOCTYPEName);
            }
            Some('>') => {
                self.reconsume_in(TokenizerState::BeforeDOCTYPEName);
            }
            // "EOF - This is an eof-in-doctype parse error. Create a new DOCTYPE token. Set its
            // force-quirks flag to on. Emit the current token. Emit an end-of-file token."
            None => {
                self.emitter.start_doctype();
                self.emit_doctype_at_eof();
            }
            // "Anything else - This is a missing-whitespace-before-doctype-name parse error.
            // Reconsume in the before DOCTYPE name state."
            Some(_) => {
                self.parse_error(ParseErrorKind::MissingWhitespaceBeforeDoctypeName);
                self.reconsume_in(TokenizerState::BeforeDOCTYPEName);
            }
        }
    }

    /// [§ 13.2.5.54 Before DOCTYPE name state](https://html.spec.whatwg.org/multipage/parsing.html#before-doctype-name-state)
    pub(super) fn handle_before_doctype_name_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {}
            // "ASCII upper alpha - Create a new DOCTYPE token. Set the token's name to the
            // lowercase version of the current input character. Switch to the DOCTYPE name state."
            Some(c) if c.is_ascii_uppercase() => {
                self.emitter.start_doctype();
                self.emitter.push_doctype_name(c.to_ascii_lowercase());
                self.switch_to(TokenizerState::DOCTYPEName);
            }
            Some('\0') => {
                self.parse_error(ParseErrorKind::UnexpectedNullCharacter);
                self.emitter.start_doctype();
                self.emitter.push_doctype_name('\u{FFFD}');
                self.switch_to(TokenizerState::DOCTYPEName);
            }
            // "U+003E GREATER-THAN SIGN (>) - This is a missing-doctype-name parse error.
            // Create a new DOCTYPE token. Set its force-quirks flag to on. Switch to the data
            // state. Emit the current token."
            Some('>') => {
                self.parse_error(ParseErrorKind::MissingDoctypeName);
                self.emitter.start_doctype();
                self.emitter.set_force_quirks();
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            None => {
                self.emitter.start_doctype();
                self.emit_doctype_at_eof();
            }
            Some(c) => {
                self.emitter.start_doctype();
                self.emitter.push_doctype_name(c);
                self.switch_to(TokenizerState::DOCTYPEName);
            }
        }
    }

    /// [§ 13.2.5.55 DOCTYPE name state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-name-state)
    pub(super) fn handle_doctype_name_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {
                self.switch_to(TokenizerState::AfterDOCTYPEName);
            }
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            Some(c) if c.is_ascii_uppercase() => {
                self.emitter.push_doctype_name(c.to_ascii_lowercase());
            }
            Some('\0') => {
                self.parse_error(ParseErrorKind::UnexpectedNullCharacter);
                self.emitter.push_doctype_name('\u{FFFD}');
            }
            None => {
                self.emit_doctype_at_eof();
            }
            Some(c) => {
                self.emitter.push_doctype_name(c);
            }
        }
    }

    /// [§ 13.2.5.56 After DOCTYPE name state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-name-state)
    pub(super) fn handle_after_doctype_name_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {}
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            None => {
                self.emit_doctype_at_eof();
            }
            // "If the six characters starting from the current input character are an ASCII
            // case-insensitive match for the word "PUBLIC", then consume those characters and
            // switch to the after DOCTYPE public keyword state."
            Some('p' | 'P') if self.reader.next_few_characters_are("ublic", true) => {
                self.reader.skip(5);
                self.switch_to(TokenizerState::AfterDOCTYPEPublicKeyword);
            }
            // "Otherwise, if the six characters starting from the current input character are
            // an ASCII case-insensitive match for the word "SYSTEM", then consume those characters
            // and switch to the after DOCTYPE system keyword state."
            Some('s' | 'S') if self.reader.next_few_characters_are("ystem", true) => {
                self.reader.skip(5);
                self.switch_to(TokenizerState::AfterDOCTYPESystemKeyword);
            }
            // "Otherwise, this is an invalid-character-sequence-after-doctype-name parse error.
            // Set the current DOCTYPE token's force-quirks flag to on. Reconsume in the bogus
            // DOCTYPE state."
            Some(_) => {
                self.parse_error(ParseErrorKind::InvalidCharacterSequenceAfterDoctypeName);
                self.emitter.set_force_quirks();
                self.reconsume_in(TokenizerState::BogusDOCTYPE);
            }
        }
    }

    /// [§ 13.2.5.57 After DOCTYPE public keyword state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-public-keyword-state)
    /// [§ 13.2.5.63 After DOCTYPE system keyword state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-system-keyword-state)
    pub(super) fn handle_after_doctype_keyword_state(&mut self, identifier: DoctypeIdentifier) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {
                self.switch_to(identifier.before_state());
            }
            // "U+0022 QUOTATION MARK (") - This is a missing-whitespace-after-doctype-public-keyword
            // parse error. Set the current DOCTYPE token's public identifier to the empty string
            // (not missing), then switch to the DOCTYPE public identifier (double-quoted) state."
            Some(quote @ ('"' | '\'')) => {
                self.parse_error(identifier.missing_whitespace_error());
                self.begin_doctype_identifier(identifier, quote);
            }
            // "U+003E GREATER-THAN SIGN (>) - This is a missing-doctype-public-identifier parse
            // error. Set the current DOCTYPE token's force-quirks flag to on. Switch to the data
            // state. Emit the current DOCTYPE token."
            Some('>') => {
                self.parse_error(identifier.missing_error());
                self.emitter.set_force_quirks();
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            None => {
                self.emit_doctype_at_eof();
            }
            Some(_) => {
                self.parse_error(identifier.missing_quote_error());
                self.emitter.set_force_quirks();
                self.reconsume_in(TokenizerState::BogusDOCTYPE);
            }
        }
    }

    /// [§ 13.2.5.58 Before DOCTYPE public identifier state](https://html.spec.whatwg.org/multipage/parsing.html#before-doctype-public-identifier-state)
    /// [§ 13.2.5.64 Before DOCTYPE system identifier state](https://html.spec.whatwg.org/multipage/parsing.html#before-doctype-system-identifier-state)
    pub(super) fn handle_before_doctype_identifier_state(&mut self, identifier: DoctypeIdentifier) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {}
            Some(quote @ ('"' | '\'')) => {
                self.begin_doctype_identifier(identifier, quote);
            }
            Some('>') => {
                self.parse_error(identifier.missing_error());
                self.emitter.set_force_quirks();
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            None => {
                self.emit_doctype_at_eof();
            }
            Some(_) => {
                self.parse_error(identifier.missing_quote_error());
                self.emitter.set_force_quirks();
                self.reconsume_in(TokenizerState::BogusDOCTYPE);
            }
        }
    }

    /// [§ 13.2.5.59 DOCTYPE public identifier (double-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-public-identifier-(double-quoted)-state)
    /// and its single-quoted and system identifier siblings.
    pub(super) fn handle_doctype_identifier_quoted_state(
        &mut self,
        identifier: DoctypeIdentifier,
        quote: char,
    ) {
        match self.current_input_character {
            Some(c) if c == quote => {
                self.switch_to(identifier.after_state());
            }
            Some('\0') => {
                self.parse_error(ParseErrorKind::UnexpectedNullCharacter);
                self.push_doctype_identifier(identifier, '\u{FFFD}');
            }
            // "U+003E GREATER-THAN SIGN (>) - This is an abrupt-doctype-public-identifier parse
            // error. Set the current DOCTYPE token's force-quirks flag to on. Switch to the data
            // state. Emit the current DOCTYPE token."
            Some('>') => {
                self.parse_error(identifier.abrupt_error());
                self.emitter.set_force_quirks();
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            None => {
                self.emit_doctype_at_eof();
            }
            Some(c) => {
                self.push_doctype_identifier(identifier, c);
            }
        }
    }

    /// [§ 13.2.5.61 After DOCTYPE public identifier state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-public-identifier-state)
    pub(super) fn handle_after_doctype_public_identifier_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {
                self.switch_to(TokenizerState::BetweenDOCTYPEPublicAndSystemIdentifiers);
            }
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            // "This is a missing-whitespace-between-doctype-public-and-system-identifiers parse
            // error. Set the current DOCTYPE token's system identifier to the empty string (not
            // missing), then switch to the DOCTYPE system identifier (double-quoted) state."
            Some(quote @ ('"' | '\'')) => {
                self.parse_error(
                    ParseErrorKind::MissingWhitespaceBetweenDoctypePublicAndSystemIdentifiers,
                );
                self.begin_doctype_identifier(DoctypeIdentifier::System, quote);
            }
            None => {
                self.emit_doctype_at_eof();
            }
            Some(_) => {
                self.parse_error(ParseErrorKind::MissingQuoteBeforeDoctypeSystemIdentifier);
                self.emitter.set_force_quirks();
                self.reconsume_in(TokenizerState::BogusDOCTYPE);
            }
        }
    }

    /// [§ 13.2.5.62 Between DOCTYPE public and system identifiers state](https://html.spec.whatwg.org/multipage/parsing.html#between-doctype-public-and-system-identifiers-state)
    pub(super) fn handle_between_doctype_public_and_system_identifiers_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {}
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            Some(quote @ ('"' | '\'')) => {
                self.begin_doctype_identifier(DoctypeIdentifier::System, quote);
            }
            None => {
                self.emit_doctype_at_eof();
            }
            Some(_) => {
                self.parse_error(ParseErrorKind::MissingQuoteBeforeDoctypeSystemIdentifier);
                self.emitter.set_force_quirks();
                self.reconsume_in(TokenizerState::BogusDOCTYPE);
            }
        }
    }

    /// [§ 13.2.5.67 After DOCTYPE system identifier state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-system-identifier-state)
    pub(super) fn handle_after_doctype_system_identifier_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {}
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            None => {
                self.emit_doctype_at_eof();
            }
            // "Anything else - This is an unexpected-character-after-doctype-system-identifier
            // parse error. Reconsume in the bogus DOCTYPE state. (This does not set the current
            // DOCTYPE token's force-quirks flag to on.)"
            Some(_) => {
                self.parse_error(ParseErrorKind::UnexpectedCharacterAfterDoctypeSystemIdentifier);
                self.reconsume_in(TokenizerState::BogusDOCTYPE);
            }
        }
    }

    /// [§ 13.2.5.68 Bogus DOCTYPE state](https://html.spec.whatwg.org/multipage/parsing.html#bogus-doctype-state)
    pub(super) fn handle_bogus_doctype_state(&mut self) {
        match self.current_input_character {
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            Some('\0') => {
                self.parse_error(ParseErrorKind::UnexpectedNullCharacter);
            }
            // "EOF - Emit the DOCTYPE token. Emit an end-of-file token."
            None => {
                self.emit_current_token();
                self.emit_eof_token();
            }
            Some(_) => {}
        }
    }

    fn begin_doctype_identifier(&mut self, identifier: DoctypeIdentifier, quote: char) {
        match identifier {
            DoctypeIdentifier::Public => self.emitter.set_public_identifier_empty(),
            DoctypeIdentifier::System => self.emitter.set_system_identifier_empty(),
        }
        self.switch_to(identifier.quoted_state(quote));
    }

    fn push_doctype_identifier(&mut self, identifier: DoctypeIdentifier, c: char) {
        match identifier {
            DoctypeIdentifier::Public => self.emitter.push_public_identifier(c),
            DoctypeIdentifier::System => self.emitter.push_system_identifier(c),
        }
    }

    // ===== CDATA =====

    /// [§ 13.2.5.69 CDATA section state](https://html.spec.whatwg.org/multipage/parsing.html#cdata-section-state)
    pub(super) fn handle_cdata_section_state(&mut self) {
        match self.current_input_character {
            Some(']') => {
                self.switch_to(TokenizerState::CDATASectionBracket);
            }
            // "EOF - This is an eof-in-cdata parse error. Emit an end-of-file token."
            None => {
                self.parse_error(ParseErrorKind::EofInCdata);
                self.emit_eof_token();
            }
            Some(c) => {
                self.emit_char(c);
            }
        }
    }

    /// [§ 13.2.5.70 CDATA section bracket state](https://html.spec.whatwg.org/multipage/parsing.html#cdata-section-bracket-state)
    pub(super) fn handle_cdata_section_bracket_state(&mut self) {
        match self.current_input_character {
            Some(']') => {
                self.switch_to(TokenizerState::CDATASectionEnd);
            }
            _ => {
                self.emit_char(']');
                self.reconsume_in(TokenizerState::CDATASection);
            }
        }
    }

    /// [§ 13.2.5.71 CDATA section end state](https://html.spec.whatwg.org/multipage/parsing.html#cdata-section-end-state)
    pub(super) fn handle_cdata_section_end_state(&mut self) {
        match self.current_input_character {
            Some(']') => {
                self.emit_char(']');
            }
            Some('>') => {
                self.switch_to(TokenizerState::Data);
            }
            _ => {
                self.emit_str("]]");
                self.reconsume_in(TokenizerState::CDATASection);
            }
        }
    }
}

/// Which of the two DOCTYPE identifiers a shared state is reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum DoctypeIdentifier {
    Public,
    System,
}

impl DoctypeIdentifier {
    const fn before_state(self) -> TokenizerState {
        match self {
            Self::Public => TokenizerState::BeforeDOCTYPEPublicIdentifier,
            Self::System => TokenizerState::BeforeDOCTYPESystemIdentifier,
        }
    }

    const fn after_state(self) -> TokenizerState {
        match self {
            Self::Public => TokenizerState::AfterDOCTYPEPublicIdentifier,
            Self::System => TokenizerState::AfterDOCTYPESystemIdentifier,
        }
    }

    const fn quoted_state(self, quote: char) -> TokenizerState {
        match (self, quote) {
            (Self::Public, '"') => TokenizerState::DOCTYPEPublicIdentifierDoubleQuoted,
            (Self::Public, _) => TokenizerState::DOCTYPEPublicIdentifierSingleQuoted,
            (Self::System, '"') => TokenizerState::DOCTYPESystemIdentifierDoubleQuoted,
            (Self::System, _) => TokenizerState::DOCTYPESystemIdentifierSingleQuoted,
        }
    }

    const fn missing_whitespace_error(self) -> ParseErrorKind {
        match self {
            Self::Public => ParseErrorKind::MissingWhitespaceAfterDoctypePublicKeyword,
            Self::System => ParseErrorKind::MissingWhitespaceAfterDoctypeSystemKeyword,
        }
    }

    const fn missing_error(self) -> ParseErrorKind {
        match self {
            Self::Public => ParseErrorKind::MissingDoctypePublicIdentifier,
            Self::System => ParseErrorKind::MissingDoctypeSystemIdentifier,
        }
    }

    const fn missing_quote_error(self) -> ParseErrorKind {
        match self {
            Self::Public => ParseErrorKind::MissingQuoteBeforeDoctypePublicIdentifier,
            Self::System => ParseErrorKind::MissingQuoteBeforeDoctypeSystemIdentifier,
        }
    }

    const fn abrupt_error(self) -> ParseErrorKind {
        match self {
            Self::Public => ParseErrorKind::AbruptDoctypePublicIdentifier,
            Self::System => ParseErrorKind::AbruptDoctypeSystemIdentifier,
        }
    }
}
