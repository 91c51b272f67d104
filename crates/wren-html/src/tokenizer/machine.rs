use super::markup::DoctypeIdentifier;
use super::state::TokenizerState;
use crate::emitter::Emitter;
use crate::error::{ParseError, Position};
use crate::raw_text::RawTextMode;
use crate::reader::{CharSource, Reader, StringSource};
use crate::token::Token;

/// [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
///
/// "Implementations must act as if they used the following state machine to tokenize HTML."
///
/// The tokenizer is pull-based: each call to [`HTMLTokenizer::next_token`]
/// runs the state machine just far enough to produce one token.
pub struct HTMLTokenizer<S = StringSource> {
    pub(super) state: TokenizerState,
    /// "the return state", used by the character reference states.
    pub(super) return_state: TokenizerState,
    pub(super) reader: Reader<S>,
    pub(super) current_input_character: Option<char>,
    pub(super) emitter: Emitter,
    /// Stands in for the tree builder's "last start tag" bookkeeping.
    pub(super) raw_text: RawTextMode,

    /// [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#temporary-buffer)
    /// "The temporary buffer is used to temporarily store characters during certain
    /// tokenization operations, particularly for end tag detection in RCDATA/RAWTEXT states."
    pub(super) temporary_buffer: String,

    /// [§ 13.2.5.75](https://html.spec.whatwg.org/multipage/parsing.html#character-reference-code)
    pub(super) character_reference_code: u32,

    pub(super) errors: Vec<ParseError>,

    /// Whether `<![CDATA[` opens a CDATA section (foreign content).
    pub(super) cdata_allowed: bool,

    /// Set once the iterator has handed out the end-of-input token.
    iterator_done: bool,
}

impl HTMLTokenizer<StringSource> {
    /// Create a new tokenizer for the given input.
    ///
    /// [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization):
    /// "The tokenizer state machine consists of the states defined in the
    /// following subsections. The initial state is the data state."
    #[must_use]
    pub fn new(input: impl Into<String>) -> Self {
        Self::from_source(StringSource::new(input))
    }
}

impl<S: CharSource> HTMLTokenizer<S> {
    /// Create a tokenizer over any character source, starting in the data state.
    #[must_use]
    pub fn from_source(source: S) -> Self {
        Self {
            state: TokenizerState::Data,
            return_state: TokenizerState::Data,
            reader: Reader::new(source),
            current_input_character: None,
            emitter: Emitter::new(),
            raw_text: RawTextMode::new(),
            temporary_buffer: String::new(),
            character_reference_code: 0,
            errors: Vec::new(),
            cdata_allowed: false,
            iterator_done: false,
        }
    }

    /// Create a tokenizer for the content of `context_element`, as the
    /// fragment parsing algorithm does.
    ///
    /// [§ 13.4 Parsing HTML fragments](https://html.spec.whatwg.org/multipage/parsing.html#parsing-html-fragments)
    ///
    /// A raw-text context (`script`, `title`, `plaintext`, ...) starts the
    /// tokenizer in that element's text grammar, and a matching end tag
    /// closes it. Any other context starts in the data state.
    #[must_use]
    pub fn new_fragment(source: S, context_element: &str) -> Self {
        let mut tokenizer = Self::from_source(source);
        if let Some(kind) = tokenizer.raw_text.enter(context_element) {
            tokenizer.state = kind.state();
        }
        tokenizer
    }

    /// Tell the tokenizer whether the adjusted current node is in foreign
    /// content, where `<![CDATA[` opens a CDATA section instead of a bogus
    /// comment.
    pub const fn set_cdata_allowed(&mut self, allowed: bool) {
        self.cdata_allowed = allowed;
    }

    /// The current state.
    #[must_use]
    pub const fn state(&self) -> TokenizerState {
        self.state
    }

    /// The raw-text element whose content is being read, if any.
    ///
    /// A `<script>` or `<title>` start tag opens one and its matching end
    /// tag closes it.
    #[must_use]
    pub fn raw_text_element(&self) -> Option<&str> {
        self.raw_text.element()
    }

    /// Parse errors recorded so far, in the order they occurred.
    #[must_use]
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Take the parse errors recorded so far.
    pub fn take_errors(&mut self) -> Vec<ParseError> {
        std::mem::take(&mut self.errors)
    }

    /// Position of the next character to be read.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.reader.position()
    }

    /// The character source.
    #[must_use]
    pub const fn source(&self) -> &S {
        self.reader.source()
    }

    /// The character source, mutably (e.g. to take an I/O error).
    pub const fn source_mut(&mut self) -> &mut S {
        self.reader.source_mut()
    }

    /// Produce the next token.
    ///
    /// Once [`Token::EndOfInput`] has been returned, every later call
    /// returns it again.
    pub fn next_token(&mut self) -> Token {
        loop {
            if let Some(token) = self.emitter.pop() {
                return token;
            }
            if self.state == TokenizerState::Eof {
                return Token::EndOfInput;
            }
            self.step();
        }
    }

    /// Run the tokenizer to completion.
    ///
    /// Returns every token up to and including the first [`Token::EndOfInput`].
    pub fn run(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let done = token.is_end_of_input();
            tokens.push(token);
            if done {
                return tokens;
            }
        }
    }

    /// Execute one state.
    ///
    /// Each state begins by consuming the next input character, except the
    /// few that look ahead instead.
    fn step(&mut self) {
        if self.state.consumes_input() {
            self.current_input_character = self.consume_next_input_character();
        }

        match self.state {
            TokenizerState::Data => self.handle_data_state(),
            TokenizerState::RCDATA => self.handle_rcdata_state(),
            TokenizerState::RAWTEXT => self.handle_rawtext_state(),
            TokenizerState::ScriptData => self.handle_script_data_state(),
            TokenizerState::PLAINTEXT => self.handle_plaintext_state(),
            TokenizerState::TagOpen => self.handle_tag_open_state(),
            TokenizerState::EndTagOpen => self.handle_end_tag_open_state(),
            TokenizerState::TagName => self.handle_tag_name_state(),

            TokenizerState::RCDATALessThanSign => self.handle_raw_less_than_sign_state(
                TokenizerState::RCDATAEndTagOpen,
                TokenizerState::RCDATA,
            ),
            TokenizerState::RCDATAEndTagOpen => self.handle_raw_end_tag_open_state(
                TokenizerState::RCDATAEndTagName,
                TokenizerState::RCDATA,
            ),
            TokenizerState::RCDATAEndTagName => {
                self.handle_raw_end_tag_name_state(TokenizerState::RCDATA);
            }
            TokenizerState::RAWTEXTLessThanSign => self.handle_raw_less_than_sign_state(
                TokenizerState::RAWTEXTEndTagOpen,
                TokenizerState::RAWTEXT,
            ),
            TokenizerState::RAWTEXTEndTagOpen => self.handle_raw_end_tag_open_state(
                TokenizerState::RAWTEXTEndTagName,
                TokenizerState::RAWTEXT,
            ),
            TokenizerState::RAWTEXTEndTagName => {
                self.handle_raw_end_tag_name_state(TokenizerState::RAWTEXT);
            }

            TokenizerState::ScriptDataLessThanSign => {
                self.handle_script_data_less_than_sign_state();
            }
            TokenizerState::ScriptDataEndTagOpen => self.handle_raw_end_tag_open_state(
                TokenizerState::ScriptDataEndTagName,
                TokenizerState::ScriptData,
            ),
            TokenizerState::ScriptDataEndTagName => {
                self.handle_raw_end_tag_name_state(TokenizerState::ScriptData);
            }
            TokenizerState::ScriptDataEscapeStart => {
                self.handle_script_data_escape_start_state(TokenizerState::ScriptDataEscapeStartDash);
            }
            TokenizerState::ScriptDataEscapeStartDash => {
                self.handle_script_data_escape_start_state(TokenizerState::ScriptDataEscapedDashDash);
            }
            TokenizerState::ScriptDataEscaped => self.handle_script_data_escaped_state(),
            TokenizerState::ScriptDataEscapedDash => self.handle_script_data_escaped_dash_state(),
            TokenizerState::ScriptDataEscapedDashDash => {
                self.handle_script_data_escaped_dash_dash_state();
            }
            TokenizerState::ScriptDataEscapedLessThanSign => {
                self.handle_script_data_escaped_less_than_sign_state();
            }
            TokenizerState::ScriptDataEscapedEndTagOpen => self.handle_raw_end_tag_open_state(
                TokenizerState::ScriptDataEscapedEndTagName,
                TokenizerState::ScriptDataEscaped,
            ),
            TokenizerState::ScriptDataEscapedEndTagName => {
                self.handle_raw_end_tag_name_state(TokenizerState::ScriptDataEscaped);
            }
            TokenizerState::ScriptDataDoubleEscapeStart => self
                .handle_script_data_double_escape_boundary_state(
                    TokenizerState::ScriptDataDoubleEscaped,
                    TokenizerState::ScriptDataEscaped,
                ),
            TokenizerState::ScriptDataDoubleEscaped => {
                self.handle_script_data_double_escaped_state();
            }
            TokenizerState::ScriptDataDoubleEscapedDash => {
                self.handle_script_data_double_escaped_dash_state();
            }
            TokenizerState::ScriptDataDoubleEscapedDashDash => {
                self.handle_script_data_double_escaped_dash_dash_state();
            }
            TokenizerState::ScriptDataDoubleEscapedLessThanSign => {
                self.handle_script_data_double_escaped_less_than_sign_state();
            }
            TokenizerState::ScriptDataDoubleEscapeEnd => self
                .handle_script_data_double_escape_boundary_state(
                    TokenizerState::ScriptDataEscaped,
                    TokenizerState::ScriptDataDoubleEscaped,
                ),

            TokenizerState::BeforeAttributeName => self.handle_before_attribute_name_state(),
            TokenizerState::AttributeName => self.handle_attribute_name_state(),
            TokenizerState::AfterAttributeName => self.handle_after_attribute_name_state(),
            TokenizerState::BeforeAttributeValue => self.handle_before_attribute_value_state(),
            TokenizerState::AttributeValueDoubleQuoted => {
                self.handle_attribute_value_quoted_state('"');
            }
            TokenizerState::AttributeValueSingleQuoted => {
                self.handle_attribute_value_quoted_state('\'');
            }
            TokenizerState::AttributeValueUnquoted => self.handle_attribute_value_unquoted_state(),
            TokenizerState::AfterAttributeValueQuoted => {
                self.handle_after_attribute_value_quoted_state();
            }
            TokenizerState::SelfClosingStartTag => self.handle_self_closing_start_tag_state(),

            TokenizerState::BogusComment => self.handle_bogus_comment_state(),
            TokenizerState::MarkupDeclarationOpen => self.handle_markup_declaration_open_state(),
            TokenizerState::CommentStart => self.handle_comment_start_state(),
            TokenizerState::CommentStartDash => self.handle_comment_start_dash_state(),
            TokenizerState::Comment => self.handle_comment_state(),
            TokenizerState::CommentLessThanSign => self.handle_comment_less_than_sign_state(),
            TokenizerState::CommentLessThanSignBang => {
                self.handle_comment_less_than_sign_bang_state();
            }
            TokenizerState::CommentLessThanSignBangDash => {
                self.handle_comment_less_than_sign_bang_dash_state();
            }
            TokenizerState::CommentLessThanSignBangDashDash => {
                self.handle_comment_less_than_sign_bang_dash_dash_state();
            }
            TokenizerState::CommentEndDash => self.handle_comment_end_dash_state(),
            TokenizerState::CommentEnd => self.handle_comment_end_state(),
            TokenizerState::CommentEndBang => self.handle_comment_end_bang_state(),

            TokenizerState::DOCTYPE => self.handle_doctype_state(),
            TokenizerState::BeforeDOCTYPEName => self.handle_before_doctype_name_state(),
            TokenizerState::DOCTYPEName => self.handle_doctype_name_state(),
            TokenizerState::AfterDOCTYPEName => self.handle_after_doctype_name_state(),
            TokenizerState::AfterDOCTYPEPublicKeyword => {
                self.handle_after_doctype_keyword_state(DoctypeIdentifier::Public);
            }
            TokenizerState::BeforeDOCTYPEPublicIdentifier => {
                self.handle_before_doctype_identifier_state(DoctypeIdentifier::Public);
            }
            TokenizerState::DOCTYPEPublicIdentifierDoubleQuoted => {
                self.handle_doctype_identifier_quoted_state(DoctypeIdentifier::Public, '"');
            }
            TokenizerState::DOCTYPEPublicIdentifierSingleQuoted => {
                self.handle_doctype_identifier_quoted_state(DoctypeIdentifier::Public, '\'');
            }
            TokenizerState::AfterDOCTYPEPublicIdentifier => {
                self.handle_after_doctype_public_identifier_state();
            }
            TokenizerState::BetweenDOCTYPEPublicAndSystemIdentifiers => {
                self.handle_between_doctype_public_and_system_identifiers_state();
            }
            TokenizerState::AfterDOCTYPESystemKeyword => {
                self.handle_after_doctype_keyword_state(DoctypeIdentifier::System);
            }
            TokenizerState::BeforeDOCTYPESystemIdentifier => {
                self.handle_before_doctype_identifier_state(DoctypeIdentifier::System);
            }
            TokenizerState::DOCTYPESystemIdentifierDoubleQuoted => {
                self.handle_doctype_identifier_quoted_state(DoctypeIdentifier::System, '"');
            }
            TokenizerState::DOCTYPESystemIdentifierSingleQuoted => {
                self.handle_doctype_identifier_quoted_state(DoctypeIdentifier::System, '\'');
            }
            TokenizerState::AfterDOCTYPESystemIdentifier => {
                self.handle_after_doctype_system_identifier_state();
            }
            TokenizerState::BogusDOCTYPE => self.handle_bogus_doctype_state(),

            TokenizerState::CDATASection => self.handle_cdata_section_state(),
            TokenizerState::CDATASectionBracket => self.handle_cdata_section_bracket_state(),
            TokenizerState::CDATASectionEnd => self.handle_cdata_section_end_state(),

            TokenizerState::CharacterReference => self.handle_character_reference_state(),
            TokenizerState::NamedCharacterReference => {
                self.handle_named_character_reference_state();
            }
            TokenizerState::AmbiguousAmpersand => self.handle_ambiguous_ampersand_state(),
            TokenizerState::NumericCharacterReference => {
                self.handle_numeric_character_reference_state();
            }
            TokenizerState::HexadecimalCharacterReferenceStart => {
                self.handle_numeric_character_reference_start_state(16);
            }
            TokenizerState::DecimalCharacterReferenceStart => {
                self.handle_numeric_character_reference_start_state(10);
            }
            TokenizerState::HexadecimalCharacterReference => {
                self.handle_numeric_character_reference_digits_state(16);
            }
            TokenizerState::DecimalCharacterReference => {
                self.handle_numeric_character_reference_digits_state(10);
            }
            TokenizerState::NumericCharacterReferenceEnd => {
                self.handle_numeric_character_reference_end_state();
            }

            TokenizerState::Eof => {}
        }
    }
}

/// Yields every token, ending with a single [`Token::EndOfInput`].
impl<S: CharSource> Iterator for HTMLTokenizer<S> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.iterator_done {
            return None;
        }
        let token = self.next_token();
        self.iterator_done = token.is_end_of_input();
        Some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_data() {
        let tokenizer = HTMLTokenizer::new("");
        assert_eq!(tokenizer.state(), TokenizerState::Data);
        assert!(tokenizer.errors().is_empty());
    }

    #[test]
    fn test_empty_input_is_end_of_input() {
        let mut tokenizer = HTMLTokenizer::new("");
        assert_eq!(tokenizer.next_token(), Token::EndOfInput);
        assert_eq!(tokenizer.state(), TokenizerState::Eof);
        assert_eq!(tokenizer.next_token(), Token::EndOfInput);
    }

    #[test]
    fn test_fragment_starts_in_context_state() {
        let tokenizer = HTMLTokenizer::new_fragment(StringSource::new("x"), "TEXTAREA");
        assert_eq!(tokenizer.state(), TokenizerState::RCDATA);

        let tokenizer = HTMLTokenizer::new_fragment(StringSource::new("x"), "div");
        assert_eq!(tokenizer.state(), TokenizerState::Data);
    }

    #[test]
    fn test_iterator_stops_after_end_of_input() {
        let mut tokenizer = HTMLTokenizer::new("a");
        assert_eq!(tokenizer.next(), Some(Token::text("a")));
        assert_eq!(tokenizer.next(), Some(Token::EndOfInput));
        assert_eq!(tokenizer.next(), None);
        assert_eq!(tokenizer.next(), None);
    }

    #[test]
    fn test_take_errors_drains() {
        let mut tokenizer = HTMLTokenizer::new("<div");
        let _ = tokenizer.run();
        assert_eq!(tokenizer.take_errors().len(), 1);
        assert!(tokenizer.errors().is_empty());
    }
}
