//! Character reader for the tokenizer.
//!
//! [§ 13.2.3.5 Preprocessing the input stream](https://html.spec.whatwg.org/multipage/parsing.html#preprocessing-the-input-stream)
//!
//! The reader sits between a [`CharSource`] and the state machine. It
//! normalizes newlines, buffers lookahead, supports a single character of
//! push-back for "reconsume" transitions, and tracks the position of every
//! character for diagnostics.

use std::collections::VecDeque;
use std::io::{self, Read};
use std::str::Chars;

use crate::error::{ParseErrorKind, Position, ReaderError};

/// A pull interface over decoded Unicode scalar values.
///
/// Sources do not need lookahead of their own; the [`Reader`] buffers
/// whatever the state machine asks for.
pub trait CharSource {
    /// Produce the next character, or `None` once the stream is exhausted.
    fn next_char(&mut self) -> Option<char>;
}

impl CharSource for Chars<'_> {
    fn next_char(&mut self) -> Option<char> {
        self.next()
    }
}

/// A character source that owns its input string.
#[derive(Debug, Clone)]
pub struct StringSource {
    input: String,
    pos: usize,
}

impl StringSource {
    /// Create a source over the given string.
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            pos: 0,
        }
    }
}

impl CharSource for StringSource {
    fn next_char(&mut self) -> Option<char> {
        let c = self.input[self.pos..].chars().next()?;
        self.pos += c.len_utf8();
        Some(c)
    }
}

const IO_BUFFER_SIZE: usize = 8192;

/// A character source decoding UTF-8 from any [`Read`] implementation.
///
/// Malformed byte sequences decode to U+FFFD. The first I/O error ends the
/// stream and is kept for the caller to inspect with [`IoSource::take_error`].
pub struct IoSource<R> {
    inner: R,
    buf: Vec<u8>,
    start: usize,
    end: usize,
    exhausted: bool,
    error: Option<ReaderError>,
}

impl<R: Read> IoSource<R> {
    /// Wrap a byte reader.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buf: vec![0; IO_BUFFER_SIZE],
            start: 0,
            end: 0,
            exhausted: false,
            error: None,
        }
    }

    /// Take the I/O error that ended the stream early, if any.
    pub fn take_error(&mut self) -> Option<ReaderError> {
        self.error.take()
    }

    fn fill(&mut self) {
        self.buf.copy_within(self.start..self.end, 0);
        self.end -= self.start;
        self.start = 0;
        loop {
            match self.inner.read(&mut self.buf[self.end..]) {
                Ok(0) => {
                    self.exhausted = true;
                    return;
                }
                Ok(n) => {
                    self.end += n;
                    return;
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => {
                    self.error = Some(ReaderError::from(e));
                    self.exhausted = true;
                    return;
                }
            }
        }
    }
}

impl<R: Read> CharSource for IoSource<R> {
    fn next_char(&mut self) -> Option<char> {
        loop {
            let pending = &self.buf[self.start..self.end];
            if let Some((c, len)) = decode_utf8(pending, self.exhausted) {
                self.start += len;
                return Some(c);
            }
            if self.exhausted {
                return None;
            }
            self.fill();
        }
    }
}

/// Decode one character from the front of `bytes`.
///
/// Returns `None` when more bytes are needed (or there are none at all).
fn decode_utf8(bytes: &[u8], at_end: bool) -> Option<(char, usize)> {
    let first = *bytes.first()?;
    let width = match first {
        0x00..=0x7F => return Some((char::from(first), 1)),
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => return Some(('\u{FFFD}', 1)),
    };
    if bytes.len() < width && !at_end {
        return None;
    }
    let candidate = &bytes[..width.min(bytes.len())];
    match std::str::from_utf8(candidate) {
        Ok(s) => s.chars().next().map(|c| (c, c.len_utf8())),
        Err(e) => Some(('\u{FFFD}', e.error_len().unwrap_or(candidate.len()).max(1))),
    }
}

/// Cursor over the input stream with lookahead and push-back.
pub struct Reader<S> {
    source: S,
    /// A character pulled from the source while looking past a CR.
    carried: Option<char>,
    lookahead: VecDeque<char>,
    /// Position of the next character to be consumed.
    position: Position,
    /// Position of the most recently consumed character.
    last: Position,
    pushed_back: bool,
}

impl<S: CharSource> Reader<S> {
    /// Create a reader over a character source.
    pub fn new(source: S) -> Self {
        Self {
            source,
            carried: None,
            lookahead: VecDeque::new(),
            position: Position::start(),
            last: Position::start(),
            pushed_back: false,
        }
    }

    /// "Consume the next input character"
    ///
    /// Returns `None` at end of input. That is a terminal signal, not an
    /// error: every later call returns `None` as well.
    pub fn consume(&mut self) -> Option<char> {
        self.fill(1);
        let c = self.lookahead.pop_front()?;
        self.pushed_back = false;
        self.last = self.position;
        self.position.offset += 1;
        if c == '\n' {
            self.position.line += 1;
            self.position.column = 1;
        } else {
            self.position.column += 1;
        }
        Some(c)
    }

    /// Look at the character `n` places past the cursor without consuming it.
    pub fn peek(&mut self, n: usize) -> Option<char> {
        self.fill(n + 1);
        self.lookahead.get(n).copied()
    }

    /// Returns true if at least one more character is available.
    pub fn has_more(&mut self) -> bool {
        self.peek(0).is_some()
    }

    /// Push the most recently consumed character back onto the stream.
    ///
    /// Only one character of push-back is supported.
    pub fn unread(&mut self, c: char) {
        debug_assert!(!self.pushed_back, "only one character of push-back");
        self.lookahead.push_front(c);
        self.position = self.last;
        self.pushed_back = true;
    }

    /// Returns true if the next character was pushed back by [`Reader::unread`].
    #[must_use]
    pub const fn has_pushback(&self) -> bool {
        self.pushed_back
    }

    /// "If the next few characters are..."
    ///
    /// Compares the upcoming characters against `target`, optionally using
    /// ASCII case-insensitive comparison.
    pub fn next_few_characters_are(&mut self, target: &str, ignore_case: bool) -> bool {
        target.chars().enumerate().all(|(i, expected)| {
            self.peek(i).is_some_and(|actual| {
                if ignore_case {
                    actual.eq_ignore_ascii_case(&expected)
                } else {
                    actual == expected
                }
            })
        })
    }

    /// Consume `n` characters that the caller has already inspected.
    pub fn skip(&mut self, n: usize) {
        for _ in 0..n {
            if self.consume().is_none() {
                break;
            }
        }
    }

    /// Position of the next character to be consumed.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Position of the most recently consumed character.
    #[must_use]
    pub const fn last_position(&self) -> Position {
        self.last
    }

    /// Borrow the underlying source.
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Mutably borrow the underlying source.
    pub const fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    fn fill(&mut self, wanted: usize) {
        while self.lookahead.len() < wanted {
            match self.pull() {
                Some(c) => self.lookahead.push_back(c),
                None => break,
            }
        }
    }

    /// [§ 13.2.3.5](https://html.spec.whatwg.org/multipage/parsing.html#preprocessing-the-input-stream)
    ///
    /// "Before the tokenization stage, the input stream must be preprocessed by
    /// normalizing newlines." CR LF becomes LF, and a lone CR becomes LF.
    fn pull(&mut self) -> Option<char> {
        let c = self.carried.take().or_else(|| self.source.next_char())?;
        if c == '\r' {
            match self.source.next_char() {
                Some('\n') | None => {}
                Some(other) => self.carried = Some(other),
            }
            return Some('\n');
        }
        Some(c)
    }
}

/// [§ 13.2.3.5](https://html.spec.whatwg.org/multipage/parsing.html#preprocessing-the-input-stream)
///
/// "Any occurrences of noncharacters in the input stream are
/// noncharacter-in-input-stream parse errors and any occurrences of controls
/// other than ASCII whitespace and U+0000 NULL characters are
/// control-character-in-input-stream parse errors."
pub(crate) const fn input_stream_error(c: char) -> Option<ParseErrorKind> {
    let cp = c as u32;
    if is_noncharacter(cp) {
        return Some(ParseErrorKind::NoncharacterInInputStream);
    }
    let is_control = matches!(cp, 0x01..=0x1F | 0x7F..=0x9F);
    let is_whitespace = matches!(c, '\t' | '\n' | '\x0C' | '\r' | ' ');
    if is_control && !is_whitespace {
        return Some(ParseErrorKind::ControlCharacterInInputStream);
    }
    None
}

/// [Infra § 4.5 Code points](https://infra.spec.whatwg.org/#noncharacter)
///
/// "A noncharacter is a code point that is in the range U+FDD0 to U+FDEF,
/// inclusive, or U+FFFE, U+FFFF, U+1FFFE, U+1FFFF, ... U+10FFFE, or U+10FFFF."
pub(crate) const fn is_noncharacter(cp: u32) -> bool {
    matches!(cp, 0xFDD0..=0xFDEF) || (cp <= 0x10_FFFF && (cp & 0xFFFE) == 0xFFFE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reader(input: &str) -> Reader<StringSource> {
        Reader::new(StringSource::new(input))
    }

    #[test]
    fn test_consume_and_peek() {
        let mut r = reader("ab");
        assert_eq!(r.peek(0), Some('a'));
        assert_eq!(r.peek(1), Some('b'));
        assert_eq!(r.peek(2), None);
        assert_eq!(r.consume(), Some('a'));
        assert_eq!(r.consume(), Some('b'));
        assert_eq!(r.consume(), None);
        assert_eq!(r.consume(), None);
    }

    #[test]
    fn test_unread_restores_character_and_position() {
        let mut r = reader("x\ny");
        assert_eq!(r.consume(), Some('x'));
        assert_eq!(r.consume(), Some('\n'));
        assert_eq!(r.position().line, 2);
        r.unread('\n');
        assert!(r.has_pushback());
        assert_eq!(r.position().line, 1);
        assert_eq!(r.position().column, 2);
        assert_eq!(r.consume(), Some('\n'));
        assert!(!r.has_pushback());
        assert_eq!(r.consume(), Some('y'));
        assert_eq!(r.last_position().line, 2);
        assert_eq!(r.last_position().column, 1);
        assert_eq!(r.last_position().offset, 2);
    }

    #[test]
    fn test_newline_normalization() {
        let mut r = reader("a\r\nb\rc\r");
        let mut out = String::new();
        while let Some(c) = r.consume() {
            out.push(c);
        }
        assert_eq!(out, "a\nb\nc\n");
    }

    #[test]
    fn test_next_few_characters_case_insensitive() {
        let mut r = reader("DocType html");
        assert!(r.next_few_characters_are("doctype", true));
        assert!(!r.next_few_characters_are("doctype", false));
        assert!(!r.next_few_characters_are("DocType html!", false));
        r.skip(7);
        assert_eq!(r.consume(), Some(' '));
    }

    #[test]
    fn test_borrowed_chars_source() {
        let mut r = Reader::new("hi".chars());
        assert_eq!(r.consume(), Some('h'));
        assert!(r.has_more());
        assert_eq!(r.consume(), Some('i'));
        assert!(!r.has_more());
    }

    #[test]
    fn test_io_source_decodes_utf8_across_reads() {
        // A reader that hands out one byte at a time.
        struct Trickle<'a>(&'a [u8]);
        impl Read for Trickle<'_> {
            fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
                match self.0.split_first() {
                    Some((b, rest)) if !buf.is_empty() => {
                        buf[0] = *b;
                        self.0 = rest;
                        Ok(1)
                    }
                    _ => Ok(0),
                }
            }
        }

        let text = "é€😀";
        let mut source = IoSource::new(Trickle(text.as_bytes()));
        let mut out = String::new();
        while let Some(c) = source.next_char() {
            out.push(c);
        }
        assert_eq!(out, text);
        assert!(source.take_error().is_none());
    }

    #[test]
    fn test_io_source_replaces_invalid_bytes() {
        let bytes: &[u8] = b"a\xFFb\xE2\x82";
        let mut source = IoSource::new(bytes);
        let mut out = String::new();
        while let Some(c) = source.next_char() {
            out.push(c);
        }
        assert_eq!(out, "a\u{FFFD}b\u{FFFD}");
    }

    #[test]
    fn test_io_source_keeps_error() {
        struct Broken;
        impl Read for Broken {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::other("disk on fire"))
            }
        }

        let mut source = IoSource::new(Broken);
        assert_eq!(source.next_char(), None);
        assert!(matches!(source.take_error(), Some(ReaderError::Io(_))));
    }

    #[test]
    fn test_input_stream_errors() {
        assert_eq!(
            input_stream_error('\u{1}'),
            Some(ParseErrorKind::ControlCharacterInInputStream)
        );
        assert_eq!(
            input_stream_error('\u{FFFF}'),
            Some(ParseErrorKind::NoncharacterInInputStream)
        );
        assert_eq!(input_stream_error('\t'), None);
        assert_eq!(input_stream_error('\0'), None);
        assert_eq!(input_stream_error('a'), None);
    }
}
