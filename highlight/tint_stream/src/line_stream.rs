//! Cursor over one line of source text.
//!
//! The cursor is a byte offset into an immutable `&str`. End of line is
//! reported through `Option` (`None` is the end-of-line sentinel), so callers
//! can either gate reads on [`eol()`](LineStream::eol) or treat a `None` from
//! [`next()`](LineStream::next) as a no-op — both styles are safe.
//!
//! # Invariant
//!
//! Within one tokenization pass the cursor never regresses: every consuming
//! operation advances it by exactly the number of bytes it consumed, and no
//! operation moves it backward. Anchored matchers ([`match_with`]) must
//! report lengths on UTF-8 character boundaries.
//!
//! [`match_with`]: LineStream::match_with

/// Cursor over a single line of text.
///
/// Created per line, discarded after the line is fully consumed
/// (`pos() == line.len()`). Holds no heap allocations; cloning is cheap.
#[derive(Clone, Debug)]
pub struct LineStream<'a> {
    /// The immutable line text. Never contains `\n` or `\r` in practice,
    /// but nothing here depends on that.
    line: &'a str,
    /// Current byte offset, `0 <= pos <= line.len()`, always on a char
    /// boundary.
    pos: usize,
    /// Byte range of the text consumed by the most recent successful
    /// `match_str`/`match_with` call. Empty until the first match.
    match_start: usize,
    match_end: usize,
}

impl<'a> LineStream<'a> {
    /// Create a stream positioned at the start of `line`.
    pub fn new(line: &'a str) -> Self {
        Self {
            line,
            pos: 0,
            match_start: 0,
            match_end: 0,
        }
    }

    /// Returns `true` when the cursor has reached the end of the line.
    #[inline]
    pub fn eol(&self) -> bool {
        self.pos >= self.line.len()
    }

    /// Current byte offset into the line.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// The full line this stream reads from.
    #[inline]
    pub fn line(&self) -> &'a str {
        self.line
    }

    /// Unconsumed remainder of the line.
    #[inline]
    fn rest(&self) -> &'a str {
        &self.line[self.pos..]
    }

    /// Returns the character at the cursor without advancing.
    ///
    /// `None` is the end-of-line sentinel.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Returns the character at the cursor and advances past it.
    ///
    /// At end of line this is a no-op returning `None`.
    #[inline]
    #[allow(
        clippy::should_implement_trait,
        reason = "mirrors the stream contract's `next`; the stream is not an iterator"
    )]
    pub fn next(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// If the character at the cursor equals `expected`, consume it.
    ///
    /// Returns `true` and advances on a hit; otherwise the cursor is
    /// unchanged.
    #[inline]
    pub fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    /// Consume zero or more consecutive whitespace characters.
    ///
    /// Returns whether any were consumed.
    pub fn eat_space(&mut self) -> bool {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.pos += c.len_utf8();
        }
        self.pos > start
    }

    /// Advance the cursor to the end of the line unconditionally.
    ///
    /// Used by classifiers for line comments.
    #[inline]
    pub fn skip_to_end(&mut self) {
        self.pos = self.line.len();
    }

    /// Attempt to consume `literal` anchored at the cursor.
    ///
    /// On success advances past it and makes it retrievable via
    /// [`current()`](Self::current); on failure the cursor is unchanged.
    pub fn match_str(&mut self, literal: &str) -> bool {
        if self.rest().starts_with(literal) {
            self.commit_match(literal.len());
            true
        } else {
            false
        }
    }

    /// Attempt an anchored match using a recognizer function.
    ///
    /// `matcher` receives the unconsumed remainder and returns the byte
    /// length of the match anchored at its start, or `None`. On success the
    /// cursor advances past the match and the matched text is retrievable
    /// via [`current()`](Self::current); on failure (including a zero-length
    /// result, which would violate the progress invariant) the cursor is
    /// unchanged.
    pub fn match_with(&mut self, matcher: impl FnOnce(&str) -> Option<usize>) -> bool {
        match matcher(self.rest()) {
            Some(len) if len > 0 => {
                debug_assert!(
                    self.rest().is_char_boundary(len),
                    "matcher returned a length off a char boundary"
                );
                self.commit_match(len);
                true
            }
            _ => false,
        }
    }

    /// Text consumed by the most recent successful `match_str`/`match_with`.
    ///
    /// Empty before the first match.
    #[inline]
    pub fn current(&self) -> &'a str {
        &self.line[self.match_start..self.match_end]
    }

    fn commit_match(&mut self, len: usize) {
        self.match_start = self.pos;
        self.pos += len;
        self.match_end = self.pos;
    }
}
