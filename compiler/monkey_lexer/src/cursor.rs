//! Byte cursor over an immutable source buffer.
//!
//! End of input is an explicit `None` rather than a sentinel byte, so a NUL
//! inside the source is an ordinary byte and never ends the scan early. The
//! buffer is plain bytes: nothing requires it to be valid UTF-8.

use std::borrow::Cow;

/// Forward-only cursor with one byte of lookahead.
///
/// # Invariant
///
/// While `current` is `Some`, `read_position == position + 1`. At end of
/// input `current` is `None` and both positions equal `source.len()`. Both
/// positions only grow; advancing at end of input is a no-op.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor<'a> {
    source: &'a [u8],
    /// Index of the byte under examination.
    position: usize,
    /// Index of the byte after `current`.
    read_position: usize,
    current: Option<u8>,
}

impl<'a> Cursor<'a> {
    /// Create a cursor with the first byte of `source` loaded.
    pub(crate) fn new(source: &'a [u8]) -> Self {
        let mut cursor = Self {
            source,
            position: 0,
            read_position: 0,
            current: None,
        };
        cursor.read_byte();
        cursor
    }

    /// The byte at the current position, or `None` at end of input.
    #[inline]
    pub(crate) fn current(&self) -> Option<u8> {
        self.current
    }

    /// The byte after the current one, without consuming anything.
    #[inline]
    pub(crate) fn peek(&self) -> Option<u8> {
        self.source.get(self.read_position).copied()
    }

    /// Move to the next byte. Does nothing once end of input is reached.
    #[inline]
    pub(crate) fn advance(&mut self) {
        if self.current.is_some() {
            self.read_byte();
        }
    }

    /// Current byte offset in the source.
    #[inline]
    pub(crate) fn pos(&self) -> usize {
        self.position
    }

    /// Advance while `pred` accepts the current byte.
    ///
    /// Stops at end of input regardless of `pred`.
    #[inline]
    pub(crate) fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while self.current.is_some_and(&pred) {
            self.read_byte();
        }
    }

    /// Skip spaces, tabs, carriage returns, and line feeds.
    #[inline]
    pub(crate) fn eat_whitespace(&mut self) {
        self.eat_while(|b| matches!(b, b' ' | b'\t' | b'\r' | b'\n'));
    }

    /// Source text from `start` up to the current position.
    ///
    /// # Contract
    ///
    /// `start..pos` should cover ASCII bytes only, which the scanner
    /// guarantees for every run it slices. ASCII text borrows straight from
    /// the buffer; anything else would be decoded lossily.
    pub(crate) fn slice_from(&self, start: usize) -> Cow<'a, str> {
        debug_assert!(start <= self.position, "slice start {start} is ahead of cursor");
        let bytes = &self.source[start..self.position];
        debug_assert!(bytes.is_ascii(), "non-ASCII run {bytes:?} sliced as text");
        String::from_utf8_lossy(bytes)
    }

    fn read_byte(&mut self) {
        self.current = self.source.get(self.read_position).copied();
        self.position = self.read_position.min(self.source.len());
        if self.current.is_some() {
            self.read_position += 1;
        }
    }
}
