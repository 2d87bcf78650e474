//! Scanner: the two segmentation state machines and their shared cursor.
//!
//! What it does
//! - [`Delimiter`] splits a byte buffer on a fixed needle, optionally keeping
//!   the empty segments produced by leading, trailing, or consecutive
//!   delimiters.
//! - [`Predicate`] splits a byte buffer on maximal runs of characters for
//!   which a caller predicate returns `true`.
//! - Both advance a [`Cursor`] in a single forward pass and describe every
//!   produced segment as a [`Segment`] (offset and length into the buffer);
//!   nothing is copied.
//!
//! Scope
//! - Engines only see bytes. Presenting a segment as `&[u8]` or `&str` is the
//!   job of the view layer (`crate::view`).
//!
//! Invariants
//! - `0 <= cursor.start <= len + 1`. `start == len + 1` means "exhausted, do
//!   not rescan"; `start == len` is a live cursor sitting on the end boundary.
//! - Character decoding always makes progress: an invalid or truncated UTF-8
//!   sequence is consumed as a single byte.

mod delimiter;
mod predicate;

pub(crate) use delimiter::Delimiter;
pub(crate) use predicate::Predicate;

use core::ops::Range;

/// A zero-copy view of one produced segment: a byte offset and length into
/// the scanned buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    /// Byte offset of the first byte of the segment.
    pub offset: usize,
    /// Length of the segment in bytes.
    pub len: usize,
}

impl Segment {
    /// Creates the segment covering `start..end`.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `end < start`.
    #[must_use]
    #[inline]
    pub fn from_range(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "segment end {end} precedes start {start}");
        Self {
            offset: start,
            len: end - start,
        }
    }

    /// One past the last byte of the segment.
    #[must_use]
    #[inline]
    pub fn end(self) -> usize {
        self.offset + self.len
    }

    /// The byte range of the segment in the scanned buffer.
    #[must_use]
    #[inline]
    pub fn range(self) -> Range<usize> {
        self.offset..self.end()
    }

    /// Whether the segment is zero bytes long.
    #[must_use]
    #[inline]
    pub fn is_empty(self) -> bool {
        self.len == 0
    }
}

impl From<Segment> for Range<usize> {
    fn from(segment: Segment) -> Self {
        segment.range()
    }
}

/// Mutable scan progress shared by both engines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Cursor {
    /// Next unscanned byte offset, or `len + 1` once exhausted.
    pub start: usize,
    /// The most recently produced segment.
    pub current: Segment,
}

impl Cursor {
    #[inline]
    pub fn is_exhausted(&self, len: usize) -> bool {
        self.start > len
    }

    #[inline]
    pub fn exhaust(&mut self, len: usize) {
        self.start = len + 1;
    }

    /// Records `start..end` as the current segment.
    #[inline]
    pub fn emit(&mut self, start: usize, end: usize) {
        self.current = Segment::from_range(start, end);
    }

    #[inline]
    pub fn rewind(&mut self) {
        *self = Self::default();
    }
}

/// Decodes the character starting at `bytes[0]`, returning it with its width
/// in bytes.
///
/// Invalid or truncated sequences decode to `U+FFFD` with a width of exactly
/// one byte, so callers always advance. `bytes` must not be empty.
#[inline]
pub(crate) fn decode_rune(bytes: &[u8]) -> (char, usize) {
    debug_assert!(!bytes.is_empty(), "decode_rune on empty input");
    let lead = bytes[0];
    if lead.is_ascii() {
        return (char::from(lead), 1);
    }
    match bstr::decode_utf8(bytes) {
        (Some(ch), len) => (ch, len),
        (None, _) => (char::REPLACEMENT_CHARACTER, 1),
    }
}
