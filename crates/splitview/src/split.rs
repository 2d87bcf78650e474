//! Public split iterators: the scanners combined with a [`View`].

use core::iter::FusedIterator;

use crate::{
    SplitOptions, ViewError,
    scanner::{Delimiter, Predicate, Segment},
    view::{self, View},
};

/// Splits a haystack on a fixed delimiter without allocating.
///
/// Every produced value borrows from the haystack. `V` selects the
/// presentation: `&[u8]` ([`BytesSplit`]) or `&str` ([`StrSplit`]).
///
/// Iterate either with the explicit protocol ([`advance`](Self::advance) then
/// [`current`](Self::current)) or as an [`Iterator`].
///
/// ```rust
/// use splitview::Split;
///
/// let mut it = Split::new("    aa a      a ", " ");
/// let mut parts = Vec::new();
/// while it.advance() {
///     parts.push(it.current());
/// }
/// assert_eq!(parts, ["aa", "a", "a"]);
///
/// // An empty needle splits after every character.
/// let chars: Vec<&str> = Split::new("añ語", "").collect();
/// assert_eq!(chars, ["a", "ñ", "語"]);
/// ```
#[derive(Debug, Clone)]
pub struct Split<'h, 'n, V> {
    haystack: V,
    options: SplitOptions,
    scanner: Delimiter<'h, 'n>,
}

/// [`Split`] presenting segments as byte slices.
pub type BytesSplit<'h, 'n> = Split<'h, 'n, &'h [u8]>;

/// [`Split`] presenting segments as string slices.
pub type StrSplit<'h, 'n> = Split<'h, 'n, &'h str>;

impl<'h, 'n, V: View<'h>> Split<'h, 'n, V> {
    /// Creates an iterator that skips empty segments.
    #[must_use]
    pub fn new(haystack: V, needle: &'n V::Unit) -> Self {
        Self::with_options(haystack, needle, SplitOptions::default())
    }

    /// Creates an iterator with explicit options.
    #[must_use]
    pub fn with_options(haystack: V, needle: &'n V::Unit, options: SplitOptions) -> Self {
        Self {
            haystack,
            options,
            scanner: Delimiter::new(haystack.as_bytes(), needle.as_ref(), options.emit_all),
        }
    }

    /// Returns a rewound iterator over the same input that emits every
    /// segment, including empty ones.
    #[must_use]
    pub fn emit_all(self) -> Self {
        let mut options = self.options;
        options.emit_all = true;
        Self {
            haystack: self.haystack,
            options,
            scanner: Delimiter::new(self.scanner.haystack(), self.scanner.needle(), true),
        }
    }

    /// Moves to the next segment, returning `false` once exhausted.
    ///
    /// After exhaustion every call returns `false` until [`reset`](Self::reset).
    #[inline]
    pub fn advance(&mut self) -> bool {
        self.scanner.advance()
    }

    /// The segment produced by the last successful [`advance`](Self::advance).
    ///
    /// Before the first advance, and after a reset, this is the empty view
    /// at offset zero.
    #[inline]
    #[must_use]
    pub fn current(&self) -> V {
        self.haystack.view(self.scanner.segment())
    }

    /// Offset and length of the current segment.
    #[inline]
    #[must_use]
    pub fn segment(&self) -> Segment {
        self.scanner.segment()
    }

    /// Rewinds to the start of the haystack.
    pub fn reset(&mut self) {
        self.scanner.reset();
    }

    /// Rewinds, then calls `f` with every segment in order.
    pub fn each(&mut self, mut f: impl FnMut(V)) {
        self.reset();
        while self.advance() {
            f(self.current());
        }
    }

    /// The haystack being split.
    #[must_use]
    pub fn haystack(&self) -> V {
        self.haystack
    }

    /// The options this iterator was built with.
    #[must_use]
    pub fn options(&self) -> SplitOptions {
        self.options
    }
}

impl<'h> BytesSplit<'h, '_> {
    /// The current segment as text.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::InvalidUtf8`] if the segment is not well-formed
    /// UTF-8.
    pub fn current_str(&self) -> Result<&'h str, ViewError> {
        view::to_str(self.scanner.haystack(), self.scanner.segment())
    }
}

impl<'h, V: View<'h>> Iterator for Split<'h, '_, V> {
    type Item = V;

    #[inline]
    fn next(&mut self) -> Option<V> {
        self.advance().then(|| self.current())
    }
}

impl<'h, V: View<'h>> FusedIterator for Split<'h, '_, V> {}

/// Splits a haystack on maximal runs of characters matching a predicate.
///
/// Produces the runs for which `predicate` returns `false`; separators
/// collapse, so no empty value is ever produced. The haystack is decoded as
/// UTF-8 and malformed bytes reach the predicate as `U+FFFD`.
///
/// The predicate should be pure: [`reset`](Self::reset) replays the same
/// segments only if it answers the same way the second time.
///
/// ```rust
/// use splitview::SplitFn;
///
/// let words: Vec<&str> = SplitFn::new("   !Κάρολος   123", char::is_whitespace).collect();
/// assert_eq!(words, ["!Κάρολος", "123"]);
/// ```
#[derive(Debug, Clone)]
pub struct SplitFn<'h, V, F> {
    haystack: V,
    scanner: Predicate<'h, F>,
}

/// [`SplitFn`] presenting segments as byte slices.
pub type BytesSplitFn<'h, F> = SplitFn<'h, &'h [u8], F>;

/// [`SplitFn`] presenting segments as string slices.
pub type StrSplitFn<'h, F> = SplitFn<'h, &'h str, F>;

impl<'h, V, F> SplitFn<'h, V, F>
where
    V: View<'h>,
    F: FnMut(char) -> bool,
{
    /// Creates an iterator splitting on characters for which `predicate`
    /// returns `true`.
    #[must_use]
    pub fn new(haystack: V, predicate: F) -> Self {
        Self {
            haystack,
            scanner: Predicate::new(haystack.as_bytes(), predicate),
        }
    }

    /// Moves to the next segment, returning `false` once exhausted.
    #[inline]
    pub fn advance(&mut self) -> bool {
        self.scanner.advance()
    }

    /// The segment produced by the last successful [`advance`](Self::advance).
    #[inline]
    #[must_use]
    pub fn current(&self) -> V {
        self.haystack.view(self.scanner.segment())
    }

    /// Offset and length of the current segment.
    #[inline]
    #[must_use]
    pub fn segment(&self) -> Segment {
        self.scanner.segment()
    }

    /// Rewinds to the start of the haystack.
    pub fn reset(&mut self) {
        self.scanner.reset();
    }

    /// Rewinds, then calls `f` with every segment in order.
    pub fn each(&mut self, mut f: impl FnMut(V)) {
        self.reset();
        while self.advance() {
            f(self.current());
        }
    }

    /// The haystack being split.
    #[must_use]
    pub fn haystack(&self) -> V {
        self.haystack
    }
}

impl<'h, F> BytesSplitFn<'h, F>
where
    F: FnMut(char) -> bool,
{
    /// The current segment as text.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::InvalidUtf8`] if the segment contains malformed
    /// UTF-8.
    pub fn current_str(&self) -> Result<&'h str, ViewError> {
        view::to_str(self.scanner.haystack(), self.scanner.segment())
    }
}

impl<'h, V, F> Iterator for SplitFn<'h, V, F>
where
    V: View<'h>,
    F: FnMut(char) -> bool,
{
    type Item = V;

    #[inline]
    fn next(&mut self) -> Option<V> {
        self.advance().then(|| self.current())
    }
}

impl<'h, V, F> FusedIterator for SplitFn<'h, V, F>
where
    V: View<'h>,
    F: FnMut(char) -> bool,
{
}

/// Splits `haystack` on `needle`, skipping empty segments.
///
/// ```rust
/// let parts: Vec<&[u8]> = splitview::split(&b"a,,b,"[..], &b","[..]).collect();
/// assert_eq!(parts, [&b"a"[..], &b"b"[..]]);
/// ```
#[must_use]
pub fn split<'h, 'n, V: View<'h>>(haystack: V, needle: &'n V::Unit) -> Split<'h, 'n, V> {
    Split::new(haystack, needle)
}

/// Splits `haystack` on `needle`, emitting every segment including empty
/// ones.
///
/// ```rust
/// let parts: Vec<&str> = splitview::split_all("a,,b,", ",").collect();
/// assert_eq!(parts, ["a", "", "b", ""]);
/// ```
#[must_use]
pub fn split_all<'h, 'n, V: View<'h>>(haystack: V, needle: &'n V::Unit) -> Split<'h, 'n, V> {
    Split::with_options(haystack, needle, SplitOptions { emit_all: true })
}

/// Splits `haystack` on runs of characters for which `predicate` returns
/// `true`.
#[must_use]
pub fn split_fn<'h, V, F>(haystack: V, predicate: F) -> SplitFn<'h, V, F>
where
    V: View<'h>,
    F: FnMut(char) -> bool,
{
    SplitFn::new(haystack, predicate)
}
