use super::{Cursor, Segment, decode_rune};

/// Delimiter scanner: splits `haystack` on every occurrence of `needle`.
///
/// Matching is leftmost and non-overlapping; once a delimiter is consumed the
/// scan resumes after its last byte.
///
/// - Default mode collapses leading, trailing and consecutive delimiters, so
///   only non-empty segments are produced.
/// - Emit-all mode produces every gap, including zero-length ones, plus one
///   final (possibly empty) segment after the last delimiter. An empty
///   haystack yields a single empty segment.
/// - An empty needle splits after every decoded character in either mode.
#[derive(Debug, Clone)]
pub(crate) struct Delimiter<'h, 'n> {
    haystack: &'h [u8],
    needle: &'n [u8],
    emit_all: bool,
    cursor: Cursor,
}

impl<'h, 'n> Delimiter<'h, 'n> {
    pub fn new(haystack: &'h [u8], needle: &'n [u8], emit_all: bool) -> Self {
        Self {
            haystack,
            needle,
            emit_all,
            cursor: Cursor::default(),
        }
    }

    #[inline]
    pub fn haystack(&self) -> &'h [u8] {
        self.haystack
    }

    #[inline]
    pub fn needle(&self) -> &'n [u8] {
        self.needle
    }

    #[inline]
    pub fn segment(&self) -> Segment {
        self.cursor.current
    }

    pub fn reset(&mut self) {
        self.cursor.rewind();
    }

    /// Moves to the next segment; `false` once the haystack is exhausted.
    pub fn advance(&mut self) -> bool {
        if self.cursor.is_exhausted(self.haystack.len()) {
            return false;
        }
        if self.needle.is_empty() {
            return self.advance_rune();
        }
        if self.emit_all {
            self.advance_all()
        } else {
            self.advance_non_empty()
        }
    }

    #[inline]
    fn matches_at(&self, pos: usize) -> bool {
        self.haystack[pos..].starts_with(self.needle)
    }

    fn advance_rune(&mut self) -> bool {
        let len = self.haystack.len();
        let start = self.cursor.start;
        if start == len {
            self.cursor.exhaust(len);
            return false;
        }
        let (_, width) = decode_rune(&self.haystack[start..]);
        self.cursor.emit(start, start + width);
        self.cursor.start = start + width;
        true
    }

    fn advance_non_empty(&mut self) -> bool {
        let len = self.haystack.len();
        let n = self.needle.len();
        let mut pos = self.cursor.start;
        // Inside a run of non-delimiter bytes that began at `cursor.start`.
        let mut in_run = false;

        while pos + n <= len {
            if !self.matches_at(pos) {
                if !in_run {
                    self.cursor.start = pos;
                    in_run = true;
                }
                pos += 1;
                continue;
            }
            if in_run {
                self.cursor.emit(self.cursor.start, pos);
                self.cursor.start = pos + n;
                return true;
            }
            // Leading or consecutive delimiter: nothing to emit.
            pos += n;
            self.cursor.start = pos;
        }

        // No delimiter fits in the tail; whatever remains is the last segment.
        let start = self.cursor.start;
        self.cursor.exhaust(len);
        if start < len {
            self.cursor.emit(start, len);
            true
        } else {
            false
        }
    }

    fn advance_all(&mut self) -> bool {
        let len = self.haystack.len();
        let n = self.needle.len();
        let start = self.cursor.start;

        let mut pos = start;
        while pos + n <= len {
            if self.matches_at(pos) {
                self.cursor.emit(start, pos);
                self.cursor.start = pos + n;
                return true;
            }
            pos += 1;
        }

        // Remainder after the last delimiter. Empty when the haystack ends
        // with the needle or is itself empty.
        self.cursor.emit(start, len);
        self.cursor.exhaust(len);
        true
    }
}
