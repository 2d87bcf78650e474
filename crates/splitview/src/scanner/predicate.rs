use super::{Cursor, Segment, decode_rune};

/// Predicate scanner: produces the maximal runs of characters for which
/// `predicate` returns `false`.
///
/// Characters are decoded as UTF-8 one at a time; consecutive separator
/// characters collapse, so no empty segment is ever produced.
#[derive(Debug, Clone)]
pub(crate) struct Predicate<'h, F> {
    haystack: &'h [u8],
    predicate: F,
    cursor: Cursor,
}

impl<'h, F> Predicate<'h, F>
where
    F: FnMut(char) -> bool,
{
    pub fn new(haystack: &'h [u8], predicate: F) -> Self {
        Self {
            haystack,
            predicate,
            cursor: Cursor::default(),
        }
    }

    #[inline]
    pub fn haystack(&self) -> &'h [u8] {
        self.haystack
    }

    #[inline]
    pub fn segment(&self) -> Segment {
        self.cursor.current
    }

    pub fn reset(&mut self) {
        self.cursor.rewind();
    }

    /// Moves to the next run; `false` once the haystack is exhausted.
    pub fn advance(&mut self) -> bool {
        let len = self.haystack.len();
        if self.cursor.start >= len {
            self.cursor.exhaust(len);
            return false;
        }

        let mut pos = self.cursor.start;
        let mut in_run = false;

        while pos < len {
            let (ch, width) = decode_rune(&self.haystack[pos..]);
            if (self.predicate)(ch) {
                if in_run {
                    self.cursor.emit(self.cursor.start, pos);
                    self.cursor.start = pos + width;
                    return true;
                }
                self.cursor.start = pos + width;
            } else if !in_run {
                self.cursor.start = pos;
                in_run = true;
            }
            pos += width;
        }

        // Buffer ended inside a run (or on a separator).
        let start = self.cursor.start;
        self.cursor.exhaust(len);
        if in_run {
            self.cursor.emit(start, len);
        }
        in_run
    }
}
