use thiserror::Error;

/// Errors raised when presenting a byte segment as text.
///
/// Scanning itself never fails: exhaustion is reported by `advance()`
/// returning `false`, and malformed UTF-8 is stepped over one byte at a time.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ViewError {
    /// The segment is not well-formed UTF-8.
    #[error("segment {offset}..{end} is not valid UTF-8")]
    InvalidUtf8 {
        /// Byte offset of the segment in the haystack.
        offset: usize,
        /// One past the last byte of the segment.
        end: usize,
        /// Where validation failed, relative to the segment start.
        #[source]
        source: core::str::Utf8Error,
    },
}
