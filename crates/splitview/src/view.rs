//! Byte and text presentation of scanned segments.
//!
//! The scanners work on raw bytes and report [`Segment`]s. A [`View`] turns a
//! segment back into a borrowed slice of the haystack it was created from,
//! either as `&[u8]` or as `&str`, without copying.
//!
//! A text haystack is only ever paired with a text needle, so every segment
//! produced over a `&str` starts and ends on a character boundary. Byte
//! segments carry no such guarantee; [`to_str`] is the checked conversion for
//! callers that know their bytes hold text.

use crate::{ViewError, scanner::Segment};

/// A borrowed haystack the split iterators can present segments as.
///
/// Implemented for `&[u8]` (byte views) and `&str` (text views).
pub trait View<'h>: Copy {
    /// The needle type paired with this haystack: `[u8]` for bytes, `str`
    /// for text.
    type Unit: ?Sized + AsRef<[u8]>;

    /// The underlying bytes of the haystack.
    fn as_bytes(self) -> &'h [u8];

    /// The sub-view covering `segment`.
    ///
    /// `segment` must have been produced by a scanner over this haystack.
    fn view(self, segment: Segment) -> Self;
}

impl<'h> View<'h> for &'h [u8] {
    type Unit = [u8];

    #[inline]
    fn as_bytes(self) -> &'h [u8] {
        self
    }

    #[inline]
    fn view(self, segment: Segment) -> Self {
        &self[segment.range()]
    }
}

impl<'h> View<'h> for &'h str {
    type Unit = str;

    #[inline]
    fn as_bytes(self) -> &'h [u8] {
        str::as_bytes(self)
    }

    #[inline]
    fn view(self, segment: Segment) -> Self {
        // Segments over text always fall on character boundaries.
        &self[segment.range()]
    }
}

/// Interprets `segment` of `bytes` as UTF-8 text without copying.
///
/// # Errors
///
/// Returns [`ViewError::InvalidUtf8`] if the segment is not well-formed UTF-8,
/// for example when a byte needle cut a multi-byte character in half.
///
/// # Panics
///
/// Panics if `segment` lies outside `bytes`.
pub fn to_str(bytes: &[u8], segment: Segment) -> Result<&str, ViewError> {
    core::str::from_utf8(&bytes[segment.range()]).map_err(|source| ViewError::InvalidUtf8 {
        offset: segment.offset,
        end: segment.end(),
        source,
    })
}
