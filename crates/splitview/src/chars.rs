//! Character classes used by the helper constructors.
//!
//! Each function matches the `FnMut(char) -> bool` shape expected by
//! [`SplitFn`](crate::SplitFn) and can be passed directly.

use unicode_general_category::{GeneralCategory, get_general_category};

/// Unicode `White_Space`.
#[must_use]
#[inline]
pub fn is_space(ch: char) -> bool {
    ch.is_whitespace()
}

/// Carriage return or line feed. Deliberately naive: no `U+2028` or `U+0085`.
#[must_use]
#[inline]
pub fn is_newline(ch: char) -> bool {
    ch == '\n' || ch == '\r'
}

/// Unicode numeric (`Nd`, `Nl`, `No`).
#[must_use]
#[inline]
pub fn is_numeric(ch: char) -> bool {
    ch.is_numeric()
}

/// General category `L*` or `N*`.
///
/// Combining marks are neither, so they end a run even where
/// [`char::is_alphanumeric`] would accept them.
#[must_use]
#[inline]
pub fn is_letter_or_number(ch: char) -> bool {
    if ch.is_ascii() {
        return ch.is_ascii_alphanumeric();
    }
    matches!(
        get_general_category(ch),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
            | GeneralCategory::DecimalNumber
            | GeneralCategory::LetterNumber
            | GeneralCategory::OtherNumber
    )
}

/// Everything that is not a letter or a number.
#[must_use]
#[inline]
pub fn is_not_letter_or_number(ch: char) -> bool {
    !is_letter_or_number(ch)
}
