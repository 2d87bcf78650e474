//! Preconfigured predicate splitters.
//!
//! ```rust
//! use splitview::helpers::{fields, words};
//!
//! let f: Vec<&str> = fields(" Hello World ").collect();
//! assert_eq!(f, ["Hello", "World"]);
//!
//! let w: Vec<&str> = words("The bigger the interface, the weaker").collect();
//! assert_eq!(w, ["The", "bigger", "the", "interface", "the", "weaker"]);
//! ```

use crate::{SplitFn, chars, view::View};

/// The predicate type every helper uses.
pub type CharClass = fn(char) -> bool;

/// Values between runs of whitespace.
#[must_use]
pub fn fields<'h, V: View<'h>>(haystack: V) -> SplitFn<'h, V, CharClass> {
    SplitFn::new(haystack, chars::is_space as CharClass)
}

/// Non-empty lines; CR and LF both terminate a line and blank lines vanish.
#[must_use]
pub fn lines<'h, V: View<'h>>(haystack: V) -> SplitFn<'h, V, CharClass> {
    SplitFn::new(haystack, chars::is_newline as CharClass)
}

/// Values between runs of numeric characters.
#[must_use]
pub fn numbers<'h, V: View<'h>>(haystack: V) -> SplitFn<'h, V, CharClass> {
    SplitFn::new(haystack, chars::is_numeric as CharClass)
}

/// Maximal runs of letters and numbers.
///
/// This is a naive word definition: punctuation inside a word, such as an
/// apostrophe, ends it.
#[must_use]
pub fn words<'h, V: View<'h>>(haystack: V) -> SplitFn<'h, V, CharClass> {
    SplitFn::new(haystack, chars::is_not_letter_or_number as CharClass)
}
