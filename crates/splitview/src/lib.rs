//! Non-allocating split iterators over byte and string slices.
//!
//! Two scanners share one design: the caller hands over a buffer once, and
//! each call to `advance()` moves a cursor forward and exposes the next
//! segment as a borrowed slice of that buffer. Nothing is copied and nothing
//! is allocated.
//!
//! - [`Split`] splits on a fixed delimiter. By default empty segments are
//!   skipped; [`SplitOptions::emit_all`] keeps them. An empty delimiter splits
//!   after every UTF-8 character.
//! - [`SplitFn`] splits on maximal runs of characters matching a predicate.
//! - [`helpers`] preconfigures [`SplitFn`] for whitespace, lines, numbers and
//!   words.
//! - [`handoff`] (feature `handoff`) runs a scan on a worker thread and
//!   delivers segments over a channel.
//!
//! Both scanners work on bytes; the [`View`] type parameter chooses whether
//! segments come back as `&[u8]` or `&str`.
//!
//! ```rust
//! use splitview::{Split, SplitFn, split_all};
//!
//! let parts: Vec<&str> = Split::new("a, b,, c", ", ").collect();
//! assert_eq!(parts, ["a", "b,", "c"]);
//!
//! let all: Vec<&str> = split_all(",,a", ",").collect();
//! assert_eq!(all, ["", "", "a"]);
//!
//! let fields: Vec<&[u8]> = SplitFn::new(&b"A\tB\tC"[..], char::is_whitespace).collect();
//! assert_eq!(fields, [&b"A"[..], &b"B"[..], &b"C"[..]]);
//! ```

#![no_std]

#[cfg(test)]
extern crate alloc;
#[cfg(any(test, feature = "handoff"))]
extern crate std;

mod error;
mod options;
mod scanner;
mod split;

pub mod chars;
pub mod helpers;
pub mod view;

#[cfg(feature = "handoff")]
pub mod handoff;

#[cfg(test)]
mod tests;

pub use error::ViewError;
pub use options::SplitOptions;
pub use scanner::Segment;
pub use split::{
    BytesSplit, BytesSplitFn, Split, SplitFn, StrSplit, StrSplitFn, split, split_all, split_fn,
};
pub use view::View;
