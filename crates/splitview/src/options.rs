/// Configuration options for delimiter splitting.
///
/// Options are fixed when a [`Split`](crate::Split) is constructed. To change
/// them, build a new iterator (see [`Split::emit_all`](crate::Split::emit_all)).
///
/// # Examples
///
/// ```rust
/// use splitview::{Split, SplitOptions};
///
/// let options = SplitOptions {
///     emit_all: true,
///     ..Default::default()
/// };
/// let parts: Vec<&str> = Split::with_options(",,a", ",", options).collect();
/// assert_eq!(parts, ["", "", "a"]);
/// ```
///
/// # Default
///
/// All options default to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SplitOptions {
    /// Whether to emit every segment, including empty ones.
    ///
    /// By default, leading, trailing, and consecutive delimiters collapse and
    /// only non-empty segments are produced, so splitting `"  a b "` on `" "`
    /// yields `["a", "b"]`.
    ///
    /// When `true`, every gap between delimiters is a segment, mirroring a
    /// full split: `",,a"` on `","` yields `["", "", "a"]`, a trailing
    /// delimiter yields a final empty segment, and an empty haystack yields a
    /// single empty segment.
    ///
    /// An empty needle always splits after every character; this option
    /// does not change that.
    ///
    /// # Default
    ///
    /// `false`
    pub emit_all: bool,
}
