use alloc::vec::Vec;

/// Number of quickcheck cases to run.
pub(crate) fn quickcheck_tests() -> u64 {
    #[cfg(not(miri))]
    let tests = if cfg!(feature = "test-fast") {
        100
    } else if is_ci::cached() {
        10_000
    } else {
        1_000
    };
    #[cfg(miri)]
    let tests = 10;

    tests
}

/// Straightforward leftmost, non-overlapping split of `haystack` on a
/// non-empty `needle`, keeping every segment.
pub(crate) fn naive_split<'a>(haystack: &'a [u8], needle: &[u8]) -> Vec<&'a [u8]> {
    assert!(!needle.is_empty());
    let mut out = Vec::new();
    let mut start = 0;
    let mut pos = 0;
    while pos + needle.len() <= haystack.len() {
        if &haystack[pos..pos + needle.len()] == needle {
            out.push(&haystack[start..pos]);
            pos += needle.len();
            start = pos;
        } else {
            pos += 1;
        }
    }
    out.push(&haystack[start..]);
    out
}

/// Byte ranges of the characters of `haystack`, decoding invalid bytes one at
/// a time.
pub(crate) fn naive_runes(haystack: &[u8]) -> Vec<&[u8]> {
    let mut out = Vec::new();
    let mut pos = 0;
    while pos < haystack.len() {
        let width = (1..=4)
            .filter(|w| pos + w <= haystack.len())
            .find(|&w| core::str::from_utf8(&haystack[pos..pos + w]).is_ok())
            .unwrap_or(1);
        out.push(&haystack[pos..pos + width]);
        pos += width;
    }
    out
}
