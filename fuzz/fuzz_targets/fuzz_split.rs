#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use splitview::{Split, SplitOptions};

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    haystack: &'a [u8],
    needle: &'a [u8],
    emit_all: bool,
    /// Also exercise the text view when both sides are valid UTF-8.
    as_text: bool,
}

fn reference<'a>(haystack: &'a [u8], needle: &[u8], emit_all: bool) -> Vec<&'a [u8]> {
    let mut out = Vec::new();
    let (mut start, mut pos) = (0, 0);
    while pos + needle.len() <= haystack.len() {
        if haystack[pos..].starts_with(needle) {
            out.push(&haystack[start..pos]);
            pos += needle.len();
            start = pos;
        } else {
            pos += 1;
        }
    }
    out.push(&haystack[start..]);
    if !emit_all {
        out.retain(|s| !s.is_empty());
    }
    out
}

fuzz_target!(|input: Input<'_>| {
    let options = SplitOptions { emit_all: input.emit_all };
    let mut it = Split::with_options(input.haystack, input.needle, options);
    let got: Vec<&[u8]> = it.by_ref().collect();

    if input.needle.is_empty() {
        // Character walk: segments tile the haystack exactly.
        assert_eq!(got.concat(), input.haystack);
        assert!(got.iter().all(|s| (1..=4).contains(&s.len())));
    } else {
        assert_eq!(got, reference(input.haystack, input.needle, input.emit_all));
    }

    assert!(!it.advance(), "exhausted iterator advanced again");
    it.reset();
    assert_eq!(it.collect::<Vec<_>>(), got);

    if input.as_text {
        if let (Ok(h), Ok(n)) = (
            std::str::from_utf8(input.haystack),
            std::str::from_utf8(input.needle),
        ) {
            let text: Vec<&[u8]> = Split::with_options(h, n, options)
                .map(str::as_bytes)
                .collect();
            assert_eq!(text, got);
        }
    }
});
