#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use splitview::{SplitFn, chars};

#[derive(Debug, Clone, Copy, Arbitrary)]
enum Class {
    Space,
    Newline,
    Numeric,
    NotLetterOrNumber,
    Byte(u8),
}

impl Class {
    fn matches(self, ch: char) -> bool {
        match self {
            Class::Space => chars::is_space(ch),
            Class::Newline => chars::is_newline(ch),
            Class::Numeric => chars::is_numeric(ch),
            Class::NotLetterOrNumber => chars::is_not_letter_or_number(ch),
            Class::Byte(b) => ch == char::from(b),
        }
    }
}

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    haystack: &'a [u8],
    class: Class,
}

fuzz_target!(|input: Input<'_>| {
    let class = input.class;
    let runs: Vec<&[u8]> = SplitFn::new(input.haystack, |ch| class.matches(ch)).collect();

    assert!(runs.iter().all(|run| !run.is_empty()));
    for pair in runs.windows(2) {
        let gap = pair[1].as_ptr() as usize - (pair[0].as_ptr() as usize + pair[0].len());
        assert!(gap > 0, "adjacent runs must be separated");
    }

    if let Ok(text) = std::str::from_utf8(input.haystack) {
        let expected: Vec<&[u8]> = text
            .split(|ch| class.matches(ch))
            .filter(|s| !s.is_empty())
            .map(str::as_bytes)
            .collect();
        assert_eq!(runs, expected);
    }
});
