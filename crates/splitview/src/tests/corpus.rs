//! Table-driven checks over a fixed corpus of mixed-script inputs.

use alloc::vec::Vec;

use rstest::rstest;

use crate::{Split, SplitFn, SplitOptions, chars, split_all};

const CORPUS: &[&str] = &[
    "",
    "    aa a      a ",
    "Hi",
    " Hello World ",
    "   !Κάρολος       ...Δαρβίνος    123",
    "A\tB\tC",
    "one, two,, three,\nfour",
    ",,,",
    "語語 語, 語",
    "line one\r\nline two\n\nline three\r",
    "\u{3000}wide\u{3000}space\u{3000}",
];

#[rstest]
fn delimiter_agrees_with_str_split(
    #[values(0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10)] index: usize,
    #[values(" ", ", ", ",\n", ",", "語")] needle: &str,
    #[values(false, true)] emit_all: bool,
) {
    let haystack = CORPUS[index];
    let got: Vec<&str> =
        Split::with_options(haystack, needle, SplitOptions { emit_all }).collect();
    let expected: Vec<&str> = haystack
        .split(needle)
        .filter(|s| emit_all || !s.is_empty())
        .collect();
    assert_eq!(got, expected, "haystack {haystack:?} needle {needle:?}");
}

#[rstest]
fn empty_needle_yields_characters(
    #[values(0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10)] index: usize,
    #[values(false, true)] emit_all: bool,
) {
    let haystack = CORPUS[index];
    let got: Vec<&str> =
        Split::with_options(haystack, "", SplitOptions { emit_all }).collect();
    assert_eq!(got.len(), haystack.chars().count());
    assert_eq!(got.concat(), haystack);
}

#[rstest]
#[case::space(chars::is_space as fn(char) -> bool)]
#[case::newline(chars::is_newline as fn(char) -> bool)]
#[case::punctuation(chars::is_not_letter_or_number as fn(char) -> bool)]
fn predicate_agrees_with_str_split(
    #[case] class: fn(char) -> bool,
    #[values(0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10)] index: usize,
) {
    let haystack = CORPUS[index];
    let got: Vec<&str> = SplitFn::new(haystack, class).collect();
    let expected: Vec<&str> = haystack.split(class).filter(|s| !s.is_empty()).collect();
    assert_eq!(got, expected, "haystack {haystack:?}");
}

#[rstest]
#[case("    aa a      a ", " ", &["aa", "a", "a"])]
#[case("Hi", ",", &["Hi"])]
#[case(" Hello World ", " ", &["Hello", "World"])]
#[case("a,,b,", ",", &["a", "b"])]
#[case(",,,", ",", &[])]
#[case("", ",", &[])]
#[case("aaa", "aa", &["a"])]
#[case(", a", ", ", &["a"])]
#[case("ab", "abc", &["ab"])]
fn default_mode_cases(#[case] haystack: &str, #[case] needle: &str, #[case] expected: &[&str]) {
    let got: Vec<&str> = Split::new(haystack, needle).collect();
    assert_eq!(got, expected);
}

#[rstest]
#[case(",,a", ",", &["", "", "a"])]
#[case("a,", ",", &["a", ""])]
#[case(",", ",", &["", ""])]
#[case("", ",", &[""])]
#[case("Hi", "", &["H", "i"])]
#[case("", "", &[])]
fn emit_all_cases(#[case] haystack: &str, #[case] needle: &str, #[case] expected: &[&str]) {
    let got: Vec<&str> = split_all(haystack, needle).collect();
    assert_eq!(got, expected);
}

#[test]
fn emit_all_switch_rewinds() {
    let mut it = Split::new("a,,b", ",");
    assert_eq!(it.next(), Some("a"));
    let all: Vec<&str> = it.emit_all().collect();
    assert_eq!(all, ["a", "", "b"]);
}

#[test]
fn explicit_protocol_reports_offsets() {
    let haystack = "   !Κάρολος       ...Δαρβίνος    123";
    let mut it = SplitFn::new(haystack, chars::is_space);
    let mut got = Vec::new();
    while it.advance() {
        got.push((it.segment().offset, it.current()));
    }
    assert_eq!(got, [(3, "!Κάρολος"), (25, "...Δαρβίνος"), (48, "123")]);
    assert!(!it.advance());
}
