//! Prefix/suffix checks and whole-string character classes

use super::Comparison;
use regex::Regex;
use std::sync::OnceLock;

static BASE64_PATTERN: OnceLock<Regex> = OnceLock::new();
static NUMERIC_PATTERN: OnceLock<Regex> = OnceLock::new();
static ALPHA_PATTERN: OnceLock<Regex> = OnceLock::new();
static ALPHA_NUMERIC_PATTERN: OnceLock<Regex> = OnceLock::new();

fn pattern(cell: &'static OnceLock<Regex>, source: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(source).expect("built-in pattern must compile"))
}

/// `starts_with` where a missing source reads as `""`
pub fn safe_starts_with<'a>(
    source: impl Into<Option<&'a str>>,
    find: &str,
    comparison: Comparison,
) -> bool {
    let source = source.into().unwrap_or("");
    let mut source_chars = source.chars();

    find.chars().all(|expected| {
        source_chars
            .next()
            .is_some_and(|actual| comparison.chars_equal(actual, expected))
    })
}

/// `ends_with` where a missing source reads as `""`
pub fn safe_ends_with<'a>(
    source: impl Into<Option<&'a str>>,
    find: &str,
    comparison: Comparison,
) -> bool {
    let source = source.into().unwrap_or("");
    let mut source_chars = source.chars().rev();

    find.chars().rev().all(|expected| {
        source_chars
            .next()
            .is_some_and(|actual| comparison.chars_equal(actual, expected))
    })
}

/// Compare two single characters
pub fn chars_equal(left: char, right: char, comparison: Comparison) -> bool {
    comparison.chars_equal(left, right)
}

/// Is the value a well-formed, padded base64 string?
pub fn is_base64<'a>(source: impl Into<Option<&'a str>>) -> bool {
    matches_whole(
        source.into(),
        pattern(
            &BASE64_PATTERN,
            r"^([A-Za-z0-9+/]{4})*([A-Za-z0-9+/]{4}|[A-Za-z0-9+/]{3}=|[A-Za-z0-9+/]{2}==)$",
        ),
    )
}

/// Does the value consist only of ASCII digits?
pub fn is_all_numbers<'a>(source: impl Into<Option<&'a str>>) -> bool {
    matches_whole(source.into(), pattern(&NUMERIC_PATTERN, r"^[0-9]+$"))
}

/// Does the value consist only of ASCII letters?
pub fn is_all_alpha<'a>(source: impl Into<Option<&'a str>>) -> bool {
    matches_whole(source.into(), pattern(&ALPHA_PATTERN, r"^[a-zA-Z]+$"))
}

/// Does the value consist only of ASCII letters and digits?
pub fn is_all_alpha_or_numbers<'a>(source: impl Into<Option<&'a str>>) -> bool {
    matches_whole(
        source.into(),
        pattern(&ALPHA_NUMERIC_PATTERN, r"^[a-zA-Z0-9]+$"),
    )
}

fn matches_whole(source: Option<&str>, regex: &Regex) -> bool {
    match source {
        Some(source) if !source.trim().is_empty() => regex.is_match(source),
        _ => false,
    }
}
