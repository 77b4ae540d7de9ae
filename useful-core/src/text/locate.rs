//! Null-tolerant substring search and extraction
//!
//! None of these functions fail. Missing or empty inputs degrade to an empty
//! string or to the unchanged source, as documented on each function.
//! Extracted values are slices of the source.

use super::search::{find_first, find_last, Needle};
use super::Comparison;

/// Does `needle` occur anywhere in `source`?
///
/// Returns false when either side is missing or empty.
pub fn contains_value<'a>(
    source: impl Into<Option<&'a str>>,
    needle: impl Needle,
    comparison: Comparison,
) -> bool {
    let Some(source) = non_empty(source.into()) else {
        return false;
    };

    needle.with_str(|needle| !needle.is_empty() && find_first(source, needle, comparison).is_some())
}

/// Alias of [`contains_value`]
pub fn has_value<'a>(
    source: impl Into<Option<&'a str>>,
    needle: impl Needle,
    comparison: Comparison,
) -> bool {
    contains_value(source, needle, comparison)
}

/// Substring by character position that never panics
///
/// `length == 0` selects the remainder of the string from `start`. A negative
/// start or length, a start at or past the end, or a range running past the
/// end all produce an empty string.
pub fn substring_or_empty<'a>(
    source: impl Into<Option<&'a str>>,
    start: isize,
    length: isize,
) -> &'a str {
    let Some(source) = non_empty(source.into()) else {
        return "";
    };

    if start < 0 || length < 0 {
        return "";
    }

    let start = start as usize;
    let char_count = source.chars().count();
    if start >= char_count {
        return "";
    }

    let length = if length == 0 {
        char_count - start
    } else {
        length as usize
    };

    match start.checked_add(length) {
        Some(end) if end <= char_count => slice_chars(source, start, end),
        _ => "",
    }
}

/// Text after the first occurrence of `needle`
///
/// Empty when `source` is missing or blank; `source` unchanged when the
/// needle is empty or absent.
pub fn substring_after_value<'a>(
    source: impl Into<Option<&'a str>>,
    needle: impl Needle,
    comparison: Comparison,
) -> &'a str {
    let Some(source) = non_blank(source.into()) else {
        return "";
    };

    needle.with_str(|needle| {
        if needle.is_empty() {
            return source;
        }
        find_first(source, needle, comparison).map_or(source, |found| &source[found.end..])
    })
}

/// Text after the last occurrence of `needle`
///
/// Same degradation rules as [`substring_after_value`].
pub fn substring_after_last_value<'a>(
    source: impl Into<Option<&'a str>>,
    needle: impl Needle,
    comparison: Comparison,
) -> &'a str {
    let Some(source) = non_blank(source.into()) else {
        return "";
    };

    needle.with_str(|needle| {
        if needle.is_empty() {
            return source;
        }
        find_last(source, needle, comparison).map_or(source, |found| &source[found.end..])
    })
}

/// Text before the first occurrence of `needle`
///
/// Empty when `source` is missing or empty (a blank source is returned as
/// is); `source` unchanged when the needle is empty or absent.
pub fn substring_before_value<'a>(
    source: impl Into<Option<&'a str>>,
    needle: impl Needle,
    comparison: Comparison,
) -> &'a str {
    let Some(source) = non_empty(source.into()) else {
        return "";
    };

    needle.with_str(|needle| {
        if needle.is_empty() {
            return source;
        }
        find_first(source, needle, comparison).map_or(source, |found| &source[..found.start])
    })
}

/// Text before the last occurrence of `needle`
///
/// Same degradation rules as [`substring_before_value`].
pub fn substring_before_last_value<'a>(
    source: impl Into<Option<&'a str>>,
    needle: impl Needle,
    comparison: Comparison,
) -> &'a str {
    let Some(source) = non_empty(source.into()) else {
        return "";
    };

    needle.with_str(|needle| {
        if needle.is_empty() {
            return source;
        }
        find_last(source, needle, comparison).map_or(source, |found| &source[..found.start])
    })
}

/// Trim surrounding whitespace, passing missing values through
pub fn safe_trim<'a>(source: impl Into<Option<&'a str>>) -> Option<&'a str> {
    source.into().map(str::trim)
}

/// Case-insensitive equality with the historical null handling
///
/// Two missing values are equal. Otherwise a missing left value is read as
/// `""`, while a missing right value never equals anything: `(None, "")` is
/// true but `("", None)` is false.
pub fn equals_ignore_case<'a, 'b>(
    left: impl Into<Option<&'a str>>,
    right: impl Into<Option<&'b str>>,
) -> bool {
    match (left.into(), right.into()) {
        (None, None) => true,
        (_, None) => false,
        (left, Some(right)) => Comparison::CaseInsensitive.strs_equal(left.unwrap_or(""), right),
    }
}

fn non_empty(source: Option<&str>) -> Option<&str> {
    source.filter(|s| !s.is_empty())
}

fn non_blank(source: Option<&str>) -> Option<&str> {
    source.filter(|s| !s.trim().is_empty())
}

/// Slice by character positions; both bounds must be within the string
fn slice_chars(source: &str, start: usize, end: usize) -> &str {
    let byte_offset = |position: usize| {
        source
            .char_indices()
            .nth(position)
            .map_or(source.len(), |(offset, _)| offset)
    };

    &source[byte_offset(start)..byte_offset(end)]
}
