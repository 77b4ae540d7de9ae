//! Needle abstraction and occurrence search

use super::Comparison;
use std::ops::Range;

/// A value that can be searched for inside a string
///
/// Implemented for `str`, `String`, `char`, references to those and
/// `Option<N>`. A `None` needle is treated as the empty needle.
pub trait Needle {
    /// Run `f` with this needle viewed as a string slice
    fn with_str<R>(&self, f: impl FnOnce(&str) -> R) -> R;
}

impl Needle for str {
    fn with_str<R>(&self, f: impl FnOnce(&str) -> R) -> R {
        f(self)
    }
}

impl Needle for String {
    fn with_str<R>(&self, f: impl FnOnce(&str) -> R) -> R {
        f(self.as_str())
    }
}

impl Needle for char {
    fn with_str<R>(&self, f: impl FnOnce(&str) -> R) -> R {
        let mut buf = [0u8; 4];
        f(self.encode_utf8(&mut buf))
    }
}

impl<N: Needle + ?Sized> Needle for &N {
    fn with_str<R>(&self, f: impl FnOnce(&str) -> R) -> R {
        (**self).with_str(f)
    }
}

impl<N: Needle> Needle for Option<N> {
    fn with_str<R>(&self, f: impl FnOnce(&str) -> R) -> R {
        match self {
            Some(needle) => needle.with_str(f),
            None => f(""),
        }
    }
}

/// Byte range of the first occurrence of `needle`, scanning left to right
///
/// The empty needle matches at offset 0.
pub fn find_first(haystack: &str, needle: impl Needle, comparison: Comparison) -> Option<Range<usize>> {
    needle.with_str(|needle| {
        if needle.is_empty() {
            return Some(0..0);
        }

        if comparison.is_case_sensitive() {
            return haystack
                .find(needle)
                .map(|start| start..start + needle.len());
        }

        haystack
            .char_indices()
            .find_map(|(start, _)| match_at(haystack, start, needle, comparison).map(|end| start..end))
    })
}

/// Byte range of the last occurrence of `needle`, scanning right to left
///
/// The empty needle matches at the end of the haystack.
pub fn find_last(haystack: &str, needle: impl Needle, comparison: Comparison) -> Option<Range<usize>> {
    needle.with_str(|needle| {
        if needle.is_empty() {
            return Some(haystack.len()..haystack.len());
        }

        if comparison.is_case_sensitive() {
            return haystack
                .rfind(needle)
                .map(|start| start..start + needle.len());
        }

        haystack
            .char_indices()
            .rev()
            .find_map(|(start, _)| match_at(haystack, start, needle, comparison).map(|end| start..end))
    })
}

/// End offset of `needle` if it matches at byte offset `start`
///
/// Case-folded characters may differ in encoded length, so the end is
/// measured on the haystack side.
fn match_at(haystack: &str, start: usize, needle: &str, comparison: Comparison) -> Option<usize> {
    let mut rest = haystack[start..].char_indices();
    let mut end = start;

    for expected in needle.chars() {
        let (offset, actual) = rest.next()?;
        if !comparison.chars_equal(actual, expected) {
            return None;
        }
        end = start + offset + actual.len_utf8();
    }

    Some(end)
}
