//! Emptiness and membership checks tolerant of missing sequences

use crate::text::Comparison;

/// True for a missing sequence or one without elements
pub fn is_none_or_empty<I: IntoIterator>(source: Option<I>) -> bool {
    match source {
        None => true,
        Some(source) => source.into_iter().next().is_none(),
    }
}

/// Does any string in `source` equal `find` under `comparison`?
///
/// A missing sequence contains nothing.
pub fn is_value_in_list<I>(source: Option<I>, find: &str, comparison: Comparison) -> bool
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    source.is_some_and(|source| {
        source
            .into_iter()
            .any(|value| comparison.strs_equal(value.as_ref(), find))
    })
}

/// Does any element of `source` equal `find`?
pub fn contains_item<I, T>(source: Option<I>, find: &T) -> bool
where
    I: IntoIterator,
    I::Item: PartialEq<T>,
{
    source.is_some_and(|source| source.into_iter().any(|value| value == *find))
}
