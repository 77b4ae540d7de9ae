//! Contiguous sub-ranges of a sequence

use std::iter::{Skip, Take};

/// Lazy page over a sequence
pub type Page<I> = Take<Skip<I>>;

/// Up to `length` elements starting at the `start`-th (0-based)
///
/// Never fails: a negative `start` or `length` yields an empty page, as does
/// a `start` past the end. A short source yields a truncated page.
///
/// ```rust
/// use useful_core::sequence::page;
///
/// assert_eq!(page(0..7, 3, 5).collect::<Vec<_>>(), vec![3, 4, 5, 6]);
/// assert_eq!(page(0..7, -1, 2).count(), 0);
/// ```
pub fn page<I>(source: I, start: isize, length: isize) -> Page<I::IntoIter>
where
    I: IntoIterator,
{
    let (skip, take) = bounds(start, length);
    source.into_iter().skip(skip).take(take)
}

/// [`page`] on a slice, returning a sub-slice
pub fn page_slice<T>(source: &[T], start: isize, length: isize) -> &[T] {
    let (skip, take) = bounds(start, length);
    let start = skip.min(source.len());
    let end = start.saturating_add(take).min(source.len());
    &source[start..end]
}

/// Translate signed page bounds into (skip, take); negatives select nothing
fn bounds(start: isize, length: isize) -> (usize, usize) {
    if start < 0 || length < 0 {
        (0, 0)
    } else {
        (start as usize, length as usize)
    }
}
