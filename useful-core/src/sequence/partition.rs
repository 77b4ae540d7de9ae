//! Fixed-size batching of ordered sequences

use crate::error::{Error, Result};
use std::iter::FusedIterator;
use std::slice::Chunks;

/// Batch size used when the caller has no preference
pub const DEFAULT_PARTITION_SIZE: usize = 10;

/// Lazy iterator over consecutive batches of at most `size` elements
///
/// Each batch is collected only when `next` is called. Cloning the iterator
/// (when the source iterator is `Clone`) yields an independent pass over the
/// remaining batches.
#[derive(Debug, Clone)]
pub struct Partitions<I> {
    iter: I,
    size: usize,
}

impl<I: Iterator> Partitions<I> {
    /// Batch size of this partitioning
    pub fn size(&self) -> usize {
        self.size
    }
}

impl<I: Iterator> Iterator for Partitions<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let batch: Vec<_> = self.iter.by_ref().take(self.size).collect();
        if batch.is_empty() {
            None
        } else {
            Some(batch)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        (
            lower.div_ceil(self.size),
            upper.map(|upper| upper.div_ceil(self.size)),
        )
    }
}

impl<I: FusedIterator> FusedIterator for Partitions<I> {}

/// Split `source` into consecutive batches of at most `size` elements
///
/// Fails with [`Error::OutOfRange`] when `size` is zero; the check happens
/// before any element is pulled from the source.
///
/// ```rust
/// use useful_core::sequence::partition;
///
/// let batches: Vec<Vec<i32>> = partition(0..7, 2).unwrap().collect();
/// assert_eq!(batches, vec![vec![0, 1], vec![2, 3], vec![4, 5], vec![6]]);
/// ```
pub fn partition<I>(source: I, size: usize) -> Result<Partitions<I::IntoIter>>
where
    I: IntoIterator,
{
    validate_size(size)?;
    Ok(Partitions {
        iter: source.into_iter(),
        size,
    })
}

/// [`partition`] with [`DEFAULT_PARTITION_SIZE`]
pub fn partition_default<I>(source: I) -> Partitions<I::IntoIter>
where
    I: IntoIterator,
{
    Partitions {
        iter: source.into_iter(),
        size: DEFAULT_PARTITION_SIZE,
    }
}

/// Borrowing variant of [`partition`] that yields sub-slices
pub fn partition_slice<T>(source: &[T], size: usize) -> Result<Chunks<'_, T>> {
    validate_size(size)?;
    Ok(source.chunks(size))
}

fn validate_size(size: usize) -> Result<()> {
    if size == 0 {
        tracing::debug!(size, "rejecting partition size");
        return Err(Error::out_of_range("size", size));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_item_count() {
        let items: Vec<i32> = (0..7).collect();
        for size in 1..=3 {
            let expected = items.len().div_ceil(size);
            assert_eq!(partition(&items, size).unwrap().count(), expected);
        }
    }

    #[test]
    fn test_partition_expected_items() {
        let batches: Vec<Vec<i32>> = partition(0..7, 3).unwrap().collect();
        assert_eq!(batches, vec![vec![0, 1, 2], vec![3, 4, 5], vec![6]]);
    }

    #[test]
    fn test_partition_smaller_than_size() {
        let batches: Vec<Vec<i32>> = partition(0..7, 10).unwrap().collect();
        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].len(), 7);
    }

    #[test]
    fn test_partition_zero_size_fails() {
        let error = partition(0..7, 0).unwrap_err();
        assert_eq!(
            error,
            Error::OutOfRange {
                name: "size",
                value: "0".to_string()
            }
        );
        assert!(partition_slice(&[1, 2, 3], 0).is_err());
    }

    #[test]
    fn test_partition_empty_source() {
        assert_eq!(partition(Vec::<u8>::new(), 4).unwrap().count(), 0);
    }

    #[test]
    fn test_partition_is_lazy() {
        let mut pulled = 0;
        let source = (0..100).inspect(|_| pulled += 1);
        let mut batches = partition(source, 5).unwrap();
        let first = batches.next().unwrap();
        assert_eq!(first, vec![0, 1, 2, 3, 4]);
        drop(batches);
        assert_eq!(pulled, 5);
    }

    #[test]
    fn test_partition_restart_via_clone() {
        let batches = partition(0..5, 2).unwrap();
        let first_pass: Vec<_> = batches.clone().collect();
        let second_pass: Vec<_> = batches.collect();
        assert_eq!(first_pass, second_pass);
    }

    #[test]
    fn test_partition_size_hint() {
        let batches = partition(0..7, 2).unwrap();
        assert_eq!(batches.size_hint(), (4, Some(4)));
        assert_eq!(batches.size(), 2);
    }

    #[test]
    fn test_partition_default_size() {
        let batches: Vec<_> = partition_default(0..25).collect();
        assert_eq!(batches.len(), 3);
        assert_eq!(batches[2], (20..25).collect::<Vec<_>>());
    }

    #[test]
    fn test_partition_slice_matches_partition() {
        let items = [0, 1, 2, 3, 4, 5, 6];
        let slices: Vec<&[i32]> = partition_slice(&items, 2).unwrap().collect();
        let owned: Vec<Vec<i32>> = partition(items, 2).unwrap().collect();
        assert_eq!(slices.len(), owned.len());
        for (slice, batch) in slices.iter().zip(&owned) {
            assert_eq!(*slice, batch.as_slice());
        }
    }
}
