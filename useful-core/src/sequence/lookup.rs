//! Keyed and indexed lookups with fallbacks

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// Map types that can answer a keyed lookup
pub trait MapLookup<K, V> {
    /// Borrow the value stored under `key`
    fn lookup<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Ord + Eq + ?Sized;
}

impl<K: Hash + Eq, V, S: BuildHasher> MapLookup<K, V> for HashMap<K, V, S> {
    fn lookup<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Ord + Eq + ?Sized,
    {
        self.get(key)
    }
}

impl<K: Ord, V> MapLookup<K, V> for BTreeMap<K, V> {
    fn lookup<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Ord + Eq + ?Sized,
    {
        self.get(key)
    }
}

/// Value stored under `key`, or `default` when the map or key is missing
pub fn value_or<M, K, V, Q>(map: Option<&M>, key: &Q, default: V) -> V
where
    M: MapLookup<K, V>,
    K: Borrow<Q>,
    Q: Hash + Ord + Eq + ?Sized,
    V: Clone,
{
    map.and_then(|map| map.lookup(key))
        .cloned()
        .unwrap_or(default)
}

/// Value stored under `key`, or `V::default()`
pub fn value_or_default<M, K, V, Q>(map: Option<&M>, key: &Q) -> V
where
    M: MapLookup<K, V>,
    K: Borrow<Q>,
    Q: Hash + Ord + Eq + ?Sized,
    V: Clone + Default,
{
    value_or(map, key, V::default())
}

/// Element at `index`, or `default` for a missing slice or an index outside it
pub fn element_or<T: Clone>(values: Option<&[T]>, index: isize, default: T) -> T {
    element(values, index).cloned().unwrap_or(default)
}

/// Element at `index` passed through `f`, or `default` untransformed
///
/// `f` is applied to found elements only.
pub fn element_map_or<T, F>(values: Option<&[T]>, index: isize, default: T, f: F) -> T
where
    T: Clone,
    F: FnOnce(T) -> T,
{
    element(values, index).cloned().map_or(default, f)
}

fn element<T>(values: Option<&[T]>, index: isize) -> Option<&T> {
    let index = usize::try_from(index).ok()?;
    values?.get(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: [&str; 4] = ["  hello  ", "  goodbye  ", "*Mob* 3264 yep ", "!345ewr:)"];

    #[test]
    fn test_value_or_hash_map() {
        let mut map = HashMap::new();
        map.insert("one".to_string(), 1);
        assert_eq!(value_or(Some(&map), "one", 0), 1);
        assert_eq!(value_or(Some(&map), "two", -1), -1);
        assert_eq!(value_or_default(Some(&map), "two"), 0);
    }

    #[test]
    fn test_value_or_btree_map() {
        let map = BTreeMap::from([(1i32, "a"), (2, "b")]);
        assert_eq!(value_or(Some(&map), &2i32, "z"), "b");
        assert_eq!(value_or(Some(&map), &3i32, "z"), "z");
    }

    #[test]
    fn test_value_or_missing_map() {
        assert_eq!(value_or(None::<&HashMap<String, i32>>, "one", 7), 7);
        assert_eq!(value_or_default(None::<&BTreeMap<u8, String>>, &1u8), String::new());
    }

    #[test]
    fn test_element_map_or_trims_found_values() {
        let trim = |s: &'static str| s.trim();
        assert_eq!(element_map_or(Some(&WORDS[..]), 0, "", trim), "hello");
        assert_eq!(element_map_or(Some(&WORDS[..]), 1, "yay", trim), "goodbye");
        assert_eq!(element_map_or(Some(&WORDS[..]), 3, "", trim), "!345ewr:)");
    }

    #[test]
    fn test_element_out_of_range_returns_default() {
        for index in [4, 5, 100, -1, -100] {
            assert_eq!(element_or(Some(&WORDS[..]), index, "yay"), "yay");
            assert_eq!(element_map_or(Some(&WORDS[..]), index, "yay", str::trim), "yay");
        }
        assert_eq!(element_or(None::<&[i32]>, 0, 1), 1);
    }

    #[test]
    fn test_element_map_or_numbers() {
        let values = [9, 8, 7, 6, 5, 4];
        assert_eq!(element_map_or(Some(&values[..]), 0, 2, |n| n * 2), 18);
        assert_eq!(element_map_or(Some(&values[..]), 4, 2, |n| n * 2), 10);
        // default is returned as is, not transformed
        assert_eq!(element_map_or(Some(&values[..]), 7, 1, |n| n * 2), 1);
        assert_eq!(element_or(Some(&values[..]), 5, 0), 4);
    }
}
