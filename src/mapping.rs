//! Ordered mappings and the remap operation.

use std::hash::Hash;

use indexmap::IndexMap;

/// Insertion-ordered mapping with unique keys.
pub type Mapping<K, V> = IndexMap<K, V>;

/// Result of [`remap`]: one entry per source key, `None` where the lookup failed.
pub type Remapped<K, W> = Mapping<K, Option<W>>;

/// Re-map every value of `source` through `target`.
///
/// For each `(key, lookup)` in `source`, in insertion order, the result holds
/// `(key, target.get(lookup))`. A lookup key absent from `target` yields
/// `None` rather than an error, so the result always has exactly the keys of
/// `source` in the same order. Neither input is modified.
#[must_use]
pub fn remap<K, V, W>(source: &Mapping<K, V>, target: &Mapping<V, W>) -> Remapped<K, W>
where
    K: Hash + Eq + Clone,
    V: Hash + Eq,
    W: Clone,
{
    source
        .iter()
        .map(|(key, lookup)| (key.clone(), target.get(lookup).cloned()))
        .collect()
}

/// Source keys whose lookup failed, in source order.
#[must_use]
pub fn missing_keys<K, W>(result: &Remapped<K, W>) -> Vec<&K> {
    result
        .iter()
        .filter(|(_, value)| value.is_none())
        .map(|(key, _)| key)
        .collect()
}

/// The fully resolved mapping, or `None` if any value is absent.
#[must_use]
pub fn resolve_all<K, W>(result: &Remapped<K, W>) -> Option<Mapping<K, W>>
where
    K: Hash + Eq + Clone,
    W: Clone,
{
    result
        .iter()
        .map(|(key, value)| value.clone().map(|v| (key.clone(), v)))
        .collect()
}
