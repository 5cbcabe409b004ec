use std::borrow::Borrow;
use std::iter::FusedIterator;
use std::slice;

use smallvec::SmallVec;
use thiserror::Error;

use crate::order::{Ascending, Compare};

// Entries are stored inline up to this count before spilling to the heap.
// Most dictionaries in practice hold a handful of named members.
const INLINE_ENTRIES: usize = 8;

/// Errors surfaced by [`Dictionary`] operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DictionaryError {
    /// Positional access past the end of the container.
    #[error("index {index} is out of range for a dictionary of {len} entries")]
    OutOfRange { index: usize, len: usize },
    /// Insertion of a key that compares equal to one already stored.
    #[error("an entry with an equal key already exists")]
    DuplicateKey,
}

/// A stored key-value association.
///
/// The key is exposed both as the public `first` field (pair-style access)
/// and through [`name`](Entry::name); the value only through
/// [`value`](Entry::value), since replacing it behind the container's back
/// cannot break any invariant but mutating the key could.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<K, V> {
    pub first: K,
    value: V,
}

impl<K, V> Entry<K, V> {
    /// The key this entry is filed under.
    #[inline]
    pub fn name(&self) -> &K {
        &self.first
    }

    /// The associated value.
    #[inline]
    pub fn value(&self) -> &V {
        &self.value
    }
}

/// A key-value container kept sorted by a comparison policy.
///
/// Entries live in one contiguous sequence ordered by `C` applied to their
/// keys, so membership tests are binary searches and iteration yields keys
/// in policy order regardless of insertion order. The policy is fixed for
/// the lifetime of the container.
///
/// Keys are unique under the policy's equivalence; [`insert`] rejects a key
/// that compares equal to a stored one rather than overwriting it.
///
/// Not thread-safe: wrap it in a lock if it must be shared.
///
/// [`insert`]: Dictionary::insert
#[derive(Debug, Clone)]
pub struct Dictionary<K, V, C = Ascending> {
    entries: SmallVec<[Entry<K, V>; INLINE_ENTRIES]>,
    order: C,
}

impl<K, V, C: Default> Dictionary<K, V, C> {
    /// Creates an empty dictionary using the policy's default value.
    pub fn new() -> Self {
        Self::with_order(C::default())
    }
}

impl<K, V, C: Default> Default for Dictionary<K, V, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C> Dictionary<K, V, C> {
    /// Creates an empty dictionary ordered by `order`.
    pub fn with_order(order: C) -> Self {
        Self {
            entries: SmallVec::new(),
            order,
        }
    }

    /// Number of entries, which equals the number of distinct keys inserted.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry at `index` in sorted order.
    ///
    /// Indices are stable only until the next insertion, which may shift
    /// later entries. Out-of-range access is an error, never a panic.
    pub fn at(&self, index: usize) -> Result<&Entry<K, V>, DictionaryError> {
        self.entries.get(index).ok_or(DictionaryError::OutOfRange {
            index,
            len: self.entries.len(),
        })
    }

    /// An independent traversal of all entries in current sorted order.
    ///
    /// Each call starts a fresh pass from the first entry; iterating never
    /// mutates the container, so two passes over an unmodified dictionary
    /// see identical sequences.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// The keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(Entry::name)
    }

    /// The values in key-sorted order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(Entry::value)
    }

    /// Whether any entry holds a value equal to `value`.
    ///
    /// Values carry no ordering, so this is a linear scan.
    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.entries.iter().any(|entry| entry.value == *value)
    }

    /// Whether an entry is filed under a key equal to `key` under the policy.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Compare<Q>,
    {
        self.search(key).is_ok()
    }

    /// The value filed under `key`, if present.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Compare<Q>,
    {
        match self.search(key) {
            Ok(index) => Some(&self.entries[index].value),
            Err(_) => None,
        }
    }

    fn search<Q>(&self, key: &Q) -> Result<usize, usize>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Compare<Q>,
    {
        self.entries
            .binary_search_by(|entry| self.order.compare(entry.first.borrow(), key))
    }
}

impl<K, V, C: Compare<K>> Dictionary<K, V, C> {
    /// Inserts `value` under `key` at the position the policy dictates.
    ///
    /// The key may be given in any form convertible into `K` (`&str` for a
    /// `String`-keyed dictionary, say). A key comparing equal to a stored
    /// one is rejected with [`DictionaryError::DuplicateKey`] and leaves the
    /// container untouched.
    pub fn insert(&mut self, key: impl Into<K>, value: V) -> Result<(), DictionaryError> {
        let key = key.into();
        match self
            .entries
            .binary_search_by(|entry| self.order.compare(&entry.first, &key))
        {
            Ok(_) => Err(DictionaryError::DuplicateKey),
            Err(position) => {
                self.entries.insert(position, Entry { first: key, value });
                Ok(())
            }
        }
    }
}

/// Borrowing iterator over a dictionary's entries in sorted order.
#[derive(Clone)]
pub struct Iter<'a, K, V> {
    inner: slice::Iter<'a, Entry<K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = &'a Entry<K, V>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<'a, K, V, C> IntoIterator for &'a Dictionary<K, V, C> {
    type Item = &'a Entry<K, V>;
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_reports_index_and_len() {
        let mut dict: Dictionary<String, i32> = Dictionary::new();
        dict.insert("alpha", 1).unwrap();
        assert_eq!(
            dict.at(3),
            Err(DictionaryError::OutOfRange { index: 3, len: 1 })
        );
    }

    #[test]
    fn duplicate_insert_leaves_container_untouched() {
        let mut dict: Dictionary<String, i32> = Dictionary::new();
        dict.insert("alpha", 1).unwrap();
        assert_eq!(dict.insert("alpha", 2), Err(DictionaryError::DuplicateKey));
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.get("alpha"), Some(&1));
    }

    #[test]
    fn spills_past_inline_capacity() {
        let mut dict: Dictionary<String, usize> = Dictionary::new();
        for i in 0..3 * INLINE_ENTRIES {
            dict.insert(format!("key-{i:03}"), i).unwrap();
        }
        assert_eq!(dict.len(), 3 * INLINE_ENTRIES);
        for i in 0..3 * INLINE_ENTRIES {
            assert_eq!(dict.get(format!("key-{i:03}").as_str()), Some(&i));
        }
    }
}
