//! Insertion-ordered associative array
//!
//! Boards hold tens to low hundreds of entries, so a flat vector with a
//! linear scan is all the lookup structure needed. Keys are unique and
//! iteration follows first-insertion order.

use crate::{AacError, Result};
use std::borrow::Borrow;

/// A single key/value entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KvPair<K, V> {
    pub key: K,
    pub val: V,
}

/// Ordered mapping from non-empty string-like keys to values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssociativeArray<K, V> {
    pairs: Vec<KvPair<K, V>>,
}

impl<K, V> AssociativeArray<K, V>
where
    K: AsRef<str> + Eq,
{
    /// Create an empty array
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Insert or overwrite the value for `key`
    ///
    /// Overwriting keeps the entry in its original position.
    pub fn set(&mut self, key: K, val: V) -> Result<()> {
        if key.as_ref().is_empty() {
            return Err(AacError::InvalidKey);
        }

        match self.find(key.as_ref()) {
            Some(idx) => self.pairs[idx].val = val,
            None => self.pairs.push(KvPair { key, val }),
        }
        Ok(())
    }

    /// Look up the value stored under `key`
    pub fn get<Q>(&self, key: &Q) -> Result<&V>
    where
        K: Borrow<Q>,
        Q: AsRef<str> + Eq + ?Sized,
    {
        self.pairs
            .iter()
            .find(|pair| Borrow::<Q>::borrow(&pair.key) == key)
            .map(|pair| &pair.val)
            .ok_or_else(|| AacError::KeyNotFound(key.as_ref().to_string()))
    }

    /// Mutable lookup of the value stored under `key`
    pub fn get_mut<Q>(&mut self, key: &Q) -> Result<&mut V>
    where
        K: Borrow<Q>,
        Q: AsRef<str> + Eq + ?Sized,
    {
        match self.pairs.iter_mut().find(|pair| Borrow::<Q>::borrow(&pair.key) == key) {
            Some(pair) => Ok(&mut pair.val),
            None => Err(AacError::KeyNotFound(key.as_ref().to_string())),
        }
    }

    /// Check whether `key` is present
    pub fn has_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.pairs.iter().any(|pair| Borrow::<Q>::borrow(&pair.key) == key)
    }

    /// Iterate over all entries in insertion order
    pub fn entries(&self) -> impl Iterator<Item = (&K, &V)> {
        self.pairs.iter().map(|pair| (&pair.key, &pair.val))
    }

    /// Iterate over keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.pairs.iter().map(|pair| &pair.key)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Check if the array has no entries
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    fn find(&self, key: &str) -> Option<usize> {
        self.pairs.iter().position(|pair| pair.key.as_ref() == key)
    }
}

impl<K, V> Default for AssociativeArray<K, V>
where
    K: AsRef<str> + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}
