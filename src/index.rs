//! Key Index
//!
//! Ordered, de-duplicated record of the keys currently stored.
//!
//! ## Responsibilities
//! - Preserve the order in which keys were first written
//! - Answer `len()` and `key(i)` without touching the filesystem
//! - Compact positions when a key is removed
//!
//! The index is plain data; the store wraps it in a lock and only mutates
//! it after the matching filesystem operation has succeeded.

/// Insertion-ordered set of keys
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyIndex {
    keys: Vec<String>,
}

impl KeyIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of indexed keys
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Key at `index`, or `None` when out of bounds
    pub fn get(&self, index: usize) -> Option<&str> {
        self.keys.get(index).map(String::as_str)
    }

    /// Position of `key`, if indexed
    pub fn position(&self, key: &str) -> Option<usize> {
        self.keys.iter().position(|k| k == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Append `key` unless already present.
    ///
    /// Returns `true` when the key was new.
    pub fn insert(&mut self, key: &str) -> bool {
        if self.contains(key) {
            return false;
        }
        self.keys.push(key.to_string());
        true
    }

    /// Remove `key`, shifting later keys down by one.
    ///
    /// Returns the position it was removed from.
    pub fn remove(&mut self, key: &str) -> Option<usize> {
        let at = self.position(key)?;
        self.keys.remove(at);
        Some(at)
    }

    /// Snapshot of all keys in index order
    pub fn to_vec(&self) -> Vec<String> {
        self.keys.clone()
    }
}

impl<S: AsRef<str>> FromIterator<S> for KeyIndex {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut index = KeyIndex::new();
        for key in iter {
            index.insert(key.as_ref());
        }
        index
    }
}
