//! Item modifier maps

use std::collections::HashMap;

/// Integer deltas an item applies, keyed by attribute key (`strength`) or
/// skill key (`FIGHT`). Keys without an entry contribute nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModifierMap(HashMap<String, i32>);

impl ModifierMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: i32) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: i32) {
        self.0.insert(key.into(), value);
    }

    /// Delta for `key`, zero when absent
    pub fn get(&self, key: &str) -> i32 {
        self.0.get(key).copied().unwrap_or(0)
    }
}

impl<K: Into<String>> FromIterator<(K, i32)> for ModifierMap {
    fn from_iter<T: IntoIterator<Item = (K, i32)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
