//! Localized strings

use std::collections::HashMap;

/// Translation table keyed by `MYZ.*` keys.
///
/// Lookups of unknown keys return the key itself, matching how the host
/// renders missing translations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Localization {
    strings: HashMap<String, String>,
}

impl Localization {
    pub fn new(strings: HashMap<String, String>) -> Self {
        Self { strings }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.strings.insert(key.into(), value.into());
        self
    }

    pub fn localize(&self, key: &str) -> String {
        self.strings
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.strings.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}
