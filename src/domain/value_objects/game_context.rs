//! Game context passed explicitly to sheet and roll operations

use super::{Attribute, Localization};

/// Read-only game configuration: the attribute list and the translation
/// table. Built once at startup and shared behind an `Arc`.
#[derive(Debug, Clone)]
pub struct GameContext {
    pub attributes: Vec<Attribute>,
    pub localization: Localization,
}

impl GameContext {
    pub fn new(localization: Localization) -> Self {
        Self {
            attributes: Attribute::ALL.to_vec(),
            localization,
        }
    }

    pub fn localize(&self, key: &str) -> String {
        self.localization.localize(key)
    }
}

impl Default for GameContext {
    fn default() -> Self {
        Self::new(Localization::default())
    }
}
