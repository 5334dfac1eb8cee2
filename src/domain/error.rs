//! Error types for the domain layer
//!
//! The roll math itself never fails: missing data degrades to zero. These
//! errors cover request-level lookups that cannot be satisfied at all.

use thiserror::Error;

/// Error raised when a sheet or roll request refers to something that does not exist
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SheetError {
    /// The requested item is not owned by the actor
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    /// The item exists but is the wrong type for the requested roll
    #[error("Item {id} is a {actual}, expected {expected}")]
    WrongItemType {
        id: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// Attribute name outside strength/agility/wits/empathy
    #[error("Unknown attribute: {0}")]
    UnknownAttribute(String),

    /// Item type tag the game does not define
    #[error("Unknown item type: {0}")]
    UnknownItemType(String),

    /// Creature type outside human/mutant/animal/robot
    #[error("Unknown creature type: {0}")]
    UnknownCreatureType(String),
}

impl SheetError {
    pub fn item_not_found(id: impl Into<String>) -> Self {
        Self::ItemNotFound(id.into())
    }

    pub fn wrong_item_type(id: impl Into<String>, expected: &'static str, actual: &'static str) -> Self {
        Self::WrongItemType {
            id: id.into(),
            expected,
            actual,
        }
    }

    /// True when the error means the referenced document is missing
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ItemNotFound(_))
    }
}
