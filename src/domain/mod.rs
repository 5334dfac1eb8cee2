//! Domain layer - Core sheet and roll logic with no knowledge of the host
//!
//! This layer contains:
//! - Entities: Actor, Item
//! - Value Objects: Attribute, CreatureType, ModifierMap, GameContext
//! - Domain Services: Modifier aggregation, dice pools, reports, roll defaults

pub mod entities;
pub mod error;
pub mod services;
pub mod value_objects;
