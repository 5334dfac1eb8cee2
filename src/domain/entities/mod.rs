//! Domain entities - Core business objects with identity

mod actor;
mod item;

pub use actor::{Actor, ActorKind, Rot};
pub use item::{ArmorData, Item, ItemData, ItemType, SkillData, WeaponCategory, WeaponData};
