//! Value objects - Immutable objects defined by their attributes

mod attribute;
mod creature_type;
mod game_context;
mod ids;
mod localization;
mod modifiers;

pub use attribute::{Attribute, AttributeSet};
pub use creature_type::CreatureType;
pub use game_context::GameContext;
pub use ids::*;
pub use localization::Localization;
pub use modifiers::ModifierMap;
