//! Creature classification for actors

use std::fmt;
use std::str::FromStr;

use crate::domain::error::SheetError;

/// What kind of being an actor is. Controls roll names and which inventory
/// categories an NPC sheet shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CreatureType {
    Human,
    #[default]
    Mutant,
    Animal,
    Robot,
}

impl CreatureType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CreatureType::Human => "human",
            CreatureType::Mutant => "mutant",
            CreatureType::Animal => "animal",
            CreatureType::Robot => "robot",
        }
    }

    pub fn is_robot(&self) -> bool {
        matches!(self, CreatureType::Robot)
    }
}

impl fmt::Display for CreatureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CreatureType {
    type Err = SheetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(CreatureType::Human),
            "mutant" => Ok(CreatureType::Mutant),
            "animal" => Ok(CreatureType::Animal),
            "robot" => Ok(CreatureType::Robot),
            other => Err(SheetError::UnknownCreatureType(other.to_string())),
        }
    }
}
