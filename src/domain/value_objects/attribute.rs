//! Core character attributes

use std::fmt;
use std::str::FromStr;

use crate::domain::error::SheetError;

/// One of the four core attributes every mutant, animal, robot and human has
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Strength,
    Agility,
    Wits,
    Empathy,
}

impl Attribute {
    pub const ALL: [Attribute; 4] = [
        Attribute::Strength,
        Attribute::Agility,
        Attribute::Wits,
        Attribute::Empathy,
    ];

    /// Key used in actor data and in item modifier maps
    pub fn key(&self) -> &'static str {
        match self {
            Attribute::Strength => "strength",
            Attribute::Agility => "agility",
            Attribute::Wits => "wits",
            Attribute::Empathy => "empathy",
        }
    }

    /// Sheet display order
    pub fn rank(&self) -> u8 {
        match self {
            Attribute::Strength => 0,
            Attribute::Agility => 1,
            Attribute::Wits => 2,
            Attribute::Empathy => 3,
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Attribute {
    type Err = SheetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strength" => Ok(Attribute::Strength),
            "agility" => Ok(Attribute::Agility),
            "wits" => Ok(Attribute::Wits),
            "empathy" => Ok(Attribute::Empathy),
            _ => Err(SheetError::UnknownAttribute(s.to_string())),
        }
    }
}

/// Attribute values of an actor. Absent values read as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttributeSet {
    pub strength: i32,
    pub agility: i32,
    pub wits: i32,
    pub empathy: i32,
}

impl AttributeSet {
    pub fn new(strength: i32, agility: i32, wits: i32, empathy: i32) -> Self {
        Self {
            strength,
            agility,
            wits,
            empathy,
        }
    }

    pub fn get(&self, attribute: Attribute) -> i32 {
        match attribute {
            Attribute::Strength => self.strength,
            Attribute::Agility => self.agility,
            Attribute::Wits => self.wits,
            Attribute::Empathy => self.empathy,
        }
    }

    pub fn set(&mut self, attribute: Attribute, value: i32) {
        match attribute {
            Attribute::Strength => self.strength = value,
            Attribute::Agility => self.agility = value,
            Attribute::Wits => self.wits = value,
            Attribute::Empathy => self.empathy = value,
        }
    }

    pub fn with(mut self, attribute: Attribute, value: i32) -> Self {
        self.set(attribute, value);
        self
    }
}
