//! Item entity - Anything an actor owns: skills, talents, gear, weapons, mutations...

use std::fmt;
use std::str::FromStr;

use crate::domain::error::SheetError;
use crate::domain::value_objects::{Attribute, ItemId, ModifierMap};

/// An item owned by an actor
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    /// Deltas to attribute and skill dice
    pub modifiers: Option<ModifierMap>,
    /// Deltas to gear dice, keyed by skill key
    pub gear_modifiers: Option<ModifierMap>,
    pub data: ItemData,
}

impl Item {
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>, data: ItemData) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            modifiers: None,
            gear_modifiers: None,
            data,
        }
    }

    pub fn with_modifiers(mut self, modifiers: ModifierMap) -> Self {
        self.modifiers = Some(modifiers);
        self
    }

    pub fn with_gear_modifiers(mut self, gear_modifiers: ModifierMap) -> Self {
        self.gear_modifiers = Some(gear_modifiers);
        self
    }

    pub fn item_type(&self) -> ItemType {
        self.data.item_type()
    }

    pub fn as_skill(&self) -> Option<&SkillData> {
        match &self.data {
            ItemData::Skill(skill) => Some(skill),
            _ => None,
        }
    }

    pub fn as_weapon(&self) -> Option<&WeaponData> {
        match &self.data {
            ItemData::Weapon(weapon) => Some(weapon),
            _ => None,
        }
    }

    pub fn as_armor(&self) -> Option<&ArmorData> {
        match &self.data {
            ItemData::Armor(armor) => Some(armor),
            _ => None,
        }
    }
}

/// Type-specific item payload
#[derive(Debug, Clone, PartialEq)]
pub enum ItemData {
    Skill(SkillData),
    Talent,
    Weapon(WeaponData),
    Armor(ArmorData),
    Gear,
    Artifact,
    Critical,
    Chassis,
    Module,
    Contact,
    Mutation,
    Ability,
    AnimalPower,
    SecondaryFunction,
    Project,
}

impl ItemData {
    pub fn item_type(&self) -> ItemType {
        match self {
            ItemData::Skill(_) => ItemType::Skill,
            ItemData::Talent => ItemType::Talent,
            ItemData::Weapon(_) => ItemType::Weapon,
            ItemData::Armor(_) => ItemType::Armor,
            ItemData::Gear => ItemType::Gear,
            ItemData::Artifact => ItemType::Artifact,
            ItemData::Critical => ItemType::Critical,
            ItemData::Chassis => ItemType::Chassis,
            ItemData::Module => ItemType::Module,
            ItemData::Contact => ItemType::Contact,
            ItemData::Mutation => ItemType::Mutation,
            ItemData::Ability => ItemType::Ability,
            ItemData::AnimalPower => ItemType::AnimalPower,
            ItemData::SecondaryFunction => ItemType::SecondaryFunction,
            ItemData::Project => ItemType::Project,
        }
    }
}

/// Item type tag, as the host names it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemType {
    Skill,
    Talent,
    Weapon,
    Armor,
    Gear,
    Artifact,
    Critical,
    Chassis,
    Module,
    Contact,
    Mutation,
    Ability,
    AnimalPower,
    SecondaryFunction,
    Project,
}

impl ItemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Skill => "skill",
            ItemType::Talent => "talent",
            ItemType::Weapon => "weapon",
            ItemType::Armor => "armor",
            ItemType::Gear => "gear",
            ItemType::Artifact => "artifact",
            ItemType::Critical => "critical",
            ItemType::Chassis => "chassis",
            ItemType::Module => "module",
            ItemType::Contact => "contact",
            ItemType::Mutation => "mutation",
            ItemType::Ability => "ability",
            ItemType::AnimalPower => "animal_power",
            ItemType::SecondaryFunction => "secondary_function",
            ItemType::Project => "project",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemType {
    type Err = SheetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "skill" => Ok(ItemType::Skill),
            "talent" => Ok(ItemType::Talent),
            "weapon" => Ok(ItemType::Weapon),
            "armor" => Ok(ItemType::Armor),
            "gear" => Ok(ItemType::Gear),
            "artifact" => Ok(ItemType::Artifact),
            "critical" => Ok(ItemType::Critical),
            "chassis" => Ok(ItemType::Chassis),
            "module" => Ok(ItemType::Module),
            "contact" => Ok(ItemType::Contact),
            "mutation" => Ok(ItemType::Mutation),
            "ability" => Ok(ItemType::Ability),
            "animal_power" => Ok(ItemType::AnimalPower),
            "secondary_function" => Ok(ItemType::SecondaryFunction),
            "project" => Ok(ItemType::Project),
            other => Err(SheetError::UnknownItemType(other.to_string())),
        }
    }
}

/// Skill payload
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SkillData {
    /// Identifier of a core skill (`FIGHT`, `SHOOT`...). Empty for custom skills.
    pub skill_key: String,
    /// Governing attribute; `None` when the stored value is not recognised
    pub attribute: Option<Attribute>,
    pub value: i32,
}

impl SkillData {
    pub fn new(skill_key: impl Into<String>, attribute: Option<Attribute>, value: i32) -> Self {
        Self {
            skill_key: skill_key.into(),
            attribute,
            value,
        }
    }

    /// Rank-zero skill used when the actor lacks the skill a roll needs
    pub fn untrained(skill_key: impl Into<String>, attribute: Attribute) -> Self {
        Self::new(skill_key, Some(attribute), 0)
    }

    pub fn has_key(&self) -> bool {
        !self.skill_key.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeaponCategory {
    #[default]
    Melee,
    Ranged,
}

/// Weapon payload
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WeaponData {
    pub category: WeaponCategory,
    /// Gear dice the weapon adds
    pub bonus: i32,
    /// Flat modifier to the roll
    pub skill_bonus: i32,
    pub artifact_bonus: i32,
    pub damage: i32,
}

/// Armor payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ArmorData {
    pub rating: i32,
}
