//! Actor snapshot DTOs - The host's document shape

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::domain::entities::{
    Actor, ActorKind, ArmorData, Item, ItemData, ItemType, Rot, SkillData, WeaponCategory,
    WeaponData,
};
use crate::domain::value_objects::{Attribute, AttributeSet, CreatureType, ModifierMap};

use super::coercion::{
    coerce_value_field, lenient_i32, lenient_modifier_map, lenient_or_default, lenient_string,
    lenient_value_field,
};

/// Actor as posted by the host: `{ _id, name, type, system, items }`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActorSnapshotDto {
    #[serde(rename = "_id", default, deserialize_with = "lenient_or_default")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub name: String,
    #[serde(rename = "type", default, deserialize_with = "lenient_or_default")]
    pub actor_type: String,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub system: ActorSystemDto,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub items: Vec<ItemSnapshotDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActorSystemDto {
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub attributes: HashMap<String, Value>,
    #[serde(rename = "creatureType", default, deserialize_with = "lenient_string")]
    pub creature_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub rot: RotDto,
    #[serde(default, deserialize_with = "lenient_value_field")]
    pub armorrating: i32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RotDto {
    #[serde(default, deserialize_with = "lenient_i32")]
    pub value: i32,
    #[serde(default, deserialize_with = "lenient_i32")]
    pub permanent: i32,
}

/// Embedded item: `{ _id, name, type, system }`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemSnapshotDto {
    #[serde(rename = "_id", default, deserialize_with = "lenient_or_default")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub name: String,
    #[serde(rename = "type", default, deserialize_with = "lenient_or_default")]
    pub item_type: String,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub system: ItemSystemDto,
}

/// Union of the item system fields this engine reads
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemSystemDto {
    #[serde(rename = "skillKey", default, deserialize_with = "lenient_string")]
    pub skill_key: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub attribute: Option<String>,
    #[serde(default, deserialize_with = "lenient_i32")]
    pub value: i32,
    #[serde(default, deserialize_with = "lenient_modifier_map")]
    pub modifiers: Option<HashMap<String, i32>>,
    #[serde(rename = "gearModifiers", default, deserialize_with = "lenient_modifier_map")]
    pub gear_modifiers: Option<HashMap<String, i32>>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient_value_field")]
    pub bonus: i32,
    #[serde(rename = "skillBonus", default, deserialize_with = "lenient_i32")]
    pub skill_bonus: i32,
    #[serde(rename = "artifactBonus", default, deserialize_with = "lenient_i32")]
    pub artifact_bonus: i32,
    #[serde(default, deserialize_with = "lenient_i32")]
    pub damage: i32,
    #[serde(default, deserialize_with = "lenient_value_field")]
    pub rating: i32,
}

impl ItemSnapshotDto {
    /// Domain item, or `None` for a type tag the game does not define
    pub fn into_domain(self) -> Option<Item> {
        let item_type: ItemType = match self.item_type.parse() {
            Ok(t) => t,
            Err(e) => {
                warn!(item_id = %self.id, "Skipping item: {}", e);
                return None;
            }
        };
        let system = self.system;

        let data = match item_type {
            ItemType::Skill => ItemData::Skill(SkillData::new(
                system.skill_key.unwrap_or_default(),
                system.attribute.as_deref().and_then(|a| a.parse::<Attribute>().ok()),
                system.value,
            )),
            ItemType::Weapon => ItemData::Weapon(WeaponData {
                category: match system.category.as_deref() {
                    Some("melee") => WeaponCategory::Melee,
                    _ => WeaponCategory::Ranged,
                },
                bonus: system.bonus,
                skill_bonus: system.skill_bonus,
                artifact_bonus: system.artifact_bonus,
                damage: system.damage,
            }),
            ItemType::Armor => ItemData::Armor(ArmorData {
                rating: system.rating,
            }),
            ItemType::Talent => ItemData::Talent,
            ItemType::Gear => ItemData::Gear,
            ItemType::Artifact => ItemData::Artifact,
            ItemType::Critical => ItemData::Critical,
            ItemType::Chassis => ItemData::Chassis,
            ItemType::Module => ItemData::Module,
            ItemType::Contact => ItemData::Contact,
            ItemType::Mutation => ItemData::Mutation,
            ItemType::Ability => ItemData::Ability,
            ItemType::AnimalPower => ItemData::AnimalPower,
            ItemType::SecondaryFunction => ItemData::SecondaryFunction,
            ItemType::Project => ItemData::Project,
        };

        let mut item = Item::new(self.id, self.name, data);
        if let Some(modifiers) = system.modifiers {
            item = item.with_modifiers(modifiers.into_iter().collect::<ModifierMap>());
        }
        if let Some(gear_modifiers) = system.gear_modifiers {
            item = item.with_gear_modifiers(gear_modifiers.into_iter().collect::<ModifierMap>());
        }
        Some(item)
    }
}

impl From<ActorSnapshotDto> for Actor {
    fn from(dto: ActorSnapshotDto) -> Self {
        let kind = match dto.actor_type.as_str() {
            "npc" => ActorKind::Npc,
            "vehicle" => ActorKind::Vehicle,
            _ => ActorKind::Character,
        };

        let creature_type = match dto.system.creature_type.as_deref() {
            Some(raw) => raw.parse::<CreatureType>().unwrap_or_else(|e| {
                warn!(actor_id = %dto.id, "{}, using default", e);
                CreatureType::default()
            }),
            None => CreatureType::default(),
        };

        let mut attributes = AttributeSet::default();
        for (key, value) in &dto.system.attributes {
            if let Ok(attribute) = key.parse::<Attribute>() {
                attributes.set(attribute, coerce_value_field(value));
            }
        }

        Actor {
            id: dto.id.into(),
            name: dto.name,
            kind,
            creature_type,
            attributes,
            rot: Rot {
                value: dto.system.rot.value,
                permanent: dto.system.rot.permanent,
            },
            armor_rating: dto.system.armorrating,
            items: dto
                .items
                .into_iter()
                .filter_map(ItemSnapshotDto::into_domain)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: Value) -> Actor {
        serde_json::from_value::<ActorSnapshotDto>(value).unwrap().into()
    }

    #[test]
    fn test_parses_host_actor() {
        let actor = parse(json!({
            "_id": "abc123",
            "name": "Vanja",
            "type": "npc",
            "system": {
                "creatureType": "robot",
                "attributes": {
                    "strength": { "value": 3 },
                    "agility": { "value": "2" },
                    "wits": { "value": null },
                    "empathy": { "max": 4 }
                },
                "rot": { "value": "1", "permanent": 2 },
                "armorrating": { "value": 4 }
            },
            "items": [
                {
                    "_id": "s1",
                    "name": "Fight",
                    "type": "skill",
                    "system": { "skillKey": "FIGHT", "attribute": "strength", "value": "2",
                                "modifiers": { "strength": 0 } }
                },
                {
                    "_id": "w1",
                    "name": "Pipe",
                    "type": "weapon",
                    "system": { "category": "melee", "bonus": { "value": 2 }, "skillBonus": 1,
                                "damage": 1, "gearModifiers": { "FIGHT": "1" } }
                }
            ]
        }));

        assert_eq!(actor.id.as_str(), "abc123");
        assert_eq!(actor.kind, ActorKind::Npc);
        assert_eq!(actor.creature_type, CreatureType::Robot);
        assert_eq!(actor.attributes, AttributeSet::new(3, 2, 0, 0));
        assert_eq!(actor.rot.total(), 3);
        assert_eq!(actor.armor_rating, 4);
        assert_eq!(actor.items.len(), 2);

        let skill = actor.items[0].as_skill().unwrap();
        assert_eq!(skill.skill_key, "FIGHT");
        assert_eq!(skill.attribute, Some(Attribute::Strength));
        assert_eq!(skill.value, 2);

        let weapon = actor.items[1].as_weapon().unwrap();
        assert_eq!(weapon.category, WeaponCategory::Melee);
        assert_eq!(weapon.bonus, 2);
        assert_eq!(weapon.skill_bonus, 1);
        assert_eq!(
            actor.items[1].gear_modifiers.as_ref().map(|m| m.get("FIGHT")),
            Some(1)
        );
    }

    #[test]
    fn test_missing_fields_degrade_to_defaults() {
        let actor = parse(json!({ "items": [
            { "_id": "x", "name": "Mystery", "type": "spell" },
            { "_id": "g", "name": "Rope", "type": "gear", "system": { "modifiers": "broken" } }
        ]}));

        assert_eq!(actor.kind, ActorKind::Character);
        assert_eq!(actor.creature_type, CreatureType::Mutant);
        assert_eq!(actor.attributes, AttributeSet::default());
        assert_eq!(actor.items.len(), 1);
        assert!(actor.items[0].modifiers.is_none());
    }

    #[test]
    fn test_unknown_skill_attribute_is_none() {
        let actor = parse(json!({ "items": [
            { "_id": "s", "name": "Odd", "type": "skill", "system": { "attribute": "luck" } }
        ]}));
        let skill = actor.items[0].as_skill().unwrap();
        assert_eq!(skill.attribute, None);
        assert_eq!(skill.skill_key, "");
    }

    #[test]
    fn test_null_fields_degrade_to_defaults() {
        let actor = parse(json!({
            "_id": null,
            "name": null,
            "type": null,
            "system": { "attributes": null, "rot": null },
            "items": [
                { "_id": "g", "name": null, "type": "gear", "system": null },
                { "_id": null, "name": "Rope", "type": "gear" }
            ]
        }));

        assert_eq!(actor.id.as_str(), "");
        assert_eq!(actor.name, "");
        assert_eq!(actor.kind, ActorKind::Character);
        assert_eq!(actor.rot.total(), 0);
        assert_eq!(actor.items.len(), 2);
        assert_eq!(actor.items[0].name, "");
        assert!(actor.items[0].modifiers.is_none());

        let empty = parse(json!({ "system": null, "items": null }));
        assert!(empty.items.is_empty());
        assert_eq!(empty.attributes, AttributeSet::default());
    }
}
