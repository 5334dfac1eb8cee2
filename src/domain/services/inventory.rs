//! Sheet item lists
//!
//! Buckets an actor's items by type for display, orders skills, and packs the
//! NPC inventory according to creature type.

use std::cmp::Ordering;

use crate::domain::entities::{Actor, Item, ItemData};
use crate::domain::value_objects::CreatureType;

/// Items of an actor grouped the way the sheet lays them out
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetItems {
    pub skills: Vec<Item>,
    pub talents: Vec<Item>,
    pub secondary_functions: Vec<Item>,
    pub abilities: Vec<Item>,
    pub mutations: Vec<Item>,
    pub animal_powers: Vec<Item>,
    pub contacts: Vec<Item>,
    pub modules: Vec<Item>,
    pub weapons: Vec<Item>,
    pub armor: Vec<Item>,
    pub chassis: Vec<Item>,
    pub gear: Vec<Item>,
    pub artifacts: Vec<Item>,
    pub criticals: Vec<Item>,
    /// Only filled for NPCs
    pub npc_inventory: Option<Vec<Item>>,
}

pub fn categorize(actor: &Actor) -> SheetItems {
    let mut sheet = SheetItems::default();

    for item in &actor.items {
        let bucket = match &item.data {
            ItemData::Skill(_) => &mut sheet.skills,
            ItemData::Talent => &mut sheet.talents,
            ItemData::SecondaryFunction => &mut sheet.secondary_functions,
            ItemData::Ability => &mut sheet.abilities,
            ItemData::Mutation => &mut sheet.mutations,
            ItemData::AnimalPower => &mut sheet.animal_powers,
            ItemData::Contact => &mut sheet.contacts,
            ItemData::Module => &mut sheet.modules,
            ItemData::Weapon(_) => &mut sheet.weapons,
            ItemData::Armor(_) => &mut sheet.armor,
            ItemData::Chassis => &mut sheet.chassis,
            ItemData::Gear => &mut sheet.gear,
            ItemData::Artifact => &mut sheet.artifacts,
            ItemData::Critical => &mut sheet.criticals,
            // Projects live on the ark sheet, not on actor sheets
            ItemData::Project => continue,
        };
        bucket.push(item.clone());
    }

    sort_skills(&mut sheet.skills);

    if actor.is_npc() {
        sheet.npc_inventory = Some(pack_inventory(
            actor.creature_type,
            &sheet.gear,
            &sheet.artifacts,
            &sheet.chassis,
            &sheet.armor,
        ));
    }

    sheet
}

/// Order skills by governing attribute, then by skill key.
/// Skills with an unrecognised attribute go last.
pub fn sort_skills(skills: &mut [Item]) {
    skills.sort_by(|a, b| skill_order(a, b));
}

fn skill_order(a: &Item, b: &Item) -> Ordering {
    let key = |item: &Item| {
        item.as_skill()
            .map(|s| (s.attribute.map_or(u8::MAX, |attr| attr.rank()), s.skill_key.clone()))
            .unwrap_or((u8::MAX, String::new()))
    };
    key(a).cmp(&key(b))
}

/// Item category shown after gear and artifacts in an NPC inventory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtraInventory {
    Chassis,
    Armor,
}

/// Extra item category an NPC of this creature type carries
pub fn extra_inventory_category(creature_type: CreatureType) -> ExtraInventory {
    match creature_type {
        CreatureType::Mutant | CreatureType::Animal | CreatureType::Human => ExtraInventory::Chassis,
        CreatureType::Robot => ExtraInventory::Armor,
    }
}

/// Gear and artifacts, followed by chassis or armor depending on creature type
pub fn pack_inventory(
    creature_type: CreatureType,
    gear: &[Item],
    artifacts: &[Item],
    chassis: &[Item],
    armor: &[Item],
) -> Vec<Item> {
    let extra = match extra_inventory_category(creature_type) {
        ExtraInventory::Chassis => chassis,
        ExtraInventory::Armor => armor,
    };
    gear.iter()
        .chain(artifacts)
        .chain(extra)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{ActorKind, ArmorData, SkillData};
    use crate::domain::value_objects::Attribute;

    fn skill(id: &str, key: &str, attribute: Option<Attribute>) -> Item {
        Item::new(id, key, ItemData::Skill(SkillData::new(key, attribute, 1)))
    }

    fn ids(items: &[Item]) -> Vec<&str> {
        items.iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn test_robot_packs_armor_not_chassis() {
        let gear = vec![Item::new("G", "Rope", ItemData::Gear)];
        let chassis = vec![Item::new("C", "Frame", ItemData::Chassis)];
        let armor = vec![Item::new("A", "Plating", ItemData::Armor(ArmorData { rating: 3 }))];

        let packed = pack_inventory(CreatureType::Robot, &gear, &[], &chassis, &armor);
        assert_eq!(ids(&packed), vec!["G", "A"]);
    }

    #[test]
    fn test_extra_inventory_category() {
        assert_eq!(extra_inventory_category(CreatureType::Robot), ExtraInventory::Armor);
        for creature in [CreatureType::Mutant, CreatureType::Animal, CreatureType::Human] {
            assert_eq!(extra_inventory_category(creature), ExtraInventory::Chassis);
        }
    }

    #[test]
    fn test_organic_creatures_pack_chassis() {
        let gear = vec![Item::new("G", "Rope", ItemData::Gear)];
        let artifacts = vec![Item::new("R", "Radio", ItemData::Artifact)];
        let chassis = vec![Item::new("C", "Frame", ItemData::Chassis)];
        let armor = vec![Item::new("A", "Plating", ItemData::Armor(ArmorData { rating: 3 }))];

        for creature in [CreatureType::Mutant, CreatureType::Animal, CreatureType::Human] {
            let packed = pack_inventory(creature, &gear, &artifacts, &chassis, &armor);
            assert_eq!(ids(&packed), vec!["G", "R", "C"]);
        }
    }

    #[test]
    fn test_skills_sorted_by_attribute_then_key() {
        let mut skills = vec![
            skill("1", "SNEAK", Some(Attribute::Agility)),
            skill("2", "ODD", None),
            skill("3", "FORCE", Some(Attribute::Strength)),
            skill("4", "MOVE", Some(Attribute::Agility)),
            skill("5", "ENDURE", Some(Attribute::Strength)),
            skill("6", "MANIPULATE", Some(Attribute::Empathy)),
            skill("7", "SCOUT", Some(Attribute::Wits)),
        ];
        sort_skills(&mut skills);
        assert_eq!(ids(&skills), vec!["5", "3", "4", "1", "7", "6", "2"]);
    }

    #[test]
    fn test_categorize_buckets_every_type() {
        let actor = Actor::new("n1", "Scrap Oracle", ActorKind::Npc)
            .with_creature_type(CreatureType::Robot)
            .with_item(Item::new("t", "Talent", ItemData::Talent))
            .with_item(Item::new("g", "Gear", ItemData::Gear))
            .with_item(Item::new("c", "Chassis", ItemData::Chassis))
            .with_item(Item::new("a", "Armor", ItemData::Armor(ArmorData { rating: 2 })))
            .with_item(Item::new("p", "Project", ItemData::Project))
            .with_item(Item::new("m", "Module", ItemData::Module))
            .with_item(Item::new("x", "Critical", ItemData::Critical));

        let sheet = categorize(&actor);
        assert_eq!(ids(&sheet.talents), vec!["t"]);
        assert_eq!(ids(&sheet.gear), vec!["g"]);
        assert_eq!(ids(&sheet.modules), vec!["m"]);
        assert_eq!(ids(&sheet.criticals), vec!["x"]);
        let inventory = sheet.npc_inventory.unwrap();
        assert_eq!(ids(&inventory), vec!["g", "a"]);
    }

    #[test]
    fn test_characters_get_no_npc_inventory() {
        let actor = Actor::new("c1", "Vanja", ActorKind::Character)
            .with_item(Item::new("g", "Gear", ItemData::Gear));
        assert!(categorize(&actor).npc_inventory.is_none());
    }
}
