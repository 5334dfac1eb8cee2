//! Roll preparation - Default values for the roll dialog
//!
//! Every roll the sheet can start ends up here. The result is plain data: the
//! dialog decides what to roll, this module only fills in its defaults.

use crate::domain::entities::{Actor, ArmorData, Item, SkillData, WeaponCategory, WeaponData};
use crate::domain::value_objects::{Attribute, GameContext, ItemId};

use super::dice_pool::{compose, compose_attribute, compose_with_gear_bonus, DiceTotals};
use super::modifier_report::{format_report, ModifierReport, ReportLabels};

pub const SKILL_FIGHT: &str = "FIGHT";
pub const SKILL_ASSAULT: &str = "ASSAULT";
pub const SKILL_SHOOT: &str = "SHOOT";

/// Values the roll dialog opens with
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RollDialogDefaults {
    pub roll_name: String,
    pub attribute_name: Option<Attribute>,
    /// Item that started the roll (weapon rolls)
    pub item_id: Option<ItemId>,
    pub base_default: i32,
    pub skill_default: i32,
    pub gear_default: i32,
    pub modifier_default: i32,
    pub artifact_default: i32,
    pub damage: Option<i32>,
    pub applied_modifiers: Option<ModifierReport>,
    /// Skill item the roll is made with, when the actor owns one
    pub skill_item_id: Option<ItemId>,
}

impl RollDialogDefaults {
    pub fn named(roll_name: impl Into<String>) -> Self {
        Self {
            roll_name: roll_name.into(),
            ..Default::default()
        }
    }

    fn with_totals(mut self, totals: &DiceTotals, context: &GameContext) -> Self {
        self.base_default = totals.base;
        self.skill_default = totals.skill;
        self.gear_default = totals.gear;
        self.applied_modifiers = Some(format_report(totals, &ReportLabels::from_context(context)));
        self
    }
}

/// Localization key of an attribute roll, e.g. `MYZ.ATTRIBUTE_STRENGTH_ROBOT`
pub fn attribute_roll_key(actor: &Actor, attribute: Attribute) -> String {
    format!(
        "MYZ.ATTRIBUTE_{}_{}",
        attribute.key().to_uppercase(),
        actor.creature_type.as_str().to_uppercase()
    )
}

/// Display name of a skill: translated for core skills, the item name for custom ones
pub fn skill_name(context: &GameContext, item: &Item, skill: &SkillData) -> String {
    if skill.has_key() {
        context.localize(&format!("MYZ.SKILL_{}", skill.skill_key))
    } else {
        item.name.clone()
    }
}

pub fn attribute_roll(context: &GameContext, actor: &Actor, attribute: Attribute) -> RollDialogDefaults {
    let totals = compose_attribute(actor, attribute);
    let mut defaults = RollDialogDefaults::named(context.localize(&attribute_roll_key(actor, attribute)))
        .with_totals(&totals, context);
    defaults.attribute_name = Some(attribute);
    defaults
}

pub fn skill_roll(
    context: &GameContext,
    actor: &Actor,
    item: &Item,
    skill: &SkillData,
) -> RollDialogDefaults {
    let totals = compose(actor, skill);
    let mut defaults =
        RollDialogDefaults::named(skill_name(context, item, skill)).with_totals(&totals, context);
    defaults.attribute_name = skill.attribute;
    defaults.skill_item_id = Some(item.id.clone());
    defaults
}

/// Skill a weapon is rolled with.
///
/// Melee weapons use FIGHT (ASSAULT for robots), ranged weapons use SHOOT.
/// When the actor lacks the skill, an untrained stand-in is returned with no
/// item id.
pub fn weapon_skill(actor: &Actor, weapon: &WeaponData) -> (Option<ItemId>, SkillData) {
    let (key, attribute) = match weapon.category {
        WeaponCategory::Melee if actor.creature_type.is_robot() => (SKILL_ASSAULT, Attribute::Strength),
        WeaponCategory::Melee => (SKILL_FIGHT, Attribute::Strength),
        WeaponCategory::Ranged => (SKILL_SHOOT, Attribute::Agility),
    };
    match actor.find_skill(key) {
        Some((item, skill)) => (Some(item.id.clone()), skill.clone()),
        None => (None, SkillData::untrained(key, attribute)),
    }
}

pub fn weapon_roll(
    context: &GameContext,
    actor: &Actor,
    item: &Item,
    weapon: &WeaponData,
) -> RollDialogDefaults {
    let (skill_item_id, skill) = weapon_skill(actor, weapon);
    let totals = compose_with_gear_bonus(actor, &skill, weapon.bonus);

    let mut defaults = RollDialogDefaults::named(item.name.clone()).with_totals(&totals, context);
    defaults.attribute_name = skill.attribute;
    defaults.item_id = Some(item.id.clone());
    defaults.modifier_default = weapon.skill_bonus;
    defaults.artifact_default = weapon.artifact_bonus;
    defaults.damage = Some(weapon.damage);
    defaults.skill_item_id = skill_item_id;
    defaults
}

pub fn armor_roll(context: &GameContext, actor: &Actor) -> RollDialogDefaults {
    RollDialogDefaults {
        gear_default: actor.armor_rating,
        ..RollDialogDefaults::named(context.localize("MYZ.ARMOR"))
    }
}

pub fn armor_item_roll(item: &Item, armor: &ArmorData) -> RollDialogDefaults {
    RollDialogDefaults {
        gear_default: armor.rating,
        ..RollDialogDefaults::named(item.name.clone())
    }
}

pub fn rot_roll(context: &GameContext, actor: &Actor) -> RollDialogDefaults {
    RollDialogDefaults {
        base_default: actor.rot.total(),
        ..RollDialogDefaults::named(context.localize("MYZ.ROT"))
    }
}

pub fn custom_roll(context: &GameContext) -> RollDialogDefaults {
    RollDialogDefaults::named(context.localize("MYZ.CUSTOM_ROLL"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{ActorKind, ItemData};
    use crate::domain::value_objects::{CreatureType, Localization, ModifierMap};

    fn context() -> GameContext {
        GameContext::new(
            Localization::default()
                .with("MYZ.SKILL_SHOOT", "Shoot")
                .with("MYZ.ATTRIBUTE_WITS_ROBOT", "CPU")
                .with("MYZ.ROT", "Rot"),
        )
    }

    fn weapon(id: &str, category: WeaponCategory, bonus: i32) -> Item {
        Item::new(
            id,
            "Slingshot",
            ItemData::Weapon(WeaponData {
                category,
                bonus,
                skill_bonus: 1,
                artifact_bonus: 0,
                damage: 2,
            }),
        )
    }

    #[test]
    fn test_weapon_roll_with_untrained_skill() {
        let actor = Actor::new("a", "Vanja", ActorKind::Character)
            .with_attribute(Attribute::Agility, 2);
        let item = weapon("w", WeaponCategory::Ranged, 3);
        let data = item.as_weapon().unwrap().clone();

        let defaults = weapon_roll(&context(), &actor, &item, &data);
        assert_eq!(defaults.roll_name, "Slingshot");
        assert_eq!(defaults.attribute_name, Some(Attribute::Agility));
        assert_eq!(defaults.base_default, 2);
        assert_eq!(defaults.skill_default, 0);
        assert_eq!(defaults.gear_default, 3);
        assert_eq!(defaults.modifier_default, 1);
        assert_eq!(defaults.damage, Some(2));
        assert_eq!(defaults.item_id, Some(ItemId::new("w")));
        assert!(defaults.skill_item_id.is_none());
    }

    #[test]
    fn test_weapon_roll_uses_owned_skill() {
        let actor = Actor::new("a", "Vanja", ActorKind::Character).with_item(Item::new(
            "s",
            "Fight",
            ItemData::Skill(SkillData::new(SKILL_FIGHT, Some(Attribute::Strength), 1)),
        ));
        let item = weapon("w", WeaponCategory::Melee, 3);
        let data = item.as_weapon().unwrap().clone();

        let defaults = weapon_roll(&context(), &actor, &item, &data);
        assert_eq!(defaults.skill_default, 1);
        assert_eq!(defaults.gear_default, 3);
        assert_eq!(defaults.skill_item_id, Some(ItemId::new("s")));
    }

    #[test]
    fn test_robots_melee_with_assault() {
        let robot = Actor::new("r", "Unit 7", ActorKind::Npc).with_creature_type(CreatureType::Robot);
        let data = WeaponData::default();
        let (_, skill) = weapon_skill(&robot, &data);
        assert_eq!(skill.skill_key, SKILL_ASSAULT);
        assert_eq!(skill.attribute, Some(Attribute::Strength));
    }

    #[test]
    fn test_attribute_roll_name_and_pools() {
        let actor = Actor::new("r", "Unit 7", ActorKind::Npc)
            .with_creature_type(CreatureType::Robot)
            .with_attribute(Attribute::Wits, 1)
            .with_item(
                Item::new("c", "Fried circuit", ItemData::Critical)
                    .with_modifiers(ModifierMap::new().with("wits", -3)),
            );

        let defaults = attribute_roll(&context(), &actor, Attribute::Wits);
        assert_eq!(defaults.roll_name, "CPU");
        assert_eq!(defaults.base_default, 0);
        assert_eq!(defaults.skill_default, 0);
        assert_eq!(defaults.gear_default, 0);
        let report = defaults.applied_modifiers.unwrap();
        assert_eq!(report.attribute_lines, vec!["Fried circuit: -3"]);
    }

    #[test]
    fn test_skill_name_for_custom_skill_is_item_name() {
        let ctx = context();
        let custom = Item::new("s", "Juggling", ItemData::Skill(SkillData::default()));
        let core = Item::new("t", "shoot", ItemData::Skill(SkillData::new(SKILL_SHOOT, None, 0)));
        assert_eq!(skill_name(&ctx, &custom, custom.as_skill().unwrap()), "Juggling");
        assert_eq!(skill_name(&ctx, &core, core.as_skill().unwrap()), "Shoot");
    }

    #[test]
    fn test_rot_and_custom_rolls() {
        let actor = Actor::new("a", "Vanja", ActorKind::Character).with_rot(2, 1);
        let rot = rot_roll(&context(), &actor);
        assert_eq!(rot.roll_name, "Rot");
        assert_eq!(rot.base_default, 3);

        let custom = custom_roll(&context());
        assert_eq!(custom.roll_name, "MYZ.CUSTOM_ROLL");
        assert_eq!(custom.base_default + custom.skill_default + custom.gear_default, 0);
    }
}
