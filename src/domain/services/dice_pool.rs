//! Dice-pool composition
//!
//! Attribute (base) and gear pools never drop below zero. The skill pool is
//! left unclamped so penalties show up as negative values in the dialog.

use crate::domain::entities::{Actor, SkillData};
use crate::domain::value_objects::Attribute;

use super::modifier_aggregator::{aggregate, Aggregate, Contribution, ModifierSource};

/// The three dice pools of a roll plus the items that shaped them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiceTotals {
    pub base: i32,
    pub skill: i32,
    pub gear: i32,
    pub attribute_modifiers: Vec<Contribution>,
    pub skill_modifiers: Vec<Contribution>,
    pub gear_modifiers: Vec<Contribution>,
}

/// Pools for a skill roll
pub fn compose(actor: &Actor, skill: &SkillData) -> DiceTotals {
    compose_with_gear_bonus(actor, skill, 0)
}

/// Pools for a skill roll where a flat bonus (a weapon's) joins the gear pool
/// before it is clamped
pub fn compose_with_gear_bonus(actor: &Actor, skill: &SkillData, gear_bonus: i32) -> DiceTotals {
    let (base, attribute) = match skill.attribute {
        Some(attribute) => base_pool(actor, attribute),
        None => (0, Aggregate::default()),
    };

    let (skill_total, skill_mods, gear_mods) = if skill.has_key() {
        let skill_mods = aggregate(&actor.items, &skill.skill_key, ModifierSource::Modifiers);
        let gear_mods = aggregate(&actor.items, &skill.skill_key, ModifierSource::GearModifiers);
        (
            skill.value.saturating_add(skill_mods.total),
            skill_mods,
            gear_mods,
        )
    } else {
        (skill.value, Aggregate::default(), Aggregate::default())
    };

    DiceTotals {
        base,
        skill: skill_total,
        gear: gear_mods.total.saturating_add(gear_bonus).max(0),
        attribute_modifiers: attribute.contributions,
        skill_modifiers: skill_mods.contributions,
        gear_modifiers: gear_mods.contributions,
    }
}

/// Pools for a bare attribute roll: no skill dice, no gear dice
pub fn compose_attribute(actor: &Actor, attribute: Attribute) -> DiceTotals {
    let (base, attribute_mods) = base_pool(actor, attribute);
    DiceTotals {
        base,
        attribute_modifiers: attribute_mods.contributions,
        ..Default::default()
    }
}

fn base_pool(actor: &Actor, attribute: Attribute) -> (i32, Aggregate) {
    let mods = aggregate(&actor.items, attribute.key(), ModifierSource::Modifiers);
    let base = actor.attribute(attribute).saturating_add(mods.total).max(0);
    (base, mods)
}
