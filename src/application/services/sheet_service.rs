//! Sheet Service - Sheet data and roll preparation for actor snapshots
//!
//! Thin use-case layer over the domain services: resolves item ids on the
//! actor, checks item types, and logs what was prepared.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::ports::inbound::SheetDataProvider;
use crate::domain::entities::{Actor, Item, ItemType};
use crate::domain::error::SheetError;
use crate::domain::services::{inventory, roll_preparation, RollDialogDefaults, SheetItems};
use crate::domain::value_objects::{Attribute, GameContext, ItemId};

/// Default implementation of SheetDataProvider
pub struct SheetService {
    context: Arc<GameContext>,
}

impl SheetService {
    pub fn new(context: Arc<GameContext>) -> Self {
        Self { context }
    }

    fn find_item<'a>(actor: &'a Actor, item_id: &ItemId) -> Result<&'a Item, SheetError> {
        actor
            .item(item_id)
            .ok_or_else(|| SheetError::item_not_found(item_id.as_str()))
    }

    fn wrong_type(item: &Item, expected: ItemType) -> SheetError {
        SheetError::wrong_item_type(item.id.as_str(), expected.as_str(), item.item_type().as_str())
    }
}

impl SheetDataProvider for SheetService {
    fn attributes(&self) -> Vec<Attribute> {
        self.context.attributes.clone()
    }

    #[instrument(skip(self, actor), fields(actor_id = %actor.id, items = actor.items.len()))]
    fn sheet_data(&self, actor: &Actor) -> SheetItems {
        let sheet = inventory::categorize(actor);
        debug!(
            skills = sheet.skills.len(),
            npc_inventory = ?sheet.npc_inventory.as_ref().map(Vec::len),
            "Categorized items for {}",
            actor.name
        );
        sheet
    }

    #[instrument(skip(self, actor), fields(actor_id = %actor.id, attribute = %attribute))]
    fn roll_attribute(&self, actor: &Actor, attribute: Attribute) -> RollDialogDefaults {
        let defaults = roll_preparation::attribute_roll(&self.context, actor, attribute);
        debug!(base = defaults.base_default, "Prepared attribute roll");
        defaults
    }

    #[instrument(skip(self, actor), fields(actor_id = %actor.id, item_id = %item_id))]
    fn roll_skill(&self, actor: &Actor, item_id: &ItemId) -> Result<RollDialogDefaults, SheetError> {
        let item = Self::find_item(actor, item_id)?;
        let skill = item
            .as_skill()
            .ok_or_else(|| Self::wrong_type(item, ItemType::Skill))?;

        let defaults = roll_preparation::skill_roll(&self.context, actor, item, skill);
        debug!(
            base = defaults.base_default,
            skill = defaults.skill_default,
            gear = defaults.gear_default,
            "Prepared skill roll: {}",
            defaults.roll_name
        );
        Ok(defaults)
    }

    #[instrument(skip(self, actor), fields(actor_id = %actor.id, item_id = %item_id))]
    fn roll_weapon(&self, actor: &Actor, item_id: &ItemId) -> Result<RollDialogDefaults, SheetError> {
        let item = Self::find_item(actor, item_id)?;
        let weapon = item
            .as_weapon()
            .ok_or_else(|| Self::wrong_type(item, ItemType::Weapon))?;

        let defaults = roll_preparation::weapon_roll(&self.context, actor, item, weapon);
        debug!(
            base = defaults.base_default,
            skill = defaults.skill_default,
            gear = defaults.gear_default,
            trained = defaults.skill_item_id.is_some(),
            "Prepared weapon roll: {}",
            defaults.roll_name
        );
        Ok(defaults)
    }

    #[instrument(skip(self, actor), fields(actor_id = %actor.id))]
    fn roll_armor(&self, actor: &Actor) -> RollDialogDefaults {
        roll_preparation::armor_roll(&self.context, actor)
    }

    #[instrument(skip(self, actor), fields(actor_id = %actor.id, item_id = %item_id))]
    fn roll_armor_item(&self, actor: &Actor, item_id: &ItemId) -> Result<RollDialogDefaults, SheetError> {
        let item = Self::find_item(actor, item_id)?;
        let armor = item
            .as_armor()
            .ok_or_else(|| Self::wrong_type(item, ItemType::Armor))?;
        Ok(roll_preparation::armor_item_roll(item, armor))
    }

    #[instrument(skip(self, actor), fields(actor_id = %actor.id))]
    fn roll_rot(&self, actor: &Actor) -> RollDialogDefaults {
        roll_preparation::rot_roll(&self.context, actor)
    }

    fn roll_custom(&self) -> RollDialogDefaults {
        roll_preparation::custom_roll(&self.context)
    }
}
