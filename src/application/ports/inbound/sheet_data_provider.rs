use crate::domain::entities::Actor;
use crate::domain::error::SheetError;
use crate::domain::services::{RollDialogDefaults, SheetItems};
use crate::domain::value_objects::{Attribute, ItemId};

/// What a rendering layer needs from the game system to draw a sheet and
/// open roll dialogs. Every call works on a read-only actor snapshot.
pub trait SheetDataProvider: Send + Sync {
    /// Attributes the game defines, in sheet order
    fn attributes(&self) -> Vec<Attribute>;

    /// Items grouped for display, plus the NPC inventory
    fn sheet_data(&self, actor: &Actor) -> SheetItems;

    fn roll_attribute(&self, actor: &Actor, attribute: Attribute) -> RollDialogDefaults;

    /// Roll one of the actor's skill items
    fn roll_skill(&self, actor: &Actor, item_id: &ItemId) -> Result<RollDialogDefaults, SheetError>;

    /// Roll one of the actor's weapons with the matching combat skill
    fn roll_weapon(&self, actor: &Actor, item_id: &ItemId) -> Result<RollDialogDefaults, SheetError>;

    /// Roll the actor's overall armor rating
    fn roll_armor(&self, actor: &Actor) -> RollDialogDefaults;

    /// Roll a single armor item
    fn roll_armor_item(&self, actor: &Actor, item_id: &ItemId) -> Result<RollDialogDefaults, SheetError>;

    fn roll_rot(&self, actor: &Actor) -> RollDialogDefaults;

    fn roll_custom(&self) -> RollDialogDefaults;
}
