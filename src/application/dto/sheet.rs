use serde::Serialize;

use crate::domain::entities::Item;
use crate::domain::services::SheetItems;

/// Item as listed on a sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemSummaryDto {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<i32>,
}

impl From<Item> for ItemSummaryDto {
    fn from(item: Item) -> Self {
        let item_type = item.item_type().to_string();
        let (skill_key, attribute, value) = match item.as_skill() {
            Some(s) => (
                Some(s.skill_key.clone()),
                s.attribute.map(|a| a.key().to_string()),
                Some(s.value),
            ),
            None => (None, None, None),
        };
        Self {
            id: item.id.to_string(),
            name: item.name,
            item_type,
            skill_key,
            attribute,
            value,
        }
    }
}

/// Categorized sheet view of an actor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SheetItemsDto {
    pub skills: Vec<ItemSummaryDto>,
    pub talents: Vec<ItemSummaryDto>,
    pub secondary_functions: Vec<ItemSummaryDto>,
    pub abilities: Vec<ItemSummaryDto>,
    pub mutations: Vec<ItemSummaryDto>,
    pub animal_powers: Vec<ItemSummaryDto>,
    pub contacts: Vec<ItemSummaryDto>,
    pub modules: Vec<ItemSummaryDto>,
    pub weapons: Vec<ItemSummaryDto>,
    pub armor: Vec<ItemSummaryDto>,
    pub chassis: Vec<ItemSummaryDto>,
    pub gear: Vec<ItemSummaryDto>,
    pub artifacts: Vec<ItemSummaryDto>,
    pub criticals: Vec<ItemSummaryDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub npc_inventory: Option<Vec<ItemSummaryDto>>,
}

fn summaries(items: Vec<Item>) -> Vec<ItemSummaryDto> {
    items.into_iter().map(ItemSummaryDto::from).collect()
}

impl From<SheetItems> for SheetItemsDto {
    fn from(value: SheetItems) -> Self {
        Self {
            skills: summaries(value.skills),
            talents: summaries(value.talents),
            secondary_functions: summaries(value.secondary_functions),
            abilities: summaries(value.abilities),
            mutations: summaries(value.mutations),
            animal_powers: summaries(value.animal_powers),
            contacts: summaries(value.contacts),
            modules: summaries(value.modules),
            weapons: summaries(value.weapons),
            armor: summaries(value.armor),
            chassis: summaries(value.chassis),
            gear: summaries(value.gear),
            artifacts: summaries(value.artifacts),
            criticals: summaries(value.criticals),
            npc_inventory: value.npc_inventory.map(summaries),
        }
    }
}
