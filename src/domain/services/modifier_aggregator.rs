//! Modifier aggregation
//!
//! Sums the deltas that an actor's items apply to one attribute or skill key
//! and records which items contributed, in the order the actor holds them.

use crate::domain::entities::{Item, ItemType};
use crate::domain::value_objects::ModifierMap;

/// Which modifier map of an item to read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModifierSource {
    /// `modifiers`: attribute and skill dice
    Modifiers,
    /// `gearModifiers`: gear dice
    GearModifiers,
}

impl ModifierSource {
    fn map<'a>(&self, item: &'a Item) -> Option<&'a ModifierMap> {
        match self {
            ModifierSource::Modifiers => item.modifiers.as_ref(),
            ModifierSource::GearModifiers => item.gear_modifiers.as_ref(),
        }
    }
}

/// A single item's share of an aggregate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contribution {
    pub source_type: ItemType,
    pub source_name: String,
    pub amount: i32,
}

/// Sum of all non-zero deltas for one key
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregate {
    pub total: i32,
    pub contributions: Vec<Contribution>,
}

/// Aggregate the `source` deltas for `key` across `items`.
///
/// Items without the map, or with a zero entry for `key`, are skipped.
pub fn aggregate<'a, I>(items: I, key: &str, source: ModifierSource) -> Aggregate
where
    I: IntoIterator<Item = &'a Item>,
{
    items
        .into_iter()
        .filter_map(|item| {
            let amount = source.map(item)?.get(key);
            (amount != 0).then(|| Contribution {
                source_type: item.item_type(),
                source_name: item.name.clone(),
                amount,
            })
        })
        .fold(Aggregate::default(), |mut acc, contribution| {
            acc.total = acc.total.saturating_add(contribution.amount);
            acc.contributions.push(contribution);
            acc
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ItemData;

    fn gear(name: &str, modifiers: Option<ModifierMap>) -> Item {
        let item = Item::new(name, name, ItemData::Gear);
        match modifiers {
            Some(m) => item.with_modifiers(m),
            None => item,
        }
    }

    #[test]
    fn test_items_without_maps_contribute_nothing() {
        let items = vec![gear("a", None), gear("b", None)];
        let result = aggregate(&items, "strength", ModifierSource::Modifiers);
        assert_eq!(result, Aggregate::default());

        let empty: Vec<Item> = Vec::new();
        assert_eq!(
            aggregate(&empty, "strength", ModifierSource::Modifiers),
            Aggregate::default()
        );
    }

    #[test]
    fn test_sums_matching_entries_in_encounter_order() {
        let items = vec![
            gear("Gloves", Some(ModifierMap::new().with("strength", 2))),
            gear("Rope", Some(ModifierMap::new().with("agility", 1))),
            gear("Broken arm", Some(ModifierMap::new().with("strength", -1))),
            gear("Scrap", Some(ModifierMap::new().with("strength", 0))),
        ];
        let result = aggregate(&items, "strength", ModifierSource::Modifiers);

        assert_eq!(result.total, 1);
        let names: Vec<_> = result
            .contributions
            .iter()
            .map(|c| (c.source_name.as_str(), c.amount))
            .collect();
        assert_eq!(names, vec![("Gloves", 2), ("Broken arm", -1)]);
        assert_eq!(result.contributions[0].source_type, ItemType::Gear);
    }

    #[test]
    fn test_total_is_independent_of_order() {
        let mut items = vec![
            gear("a", Some(ModifierMap::new().with("SHOOT", 3))),
            gear("b", Some(ModifierMap::new().with("SHOOT", -7))),
            gear("c", Some(ModifierMap::new().with("SHOOT", 2))),
        ];
        let forward = aggregate(&items, "SHOOT", ModifierSource::Modifiers).total;
        items.reverse();
        let backward = aggregate(&items, "SHOOT", ModifierSource::Modifiers).total;
        assert_eq!(forward, -2);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_gear_modifiers_are_read_separately() {
        let items = vec![Item::new("scope", "Scope", ItemData::Gear)
            .with_modifiers(ModifierMap::new().with("SHOOT", 1))
            .with_gear_modifiers(ModifierMap::new().with("SHOOT", 2))];

        assert_eq!(aggregate(&items, "SHOOT", ModifierSource::Modifiers).total, 1);
        assert_eq!(aggregate(&items, "SHOOT", ModifierSource::GearModifiers).total, 2);
    }

    #[test]
    fn test_aggregate_is_idempotent() {
        let items = vec![gear("a", Some(ModifierMap::new().with("wits", 1)))];
        let first = aggregate(&items, "wits", ModifierSource::Modifiers);
        let second = aggregate(&items, "wits", ModifierSource::Modifiers);
        assert_eq!(first, second);
    }
}
