//! Actor entity - Player characters, NPCs and vehicles

use crate::domain::value_objects::{ActorId, Attribute, AttributeSet, CreatureType, ItemId};

use super::{Item, SkillData};

/// A snapshot of an actor and the items it owns
#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    pub id: ActorId,
    pub name: String,
    pub kind: ActorKind,
    pub creature_type: CreatureType,
    pub attributes: AttributeSet,
    pub rot: Rot,
    pub armor_rating: i32,
    /// Owned items, in the host's iteration order
    pub items: Vec<Item>,
}

impl Actor {
    pub fn new(id: impl Into<ActorId>, name: impl Into<String>, kind: ActorKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            creature_type: CreatureType::default(),
            attributes: AttributeSet::default(),
            rot: Rot::default(),
            armor_rating: 0,
            items: Vec::new(),
        }
    }

    pub fn with_creature_type(mut self, creature_type: CreatureType) -> Self {
        self.creature_type = creature_type;
        self
    }

    pub fn with_attribute(mut self, attribute: Attribute, value: i32) -> Self {
        self.attributes.set(attribute, value);
        self
    }

    pub fn with_rot(mut self, value: i32, permanent: i32) -> Self {
        self.rot = Rot { value, permanent };
        self
    }

    pub fn with_armor_rating(mut self, rating: i32) -> Self {
        self.armor_rating = rating;
        self
    }

    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    pub fn attribute(&self, attribute: Attribute) -> i32 {
        self.attributes.get(attribute)
    }

    pub fn item(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// First owned item carrying `skill_key`
    pub fn find_skill(&self, skill_key: &str) -> Option<(&Item, &SkillData)> {
        self.items.iter().find_map(|item| {
            item.as_skill()
                .filter(|skill| skill.skill_key == skill_key)
                .map(|skill| (item, skill))
        })
    }

    pub fn is_npc(&self) -> bool {
        self.kind == ActorKind::Npc
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActorKind {
    #[default]
    Character,
    Npc,
    Vehicle,
}

/// Rot points, temporary and permanent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rot {
    pub value: i32,
    pub permanent: i32,
}

impl Rot {
    pub fn total(&self) -> i32 {
        self.value.saturating_add(self.permanent)
    }
}
