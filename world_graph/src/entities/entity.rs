//! Entity definitions: the player and NPCs.

use serde::{Deserialize, Serialize};

use super::{EntityId, Inventory, Object};

/// Numeric attributes carried by an entity. Plain data; nothing in the world
/// graph reads them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Attributes {
    pub hp: i32,
    pub stamina: i32,
    pub intelligence: i32,
    pub agility: i32,
    pub strength: i32,
    pub stealth: i32,
    pub charisma: i32,
}

/// A named actor with an inventory.
#[derive(Debug, Serialize)]
pub struct Entity {
    pub id: EntityId,
    pub name: String,
    /// How the entity looks when described to the player.
    pub appearance: String,
    pub attributes: Attributes,
    pub inventory: Inventory,
}

impl Entity {
    /// Create a new entity with no appearance, an empty inventory and zeroed attributes.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: EntityId::new(),
            name: name.into(),
            appearance: String::new(),
            attributes: Attributes::default(),
            inventory: Inventory::new(),
        }
    }

    /// Set the appearance.
    pub fn with_appearance(mut self, appearance: impl Into<String>) -> Self {
        self.appearance = appearance.into();
        self
    }

    /// Move an object into this entity's inventory.
    pub fn add_item(&mut self, object: Object) -> &mut Self {
        self.inventory.add(object);
        self
    }
}
