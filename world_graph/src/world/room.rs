//! Rooms: the nodes of the world graph.

use serde::Serialize;

use super::{RoomHandle, RoomId};
use crate::entities::{Inventory, Object};

/// A place in the world that holds collectible objects and links to its neighbours.
///
/// Neighbour links are directional and append-only: linking the same target
/// twice records it twice, and linking A to B leaves B's own list untouched.
#[derive(Debug, Serialize)]
pub struct Room {
    name: String,
    id: RoomId,
    description: String,
    neighbours: Vec<RoomHandle>,
    inventory: Inventory,
}

impl Room {
    /// Create a room with no neighbours and an empty inventory.
    pub fn new(name: impl Into<String>, id: RoomId, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id,
            description: description.into(),
            neighbours: Vec::new(),
            inventory: Inventory::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> RoomId {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Append a link to another room. No duplicate check.
    pub fn add_neighbour(&mut self, neighbour: RoomHandle) -> &mut Self {
        self.neighbours.push(neighbour);
        self
    }

    /// Append several links, in order.
    pub fn add_neighbours(&mut self, neighbours: impl IntoIterator<Item = RoomHandle>) -> &mut Self {
        self.neighbours.extend(neighbours);
        self
    }

    /// Links to neighbouring rooms, in the order they were added.
    pub fn neighbours(&self) -> &[RoomHandle] {
        &self.neighbours
    }

    /// Move an object into the room.
    pub fn add_item(&mut self, object: Object) -> &mut Self {
        self.inventory.add(object);
        self
    }

    /// Move every object out of `objects` into the room. `objects` is left empty.
    pub fn add_items(&mut self, objects: &mut Vec<Object>) -> &mut Self {
        self.inventory.add_all(objects);
        self
    }

    pub fn items(&self) -> &Inventory {
        &self.inventory
    }

    pub fn items_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }
}
