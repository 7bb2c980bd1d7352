//! Collectible objects.

use serde::Serialize;

use super::ObjectId;

/// An item that can be found in a room or carried by an entity.
///
/// Not `Clone`: an object lives in exactly one inventory and moves between
/// containers instead of being copied.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Object {
    name: String,
    id: ObjectId,
    description: String,
}

impl Object {
    /// Create a new object.
    pub fn new(name: impl Into<String>, id: ObjectId, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id,
            description: description.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}
