//! Declarative room and object records, as read from a story document.

use serde::{Deserialize, Serialize};

use super::RoomId;
use crate::entities::{Object, ObjectId};

/// An object nested under a room's `inventory`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectRecord {
    pub name: String,
    pub id: ObjectId,
    pub description: String,
}

impl ObjectRecord {
    pub fn new(name: impl Into<String>, id: i32, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: ObjectId(id),
            description: description.into(),
        }
    }
}

impl From<ObjectRecord> for Object {
    fn from(record: ObjectRecord) -> Self {
        Object::new(record.name, record.id, record.description)
    }
}

/// The `inventory` element of a room.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryRecord {
    #[serde(rename = "object", default)]
    pub objects: Vec<ObjectRecord>,
}

/// The `connections` element of a room: neighbour room ids in link order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionsRecord {
    #[serde(rename = "id", default)]
    pub ids: Vec<RoomId>,
}

/// One room of a story document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomRecord {
    pub name: String,
    pub id: RoomId,
    pub description: String,
    #[serde(default)]
    pub inventory: InventoryRecord,
    #[serde(default)]
    pub connections: ConnectionsRecord,
}

impl RoomRecord {
    /// Create a record with no objects and no connections.
    pub fn new(name: impl Into<String>, id: i32, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: RoomId(id),
            description: description.into(),
            inventory: InventoryRecord::default(),
            connections: ConnectionsRecord::default(),
        }
    }

    /// Add an object to the record's inventory.
    pub fn with_object(mut self, object: ObjectRecord) -> Self {
        self.inventory.objects.push(object);
        self
    }

    /// Append neighbour ids.
    pub fn with_connections(mut self, ids: impl IntoIterator<Item = i32>) -> Self {
        self.connections.ids.extend(ids.into_iter().map(RoomId));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_builder() {
        let record = RoomRecord::new("Hall", 2, "A long hall.")
            .with_object(ObjectRecord::new("Lamp", 20, "Flickers."))
            .with_connections([1, 3]);

        assert_eq!(record.id, RoomId(2));
        assert_eq!(record.inventory.objects.len(), 1);
        assert_eq!(record.connections.ids, vec![RoomId(1), RoomId(3)]);
    }

    #[test]
    fn test_object_record_into_object() {
        let object: Object = ObjectRecord::new("Key", 10, "Opens the vault.").into();
        assert_eq!(object.id(), ObjectId(10));
        assert_eq!(object.name(), "Key");
        assert_eq!(object.description(), "Opens the vault.");
    }
}
