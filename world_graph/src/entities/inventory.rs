//! Ordered, exclusively owned collections of objects.

use serde::Serialize;

use super::{Object, ObjectId};

/// Objects held by a room or an entity, in the order they were added.
#[derive(Debug, Default, Serialize)]
pub struct Inventory {
    items: Vec<Object>,
}

impl Inventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Move an object into the inventory, at the end.
    pub fn add(&mut self, object: Object) {
        self.items.push(object);
    }

    /// Move every object out of `objects`, preserving order. `objects` is left empty.
    pub fn add_all(&mut self, objects: &mut Vec<Object>) {
        self.items.append(objects);
    }

    /// Remove the first object with the given id and hand ownership back to the caller.
    pub fn take(&mut self, id: ObjectId) -> Option<Object> {
        let index = self.items.iter().position(|o| o.id() == id)?;
        Some(self.items.remove(index))
    }

    /// Check if an object with the given id is held here.
    pub fn contains(&self, id: ObjectId) -> bool {
        self.items.iter().any(|o| o.id() == id)
    }

    /// The live contents.
    pub fn items(&self) -> &[Object] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Object> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a Object;
    type IntoIter = std::slice::Iter<'a, Object>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn object(id: i32) -> Object {
        Object::new(format!("Item No.{}", id), ObjectId(id), "This is a test item.")
    }

    #[test]
    fn test_add_keeps_order() {
        let mut inventory = Inventory::new();
        inventory.add(object(2));
        inventory.add(object(1));

        let ids: Vec<_> = inventory.iter().map(|o| o.id()).collect();
        assert_eq!(ids, vec![ObjectId(2), ObjectId(1)]);
    }

    #[test]
    fn test_add_all_drains_source() {
        let mut inventory = Inventory::new();
        inventory.add(object(0));
        let mut batch: Vec<_> = (1..4).map(object).collect();

        inventory.add_all(&mut batch);

        assert!(batch.is_empty());
        assert_eq!(inventory.len(), 4);
        assert_eq!(inventory.items()[3].name(), "Item No.3");
    }

    #[test]
    fn test_take_moves_object_out() {
        let mut inventory = Inventory::new();
        inventory.add(object(7));
        inventory.add(object(8));

        let taken = inventory.take(ObjectId(7));
        assert_eq!(taken.map(|o| o.id()), Some(ObjectId(7)));
        assert!(!inventory.contains(ObjectId(7)));
        assert_eq!(inventory.len(), 1);

        assert!(inventory.take(ObjectId(99)).is_none());
    }
}
