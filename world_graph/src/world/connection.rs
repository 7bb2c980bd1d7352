//! Pending links between rooms, recorded during loading and consumed by linking.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use super::RoomId;

/// Map from a room id to the ids of the rooms it should link to.
///
/// Keys iterate in ascending id order. Each value list keeps the order the
/// neighbour ids were read in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionMap {
    entries: BTreeMap<RoomId, Vec<RoomId>>,
}

impl ConnectionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the neighbour ids of `room`.
    ///
    /// Returns `false` and leaves the map unchanged if `room` already has an
    /// entry: the first definition of a room id wins.
    pub fn insert(&mut self, room: RoomId, neighbours: Vec<RoomId>) -> bool {
        match self.entries.entry(room) {
            Entry::Vacant(slot) => {
                slot.insert(neighbours);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    pub fn get(&self, room: RoomId) -> Option<&[RoomId]> {
        self.entries.get(&room).map(Vec::as_slice)
    }

    pub fn contains(&self, room: RoomId) -> bool {
        self.entries.contains_key(&room)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (RoomId, &[RoomId])> {
        self.entries.iter().map(|(id, ids)| (*id, ids.as_slice()))
    }
}

impl IntoIterator for ConnectionMap {
    type Item = (RoomId, Vec<RoomId>);
    type IntoIter = std::collections::btree_map::IntoIter<RoomId, Vec<RoomId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl FromIterator<(RoomId, Vec<RoomId>)> for ConnectionMap {
    fn from_iter<T: IntoIterator<Item = (RoomId, Vec<RoomId>)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (room, neighbours) in iter {
            map.insert(room, neighbours);
        }
        map
    }
}

/// Outcome of a link pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkReport {
    /// Neighbour links created.
    pub linked: usize,
    /// Entries whose parent id matched no room.
    pub skipped_parents: usize,
    /// Neighbour ids that matched no room.
    pub dangling: usize,
}

impl LinkReport {
    /// True when every recorded id resolved.
    pub fn is_complete(&self) -> bool {
        self.skipped_parents == 0 && self.dangling == 0
    }
}
