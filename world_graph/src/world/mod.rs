//! The world: the root set of rooms, the population, and the two-pass build.

mod connection;
mod records;
mod room;

pub use connection::*;
pub use records::*;
pub use room::*;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, info, warn};

use crate::config::LoadConfig;
use crate::entities::{Entity, EntityId, Object, ObjectId};
use crate::error::{WorldError, WorldResult};

/// Identifier of a room, as written in the story document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(pub i32);

impl std::fmt::Display for RoomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Position of a room in its world's root set.
///
/// Handles are only meaningful for the world that issued them and stay valid
/// until that world is destroyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct RoomHandle(pub usize);

impl std::fmt::Display for RoomHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Build state of a world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorldPhase {
    /// No rooms loaded.
    #[default]
    Empty,
    /// Rooms and objects exist, links are still pending.
    Loaded,
    /// Links resolved; the graph can be traversed.
    Connected,
}

/// Owner of every room and entity in a story.
///
/// Rooms live in a single arena and refer to each other by [`RoomHandle`], so
/// a room reachable from several neighbours is one shared room, cycles need
/// no special care, and releasing the arena releases the whole graph.
#[derive(Debug, Default)]
pub struct World {
    title: String,
    phase: WorldPhase,
    config: LoadConfig,
    rooms: Vec<Room>,
    population: Vec<Entity>,
}

impl World {
    /// Create an empty world with the default (lenient) configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty world with the given configuration.
    pub fn with_config(config: LoadConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &LoadConfig {
        &self.config
    }

    pub fn phase(&self) -> WorldPhase {
        self.phase
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    fn expect_phase(&self, expected: WorldPhase) -> WorldResult<()> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(WorldError::WrongPhase {
                expected,
                actual: self.phase,
            })
        }
    }

    /// First pass: build rooms and their objects from records, in source order.
    ///
    /// No neighbour links are created; the neighbour ids of each room are
    /// returned as a [`ConnectionMap`] for [`World::connect_rooms`]. Rooms with
    /// a repeated id are still added to the root set, but only the first
    /// definition's connections are kept. Under the strict policy a repeated
    /// id fails the pass and leaves the world empty.
    pub fn load_rooms<I>(&mut self, records: I) -> WorldResult<ConnectionMap>
    where
        I: IntoIterator<Item = RoomRecord>,
    {
        self.expect_phase(WorldPhase::Empty)?;

        let mut rooms = Vec::new();
        let mut connections = ConnectionMap::new();
        let mut object_count = 0;

        for record in records {
            let RoomRecord {
                name,
                id,
                description,
                inventory,
                connections: links,
            } = record;

            let mut room = Room::new(name, id, description);
            for object in inventory.objects {
                room.add_item(Object::from(object));
                object_count += 1;
            }
            rooms.push(room);

            if !connections.insert(id, links.ids) {
                if self.config.is_strict() {
                    return Err(WorldError::DuplicateRoom(id));
                }
                warn!(room = %id, "duplicate room id, keeping first definition's connections");
            }
        }

        info!(
            rooms = rooms.len(),
            objects = object_count,
            pending = connections.len(),
            "loaded rooms"
        );

        self.rooms = rooms;
        self.phase = WorldPhase::Loaded;
        Ok(connections)
    }

    /// Second pass: resolve pending connections into neighbour links.
    ///
    /// Each parent id and neighbour id is matched against the first room in
    /// the root set carrying it. Unmatched parents are skipped, and so are
    /// unmatched neighbour ids while the rest of that list is still linked.
    /// Under the strict policy a dangling neighbour id fails the pass before
    /// any link is made.
    pub fn connect_rooms(&mut self, connections: ConnectionMap) -> WorldResult<LinkReport> {
        self.expect_phase(WorldPhase::Loaded)?;

        let (resolved, mut report) = self.resolve(connections)?;

        for (parent, neighbours) in resolved {
            report.linked += neighbours.len();
            self.rooms[parent.0].add_neighbours(neighbours);
        }

        info!(
            linked = report.linked,
            dangling = report.dangling,
            skipped_parents = report.skipped_parents,
            "connected rooms"
        );

        self.phase = WorldPhase::Connected;
        Ok(report)
    }

    fn resolve(
        &self,
        connections: ConnectionMap,
    ) -> WorldResult<(Vec<(RoomHandle, Vec<RoomHandle>)>, LinkReport)> {
        let mut by_id: HashMap<RoomId, RoomHandle> = HashMap::with_capacity(self.rooms.len());
        for (index, room) in self.rooms.iter().enumerate() {
            by_id.entry(room.id()).or_insert(RoomHandle(index));
        }

        let mut report = LinkReport::default();
        let mut resolved = Vec::with_capacity(connections.len());

        for (parent_id, neighbour_ids) in connections {
            let Some(&parent) = by_id.get(&parent_id) else {
                debug!(room = %parent_id, "no room for pending connections, skipping");
                report.skipped_parents += 1;
                continue;
            };

            let mut neighbours = Vec::with_capacity(neighbour_ids.len());
            for neighbour_id in neighbour_ids {
                match by_id.get(&neighbour_id) {
                    Some(&handle) => neighbours.push(handle),
                    None if self.config.is_strict() => {
                        return Err(WorldError::DanglingLink {
                            room: parent_id,
                            neighbour: neighbour_id,
                        });
                    }
                    None => {
                        debug!(room = %parent_id, neighbour = %neighbour_id, "dangling link skipped");
                        report.dangling += 1;
                    }
                }
            }
            resolved.push((parent, neighbours));
        }

        Ok((resolved, report))
    }

    /// Run both passes over `records`.
    pub fn build<I>(&mut self, records: I) -> WorldResult<LinkReport>
    where
        I: IntoIterator<Item = RoomRecord>,
    {
        let connections = self.load_rooms(records)?;
        self.connect_rooms(connections)
    }

    /// Get room by handle.
    pub fn room(&self, handle: RoomHandle) -> WorldResult<&Room> {
        self.rooms.get(handle.0).ok_or(WorldError::UnknownRoom(handle))
    }

    /// Get mutable room by handle.
    pub fn room_mut(&mut self, handle: RoomHandle) -> WorldResult<&mut Room> {
        self.rooms
            .get_mut(handle.0)
            .ok_or(WorldError::UnknownRoom(handle))
    }

    /// Handle of the first room with the given id.
    pub fn find_room(&self, id: RoomId) -> Option<RoomHandle> {
        self.rooms.iter().position(|r| r.id() == id).map(RoomHandle)
    }

    /// All rooms in source order.
    pub fn rooms(&self) -> impl Iterator<Item = (RoomHandle, &Room)> {
        self.rooms
            .iter()
            .enumerate()
            .map(|(index, room)| (RoomHandle(index), room))
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Rooms linked from `handle`, in link order. Only valid once connected.
    pub fn neighbours(&self, handle: RoomHandle) -> WorldResult<Vec<&Room>> {
        self.expect_phase(WorldPhase::Connected)?;
        self.room(handle)?
            .neighbours()
            .iter()
            .map(|&neighbour| self.room(neighbour))
            .collect()
    }

    /// Create an entity and add it to the population.
    pub fn spawn_entity(&mut self, name: impl Into<String>) -> EntityId {
        self.add_entity(Entity::new(name))
    }

    /// Add an already built entity to the population.
    pub fn add_entity(&mut self, entity: Entity) -> EntityId {
        let id = entity.id;
        debug!(entity = %id, name = %entity.name, "spawned entity");
        self.population.push(entity);
        id
    }

    /// Get entity by ID.
    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.population.iter().find(|e| e.id == id)
    }

    /// Get mutable entity by ID.
    pub fn entity_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.population.iter_mut().find(|e| e.id == id)
    }

    pub fn entities(&self) -> &[Entity] {
        &self.population
    }

    /// Move an object out of a room and into an entity's inventory.
    pub fn give_room_item(
        &mut self,
        room: RoomHandle,
        object: ObjectId,
        entity: EntityId,
    ) -> WorldResult<()> {
        let target = self
            .population
            .iter()
            .position(|e| e.id == entity)
            .ok_or(WorldError::UnknownEntity(entity))?;
        let item = self
            .room_mut(room)?
            .items_mut()
            .take(object)
            .ok_or(WorldError::MissingObject { room, object })?;
        self.population[target].add_item(item);
        Ok(())
    }

    /// Release every room and entity and return to [`WorldPhase::Empty`].
    pub fn destroy(&mut self) {
        debug!(
            rooms = self.rooms.len(),
            entities = self.population.len(),
            "destroying world"
        );
        self.rooms.clear();
        self.population.clear();
        self.title.clear();
        self.phase = WorldPhase::Empty;
    }
}
