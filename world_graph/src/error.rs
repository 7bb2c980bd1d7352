//! Errors raised while building or querying a world.

use thiserror::Error;

use crate::entities::{EntityId, ObjectId};
use crate::world::{RoomHandle, RoomId, WorldPhase};

#[derive(Debug, Error)]
pub enum WorldError {
    #[error("world is {actual:?}, operation requires {expected:?}")]
    WrongPhase {
        expected: WorldPhase,
        actual: WorldPhase,
    },

    #[error("no room at handle {0}")]
    UnknownRoom(RoomHandle),

    #[error("no entity with id {0}")]
    UnknownEntity(EntityId),

    #[error("room {room} holds no object {object}")]
    MissingObject { room: RoomHandle, object: ObjectId },

    #[error("room id {0} is defined more than once")]
    DuplicateRoom(RoomId),

    #[error("room {room} links to unknown room {neighbour}")]
    DanglingLink { room: RoomId, neighbour: RoomId },

    #[error("invalid load configuration: {0}")]
    Config(#[from] toml::de::Error),
}

pub type WorldResult<T> = Result<T, WorldError>;
