//! # World Graph
//!
//! The in-memory model of a SpaceWalk story: rooms linked into a (possibly
//! cyclic) graph, objects owned by exactly one inventory, and the entities
//! that populate the world.
//!
//! A world is built in two passes. [`World::load_rooms`] turns room records
//! into rooms and objects and returns a [`ConnectionMap`] of pending links;
//! [`World::connect_rooms`] then resolves those ids into neighbour handles.
//! Reading the records from a document is left to the `story_loader` crate.

pub mod config;
pub mod entities;
pub mod error;
pub mod world;

pub use config::*;
pub use entities::*;
pub use error::*;
pub use world::*;
