//! # Story Loader
//!
//! Reads a SpaceWalk story document and turns it into a connected
//! [`world_graph::World`].
//!
//! Stories are normally XML (a `world` element holding a `title` and a
//! sequence of `room` elements); the same record shape is also accepted as
//! TOML or JSON. Any failure while reading, parsing or linking is reported as
//! a single [`LoadError`].

pub mod document;
pub mod error;
pub mod loader;

pub use document::*;
pub use error::*;
pub use loader::*;
