//! Building a connected world from a story document.

use std::path::Path;
use tracing::info;
use world_graph::{LoadConfig, World};

use crate::document::{StoryDocument, StoryFormat};
use crate::error::{LoadError, SourceError};

impl StoryDocument {
    /// Load the rooms into a new world and link them.
    pub fn into_world(self, config: LoadConfig) -> Result<World, LoadError> {
        if config.require_title && !self.has_title() {
            return Err(SourceError::MissingTitle.into());
        }

        let mut world = World::with_config(config);
        world.set_title(self.title);
        let report = world.build(self.rooms)?;

        info!(
            title = world.title(),
            rooms = world.room_count(),
            linked = report.linked,
            dangling = report.dangling,
            "world ready"
        );
        Ok(world)
    }
}

/// Parse `input` and build a connected world from it.
pub fn load_world_str(
    input: &str,
    format: StoryFormat,
    config: LoadConfig,
) -> Result<World, LoadError> {
    StoryDocument::parse(input, format)?.into_world(config)
}

/// Read a story file, picking the format from its extension, and build a
/// connected world from it.
pub fn load_world(path: impl AsRef<Path>, config: LoadConfig) -> Result<World, LoadError> {
    let path = path.as_ref();
    let format = StoryFormat::from_path(path)?;
    info!(path = %path.display(), ?format, "reading story");

    let input = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_world_str(&input, format, config)
}
