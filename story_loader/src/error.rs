//! Errors raised while reading a story document.

use std::path::PathBuf;
use thiserror::Error;
use world_graph::WorldError;

/// Problems with the document itself.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed XML story: {0}")]
    Xml(#[from] quick_xml::DeError),

    #[error("malformed TOML story: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("malformed JSON story: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported story format: {0:?}")]
    UnsupportedFormat(String),

    #[error("story has no title")]
    MissingTitle,
}

/// The world failed to load. Loading is a one-shot transformation, so every
/// cause is fatal.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("world failed to load: {0}")]
    Source(#[from] SourceError),

    #[error("world failed to load: {0}")]
    World(#[from] WorldError),
}
