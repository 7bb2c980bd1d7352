//! Load configuration.

use serde::{Deserialize, Serialize};

use crate::error::WorldResult;

/// How the load and link passes treat duplicate room ids and dangling links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkPolicy {
    /// Skip what cannot be resolved; the first room with a given id wins.
    #[default]
    Lenient,
    /// Fail on the first duplicate room id or dangling neighbour id.
    Strict,
}

/// Options applied when building a world from a story document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadConfig {
    pub link_policy: LinkPolicy,

    /// Reject documents without a non-empty title.
    pub require_title: bool,
}

impl LoadConfig {
    /// Configuration that rejects duplicates, dangling links and untitled stories.
    pub fn strict() -> Self {
        Self {
            link_policy: LinkPolicy::Strict,
            require_title: true,
        }
    }

    /// Parse a configuration from TOML. Missing keys fall back to defaults.
    pub fn from_toml_str(input: &str) -> WorldResult<Self> {
        Ok(toml::from_str(input)?)
    }

    pub fn is_strict(&self) -> bool {
        self.link_policy == LinkPolicy::Strict
    }
}
