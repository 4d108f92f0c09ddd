// File: src/config.rs
// Purpose: Configuration parsing from tally.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::path::normalize_base;
use crate::{build_app_router, MemoryHistory, Router};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub routing: RoutingConfig,
}

/// Routing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Deployment root the history is mounted under (default: "/")
    #[serde(default = "default_base_path")]
    pub base_path: String,

    /// Whether literal segments ignore ASCII case (default: false)
    #[serde(default = "default_false")]
    pub case_insensitive: bool,
}

fn default_base_path() -> String {
    "/".to_string()
}

fn default_false() -> bool {
    false
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            base_path: default_base_path(),
            case_insensitive: false,
        }
    }
}

impl RoutingConfig {
    /// Base path in canonical form
    pub fn base(&self) -> String {
        normalize_base(&self.base_path)
    }

    /// Application router honoring the configured case sensitivity
    pub fn router(&self) -> Result<Router> {
        build_app_router(self.case_insensitive).context("Failed to build route table")
    }

    /// Empty in-memory history under the configured base
    pub fn memory_history(&self) -> MemoryHistory {
        MemoryHistory::new(&self.base())
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Missing file means defaults
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./tally.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("tally.toml")
    }
}
