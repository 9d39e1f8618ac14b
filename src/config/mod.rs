// src/config/mod.rs
//! Configuration module for user settings.
//!
//! Settings live in `<config_dir>/treepeek/config.toml`. Every key is
//! optional:
//!
//! ```toml
//! theme = "base16-ocean.dark"
//! tick_rate_ms = 200
//! max_depth = 64
//! icons = true
//! start_dir = "~/src"
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::{highlight::DEFAULT_THEME, tree::DEFAULT_MAX_DEPTH};

/// User preferences.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// syntect theme used for the preview.
    pub theme: String,
    /// Redraw interval of the UI loop.
    pub tick_rate_ms: u64,
    /// Deepest directory nesting a scan will follow.
    pub max_depth: usize,
    /// Show Nerd Font icons next to entries.
    pub icons: bool,
    /// Directory opened on startup when none is given on the command line.
    pub start_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            tick_rate_ms: 200,
            max_depth: DEFAULT_MAX_DEPTH,
            icons: true,
            start_dir: None,
        }
    }
}

impl Config {
    /// `<config_dir>/treepeek/config.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("treepeek").join("config.toml"))
    }

    /// Load settings.
    ///
    /// An explicit `path` must exist. Without one, the default location is
    /// used when present and built-in defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) if path.exists() => path,
                _ => return Ok(Self::default()),
            },
        };

        let raw = fs::read_to_string(&path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = Self::parse(&raw)
            .with_context(|| format!("invalid config {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn parse(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw)?;
        anyhow::ensure!(config.max_depth > 0, "max_depth must be at least 1");
        Ok(config)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(16))
    }
}
