//! Demo configuration file handling
//!
//! The demo accepts an optional TOML file overriding the engine's coast
//! feel, e.g.:
//!
//! ```toml
//! decay_per_step = 0.9
//! stop_epsilon = 0.5
//! ```
//!
//! Anything not present falls back to the engine defaults.

use std::path::Path;

use drift_carousel::DragConfig;
use serde::Deserialize;
use thiserror::Error;

/// Errors while loading a demo config file
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("unreadable config file: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML for this schema
    #[error("malformed config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Optional overrides for [`DragConfig`]
#[derive(Debug, Default, Deserialize)]
pub struct DemoConfig {
    /// Velocity decay factor per tick
    #[serde(default)]
    pub decay_per_step: Option<f32>,
    /// Stop epsilon in pixels per tick
    #[serde(default)]
    pub stop_epsilon: Option<f32>,
}

impl DemoConfig {
    /// Load overrides from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_str(&raw)
    }

    /// Parse overrides from TOML text
    pub fn from_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    /// Resolve against the engine defaults
    pub fn drag_config(&self) -> DragConfig {
        let base = DragConfig::default();
        DragConfig::new(
            self.decay_per_step.unwrap_or(base.decay_per_step),
            self.stop_epsilon.unwrap_or(base.stop_epsilon),
        )
    }
}
