//! Editor tunables.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Highest accepted `max_segments`. Region count doubles with every segment,
/// so 20 segments already enumerate over a million regions per commit.
pub const MAX_SEGMENTS: usize = 20;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid config value: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Radius given to newly added segments.
    pub default_radius: f64,
    /// Resizing never shrinks a segment below this.
    pub min_radius: f64,
    /// Upper bound on segments; regions grow as 2^n - 1. At most
    /// [`MAX_SEGMENTS`].
    pub max_segments: usize,
    /// Pointer travel below which a drag counts as a click.
    pub click_threshold: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            default_radius: 80.0,
            min_radius: 20.0,
            max_segments: 16,
            click_threshold: 3.0,
        }
    }
}

impl EditorConfig {
    /// Reads a JSON file. Missing fields keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config: EditorConfig =
            serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
                path: path.display().to_string(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.min_radius > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "min_radius must be positive, got {}",
                self.min_radius
            )));
        }
        if !(self.default_radius >= self.min_radius) {
            return Err(ConfigError::Invalid(format!(
                "default_radius {} is below min_radius {}",
                self.default_radius, self.min_radius
            )));
        }
        if !(1..=MAX_SEGMENTS).contains(&self.max_segments) {
            return Err(ConfigError::Invalid(format!(
                "max_segments must be within 1..={}, got {}",
                MAX_SEGMENTS, self.max_segments
            )));
        }
        if !(self.click_threshold >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "click_threshold must not be negative, got {}",
                self.click_threshold
            )));
        }
        Ok(())
    }
}
