//! Configuration types for a Game of Life universe.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{Pattern, Seed};

/// Top-level universe configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniverseConfig {
    /// Grid width in cells.
    pub width: usize,
    /// Grid height in cells.
    pub height: usize,
    /// Initial pattern.
    #[serde(default)]
    pub seed: Seed,
}

impl Default for UniverseConfig {
    fn default() -> Self {
        Self {
            width: 128,
            height: 128,
            seed: Seed::default(),
        }
    }
}

impl UniverseConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidDimensions);
        }
        if self.width.checked_mul(self.height).is_none() {
            return Err(ConfigError::InvalidDimensions);
        }
        if let Pattern::Noise { density, .. } = &self.seed.pattern
            && !(0.0..=1.0).contains(density)
        {
            return Err(ConfigError::InvalidDensity(*density));
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        log::debug!("Loading universe config from {}", path.display());
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Grid dimensions (width, height) must be non-zero")]
    InvalidDimensions,
    #[error("Noise density must be within [0, 1], got {0}")]
    InvalidDensity(f32),
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
