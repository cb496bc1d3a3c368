//! Spawn configuration and its RON file format.

use std::fs;
use std::path::Path;

use pf_core::EntitySize;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default number of candidate draws before a placement gives up.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10_000;

/// Configuration for enemy placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    /// Footprint of every spawned entity.
    pub entity_size: EntitySize,
    /// Upper bound on candidate draws per placement.
    pub max_attempts: u32,
    /// Fixed RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            entity_size: EntitySize::ENEMY,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            seed: None,
        }
    }
}

impl SpawnConfig {
    /// Reject configurations the generator cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.entity_size.is_positive() {
            return Err(ConfigError::Invalid(format!(
                "entity size must be positive, got {}x{}",
                self.entity_size.width, self.entity_size.height
            )));
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::Invalid("max_attempts must be at least 1".into()));
        }
        Ok(())
    }
}

/// Save a spawn config to a RON file.
pub fn save_config(path: &Path, config: &SpawnConfig) -> Result<(), ConfigError> {
    let pretty_config = ron::ser::PrettyConfig::new().depth_limit(2);
    let ron_string = ron::ser::to_string_pretty(config, pretty_config)?;
    fs::write(path, ron_string)?;
    Ok(())
}

/// Load and validate a spawn config from a RON file.
///
/// Fields missing from the file take their default values.
pub fn load_config(path: &Path) -> Result<SpawnConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: SpawnConfig = ron::from_str(&contents)?;
    config.validate()?;
    Ok(config)
}
