//! Enemy placement for Placefield.
//!
//! [`PlacementGenerator`] finds free spots for fixed-size entities by
//! rejection sampling. [`PfEntitySpawnPlugin`] wires it into a bevy app.

pub mod config;
pub mod error;
pub mod placement;
pub mod plugin;
pub mod rng;

pub use config::{load_config, save_config, SpawnConfig, DEFAULT_MAX_ATTEMPTS};
pub use error::{ConfigError, PlacementError};
pub use placement::PlacementGenerator;
pub use plugin::{
    spawn_enemies, Enemy, EnemySpawnFailed, EnemySpawned, EnemySpawner, Footprint,
    PfEntitySpawnPlugin, PlayArea, SpawnEnemy,
};
pub use rng::{entropy_rng, seeded_rng, RandomSource};
