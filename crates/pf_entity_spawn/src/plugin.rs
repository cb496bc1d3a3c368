//! Bevy adapter for the placement generator.
//!
//! Entities that occupy space carry a [`Footprint`]. Sending [`SpawnEnemy`]
//! places one enemy into the [`PlayArea`] away from every footprint.

use bevy::math::{IRect, IVec2};
use bevy::prelude::*;
use pf_core::{Bounds, Rect};
use rand_chacha::ChaCha8Rng;

use crate::config::SpawnConfig;
use crate::error::{ConfigError, PlacementError};
use crate::placement::PlacementGenerator;
use crate::rng::{entropy_rng, seeded_rng};

/// Space occupied by an entity in play-area coordinates.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Footprint(pub Rect);

impl From<IRect> for Footprint {
    fn from(rect: IRect) -> Self {
        Self(rect.into())
    }
}

/// Enemy marker component.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Enemy;

/// Extent of the play area new enemies are placed into.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct PlayArea(pub Bounds);

impl From<IVec2> for PlayArea {
    fn from(extent: IVec2) -> Self {
        Self(extent.into())
    }
}

/// Request to spawn one enemy.
#[derive(Event, Clone, Copy, Debug, Default)]
pub struct SpawnEnemy;

/// Fired when an enemy has been placed.
#[derive(Event, Clone, Copy, Debug)]
pub struct EnemySpawned {
    pub entity: Entity,
    pub rect: Rect,
}

/// Fired when a spawn request could not be satisfied.
#[derive(Event, Clone, Debug)]
pub struct EnemySpawnFailed {
    pub error: PlacementError,
}

/// Placement generator together with the random stream it draws from.
#[derive(Resource)]
pub struct EnemySpawner {
    generator: PlacementGenerator,
    rng: ChaCha8Rng,
}

impl EnemySpawner {
    /// Build a spawner, rejecting invalid configs.
    pub fn new(config: SpawnConfig) -> Result<Self, ConfigError> {
        let seed = config.seed;
        Ok(Self::with_generator(PlacementGenerator::new(config)?, seed))
    }

    fn with_generator(generator: PlacementGenerator, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => seeded_rng(seed),
            None => entropy_rng(),
        };
        Self { generator, rng }
    }

    /// Place one enemy away from `occupied`.
    pub fn place(&mut self, occupied: &[Rect], bounds: Bounds) -> Result<Rect, PlacementError> {
        self.generator.generate(occupied, bounds, &mut self.rng)
    }
}

/// Entity spawn plugin.
/// Places enemies on request using the configured placement generator.
#[derive(Default)]
pub struct PfEntitySpawnPlugin {
    pub config: SpawnConfig,
}

impl PfEntitySpawnPlugin {
    pub fn new(config: SpawnConfig) -> Self {
        Self { config }
    }
}

impl Plugin for PfEntitySpawnPlugin {
    fn build(&self, app: &mut App) {
        let spawner = EnemySpawner::new(self.config.clone()).unwrap_or_else(|e| {
            warn!("{}; falling back to default spawn config", e);
            EnemySpawner::with_generator(PlacementGenerator::default(), self.config.seed)
        });

        app.insert_resource(spawner)
            .init_resource::<PlayArea>()
            .add_event::<SpawnEnemy>()
            .add_event::<EnemySpawned>()
            .add_event::<EnemySpawnFailed>()
            .add_systems(Update, spawn_enemies);
    }
}

/// System that answers pending [`SpawnEnemy`] requests.
///
/// Enemies placed earlier in the same frame count as occupied space.
pub fn spawn_enemies(
    mut commands: Commands,
    mut requests: EventReader<SpawnEnemy>,
    mut spawner: ResMut<EnemySpawner>,
    play_area: Res<PlayArea>,
    footprints: Query<&Footprint>,
    mut spawned: EventWriter<EnemySpawned>,
    mut failed: EventWriter<EnemySpawnFailed>,
) {
    if requests.is_empty() {
        return;
    }

    let mut occupied: Vec<Rect> = footprints.iter().map(|f| f.0).collect();

    for _ in requests.read() {
        match spawner.place(&occupied, play_area.0) {
            Ok(rect) => {
                let entity = commands.spawn((Enemy, Footprint(rect))).id();
                occupied.push(rect);
                info!("Spawned enemy at ({}, {})", rect.x, rect.y);
                spawned.send(EnemySpawned { entity, rect });
            }
            Err(error) => {
                warn!("Failed to spawn enemy: {}", error);
                failed.send(EnemySpawnFailed { error });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_core::EntitySize;

    fn seeded_app(bounds: Bounds) -> App {
        let mut app = App::new();
        app.add_plugins(PfEntitySpawnPlugin::new(SpawnConfig {
            seed: Some(17),
            ..Default::default()
        }));
        app.insert_resource(PlayArea(bounds));
        app
    }

    fn enemy_rects(app: &mut App) -> Vec<Rect> {
        let mut query = app.world_mut().query_filtered::<&Footprint, With<Enemy>>();
        query.iter(app.world()).map(|f| f.0).collect()
    }

    #[test]
    fn spawns_one_enemy_per_request() {
        let mut app = seeded_app(Bounds::new(800, 600));
        for _ in 0..5 {
            app.world_mut().send_event(SpawnEnemy);
        }
        app.update();

        let rects = enemy_rects(&mut app);
        assert_eq!(rects.len(), 5);
        for rect in &rects {
            assert_eq!(rect.size(), (15, 15));
            assert!(Bounds::new(800, 600).contains(rect));
        }

        let events = app.world().resource::<Events<EnemySpawned>>();
        assert_eq!(events.iter_current_update_events().count(), 5);
    }

    #[test]
    fn avoids_existing_footprints() {
        let mut app = seeded_app(Bounds::new(200, 200));
        let obstacles = [
            Rect::new(0, 0, 100, 200),
            Rect::new(100, 0, 100, 100),
        ];
        for rect in obstacles {
            app.world_mut().spawn(Footprint(rect));
        }
        for _ in 0..10 {
            app.world_mut().send_event(SpawnEnemy);
        }
        app.update();

        let rects = enemy_rects(&mut app);
        assert_eq!(rects.len(), 10);
        for (i, rect) in rects.iter().enumerate() {
            assert!(!rect.overlaps_any(&obstacles));
            for other in &rects[i + 1..] {
                assert!(!rect.overlaps(other));
            }
        }
    }

    #[test]
    fn reports_failure_when_area_too_small() {
        let mut app = seeded_app(Bounds::new(10, 10));
        app.world_mut().send_event(SpawnEnemy);
        app.update();

        assert!(enemy_rects(&mut app).is_empty());
        let events = app.world().resource::<Events<EnemySpawnFailed>>();
        let failures: Vec<_> = events.iter_current_update_events().collect();
        assert_eq!(failures.len(), 1);
        assert!(matches!(failures[0].error, PlacementError::OutOfRange { .. }));
    }

    #[test]
    fn spawner_rejects_invalid_config() {
        let zero_budget = SpawnConfig {
            max_attempts: 0,
            ..Default::default()
        };
        assert!(matches!(EnemySpawner::new(zero_budget), Err(ConfigError::Invalid(_))));

        let zero_size = SpawnConfig {
            entity_size: EntitySize::new(0, 0),
            ..Default::default()
        };
        assert!(matches!(EnemySpawner::new(zero_size), Err(ConfigError::Invalid(_))));

        let negative = SpawnConfig {
            entity_size: EntitySize::new(-1, 15),
            ..Default::default()
        };
        assert!(matches!(EnemySpawner::new(negative), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn invalid_plugin_config_falls_back_to_default() {
        let mut app = App::new();
        app.add_plugins(PfEntitySpawnPlugin::new(SpawnConfig {
            entity_size: EntitySize::new(0, 0),
            max_attempts: 0,
            seed: Some(3),
        }));
        app.insert_resource(PlayArea(Bounds::new(800, 600)));
        for _ in 0..3 {
            app.world_mut().send_event(SpawnEnemy);
        }
        app.update();

        let rects = enemy_rects(&mut app);
        assert_eq!(rects.len(), 3);
        for rect in &rects {
            assert_eq!(rect.size(), (15, 15));
        }
    }

    #[test]
    fn toolkit_types_convert_at_the_boundary() {
        let mut app = App::new();
        app.add_plugins(PfEntitySpawnPlugin::new(SpawnConfig {
            seed: Some(21),
            ..Default::default()
        }));
        app.insert_resource(PlayArea::from(IVec2::new(45, 45)));
        // Everything but the centre 15×15 cell is covered.
        app.world_mut().spawn(Footprint::from(IRect::new(0, 0, 45, 15)));
        app.world_mut().spawn(Footprint::from(IRect::new(0, 30, 45, 45)));
        app.world_mut().spawn(Footprint::from(IRect::new(0, 15, 15, 30)));
        app.world_mut().spawn(Footprint::from(IRect::new(30, 15, 45, 30)));
        app.world_mut().send_event(SpawnEnemy);
        app.update();

        assert_eq!(app.world().resource::<PlayArea>().0, Bounds::new(45, 45));
        assert_eq!(enemy_rects(&mut app), vec![Rect::new(15, 15, 15, 15)]);
    }

    #[test]
    fn no_requests_spawns_nothing() {
        let mut app = seeded_app(Bounds::new(800, 600));
        app.update();
        assert!(enemy_rects(&mut app).is_empty());
    }
}
