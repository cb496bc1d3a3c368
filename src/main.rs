use std::path::Path;
use std::process::ExitCode;

use bevy::log::LogPlugin;
use bevy::math::{IRect, IVec2};
use bevy::prelude::*;
use pf_entity_spawn::{
    load_config, EnemySpawnFailed, EnemySpawned, Footprint, PfEntitySpawnPlugin, PlayArea,
    SpawnConfig, SpawnEnemy,
};

const FIELD_WIDTH: i32 = 800;
const FIELD_HEIGHT: i32 = 600;
const DEFAULT_ENEMY_COUNT: usize = 25;

const OBSTACLE_SIZE: i32 = 30;

/// Top-left corners of the obstacles every run starts with.
const OBSTACLES: [(i32, i32); 3] = [(100, 100), (150, 150), (200, 200)];

/// Headless placement run.
///
/// Usage: `placefield [CONFIG.ron] [ENEMY_COUNT]`
fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);

    let config = match args.next() {
        Some(path) => match load_config(Path::new(&path)) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load spawn config {}: {}", path, e);
                return ExitCode::FAILURE;
            }
        },
        None => SpawnConfig::default(),
    };

    let enemy_count = match args.next().map(|s| s.parse::<usize>()) {
        Some(Ok(count)) => count,
        Some(Err(e)) => {
            eprintln!("Invalid enemy count: {}", e);
            return ExitCode::FAILURE;
        }
        None => DEFAULT_ENEMY_COUNT,
    };

    let mut app = App::new();
    app.add_plugins((MinimalPlugins, LogPlugin::default()))
        .add_plugins(PfEntitySpawnPlugin::new(config))
        .insert_resource(PlayArea::from(IVec2::new(FIELD_WIDTH, FIELD_HEIGHT)))
        .insert_resource(EnemyRequests(enemy_count))
        .add_systems(Startup, (spawn_obstacles, request_enemies))
        .add_systems(PostUpdate, report_spawns);

    app.finish();
    app.cleanup();
    app.update();

    ExitCode::SUCCESS
}

/// Number of enemies to request on startup.
#[derive(Resource)]
struct EnemyRequests(usize);

fn spawn_obstacles(mut commands: Commands) {
    for (x, y) in OBSTACLES {
        let rect = IRect::new(x, y, x + OBSTACLE_SIZE, y + OBSTACLE_SIZE);
        commands.spawn(Footprint::from(rect));
    }
}

fn request_enemies(count: Res<EnemyRequests>, mut requests: EventWriter<SpawnEnemy>) {
    for _ in 0..count.0 {
        requests.send(SpawnEnemy);
    }
}

fn report_spawns(
    mut spawned: EventReader<EnemySpawned>,
    mut failed: EventReader<EnemySpawnFailed>,
) {
    let placed = spawned.read().count();
    let failures: Vec<_> = failed.read().map(|f| f.error.to_string()).collect();

    info!(
        "Placed {} enemies in {}x{} field ({} failed)",
        placed,
        FIELD_WIDTH,
        FIELD_HEIGHT,
        failures.len()
    );
    for failure in failures {
        warn!("  {}", failure);
    }
}
