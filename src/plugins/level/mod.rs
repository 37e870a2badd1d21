//! Level orchestration: build on load, arm when warm, tear down on exit.
//!
//! ```text
//! OnEnter(Loading)   build_level      instantiate towers/spawners/goals,
//!                                     pre-warm both pools (triggers stopped)
//! Update  (Loading)  finish_warm_up   once warm capacity is observable:
//!                                     arm every trigger, enter InGame
//! OnExit  (InGame)   teardown_level   stop triggers, clear pools;
//!                                     DespawnOnExit reclaims the entities
//! ```
//!
//! The Loading → InGame boundary is the ordering guarantee: no trigger can
//! fire before its pre-warmed capacity exists, because arming happens in the
//! same system that leaves `Loading`, after the pre-warm commands have been
//! applied.

pub mod static_data;

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;
use bevy_firefly::prelude::Occluder2d;

use crate::common::layers::Layer;
use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins::monsters::components::{Goal, MonsterSpawner, PooledMonster};
use crate::plugins::monsters::pool::{self as monster_pool, MonsterPool};
use crate::plugins::projectiles::pool::{self as projectile_pool, ProjectilePool};
use crate::plugins::projectiles::components::PooledProjectile;
use crate::plugins::timers::{GatedTrigger, PeriodicTrigger};
use crate::plugins::towers::components::{EngagedTarget, RangeSensor, Tower, Weapon};

use static_data::{LevelData, SpawnerPoint, TowerPoint};

pub fn plugin(app: &mut App) {
    app.init_resource::<LevelData>();

    app.add_systems(OnEnter(GameState::Loading), build_level);
    app.add_systems(Update, finish_warm_up.run_if(in_state(GameState::Loading)));
    app.add_systems(OnExit(GameState::InGame), teardown_level);
}

/// Translate static placement data into live entities and warm capacity.
pub fn build_level(
    mut commands: Commands,
    data: Res<LevelData>,
    tunables: Res<Tunables>,
    mut projectiles: ResMut<ProjectilePool>,
    mut monsters: ResMut<MonsterPool>,
) {
    for point in &data.towers {
        spawn_tower(&mut commands, point);
    }
    for point in &data.spawners {
        spawn_spawner(&mut commands, point);
    }

    // Pre-warm: every emitter gets its fixed share of entities created up
    // front, so an armed trigger always finds warm capacity.
    let warm = tunables.warm_pool_size;
    for _ in 0..warm * data.towers.len() {
        let e = projectile_pool::spawn_inactive(&mut commands);
        projectiles.note_created();
        projectiles.push_free(e);
    }
    for _ in 0..warm * data.spawners.len() {
        let e = monster_pool::spawn_inactive(&mut commands);
        monsters.note_created();
        monsters.push_free(e);
    }

    info!(
        towers = data.towers.len(),
        spawners = data.spawners.len(),
        "level built, warming pools"
    );
}

/// Warm-up boundary: arm triggers and enter play only once every pre-warmed
/// entity is observable in the world.
pub fn finish_warm_up(
    data: Res<LevelData>,
    tunables: Res<Tunables>,
    projectile_pool: Res<ProjectilePool>,
    monster_pool: Res<MonsterPool>,
    q_pooled: Query<(), Or<(With<PooledProjectile>, With<PooledMonster>)>>,
    mut q_gated: Query<&mut GatedTrigger>,
    mut q_plain: Query<&mut PeriodicTrigger>,
    mut next: ResMut<NextState<GameState>>,
) {
    let expected = tunables.warm_pool_size * (data.towers.len() + data.spawners.len());
    if projectile_pool.available() + monster_pool.available() < expected {
        return;
    }
    if q_pooled.iter().count() < expected {
        return;
    }

    for mut trigger in &mut q_gated {
        trigger.run();
    }
    for mut trigger in &mut q_plain {
        trigger.run();
    }
    next.set(GameState::InGame);
}

/// Reverse the load wiring: stop every trigger and drop pool availability.
/// Entity destruction is `DespawnOnExit`'s job.
pub fn teardown_level(
    mut projectile_pool: ResMut<ProjectilePool>,
    mut monster_pool: ResMut<MonsterPool>,
    mut q_gated: Query<&mut GatedTrigger>,
    mut q_plain: Query<&mut PeriodicTrigger>,
) {
    for mut trigger in &mut q_gated {
        trigger.stop();
    }
    for mut trigger in &mut q_plain {
        trigger.stop();
    }
    projectile_pool.clear();
    monster_pool.clear();

    info!("level torn down");
}

/// Instantiate a tower and its range sensor.
///
/// The sensor is a standalone entity (towers never move) linked back to the
/// tower it gates.
pub fn spawn_tower(commands: &mut Commands, point: &TowerPoint) -> Entity {
    let tower = commands
        .spawn((
            Name::new("Tower"),
            Tower,
            Weapon {
                kind: point.weapon,
                projectile_speed: point.projectile_speed,
                damage: point.projectile_damage,
            },
            EngagedTarget::default(),
            GatedTrigger::new(point.shoot_interval),
            Sprite {
                color: Color::srgb(0.2, 0.55, 0.9),
                custom_size: Some(Vec2::splat(28.0)),
                ..default()
            },
            Transform::from_translation(point.position.extend(1.0)),
            Occluder2d::circle(14.0),
            DespawnOnExit(GameState::InGame),
        ))
        .id();

    commands.spawn((
        Name::new("TowerRange"),
        RangeSensor { tower },
        Collider::circle(point.range),
        Sensor,
        CollisionLayers::new(Layer::TowerRange, [Layer::Monster]),
        CollisionEventsEnabled,
        Transform::from_translation(point.position.extend(0.5)),
        DespawnOnExit(GameState::InGame),
    ));

    tower
}

/// Instantiate a monster spawner and the goal sensor at its move target.
///
/// The goal entity is recorded on the spawner: leased monsters are bound to
/// it and ignore every other goal they might cross.
pub fn spawn_spawner(commands: &mut Commands, point: &SpawnerPoint) -> Entity {
    let goal = commands
        .spawn((
            Name::new("Goal"),
            Goal,
            Collider::circle(14.0),
            Sensor,
            CollisionLayers::new(Layer::Goal, [Layer::Monster]),
            CollisionEventsEnabled,
            Sprite {
                color: Color::srgb(0.3, 0.85, 0.5),
                custom_size: Some(Vec2::splat(20.0)),
                ..default()
            },
            Transform::from_translation(point.move_target.extend(0.5)),
            DespawnOnExit(GameState::InGame),
        ))
        .id();

    commands
        .spawn((
            Name::new("MonsterSpawner"),
            MonsterSpawner {
                goal,
                move_target: point.move_target,
                speed: point.speed,
                max_hp: point.max_hp,
            },
            PeriodicTrigger::new(point.interval),
            Sprite {
                color: Color::srgb(0.6, 0.3, 0.7),
                custom_size: Some(Vec2::splat(26.0)),
                ..default()
            },
            Transform::from_translation(point.position.extend(1.0)),
            DespawnOnExit(GameState::InGame),
        ))
        .id()
}
