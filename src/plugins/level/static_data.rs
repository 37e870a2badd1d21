//! Static per-level placement data.
//!
//! Read-only input to the level build: ordered tower and spawner
//! descriptors, immutable once inserted. A small demo layout ships as the
//! default; tests insert their own.

use bevy::prelude::*;

use crate::plugins::projectiles::messages::ProjectileKind;

#[derive(Debug, Clone, Copy)]
pub struct TowerPoint {
    pub position: Vec2,
    pub weapon: ProjectileKind,
    pub range: f32,
    pub shoot_interval: f32,
    pub projectile_speed: f32,
    pub projectile_damage: i32,
}

#[derive(Debug, Clone, Copy)]
pub struct SpawnerPoint {
    pub position: Vec2,
    pub interval: f32,
    pub move_target: Vec2,
    pub speed: f32,
    pub max_hp: i32,
}

#[derive(Resource, Debug, Clone)]
pub struct LevelData {
    pub towers: Vec<TowerPoint>,
    pub spawners: Vec<SpawnerPoint>,
}

impl Default for LevelData {
    /// Demo layout: two lanes crossing two towers' ranges.
    fn default() -> Self {
        Self {
            towers: vec![
                TowerPoint {
                    position: Vec2::new(-120.0, 60.0),
                    weapon: ProjectileKind::Guided,
                    range: 180.0,
                    shoot_interval: 1.2,
                    projectile_speed: 420.0,
                    projectile_damage: 2,
                },
                TowerPoint {
                    position: Vec2::new(140.0, -40.0),
                    weapon: ProjectileKind::Cannon,
                    range: 220.0,
                    shoot_interval: 2.0,
                    projectile_speed: 520.0,
                    projectile_damage: 3,
                },
            ],
            spawners: vec![
                SpawnerPoint {
                    position: Vec2::new(-480.0, 140.0),
                    interval: 3.0,
                    move_target: Vec2::new(480.0, 140.0),
                    speed: 70.0,
                    max_hp: 6,
                },
                SpawnerPoint {
                    position: Vec2::new(-480.0, -140.0),
                    interval: 4.5,
                    move_target: Vec2::new(480.0, -140.0),
                    speed: 90.0,
                    max_hp: 4,
                },
            ],
        }
    }
}
