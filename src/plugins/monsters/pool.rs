use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::layers::Layer;
use crate::common::state::GameState;
use crate::plugins::pooling::{LeaseState, Pool};

use super::components::{AssignedGoal, Health, PooledMonster};

pub type MonsterPool = Pool<PooledMonster>;

#[inline]
pub fn active_monster_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::Monster, [Layer::Projectile, Layer::TowerRange, Layer::Goal])
}

/// "Disabled" without structural changes: empty filters collide with nothing.
#[inline]
pub fn inactive_monster_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::Monster, [] as [Layer; 0])
}

/// Spawn one inactive pooled monster.
///
/// The caller decides whether it lands on the free list (pre-warm) or goes
/// straight into a lease (growth), and must call `note_created` on the pool.
pub fn spawn_inactive(commands: &mut Commands) -> Entity {
    commands
        .spawn((
            Name::new("Monster(Pooled)"),
            PooledMonster,
            LeaseState::Inactive,
            Health { hp: 0, max: 0 },
            AssignedGoal::default(),
            Sprite {
                color: Color::srgb(0.9, 0.25, 0.25),
                custom_size: Some(Vec2::splat(24.0)),
                ..default()
            },
            Transform::from_xyz(0.0, 0.0, 1.0),
            Visibility::Hidden,
            (
                RigidBody::Kinematic,
                Collider::circle(12.0),
                inactive_monster_layers(),
                LinearVelocity(Vec2::ZERO),
                CollisionEventsEnabled,
            ),
            DespawnOnExit(GameState::InGame),
        ))
        .id()
}
