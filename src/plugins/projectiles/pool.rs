use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::layers::Layer;
use crate::common::state::GameState;
use crate::plugins::pooling::{LeaseState, Pool};

use super::components::{Guidance, Lifetime, PooledProjectile, Projectile};

pub type ProjectilePool = Pool<PooledProjectile>;

#[inline]
pub fn active_projectile_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::Projectile, [Layer::Monster, Layer::World])
}

/// "Disabled" without structural changes: empty filters means the projectile
/// collides with nothing and therefore generates no collision events.
#[inline]
pub fn inactive_projectile_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::Projectile, [] as [Layer; 0])
}

/// Spawn one inactive pooled projectile.
///
/// The caller decides where the entity goes: onto the free list (pre-warm)
/// or straight into a lease (growth on demand). Either way the caller must
/// also call `note_created` on the pool.
pub fn spawn_inactive(commands: &mut Commands) -> Entity {
    commands
        .spawn((
            Name::new("Projectile(Pooled)"),
            PooledProjectile,
            LeaseState::Inactive,
            Projectile { damage: 0 },
            Guidance::None,
            Lifetime(Timer::from_seconds(1.0, TimerMode::Once)),
            Sprite {
                color: Color::srgb(1.0, 0.85, 0.3),
                custom_size: Some(Vec2::splat(8.0)),
                ..default()
            },
            Transform::from_xyz(0.0, 0.0, 2.0),
            Visibility::Hidden,
            (
                RigidBody::Kinematic,
                Collider::circle(4.0),
                Sensor,
                inactive_projectile_layers(),
                LinearVelocity(Vec2::ZERO),
                // Keep this always; inactive projectiles won't collide anyway
                // because their filters are empty.
                CollisionEventsEnabled,
            ),
            DespawnOnExit(GameState::InGame),
        ))
        .id()
}
