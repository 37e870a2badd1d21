//! Spawn consumer: lease projectiles from the pool.
//!
//! # Fail-fast invariants
//! The pool free list contains only valid pooled projectile entities, so a
//! freed entity must match the pooled query. If that is violated we `expect()`
//! and crash loudly instead of branching around it in the hot loop.
//!
//! # Growth on demand
//! An empty free list is not a dropped request: the allocator creates exactly
//! one new entity for the lease. The spawn itself is deferred, so the fresh
//! entity is configured through command inserts and becomes observable,
//! fully leased, at the next sync point.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::common::tunables::Tunables;
use crate::plugins::pooling::LeaseState;

use super::components::{Guidance, Lifetime, PooledProjectile, Projectile};
use super::messages::{ProjectileKind, SpawnProjectileRequest};
use super::pool::{active_projectile_layers, spawn_inactive, ProjectilePool};

pub fn allocate_projectiles_from_pool(
    mut commands: Commands,
    tunables: Res<Tunables>,
    mut pool: ResMut<ProjectilePool>,
    mut reader: MessageReader<SpawnProjectileRequest>,
    mut q: Query<
        (
            &mut LeaseState,
            &mut Projectile,
            &mut Guidance,
            &mut Lifetime,
            &mut Transform,
            &mut LinearVelocity,
            &mut Visibility,
            &mut CollisionLayers,
        ),
        With<PooledProjectile>,
    >,
) {
    for req in reader.read() {
        let guidance = match req.kind {
            ProjectileKind::Guided => Guidance::Homing { target: req.target, speed: req.speed },
            ProjectileKind::Cannon => Guidance::None,
        };

        if let Some(e) = pool.pop_free() {
            let (mut state, mut proj, mut guide, mut life, mut tf, mut vel, mut vis, mut layers) =
                q.get_mut(e)
                    .expect("projectile pool free list held an entity missing its pooled bundle");

            *state = LeaseState::Active;
            proj.damage = req.damage;
            *guide = guidance;
            life.0 = Timer::from_seconds(tunables.projectile_lifetime_secs, TimerMode::Once);
            tf.translation = req.origin.extend(2.0);
            vel.0 = req.velocity;
            *vis = Visibility::Visible;
            *layers = active_projectile_layers();
        } else {
            let e = spawn_inactive(&mut commands);
            pool.note_created();

            commands.entity(e).insert((
                LeaseState::Active,
                Projectile { damage: req.damage },
                guidance,
                Lifetime(Timer::from_seconds(tunables.projectile_lifetime_secs, TimerMode::Once)),
                Transform::from_translation(req.origin.extend(2.0)),
                LinearVelocity(req.velocity),
                Visibility::Visible,
                active_projectile_layers(),
            ));
        }
    }
}
