//! Return commit: recycle projectiles back into the pool.
//!
//! This system is the owner of the *inactive invariants*. Inactive
//! projectiles must be:
//! - hidden
//! - velocity = 0
//! - guidance-free
//! - colliding with nothing (filters empty)
//!
//! Centralizing these writes here prevents inconsistencies.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::plugins::pooling::LeaseState;

use super::components::{Guidance, PooledProjectile};
use super::pool::{inactive_projectile_layers, ProjectilePool};

pub fn return_projectiles_to_pool(
    mut pool: ResMut<ProjectilePool>,
    mut q: Query<
        (
            Entity,
            &mut LeaseState,
            &mut Guidance,
            &mut Visibility,
            &mut LinearVelocity,
            &mut CollisionLayers,
        ),
        With<PooledProjectile>,
    >,
) {
    for (e, mut state, mut guidance, mut vis, mut vel, mut layers) in &mut q {
        if *state != LeaseState::PendingReturn {
            continue;
        }

        *state = LeaseState::Inactive;
        *guidance = Guidance::None;
        *vis = Visibility::Hidden;
        vel.0 = Vec2::ZERO;
        *layers = inactive_projectile_layers();

        pool.push_free(e);
    }
}
