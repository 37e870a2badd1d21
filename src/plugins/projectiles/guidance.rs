//! Per-lease flight behavior: homing steering and miss reclaim.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::plugins::monsters::components::PooledMonster;
use crate::plugins::pooling::LeaseState;

use super::components::{Guidance, Lifetime, PooledProjectile};

/// Re-aim homing projectiles at their target every fixed tick.
///
/// A target that despawned or went back to its pool releases the shot: the
/// projectile flips itself to `PendingReturn` and the commit pass reclaims it.
pub fn steer_homing_projectiles(
    mut q_projectiles: Query<
        (&mut LeaseState, &Guidance, &Transform, &mut LinearVelocity),
        (With<PooledProjectile>, Without<PooledMonster>),
    >,
    q_targets: Query<(&Transform, &LeaseState), (With<PooledMonster>, Without<PooledProjectile>)>,
) {
    for (mut state, guidance, tf, mut vel) in &mut q_projectiles {
        if *state != LeaseState::Active {
            continue;
        }
        let Guidance::Homing { target, speed } = *guidance else {
            continue;
        };

        match q_targets.get(target) {
            Ok((target_tf, LeaseState::Active)) => {
                let dir = target_tf.translation.truncate() - tf.translation.truncate();
                if dir.length_squared() > 1e-6 {
                    vel.0 = dir.normalize() * speed;
                }
            }
            _ => *state = LeaseState::PendingReturn,
        }
    }
}

/// Reclaim leased projectiles whose lifetime ran out without a hit.
pub fn expire_leased_projectiles(
    time: Res<Time>,
    mut q: Query<(&mut LeaseState, &mut Lifetime), With<PooledProjectile>>,
) {
    for (mut state, mut lifetime) in &mut q {
        if *state != LeaseState::Active {
            continue;
        }
        lifetime.tick(time.delta());
        if lifetime.is_finished() {
            *state = LeaseState::PendingReturn;
        }
    }
}
