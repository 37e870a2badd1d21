//! Projectile impact processing.
//!
//! Reads avian's `CollisionStart` messages, applies damage to monsters, and
//! flips the projectile to `PendingReturn`. Anything hit that carries no
//! health is a silent filter, not an error.

use avian2d::prelude::*;
use bevy::platform::collections::HashSet;
use bevy::prelude::*;

use crate::common::layers::Layer;
use crate::plugins::monsters::components::{Health, PooledMonster};
use crate::plugins::pooling::LeaseState;

use super::components::{PooledProjectile, Projectile};

#[derive(Clone, Copy, Debug)]
struct CollisionTarget {
    collider: Entity,
    body: Option<Entity>,
}

impl CollisionTarget {
    #[inline]
    fn gameplay_owner(self) -> Entity {
        self.body.unwrap_or(self.collider)
    }
}

#[inline]
fn targets(ev: &CollisionStart) -> (CollisionTarget, CollisionTarget) {
    (
        CollisionTarget { collider: ev.collider1, body: ev.body1 },
        CollisionTarget { collider: ev.collider2, body: ev.body2 },
    )
}

pub fn process_projectile_hits(
    mut started: MessageReader<CollisionStart>,
    // Fast "is this a pooled projectile?" check
    q_is_projectile: Query<(), With<PooledProjectile>>,
    mut q_projectiles: Query<
        (&Projectile, &mut LeaseState),
        (With<PooledProjectile>, Without<PooledMonster>),
    >,
    q_layers: Query<&CollisionLayers>,
    mut q_health: Query<&mut Health, With<PooledMonster>>,
    // Per-frame dedupe: one impact per projectile per frame.
    mut seen: Local<HashSet<Entity>>,
) {
    seen.clear();

    for ev in started.read() {
        let (t1, t2) = targets(ev);

        let p1 = q_is_projectile.contains(t1.collider);
        let p2 = q_is_projectile.contains(t2.collider);
        if !(p1 ^ p2) {
            continue; // must be exactly one projectile
        }
        let (projectile_side, other_side) = if p1 { (t1, t2) } else { (t2, t1) };

        if !seen.insert(projectile_side.collider) {
            continue;
        }

        let Ok(other_layers) = q_layers.get(other_side.collider) else {
            continue;
        };

        let Ok((projectile, mut state)) = q_projectiles.get_mut(projectile_side.collider) else {
            continue;
        };

        // Shouldn't happen with empty inactive filters, but safe.
        if *state != LeaseState::Active {
            continue;
        }

        if other_layers.memberships.has_all(Layer::Monster) {
            let monster = other_side.gameplay_owner();
            if let Ok(mut health) = q_health.get_mut(monster) {
                health.hp -= projectile.damage;
            }
            *state = LeaseState::PendingReturn;
            continue;
        }

        // World geometry absorbs the shot.
        if other_layers.memberships.has_all(Layer::World) {
            *state = LeaseState::PendingReturn;
        }
    }
}
