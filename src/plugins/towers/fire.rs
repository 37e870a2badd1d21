//! Gated fire producer.
//!
//! Ticks each tower's gated trigger and, when a fire elapses, re-validates
//! the engaged target before enqueueing a projectile request. A target that
//! died, was recycled, or despawned since engagement costs the shot and
//! drops the engagement — the gate stays closed until the next range entry.
//!
//! This system intentionally does **not** access the projectile pool.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::plugins::monsters::components::{Health, PooledMonster};
use crate::plugins::pooling::LeaseState;
use crate::plugins::timers::GatedTrigger;

use super::aim;
use super::components::{EngagedTarget, Tower, Weapon};
use crate::plugins::projectiles::messages::{ProjectileKind, SpawnProjectileRequest};

pub fn fire_tower_weapons(
    time: Res<Time>,
    mut writer: MessageWriter<SpawnProjectileRequest>,
    mut q_towers: Query<
        (&Weapon, &Transform, &mut EngagedTarget, &mut GatedTrigger),
        (With<Tower>, Without<PooledMonster>),
    >,
    q_targets: Query<
        (&Transform, &LinearVelocity, &Health, &LeaseState),
        (With<PooledMonster>, Without<Tower>),
    >,
) {
    for (weapon, tower_tf, mut engaged, mut trigger) in &mut q_towers {
        if !trigger.tick(time.delta()) {
            continue;
        }

        let Some(target) = engaged.0 else {
            continue;
        };
        let Ok((target_tf, target_vel, health, state)) = q_targets.get(target) else {
            engaged.0 = None;
            continue;
        };
        if *state != LeaseState::Active || health.is_dead() {
            engaged.0 = None;
            continue;
        }

        let origin = tower_tf.translation.truncate();
        let target_pos = target_tf.translation.truncate();

        let velocity = match weapon.kind {
            ProjectileKind::Guided => {
                Some((target_pos - origin).normalize_or_zero() * weapon.projectile_speed)
            }
            ProjectileKind::Cannon => {
                aim::intercept_point(origin, target_pos, target_vel.0, weapon.projectile_speed)
                    .map(|point| (point - origin).normalize_or_zero() * weapon.projectile_speed)
            }
        };
        let Some(velocity) = velocity else {
            // Unsolvable intercept: the shot is spent, not deferred.
            debug!("cannon intercept unsolvable, dropping the shot");
            continue;
        };

        writer.write(SpawnProjectileRequest {
            kind: weapon.kind,
            origin,
            velocity,
            target,
            speed: weapon.projectile_speed,
            damage: weapon.damage,
        });
    }
}
