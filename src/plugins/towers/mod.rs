//! Towers plugin: engagement via range sensors and gated weapon fire.
//!
//! A tower never leases projectiles itself. The range observer latches the
//! weapon's gate when a monster enters the trigger volume; the fire system
//! ticks the gated trigger, validates the engaged target, and enqueues a
//! `SpawnProjectileRequest` for the projectile allocator to consume.

pub mod aim;
pub mod components;
pub mod fire;
pub mod range;

use avian2d::collision::narrow_phase::CollisionEventSystems;
use bevy::prelude::*;

use crate::common::state::GameState;

pub fn plugin(app: &mut App) {
    app.add_systems(
        Update,
        fire::fire_tower_weapons.run_if(in_state(GameState::InGame)),
    );

    app.add_systems(
        FixedPostUpdate,
        range::observe_range_entries
            .after(CollisionEventSystems)
            .run_if(in_state(GameState::InGame)),
    );
}
