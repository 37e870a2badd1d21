//! Projectiles plugin: message-based producer → consumer spawning over a
//! data-driven pool.
//!
//! # Data flow
//! ```text
//!   Update (variable dt)
//! ┌──────────────────────────────────────────────────────────────┐
//! │ Producer: towers::fire::fire_tower_weapons                   │
//! │   - writes: SpawnProjectileRequest message                   │
//! │                                                              │
//! │ Consumer: allocator::allocate_projectiles_from_pool          │
//! │   - pops the pool free list (grows by one when empty)        │
//! │   - writes lease state, transform, velocity, guidance        │
//! └──────────────────────────────────────────────────────────────┘
//!   FixedUpdate / FixedPostUpdate (fixed dt)
//! ┌──────────────────────────────────────────────────────────────┐
//! │ guidance::steer_homing_projectiles  (re-aim at target)       │
//! │ guidance::expire_leased_projectiles (reclaim misses)         │
//! │ collision::process_projectile_hits  (damage + self-release)  │
//! │ commit::return_projectiles_to_pool  (reclaim PendingReturn)  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Producers never borrow the pool; they only enqueue intent. The allocator
//! is the single writer that mutates the free list, and the commit system is
//! the single owner of the inactive invariants.

pub mod allocator;
pub mod collision;
pub mod commit;
pub mod components;
pub mod guidance;
pub mod messages;
pub mod pool;

use avian2d::collision::narrow_phase::CollisionEventSystems;
use bevy::ecs::message::Messages;
use bevy::prelude::*;

use crate::common::state::GameState;

/// Maintain spawn request message buffers.
///
/// Messages are double-buffered; `update()` advances buffers.
fn update_spawn_messages(mut msgs: ResMut<Messages<messages::SpawnProjectileRequest>>) {
    msgs.update();
}

pub fn plugin(app: &mut App) {
    app.insert_resource(pool::ProjectilePool::default());

    app.init_resource::<Messages<messages::SpawnProjectileRequest>>();
    app.add_systems(PostUpdate, update_spawn_messages);

    app.add_systems(
        Update,
        allocator::allocate_projectiles_from_pool
            .after(crate::plugins::towers::fire::fire_tower_weapons)
            .run_if(in_state(GameState::InGame)),
    );

    app.add_systems(
        FixedUpdate,
        (guidance::steer_homing_projectiles, guidance::expire_leased_projectiles)
            .run_if(in_state(GameState::InGame)),
    );

    app.add_systems(
        FixedPostUpdate,
        collision::process_projectile_hits
            .after(CollisionEventSystems)
            .run_if(in_state(GameState::InGame)),
    )
    .add_systems(
        FixedPostUpdate,
        commit::return_projectiles_to_pool
            .after(collision::process_projectile_hits)
            .run_if(in_state(GameState::InGame)),
    );
}

#[cfg(test)]
mod tests;
