//! Monsters plugin: periodic pooled emission, lane movement toward a goal,
//! and the monster side of the lease lifecycle.
//!
//! Same producer → queue → consumer shape as the projectiles plugin:
//! `spawner::tick_spawners` writes `SpawnMonsterRequest` messages, the
//! allocator leases from (or grows) the monster pool, and the commit system
//! reclaims everything that flipped to `PendingReturn` this frame — whether
//! by reaching the goal or by dying to projectile damage.

pub mod allocator;
pub mod commit;
pub mod components;
pub mod lifecycle;
pub mod messages;
pub mod pool;
pub mod spawner;

use avian2d::collision::narrow_phase::CollisionEventSystems;
use bevy::ecs::message::Messages;
use bevy::prelude::*;

use crate::common::state::GameState;
use crate::plugins::projectiles::collision::process_projectile_hits;

/// Maintain spawn request message buffers.
fn update_spawn_messages(mut msgs: ResMut<Messages<messages::SpawnMonsterRequest>>) {
    msgs.update();
}

pub fn plugin(app: &mut App) {
    app.insert_resource(pool::MonsterPool::default());

    app.init_resource::<Messages<messages::SpawnMonsterRequest>>();
    app.add_systems(PostUpdate, update_spawn_messages);

    app.add_systems(
        Update,
        (
            spawner::tick_spawners,
            allocator::allocate_monsters_from_pool.after(spawner::tick_spawners),
        )
            .run_if(in_state(GameState::InGame)),
    );

    // Fixed lifecycle:
    // - goal arrival reads fresh CollisionStart messages,
    // - death runs after projectile damage has been applied,
    // - the commit pass reclaims both in one place.
    app.add_systems(
        FixedPostUpdate,
        lifecycle::reclaim_arrived_monsters
            .after(CollisionEventSystems)
            .run_if(in_state(GameState::InGame)),
    );

    app.add_systems(
        FixedPostUpdate,
        lifecycle::reclaim_dead_monsters
            .after(process_projectile_hits)
            .run_if(in_state(GameState::InGame)),
    );

    app.add_systems(
        FixedPostUpdate,
        commit::return_monsters_to_pool
            .after(lifecycle::reclaim_arrived_monsters)
            .after(lifecycle::reclaim_dead_monsters)
            .run_if(in_state(GameState::InGame)),
    );
}
