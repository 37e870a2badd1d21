//! Return commit: recycle monsters back into the pool.
//!
//! Single owner of the inactive invariants: hidden, velocity = 0, no
//! assigned goal, empty collision filters.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::plugins::pooling::LeaseState;

use super::components::{AssignedGoal, PooledMonster};
use super::pool::{inactive_monster_layers, MonsterPool};

pub fn return_monsters_to_pool(
    mut pool: ResMut<MonsterPool>,
    mut q: Query<
        (
            Entity,
            &mut LeaseState,
            &mut AssignedGoal,
            &mut Visibility,
            &mut LinearVelocity,
            &mut CollisionLayers,
        ),
        With<PooledMonster>,
    >,
) {
    for (e, mut state, mut goal, mut vis, mut vel, mut layers) in &mut q {
        if *state != LeaseState::PendingReturn {
            continue;
        }

        *state = LeaseState::Inactive;
        goal.0 = None;
        *vis = Visibility::Hidden;
        vel.0 = Vec2::ZERO;
        *layers = inactive_monster_layers();

        pool.push_free(e);
    }
}
