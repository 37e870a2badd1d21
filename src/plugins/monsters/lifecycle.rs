//! Leased-monster release rules.
//!
//! A monster signals its own release in two ways: by reaching a goal sensor
//! or by running out of health. Both paths only flip `LeaseState`; the
//! commit pass is the one that touches the pool.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::plugins::pooling::LeaseState;

use super::components::{AssignedGoal, Goal, Health, PooledMonster};

/// Goal arrival: a monster entering *its own* move-target sensor is done
/// with its run. A contact with any other spawner's goal (lanes may cross)
/// is ignored. Velocity is zeroed immediately so the body stops at the goal
/// rather than drifting until the commit pass.
pub fn reclaim_arrived_monsters(
    mut started: MessageReader<CollisionStart>,
    q_is_goal: Query<(), With<Goal>>,
    mut q_monsters: Query<
        (&AssignedGoal, &mut LeaseState, &mut LinearVelocity),
        With<PooledMonster>,
    >,
) {
    for ev in started.read() {
        for (goal, other) in [(ev.collider1, ev.collider2), (ev.collider2, ev.collider1)] {
            if !q_is_goal.contains(goal) {
                continue;
            }
            let Ok((assigned, mut state, mut vel)) = q_monsters.get_mut(other) else {
                continue;
            };
            if *state != LeaseState::Active {
                continue;
            }
            if assigned.0 != Some(goal) {
                continue;
            }
            vel.0 = Vec2::ZERO;
            *state = LeaseState::PendingReturn;
        }
    }
}

/// Death: damage is applied elsewhere (projectile impacts); this system
/// owns the "out of health" transition.
pub fn reclaim_dead_monsters(
    mut q: Query<(&Health, &mut LeaseState), With<PooledMonster>>,
) {
    for (health, mut state) in &mut q {
        if *state == LeaseState::Active && health.is_dead() {
            *state = LeaseState::PendingReturn;
        }
    }
}
