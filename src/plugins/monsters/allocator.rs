//! Spawn consumer: lease monsters from the pool, growing by one on demand.
//!
//! Mirrors the projectile allocator: pooled entities are configured through
//! the query (fail-fast on a broken free list), growth entities through
//! command inserts applied at the next sync point.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::plugins::pooling::LeaseState;

use super::components::{AssignedGoal, Health, PooledMonster};
use super::messages::SpawnMonsterRequest;
use super::pool::{active_monster_layers, spawn_inactive, MonsterPool};

pub fn allocate_monsters_from_pool(
    mut commands: Commands,
    mut pool: ResMut<MonsterPool>,
    mut reader: MessageReader<SpawnMonsterRequest>,
    mut q: Query<
        (
            &mut LeaseState,
            &mut Health,
            &mut AssignedGoal,
            &mut Transform,
            &mut LinearVelocity,
            &mut Visibility,
            &mut CollisionLayers,
        ),
        With<PooledMonster>,
    >,
) {
    for req in reader.read() {
        if let Some(e) = pool.pop_free() {
            let (mut state, mut health, mut goal, mut tf, mut vel, mut vis, mut layers) = q
                .get_mut(e)
                .expect("monster pool free list held an entity missing its pooled bundle");

            *state = LeaseState::Active;
            *health = Health { hp: req.max_hp, max: req.max_hp };
            goal.0 = Some(req.goal);
            tf.translation = req.origin.extend(1.0);
            vel.0 = req.velocity;
            *vis = Visibility::Visible;
            *layers = active_monster_layers();
        } else {
            let e = spawn_inactive(&mut commands);
            pool.note_created();

            commands.entity(e).insert((
                LeaseState::Active,
                Health { hp: req.max_hp, max: req.max_hp },
                AssignedGoal(Some(req.goal)),
                Transform::from_translation(req.origin.extend(1.0)),
                LinearVelocity(req.velocity),
                Visibility::Visible,
                active_monster_layers(),
            ));
        }
    }
}
