//! Spawn producer: tick each spawner's periodic trigger and enqueue one
//! request per elapsed fire.
//!
//! This system intentionally does **not** access the monster pool.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::plugins::timers::PeriodicTrigger;

use super::components::MonsterSpawner;
use super::messages::SpawnMonsterRequest;

pub fn tick_spawners(
    time: Res<Time>,
    mut writer: MessageWriter<SpawnMonsterRequest>,
    mut q: Query<(&MonsterSpawner, &Transform, &mut PeriodicTrigger)>,
) {
    for (spawner, tf, mut trigger) in &mut q {
        let fires = trigger.tick(time.delta());
        if fires == 0 {
            continue;
        }

        let origin = tf.translation.truncate();
        let direction = (spawner.move_target - origin).normalize_or_zero();

        for _ in 0..fires {
            writer.write(SpawnMonsterRequest {
                origin,
                velocity: direction * spawner.speed,
                max_hp: spawner.max_hp,
                goal: spawner.goal,
            });
        }
    }
}
