//! Range observer: report monsters entering a tower's trigger volume.
//!
//! Each tower owns a standalone sensor entity (`RangeSensor`) whose collider
//! spans the tower's range. Entries are read from avian's `CollisionStart`
//! messages; an entering *active* monster becomes the tower's engaged target
//! and latches the weapon gate. Anything else in the volume is a silent
//! no-op. Exits are not observed.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::plugins::monsters::components::PooledMonster;
use crate::plugins::pooling::LeaseState;
use crate::plugins::timers::GatedTrigger;

use super::components::{EngagedTarget, RangeSensor, Tower};

pub fn observe_range_entries(
    mut started: MessageReader<CollisionStart>,
    q_sensors: Query<&RangeSensor>,
    q_monsters: Query<&LeaseState, With<PooledMonster>>,
    mut q_towers: Query<(&mut EngagedTarget, &mut GatedTrigger), With<Tower>>,
) {
    for ev in started.read() {
        let s1 = q_sensors.contains(ev.collider1);
        let s2 = q_sensors.contains(ev.collider2);
        if !(s1 ^ s2) {
            continue; // must be exactly one range sensor
        }
        let (sensor_e, other) = if s1 {
            (ev.collider1, CollisionTarget { collider: ev.collider2, body: ev.body2 })
        } else {
            (ev.collider2, CollisionTarget { collider: ev.collider1, body: ev.body1 })
        };

        let monster = other.gameplay_owner();
        if !q_monsters.get(monster).is_ok_and(|s| *s == LeaseState::Active) {
            continue;
        }

        let Ok(sensor) = q_sensors.get(sensor_e) else {
            continue;
        };
        let Ok((mut engaged, mut trigger)) = q_towers.get_mut(sensor.tower) else {
            debug!("range sensor points at a missing tower, ignoring entry");
            continue;
        };

        engaged.0 = Some(monster);
        trigger.open_gate();
    }
}

#[derive(Clone, Copy)]
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
