//! Physics plugin: avian configured for a top-down arena.
//!
//! Everything here is kinematic or static — monsters ride a constant lane
//! velocity, projectiles a straight or re-aimed one — so gravity is off and
//! the physics pipeline is consumed for collision events only. The length
//! unit maps the `Tunables` pixels-per-meter scale onto avian's internal
//! thresholds so sensor ranges given in pixels behave sanely.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::tunables::Tunables;

pub fn plugin(app: &mut App) {
    let ppm = app.world().resource::<Tunables>().pixels_per_meter;
    app.add_plugins(PhysicsPlugins::default().with_length_unit(ppm));
    app.insert_resource(Gravity(Vec2::ZERO));
}
