//! Tunable gameplay constants.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct Tunables {
    pub pixels_per_meter: f32,
    /// Pooled entities pre-created per emitter before its trigger is armed.
    pub warm_pool_size: usize,
    /// Reclaim deadline for shots that never hit anything.
    pub projectile_lifetime_secs: f32,
}

impl Default for Tunables {
    fn default() -> Self {
        Self { pixels_per_meter: 20.0, warm_pool_size: 5, projectile_lifetime_secs: 6.0 }
    }
}
