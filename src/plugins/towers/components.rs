use bevy::prelude::*;

use crate::plugins::projectiles::messages::ProjectileKind;

/// Marker for tower entities.
#[derive(Component)]
pub struct Tower;

/// Static weapon parameters, supplied once by the level orchestrator.
#[derive(Component, Debug, Clone, Copy)]
pub struct Weapon {
    pub kind: ProjectileKind,
    pub projectile_speed: f32,
    pub damage: i32,
}

/// The monster most recently reported inside the tower's range volume.
///
/// Entry-only: there is no "left range" event, so the reference may go stale.
/// The fire system re-validates it at fire time and drops it when invalid.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct EngagedTarget(pub Option<Entity>);

/// Links a range sensor entity back to the tower that owns it.
#[derive(Component, Debug, Clone, Copy)]
pub struct RangeSensor {
    pub tower: Entity,
}
