//! Buffered spawn requests.
//!
//! Producers (tower weapons) create *intent*; the allocator applies it
//! (pool pop + component writes). The queue between them keeps pool mutation
//! localized to a single system.

use bevy::prelude::*;

/// How a leased projectile travels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectileKind {
    /// Homes on the target entity until impact.
    Guided,
    /// Flies straight along a pre-computed intercept course.
    Cannon,
}

#[derive(Message, Clone, Copy, Debug)]
pub struct SpawnProjectileRequest {
    pub kind: ProjectileKind,
    pub origin: Vec2,
    pub velocity: Vec2,
    pub target: Entity,
    pub speed: f32,
    pub damage: i32,
}
