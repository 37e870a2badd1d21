use bevy::prelude::*;

/// Marker for pool-managed projectile entities.
#[derive(Component)]
pub struct PooledProjectile;

/// Per-lease projectile payload.
#[derive(Component, Debug, Clone, Copy)]
pub struct Projectile {
    pub damage: i32,
}

/// Steering behavior for the current lease.
///
/// Always present on pooled projectiles (reset to `None` on return) so that
/// switching behavior never moves the entity between archetypes.
#[derive(Component, Debug, Clone, Copy, Default)]
pub enum Guidance {
    #[default]
    None,
    /// Re-aim velocity at the target every fixed tick.
    Homing { target: Entity, speed: f32 },
}

/// Reclaim deadline for shots that never hit anything.
///
/// Applies to every lease, homing shots included: a guided projectile whose
/// target keeps outrunning it would otherwise hold its lease forever, so the
/// deadline deliberately bounds both kinds rather than cannon misses alone.
#[derive(Component, Deref, DerefMut)]
pub struct Lifetime(pub Timer);
