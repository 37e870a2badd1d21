//! Collision layers.

use avian2d::prelude::*;

#[derive(PhysicsLayer, Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    #[default]
    Default,
    World,
    Monster,
    Projectile,
    /// Tower range sensors: entry of a monster engages the weapon.
    TowerRange,
    /// Spawner move-target sensors: arrival reclaims the monster.
    Goal,
}
