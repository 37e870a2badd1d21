use bevy::prelude::*;

/// Marker for pool-managed monster entities.
#[derive(Component)]
pub struct PooledMonster;

/// Gameplay truth: remaining hit points of a leased monster.
#[derive(Component, Debug, Clone, Copy)]
pub struct Health {
    pub hp: i32,
    pub max: i32,
}

impl Health {
    #[inline]
    pub fn is_dead(&self) -> bool {
        self.hp <= 0
    }
}

/// Periodic monster emitter, placed by the level orchestrator.
///
/// Static parameters only; the per-spawn state (position, velocity, health)
/// is written by the allocator when a monster is leased.
#[derive(Component, Debug, Clone, Copy)]
pub struct MonsterSpawner {
    /// This spawner's goal sensor entity. Leased monsters finish only here.
    pub goal: Entity,
    pub move_target: Vec2,
    pub speed: f32,
    pub max_hp: i32,
}

/// The goal sensor a leased monster is bound to.
///
/// Always present on pooled monsters (reset to `None` on return) so that
/// assignment never moves the entity between archetypes. Arrival at any
/// other goal sensor is ignored.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct AssignedGoal(pub Option<Entity>);

/// Marker for a spawner's move-target sensor. Monsters touching it are done.
#[derive(Component, Debug, Clone, Copy)]
pub struct Goal;
