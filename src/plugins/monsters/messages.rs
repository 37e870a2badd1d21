//! Buffered spawn requests, produced by spawner triggers and consumed by the
//! monster allocator.

use bevy::prelude::*;

#[derive(Message, Clone, Copy, Debug)]
pub struct SpawnMonsterRequest {
    pub origin: Vec2,
    pub velocity: Vec2,
    pub max_hp: i32,
    /// Goal sensor the leased monster runs toward and finishes at.
    pub goal: Entity,
}
