//! Entity pooling shared by projectiles and monsters.
//!
//! A `Pool<M>` is a free-list resource over pre-spawned entities. Pooled
//! entities are never despawned mid-level; they cycle through `LeaseState`
//! instead, so the hot paths never cause archetype moves. The free list has
//! FIFO semantics: returns append at the back, leases pop the front.
//!
//! Mutation discipline:
//! - the kind's allocator system is the only caller of `pop_free`,
//! - the kind's return-commit system is the only caller of `push_free`
//!   (pre-warm during level build being the one boundary exception).
//! Producers never touch the pool; they enqueue intent as messages.

use std::collections::VecDeque;
use std::marker::PhantomData;

use bevy::prelude::*;

/// Lease lifecycle of a pooled entity.
///
/// `PendingReturn` decouples "the entity signalled release" from "the pool
/// reclaimed it": any number of release signals within a frame collapse into
/// a single return at the next commit pass.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LeaseState {
    #[default]
    Inactive,
    Active,
    PendingReturn,
}

/// Free-list pool for entities marked with `M`.
#[derive(Resource, Debug)]
pub struct Pool<M: Component> {
    free: VecDeque<Entity>,
    created: usize,
    _kind: PhantomData<fn() -> M>,
}

impl<M: Component> Default for Pool<M> {
    fn default() -> Self {
        Self { free: VecDeque::new(), created: 0, _kind: PhantomData }
    }
}

impl<M: Component> Pool<M> {
    /// Lease the entity that has been available longest, if any.
    pub fn pop_free(&mut self) -> Option<Entity> {
        self.free.pop_front()
    }

    /// Append a freshly created or returned entity to the available set.
    pub fn push_free(&mut self, entity: Entity) {
        self.free.push_back(entity);
    }

    /// Record one entity created on this pool's behalf.
    pub fn note_created(&mut self) {
        self.created += 1;
    }

    pub fn available(&self) -> usize {
        self.free.len()
    }

    /// Total entities ever created for this pool during the current level.
    /// Only grows while the level runs; equals the high-water mark of
    /// simultaneous leases plus the unused warm surplus.
    pub fn created(&self) -> usize {
        self.created
    }

    /// Discard the available set at level teardown. Leased entities are not
    /// the pool's to reclaim; level teardown despawns them separately.
    pub fn clear(&mut self) {
        self.free.clear();
        self.created = 0;
    }
}
