//! Global state machine.
//!
//! `Loading` builds the level from static data and pre-warms the pools;
//! `InGame` runs the emitters. Leaving `InGame` tears the level down.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, States, Default)]
pub enum GameState {
    #[default]
    Loading,
    InGame,
}
