//! Core plugin: shared resources, global settings, and the restart key.

use bevy::prelude::*;

use crate::common::state::GameState;
use crate::common::tunables::Tunables;

pub fn plugin(app: &mut App) {
    app.insert_resource(Tunables::default());
    app.insert_resource(ClearColor(Color::srgb(0.05, 0.05, 0.07)));

    app.add_systems(
        Update,
        restart_on_keypress.run_if(in_state(GameState::InGame)),
    );
}

/// R restarts the level: back through `Loading`, which rebuilds everything
/// from static data after the exit teardown runs.
///
/// Input is optional so the system is a no-op in headless worlds that never
/// register `ButtonInput`.
fn restart_on_keypress(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    mut next: ResMut<NextState<GameState>>,
) {
    let Some(keys) = keys else {
        return;
    };
    if keys.just_pressed(KeyCode::KeyR) {
        info!("restart requested");
        next.set(GameState::Loading);
    }
}
