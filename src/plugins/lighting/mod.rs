//! Lighting plugin (Firefly) (render-only).
//!
//! Each tower carries a point light so muzzle positions read against the
//! dark floor. Lights attach lazily in `Update` because towers are spawned
//! via commands during the level build.

use bevy::prelude::*;
use bevy_firefly::prelude::*;

use crate::plugins::towers::components::Tower;

#[derive(Component)]
pub struct TowerLight;

pub fn plugin(app: &mut App) {
    if !app.is_plugin_added::<FireflyPlugin>() {
        app.add_plugins(FireflyPlugin);
    }

    app.add_systems(Update, attach_tower_lights);
}

fn attach_tower_lights(
    mut commands: Commands,
    q_towers: Query<Entity, (With<Tower>, Without<TowerLight>)>,
) {
    for tower in &q_towers {
        commands.entity(tower).insert((
            TowerLight,
            PointLight2d {
                color: Color::srgb(1.0, 0.9, 0.75),
                radius: 260.0,
                ..default()
            },
        ));
    }
}
