mod common;

use bevy::prelude::*;
use tower_defense::common::state::GameState;
use tower_defense::common::tunables::Tunables;
use tower_defense::plugins::level::static_data::LevelData;
use tower_defense::plugins::monsters::pool::MonsterPool;
use tower_defense::plugins::projectiles::pool::ProjectilePool;

#[test]
fn boots_and_ticks() {
    let mut app = common::app_headless();

    for _ in 0..3 {
        app.update();
    }
}

#[test]
fn warm_up_completes_and_enters_play() {
    let mut app = common::app_headless();

    // Loading builds the level and pre-warms; a few frames later the
    // warm-up boundary passes and the state machine enters play.
    for _ in 0..5 {
        app.update();
    }

    let state = app.world().resource::<State<GameState>>();
    assert_eq!(*state.get(), GameState::InGame);

    let warm = app.world().resource::<Tunables>().warm_pool_size;
    let data = app.world().resource::<LevelData>();
    let (towers, spawners) = (data.towers.len(), data.spawners.len());

    // Every emitter got its warm share, and nothing was leased yet beyond
    // what the triggers produced on arming.
    let projectiles = app.world().resource::<ProjectilePool>();
    assert_eq!(projectiles.created(), warm * towers);

    let monsters = app.world().resource::<MonsterPool>();
    assert_eq!(monsters.created(), warm * spawners);
}
