//! Projectiles plugin tests — **deterministic**.
//!
//! The full physics pipeline never runs here. Collision-driven behavior is
//! tested by **injecting `CollisionStart` messages directly** and running the
//! hit-processing system once; pool behavior is tested by writing spawn
//! request messages and running the allocator once.

use avian2d::prelude::*;
use bevy::{
    ecs::{message::Messages, world::CommandQueue},
    prelude::*,
};

use crate::common::layers::Layer;
use crate::common::test_utils::run_system_once;
use crate::common::tunables::Tunables;
use crate::plugins::monsters::components::{Health, PooledMonster};
use crate::plugins::pooling::LeaseState;

use super::{allocator, collision, commit, components, guidance, messages, pool};

// --------------------------------------------------------------------------------------
// Helpers
// --------------------------------------------------------------------------------------

/// Runs `f(commands)` against the world and applies the queued commands.
fn with_commands<T>(world: &mut World, f: impl FnOnce(&mut Commands) -> T) -> T {
    let mut queue = CommandQueue::default();
    let result = {
        let mut commands = Commands::new(&mut queue, world);
        f(&mut commands)
    };
    queue.apply(world);
    result
}

fn setup_world() -> World {
    let mut world = World::new();
    world.insert_resource(Tunables::default());
    world.insert_resource(pool::ProjectilePool::default());
    world.init_resource::<Messages<messages::SpawnProjectileRequest>>();
    world.init_resource::<Messages<CollisionStart>>();
    world
}

/// Pre-warm the pool with `n` inactive projectiles, returning their entities.
fn warm_pool(world: &mut World, n: usize) -> Vec<Entity> {
    let spawned = with_commands(world, |commands| {
        (0..n).map(|_| pool::spawn_inactive(commands)).collect::<Vec<_>>()
    });
    let mut pool_res = world.resource_mut::<pool::ProjectilePool>();
    for &e in &spawned {
        pool_res.note_created();
        pool_res.push_free(e);
    }
    spawned
}

fn request(target: Entity) -> messages::SpawnProjectileRequest {
    messages::SpawnProjectileRequest {
        kind: messages::ProjectileKind::Guided,
        origin: Vec2::new(10.0, 20.0),
        velocity: Vec2::new(100.0, 0.0),
        target,
        speed: 100.0,
        damage: 2,
    }
}

fn write_collision_start(
    world: &mut World,
    collider1: Entity,
    collider2: Entity,
    body1: Option<Entity>,
    body2: Option<Entity>,
) {
    world.write_message(CollisionStart { collider1, collider2, body1, body2 });
    world.resource_mut::<Messages<CollisionStart>>().update();
}

// --------------------------------------------------------------------------------------
// Allocator
// --------------------------------------------------------------------------------------

#[test]
fn allocator_leases_from_a_warm_pool_without_growth() {
    let mut world = setup_world();
    let warmed = warm_pool(&mut world, 1);
    let e = warmed[0];
    let target = world.spawn_empty().id();

    world.write_message(request(target));
    world.resource_mut::<Messages<messages::SpawnProjectileRequest>>().update();

    run_system_once(&mut world, allocator::allocate_projectiles_from_pool);

    assert_eq!(*world.get::<LeaseState>(e).unwrap(), LeaseState::Active);
    assert_eq!(world.get::<components::Projectile>(e).unwrap().damage, 2);
    assert_eq!(
        world.get::<Transform>(e).unwrap().translation.truncate(),
        Vec2::new(10.0, 20.0)
    );
    assert_eq!(world.get::<LinearVelocity>(e).unwrap().0, Vec2::new(100.0, 0.0));
    assert_eq!(*world.get::<Visibility>(e).unwrap(), Visibility::Visible);
    assert!(matches!(
        world.get::<components::Guidance>(e).unwrap(),
        components::Guidance::Homing { .. }
    ));

    // Active projectiles collide with monsters and world geometry.
    let layers = world.get::<CollisionLayers>(e).unwrap();
    assert!(layers.filters.has_all(Layer::Monster));
    assert!(layers.filters.has_all(Layer::World));

    let pool_res = world.resource::<pool::ProjectilePool>();
    assert_eq!(pool_res.available(), 0);
    assert_eq!(pool_res.created(), 1);
}

#[test]
fn allocator_grows_by_one_when_the_pool_is_empty() {
    let mut world = setup_world();
    let target = world.spawn_empty().id();

    world.write_message(request(target));
    world.resource_mut::<Messages<messages::SpawnProjectileRequest>>().update();

    run_system_once(&mut world, allocator::allocate_projectiles_from_pool);

    let pool_res = world.resource::<pool::ProjectilePool>();
    assert_eq!(pool_res.created(), 1);
    assert_eq!(pool_res.available(), 0);

    // The fresh entity is created and configured through deferred commands,
    // observable after the flush: exactly one pooled projectile, leased.
    let mut q = world.query::<(&components::PooledProjectile, &LeaseState, &Visibility)>();
    let leased: Vec<_> = q.iter(&world).collect();
    assert_eq!(leased.len(), 1);
    assert_eq!(*leased[0].1, LeaseState::Active);
    assert_eq!(*leased[0].2, Visibility::Visible);
}

#[test]
fn allocator_recycles_in_fifo_order() {
    let mut world = setup_world();
    let warmed = warm_pool(&mut world, 2);
    let target = world.spawn_empty().id();

    world.write_message(request(target));
    world.resource_mut::<Messages<messages::SpawnProjectileRequest>>().update();

    run_system_once(&mut world, allocator::allocate_projectiles_from_pool);

    // Oldest free entity goes out first.
    assert_eq!(*world.get::<LeaseState>(warmed[0]).unwrap(), LeaseState::Active);
    assert_eq!(*world.get::<LeaseState>(warmed[1]).unwrap(), LeaseState::Inactive);
}

// --------------------------------------------------------------------------------------
// Return commit
// --------------------------------------------------------------------------------------

#[test]
fn return_commit_restores_inactive_invariants_and_recycles() {
    let mut world = setup_world();
    let warmed = warm_pool(&mut world, 1);
    let e = warmed[0];
    let target = world.spawn_empty().id();

    world.write_message(request(target));
    world.resource_mut::<Messages<messages::SpawnProjectileRequest>>().update();
    run_system_once(&mut world, allocator::allocate_projectiles_from_pool);

    *world.get_mut::<LeaseState>(e).unwrap() = LeaseState::PendingReturn;
    run_system_once(&mut world, commit::return_projectiles_to_pool);

    assert_eq!(*world.get::<LeaseState>(e).unwrap(), LeaseState::Inactive);
    assert_eq!(*world.get::<Visibility>(e).unwrap(), Visibility::Hidden);
    assert_eq!(world.get::<LinearVelocity>(e).unwrap().0, Vec2::ZERO);
    assert!(matches!(
        world.get::<components::Guidance>(e).unwrap(),
        components::Guidance::None
    ));

    // Inactive projectiles collide with nothing.
    let layers = world.get::<CollisionLayers>(e).unwrap();
    assert!(layers.memberships.has_all(Layer::Projectile));
    assert!(!layers.filters.has_all(Layer::Monster));
    assert!(!layers.filters.has_all(Layer::World));

    assert_eq!(world.resource::<pool::ProjectilePool>().available(), 1);
}

// --------------------------------------------------------------------------------------
// Hit processing (inject CollisionStart messages)
// --------------------------------------------------------------------------------------

fn spawn_active_projectile(world: &mut World, damage: i32) -> Entity {
    world
        .spawn((
            components::PooledProjectile,
            LeaseState::Active,
            components::Projectile { damage },
            pool::active_projectile_layers(),
        ))
        .id()
}

#[test]
fn monster_hit_applies_damage_and_releases_the_projectile() {
    let mut world = setup_world();
    let projectile = spawn_active_projectile(&mut world, 3);
    let monster = world
        .spawn((
            PooledMonster,
            LeaseState::Active,
            Health { hp: 10, max: 10 },
            CollisionLayers::new(Layer::Monster, [Layer::Projectile]),
        ))
        .id();

    write_collision_start(&mut world, projectile, monster, Some(projectile), Some(monster));
    run_system_once(&mut world, collision::process_projectile_hits);

    assert_eq!(world.get::<Health>(monster).unwrap().hp, 7);
    assert_eq!(
        *world.get::<LeaseState>(projectile).unwrap(),
        LeaseState::PendingReturn
    );
}

#[test]
fn wall_hit_absorbs_the_projectile_without_damage() {
    let mut world = setup_world();
    let projectile = spawn_active_projectile(&mut world, 3);
    let wall = world
        .spawn(CollisionLayers::new(Layer::World, [Layer::Projectile]))
        .id();

    write_collision_start(&mut world, projectile, wall, Some(projectile), Some(wall));
    run_system_once(&mut world, collision::process_projectile_hits);

    assert_eq!(
        *world.get::<LeaseState>(projectile).unwrap(),
        LeaseState::PendingReturn
    );
}

#[test]
fn one_impact_per_projectile_per_frame() {
    let mut world = setup_world();
    let projectile = spawn_active_projectile(&mut world, 3);
    let monster_layers = CollisionLayers::new(Layer::Monster, [Layer::Projectile]);
    let m1 = world
        .spawn((PooledMonster, LeaseState::Active, Health { hp: 10, max: 10 }, monster_layers))
        .id();
    let m2 = world
        .spawn((PooledMonster, LeaseState::Active, Health { hp: 10, max: 10 }, monster_layers))
        .id();

    world.write_message(CollisionStart {
        collider1: projectile,
        collider2: m1,
        body1: Some(projectile),
        body2: Some(m1),
    });
    world.write_message(CollisionStart {
        collider1: projectile,
        collider2: m2,
        body1: Some(projectile),
        body2: Some(m2),
    });
    world.resource_mut::<Messages<CollisionStart>>().update();

    run_system_once(&mut world, collision::process_projectile_hits);

    // Only the first impact lands; the duplicate in the same frame is dropped.
    assert_eq!(world.get::<Health>(m1).unwrap().hp, 7);
    assert_eq!(world.get::<Health>(m2).unwrap().hp, 10);
}

// --------------------------------------------------------------------------------------
// Flight behavior
// --------------------------------------------------------------------------------------

#[test]
fn homing_steers_toward_a_live_target() {
    let mut world = setup_world();
    let target = world
        .spawn((PooledMonster, LeaseState::Active, Transform::from_xyz(0.0, 50.0, 1.0)))
        .id();
    let projectile = world
        .spawn((
            components::PooledProjectile,
            LeaseState::Active,
            components::Guidance::Homing { target, speed: 10.0 },
            Transform::from_xyz(0.0, 0.0, 2.0),
            LinearVelocity(Vec2::new(10.0, 0.0)),
        ))
        .id();

    run_system_once(&mut world, guidance::steer_homing_projectiles);

    let vel = world.get::<LinearVelocity>(projectile).unwrap().0;
    assert!((vel - Vec2::new(0.0, 10.0)).length() < 1e-4);
}

#[test]
fn homing_releases_the_shot_when_the_target_is_recycled() {
    let mut world = setup_world();
    // Target exists but went back to its pool: a stale engagement.
    let target = world
        .spawn((PooledMonster, LeaseState::Inactive, Transform::from_xyz(0.0, 50.0, 1.0)))
        .id();
    let projectile = world
        .spawn((
            components::PooledProjectile,
            LeaseState::Active,
            components::Guidance::Homing { target, speed: 10.0 },
            Transform::from_xyz(0.0, 0.0, 2.0),
            LinearVelocity(Vec2::ZERO),
        ))
        .id();

    run_system_once(&mut world, guidance::steer_homing_projectiles);

    assert_eq!(
        *world.get::<LeaseState>(projectile).unwrap(),
        LeaseState::PendingReturn
    );
}

#[test]
fn lifetime_expiry_releases_a_missed_shot() {
    let mut world = setup_world();
    world.insert_resource(Time::<()>::default());
    let projectile = world
        .spawn((
            components::PooledProjectile,
            LeaseState::Active,
            components::Lifetime(Timer::from_seconds(1.0, TimerMode::Once)),
        ))
        .id();

    world
        .resource_mut::<Time>()
        .advance_by(std::time::Duration::from_millis(500));
    run_system_once(&mut world, guidance::expire_leased_projectiles);
    assert_eq!(*world.get::<LeaseState>(projectile).unwrap(), LeaseState::Active);

    world
        .resource_mut::<Time>()
        .advance_by(std::time::Duration::from_millis(600));
    run_system_once(&mut world, guidance::expire_leased_projectiles);
    assert_eq!(
        *world.get::<LeaseState>(projectile).unwrap(),
        LeaseState::PendingReturn
    );
}
