use bevy::prelude::*;

use super::*;
use crate::common::test_utils::run_system_once;
use crate::plugins::actors::Health;

fn session_world() -> World {
    let mut world = World::new();
    world.insert_resource(Tunables::default());
    world.init_resource::<PlayerEntity>();
    world.init_resource::<PlayerIntent>();
    world.init_resource::<EnemyRoster>();
    world.init_resource::<ProjectileRoster>();
    world.init_resource::<WaveControl>();
    world.init_resource::<Scoreboard>();
    world.init_resource::<NextState<GameState>>();
    world
}

#[test]
fn scoreboard_keeps_best_across_games() {
    let mut board = Scoreboard::default();
    board.score = 40;
    board.finish();
    assert!(board.game_over);
    assert_eq!(board.best, 40);

    board.begin();
    assert_eq!(board.score, 0);
    assert!(!board.game_over);

    board.score = 10;
    board.finish();
    assert_eq!(board.best, 40);
}

#[test]
fn start_game_spawns_player_and_resets_collections() {
    let mut world = session_world();

    let stale: Vec<Entity> = (0..5).map(|_| world.spawn_empty().id()).collect();
    for &e in &stale {
        world.resource_mut::<EnemyRoster>().add(e);
    }
    let shot = world.spawn_empty().id();
    world.resource_mut::<ProjectileRoster>().add(shot);
    let old_player = world.spawn_empty().id();
    world.insert_resource(PlayerEntity(Some(old_player)));
    world.insert_resource(WaveControl { wave: 4, intermission: 0.3 });
    world.insert_resource(Scoreboard { score: 90, best: 90, game_over: true });
    world.insert_resource(PlayerIntent { fire: true, ..default() });

    run_system_once(&mut world, start_game);

    assert!(world.resource::<EnemyRoster>().is_empty());
    assert!(world.resource::<ProjectileRoster>().is_empty());
    for e in stale.into_iter().chain([shot, old_player]) {
        assert!(world.get_entity(e).is_err());
    }

    let player = world.resource::<PlayerEntity>().0.expect("player spawned");
    assert!(world.get::<Player>(player).is_some());
    assert_eq!(world.get::<Transform>(player).unwrap().translation.truncate(), Vec2::ZERO);
    assert_eq!(world.get::<Health>(player).unwrap().hp, Tunables::default().player_health);

    assert_eq!(*world.resource::<WaveControl>(), WaveControl::default());
    let board = world.resource::<Scoreboard>();
    assert_eq!(board.score, 0);
    assert_eq!(board.best, 90);
    assert!(!board.game_over);
    assert_eq!(*world.resource::<PlayerIntent>(), PlayerIntent::default());
}

#[test]
fn live_player_keeps_the_game_running() {
    let mut world = session_world();
    let e = world.spawn((Player, Lifecycle::default())).id();
    world.insert_resource(PlayerEntity(Some(e)));

    run_system_once(&mut world, check_game_over);

    assert!(!world.resource::<Scoreboard>().game_over);
    assert!(matches!(*world.resource::<NextState<GameState>>(), NextState::Unchanged));
}

#[test]
fn destroyed_player_ends_the_game() {
    let mut world = session_world();
    let mut life = Lifecycle::default();
    life.destroy();
    let e = world.spawn((Player, life)).id();
    world.insert_resource(PlayerEntity(Some(e)));
    world.resource_mut::<Scoreboard>().score = 30;

    run_system_once(&mut world, check_game_over);

    let board = world.resource::<Scoreboard>();
    assert!(board.game_over);
    assert_eq!(board.best, 30);
    assert!(matches!(
        *world.resource::<NextState<GameState>>(),
        NextState::Pending(GameState::Stopped)
    ));
}

#[test]
fn player_alive_tracks_the_player_lifecycle() {
    let mut world = session_world();
    assert!(!run_system_once(&mut world, player_alive));

    let e = world.spawn((Player, Lifecycle::default())).id();
    world.insert_resource(PlayerEntity(Some(e)));
    assert!(run_system_once(&mut world, player_alive));

    world.get_mut::<Lifecycle>(e).unwrap().destroy();
    assert!(!run_system_once(&mut world, player_alive));
}

#[test]
fn game_over_is_recorded_once() {
    let mut world = session_world();
    let mut life = Lifecycle::default();
    life.destroy();
    let e = world.spawn((Player, life)).id();
    world.insert_resource(PlayerEntity(Some(e)));
    world.resource_mut::<Scoreboard>().score = 30;

    assert!(run_system_once(&mut world, game_in_progress));
    run_system_once(&mut world, check_game_over);
    assert!(!run_system_once(&mut world, game_in_progress));

    // A later tick in the same frame must not fold a changed score into best.
    world.resource_mut::<Scoreboard>().score = 50;
    run_system_once(&mut world, check_game_over);
    assert_eq!(world.resource::<Scoreboard>().best, 30);
}

#[test]
fn enter_key_starts_the_game() {
    let mut world = session_world();
    world.init_resource::<ButtonInput<KeyCode>>();

    run_system_once(&mut world, start_on_enter_key);
    assert!(matches!(*world.resource::<NextState<GameState>>(), NextState::Unchanged));

    world.resource_mut::<ButtonInput<KeyCode>>().press(KeyCode::Enter);
    run_system_once(&mut world, start_on_enter_key);
    assert!(matches!(
        *world.resource::<NextState<GameState>>(),
        NextState::Pending(GameState::Running)
    ));
}

#[test]
fn missing_keyboard_leaves_state_alone() {
    let mut world = session_world();
    run_system_once(&mut world, start_on_enter_key);
    assert!(matches!(*world.resource::<NextState<GameState>>(), NextState::Unchanged));
}
