mod common;

use bevy::prelude::*;
use canvas_shooter::common::state::GameState;
use canvas_shooter::plugins::actors::{Health, Lifecycle};
use canvas_shooter::plugins::enemies::EnemyRoster;
use canvas_shooter::plugins::player::PlayerIntent;
use canvas_shooter::plugins::projectiles::{Faction, ProjectileRoster, SpawnProjectileRequest};
use canvas_shooter::plugins::session::Scoreboard;

use common::{app_headless, set_state, tick};

fn running_with_first_wave() -> App {
    let mut app = app_headless();
    app.update();
    set_state(&mut app, GameState::Running);
    tick(&mut app);
    app
}

fn fire_at(app: &mut App, pos: Vec2) {
    app.world_mut().write_message(SpawnProjectileRequest {
        faction: Faction::Friendly,
        pos,
        angle: 0.0,
        speed: 7.0,
        damage: 1,
    });
}

#[test]
fn friendly_projectile_damages_enemy_and_is_purged_same_tick() {
    let mut app = running_with_first_wave();
    let enemy = app.world().resource::<EnemyRoster>().iter().next().expect("wave spawned");
    let pos = app.world().get::<Transform>(enemy).unwrap().translation.truncate();

    fire_at(&mut app, pos);
    tick(&mut app);

    assert_eq!(app.world().get::<Health>(enemy).unwrap().hp, 2);
    assert!(app.world().resource::<ProjectileRoster>().is_empty());
}

#[test]
fn enemy_killed_by_fire_is_purged_and_scored() {
    let mut app = running_with_first_wave();
    let enemy = app.world().resource::<EnemyRoster>().iter().next().expect("wave spawned");
    let pos = app.world().get::<Transform>(enemy).unwrap().translation.truncate();

    for _ in 0..3 {
        fire_at(&mut app, pos);
        tick(&mut app);
    }

    assert!(app.world().get_entity(enemy).is_err());
    assert!(!app.world().resource::<EnemyRoster>().contains(enemy));
    assert_eq!(app.world().resource::<EnemyRoster>().len(), 2);
    assert!(app.world().resource::<Scoreboard>().score > 0);
}

#[test]
fn player_fire_adds_a_live_projectile() {
    let mut app = running_with_first_wave();
    app.world_mut().insert_resource(PlayerIntent { fire: true, ..default() });

    tick(&mut app);

    let roster = app.world().resource::<ProjectileRoster>();
    assert_eq!(roster.len(), 1);
    let p = roster.iter().next().unwrap();
    assert!(!app.world().get::<Lifecycle>(p).unwrap().is_destroyed());
}
