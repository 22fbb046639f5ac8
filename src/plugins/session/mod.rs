//! Session plugin: game start / game over transitions and the scoreboard.
//!
//! ```text
//!   Stopped --(Enter / menu start)--> Running      OnEnter: start_game
//!   Running --(player destroyed)----> Stopped      SimSet::Session: check_game_over
//! ```
//!
//! While `Stopped`, the fixed-step sets are skipped entirely and actors are
//! hidden, but the app keeps ticking so the menu layer stays interactive.
//!
//! The state change only lands on the next frame, while one frame may run
//! several fixed ticks. The simulation sets are therefore also gated on
//! [`player_alive`], and [`SimSet::Session`] on [`game_in_progress`], so no
//! tick after the one that destroyed the player simulates anything.

use bevy::prelude::*;

use crate::common::state::{GameState, SimSet};
use crate::common::tunables::Tunables;
use crate::plugins::actors::Lifecycle;
use crate::plugins::enemies::EnemyRoster;
use crate::plugins::player::{spawn_player, Player, PlayerEntity, PlayerIntent};
use crate::plugins::projectiles::ProjectileRoster;
use crate::plugins::waves::WaveControl;

#[derive(Resource, Debug, Default, Clone, PartialEq, Eq)]
pub struct Scoreboard {
    pub score: u32,
    pub best: u32,
    /// Set when the last game ended; drives the game-over menu.
    pub game_over: bool,
}

impl Scoreboard {
    pub fn begin(&mut self) {
        self.score = 0;
        self.game_over = false;
    }

    pub fn finish(&mut self) {
        self.best = self.best.max(self.score);
        self.game_over = true;
    }
}

pub fn plugin(app: &mut App) {
    app.init_resource::<Scoreboard>()
        .add_systems(Update, start_on_enter_key.run_if(in_state(GameState::Stopped)))
        .add_systems(OnEnter(GameState::Running), start_game)
        .add_systems(FixedUpdate, check_game_over.in_set(SimSet::Session));
}

fn start_on_enter_key(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    mut next: ResMut<NextState<GameState>>,
) {
    let Some(keys) = keys else {
        return;
    };
    if keys.just_pressed(KeyCode::Enter) {
        next.set(GameState::Running);
    }
}

/// Fresh player at the canvas center, every collection emptied.
pub fn start_game(
    mut commands: Commands,
    tunables: Res<Tunables>,
    mut player: ResMut<PlayerEntity>,
    mut intent: ResMut<PlayerIntent>,
    mut enemies: ResMut<EnemyRoster>,
    mut projectiles: ResMut<ProjectileRoster>,
    mut waves: ResMut<WaveControl>,
    mut scoreboard: ResMut<Scoreboard>,
) {
    if let Some(old) = player.0.take() {
        commands.entity(old).despawn();
    }
    player.0 = Some(spawn_player(&mut commands, &tunables));
    *intent = PlayerIntent::default();

    enemies.reset(&mut commands);
    projectiles.reset(&mut commands);
    waves.reset();
    scoreboard.begin();

    info!("game started");
}

/// Run condition: the player exists and has not been destroyed.
pub fn player_alive(player: Res<PlayerEntity>, q: Query<&Lifecycle, With<Player>>) -> bool {
    player
        .0
        .and_then(|e| q.get(e).ok())
        .is_some_and(|life| !life.is_destroyed())
}

/// Run condition: the current game has not been flagged as over yet.
pub fn game_in_progress(scoreboard: Res<Scoreboard>) -> bool {
    !scoreboard.game_over
}

fn check_game_over(
    player: Res<PlayerEntity>,
    q: Query<&Lifecycle, With<Player>>,
    mut scoreboard: ResMut<Scoreboard>,
    mut next: ResMut<NextState<GameState>>,
) {
    if scoreboard.game_over {
        return;
    }
    let Some(e) = player.0 else {
        return;
    };
    let Ok(life) = q.get(e) else {
        return;
    };
    if !life.is_destroyed() {
        return;
    }

    scoreboard.finish();
    next.set(GameState::Stopped);
    info!("game over: score {} (best {})", scoreboard.score, scoreboard.best);
}

#[cfg(test)]
mod tests;
