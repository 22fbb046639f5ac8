//! Game composition root.
//!
//! Provides two public configuration functions:
//! - `configure_full`: includes DefaultPlugins (window/render) + game plugins.
//! - `configure_headless`: minimal configuration for integration tests.
//!
//! The frame loop itself is Bevy's: every frame advances the virtual clock
//! (clamped), runs as many fixed simulation ticks as have accumulated, then
//! renders. One fixed tick runs the sim sets in this order:
//!
//! ```text
//!   Player -> Waves -> Enemies -> Projectiles -> Cleanup -> Session
//! ```
//!
//! and only while `GameState::Running`.

use bevy::prelude::*;
use bevy::window::WindowResolution;

use crate::common::state::{GameState, SimSet};
use crate::common::tunables::Tunables;
use crate::plugins;
use crate::plugins::session::{game_in_progress, player_alive};

pub fn run() {
    App::new().add_plugins(configure_full).run();
}

/// Full configuration for `cargo run`.
pub fn configure_full(app: &mut App) {
    let canvas = Tunables::default().canvas_size;

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Canvas Shooter".into(),
            resolution: WindowResolution::new(canvas.x as u32, canvas.y as u32),
            resizable: false,
            ..default()
        }),
        ..default()
    }));

    configure_game(app);
    plugins::register_render(app);
}

/// Headless configuration for integration tests.
///
/// Notes:
/// - Do NOT add DefaultPlugins.
/// - Do NOT add render-only plugins (camera).
pub fn configure_headless(app: &mut App) {
    configure_game(app);
}

/// Configuration shared by both full and headless apps.
fn configure_game(app: &mut App) {
    app.init_state::<GameState>();
    app.configure_sets(
        FixedUpdate,
        (
            SimSet::Player,
            SimSet::Waves,
            SimSet::Enemies,
            SimSet::Projectiles,
            SimSet::Cleanup,
        )
            .chain()
            .run_if(in_state(GameState::Running))
            .run_if(player_alive),
    );
    app.configure_sets(
        FixedUpdate,
        SimSet::Session
            .after(SimSet::Cleanup)
            .run_if(in_state(GameState::Running))
            .run_if(game_in_progress),
    );
    plugins::register_gameplay(app);
}
