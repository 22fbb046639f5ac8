//! Feature plugins.

use bevy::prelude::*;

use crate::plugins::projectiles::ProjectilesPlugin;

pub mod actors;
pub mod core;
pub mod enemies;
pub mod player;
pub mod projectiles;
pub mod session;
pub mod waves;

// Render-only
pub mod camera;

/// Register gameplay plugins that work in headless tests.
pub fn register_gameplay(app: &mut App) {
    core::plugin(app);
    actors::plugin(app);
    player::plugin(app);
    waves::plugin(app);
    enemies::plugin(app);
    session::plugin(app);
    app.add_plugins(ProjectilesPlugin);
}

/// Register render-only plugins (requires DefaultPlugins / render infra).
pub fn register_render(app: &mut App) {
    camera::plugin(app);
}
