//! Global state machine and fixed-step ordering.

use bevy::prelude::*;

/// Top-level game state.
///
/// While `Stopped`, the app keeps ticking (menu/GUI stays live) but no
/// gameplay system runs.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, States, Default)]
pub enum GameState {
    #[default]
    Stopped,
    Running,
}

/// Per-tick simulation phases, chained in declaration order in `FixedUpdate`.
/// Everything up to `Cleanup` needs a live player; `Session` runs after it
/// until the game is flagged over.
#[derive(SystemSet, Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum SimSet {
    Player,
    Waves,
    Enemies,
    Projectiles,
    /// Purge destroyed roster members. Runs after every update and collision.
    Cleanup,
    Session,
}
