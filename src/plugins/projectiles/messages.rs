//! Buffered spawn requests.
//!
//! Producers (player fire, enemy fire) only write intent; the spawn consumer is
//! the single writer of `ProjectileRoster`.

use bevy::prelude::*;

use super::components::Faction;

#[derive(Message, Clone, Copy, Debug)]
pub struct SpawnProjectileRequest {
    pub faction: Faction,
    /// Center point at spawn.
    pub pos: Vec2,
    pub angle: f32,
    pub speed: f32,
    pub damage: i32,
}
