//! Spawn consumer: turn requests into live projectiles.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::common::tunables::Tunables;
use crate::plugins::actors::{actor, Motion};

use super::components::Projectile;
use super::messages::SpawnProjectileRequest;
use super::ProjectileRoster;

/// Projectiles render above enemies and the player.
const PROJECTILE_Z: f32 = 2.0;

pub fn spawn_requested_projectiles(
    mut commands: Commands,
    tunables: Res<Tunables>,
    mut roster: ResMut<ProjectileRoster>,
    mut reader: MessageReader<SpawnProjectileRequest>,
) {
    for req in reader.read() {
        if req.damage <= 0 {
            debug!("dropping projectile request without damage: {req:?}");
            continue;
        }

        let e = commands
            .spawn((
                Name::new("Projectile"),
                actor(
                    req.pos,
                    PROJECTILE_Z,
                    tunables.projectile_size,
                    Motion::new(req.angle, req.speed),
                    req.faction.colour(),
                ),
                Projectile::new(req.faction, req.damage),
            ))
            .id();

        roster.add(e);
    }
}
