//! Combat resolution.
//!
//! Once per fixed tick, after every projectile has moved, each live projectile
//! scans its faction's targets:
//! - `Friendly`: the enemy roster, in insertion order,
//! - `Enemy`: the current player.
//!
//! The first overlapping live target takes the projectile's damage and the
//! projectile is destroyed, so a projectile hits at most one target per tick.
//! Nothing is removed from rosters here; the `Cleanup` set purges afterwards.

use bevy::prelude::*;

use crate::common::geometry::HitBox;
use crate::common::tunables::Tunables;
use crate::plugins::actors::{strike, Body, Health, Lifecycle};
use crate::plugins::enemies::EnemyRoster;
use crate::plugins::player::PlayerEntity;
use crate::plugins::session::Scoreboard;

use super::components::{Faction, Projectile};
use super::ProjectileRoster;

/// First candidate (in iteration order) whose box overlaps `probe`.
pub fn first_overlap(
    probe: &HitBox,
    candidates: impl IntoIterator<Item = (Entity, HitBox)>,
) -> Option<Entity> {
    candidates
        .into_iter()
        .find(|(_, hb)| probe.overlaps(hb))
        .map(|(e, _)| e)
}

pub fn resolve_projectile_collisions(
    tunables: Res<Tunables>,
    projectiles: Res<ProjectileRoster>,
    enemies: Res<EnemyRoster>,
    player: Res<PlayerEntity>,
    mut scoreboard: ResMut<Scoreboard>,
    mut q_projectiles: Query<(&Transform, &Body, &Projectile, &mut Lifecycle)>,
    // Disjoint from the projectile query: targets never carry `Projectile`.
    mut q_targets: Query<(&Transform, &Body, &mut Health, &mut Lifecycle), Without<Projectile>>,
) {
    for e in projectiles.iter() {
        let Ok((tf, body, projectile, mut life)) = q_projectiles.get_mut(e) else {
            continue;
        };
        if life.is_destroyed() {
            continue;
        }

        let probe = body.hitbox_at(tf);
        let live_hitbox = |target: Entity| -> Option<(Entity, HitBox)> {
            let (tf, body, _, target_life) = q_targets.get(target).ok()?;
            (!target_life.is_destroyed()).then(|| (target, body.hitbox_at(tf)))
        };

        let hit = match projectile.faction {
            Faction::Friendly => first_overlap(&probe, enemies.iter().filter_map(live_hitbox)),
            Faction::Enemy => first_overlap(&probe, player.0.into_iter().filter_map(live_hitbox)),
        };

        let Some(target) = hit else {
            continue;
        };
        let Ok((_, _, mut health, mut target_life)) = q_targets.get_mut(target) else {
            continue;
        };

        let killed = strike(&mut health, &mut target_life, projectile.damage);
        life.destroy();

        debug!("{:?} projectile {e:?} hit {target:?} (hp {})", projectile.faction, health.hp);

        if killed && projectile.faction == Faction::Friendly {
            scoreboard.score += tunables.enemy_points;
        }
    }
}
