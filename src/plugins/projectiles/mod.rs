//! Projectiles plugin: message-based spawning, straight-line travel and combat
//! resolution.
//!
//! # Data flow (one fixed tick)
//! ```text
//!   SimSet::Player / SimSet::Enemies
//!     producers write SpawnProjectileRequest (player fire, enemy fire)
//!                 │
//!                 v
//!   SimSet::Projectiles (chained)
//!     (A) spawn_requested_projectiles   request -> entity, appended to ProjectileRoster
//!     (B) advance_projectiles           move along heading, destroy on leaving the area
//!     (C) resolve_projectile_collisions first overlapping target takes damage,
//!                                       projectile destroyed
//!                 │
//!                 v
//!   SimSet::Cleanup
//!     purge_destroyed::<ProjectileRoster> despawns what (B)/(C) destroyed
//! ```
//!
//! A projectile destroyed in (C) still completed its own scan this tick and is
//! gone before the frame is drawn.

pub mod collision;
pub mod components;
pub mod messages;
pub mod spawn;

use bevy::prelude::*;

use crate::common::state::SimSet;
use crate::common::tunables::Tunables;
use crate::plugins::actors::{Body, Lifecycle, Motion, Roster};

pub use components::{Faction, Projectile};
pub use messages::SpawnProjectileRequest;

/// Live projectiles in spawn order.
#[derive(Resource, Debug, Default, Deref, DerefMut)]
pub struct ProjectileRoster(pub Roster);

pub struct ProjectilesPlugin;

impl Plugin for ProjectilesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ProjectileRoster>()
            .add_message::<SpawnProjectileRequest>();

        app.add_systems(
            FixedUpdate,
            (
                spawn::spawn_requested_projectiles,
                advance_projectiles,
                collision::resolve_projectile_collisions,
            )
                .chain()
                .in_set(SimSet::Projectiles),
        );
    }
}

/// Move every live projectile; projectiles that leave the game area are destroyed.
pub fn advance_projectiles(
    time: Res<Time>,
    tunables: Res<Tunables>,
    roster: Res<ProjectileRoster>,
    mut q: Query<(&mut Transform, &Motion, &Body, &Projectile, &mut Lifecycle)>,
) {
    let frames = tunables.frames(time.delta_secs());
    let area = tunables.game_area();

    for e in roster.iter() {
        let Ok((mut tf, motion, body, projectile, mut life)) = q.get_mut(e) else {
            continue;
        };
        if life.is_destroyed() {
            continue;
        }

        tf.translation += motion.displacement(projectile.dir, frames).extend(0.0);

        if !area.overlaps(&body.hitbox_at(&tf)) {
            life.destroy();
        }
    }
}
