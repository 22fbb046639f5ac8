//! Enemies plugin: the enemy collection and its per-tick update.
//!
//! Each fixed tick (`SimSet::Enemies`, chained):
//! 1. `advance_enemies` drifts every live enemy down; enemies that leave the
//!    game area are destroyed,
//! 2. `enemy_contact` lets a live enemy touching the player damage it (the enemy
//!    is destroyed by the contact),
//! 3. `enemy_fire` counts down each gun and requests an enemy projectile.
//!
//! Damage from friendly fire is applied later in the tick by projectile
//! collision resolution. Destroyed enemies stay in `EnemyRoster` until the
//! `Cleanup` set purges them.

use std::f32::consts::PI;

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::common::state::SimSet;
use crate::common::tunables::Tunables;
use crate::plugins::actors::{actor, strike, Body, Health, Lifecycle, Motion, Roster};
use crate::plugins::player::{Player, PlayerEntity};
use crate::plugins::projectiles::{Faction, SpawnProjectileRequest};

const ENEMY_Z: f32 = 1.0;

#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Enemy;

/// Seconds until the enemy fires again.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct EnemyGun {
    pub reload: f32,
}

impl EnemyGun {
    /// Count down by `dt`; `true` once the gun is ready.
    #[inline]
    pub fn tick(&mut self, dt: f32) -> bool {
        self.reload = (self.reload - dt).max(0.0);
        self.reload <= 0.0
    }
}

/// Live enemies in spawn order.
#[derive(Resource, Debug, Default, Deref, DerefMut)]
pub struct EnemyRoster(pub Roster);

pub fn plugin(app: &mut App) {
    app.init_resource::<EnemyRoster>().add_systems(
        FixedUpdate,
        (advance_enemies, enemy_contact, enemy_fire)
            .chain()
            .in_set(SimSet::Enemies),
    );
}

/// Spawn one enemy and append it to the roster.
pub fn spawn_enemy(
    commands: &mut Commands,
    roster: &mut EnemyRoster,
    tunables: &Tunables,
    pos: Vec2,
    hp: i32,
    reload: f32,
) -> Entity {
    let e = commands
        .spawn((
            Name::new("Enemy"),
            Enemy,
            actor(
                pos,
                ENEMY_Z,
                tunables.enemy_size,
                Motion::new(PI, tunables.enemy_speed),
                Color::srgb(0.9, 0.25, 0.25),
            ),
            Health { hp },
            EnemyGun { reload },
        ))
        .id();
    roster.add(e);
    e
}

fn advance_enemies(
    time: Res<Time>,
    tunables: Res<Tunables>,
    roster: Res<EnemyRoster>,
    mut q: Query<(&mut Transform, &Motion, &Body, &mut Lifecycle), With<Enemy>>,
) {
    let frames = tunables.frames(time.delta_secs());
    let area = tunables.game_area();

    for e in roster.iter() {
        let Ok((mut tf, motion, body, mut life)) = q.get_mut(e) else {
            continue;
        };
        if life.is_destroyed() {
            continue;
        }

        tf.translation += motion.displacement(1.0, frames).extend(0.0);

        if !area.overlaps(&body.hitbox_at(&tf)) {
            life.destroy();
        }
    }
}

fn enemy_contact(
    tunables: Res<Tunables>,
    roster: Res<EnemyRoster>,
    player: Res<PlayerEntity>,
    mut q_enemies: Query<(&Transform, &Body, &mut Lifecycle), (With<Enemy>, Without<Player>)>,
    mut q_player: Query<(&Transform, &Body, &mut Health, &mut Lifecycle), (With<Player>, Without<Enemy>)>,
) {
    let Some(player_e) = player.0 else {
        return;
    };
    let Ok((player_tf, player_body, mut player_hp, mut player_life)) = q_player.get_mut(player_e) else {
        return;
    };
    let player_box = player_body.hitbox_at(player_tf);

    for e in roster.iter() {
        if player_life.is_destroyed() {
            break;
        }
        let Ok((tf, body, mut life)) = q_enemies.get_mut(e) else {
            continue;
        };
        if life.is_destroyed() || !body.hitbox_at(tf).overlaps(&player_box) {
            continue;
        }

        life.destroy();
        strike(&mut player_hp, &mut player_life, tunables.enemy_contact_damage);
        debug!("enemy {e:?} rammed the player (hp {})", player_hp.hp);
    }
}

fn enemy_fire(
    time: Res<Time>,
    tunables: Res<Tunables>,
    roster: Res<EnemyRoster>,
    mut q: Query<(&Transform, &Body, &mut EnemyGun, &Lifecycle), With<Enemy>>,
    mut writer: MessageWriter<SpawnProjectileRequest>,
) {
    let dt = time.delta_secs();

    for e in roster.iter() {
        let Ok((tf, body, mut gun, life)) = q.get_mut(e) else {
            continue;
        };
        if life.is_destroyed() || !gun.tick(dt) {
            continue;
        }
        gun.reload = tunables.enemy_fire_interval;

        // Launch just below the enemy's hitbox.
        let offset = (body.size.y + tunables.projectile_size.y) * 0.5;
        writer.write(SpawnProjectileRequest {
            faction: Faction::Enemy,
            pos: tf.translation.truncate() - Vec2::Y * offset,
            angle: 0.0,
            speed: tunables.enemy_projectile_speed,
            damage: tunables.projectile_damage,
        });
    }
}
