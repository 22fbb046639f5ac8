//! Player plugin.
//!
//! Pipeline:
//! - Update: sample the keyboard, write the `PlayerIntent` resource
//! - FixedUpdate (`SimSet::Player`): rotate, move forward, fire
//!
//! Firing does not touch the projectile collection directly; it writes a
//! `SpawnProjectileRequest` that the projectiles plugin consumes later in the
//! same tick.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::common::geometry::HitBox;
use crate::common::state::{GameState, SimSet};
use crate::common::tunables::Tunables;
use crate::plugins::actors::{actor, Body, Health, Lifecycle, Motion};
use crate::plugins::projectiles::{Faction, SpawnProjectileRequest};

const PLAYER_Z: f32 = 1.0;

#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Player;

#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct Ship {
    pub is_moving: bool,
    /// Seconds until the next shot is allowed.
    pub reload: f32,
}

impl Ship {
    #[inline]
    pub fn cool_down(&mut self, dt: f32) {
        self.reload = (self.reload - dt).max(0.0);
    }

    /// Fire if the cooldown has elapsed, restarting it.
    pub fn try_fire(&mut self, cooldown: f32) -> bool {
        if self.reload > 0.0 {
            return false;
        }
        self.reload = cooldown;
        true
    }
}

/// Handle of the current player, set when a game starts.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct PlayerEntity(pub Option<Entity>);

/// Input intents derived from the keyboard, applied on the next fixed tick.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct PlayerIntent {
    pub thrust: bool,
    /// Radians per simulated frame, + turns clockwise.
    pub rotate: f32,
    pub fire: bool,
}

pub fn plugin(app: &mut App) {
    app.init_resource::<PlayerEntity>()
        .init_resource::<PlayerIntent>()
        .add_systems(Update, gather_input.run_if(in_state(GameState::Running)))
        .add_systems(FixedUpdate, steer_player.in_set(SimSet::Player));
}

/// Spawn a fresh player at the canvas center.
pub fn spawn_player(commands: &mut Commands, tunables: &Tunables) -> Entity {
    commands
        .spawn((
            Name::new("Player"),
            Player,
            Ship::default(),
            actor(
                Vec2::ZERO,
                PLAYER_Z,
                tunables.player_size,
                Motion::new(0.0, tunables.player_speed),
                Color::srgb(0.2, 0.75, 0.9),
            ),
            Health { hp: tunables.player_health },
        ))
        .id()
}

fn gather_input(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    tunables: Res<Tunables>,
    mut intent: ResMut<PlayerIntent>,
) {
    let Some(keys) = keys else {
        return;
    };

    let mut rotate = 0.0;
    if keys.pressed(KeyCode::KeyA) {
        rotate -= tunables.player_turn_step;
    }
    if keys.pressed(KeyCode::KeyD) {
        rotate += tunables.player_turn_step;
    }

    *intent = PlayerIntent {
        thrust: keys.pressed(KeyCode::KeyW),
        rotate,
        fire: keys.pressed(KeyCode::Space),
    };
}

/// Advance along the heading, staying inside the game area.
fn move_forward(tf: &mut Transform, motion: &Motion, body: &Body, area: &HitBox, frames: f32) {
    let next = tf.translation.truncate() + motion.displacement(1.0, frames);
    let clamped = area.clamp_center(next, body.size);
    tf.translation.x = clamped.x;
    tf.translation.y = clamped.y;
}

fn steer_player(
    time: Res<Time>,
    tunables: Res<Tunables>,
    intent: Res<PlayerIntent>,
    player: Res<PlayerEntity>,
    mut q: Query<(&mut Transform, &mut Motion, &mut Ship, &Body, &Lifecycle), With<Player>>,
    mut writer: MessageWriter<SpawnProjectileRequest>,
) {
    let Some(e) = player.0 else {
        return;
    };
    let Ok((mut tf, mut motion, mut ship, body, life)) = q.get_mut(e) else {
        return;
    };
    if life.is_destroyed() {
        return;
    }

    let dt = time.delta_secs();
    let frames = tunables.frames(dt);

    if intent.rotate != 0.0 {
        motion.rotate(intent.rotate * frames);
        tf.rotation = motion.facing();
    }

    ship.is_moving = intent.thrust;
    if intent.thrust {
        move_forward(&mut tf, &motion, body, &tunables.game_area(), frames);
    }

    ship.cool_down(dt);
    if intent.fire && ship.try_fire(tunables.fire_cooldown) {
        let nose = (body.size.y + tunables.projectile_size.y) * 0.5;
        writer.write(SpawnProjectileRequest {
            faction: Faction::Friendly,
            pos: tf.translation.truncate() + motion.forward() * nose,
            angle: motion.angle,
            speed: tunables.projectile_speed,
            damage: tunables.projectile_damage,
        });
    }
}
