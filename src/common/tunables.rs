//! Tunable gameplay constants.
//!
//! Speeds are in pixels per simulated frame at `reference_fps`; durations are
//! in seconds.

use bevy::prelude::*;

use crate::common::geometry::HitBox;

#[derive(Resource, Debug, Clone)]
pub struct Tunables {
    pub canvas_size: Vec2,
    /// Share of the canvas height used by the playfield (the rest is GUI).
    pub game_area_fraction: f32,
    pub reference_fps: f32,
    pub max_frame_step: f32,

    pub player_size: Vec2,
    pub player_speed: f32,
    pub player_turn_step: f32,
    pub player_health: i32,
    pub fire_cooldown: f32,

    pub projectile_size: Vec2,
    pub projectile_speed: f32,
    pub projectile_damage: i32,

    pub enemy_size: Vec2,
    pub enemy_speed: f32,
    pub enemy_health: i32,
    pub enemy_fire_interval: f32,
    pub enemy_projectile_speed: f32,
    pub enemy_contact_damage: i32,
    pub enemy_points: u32,

    pub wave_base_size: u32,
    pub wave_max_size: u32,
    pub wave_intermission: f32,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            canvas_size: Vec2::new(800.0, 600.0),
            game_area_fraction: 0.75,
            reference_fps: 60.0,
            max_frame_step: 0.1,

            player_size: Vec2::splat(20.0),
            player_speed: 3.0,
            player_turn_step: 0.1,
            player_health: 3,
            fire_cooldown: 0.2,

            projectile_size: Vec2::new(2.0, 5.0),
            projectile_speed: 7.0,
            projectile_damage: 1,

            enemy_size: Vec2::splat(24.0),
            enemy_speed: 0.4,
            enemy_health: 3,
            enemy_fire_interval: 2.5,
            enemy_projectile_speed: 4.0,
            enemy_contact_damage: 3,
            enemy_points: 10,

            wave_base_size: 3,
            wave_max_size: 8,
            wave_intermission: 1.0,
        }
    }
}

impl Tunables {
    /// Playfield rectangle in world space.
    ///
    /// The canvas center is the origin and +Y points up, so the playfield spans
    /// the full width and the top `game_area_fraction` of the height.
    pub fn game_area(&self) -> HitBox {
        let half = self.canvas_size * 0.5;
        let bottom = half.y - self.canvas_size.y * self.game_area_fraction;
        HitBox {
            min: Vec2::new(-half.x, bottom),
            max: half,
        }
    }

    /// Simulated frames covered by `dt` seconds.
    #[inline]
    pub fn frames(&self, dt: f32) -> f32 {
        dt * self.reference_fps
    }
}
