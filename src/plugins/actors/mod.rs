//! Actors: the capability set shared by every moving, drawable, destructible
//! game object.
//!
//! An actor is composed from small components instead of a base type:
//! - `Transform` translation is the center point,
//! - `Motion` is the heading and speed,
//! - `Body` holds the fixed hitbox size,
//! - `Lifecycle` carries the destroyed flag.
//!
//! Owning collections (`EnemyRoster`, `ProjectileRoster`) keep insertion order and
//! purge destroyed members at the end of every fixed tick.

use bevy::prelude::*;

use crate::common::geometry::HitBox;
use crate::common::state::{GameState, SimSet};
use crate::plugins::enemies::EnemyRoster;
use crate::plugins::projectiles::ProjectileRoster;

pub mod roster;

pub use roster::Roster;

/// Marker shared by every gameplay entity (player, enemies, projectiles).
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Actor;

/// Heading and speed.
///
/// `angle` is in radians, clockwise from +Y (0 = up). `speed` is in pixels per
/// simulated frame.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct Motion {
    pub angle: f32,
    pub speed: f32,
}

impl Motion {
    pub fn new(angle: f32, speed: f32) -> Self {
        Self { angle, speed }
    }

    #[inline]
    pub fn forward(&self) -> Vec2 {
        Vec2::new(self.angle.sin(), self.angle.cos())
    }

    /// Offset covered in `frames` simulated frames; `dir` flips the travel sense.
    #[inline]
    pub fn displacement(&self, dir: f32, frames: f32) -> Vec2 {
        self.forward() * self.speed * dir * frames
    }

    pub fn rotate(&mut self, delta: f32) {
        self.angle = (self.angle + delta).rem_euclid(std::f32::consts::TAU);
    }

    /// Rotation that points a sprite's +Y along the heading. Hitboxes stay
    /// axis-aligned regardless.
    pub fn facing(&self) -> Quat {
        Quat::from_rotation_z(-self.angle)
    }
}

/// Fixed hitbox dimensions. The hitbox itself is always derived from the
/// current translation, never stored.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub size: Vec2,
}

impl Body {
    #[inline]
    pub fn hitbox(&self, center: Vec2) -> HitBox {
        HitBox::from_center(center, self.size)
    }

    #[inline]
    pub fn hitbox_at(&self, tf: &Transform) -> HitBox {
        self.hitbox(tf.translation.truncate())
    }
}

#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lifecycle {
    destroyed: bool,
}

impl Lifecycle {
    #[inline]
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Mark destroyed. Returns `true` only on the call that flipped the flag.
    pub fn destroy(&mut self) -> bool {
        !std::mem::replace(&mut self.destroyed, true)
    }
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health {
    pub hp: i32,
}

impl Health {
    #[inline]
    pub fn is_depleted(&self) -> bool {
        self.hp <= 0
    }

    pub fn apply_damage(&mut self, damage: i32) {
        self.hp -= damage;
    }
}

/// Apply `damage` to a live target and destroy it once its health runs out.
///
/// Returns `true` if this hit destroyed the target.
pub fn strike(health: &mut Health, life: &mut Lifecycle, damage: i32) -> bool {
    if life.is_destroyed() {
        return false;
    }
    health.apply_damage(damage);
    health.is_depleted() && life.destroy()
}

/// Components every actor spawns with. `Sprite` is the draw boundary and is
/// sized to the hitbox.
pub fn actor(center: Vec2, z: f32, size: Vec2, motion: Motion, color: Color) -> impl Bundle {
    (
        Actor,
        motion,
        Body { size },
        Lifecycle::default(),
        Sprite {
            color,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_translation(center.extend(z)),
        Visibility::default(),
    )
}

pub fn plugin(app: &mut App) {
    app.add_systems(
        FixedUpdate,
        (
            purge_destroyed::<EnemyRoster>,
            purge_destroyed::<ProjectileRoster>,
        )
            .in_set(SimSet::Cleanup),
    )
    .add_systems(OnExit(GameState::Running), hide_actors);
}

/// Drop destroyed (or already despawned) members from a roster and despawn them.
pub fn purge_destroyed<R>(mut commands: Commands, mut roster: ResMut<R>, q: Query<&Lifecycle>)
where
    R: Resource + std::ops::DerefMut<Target = Roster>,
{
    roster.retain(|e| match q.get(e) {
        Ok(life) if !life.is_destroyed() => true,
        Ok(_) => {
            commands.entity(e).despawn();
            false
        }
        Err(_) => {
            debug!("roster member {e:?} no longer exists");
            false
        }
    });
}

/// Nothing is drawn while the game is stopped.
fn hide_actors(mut q: Query<&mut Visibility, With<Actor>>) {
    for mut vis in &mut q {
        *vis = Visibility::Hidden;
    }
}
