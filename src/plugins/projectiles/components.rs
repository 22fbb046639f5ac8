use bevy::prelude::*;

/// Which side fired a projectile. Fixed at spawn; selects the collision rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Faction {
    /// Fired by the player; scans the enemy roster.
    Friendly,
    /// Fired by an enemy; tests the player.
    Enemy,
}

impl Faction {
    /// Travel sense along the projectile's heading: friendly fire goes along the
    /// aim, enemy fire is launched with heading 0 and travels down.
    #[inline]
    pub fn travel_sign(self) -> f32 {
        match self {
            Self::Friendly => 1.0,
            Self::Enemy => -1.0,
        }
    }

    pub fn colour(self) -> Color {
        match self {
            Self::Friendly => Color::srgb_u8(0x06, 0x25, 0x69),
            Self::Enemy => Color::srgb(0.95, 0.35, 0.2),
        }
    }
}

#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Projectile {
    pub damage: i32,
    /// +1 or -1, see `Faction::travel_sign`.
    pub dir: f32,
    pub faction: Faction,
}

impl Projectile {
    pub fn new(faction: Faction, damage: i32) -> Self {
        Self {
            damage,
            dir: faction.travel_sign(),
            faction,
        }
    }
}
