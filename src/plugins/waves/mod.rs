//! Wave control: refills the enemy roster once it has been cleared.

use bevy::prelude::*;

use crate::common::geometry::HitBox;
use crate::common::state::SimSet;
use crate::common::tunables::Tunables;
use crate::plugins::enemies::{spawn_enemy, EnemyRoster};

/// Spreads initial gun reloads so a fresh wave does not fire in unison.
const RELOAD_STAGGER: f32 = 0.618_034;

#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct WaveControl {
    /// Waves spawned so far this game.
    pub wave: u32,
    /// Seconds to wait after a clear before the next wave.
    pub intermission: f32,
}

impl WaveControl {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn next_wave_size(&self, tunables: &Tunables) -> u32 {
        (tunables.wave_base_size + self.wave).min(tunables.wave_max_size)
    }

    pub fn next_wave_health(&self, tunables: &Tunables) -> i32 {
        tunables.enemy_health + (self.wave / 3) as i32
    }
}

pub fn plugin(app: &mut App) {
    app.init_resource::<WaveControl>()
        .add_systems(FixedUpdate, spawn_waves.in_set(SimSet::Waves));
}

/// Centers for `count` enemies in one evenly spaced row along the top of `area`.
pub fn formation(count: u32, area: &HitBox, enemy_size: Vec2) -> Vec<Vec2> {
    let spacing = area.size().x / (count + 1) as f32;
    let y = area.top() - enemy_size.y;
    (1..=count)
        .map(|i| Vec2::new(area.left() + spacing * i as f32, y))
        .collect()
}

fn spawn_waves(
    mut commands: Commands,
    time: Res<Time>,
    tunables: Res<Tunables>,
    mut waves: ResMut<WaveControl>,
    mut roster: ResMut<EnemyRoster>,
) {
    if !roster.is_empty() {
        return;
    }
    if waves.intermission > 0.0 {
        waves.intermission = (waves.intermission - time.delta_secs()).max(0.0);
        return;
    }

    let count = waves.next_wave_size(&tunables);
    let hp = waves.next_wave_health(&tunables);
    let area = tunables.game_area();

    for (i, pos) in formation(count, &area, tunables.enemy_size).into_iter().enumerate() {
        let stagger = 0.5 + 0.5 * (i as f32 * RELOAD_STAGGER).fract();
        let reload = tunables.enemy_fire_interval * stagger;
        spawn_enemy(&mut commands, &mut roster, &tunables, pos, hp, reload);
    }

    waves.wave += 1;
    waves.intermission = tunables.wave_intermission;
    info!("wave {} spawned: {count} enemies, {hp} hp", waves.wave);
}
