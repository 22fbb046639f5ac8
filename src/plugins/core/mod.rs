//! Core plugin: shared resources and clock settings.
//!
//! The simulation runs in `FixedUpdate` at the reference frame rate. Long
//! stalls (e.g. an inactive window) are bounded by clamping the virtual clock's
//! per-frame delta to `Tunables::max_frame_step`.

use std::time::Duration;

use bevy::prelude::*;

use crate::common::tunables::Tunables;

pub fn plugin(app: &mut App) {
    app.init_resource::<Tunables>();
    let tunables = app.world().resource::<Tunables>().clone();

    app.insert_resource(ClearColor(Color::srgb(0.05, 0.05, 0.07)));
    app.insert_resource(Time::<Fixed>::from_hz(tunables.reference_fps as f64));
    app.add_systems(Startup, clamp_frame_step);
}

fn clamp_frame_step(tunables: Res<Tunables>, mut time: ResMut<Time<Virtual>>) {
    time.set_max_delta(Duration::from_secs_f32(tunables.max_frame_step));
}
