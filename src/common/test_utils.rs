//! Test helpers.
//!
//! `run_system_once` executes a system against a bare `World` without building a
//! schedule, then flushes queued commands so spawns/despawns are visible to
//! assertions.

use std::time::Duration;

use bevy::ecs::system::{IntoSystem, RunSystemOnce};
use bevy::prelude::*;

use crate::common::tunables::Tunables;

/// Run a system once on the given world, then flush deferred commands.
/// Returns the system output.
pub fn run_system_once<T, Out, Marker>(world: &mut World, system: T) -> Out
where
    T: IntoSystem<(), Out, Marker>,
{
    let out = world.run_system_once(system).expect("system run failed");
    world.flush();
    out
}

/// A generic clock that has advanced by exactly `dt` seconds.
pub fn time_with_delta(dt: f32) -> Time {
    let mut t = Time::<()>::default();
    t.advance_by(Duration::from_secs_f32(dt));
    t
}

/// World with default `Tunables` and a clock advanced by one reference frame.
pub fn world_one_frame() -> World {
    let tunables = Tunables::default();
    let mut world = World::new();
    world.insert_resource(time_with_delta(1.0 / tunables.reference_fps));
    world.insert_resource(tunables);
    world
}
