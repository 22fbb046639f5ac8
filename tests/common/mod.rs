//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` provides core ECS runtime, `StatesPlugin` the state machine.
//! - we then call `canvas_shooter::game::configure_headless` to install gameplay plugins.
//!
//! The virtual clock is frozen (`ManualDuration(ZERO)`), so `app.update()` never
//! runs a fixed tick by itself. Tests drive the simulation with `tick`.

#![allow(dead_code)]

use std::time::Duration;

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;

use canvas_shooter::common::state::GameState;

pub fn app_headless() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::ZERO));

    canvas_shooter::game::configure_headless(&mut app);
    app
}

/// Request a state change and let the transition (and its OnEnter/OnExit
/// systems) run.
pub fn set_state(app: &mut App, state: GameState) {
    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(state);
    app.update();
}

pub fn current_state(app: &App) -> GameState {
    *app.world().resource::<State<GameState>>().get()
}

/// Run exactly one fixed simulation tick.
pub fn tick(app: &mut App) {
    app.world_mut().run_schedule(FixedUpdate);
}
