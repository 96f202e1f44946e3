//! Runner domain: the side-scrolling character controller.
//!
//! Every frame the runner moves forward, jumps while it has air charges left,
//! refills those charges when the ground probe touches ground, and swaps
//! between a standing and a sliding capsule while the slide key is held.

mod adapters;
mod animation;
mod bootstrap;
mod components;
mod controller;
mod resources;
mod systems;

pub use animation::{AnimatorParams, RunnerPose, RunnerVisual};
pub use bootstrap::RUNNER_SPAWN;
pub use components::{CapsuleShape, GameLayer, Runner, RunnerState};
pub use controller::RunnerController;
pub use resources::RunnerTuning;

use bevy::prelude::*;

use crate::runner::animation::drive_runner_pose;
use crate::runner::bootstrap::spawn_runner;
use crate::runner::systems::{activate_runners, sync_capsule_collider, tick_runners};

pub struct RunnerPlugin;

impl Plugin for RunnerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RunnerTuning>()
            .add_systems(Startup, spawn_runner)
            .add_systems(
                Update,
                (
                    activate_runners,
                    tick_runners,
                    sync_capsule_collider,
                    drive_runner_pose,
                )
                    .chain(),
            );
    }
}
