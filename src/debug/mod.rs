//! Debug tooling for fast iteration, only built with the `dev-tools` feature.
//!
//! Features:
//! - Draw the ground probe box (F1 toggles)
//! - Restart the run with a fresh course (Ctrl+R)

mod state;
mod systems;

pub use state::DebugState;

use bevy::prelude::*;

use crate::debug::systems::{draw_ground_probe, handle_debug_hotkeys};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Update, handle_debug_hotkeys)
            .add_systems(
                Update,
                draw_ground_probe.run_if(|state: Res<DebugState>| state.show_probe),
            );
    }
}
