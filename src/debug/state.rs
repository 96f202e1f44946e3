//! Debug domain: state for debug tooling.

use bevy::prelude::*;

/// Resource tracking debug mode state
#[derive(Resource, Debug)]
pub struct DebugState {
    /// Whether the ground probe box is drawn
    pub show_probe: bool,
    /// Number of restarts this session
    pub restarts: u32,
}

impl Default for DebugState {
    fn default() -> Self {
        Self {
            show_probe: true,
            restarts: 0,
        }
    }
}
