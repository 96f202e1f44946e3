//! Runner domain: tuning resource.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::runner::GameLayer;

#[derive(Resource, Debug, Clone)]
pub struct RunnerTuning {
    /// Forward speed in world units per second.
    pub horizontal_speed: f32,
    /// Upward impulse applied on each jump.
    pub jump_impulse: f32,
    /// Jumps available between landings (0 disables jumping).
    pub max_air_charges: u8,
    pub jump_key: KeyCode,
    pub slide_key: KeyCode,
    /// Ground probe box center, relative to the runner's position.
    pub ground_probe_offset: Vec2,
    pub ground_probe_size: Vec2,
    pub ground_layers: LayerMask,
    /// Animator trigger fired on every jump.
    pub jump_trigger: String,
    /// Animator flag mirroring the slide state.
    pub slide_flag: String,
}

impl Default for RunnerTuning {
    fn default() -> Self {
        Self {
            horizontal_speed: 6.0,
            jump_impulse: 12.0,
            max_air_charges: 2,
            jump_key: KeyCode::Space,
            slide_key: KeyCode::ArrowDown,
            ground_probe_offset: Vec2::new(0.2, -1.45),
            ground_probe_size: Vec2::new(0.8, 0.2),
            ground_layers: GameLayer::Ground.into(),
            jump_trigger: "jump".to_string(),
            slide_flag: "slide".to_string(),
        }
    }
}

impl RunnerTuning {
    /// World-space center of the ground probe for a runner at `position`.
    pub fn ground_probe_center(&self, position: Vec3) -> Vec2 {
        position.truncate() + self.ground_probe_offset
    }
}
