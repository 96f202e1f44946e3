//! Core domain: camera, world gravity, and other app-wide setup.

mod systems;

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::core::systems::{follow_runner, setup_camera};

/// Downward acceleration applied to every dynamic body.
pub const WORLD_GRAVITY: f32 = 30.0;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::srgb(0.08, 0.08, 0.12)))
            .insert_resource(Gravity(Vec2::NEG_Y * WORLD_GRAVITY))
            .add_systems(Startup, setup_camera)
            .add_systems(Update, follow_runner);
    }
}
