//! Course domain: tuning and streaming state resources.

use bevy::prelude::*;

use crate::course::CourseGenerator;

#[derive(Resource, Debug, Clone)]
pub struct CourseTuning {
    /// Fixed seed for a reproducible course; random when `None`.
    pub seed: Option<u64>,
    /// Length of the first, gap-free stretch ahead of the spawn point.
    pub opening_runway: f32,
    /// Height of the walkable surface.
    pub ground_top: f32,
    pub ground_thickness: f32,
    pub length_min: f32,
    pub length_max: f32,
    pub gap_min: f32,
    pub gap_max: f32,
    /// How far ahead of the runner ground must exist.
    pub look_ahead: f32,
    /// Segments ending further than this behind the runner are despawned.
    pub clean_up_behind: f32,
}

impl Default for CourseTuning {
    fn default() -> Self {
        Self {
            seed: None,
            opening_runway: 24.0,
            ground_top: -1.5,
            ground_thickness: 1.0,
            length_min: 6.0,
            length_max: 18.0,
            gap_min: 1.5,
            gap_max: 3.5,
            look_ahead: 40.0,
            clean_up_behind: 30.0,
        }
    }
}

/// The generator for the course currently laid out. `None` until the first
/// segment is needed, and again after a restart.
#[derive(Resource, Debug, Default)]
pub struct ActiveCourse {
    pub generator: Option<CourseGenerator>,
}
