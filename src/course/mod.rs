//! Course domain: seeded ground layout streamed around the runner.

mod generator;
mod resources;
mod systems;
#[cfg(test)]
mod tests;

pub use generator::{CourseGenerator, GroundSegment};
pub use resources::{ActiveCourse, CourseTuning};
pub use systems::CourseSegment;

use bevy::prelude::*;

use crate::course::systems::{clean_up_course, stream_course};

pub struct CoursePlugin;

impl Plugin for CoursePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CourseTuning>()
            .init_resource::<ActiveCourse>()
            .add_systems(Update, (stream_course, clean_up_course).chain());
    }
}
