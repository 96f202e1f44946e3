//! Core domain: camera setup and tracking.

use bevy::prelude::*;

use crate::runner::Runner;

/// World units visible per screen pixel.
const CAMERA_SCALE: f32 = 1.0 / 48.0;
/// Keep the runner left of center so more of the course ahead is visible.
const CAMERA_LEAD: f32 = 6.0;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Projection::from(OrthographicProjection {
            scale: CAMERA_SCALE,
            ..OrthographicProjection::default_2d()
        }),
        Transform::from_xyz(CAMERA_LEAD, 0.0, 0.0),
    ));
}

pub(crate) fn follow_runner(
    runners: Query<&Transform, With<Runner>>,
    mut cameras: Query<&mut Transform, (With<Camera2d>, Without<Runner>)>,
) {
    let Some(lead_x) = runners.iter().map(|t| t.translation.x).reduce(f32::max) else {
        return;
    };

    for mut camera in &mut cameras {
        camera.translation.x = lead_x + CAMERA_LEAD;
    }
}
