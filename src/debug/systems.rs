//! Debug domain: hotkeys and gizmo overlays.

use avian2d::prelude::*;
use bevy::math::Isometry2d;
use bevy::prelude::*;

use crate::course::{ActiveCourse, CourseSegment};
use crate::debug::state::DebugState;
use crate::runner::{
    CapsuleShape, RUNNER_SPAWN, Runner, RunnerController, RunnerState, RunnerTuning,
};

const PROBE_COLOR: Color = Color::srgba(1.0, 0.0, 0.2, 0.35);
/// Fainter while any air charge is spent.
const PROBE_COLOR_SPENT: Color = Color::srgba(1.0, 0.0, 0.2, 0.15);

/// Handle keyboard shortcuts for debug actions
pub(crate) fn handle_debug_hotkeys(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    tuning: Res<RunnerTuning>,
    mut debug_state: ResMut<DebugState>,
    mut course: ResMut<ActiveCourse>,
    segments: Query<Entity, With<CourseSegment>>,
    mut runners: Query<
        (
            &mut RunnerState,
            &mut Transform,
            &mut LinearVelocity,
            &mut CapsuleShape,
        ),
        With<Runner>,
    >,
) {
    if keyboard.just_pressed(KeyCode::F1) {
        debug_state.show_probe = !debug_state.show_probe;
        info!("[DEBUG] Ground probe overlay: {}", debug_state.show_probe);
    }

    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);

    // Ctrl+R: Restart the run on a fresh course
    if ctrl && keyboard.just_pressed(KeyCode::KeyR) {
        for entity in &segments {
            commands.entity(entity).despawn();
        }
        course.generator = None;

        for (mut state, mut transform, mut velocity, mut shape) in &mut runners {
            transform.translation = RUNNER_SPAWN;
            velocity.0 = Vec2::ZERO;
            shape.set_if_neq(CapsuleShape::STAND);
            RunnerController::new(&tuning, &mut state).activate();
        }

        debug_state.restarts += 1;
        info!("[DEBUG] Run restarted ({} this session)", debug_state.restarts);
    }
}

/// Draw the ground probe box the way the controller queries it
pub(crate) fn draw_ground_probe(
    mut gizmos: Gizmos,
    tuning: Res<RunnerTuning>,
    runners: Query<(&Transform, &RunnerState), With<Runner>>,
) {
    for (transform, state) in &runners {
        let center = tuning.ground_probe_center(transform.translation);
        let color = if state.air_charges == tuning.max_air_charges {
            PROBE_COLOR
        } else {
            PROBE_COLOR_SPENT
        };
        gizmos.rect_2d(
            Isometry2d::from_translation(center),
            tuning.ground_probe_size,
            color,
        );
    }
}
