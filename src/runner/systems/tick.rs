//! Runner domain: activation and per-frame controller tick.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::runner::adapters::BodyHandle;
use crate::runner::controller::{RunnerController, RunnerRig, RunnerSenses};
use crate::runner::{AnimatorParams, CapsuleShape, Runner, RunnerState, RunnerTuning};

pub(crate) fn activate_runners(
    tuning: Res<RunnerTuning>,
    mut query: Query<&mut RunnerState, (With<Runner>, Added<RunnerState>)>,
) {
    for mut state in &mut query {
        RunnerController::new(&tuning, &mut state).activate();
        info!(
            "Runner activated: air_charges={}, speed={}, jump_impulse={}",
            state.air_charges, tuning.horizontal_speed, tuning.jump_impulse
        );
    }
}

pub(crate) fn tick_runners(
    time: Res<Time>,
    keyboard: Res<ButtonInput<KeyCode>>,
    spatial_query: SpatialQuery,
    tuning: Res<RunnerTuning>,
    mut query: Query<
        (
            &mut RunnerState,
            &mut Transform,
            &mut LinearVelocity,
            &ComputedMass,
            &mut AnimatorParams,
            &mut CapsuleShape,
        ),
        With<Runner>,
    >,
) {
    let senses = RunnerSenses {
        dt: time.delta_secs(),
        keys: &*keyboard,
        world: &spatial_query,
    };

    for (mut state, mut transform, mut velocity, mass, mut params, mut shape) in &mut query {
        let before = *state;

        let mut body = BodyHandle {
            velocity: &mut *velocity,
            mass,
        };
        let mut rig = RunnerRig {
            mover: &mut *transform,
            body: &mut body,
            animator: &mut *params,
            collider: &mut shape,
        };

        let outcome = RunnerController::new(&tuning, &mut state).tick(&senses, &mut rig);

        if outcome.jumped {
            debug!("Jump: air_charges now {}", state.air_charges);
        }
        if outcome.recharged && state.air_charges != before.air_charges {
            debug!("Landed: air_charges reset to {}", state.air_charges);
        }
        if state.is_sliding != before.is_sliding {
            debug!("Slide: {}", state.is_sliding);
        }
    }
}
