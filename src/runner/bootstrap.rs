//! Runner domain: spawning the runner entity.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::runner::{
    AnimatorParams, CapsuleShape, GameLayer, Runner, RunnerPose, RunnerState, RunnerVisual,
};

/// Where a fresh runner is placed, just above the opening runway.
pub const RUNNER_SPAWN: Vec3 = Vec3::new(0.0, 0.1, 0.0);

pub(crate) fn spawn_runner(mut commands: Commands) {
    let shape = CapsuleShape::STAND;
    let (visual_offset, visual_size, visual_color) = RunnerPose::Run.visual();

    commands
        .spawn((
            // Identity & controller state (charges are filled on activation)
            (
                Runner,
                RunnerState::default(),
                RunnerPose::default(),
                AnimatorParams::default(),
                shape,
            ),
            Transform::from_translation(RUNNER_SPAWN),
            Visibility::default(),
            // Physics
            (
                RigidBody::Dynamic,
                shape.to_collider(),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                Mass(1.0),
                NoAutoMass,
                Friction::new(0.0),
                CollisionLayers::new(GameLayer::Runner, [GameLayer::Ground]),
            ),
        ))
        .with_children(|parent| {
            parent.spawn((
                RunnerVisual,
                Sprite {
                    color: visual_color,
                    custom_size: Some(visual_size),
                    ..default()
                },
                Transform::from_translation(visual_offset.extend(0.0)),
            ));
        });

    info!("Spawned runner at {:?}", RUNNER_SPAWN);
}
