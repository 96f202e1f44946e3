//! Runner domain: animator parameters and pose selection.
//!
//! The controller only writes named parameters. The pose system reads them
//! once per frame, picks a pose, and restyles the runner's sprite.

use std::collections::{HashMap, HashSet};

use bevy::prelude::*;

use crate::runner::controller::Animator;
use crate::runner::{CapsuleShape, RunnerTuning};

/// Named animation parameters, in the style of an animator controller.
#[derive(Component, Debug, Default)]
pub struct AnimatorParams {
    flags: HashMap<String, bool>,
    triggers: HashSet<String>,
}

impl AnimatorParams {
    pub fn flag(&self, name: &str) -> bool {
        self.flags.get(name).copied().unwrap_or(false)
    }

    /// Consume a pending trigger. Returns whether it was set.
    pub fn take_trigger(&mut self, name: &str) -> bool {
        self.triggers.remove(name)
    }
}

impl Animator for AnimatorParams {
    fn set_trigger(&mut self, name: &str) {
        self.triggers.insert(name.to_string());
    }

    fn set_bool(&mut self, name: &str, value: bool) {
        // Avoid reallocating the key every frame for the common case.
        if let Some(flag) = self.flags.get_mut(name) {
            *flag = value;
        } else {
            self.flags.insert(name.to_string(), value);
        }
    }
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RunnerPose {
    #[default]
    Run,
    Jump,
    Slide,
}

impl RunnerPose {
    /// Pick the next pose. Sliding wins over everything; a fresh jump trigger
    /// starts the jump pose, which holds for as long as the body is rising.
    pub fn resolve(self, sliding: bool, jump_fired: bool, vertical_velocity: f32) -> Self {
        if sliding {
            RunnerPose::Slide
        } else if jump_fired || (self == RunnerPose::Jump && vertical_velocity > 0.0) {
            RunnerPose::Jump
        } else {
            RunnerPose::Run
        }
    }

    /// Sprite placement, size, and tint for this pose.
    pub fn visual(self) -> (Vec2, Vec2, Color) {
        match self {
            RunnerPose::Run => (
                CapsuleShape::STAND.offset,
                CapsuleShape::STAND.size,
                Color::srgb(0.9, 0.9, 0.9),
            ),
            RunnerPose::Jump => (
                CapsuleShape::STAND.offset,
                CapsuleShape::STAND.size,
                Color::srgb(0.95, 0.85, 0.6),
            ),
            RunnerPose::Slide => (
                CapsuleShape::SLIDE.offset,
                CapsuleShape::SLIDE.size,
                Color::srgb(0.6, 0.8, 0.95),
            ),
        }
    }
}

/// Marker for the sprite child that draws the runner.
#[derive(Component, Debug)]
pub struct RunnerVisual;

pub(crate) fn drive_runner_pose(
    tuning: Res<RunnerTuning>,
    mut runners: Query<(
        &mut AnimatorParams,
        &mut RunnerPose,
        &avian2d::prelude::LinearVelocity,
        &Children,
    )>,
    mut visuals: Query<(&mut Sprite, &mut Transform), With<RunnerVisual>>,
) {
    for (mut params, mut pose, velocity, children) in &mut runners {
        let jump_fired = params.take_trigger(&tuning.jump_trigger);
        let sliding = params.flag(&tuning.slide_flag);
        let next = pose.resolve(sliding, jump_fired, velocity.y);

        if next == *pose {
            continue;
        }

        debug!("Runner pose: {:?} -> {:?}", *pose, next);
        *pose = next;

        let (offset, size, color) = next.visual();
        for child in children.iter() {
            if let Ok((mut sprite, mut transform)) = visuals.get_mut(child) {
                sprite.custom_size = Some(size);
                sprite.color = color;
                transform.translation = offset.extend(transform.translation.z);
            }
        }
    }
}
