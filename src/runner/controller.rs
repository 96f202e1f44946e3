//! Runner domain: engine-independent controller logic.
//!
//! The controller never touches the ECS directly. Everything it reads or
//! writes goes through the small capability traits below, which the Bevy
//! systems implement over real components and the tests implement with fakes.

use avian2d::prelude::LayerMask;
use bevy::prelude::*;

use crate::runner::{CapsuleShape, RunnerState, RunnerTuning};

/// Keyboard state for a single frame.
pub trait KeyState {
    /// True only on the frame the key went down.
    fn key_down(&self, key: KeyCode) -> bool;
    /// True on every frame the key is held.
    fn key_held(&self, key: KeyCode) -> bool;
}

/// Box overlap test against the physics world.
pub trait OverlapQuery {
    fn overlap_box(&self, center: Vec2, size: Vec2, angle: f32, layers: LayerMask) -> bool;
}

pub trait Mover {
    fn position(&self) -> Vec3;
    fn translate(&mut self, delta: Vec3);
}

pub trait PhysicsBody {
    fn velocity(&self) -> Vec2;
    /// Instantaneous change of momentum.
    fn apply_impulse(&mut self, impulse: Vec2);
}

pub trait Animator {
    /// Fire a one-shot trigger parameter.
    fn set_trigger(&mut self, name: &str);
    fn set_bool(&mut self, name: &str, value: bool);
}

pub trait CapsuleCollider {
    fn set_shape(&mut self, shape: CapsuleShape);
}

/// Read-only inputs for one tick.
pub struct RunnerSenses<'a> {
    /// Elapsed frame time in seconds.
    pub dt: f32,
    pub keys: &'a dyn KeyState,
    pub world: &'a dyn OverlapQuery,
}

/// Collaborators the controller writes to.
pub struct RunnerRig<'a> {
    pub mover: &'a mut dyn Mover,
    pub body: &'a mut dyn PhysicsBody,
    pub animator: &'a mut dyn Animator,
    pub collider: &'a mut dyn CapsuleCollider,
}

/// What happened during a tick, for logging and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    pub jumped: bool,
    /// The ground probe hit while not ascending and charges were refilled.
    pub recharged: bool,
    pub sliding: bool,
}

pub struct RunnerController<'a> {
    tuning: &'a RunnerTuning,
    state: &'a mut RunnerState,
}

impl<'a> RunnerController<'a> {
    pub fn new(tuning: &'a RunnerTuning, state: &'a mut RunnerState) -> Self {
        Self { tuning, state }
    }

    /// One-time setup when the runner enters the world.
    pub fn activate(&mut self) {
        self.state.air_charges = self.tuning.max_air_charges;
        self.state.is_sliding = false;
    }

    /// Run one frame: locomotion, then jump, then slide.
    pub fn tick(&mut self, senses: &RunnerSenses, rig: &mut RunnerRig) -> TickOutcome {
        self.run(senses, rig);
        let (jumped, recharged) = self.jump(senses, rig);
        let sliding = self.slide(senses, rig);
        TickOutcome {
            jumped,
            recharged,
            sliding,
        }
    }

    fn run(&mut self, senses: &RunnerSenses, rig: &mut RunnerRig) {
        let dx = self.tuning.horizontal_speed * senses.dt;
        rig.mover.translate(Vec3::new(dx, 0.0, 0.0));
    }

    fn jump(&mut self, senses: &RunnerSenses, rig: &mut RunnerRig) -> (bool, bool) {
        let tuning = self.tuning;

        if senses.keys.key_down(tuning.jump_key) && self.state.air_charges > 0 {
            rig.body.apply_impulse(Vec2::new(0.0, tuning.jump_impulse));
            self.state.air_charges -= 1;
            rig.animator.set_trigger(&tuning.jump_trigger);
            // The impulse has not been integrated yet, so a probe hit this
            // frame would hand the charge straight back.
            return (true, false);
        }

        let center = tuning.ground_probe_center(rig.mover.position());
        let grounded = senses.world.overlap_box(
            center,
            tuning.ground_probe_size,
            0.0,
            tuning.ground_layers,
        );

        if grounded && rig.body.velocity().y <= 0.0 {
            self.state.air_charges = tuning.max_air_charges;
            return (false, true);
        }

        (false, false)
    }

    fn slide(&mut self, senses: &RunnerSenses, rig: &mut RunnerRig) -> bool {
        let sliding = senses.keys.key_held(self.tuning.slide_key);
        rig.animator.set_bool(&self.tuning.slide_flag, sliding);
        rig.collider.set_shape(if sliding {
            CapsuleShape::SLIDE
        } else {
            CapsuleShape::STAND
        });
        self.state.is_sliding = sliding;
        sliding
    }
}
