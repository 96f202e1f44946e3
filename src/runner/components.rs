//! Runner domain: components, physics layers, and capsule presets.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces the runner can land on
    Ground,
    /// The runner character
    Runner,
}

#[derive(Component, Debug)]
pub struct Runner;

/// Per-runner mutable state owned by the controller.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunnerState {
    /// Jumps left before the runner has to touch ground again.
    pub air_charges: u8,
    pub is_sliding: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CapsuleDirection {
    #[default]
    Vertical,
    Horizontal,
}

/// Capsule collider description: center offset from the body, bounding size,
/// and which axis the capsule is stretched along.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct CapsuleShape {
    pub offset: Vec2,
    pub size: Vec2,
    pub direction: CapsuleDirection,
}

impl CapsuleShape {
    /// Tall, narrow capsule used while running upright.
    pub const STAND: Self = Self {
        offset: Vec2::new(0.2, -0.2),
        size: Vec2::new(1.0, 2.5),
        direction: CapsuleDirection::Vertical,
    };

    /// Short, wide capsule used while sliding.
    pub const SLIDE: Self = Self {
        offset: Vec2::new(0.2, -0.85),
        size: Vec2::new(2.0, 1.2),
        direction: CapsuleDirection::Horizontal,
    };

    /// Capsule radius and segment length along the stretch axis.
    ///
    /// The diameter is the extent across the stretch axis; whatever is left of
    /// the extent along it becomes the straight segment. A size that is
    /// "thicker than long" degenerates into a circle.
    pub fn radius_and_length(&self) -> (f32, f32) {
        let (across, along) = match self.direction {
            CapsuleDirection::Vertical => (self.size.x, self.size.y),
            CapsuleDirection::Horizontal => (self.size.y, self.size.x),
        };
        let radius = across * 0.5;
        let length = (along - across).max(0.0);
        (radius, length)
    }

    /// Build the avian collider for this shape. Capsules in avian are
    /// stretched along Y, so horizontal ones are rotated a quarter turn.
    pub fn to_collider(&self) -> Collider {
        let (radius, length) = self.radius_and_length();
        let rotation = match self.direction {
            CapsuleDirection::Vertical => Rotation::IDENTITY,
            CapsuleDirection::Horizontal => Rotation::degrees(90.0),
        };
        Collider::compound(vec![(
            Position::new(self.offset),
            rotation,
            Collider::capsule(radius, length),
        )])
    }
}

impl Default for CapsuleShape {
    fn default() -> Self {
        Self::STAND
    }
}
