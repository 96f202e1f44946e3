//! Runner domain: engine-backed implementations of the controller traits.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::runner::CapsuleShape;
use crate::runner::controller::{CapsuleCollider, KeyState, Mover, OverlapQuery, PhysicsBody};

impl KeyState for ButtonInput<KeyCode> {
    fn key_down(&self, key: KeyCode) -> bool {
        self.just_pressed(key)
    }

    fn key_held(&self, key: KeyCode) -> bool {
        self.pressed(key)
    }
}

impl OverlapQuery for SpatialQuery<'_, '_> {
    fn overlap_box(&self, center: Vec2, size: Vec2, angle: f32, layers: LayerMask) -> bool {
        let probe = Collider::rectangle(size.x, size.y);
        let filter = SpatialQueryFilter::from_mask(layers);
        !self
            .shape_intersections(&probe, center, angle, &filter)
            .is_empty()
    }
}

impl Mover for Transform {
    fn position(&self) -> Vec3 {
        self.translation
    }

    fn translate(&mut self, delta: Vec3) {
        self.translation += delta;
    }
}

/// Rigid body view over the velocity and mass components of one entity.
pub struct BodyHandle<'a> {
    pub velocity: &'a mut LinearVelocity,
    pub mass: &'a ComputedMass,
}

impl PhysicsBody for BodyHandle<'_> {
    fn velocity(&self) -> Vec2 {
        self.velocity.0
    }

    fn apply_impulse(&mut self, impulse: Vec2) {
        self.velocity.0 += impulse * self.mass.inverse();
    }
}

impl CapsuleCollider for Mut<'_, CapsuleShape> {
    fn set_shape(&mut self, shape: CapsuleShape) {
        // Only flag a change when the shape actually differs so the collider
        // is rebuilt on transitions, not every frame.
        self.set_if_neq(shape);
    }
}
