//! Runner domain: keeps the physics collider in step with the capsule shape.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::runner::{CapsuleShape, Runner};

pub(crate) fn sync_capsule_collider(
    mut query: Query<(&CapsuleShape, &mut Collider), (With<Runner>, Changed<CapsuleShape>)>,
) {
    for (shape, mut collider) in &mut query {
        *collider = shape.to_collider();
        debug!(
            "Capsule collider set: offset={:?}, size={:?}, direction={:?}",
            shape.offset, shape.size, shape.direction
        );
    }
}
