//! Runner domain: system modules for the per-frame controller update.

pub(crate) mod collider;
pub(crate) mod tick;

pub(crate) use collider::sync_capsule_collider;
pub(crate) use tick::{activate_runners, tick_runners};
