//! Third-person follow camera derivation.
//!
//! Pure functions of [`LocomotionState`] plus tuning; an external camera
//! component consumes the eye/target pair each frame. View/projection math
//! lives with the renderer, not here.

use crate::config::CameraConfig;
use crate::locomotion::LocomotionState;
use glam::Vec3;
use std::f32::consts::PI;

/// Eye position: behind the model along its facing, raised by `height`.
#[must_use]
pub fn follow_eye(state: &LocomotionState, model_forward_offset: f32, camera: &CameraConfig) -> Vec3 {
    let model = state.model_position(model_forward_offset);
    let behind = state.rotation_y + PI;
    let offset = Vec3::new(behind.sin(), 0.0, -behind.cos()) * camera.distance;
    model + offset + Vec3::Y * camera.height
}

/// Look-at target: ahead of the model along its facing, raised by `look_up`
/// so the character sits low in frame.
#[must_use]
pub fn follow_target(state: &LocomotionState, model_forward_offset: f32, camera: &CameraConfig) -> Vec3 {
    let model = state.model_position(model_forward_offset);
    model + state.forward() * camera.look_ahead + Vec3::Y * camera.look_up
}
