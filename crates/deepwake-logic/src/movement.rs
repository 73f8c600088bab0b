//! Traversal input guards and direction math — pure functions.
//!
//! The engine's movement component does the actual integration; this
//! module only decides whether an input is allowed in the current
//! traversal state and which direction it maps to.

use serde::{Deserialize, Serialize};

/// Traversal flags the character controller maintains alongside the
/// survival state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalFlags {
    pub crouching: bool,
    /// Hanging from a ledge.
    pub hanging: bool,
    /// Wall-running; ground move input is ignored while set.
    pub on_wall: bool,
}

/// Vertical sense of a swim axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwimVertical {
    FloatUp,
    Dive,
}

/// Jumping is blocked while hanging from a ledge or while in water.
pub fn can_jump(in_water: bool, hanging: bool) -> bool {
    !hanging && !in_water
}

/// Crouching is blocked in water.
pub fn can_crouch(in_water: bool) -> bool {
    !in_water
}

/// Swim movement direction: the camera's horizontal forward with a fixed
/// vertical component, giving a diagonal climb or dive along the view.
/// Returns `None` when not in water or the axis is at rest.
pub fn swim_direction(
    in_water: bool,
    axis_value: f32,
    camera_forward: [f32; 3],
    vertical: SwimVertical,
) -> Option<[f32; 3]> {
    if !in_water || axis_value == 0.0 {
        return None;
    }
    let z = match vertical {
        SwimVertical::FloatUp => 1.0,
        SwimVertical::Dive => -1.0,
    };
    Some([camera_forward[0], camera_forward[1], z])
}

/// Ground move direction for the forward axis: the unit X axis of the
/// controller's yaw rotation, flattened to the ground plane.
pub fn forward_direction(control_yaw_deg: f32) -> [f32; 2] {
    let yaw = control_yaw_deg.to_radians();
    [yaw.cos(), yaw.sin()]
}

/// Ground move direction for the right axis: the unit Y axis of the
/// controller's yaw rotation.
pub fn right_direction(control_yaw_deg: f32) -> [f32; 2] {
    let yaw = control_yaw_deg.to_radians();
    [-yaw.sin(), yaw.cos()]
}

/// Ground move input is dropped while wall-running or at rest.
pub fn can_ground_move(on_wall: bool, axis_value: f32) -> bool {
    !on_wall && axis_value != 0.0
}

/// Convert a rate-based turn/look axis into a per-frame angle delta.
pub fn rate_to_delta(axis_value: f32, base_rate_deg: f32, dt: f32) -> f32 {
    axis_value * base_rate_deg * dt
}
