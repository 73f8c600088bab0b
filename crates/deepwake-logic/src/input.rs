//! Input binding table — named actions and axes mapped 1:1 onto gameplay
//! entry points, with the traversal guards applied.
//!
//! The host loop feeds device events in; the returned [`InputEffect`]
//! tells the movement component what to do. Survival-side bindings
//! (camera, flashlight) act on the state machine directly.

use serde::{Deserialize, Serialize};

use crate::constants::movement as rates;
use crate::movement::{self, SwimVertical, TraversalFlags};
use crate::survival::SurvivalStateMachine;

/// Pressed/released button actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputAction {
    Jump,
    StopJump,
    Crouch,
    StopCrouch,
    SwitchCamera,
    SwitchFlashlight,
}

/// Continuous axes sampled every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputAxis {
    MoveForward,
    MoveRight,
    FloatUp,
    Dive,
    /// Absolute yaw delta (mouse).
    Turn,
    /// Yaw rate (analog stick).
    TurnRate,
    /// Absolute pitch delta (mouse).
    LookUp,
    /// Pitch rate (analog stick).
    LookUpRate,
}

/// What the movement component should do with a routed input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEffect {
    /// Guard rejected the input this frame.
    None,
    Jump,
    StopJump,
    StartCrouch,
    StopCrouch,
    /// Push movement input along `direction` scaled by the axis value.
    AddMovement { direction: [f32; 3], scale: f32 },
    AddYaw(f32),
    AddPitch(f32),
}

/// Frame context an axis needs to resolve into a direction.
#[derive(Debug, Clone, Copy)]
pub struct AxisContext {
    /// Camera forward vector, for swim axes.
    pub camera_forward: [f32; 3],
    /// Controller yaw in degrees, for ground movement.
    pub control_yaw_deg: f32,
    /// Frame delta seconds, for rate-based turn/look axes.
    pub dt: f32,
}

/// Route a button action. Camera and flashlight switches mutate the
/// survival machine; traversal actions come back as effects after the
/// water/ledge guards.
pub fn apply_action(
    action: InputAction,
    player: &mut SurvivalStateMachine,
    flags: &mut TraversalFlags,
) -> InputEffect {
    match action {
        InputAction::Jump => {
            if movement::can_jump(player.state().in_water, flags.hanging) {
                InputEffect::Jump
            } else {
                InputEffect::None
            }
        }
        InputAction::StopJump => InputEffect::StopJump,
        InputAction::Crouch => {
            if movement::can_crouch(player.state().in_water) {
                flags.crouching = true;
                InputEffect::StartCrouch
            } else {
                InputEffect::None
            }
        }
        InputAction::StopCrouch => {
            flags.crouching = false;
            InputEffect::StopCrouch
        }
        InputAction::SwitchCamera => {
            player.switch_pov();
            InputEffect::None
        }
        InputAction::SwitchFlashlight => {
            player.toggle_flashlight();
            InputEffect::None
        }
    }
}

/// Route an axis sample through the movement guards.
pub fn apply_axis(
    axis: InputAxis,
    value: f32,
    player: &SurvivalStateMachine,
    flags: &TraversalFlags,
    ctx: &AxisContext,
) -> InputEffect {
    let in_water = player.state().in_water;
    match axis {
        InputAxis::MoveForward => ground_move(movement::forward_direction(ctx.control_yaw_deg), value, flags),
        InputAxis::MoveRight => ground_move(movement::right_direction(ctx.control_yaw_deg), value, flags),
        InputAxis::FloatUp => swim_move(in_water, value, ctx, SwimVertical::FloatUp),
        InputAxis::Dive => swim_move(in_water, value, ctx, SwimVertical::Dive),
        InputAxis::Turn => InputEffect::AddYaw(value),
        InputAxis::TurnRate => {
            InputEffect::AddYaw(movement::rate_to_delta(value, rates::BASE_TURN_RATE, ctx.dt))
        }
        InputAxis::LookUp => InputEffect::AddPitch(value),
        InputAxis::LookUpRate => InputEffect::AddPitch(movement::rate_to_delta(
            value,
            rates::BASE_LOOK_UP_RATE,
            ctx.dt,
        )),
    }
}

fn ground_move(dir: [f32; 2], value: f32, flags: &TraversalFlags) -> InputEffect {
    if movement::can_ground_move(flags.on_wall, value) {
        InputEffect::AddMovement {
            direction: [dir[0], dir[1], 0.0],
            scale: value,
        }
    } else {
        InputEffect::None
    }
}

fn swim_move(in_water: bool, value: f32, ctx: &AxisContext, vertical: SwimVertical) -> InputEffect {
    match movement::swim_direction(in_water, value, ctx.camera_forward, vertical) {
        Some(direction) => InputEffect::AddMovement {
            direction,
            scale: value,
        },
        None => InputEffect::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::PointOfView;

    fn ctx() -> AxisContext {
        AxisContext {
            camera_forward: [1.0, 0.0, 0.0],
            control_yaw_deg: 0.0,
            dt: 1.0 / 60.0,
        }
    }

    #[test]
    fn test_jump_blocked_in_water() {
        let mut player = SurvivalStateMachine::default();
        let mut flags = TraversalFlags::default();
        assert_eq!(
            apply_action(InputAction::Jump, &mut player, &mut flags),
            InputEffect::Jump
        );
        player.enter_water();
        assert_eq!(
            apply_action(InputAction::Jump, &mut player, &mut flags),
            InputEffect::None
        );
    }

    #[test]
    fn test_jump_blocked_while_hanging() {
        let mut player = SurvivalStateMachine::default();
        let mut flags = TraversalFlags {
            hanging: true,
            ..TraversalFlags::default()
        };
        assert_eq!(
            apply_action(InputAction::Jump, &mut player, &mut flags),
            InputEffect::None
        );
    }

    #[test]
    fn test_crouch_tracks_flag_and_water_guard() {
        let mut player = SurvivalStateMachine::default();
        let mut flags = TraversalFlags::default();
        assert_eq!(
            apply_action(InputAction::Crouch, &mut player, &mut flags),
            InputEffect::StartCrouch
        );
        assert!(flags.crouching);
        apply_action(InputAction::StopCrouch, &mut player, &mut flags);
        assert!(!flags.crouching);

        player.enter_water();
        assert_eq!(
            apply_action(InputAction::Crouch, &mut player, &mut flags),
            InputEffect::None
        );
        assert!(!flags.crouching);
    }

    #[test]
    fn test_switch_camera_routes_to_pov() {
        let mut player = SurvivalStateMachine::default();
        let mut flags = TraversalFlags::default();
        apply_action(InputAction::SwitchCamera, &mut player, &mut flags);
        assert_eq!(player.state().pov, PointOfView::FirstPerson);
    }

    #[test]
    fn test_switch_flashlight_routes_to_toggle() {
        let mut player = SurvivalStateMachine::default();
        let mut flags = TraversalFlags::default();
        apply_action(InputAction::SwitchFlashlight, &mut player, &mut flags);
        assert!(player.state().flashlight_on);
    }

    #[test]
    fn test_swim_axes_only_in_water() {
        let mut player = SurvivalStateMachine::default();
        let flags = TraversalFlags::default();
        assert_eq!(
            apply_axis(InputAxis::Dive, 1.0, &player, &flags, &ctx()),
            InputEffect::None
        );
        player.enter_water();
        match apply_axis(InputAxis::Dive, 1.0, &player, &flags, &ctx()) {
            InputEffect::AddMovement { direction, scale } => {
                assert_eq!(direction, [1.0, 0.0, -1.0]);
                assert_eq!(scale, 1.0);
            }
            other => panic!("unexpected effect {other:?}"),
        }
        match apply_axis(InputAxis::FloatUp, 0.5, &player, &flags, &ctx()) {
            InputEffect::AddMovement { direction, .. } => assert_eq!(direction[2], 1.0),
            other => panic!("unexpected effect {other:?}"),
        }
    }

    #[test]
    fn test_ground_move_blocked_on_wall() {
        let player = SurvivalStateMachine::default();
        let flags = TraversalFlags {
            on_wall: true,
            ..TraversalFlags::default()
        };
        assert_eq!(
            apply_axis(InputAxis::MoveForward, 1.0, &player, &flags, &ctx()),
            InputEffect::None
        );
    }

    #[test]
    fn test_turn_rate_scales_by_dt() {
        let player = SurvivalStateMachine::default();
        let flags = TraversalFlags::default();
        match apply_axis(InputAxis::TurnRate, 1.0, &player, &flags, &ctx()) {
            InputEffect::AddYaw(d) => assert!((d - 0.75).abs() < 1e-5),
            other => panic!("unexpected effect {other:?}"),
        }
    }
}
