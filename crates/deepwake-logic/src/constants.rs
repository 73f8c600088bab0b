//! Gameplay tuning constants — oxygen loop, camera rig, movement, death.
//!
//! Plain numeric constants with no engine dependency. The logic crate's
//! defaults and the native simtest both read these.

pub mod oxygen {
    /// Full oxygen reserve.
    pub const MAX: f32 = 100.0;
    /// Oxygen removed per drain tick while submerged.
    pub const DRAIN_PER_TICK: f32 = 3.0;
    /// Oxygen restored per regen tick while surfaced.
    pub const REGEN_PER_TICK: f32 = 25.0;
    /// Seconds between oxygen ticks, drain and regen alike.
    pub const TICK_INTERVAL: f32 = 1.0;
    /// Delay before the first tick after entering or leaving water.
    pub const FIRST_TICK_DELAY: f32 = 1.0;
}

pub mod camera {
    /// Boom arm length behind the character in third person.
    pub const TP_BOOM_LENGTH: f32 = 400.0;
    /// Boom arm length in first person (camera sits at the head).
    pub const FP_BOOM_LENGTH: f32 = 0.0;
    /// Interaction trace length in third person.
    pub const TP_TRACE_LENGTH: f32 = 600.0;
    /// Interaction trace length in first person (close-range).
    pub const FP_TRACE_LENGTH: f32 = 350.0;
    /// Boom local offset at the head socket in first person.
    pub const FP_BOOM_OFFSET: [f32; 3] = [-14.0, 30.0, 0.0];
    /// Boom local offset on the capsule in third person.
    pub const TP_BOOM_OFFSET: [f32; 3] = [0.0, 0.0, 65.0];
    /// Boom socket offset in third person (over-the-shoulder framing).
    pub const TP_SOCKET_OFFSET: [f32; 3] = [0.0, 80.0, 0.0];
}

pub mod movement {
    /// Upward launch velocity for jumps.
    pub const JUMP_Z_VELOCITY: f32 = 600.0;
    /// Full air control while jumping.
    pub const AIR_CONTROL: f32 = 1.0;
    /// Controller yaw rate for rate-based devices, degrees per second.
    pub const BASE_TURN_RATE: f32 = 45.0;
    /// Controller pitch rate for rate-based devices, degrees per second.
    pub const BASE_LOOK_UP_RATE: f32 = 45.0;
}

pub mod death {
    /// Seconds between death and the ragdoll pose snapshot.
    pub const RAGDOLL_SNAPSHOT_DELAY: f32 = 3.0;
}

pub mod objective {
    /// Prefix written onto an objective label when its end trigger fires.
    pub const COMPLETED_PREFIX: &str = "Completed: ";
}
