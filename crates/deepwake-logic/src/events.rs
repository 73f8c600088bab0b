//! Externally observable notifications emitted by the survival machine.
//!
//! Fire-and-forget: the presentation layer (UI oxygen bar, audio cues,
//! animation) consumes these; nothing here waits for an acknowledgment.
//! The machine queues events in an outbox the owner drains each frame.

use serde::{Deserialize, Serialize};

use crate::camera::PointOfView;

/// A one-shot sound cue by asset name. Optional everywhere — a missing
/// cue is a silent no-op, never an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoundCue(pub String);

impl SoundCue {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

/// Notifications produced by survival transitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SurvivalEvent {
    /// Head volume entered water: oxygen drain has started.
    Submerged,
    /// Head volume left water: oxygen regen has started.
    Emerged,
    /// Oxygen value changed this tick (drives the UI oxygen bar).
    OxygenChanged { oxygen: f32 },
    /// POV switched; the new rig is available on the machine.
    PovSwitched { pov: PointOfView },
    /// Flashlight flipped; plays the cue in either direction if configured.
    FlashlightToggled { on: bool, sound: Option<SoundCue> },
    /// The player died. Consumers disable capsule collision, enable mesh
    /// physics, and detach the controller.
    Died,
    /// Delayed post-death capture: save the final ragdoll pose and stop
    /// simulating physics on the mesh.
    RagdollSnapshotTaken,
    /// The current objective label changed.
    ObjectiveUpdated {
        objective: String,
        sound: Option<SoundCue>,
    },
}
