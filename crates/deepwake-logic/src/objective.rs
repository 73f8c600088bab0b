//! Objective triggers — placed regions that update the player's quest
//! label on overlap.
//!
//! Triggers are stateless across activations: the only side effect is on
//! the player's `current_objective`. Objectives form an ordered checklist;
//! an end trigger fires only while its matching start objective is the
//! active one.

use serde::{Deserialize, Serialize};

use crate::constants::objective::COMPLETED_PREFIX;
use crate::events::SoundCue;
use crate::survival::SurvivalStateMachine;

/// The completion marker written when an end trigger fires.
pub fn completed_label(label: &str) -> String {
    format!("{COMPLETED_PREFIX}{label}")
}

/// A placed trigger that hands the player a new objective.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectiveTrigger {
    pub label: String,
    pub sound: Option<SoundCue>,
}

impl ObjectiveTrigger {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            sound: None,
        }
    }

    pub fn with_sound(mut self, cue: SoundCue) -> Self {
        self.sound = Some(cue);
        self
    }

    /// Unconditionally overwrite the player's current objective.
    pub fn on_player_enter(&self, player: &mut SurvivalStateMachine) {
        player.update_objective(self.label.clone(), self.sound.clone());
    }
}

/// End variant: completes its objective only if that objective is
/// currently active and non-empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectiveEndTrigger {
    pub label: String,
    pub sound: Option<SoundCue>,
}

impl ObjectiveEndTrigger {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            sound: None,
        }
    }

    pub fn with_sound(mut self, cue: SoundCue) -> Self {
        self.sound = Some(cue);
        self
    }

    /// Mark the objective completed if it is the active one. Re-entry
    /// after completion is a no-op: the guard wants the exact
    /// non-completed label.
    pub fn on_player_enter(&self, player: &mut SurvivalStateMachine) {
        if player.state().current_objective == self.label && !self.label.is_empty() {
            player.update_objective(completed_label(&self.label), self.sound.clone());
        }
    }
}
