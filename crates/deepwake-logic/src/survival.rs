//! Player survival state machine — POV, the water/oxygen loop, and death
//! sequencing.
//!
//! Single-owner and synchronous: the player character drives every
//! transition from its frame update, and overlap/input callbacks arrive on
//! the same thread. Timers live in an injected [`TimerBank`], so the whole
//! loop runs deterministically in tests with no engine behind it.
//!
//! Guards are idempotency checks, not error conditions — repeated overlap
//! callbacks and duplicate death triggers are expected and harmless.

use serde::{Deserialize, Serialize};

use crate::camera::{CameraRig, PointOfView};
use crate::config::SurvivalTuning;
use crate::events::{SoundCue, SurvivalEvent};
use crate::health::HealthComponent;
use crate::timers::{TimerBank, TimerId};

/// Kind of physical region the head volume can overlap. Only water
/// matters to the survival loop; everything else is ignored here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeKind {
    Water,
    Other,
}

/// Survival-related player state, one instance per player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSurvivalState {
    pub pov: PointOfView,
    pub in_water: bool,
    pub submerged: bool,
    pub oxygen: f32,
    pub oxygen_max: f32,
    pub flashlight_on: bool,
    /// Empty string means no objective.
    pub current_objective: String,
    pub health: HealthComponent,
}

impl PlayerSurvivalState {
    fn new(tuning: &SurvivalTuning) -> Self {
        Self {
            pov: PointOfView::ThirdPerson,
            in_water: false,
            submerged: false,
            oxygen: tuning.oxygen_max,
            oxygen_max: tuning.oxygen_max,
            flashlight_on: false,
            current_objective: String::new(),
            health: HealthComponent::new(),
        }
    }

    pub fn is_dead(&self) -> bool {
        self.health.dead
    }
}

/// Owns the survival state, its timers, and the event outbox, and applies
/// every transition consistently regardless of event arrival order.
#[derive(Debug)]
pub struct SurvivalStateMachine {
    state: PlayerSurvivalState,
    rig: CameraRig,
    tuning: SurvivalTuning,
    timers: TimerBank,
    flashlight_sound: Option<SoundCue>,
    outbox: Vec<SurvivalEvent>,
}

impl SurvivalStateMachine {
    pub fn new(tuning: SurvivalTuning) -> Self {
        let state = PlayerSurvivalState::new(&tuning);
        Self {
            state,
            rig: CameraRig::for_pov(PointOfView::ThirdPerson),
            tuning,
            timers: TimerBank::new(),
            flashlight_sound: None,
            outbox: Vec::new(),
        }
    }

    pub fn with_flashlight_sound(mut self, cue: SoundCue) -> Self {
        self.flashlight_sound = Some(cue);
        self
    }

    pub fn state(&self) -> &PlayerSurvivalState {
        &self.state
    }

    pub fn tuning(&self) -> &SurvivalTuning {
        &self.tuning
    }

    /// The active camera parameter set for the current POV.
    pub fn camera_rig(&self) -> &CameraRig {
        &self.rig
    }

    pub fn timers(&self) -> &TimerBank {
        &self.timers
    }

    /// Take all notifications queued since the last drain.
    pub fn drain_events(&mut self) -> Vec<SurvivalEvent> {
        std::mem::take(&mut self.outbox)
    }

    /// Overlap-begin callback from the head volume.
    pub fn enter_volume(&mut self, kind: VolumeKind) {
        if kind == VolumeKind::Water {
            self.enter_water();
        }
    }

    /// Overlap-end callback from the head volume.
    pub fn exit_volume(&mut self, kind: VolumeKind) {
        if kind == VolumeKind::Water {
            self.exit_water();
        }
    }

    /// Head volume entered water. Idempotent: repeated overlap callbacks
    /// while already in water change nothing.
    pub fn enter_water(&mut self) {
        if self.state.in_water {
            return;
        }

        self.state.in_water = true;
        self.state.submerged = true;

        self.timers.start_repeating(
            TimerId::OxygenDrain,
            self.tuning.tick_interval,
            self.tuning.first_tick_delay,
        );
        if self.timers.is_active(TimerId::OxygenRegen) {
            self.timers.cancel(TimerId::OxygenRegen);
        }

        log::debug!("submerged, oxygen={:.1}", self.state.oxygen);
        self.outbox.push(SurvivalEvent::Submerged);
    }

    /// Head volume left water. Clears `submerged` only; `in_water` is
    /// cleared separately by the surrounding character controller.
    pub fn exit_water(&mut self) {
        if !self.state.submerged {
            return;
        }

        self.state.submerged = false;

        if self.timers.is_active(TimerId::OxygenDrain) {
            self.timers.cancel(TimerId::OxygenDrain);
        }
        self.timers.start_repeating(
            TimerId::OxygenRegen,
            self.tuning.tick_interval,
            self.tuning.first_tick_delay,
        );
        // Already full: don't let the regen timer run a wasted first tick
        if self.state.oxygen >= self.state.oxygen_max
            && self.timers.is_active(TimerId::OxygenRegen)
        {
            self.timers.cancel(TimerId::OxygenRegen);
        }

        log::debug!("emerged, oxygen={:.1}", self.state.oxygen);
        self.outbox.push(SurvivalEvent::Emerged);
    }

    /// Flip POV and swap in the other camera parameter set. No guard
    /// conditions — always succeeds.
    pub fn switch_pov(&mut self) {
        self.state.pov = self.state.pov.flipped();
        self.rig = CameraRig::for_pov(self.state.pov);
        self.outbox.push(SurvivalEvent::PovSwitched {
            pov: self.state.pov,
        });
    }

    /// Flip the flashlight, playing the cue in either direction.
    pub fn toggle_flashlight(&mut self) {
        self.state.flashlight_on = !self.state.flashlight_on;
        self.outbox.push(SurvivalEvent::FlashlightToggled {
            on: self.state.flashlight_on,
            sound: self.flashlight_sound.clone(),
        });
    }

    /// Trigger the death sequence. Idempotent: concurrent death triggers
    /// (drowning plus fall damage on the same frame) sequence death once.
    pub fn request_death(&mut self) {
        if self.state.health.dead {
            return;
        }

        self.state.health.dead = true;
        log::info!("player died, oxygen={:.1}", self.state.oxygen);
        self.outbox.push(SurvivalEvent::Died);

        self.timers.start_one_shot(
            TimerId::RagdollSnapshot,
            self.tuning.ragdoll_snapshot_delay,
        );
    }

    /// Set the current objective label and notify the presentation layer.
    /// Called by objective triggers on overlap.
    pub fn update_objective(&mut self, objective: String, sound: Option<SoundCue>) {
        self.state.current_objective = objective.clone();
        log::debug!("objective updated: {objective}");
        self.outbox
            .push(SurvivalEvent::ObjectiveUpdated { objective, sound });
    }

    /// Advance simulated time and dispatch any timers that fired.
    pub fn tick(&mut self, dt: f32) {
        for id in self.timers.advance(dt) {
            match id {
                TimerId::OxygenDrain => self.drain_tick(),
                TimerId::OxygenRegen => self.regen_tick(),
                TimerId::RagdollSnapshot => self.ragdoll_snapshot(),
            }
        }
    }

    fn drain_tick(&mut self) {
        if self.state.submerged && self.state.oxygen >= 0.0 {
            self.state.oxygen = (self.state.oxygen - self.tuning.drain_per_tick)
                .clamp(0.0, self.state.oxygen_max);
            self.outbox.push(SurvivalEvent::OxygenChanged {
                oxygen: self.state.oxygen,
            });

            if self.state.oxygen <= 0.0 {
                self.request_death();
            }
        }
    }

    fn regen_tick(&mut self) {
        if !self.state.submerged && self.state.oxygen < self.state.oxygen_max {
            self.state.oxygen = (self.state.oxygen + self.tuning.regen_per_tick)
                .clamp(0.0, self.state.oxygen_max);
            self.outbox.push(SurvivalEvent::OxygenChanged {
                oxygen: self.state.oxygen,
            });
        }
    }

    fn ragdoll_snapshot(&mut self) {
        self.outbox.push(SurvivalEvent::RagdollSnapshotTaken);
    }
}

impl Default for SurvivalStateMachine {
    fn default() -> Self {
        Self::new(SurvivalTuning::default())
    }
}
