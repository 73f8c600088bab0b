//! Survival tuning — serializable knobs for the oxygen loop and death timing.
//!
//! Defaults reproduce the shipped values in [`crate::constants`]. The
//! headless simtest loads an alternate tuning from `data/survival_tuning.json`
//! and tests can construct arbitrary tunings directly.

use serde::{Deserialize, Serialize};

use crate::constants::{death, oxygen};

/// Tuning parameters for the survival state machine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurvivalTuning {
    /// Full oxygen reserve; oxygen is clamped to `[0, oxygen_max]`.
    pub oxygen_max: f32,
    /// Oxygen removed per drain tick while submerged.
    pub drain_per_tick: f32,
    /// Oxygen restored per regen tick while surfaced.
    pub regen_per_tick: f32,
    /// Seconds between oxygen ticks, drain and regen alike.
    pub tick_interval: f32,
    /// Delay before the first oxygen tick after a water transition.
    pub first_tick_delay: f32,
    /// Seconds between death and the ragdoll pose snapshot.
    pub ragdoll_snapshot_delay: f32,
}

impl Default for SurvivalTuning {
    fn default() -> Self {
        Self {
            oxygen_max: oxygen::MAX,
            drain_per_tick: oxygen::DRAIN_PER_TICK,
            regen_per_tick: oxygen::REGEN_PER_TICK,
            tick_interval: oxygen::TICK_INTERVAL,
            first_tick_delay: oxygen::FIRST_TICK_DELAY,
            ragdoll_snapshot_delay: death::RAGDOLL_SNAPSHOT_DELAY,
        }
    }
}

impl SurvivalTuning {
    /// Check the tuning for values the state machine cannot run with.
    /// Returns human-readable problems; empty means valid.
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if self.oxygen_max <= 0.0 {
            problems.push(format!("oxygen_max must be positive, got {}", self.oxygen_max));
        }
        if self.drain_per_tick <= 0.0 {
            problems.push(format!(
                "drain_per_tick must be positive, got {}",
                self.drain_per_tick
            ));
        }
        if self.regen_per_tick <= 0.0 {
            problems.push(format!(
                "regen_per_tick must be positive, got {}",
                self.regen_per_tick
            ));
        }
        if self.tick_interval <= 0.0 {
            problems.push(format!(
                "tick_interval must be positive, got {}",
                self.tick_interval
            ));
        }
        if self.first_tick_delay < 0.0 {
            problems.push(format!(
                "first_tick_delay must be non-negative, got {}",
                self.first_tick_delay
            ));
        }
        if self.ragdoll_snapshot_delay < 0.0 {
            problems.push(format!(
                "ragdoll_snapshot_delay must be non-negative, got {}",
                self.ragdoll_snapshot_delay
            ));
        }

        problems
    }

    /// Number of drain ticks until a full reserve hits zero.
    pub fn ticks_to_drown(&self) -> u32 {
        (self.oxygen_max / self.drain_per_tick).ceil() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_constants() {
        let t = SurvivalTuning::default();
        assert_eq!(t.oxygen_max, 100.0);
        assert_eq!(t.drain_per_tick, 3.0);
        assert_eq!(t.regen_per_tick, 25.0);
        assert_eq!(t.tick_interval, 1.0);
        assert_eq!(t.ragdoll_snapshot_delay, 3.0);
    }

    #[test]
    fn test_default_is_valid() {
        assert!(SurvivalTuning::default().validate().is_empty());
    }

    #[test]
    fn test_invalid_tuning_reports_each_problem() {
        let t = SurvivalTuning {
            oxygen_max: 0.0,
            drain_per_tick: -1.0,
            regen_per_tick: 0.0,
            tick_interval: 0.0,
            first_tick_delay: -0.5,
            ragdoll_snapshot_delay: -1.0,
        };
        assert_eq!(t.validate().len(), 6);
    }

    #[test]
    fn test_ticks_to_drown() {
        // 100 / 3 = 33.33 → 34 ticks, the last one clamps to zero
        assert_eq!(SurvivalTuning::default().ticks_to_drown(), 34);

        let even = SurvivalTuning {
            drain_per_tick: 25.0,
            ..SurvivalTuning::default()
        };
        assert_eq!(even.ticks_to_drown(), 4);
    }
}
