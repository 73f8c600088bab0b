//! Deterministic timer bank — replaces the engine's timer manager.
//!
//! One slot per purpose: the survival loop never needs two timers for the
//! same job, so slots are keyed by [`TimerId`] rather than opaque handles.
//! [`TimerBank::advance`] steps simulated time and returns fired ids in
//! slot order, so transition handling stays deterministic and the whole
//! thing unit-tests without a running engine.

use serde::{Deserialize, Serialize};

/// Fixed timer purposes. At most one of `OxygenDrain`/`OxygenRegen` is
/// active at any time; the survival machine enforces that at every
/// transition, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerId {
    OxygenDrain,
    OxygenRegen,
    RagdollSnapshot,
}

impl TimerId {
    pub const ALL: [TimerId; 3] = [
        TimerId::OxygenDrain,
        TimerId::OxygenRegen,
        TimerId::RagdollSnapshot,
    ];

    fn slot(self) -> usize {
        match self {
            TimerId::OxygenDrain => 0,
            TimerId::OxygenRegen => 1,
            TimerId::RagdollSnapshot => 2,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Timer {
    /// Seconds until the next fire.
    remaining: f32,
    /// `Some(interval)` re-arms after each fire; `None` is one-shot.
    interval: Option<f32>,
}

/// A small bank of purpose-keyed timers driven by simulated time.
#[derive(Debug, Default)]
pub struct TimerBank {
    slots: [Option<Timer>; 3],
}

impl TimerBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm a repeating timer. First fire after `first_delay`, then every
    /// `interval`. Re-arming an already-active id restarts it.
    pub fn start_repeating(&mut self, id: TimerId, interval: f32, first_delay: f32) {
        debug_assert!(interval > 0.0, "repeating timer needs a positive interval");
        self.slots[id.slot()] = Some(Timer {
            remaining: first_delay,
            interval: Some(interval),
        });
    }

    /// Arm a one-shot timer firing once after `delay`.
    pub fn start_one_shot(&mut self, id: TimerId, delay: f32) {
        self.slots[id.slot()] = Some(Timer {
            remaining: delay,
            interval: None,
        });
    }

    /// Disarm a timer. Cancelling an inactive id is a no-op.
    pub fn cancel(&mut self, id: TimerId) {
        self.slots[id.slot()] = None;
    }

    pub fn is_active(&self, id: TimerId) -> bool {
        self.slots[id.slot()].is_some()
    }

    /// Step simulated time by `dt` seconds and return every timer fire, in
    /// slot order. A repeating timer that fell more than one interval
    /// behind fires once per elapsed interval (catch-up); a one-shot
    /// disarms after its single fire.
    pub fn advance(&mut self, dt: f32) -> Vec<TimerId> {
        let mut fired = Vec::new();

        for id in TimerId::ALL {
            let idx = id.slot();
            let Some(mut timer) = self.slots[idx] else {
                continue;
            };

            timer.remaining -= dt;
            let mut expired = false;
            while timer.remaining <= 0.0 {
                fired.push(id);
                match timer.interval {
                    Some(interval) => timer.remaining += interval.max(f32::EPSILON),
                    None => {
                        expired = true;
                        break;
                    }
                }
            }

            self.slots[idx] = if expired { None } else { Some(timer) };
        }

        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inactive_by_default() {
        let bank = TimerBank::new();
        for id in TimerId::ALL {
            assert!(!bank.is_active(id));
        }
    }

    #[test]
    fn test_repeating_fires_every_interval() {
        let mut bank = TimerBank::new();
        bank.start_repeating(TimerId::OxygenDrain, 1.0, 1.0);

        assert!(bank.advance(0.5).is_empty());
        assert_eq!(bank.advance(0.5), vec![TimerId::OxygenDrain]);
        assert_eq!(bank.advance(1.0), vec![TimerId::OxygenDrain]);
        assert!(bank.is_active(TimerId::OxygenDrain));
    }

    #[test]
    fn test_repeating_catches_up_on_large_step() {
        let mut bank = TimerBank::new();
        bank.start_repeating(TimerId::OxygenDrain, 1.0, 1.0);

        let fired = bank.advance(3.5);
        assert_eq!(fired.len(), 3);
        assert!(fired.iter().all(|&id| id == TimerId::OxygenDrain));
    }

    #[test]
    fn test_one_shot_fires_once_then_disarms() {
        let mut bank = TimerBank::new();
        bank.start_one_shot(TimerId::RagdollSnapshot, 3.0);

        assert!(bank.advance(2.9).is_empty());
        assert_eq!(bank.advance(0.1), vec![TimerId::RagdollSnapshot]);
        assert!(!bank.is_active(TimerId::RagdollSnapshot));
        assert!(bank.advance(10.0).is_empty());
    }

    #[test]
    fn test_cancel_disarms() {
        let mut bank = TimerBank::new();
        bank.start_repeating(TimerId::OxygenRegen, 1.0, 1.0);
        bank.cancel(TimerId::OxygenRegen);
        assert!(!bank.is_active(TimerId::OxygenRegen));
        assert!(bank.advance(5.0).is_empty());

        // cancelling again is a no-op
        bank.cancel(TimerId::OxygenRegen);
    }

    #[test]
    fn test_restart_resets_delay() {
        let mut bank = TimerBank::new();
        bank.start_repeating(TimerId::OxygenDrain, 1.0, 1.0);
        bank.advance(0.9);
        bank.start_repeating(TimerId::OxygenDrain, 1.0, 1.0);

        assert!(bank.advance(0.9).is_empty());
        assert_eq!(bank.advance(0.1), vec![TimerId::OxygenDrain]);
    }

    #[test]
    fn test_fire_order_is_slot_order() {
        let mut bank = TimerBank::new();
        bank.start_one_shot(TimerId::RagdollSnapshot, 1.0);
        bank.start_repeating(TimerId::OxygenDrain, 1.0, 1.0);

        assert_eq!(
            bank.advance(1.0),
            vec![TimerId::OxygenDrain, TimerId::RagdollSnapshot]
        );
    }
}
