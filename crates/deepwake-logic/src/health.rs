//! Minimal health data shared by player and AI characters.

use serde::{Deserialize, Serialize};

/// Health values plus the monotonic death flag. The flag only ever goes
/// from `false` to `true`; the survival machine guards the transition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthComponent {
    pub current: f32,
    pub max: f32,
    pub dead: bool,
}

impl HealthComponent {
    pub fn new() -> Self {
        Self::with_max(100.0)
    }

    /// Spawn at full health.
    pub fn with_max(max: f32) -> Self {
        Self {
            current: max,
            max,
            dead: false,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }
}

impl Default for HealthComponent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawns_at_full_health() {
        let h = HealthComponent::new();
        assert_eq!(h.current, 100.0);
        assert_eq!(h.max, 100.0);
        assert!(!h.is_dead());
    }

    #[test]
    fn test_custom_max() {
        let h = HealthComponent::with_max(50.0);
        assert_eq!(h.current, 50.0);
        assert_eq!(h.max, 50.0);
    }
}
