//! Combat rhythm - a cooldown-driven strike cadence

use serde::{Deserialize, Serialize};

const MIN_STRIKE_INTERVAL: f32 = 0.001;
/// Strikes owed beyond this in one frame are dropped
const MAX_STRIKES_PER_FRAME: u32 = 1000;

/// Tuning for the default player's combat and vitality
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatConfig {
    /// Seconds between strikes
    pub strike_interval: f32,
    pub max_health: f32,
    /// Health recovered per second, in and out of battle
    pub regen_per_second: f32,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            strike_interval: 0.8,
            max_health: 100.0,
            regen_per_second: 1.5,
        }
    }
}

/// Tracks when the player can strike next
#[derive(Debug, Clone)]
pub struct CombatSystem {
    strike_interval: f32,
    cooldown: f32,
    strikes: u32,
}

impl CombatSystem {
    pub fn new(config: &CombatConfig) -> Self {
        Self {
            strike_interval: config.strike_interval.max(MIN_STRIKE_INTERVAL),
            cooldown: 0.0,
            strikes: 0,
        }
    }

    /// Advance the cooldown; returns how many strikes landed this frame
    pub fn update(&mut self, delta_seconds: f32) -> u32 {
        self.cooldown -= delta_seconds.max(0.0);
        if self.cooldown > 0.0 {
            return 0;
        }
        let owed = (-self.cooldown / self.strike_interval).floor();
        let landed = if owed < MAX_STRIKES_PER_FRAME as f32 {
            let landed = owed as u32 + 1;
            self.cooldown += landed as f32 * self.strike_interval;
            landed
        } else {
            self.cooldown = self.strike_interval;
            MAX_STRIKES_PER_FRAME
        };
        self.strikes = self.strikes.saturating_add(landed);
        landed
    }

    pub fn strikes(&self) -> u32 {
        self.strikes
    }

    pub fn cooldown(&self) -> f32 {
        self.cooldown.max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_strikes() {
        let mut combat = CombatSystem::new(&CombatConfig::default());
        assert_eq!(combat.update(0.016), 1);
        assert_eq!(combat.strikes(), 1);
        assert!(combat.cooldown() > 0.7);
    }

    #[test]
    fn test_cadence() {
        let mut combat = CombatSystem::new(&CombatConfig {
            strike_interval: 0.5,
            ..Default::default()
        });
        // t = 0.1 strikes immediately, then every 0.5s
        combat.update(0.1);
        combat.update(0.3);
        assert_eq!(combat.strikes(), 1);
        combat.update(0.2);
        assert_eq!(combat.strikes(), 2);
    }

    #[test]
    fn test_long_frame_lands_multiple_strikes() {
        let mut combat = CombatSystem::new(&CombatConfig {
            strike_interval: 0.25,
            ..Default::default()
        });
        assert_eq!(combat.update(1.1), 5);
    }

    #[test]
    fn test_zero_interval_does_not_hang() {
        let mut combat = CombatSystem::new(&CombatConfig {
            strike_interval: 0.0,
            ..Default::default()
        });
        assert_eq!(combat.update(0.0), 1);
        assert!((9..=10).contains(&combat.update(0.01)));
    }

    #[test]
    fn test_huge_frame_is_capped() {
        let mut combat = CombatSystem::new(&CombatConfig::default());
        assert_eq!(combat.update(1.0e10), MAX_STRIKES_PER_FRAME);
        assert_eq!(combat.update(f32::INFINITY), MAX_STRIKES_PER_FRAME);
        assert_eq!(combat.strikes(), 2 * MAX_STRIKES_PER_FRAME);

        // Backlog is dropped, cadence resumes normally
        assert!(combat.cooldown() > 0.0);
        assert_eq!(combat.update(0.1), 0);
    }

    #[test]
    fn test_strike_total_saturates() {
        let mut combat = CombatSystem::new(&CombatConfig::default());
        combat.strikes = u32::MAX - 1;
        combat.update(1.0e10);
        assert_eq!(combat.strikes(), u32::MAX);
    }
}
