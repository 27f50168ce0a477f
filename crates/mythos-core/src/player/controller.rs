use super::combat::{CombatConfig, CombatSystem};
use super::PlayerSimulation;

/// Default player driver: health recovery plus the combat cadence
#[derive(Debug, Clone)]
pub struct PlayerController {
    config: CombatConfig,
    combat: CombatSystem,
    health: f32,
    elapsed: f64,
}

impl PlayerController {
    pub fn new(config: CombatConfig) -> Self {
        Self {
            combat: CombatSystem::new(&config),
            health: config.max_health,
            elapsed: 0.0,
            config,
        }
    }

    pub fn health(&self) -> f32 {
        self.health
    }

    pub fn max_health(&self) -> f32 {
        self.config.max_health
    }

    /// Apply damage from an outside source, clamped at zero
    pub fn take_damage(&mut self, amount: f32) {
        self.health = (self.health - amount.max(0.0)).max(0.0);
    }

    pub fn is_defeated(&self) -> bool {
        self.health <= 0.0
    }

    pub fn combat(&self) -> &CombatSystem {
        &self.combat
    }

    /// Seconds this player has been simulated
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }
}

impl Default for PlayerController {
    fn default() -> Self {
        Self::new(CombatConfig::default())
    }
}

impl PlayerSimulation for PlayerController {
    fn update(&mut self, delta_seconds: f32) {
        let delta_seconds = delta_seconds.max(0.0);
        self.elapsed += delta_seconds as f64;
        if !self.is_defeated() {
            self.health =
                (self.health + self.config.regen_per_second * delta_seconds).min(self.config.max_health);
        }
        self.combat.update(delta_seconds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_full_health() {
        let player = PlayerController::default();
        assert_eq!(player.health(), player.max_health());
        assert!(!player.is_defeated());
    }

    #[test]
    fn test_regen_is_capped() {
        let mut player = PlayerController::new(CombatConfig {
            max_health: 10.0,
            regen_per_second: 2.0,
            ..Default::default()
        });
        player.take_damage(5.0);
        player.update(1.0);
        assert!((player.health() - 7.0).abs() < 1e-6);
        player.update(10.0);
        assert_eq!(player.health(), 10.0);
    }

    #[test]
    fn test_defeated_player_does_not_regenerate() {
        let mut player = PlayerController::default();
        player.take_damage(1000.0);
        assert_eq!(player.health(), 0.0);
        player.update(5.0);
        assert!(player.is_defeated());
    }

    #[test]
    fn test_update_drives_combat() {
        let mut player = PlayerController::default();
        player.update(0.016);
        player.update(0.016);
        assert_eq!(player.combat().strikes(), 1);
        assert!((player.elapsed() - 0.032).abs() < 1e-6);
    }

    #[test]
    fn test_negative_frame_is_ignored() {
        let mut player = PlayerController::default();
        player.take_damage(10.0);
        player.update(-1000.0);
        assert!((player.health() - 90.0).abs() < 1e-6);
        assert!(!player.is_defeated());
        assert_eq!(player.elapsed(), 0.0);
    }
}
