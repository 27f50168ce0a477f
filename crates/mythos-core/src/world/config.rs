use serde::{Deserialize, Serialize};

/// Configuration for the default world generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldGenConfig {
    /// Tiles along the x axis
    pub width: u32,
    /// Tiles along the y axis
    pub height: u32,
    /// Mixed into every realm seed; change it to reshuffle all realms
    pub seed_salt: u64,
    /// Chance (0-1) that a walkable tile carries a landmark
    pub landmark_density: f32,
}

impl Default for WorldGenConfig {
    fn default() -> Self {
        Self {
            width: 32,
            height: 32,
            seed_salt: 0,
            landmark_density: 0.02,
        }
    }
}
