//! Terrain components stored in the world generator's ECS.

use serde::{Deserialize, Serialize};

/// Grid coordinate of a terrain tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub x: u32,
    pub y: u32,
}

impl Tile {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Ground type of a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Terrain {
    Meadow,
    Forest,
    Water,
    Rock,
    Cavern,
}

impl Terrain {
    /// Weighted pick for a tile. Deeper layers are rockier.
    pub fn from_roll(roll: f32, layer_index: i32) -> Self {
        let depth = (layer_index.max(0) as f32 * 0.15).min(0.6);
        if roll < depth {
            Terrain::Cavern
        } else if roll < depth + 0.15 {
            Terrain::Rock
        } else if roll < depth + 0.25 {
            Terrain::Water
        } else if roll < depth + 0.55 {
            Terrain::Forest
        } else {
            Terrain::Meadow
        }
    }

    pub fn is_walkable(&self) -> bool {
        !matches!(self, Terrain::Water | Terrain::Rock)
    }
}

/// Point of interest placed on a walkable tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Landmark {
    Shrine,
    Ruin,
    Lair,
}

impl Landmark {
    pub fn from_index(index: u32) -> Self {
        match index % 3 {
            0 => Landmark::Shrine,
            1 => Landmark::Ruin,
            _ => Landmark::Lair,
        }
    }
}
