//! Player collaborator - the character driven during exploration and battle

mod combat;
mod controller;

pub use combat::*;
pub use controller::*;

/// What the core needs from a player driver
pub trait PlayerSimulation {
    /// Advance by one frame
    fn update(&mut self, delta_seconds: f32);
}
