//! World collaborator - terrain for the active realm
//!
//! The lifecycle core only ever asks a world to rebuild itself for a realm
//! and to advance by one frame. [`WorldGen`] is the stock implementation;
//! hosts may plug in their own through [`WorldSimulation`].

mod components;
mod config;
mod generator;

pub use components::*;
pub use config::*;
pub use generator::*;

use crate::realm::RealmDescriptor;

/// What the core needs from a world
pub trait WorldSimulation {
    /// Rebuild all content for `realm`
    fn generate(&mut self, realm: &RealmDescriptor);

    /// Advance by one frame
    fn update(&mut self, delta_seconds: f32);
}
