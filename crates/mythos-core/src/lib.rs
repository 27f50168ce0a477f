//! Project Mythos Core - Game Lifecycle Controller
//!
//! Decides which high-level mode the game is in (booting, main menu,
//! exploring a realm, fighting, paused) and which moves between modes are
//! legal. Actual simulation is delegated to a world and a player
//! collaborator owned by the core; persistence and realm approval are
//! delegated to hooks bound by the host.
//!
//! # Architecture
//!
//! - **State**: the five modes and the transition table ([`state`])
//! - **Realms**: which world is loaded ([`realm`])
//! - **Hooks**: save, load, and realm-switch approval ([`hooks`])
//! - **Collaborators**: terrain ([`world`]) and the player ([`player`])
//! - **Engine**: the state machine tying it together ([`engine`])
//!
//! # Example
//!
//! ```rust
//! use mythos_core::prelude::*;
//!
//! let mut core = GameCore::new();
//! core.init();
//!
//! // Boot -> MainMenu
//! core.update(0.016)?;
//!
//! assert!(core.start_new_game(&RealmDescriptor::new("Elderglade", 0))?);
//! core.update(0.016)?;
//!
//! core.enter_battle()?;
//! core.update(0.016)?;
//! core.conclude_battle()?;
//!
//! core.pause()?;
//! core.resume()?;
//! assert_eq!(core.state(), State::InWorld);
//! # Ok::<(), LifecycleError>(())
//! ```

pub mod engine;
pub mod error;
pub mod hooks;
pub mod player;
pub mod realm;
pub mod state;
pub mod world;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::engine::GameCore;
    pub use crate::error::LifecycleError;
    pub use crate::hooks::{LoadHook, RealmSwitchHook, SaveHook};
    pub use crate::player::{CombatConfig, PlayerController, PlayerSimulation};
    pub use crate::realm::RealmDescriptor;
    pub use crate::state::State;
    pub use crate::world::{WorldGen, WorldGenConfig, WorldSimulation};
}
