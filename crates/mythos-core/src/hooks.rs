//! Host-supplied hooks for persistence and realm-switch approval
//!
//! The core never decides how a game is stored. It hands the slot name and
//! the current realm to whatever the host binds, and treats the answer as
//! final. Any closure with a matching signature is a hook:
//!
//! ```
//! use mythos_core::prelude::*;
//!
//! let mut core = GameCore::new();
//! core.set_realm_switch_hook(|realm: &RealmDescriptor| realm.layer_index >= 0);
//! core.set_load_hook(|slot: &str| {
//!     (slot == "autosave").then(|| RealmDescriptor::new("Elderglade", 0))
//! });
//! ```

use crate::realm::RealmDescriptor;
use crate::state::State;

/// Persists the current session. Returns whether the save succeeded.
pub trait SaveHook {
    fn save(&mut self, slot: &str, realm: &RealmDescriptor, state: State) -> bool;
}

/// Looks up a saved session. `None` means nothing usable was found.
pub trait LoadHook {
    fn load(&mut self, slot: &str) -> Option<RealmDescriptor>;
}

/// Approves or vetoes a realm change before anything is committed.
pub trait RealmSwitchHook {
    fn approve(&mut self, realm: &RealmDescriptor) -> bool;
}

impl<F> SaveHook for F
where
    F: FnMut(&str, &RealmDescriptor, State) -> bool,
{
    fn save(&mut self, slot: &str, realm: &RealmDescriptor, state: State) -> bool {
        self(slot, realm, state)
    }
}

impl<F> LoadHook for F
where
    F: FnMut(&str) -> Option<RealmDescriptor>,
{
    fn load(&mut self, slot: &str) -> Option<RealmDescriptor> {
        self(slot)
    }
}

impl<F> RealmSwitchHook for F
where
    F: FnMut(&RealmDescriptor) -> bool,
{
    fn approve(&mut self, realm: &RealmDescriptor) -> bool {
        self(realm)
    }
}

/// The three optional hook slots held by the core
#[derive(Default)]
pub(crate) struct HookBindings {
    pub save: Option<Box<dyn SaveHook>>,
    pub load: Option<Box<dyn LoadHook>>,
    pub realm_switch: Option<Box<dyn RealmSwitchHook>>,
}

impl HookBindings {
    /// Unbound means approved
    pub fn approve_realm(&mut self, realm: &RealmDescriptor) -> bool {
        match self.realm_switch.as_mut() {
            Some(hook) => hook.approve(realm),
            None => true,
        }
    }
}
