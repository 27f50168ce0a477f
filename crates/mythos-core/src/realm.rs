//! Realm descriptors - which world is loaded

use serde::{Deserialize, Serialize};

/// Identifies a game world and the layer within it
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RealmDescriptor {
    pub id: String,
    /// Depth layer within the realm; 0 is the surface
    pub layer_index: i32,
}

impl RealmDescriptor {
    pub fn new(id: impl Into<String>, layer_index: i32) -> Self {
        Self {
            id: id.into(),
            layer_index,
        }
    }

    /// The "nothing loaded yet" value: empty id, layer 0
    pub fn unloaded() -> Self {
        Self::default()
    }

    pub fn is_unloaded(&self) -> bool {
        self.id.is_empty() && self.layer_index == 0
    }
}

impl std::fmt::Display for RealmDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_unloaded() {
            write!(f, "<no realm>")
        } else {
            write!(f, "{}#{}", self.id, self.layer_index)
        }
    }
}
