//! Structural errors raised by the lifecycle core
//!
//! These are programmer errors: calling an action from the wrong state,
//! applying an edge missing from the transition table, or driving the core
//! before `init()`. Expected negative outcomes (no hook bound, a rejected
//! realm) are `Ok(false)`, never one of these.

use crate::state::State;

/// Errors that can occur while driving the lifecycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleError {
    /// The edge `from -> to` is not in the transition table
    InvalidTransition { from: State, to: State },
    /// `operation` is not defined while in `state`
    PreconditionViolation {
        operation: &'static str,
        state: State,
    },
    /// `update` or an action was called before `init()`
    NotInitialized,
}

impl std::fmt::Display for LifecycleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LifecycleError::InvalidTransition { from, to } => {
                write!(f, "Illegal transition from {} to {}", from, to)
            }
            LifecycleError::PreconditionViolation { operation, state } => {
                write!(f, "{} is not permitted in state {}", operation, state)
            }
            LifecycleError::NotInitialized => {
                write!(f, "init must be called before driving the game core")
            }
        }
    }
}

impl std::error::Error for LifecycleError {}

pub type Result<T> = std::result::Result<T, LifecycleError>;
