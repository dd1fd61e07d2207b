//! Core state machine types.
//!
//! This module contains the building blocks the engine is generic over:
//! - State definitions via the `State` trait
//! - Guard predicates and fallible actions
//! - History of completed transitions

mod action;
mod guard;
mod history;
mod state;

pub use action::{Action, ActionError};
pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use state::State;
