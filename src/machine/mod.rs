//! The transition engine and its error taxonomy.
//!
//! # Key Concepts
//!
//! - **Transitions**: directed edges with an optional guard and action
//! - **State Machine**: looks up edges, runs guards and actions in a fixed
//!   order, and rolls back when an entry action fails
//! - **Shared handle**: a mutex-guarded machine for multi-threaded callers
//!
//! # Transition order
//!
//! 1. find the edge list of the current state (`NoTransitionsDefined`)
//! 2. find the first edge to the destination (`InvalidTransition`)
//! 3. evaluate its guard (`GuardRejected`)
//! 4. run the current state's exit action (`ExitActionFailed`)
//! 5. run the edge's action (`TransitionActionFailed`)
//! 6. change state
//! 7. run the destination's entry action (`EntryActionFailed`, after
//!    rolling back step 6)

mod engine;
mod shared;
mod transition;

pub use engine::StateMachine;
pub use shared::SharedStateMachine;
pub use transition::{Transition, TransitionError, TransitionErrorKind};
