//! Builder API for ergonomic state machine construction.
//!
//! This module provides fluent builders and macros for creating state machines
//! with minimal boilerplate while maintaining type safety.

pub mod error;
pub mod machine;
pub mod macros;
pub mod transition;

pub use error::BuildError;
pub use machine::StateMachineBuilder;
pub use transition::TransitionBuilder;

use crate::core::{Guard, State};
use crate::machine::Transition;

/// Create an unconditional transition without an action.
///
/// # Example
///
/// ```
/// use turnstile::builder::simple_transition;
///
/// let transition = simple_transition("Start", "End");
/// assert!(transition.guard_allows());
/// ```
pub fn simple_transition<S: State>(from: S, to: S) -> Transition<S> {
    Transition::new(from, to)
}

/// Create a transition gated by a guard predicate.
///
/// # Example
///
/// ```
/// use turnstile::builder::guarded_transition;
///
/// let transition = guarded_transition("Start", "Middle", || false);
/// assert!(!transition.guard_allows());
/// ```
pub fn guarded_transition<S, F>(from: S, to: S, guard: F) -> Transition<S>
where
    S: State,
    F: Fn() -> bool + Send + Sync + 'static,
{
    Transition {
        guard: Some(Guard::new(guard)),
        ..Transition::new(from, to)
    }
}
