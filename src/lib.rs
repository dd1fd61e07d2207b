//! Turnstile: a deterministic finite-state machine engine
//!
//! A machine tracks one current state and a table of legal transitions.
//! Callers attach optional guards to transitions and optional actions to
//! states (entry/exit) and to individual transitions. A transition either
//! completes fully or leaves the machine in the state it started from.
//!
//! # Core Concepts
//!
//! - **State**: any `Clone + Eq + Hash + Debug` value implementing `State`
//! - **Guards**: side-effect free predicates that veto transitions
//! - **Actions**: fallible side effects run on exit, on the edge, and on entry
//! - **History**: ordered record of completed transitions
//!
//! # Example
//!
//! ```rust
//! use turnstile::builder::StateMachineBuilder;
//! use turnstile::machine::TransitionErrorKind;
//! use turnstile::state_enum;
//!
//! state_enum! {
//!     enum Door {
//!         Closed,
//!         Open,
//!         Locked,
//!     }
//! }
//!
//! let mut door = StateMachineBuilder::new()
//!     .initial(Door::Closed)
//!     .simple(Door::Closed, Door::Open)
//!     .simple(Door::Open, Door::Closed)
//!     .simple(Door::Closed, Door::Locked)
//!     .on_entry(Door::Locked, || Err("bolt jammed".into()))
//!     .build()
//!     .unwrap();
//!
//! door.transition(Door::Open).unwrap();
//! door.transition(Door::Closed).unwrap();
//!
//! let err = door.transition(Door::Locked).unwrap_err();
//! assert_eq!(err.kind(), TransitionErrorKind::EntryActionFailed);
//! assert_eq!(door.current_state(), &Door::Closed);
//! ```

pub mod builder;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use crate::builder::{BuildError, StateMachineBuilder, TransitionBuilder};
pub use crate::core::{Action, ActionError, Guard, State, StateHistory, StateTransition};
pub use crate::machine::{
    SharedStateMachine, StateMachine, Transition, TransitionError, TransitionErrorKind,
};
