//! Builder for constructing state transitions.

use crate::builder::error::BuildError;
use crate::core::{Action, ActionError, Guard, State};
use crate::machine::Transition;

/// Builder for constructing transitions with a fluent API.
pub struct TransitionBuilder<S: State> {
    from: Option<S>,
    to: Option<S>,
    guard: Option<Guard>,
    action: Option<Action>,
}

impl<S: State> TransitionBuilder<S> {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self {
            from: None,
            to: None,
            guard: None,
            action: None,
        }
    }

    /// Set the source state (required).
    pub fn from(mut self, state: S) -> Self {
        self.from = Some(state);
        self
    }

    /// Set the target state (required).
    pub fn to(mut self, state: S) -> Self {
        self.to = Some(state);
        self
    }

    /// Add a guard (optional).
    pub fn guard(mut self, guard: Guard) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Add a guard using a closure (optional).
    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        self.guard = Some(Guard::new(predicate));
        self
    }

    /// Set the transition action using a closure (optional).
    pub fn action<F>(mut self, operation: F) -> Self
    where
        F: FnMut() -> Result<(), ActionError> + Send + 'static,
    {
        self.action = Some(Action::new(operation));
        self
    }

    /// Build the transition.
    pub fn build(self) -> Result<Transition<S>, BuildError> {
        let from = self.from.ok_or(BuildError::MissingFromState)?;
        let to = self.to.ok_or(BuildError::MissingToState)?;

        Ok(Transition {
            from,
            to,
            guard: self.guard,
            action: self.action,
        })
    }
}

impl<S: State> Default for TransitionBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}
