//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::core::{Action, ActionError, State};
use crate::machine::{StateMachine, Transition};

/// Builder for constructing state machines with a fluent API.
///
/// Transitions keep the order in which they were added, which decides
/// which of several edges to the same destination is used.
pub struct StateMachineBuilder<S: State> {
    initial: Option<S>,
    transitions: Vec<Transition<S>>,
    entry_actions: Vec<(S, Action)>,
    exit_actions: Vec<(S, Action)>,
}

impl<S: State> StateMachineBuilder<S> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            transitions: Vec::new(),
            entry_actions: Vec::new(),
            exit_actions: Vec::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Add a transition using a builder.
    /// Returns an error if the builder fails validation.
    pub fn transition(mut self, builder: TransitionBuilder<S>) -> Result<Self, BuildError> {
        let transition = builder.build()?;
        self.transitions.push(transition);
        Ok(self)
    }

    /// Add a pre-built transition.
    pub fn add_transition(mut self, transition: Transition<S>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add multiple transitions at once.
    pub fn transitions(mut self, transitions: Vec<Transition<S>>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    /// Add an unguarded transition without an action.
    pub fn simple(self, from: S, to: S) -> Self {
        self.add_transition(Transition::new(from, to))
    }

    /// Set the entry action for `state`. A later call for the same state
    /// replaces the earlier one.
    pub fn on_entry<F>(mut self, state: S, operation: F) -> Self
    where
        F: FnMut() -> Result<(), ActionError> + Send + 'static,
    {
        self.entry_actions.push((state, Action::new(operation)));
        self
    }

    /// Set the exit action for `state`. A later call for the same state
    /// replaces the earlier one.
    pub fn on_exit<F>(mut self, state: S, operation: F) -> Self
    where
        F: FnMut() -> Result<(), ActionError> + Send + 'static,
    {
        self.exit_actions.push((state, Action::new(operation)));
        self
    }

    /// Build the state machine.
    /// Returns an error if no initial state was given.
    pub fn build(self) -> Result<StateMachine<S>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        let mut machine = StateMachine::new(initial);
        for transition in self.transitions {
            machine.add(transition);
        }
        for (state, action) in self.entry_actions {
            machine.set_entry_action(state, action);
        }
        for (state, action) in self.exit_actions {
            machine.set_exit_action(state, action);
        }

        Ok(machine)
    }
}

impl<S: State> Default for StateMachineBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}
