//! Transition records and the errors a transition attempt can produce.

use crate::core::{Action, ActionError, Guard, State};

/// Errors that can occur during transitions.
///
/// Every variant except `EntryActionFailed` is raised before the machine's
/// state changes. `EntryActionFailed` is raised after the machine has
/// already rolled back to the state it held before the call.
#[derive(Debug, thiserror::Error)]
pub enum TransitionError {
    #[error("No transitions defined from state '{from}'")]
    NoTransitionsDefined { from: String },

    #[error("Invalid transition from '{from}' to '{to}'")]
    InvalidTransition { from: String, to: String },

    #[error("Guard rejected transition from '{from}' to '{to}'")]
    GuardRejected { from: String, to: String },

    #[error("Exit action failed for state '{state}': {source}")]
    ExitActionFailed {
        state: String,
        #[source]
        source: ActionError,
    },

    #[error("Transition action failed from '{from}' to '{to}': {source}")]
    TransitionActionFailed {
        from: String,
        to: String,
        #[source]
        source: ActionError,
    },

    #[error("Entry action failed for state '{state}': {source}")]
    EntryActionFailed {
        state: String,
        #[source]
        source: ActionError,
    },
}

/// Fieldless discriminant of [`TransitionError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionErrorKind {
    NoTransitionsDefined,
    InvalidTransition,
    GuardRejected,
    ExitActionFailed,
    TransitionActionFailed,
    EntryActionFailed,
}

impl TransitionError {
    pub fn kind(&self) -> TransitionErrorKind {
        match self {
            Self::NoTransitionsDefined { .. } => TransitionErrorKind::NoTransitionsDefined,
            Self::InvalidTransition { .. } => TransitionErrorKind::InvalidTransition,
            Self::GuardRejected { .. } => TransitionErrorKind::GuardRejected,
            Self::ExitActionFailed { .. } => TransitionErrorKind::ExitActionFailed,
            Self::TransitionActionFailed { .. } => TransitionErrorKind::TransitionActionFailed,
            Self::EntryActionFailed { .. } => TransitionErrorKind::EntryActionFailed,
        }
    }

    /// True when a caller-supplied action failed, as opposed to the
    /// transition being refused by the table or a guard.
    pub fn is_action_failure(&self) -> bool {
        matches!(
            self.kind(),
            TransitionErrorKind::ExitActionFailed
                | TransitionErrorKind::TransitionActionFailed
                | TransitionErrorKind::EntryActionFailed
        )
    }
}

/// A directed edge from one state to another.
///
/// The optional guard vetoes the edge; the optional action runs after the
/// source state's exit action and before the state changes.
#[derive(Debug)]
pub struct Transition<S: State> {
    pub from: S,
    pub to: S,
    pub guard: Option<Guard>,
    pub action: Option<Action>,
}

impl<S: State> Transition<S> {
    /// An unguarded edge without an action.
    pub fn new(from: S, to: S) -> Self {
        Self {
            from,
            to,
            guard: None,
            action: None,
        }
    }

    /// Check if this edge leads to `to`.
    pub fn targets(&self, to: &S) -> bool {
        self.to == *to
    }

    /// Evaluate the guard; an unguarded edge is always allowed.
    pub fn guard_allows(&self) -> bool {
        self.guard.as_ref().is_none_or(Guard::check)
    }
}
