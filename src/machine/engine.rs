//! The transition engine.

use crate::core::{Action, Guard, State, StateHistory, StateTransition};
use crate::machine::transition::{Transition, TransitionError};
use chrono::Utc;
use std::collections::HashMap;

/// Deterministic finite-state machine over states of type `S`.
///
/// The machine holds one current state and a table of legal transitions.
/// Each transition attempt runs, in order: guard check, exit action of the
/// current state, the transition's own action, the state change, and the
/// entry action of the destination. Everything up to the state change can
/// veto the transition without touching the state; a failing entry action
/// restores the previous state before the error is returned.
///
/// # Example
///
/// ```rust
/// use turnstile::machine::{StateMachine, TransitionErrorKind};
///
/// let mut machine = StateMachine::new("Off");
/// machine.add_simple_transition("Off", "On");
/// machine.add_simple_transition("On", "Off");
///
/// machine.transition("On").unwrap();
/// assert_eq!(machine.current_state(), &"On");
///
/// let err = machine.transition("On").unwrap_err();
/// assert_eq!(err.kind(), TransitionErrorKind::InvalidTransition);
/// assert_eq!(machine.current_state(), &"On");
/// ```
#[derive(Debug)]
pub struct StateMachine<S: State> {
    current: S,
    initial: S,
    transitions: HashMap<S, Vec<Transition<S>>>,
    entry_actions: HashMap<S, Action>,
    exit_actions: HashMap<S, Action>,
    history: StateHistory<S>,
}

impl<S: State> StateMachine<S> {
    /// Create a new state machine in the initial state
    pub fn new(initial: S) -> Self {
        Self {
            current: initial.clone(),
            initial,
            transitions: HashMap::new(),
            entry_actions: HashMap::new(),
            exit_actions: HashMap::new(),
            history: StateHistory::new(),
        }
    }

    /// Register an edge from `from` to `to`.
    ///
    /// Edges are kept in registration order per source state. Duplicates
    /// are allowed; the first one registered for a destination is the one
    /// that is used.
    pub fn add_transition(
        &mut self,
        from: S,
        to: S,
        guard: Option<Guard>,
        action: Option<Action>,
    ) {
        self.add(Transition {
            from,
            to,
            guard,
            action,
        });
    }

    /// Register an edge with neither guard nor action.
    pub fn add_simple_transition(&mut self, from: S, to: S) {
        self.add(Transition::new(from, to));
    }

    /// Register a pre-built transition.
    pub fn add(&mut self, transition: Transition<S>) {
        self.transitions
            .entry(transition.from.clone())
            .or_default()
            .push(transition);
    }

    /// Set or replace the action run when entering `state`.
    pub fn set_entry_action(&mut self, state: S, action: Action) {
        self.entry_actions.insert(state, action);
    }

    /// Set or replace the action run when leaving `state`.
    pub fn set_exit_action(&mut self, state: S, action: Action) {
        self.exit_actions.insert(state, action);
    }

    /// Get current state
    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// Get the state the machine was created with
    pub fn initial_state(&self) -> &S {
        &self.initial
    }

    /// Check if machine is in a final state
    pub fn is_final(&self) -> bool {
        self.current.is_final()
    }

    /// Get history of completed transitions since creation or last reset
    pub fn history(&self) -> &StateHistory<S> {
        &self.history
    }

    /// Destinations registered from the current state, in registration
    /// order. Guards are not evaluated.
    pub fn available_transitions(&self) -> Vec<&S> {
        self.transitions
            .get(&self.current)
            .map(|edges| edges.iter().map(|t| &t.to).collect())
            .unwrap_or_default()
    }

    /// Check whether `transition(to)` would pass table lookup and guard
    /// evaluation right now.
    ///
    /// Only the first edge to `to` is consulted; a later duplicate with a
    /// passing guard does not make this true. Runs no actions.
    pub fn can_transition(&self, to: &S) -> bool {
        self.transitions
            .get(&self.current)
            .and_then(|edges| edges.iter().find(|t| t.targets(to)))
            .is_some_and(Transition::guard_allows)
    }

    /// Move from the current state to `to`.
    ///
    /// On any error the current state is the same as before the call.
    pub fn transition(&mut self, to: S) -> Result<(), TransitionError> {
        let from = self.current.clone();

        let edges = self.transitions.get_mut(&from).ok_or_else(|| {
            TransitionError::NoTransitionsDefined {
                from: from.name().to_string(),
            }
        })?;

        let matched = edges.iter_mut().find(|t| t.targets(&to)).ok_or_else(|| {
            TransitionError::InvalidTransition {
                from: from.name().to_string(),
                to: to.name().to_string(),
            }
        })?;

        if !matched.guard_allows() {
            return Err(TransitionError::GuardRejected {
                from: from.name().to_string(),
                to: to.name().to_string(),
            });
        }

        if let Some(exit) = self.exit_actions.get_mut(&from) {
            exit.run()
                .map_err(|source| TransitionError::ExitActionFailed {
                    state: from.name().to_string(),
                    source,
                })?;
        }

        if let Some(action) = matched.action.as_mut() {
            action
                .run()
                .map_err(|source| TransitionError::TransitionActionFailed {
                    from: from.name().to_string(),
                    to: to.name().to_string(),
                    source,
                })?;
        }

        self.current = to.clone();

        if let Some(entry) = self.entry_actions.get_mut(&to) {
            if let Err(source) = entry.run() {
                self.current = from;
                return Err(TransitionError::EntryActionFailed {
                    state: to.name().to_string(),
                    source,
                });
            }
        }

        self.history.push(StateTransition {
            from,
            to,
            timestamp: Utc::now(),
        });
        Ok(())
    }

    /// Return to the initial state without running any action.
    ///
    /// Registered transitions and actions are kept; history is cleared.
    pub fn reset(&mut self) {
        self.current = self.initial.clone();
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machine::TransitionErrorKind;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    enum WorkflowState {
        Initial,
        Processing,
        Complete,
        Failed,
    }

    impl State for WorkflowState {
        fn name(&self) -> &str {
            match self {
                Self::Initial => "Initial",
                Self::Processing => "Processing",
                Self::Complete => "Complete",
                Self::Failed => "Failed",
            }
        }

        fn is_final(&self) -> bool {
            matches!(self, Self::Complete | Self::Failed)
        }
    }

    use WorkflowState::*;

    type Log = Arc<Mutex<Vec<&'static str>>>;

    fn recording(log: &Log, label: &'static str) -> Action {
        let log = Arc::clone(log);
        Action::new(move || {
            log.lock().push(label);
            Ok(())
        })
    }

    fn failing(log: &Log, label: &'static str) -> Action {
        let log = Arc::clone(log);
        Action::new(move || {
            log.lock().push(label);
            Err(format!("{label} failed").into())
        })
    }

    #[test]
    fn new_machine_starts_in_initial_state() {
        let machine = StateMachine::new(Initial);

        assert_eq!(machine.current_state(), &Initial);
        assert_eq!(machine.initial_state(), &Initial);
        assert!(machine.history().is_empty());
        assert!(machine.available_transitions().is_empty());
    }

    #[test]
    fn simple_transition_succeeds() {
        let mut machine = StateMachine::new(Initial);
        machine.add_simple_transition(Initial, Processing);

        machine.transition(Processing).unwrap();

        assert_eq!(machine.current_state(), &Processing);
        assert_eq!(machine.history().len(), 1);
    }

    #[test]
    fn missing_source_state_reports_no_transitions() {
        let mut machine = StateMachine::new(Initial);
        machine.add_simple_transition(Processing, Complete);

        let err = machine.transition(Complete).unwrap_err();

        assert_eq!(err.kind(), TransitionErrorKind::NoTransitionsDefined);
        assert_eq!(machine.current_state(), &Initial);
        assert!(!machine.can_transition(&Complete));
    }

    #[test]
    fn unknown_destination_is_invalid() {
        let mut machine = StateMachine::new(Initial);
        machine.add_simple_transition(Initial, Processing);

        let err = machine.transition(Complete).unwrap_err();

        assert_eq!(err.kind(), TransitionErrorKind::InvalidTransition);
        assert_eq!(machine.current_state(), &Initial);
    }

    #[test]
    fn guard_blocks_transition_before_any_action() {
        let log = Log::default();
        let mut machine = StateMachine::new(Initial);
        machine.add_transition(
            Initial,
            Processing,
            Some(Guard::new(|| false)),
            Some(recording(&log, "transition")),
        );
        machine.set_exit_action(Initial, recording(&log, "exit"));
        machine.set_entry_action(Processing, recording(&log, "entry"));

        let err = machine.transition(Processing).unwrap_err();

        assert_eq!(err.kind(), TransitionErrorKind::GuardRejected);
        assert_eq!(machine.current_state(), &Initial);
        assert!(log.lock().is_empty());
    }

    #[test]
    fn actions_run_once_in_order() {
        let log = Log::default();
        let mut machine = StateMachine::new(Initial);
        machine.add_transition(
            Initial,
            Processing,
            Some(Guard::new(|| true)),
            Some(recording(&log, "transition")),
        );
        machine.set_exit_action(Initial, recording(&log, "exit"));
        machine.set_entry_action(Processing, recording(&log, "entry"));

        machine.transition(Processing).unwrap();

        assert_eq!(*log.lock(), vec!["exit", "transition", "entry"]);
    }

    #[test]
    fn exit_failure_aborts_before_transition_action() {
        let log = Log::default();
        let mut machine = StateMachine::new(Initial);
        machine.add_transition(Initial, Processing, None, Some(recording(&log, "transition")));
        machine.set_exit_action(Initial, failing(&log, "exit"));
        machine.set_entry_action(Processing, recording(&log, "entry"));

        let err = machine.transition(Processing).unwrap_err();

        assert_eq!(err.kind(), TransitionErrorKind::ExitActionFailed);
        assert_eq!(machine.current_state(), &Initial);
        assert_eq!(*log.lock(), vec!["exit"]);
    }

    #[test]
    fn transition_action_failure_leaves_state_untouched() {
        let log = Log::default();
        let mut machine = StateMachine::new(Initial);
        machine.add_transition(Initial, Processing, None, Some(failing(&log, "transition")));
        machine.set_exit_action(Initial, recording(&log, "exit"));
        machine.set_entry_action(Processing, recording(&log, "entry"));

        let err = machine.transition(Processing).unwrap_err();

        assert_eq!(err.kind(), TransitionErrorKind::TransitionActionFailed);
        assert_eq!(machine.current_state(), &Initial);
        assert_eq!(*log.lock(), vec!["exit", "transition"]);
    }

    #[test]
    fn entry_failure_rolls_back() {
        let log = Log::default();
        let mut machine = StateMachine::new(Initial);
        machine.add_simple_transition(Initial, Processing);
        machine.set_entry_action(Processing, failing(&log, "entry"));

        let err = machine.transition(Processing).unwrap_err();

        assert_eq!(err.kind(), TransitionErrorKind::EntryActionFailed);
        assert_eq!(err.to_string(), "Entry action failed for state 'Processing': entry failed");
        assert_eq!(machine.current_state(), &Initial);
        assert!(machine.history().is_empty());
    }

    #[test]
    fn first_registered_duplicate_wins() {
        let log = Log::default();
        let mut machine = StateMachine::new(Initial);
        machine.add_transition(Initial, Processing, None, Some(recording(&log, "first")));
        machine.add_transition(Initial, Processing, None, Some(recording(&log, "second")));

        machine.transition(Processing).unwrap();

        assert_eq!(*log.lock(), vec!["first"]);
    }

    #[test]
    fn rejected_first_duplicate_is_not_skipped() {
        let mut machine = StateMachine::new(Initial);
        machine.add_transition(Initial, Processing, Some(Guard::new(|| false)), None);
        machine.add_simple_transition(Initial, Processing);

        assert!(!machine.can_transition(&Processing));
        let err = machine.transition(Processing).unwrap_err();
        assert_eq!(err.kind(), TransitionErrorKind::GuardRejected);
    }

    #[test]
    fn can_transition_runs_no_actions() {
        let log = Log::default();
        let mut machine = StateMachine::new(Initial);
        machine.add_transition(Initial, Processing, None, Some(recording(&log, "transition")));
        machine.set_exit_action(Initial, recording(&log, "exit"));
        machine.set_entry_action(Processing, recording(&log, "entry"));

        assert!(machine.can_transition(&Processing));
        assert!(machine.can_transition(&Processing));
        assert!(!machine.can_transition(&Complete));

        assert!(log.lock().is_empty());
        assert_eq!(machine.current_state(), &Initial);
    }

    #[test]
    fn setting_an_action_again_replaces_it() {
        let log = Log::default();
        let mut machine = StateMachine::new(Initial);
        machine.add_simple_transition(Initial, Processing);
        machine.set_entry_action(Processing, failing(&log, "old"));
        machine.set_entry_action(Processing, recording(&log, "new"));

        machine.transition(Processing).unwrap();

        assert_eq!(*log.lock(), vec!["new"]);
    }

    #[test]
    fn reset_restores_initial_without_actions() {
        let log = Log::default();
        let mut machine = StateMachine::new(Initial);
        machine.add_simple_transition(Initial, Processing);
        machine.add_simple_transition(Processing, Complete);
        machine.transition(Processing).unwrap();
        machine.transition(Complete).unwrap();
        assert!(machine.is_final());

        machine.set_exit_action(Complete, recording(&log, "exit"));
        machine.set_entry_action(Initial, recording(&log, "entry"));
        machine.reset();

        assert_eq!(machine.current_state(), &Initial);
        assert!(machine.history().is_empty());
        assert!(log.lock().is_empty());

        // Configuration survives the reset.
        machine.transition(Processing).unwrap();
        assert_eq!(machine.current_state(), &Processing);
    }

    #[test]
    fn self_transition_runs_exit_and_entry() {
        let log = Log::default();
        let mut machine = StateMachine::new(Processing);
        machine.add_simple_transition(Processing, Processing);
        machine.set_exit_action(Processing, recording(&log, "exit"));
        machine.set_entry_action(Processing, recording(&log, "entry"));

        machine.transition(Processing).unwrap();

        assert_eq!(machine.current_state(), &Processing);
        assert_eq!(*log.lock(), vec!["exit", "entry"]);
    }

    #[test]
    fn available_transitions_keep_registration_order() {
        let mut machine = StateMachine::new(Processing);
        machine.add_simple_transition(Processing, Failed);
        machine.add_transition(Processing, Complete, Some(Guard::new(|| false)), None);
        machine.add_simple_transition(Processing, Failed);

        assert_eq!(
            machine.available_transitions(),
            vec![&Failed, &Complete, &Failed]
        );
    }

    #[test]
    fn long_running_machine_keeps_full_history() {
        let mut machine = StateMachine::new(Initial);
        machine.add_simple_transition(Initial, Processing);
        machine.add_simple_transition(Processing, Initial);

        let started = std::time::Instant::now();
        for i in 0..50_000 {
            let target = if i % 2 == 0 { Processing } else { Initial };
            machine.transition(target).unwrap();
        }

        assert!(started.elapsed() < std::time::Duration::from_secs(10));
        assert_eq!(machine.current_state(), &Initial);
        assert_eq!(machine.history().len(), 50_000);
        let last = machine.history().transitions().last().unwrap();
        assert_eq!((last.from, last.to), (Processing, Initial));

        machine.reset();
        assert!(machine.history().is_empty());
    }

    #[test]
    fn history_tracks_completed_path() {
        let mut machine = StateMachine::new(Initial);
        machine.add_simple_transition(Initial, Processing);
        machine.add_simple_transition(Processing, Failed);
        machine.add_simple_transition(Failed, Initial);

        machine.transition(Processing).unwrap();
        machine.transition(Failed).unwrap();
        machine.transition(Initial).unwrap();

        let path = machine.history().get_path();
        assert_eq!(path, vec![&Initial, &Processing, &Failed, &Initial]);
    }
}
