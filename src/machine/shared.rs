//! Lock-guarded handle for sharing one machine across threads.

use crate::core::{Action, Guard, State};
use crate::machine::engine::StateMachine;
use crate::machine::transition::TransitionError;
use parking_lot::Mutex;
use std::sync::Arc;

/// Cloneable handle to a [`StateMachine`] behind a mutex.
///
/// Every method holds the lock for its whole duration, so a transition
/// together with its guard and actions is atomic with respect to other
/// holders of the handle. Guards and actions must not call back into the
/// same handle; the lock is not reentrant.
///
/// # Example
///
/// ```rust
/// use turnstile::machine::SharedStateMachine;
/// use std::thread;
///
/// let machine = SharedStateMachine::new("Idle");
/// machine.add_simple_transition("Idle", "Busy");
///
/// let worker = machine.clone();
/// thread::spawn(move || worker.transition("Busy").unwrap())
///     .join()
///     .unwrap();
///
/// assert_eq!(machine.current_state(), "Busy");
/// ```
#[derive(Debug)]
pub struct SharedStateMachine<S: State> {
    inner: Arc<Mutex<StateMachine<S>>>,
}

impl<S: State> Clone for SharedStateMachine<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: State> From<StateMachine<S>> for SharedStateMachine<S> {
    fn from(machine: StateMachine<S>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(machine)),
        }
    }
}

impl<S: State> SharedStateMachine<S> {
    pub fn new(initial: S) -> Self {
        StateMachine::new(initial).into()
    }

    pub fn add_transition(
        &self,
        from: S,
        to: S,
        guard: Option<Guard>,
        action: Option<Action>,
    ) {
        self.inner.lock().add_transition(from, to, guard, action);
    }

    pub fn add_simple_transition(&self, from: S, to: S) {
        self.inner.lock().add_simple_transition(from, to);
    }

    pub fn set_entry_action(&self, state: S, action: Action) {
        self.inner.lock().set_entry_action(state, action);
    }

    pub fn set_exit_action(&self, state: S, action: Action) {
        self.inner.lock().set_exit_action(state, action);
    }

    /// Snapshot of the current state.
    pub fn current_state(&self) -> S {
        self.inner.lock().current_state().clone()
    }

    pub fn can_transition(&self, to: &S) -> bool {
        self.inner.lock().can_transition(to)
    }

    pub fn transition(&self, to: S) -> Result<(), TransitionError> {
        self.inner.lock().transition(to)
    }

    pub fn reset(&self) {
        self.inner.lock().reset();
    }

    /// Run `f` with exclusive access to the machine, e.g. to check and
    /// transition without another thread interleaving.
    pub fn with<R>(&self, f: impl FnOnce(&mut StateMachine<S>) -> R) -> R {
        f(&mut self.inner.lock())
    }
}
