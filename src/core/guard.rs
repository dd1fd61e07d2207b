//! Guard predicates for controlling state transitions.
//!
//! Guards are zero-argument boolean functions consulted before a
//! transition runs any side effect. They capture whatever context they
//! need (a shared flag, a counter, a document) at construction time.

use std::fmt;

/// Predicate that decides whether a transition may execute.
///
/// Guards must not have side effects: [`StateMachine::can_transition`]
/// evaluates them as a read-only probe, and a later
/// [`StateMachine::transition`] evaluates them again.
///
/// [`StateMachine::can_transition`]: crate::machine::StateMachine::can_transition
/// [`StateMachine::transition`]: crate::machine::StateMachine::transition
///
/// # Example
///
/// ```rust
/// use turnstile::core::Guard;
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use std::sync::Arc;
///
/// let paid = Arc::new(AtomicBool::new(false));
/// let flag = Arc::clone(&paid);
/// let guard = Guard::new(move || flag.load(Ordering::SeqCst));
///
/// assert!(!guard.check());
/// paid.store(true, Ordering::SeqCst);
/// assert!(guard.check());
/// ```
pub struct Guard {
    predicate: Box<dyn Fn() -> bool + Send + Sync>,
}

impl Guard {
    /// Create a guard from a predicate function.
    ///
    /// The predicate must be side-effect free and thread-safe
    /// (Send + Sync).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// Evaluate the guard now.
    pub fn check(&self) -> bool {
        (self.predicate)()
    }
}

impl fmt::Debug for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Guard(..)")
    }
}
