//! Fallible side effects attached to states and transitions.

use std::fmt;

/// Underlying cause reported by a failed action.
///
/// Any `std::error::Error` converts into it, as does a plain string:
///
/// ```rust
/// use turnstile::core::ActionError;
///
/// let cause: ActionError = "printer offline".into();
/// assert_eq!(cause.to_string(), "printer offline");
/// ```
pub type ActionError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A zero-argument operation that may fail.
///
/// Used as a state's exit behavior, a state's entry behavior, or the
/// behavior of one specific transition. Actions may mutate captured
/// state, so they take `&mut self` to run.
///
/// # Example
///
/// ```rust
/// use turnstile::core::Action;
///
/// let mut opened = 0;
/// let mut action = Action::new(move || {
///     opened += 1;
///     if opened > 1 {
///         return Err("door already open".into());
///     }
///     Ok(())
/// });
///
/// assert!(action.run().is_ok());
/// assert!(action.run().is_err());
/// ```
pub struct Action {
    operation: Box<dyn FnMut() -> Result<(), ActionError> + Send>,
}

impl Action {
    /// Wrap a closure as an action.
    pub fn new<F>(operation: F) -> Self
    where
        F: FnMut() -> Result<(), ActionError> + Send + 'static,
    {
        Action {
            operation: Box::new(operation),
        }
    }

    /// Run the action once.
    pub fn run(&mut self) -> Result<(), ActionError> {
        (self.operation)()
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Action(..)")
    }
}
