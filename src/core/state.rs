//! Core State trait for state machine states.
//!
//! States are plain values. The engine only ever compares them and uses
//! them as map keys, so equality and hashing must be stable for the
//! lifetime of the machine.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine states.
///
/// # Required Traits
///
/// - `Clone`: the engine keeps its own copies for the initial state,
///   rollback and history
/// - `Eq` + `Hash`: states key the transition table and action maps
/// - `Debug`: states must be debuggable for diagnostics
///
/// Use value types (enum tags, strings). A type whose equality depends on
/// interior mutability will corrupt transition lookups.
///
/// # Example
///
/// ```rust
/// use turnstile::core::State;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum TaskState {
///     Pending,
///     Running,
///     Complete,
/// }
///
/// impl State for TaskState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Pending => "Pending",
///             Self::Running => "Running",
///             Self::Complete => "Complete",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Complete)
///     }
/// }
/// ```
pub trait State: Clone + Eq + Hash + Debug + Send + Sync {
    /// Get the state's name for display and error messages.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// Purely informational: the engine does not refuse transitions out
    /// of a final state if the caller registered some.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}

impl State for &'static str {
    fn name(&self) -> &str {
        self
    }
}

impl State for String {
    fn name(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    enum TestState {
        Initial,
        Processing,
        Complete,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Initial => "Initial",
                Self::Processing => "Processing",
                Self::Complete => "Complete",
            }
        }

        fn is_final(&self) -> bool {
            matches!(self, Self::Complete)
        }
    }

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(TestState::Initial.name(), "Initial");
        assert_eq!(TestState::Processing.name(), "Processing");
        assert_eq!(TestState::Complete.name(), "Complete");
    }

    #[test]
    fn is_final_identifies_terminal_states() {
        assert!(!TestState::Initial.is_final());
        assert!(!TestState::Processing.is_final());
        assert!(TestState::Complete.is_final());
    }

    #[test]
    fn string_states_use_their_text_as_name() {
        assert_eq!("Idle".name(), "Idle");
        assert_eq!(String::from("Busy").name(), "Busy");
        assert!(!"Idle".is_final());
    }

    #[test]
    fn states_hash_by_value() {
        let mut seen = HashSet::new();
        seen.insert(TestState::Processing);
        assert!(seen.contains(&TestState::Processing));
        assert!(!seen.contains(&TestState::Initial));
    }
}
