//! Cyclic Machine
//!
//! Three string-named states wired in a ring. Shows that states can be
//! plain `&'static str` values and that skipping a step is refused.
//!
//! Run with: cargo run --example cycle

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use turnstile::machine::StateMachine;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut machine = StateMachine::new("A");
    machine.add_simple_transition("A", "B");
    machine.add_simple_transition("B", "C");
    machine.add_simple_transition("C", "A");

    info!(state = machine.current_state(), "initial state");

    for target in ["B", "A", "C", "A"] {
        if let Err(err) = machine.transition(target) {
            warn!(%err, "transition refused");
        }
        info!(state = machine.current_state(), "state after transition");
    }

    let path: Vec<_> = machine.history().get_path().into_iter().copied().collect();
    info!(?path, "path taken");
}
