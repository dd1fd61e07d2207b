//! Light Switch
//!
//! The smallest useful machine: two states, two edges, and an entry
//! action that logs a marker whenever the light comes on.
//!
//! Run with: cargo run --example light_switch

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use turnstile::core::Action;
use turnstile::machine::StateMachine;
use turnstile::state_enum;

state_enum! {
    enum Light {
        Off,
        On,
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut light = StateMachine::new(Light::Off);
    light.add_simple_transition(Light::Off, Light::On);
    light.add_simple_transition(Light::On, Light::Off);
    light.set_entry_action(
        Light::On,
        Action::new(|| {
            info!("the light is on");
            Ok(())
        }),
    );

    info!(state = ?light.current_state(), "initial state");

    for target in [Light::On, Light::Off, Light::On, Light::On] {
        match light.transition(target) {
            Ok(()) => info!(state = ?light.current_state(), "transitioned"),
            Err(err) => warn!(%err, state = ?light.current_state(), "transition refused"),
        }
    }
}
