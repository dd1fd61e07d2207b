//! Trip Status Workflow
//!
//! A ride moves from request to completion. Guards check whether a driver
//! is assigned and whether payment cleared; transition actions do the work
//! tied to one specific edge; entry/exit actions log arrival and departure.
//!
//! Key concepts:
//! - Guards read shared flags at transition time
//! - `can_transition` probes without running any action
//! - Cancellation is only possible before the ride starts
//!
//! Run with: cargo run --example trip_status

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use turnstile::builder::{BuildError, StateMachineBuilder, TransitionBuilder};
use turnstile::core::State;
use turnstile::machine::StateMachine;
use turnstile::state_enum;

state_enum! {
    enum TripStatus {
        Requested,
        DriverAssigned,
        InProgress,
        Completed,
        Cancelled,
    }
    final: [Completed, Cancelled]
}

fn trip_machine(
    driver_available: Arc<AtomicBool>,
    payment_cleared: Arc<AtomicBool>,
) -> Result<StateMachine<TripStatus>, BuildError> {
    Ok(StateMachineBuilder::new()
        .initial(TripStatus::Requested)
        .transition(
            TransitionBuilder::new()
                .from(TripStatus::Requested)
                .to(TripStatus::DriverAssigned)
                .when(move || driver_available.load(Ordering::SeqCst))
                .action(|| {
                    info!("notifying rider that a driver is on the way");
                    Ok(())
                }),
        )?
        .simple(TripStatus::DriverAssigned, TripStatus::InProgress)
        .transition(
            TransitionBuilder::new()
                .from(TripStatus::InProgress)
                .to(TripStatus::Completed)
                .when(move || payment_cleared.load(Ordering::SeqCst))
                .action(|| {
                    info!("charging the fare");
                    Ok(())
                }),
        )?
        .simple(TripStatus::Requested, TripStatus::Cancelled)
        .simple(TripStatus::DriverAssigned, TripStatus::Cancelled)
        .on_exit(TripStatus::Requested, || {
            info!("request leaves the dispatch queue");
            Ok(())
        })
        .on_entry(TripStatus::Completed, || {
            info!("receipt sent");
            Ok(())
        })
        .build()?)
}

fn attempt(trip: &mut StateMachine<TripStatus>, target: TripStatus) {
    let allowed = trip.can_transition(&target);
    match trip.transition(target) {
        Ok(()) => info!(
            to = target.name(),
            final_state = trip.is_final(),
            "trip updated"
        ),
        Err(err) => warn!(
            %err,
            allowed,
            current = trip.current_state().name(),
            "trip update refused"
        ),
    }
}

fn main() -> Result<(), BuildError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let driver_available = Arc::new(AtomicBool::new(false));
    let payment_cleared = Arc::new(AtomicBool::new(false));
    let mut trip = trip_machine(Arc::clone(&driver_available), Arc::clone(&payment_cleared))?;

    // No driver yet: the guard refuses.
    attempt(&mut trip, TripStatus::DriverAssigned);

    driver_available.store(true, Ordering::SeqCst);
    attempt(&mut trip, TripStatus::DriverAssigned);
    attempt(&mut trip, TripStatus::InProgress);

    // Too late to cancel once the ride started.
    attempt(&mut trip, TripStatus::Cancelled);

    attempt(&mut trip, TripStatus::Completed);
    payment_cleared.store(true, Ordering::SeqCst);
    attempt(&mut trip, TripStatus::Completed);

    let path: Vec<&str> = trip
        .history()
        .get_path()
        .into_iter()
        .map(|s| s.name())
        .collect();
    info!(?path, "trip finished");

    Ok(())
}
