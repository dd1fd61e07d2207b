//! Document Approval Workflow
//!
//! Draft -> Review -> Approved -> Published, with a rejection edge back to
//! Draft. Shows exit-action vetoes, transition actions and the rollback
//! that follows a failing entry action.
//!
//! Key concepts:
//! - Guards enforce business rules (word count)
//! - Actions perform side effects (audit logging, publishing)
//! - A failed entry action leaves the document where it was
//!
//! Run with: cargo run --example document_workflow

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use turnstile::core::{Action, Guard, State};
use turnstile::machine::StateMachine;
use turnstile::state_enum;

state_enum! {
    enum DocState {
        Draft,
        Review,
        Approved,
        Published,
    }
    final: [Published]
}

// Document entity
struct Document {
    id: u64,
    word_count: AtomicUsize,
}

#[derive(Default)]
struct AuditLog {
    entries: Mutex<Vec<String>>,
}

impl AuditLog {
    fn record(&self, doc_id: u64, message: &str) {
        info!(doc_id, event = message, "audit");
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(format!("{doc_id}: {message}"));
        }
    }
}

fn audited(audit: &Arc<AuditLog>, doc_id: u64, message: &'static str) -> Action {
    let audit = Arc::clone(audit);
    Action::new(move || {
        audit.record(doc_id, message);
        Ok(())
    })
}

fn step(workflow: &mut StateMachine<DocState>, target: DocState) {
    match workflow.transition(target) {
        Ok(()) => info!(to = target.name(), "document moved"),
        Err(err) => warn!(
            %err,
            current = workflow.current_state().name(),
            "document stayed"
        ),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let doc = Arc::new(Document {
        id: 123,
        word_count: AtomicUsize::new(40),
    });
    let audit = Arc::new(AuditLog::default());
    let cdn_online = Arc::new(AtomicBool::new(false));

    let mut workflow = StateMachine::new(DocState::Draft);

    let long_enough = Arc::clone(&doc);
    workflow.add_transition(
        DocState::Draft,
        DocState::Review,
        Some(Guard::new(move || {
            long_enough.word_count.load(Ordering::SeqCst) >= 100
        })),
        Some(audited(&audit, doc.id, "submitted for review")),
    );
    workflow.add_transition(
        DocState::Review,
        DocState::Approved,
        None,
        Some(audited(&audit, doc.id, "approved")),
    );
    workflow.add_transition(
        DocState::Review,
        DocState::Draft,
        None,
        Some(audited(&audit, doc.id, "sent back to draft")),
    );
    workflow.add_simple_transition(DocState::Approved, DocState::Published);

    let cdn = Arc::clone(&cdn_online);
    workflow.set_entry_action(
        DocState::Published,
        Action::new(move || {
            if cdn.load(Ordering::SeqCst) {
                Ok(())
            } else {
                Err("CDN unreachable".into())
            }
        }),
    );
    workflow.set_exit_action(DocState::Review, audited(&audit, doc.id, "review closed"));

    // Too short to review.
    step(&mut workflow, DocState::Review);

    doc.word_count.store(250, Ordering::SeqCst);
    step(&mut workflow, DocState::Review);
    step(&mut workflow, DocState::Approved);

    // Publishing fails on entry and rolls back to Approved.
    step(&mut workflow, DocState::Published);

    cdn_online.store(true, Ordering::SeqCst);
    step(&mut workflow, DocState::Published);

    let entries = audit.entries.lock().map(|e| e.len()).unwrap_or_default();
    info!(
        final_state = workflow.current_state().name(),
        audit_entries = entries,
        "workflow finished"
    );
}
