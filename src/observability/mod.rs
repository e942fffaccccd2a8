//! Observability for the selection pipeline
//!
//! # Principles
//!
//! 1. Observability is read-only: no side effects on selection results
//! 2. No async or background threads
//! 3. Deterministic output: identical events render identically
//! 4. Logging failure must never fail a selection attempt

mod events;
mod logger;

pub use events::{Event, SelectionOutcome};
pub use logger::{Logger, Severity};

/// Emit an event at its fixed severity, routed to stdout or stderr.
pub fn emit(event: Event, fields: &[(&str, &str)]) {
    let severity = event.severity();
    match severity {
        Severity::Error | Severity::Fatal => Logger::log_stderr(severity, event.as_str(), fields),
        _ => Logger::log(severity, event.as_str(), fields),
    }
}
