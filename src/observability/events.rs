//! Observability events for the selection pipeline
//!
//! Events are explicit and typed; each carries a fixed severity so the
//! emitting site never chooses one ad hoc.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::emit;
use super::logger::Severity;

/// Observable events in the staleness-bounding stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Staleness filter ran and produced a (possibly) reduced snapshot
    StalenessFilterApplied,

    /// No bound requested; the snapshot passed through untouched
    StalenessFilterSkipped,

    /// The requested bound can never be satisfied by this deployment
    StalenessBoundRejected,

    /// An upstream stage handed over a snapshot violating its contract
    SnapshotContractViolated,
}

impl Event {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::StalenessFilterApplied => "STALENESS_FILTER_APPLIED",
            Event::StalenessFilterSkipped => "STALENESS_FILTER_SKIPPED",
            Event::StalenessBoundRejected => "STALENESS_BOUND_REJECTED",
            Event::SnapshotContractViolated => "SNAPSHOT_CONTRACT_VIOLATED",
        }
    }

    /// Severity this event is always logged at.
    pub fn severity(&self) -> Severity {
        match self {
            Event::StalenessFilterApplied => Severity::Info,
            Event::StalenessFilterSkipped => Severity::Trace,
            Event::StalenessBoundRejected => Severity::Error,
            Event::SnapshotContractViolated => Severity::Fatal,
        }
    }
}

/// Summary of one staleness-filtering pass.
///
/// `at` is stamped when the record is built, after the pass completes; the
/// filter math itself reads no clock.
#[derive(Debug, Clone, Serialize)]
pub struct SelectionOutcome {
    /// Emission time, UTC
    pub at: DateTime<Utc>,

    /// Requested bound, seconds
    pub max_staleness: i64,

    /// Members in the input snapshot
    pub candidates: usize,

    /// Members surviving the filter
    pub kept: usize,
}

impl SelectionOutcome {
    /// Build a summary record, stamped now.
    pub fn new(max_staleness: i64, candidates: usize, kept: usize) -> Self {
        Self {
            at: Utc::now(),
            max_staleness,
            candidates,
            kept,
        }
    }

    /// Members the filter removed.
    pub fn dropped(&self) -> usize {
        self.candidates - self.kept
    }

    /// Emit this record as one structured log line.
    pub fn log(&self) {
        let at = self.at.to_rfc3339();
        let max_staleness = self.max_staleness.to_string();
        let candidates = self.candidates.to_string();
        let kept = self.kept.to_string();
        let dropped = self.dropped().to_string();

        emit(
            Event::StalenessFilterApplied,
            &[
                ("at", &at),
                ("candidates", &candidates),
                ("dropped", &dropped),
                ("kept", &kept),
                ("max_staleness_seconds", &max_staleness),
            ],
        );
    }
}
