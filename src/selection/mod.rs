//! Server Selection Pipeline
//!
//! Filtering stages a `Selection` snapshot passes through before a
//! connection is checked out:
//! - Stages copy; they never mutate the snapshot in place
//! - Stages hold no state across calls and perform no I/O of their own
//! - An unsatisfiable request fails the attempt; it is never retried here

mod errors;
mod max_staleness;

pub use errors::{SelectionError, SelectionResult};
pub use max_staleness::{filter_no_primary, filter_with_primary, select, validate_max_staleness};
