//! Staleness-Bounded Filtering
//!
//! Estimates each secondary's replication lag from heartbeat snapshots and
//! drops members whose estimate exceeds the caller's bound. Staleness is
//! never measured, only estimated.
//!
//! With a known primary P, a secondary S is estimated as:
//!
//! ```text
//! (S.last_update_time - S.last_write_date)
//!   - (P.last_update_time - P.last_write_date)
//!   + heartbeat_frequency
//! ```
//!
//! With no known primary, S is estimated against SMax, the secondary with
//! the greatest last_write_date:
//!
//! ```text
//! SMax.last_write_date - S.last_write_date + heartbeat_frequency
//! ```
//!
//! Subtracting the primary's term cancels the observation-delay and
//! clock-skew components common to both members; the heartbeat frequency
//! covers worst-case staleness accrued between polls. A bound the
//! deployment can never satisfy is rejected before any filtering happens.

use crate::observability::{emit, Event, SelectionOutcome};
use crate::topology::Selection;

use super::errors::{SelectionError, SelectionResult};

/// Check that a staleness bound is achievable for this deployment.
///
/// A client can never observe staleness tighter than one heartbeat
/// interval plus the time a member may go without writing while idle.
/// Re-evaluated on every attempt: the relevant `idle_write_period` depends
/// on which member anchors the estimate.
pub fn validate_max_staleness(
    max_staleness: i64,
    heartbeat_frequency: i64,
    idle_write_period: i64,
) -> SelectionResult<()> {
    if max_staleness < heartbeat_frequency + idle_write_period {
        return Err(SelectionError::configuration(format!(
            "max_staleness must be at least heartbeat_frequency + idle_write_period \
             ({} + {} = {} seconds); it is set to {} seconds",
            heartbeat_frequency,
            idle_write_period,
            heartbeat_frequency + idle_write_period,
            max_staleness
        )));
    }

    Ok(())
}

/// Apply a staleness bound (seconds) to a snapshot with a known primary.
///
/// The bound is validated against the primary's idle-write period. Every
/// non-secondary member, the primary included, is kept unconditionally.
pub fn filter_with_primary(max_staleness: i64, selection: &Selection) -> SelectionResult<Selection> {
    // The dispatcher only routes here when a primary exists; a missing
    // primary means an upstream stage broke the snapshot contract.
    let primary = selection.primary().ok_or_else(|| {
        SelectionError::invariant_violation(
            "known-primary staleness filter invoked on a snapshot without a primary",
        )
    })?;

    validate_max_staleness(
        max_staleness,
        selection.heartbeat_frequency(),
        primary.idle_write_period,
    )?;

    let primary_lag = primary.observed_write_lag();
    let kept = selection
        .members()
        .iter()
        .filter(|s| {
            if !s.server_type.is_secondary() {
                return true;
            }
            let staleness =
                s.observed_write_lag() - primary_lag + selection.heartbeat_frequency();
            staleness <= max_staleness
        })
        .cloned()
        .collect();

    Ok(selection.with_members(kept))
}

/// Apply a staleness bound (seconds) to a snapshot with no known primary.
///
/// With no secondaries either, there is nothing eligible to read from and
/// the result is an empty snapshot. Otherwise the bound is validated
/// against the most recently checked secondary's idle-write period.
pub fn filter_no_primary(max_staleness: i64, selection: &Selection) -> SelectionResult<Selection> {
    // Secondary that has replicated the most recent writes.
    let smax = match selection.secondary_with_max_last_write_date() {
        Some(s) => s,
        None => return Ok(selection.with_members(Vec::new())),
    };
    let max_write_date = smax.last_write_date;

    // Secondary we've checked most recently. Defined over the same member
    // set as smax, so absence here is a broken snapshot.
    let srecent = selection
        .secondary_with_max_last_update_time()
        .ok_or_else(|| {
            SelectionError::invariant_violation(
                "snapshot has a secondary with a greatest last_write_date \
                 but none with a greatest last_update_time",
            )
        })?;

    validate_max_staleness(
        max_staleness,
        selection.heartbeat_frequency(),
        srecent.idle_write_period,
    )?;

    let kept = selection
        .members()
        .iter()
        .filter(|s| {
            if !s.server_type.is_secondary() {
                return true;
            }
            let staleness =
                max_write_date - s.last_write_date + selection.heartbeat_frequency();
            staleness <= max_staleness
        })
        .cloned()
        .collect();

    Ok(selection.with_members(kept))
}

/// Apply a staleness bound to a snapshot. Entry point of the stage.
///
/// `None` and `Some(0)` both disable the bound: the snapshot passes
/// through untouched, with no validation performed.
pub fn select(max_staleness: Option<i64>, selection: &Selection) -> SelectionResult<Selection> {
    let bound = match max_staleness {
        None | Some(0) => {
            emit(Event::StalenessFilterSkipped, &[]);
            return Ok(selection.clone());
        }
        Some(bound) => bound,
    };

    let result = if selection.has_primary() {
        filter_with_primary(bound, selection)
    } else {
        filter_no_primary(bound, selection)
    };

    match &result {
        Ok(filtered) => {
            SelectionOutcome::new(bound, selection.len(), filtered.len()).log();
        }
        Err(err) => {
            let event = if err.is_fatal() {
                Event::SnapshotContractViolated
            } else {
                Event::StalenessBoundRejected
            };
            let message = err.to_string();
            let bound = bound.to_string();
            emit(
                event,
                &[("error", &message), ("max_staleness_seconds", &bound)],
            );
        }
    }

    result
}
