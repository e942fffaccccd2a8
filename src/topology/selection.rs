//! Selection Snapshot
//!
//! The unit of work of the server-selection pipeline:
//! - Produced fresh by the monitoring / read-preference stage for every
//!   selection attempt
//! - Each filtering stage copies; the input is never mutated, so the same
//!   snapshot may feed concurrent attempts without coordination
//! - Duplicate member ids collapse to the first occurrence (the monitor
//!   owns the no-duplicates invariant)

use std::collections::HashSet;

use super::server_description::ServerDescription;

/// Seconds between heartbeats to each member, absent explicit configuration.
pub const DEFAULT_HEARTBEAT_FREQUENCY: i64 = 10;

/// An immutable set of candidate members plus the deployment's heartbeat
/// cadence.
///
/// The primary, if one was present at construction, is cached by index so
/// repeated lookups stay O(1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    members: Vec<ServerDescription>,
    heartbeat_frequency: i64,
    primary_idx: Option<usize>,
}

impl Selection {
    /// Build a snapshot from member descriptions and the deployment's
    /// heartbeat frequency (seconds).
    pub fn new(members: Vec<ServerDescription>, heartbeat_frequency: i64) -> Self {
        let mut seen = HashSet::new();
        let members: Vec<ServerDescription> = members
            .into_iter()
            .filter(|m| seen.insert(m.member_id))
            .collect();
        let primary_idx = members.iter().position(|m| m.server_type.is_primary());

        Self {
            members,
            heartbeat_frequency,
            primary_idx,
        }
    }

    /// Members in this snapshot.
    pub fn members(&self) -> &[ServerDescription] {
        &self.members
    }

    /// Heartbeat cadence of the deployment, seconds.
    pub fn heartbeat_frequency(&self) -> i64 {
        self.heartbeat_frequency
    }

    /// The primary, if this snapshot contains one.
    pub fn primary(&self) -> Option<&ServerDescription> {
        self.primary_idx.map(|i| &self.members[i])
    }

    /// Check if this snapshot contains a primary.
    pub fn has_primary(&self) -> bool {
        self.primary_idx.is_some()
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Check if the snapshot holds no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Copy-on-filter: a new snapshot carrying `members` and the same
    /// heartbeat frequency. `self` is left untouched.
    pub fn with_members(&self, members: Vec<ServerDescription>) -> Selection {
        Selection::new(members, self.heartbeat_frequency)
    }

    /// The secondary that has replicated the most recent writes, if any
    /// secondaries exist. Ties resolve to any tied member; only the tied
    /// value feeds downstream computation.
    pub fn secondary_with_max_last_write_date(&self) -> Option<&ServerDescription> {
        self.members
            .iter()
            .filter(|m| m.server_type.is_secondary())
            .max_by_key(|m| m.last_write_date)
    }

    /// The secondary the client has checked most recently, if any
    /// secondaries exist.
    pub fn secondary_with_max_last_update_time(&self) -> Option<&ServerDescription> {
        self.members
            .iter()
            .filter(|m| m.server_type.is_secondary())
            .max_by_key(|m| m.last_update_time)
    }
}
