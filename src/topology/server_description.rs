//! Server Description
//!
//! An immutable snapshot of one replica-set member as of its last
//! heartbeat:
//! - `last_update_time` is stamped on the observing client's clock when
//!   the heartbeat reply arrives
//! - `last_write_date` is reported by the member itself
//! - A description never changes after receipt; the monitor publishes a
//!   fresh one on the next heartbeat

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Seconds a healthy member may go without accepting a write while idle.
///
/// A per-deployment constant; it bounds the tightest staleness guarantee a
/// client can ever be given.
pub const DEFAULT_IDLE_WRITE_PERIOD: i64 = 10;

/// Role a member reported in its last heartbeat.
///
/// Only `Primary` and `Secondary` carry staleness-relevant data; every
/// other variant passes staleness filtering untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServerType {
    /// Sole write authority of the replica set
    Primary,

    /// Consumes the primary's history, may serve reads
    Secondary,

    /// Votes in elections, holds no data
    Arbiter,

    /// Member of the set in a transitional role (e.g. still syncing)
    Other,

    /// No successful heartbeat yet, role not known
    Unknown,

    /// Member that does not currently consider itself part of the set
    Ghost,
}

impl ServerType {
    /// String name for logs and diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            ServerType::Primary => "PRIMARY",
            ServerType::Secondary => "SECONDARY",
            ServerType::Arbiter => "ARBITER",
            ServerType::Other => "OTHER",
            ServerType::Unknown => "UNKNOWN",
            ServerType::Ghost => "GHOST",
        }
    }

    /// Check if this member is the primary.
    pub fn is_primary(&self) -> bool {
        matches!(self, ServerType::Primary)
    }

    /// Check if this member is a secondary (the only role staleness
    /// filtering can drop).
    pub fn is_secondary(&self) -> bool {
        matches!(self, ServerType::Secondary)
    }
}

/// One member of a replica-set snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerDescription {
    /// Member identity; a `Selection` holds at most one description per id.
    pub member_id: Uuid,

    /// Address the connection layer dials (host:port).
    pub address: String,

    /// Role reported in the last heartbeat.
    pub server_type: ServerType,

    /// When this description was received, seconds on the observing
    /// client's clock.
    pub last_update_time: i64,

    /// The member's most recent write, seconds, as reported by the member.
    pub last_write_date: i64,

    /// Seconds this member goes without receiving writes when idle.
    /// Used only for staleness-bound validation.
    pub idle_write_period: i64,
}

impl ServerDescription {
    /// Create a description with the deployment-default idle write period.
    pub fn new(
        member_id: Uuid,
        address: impl Into<String>,
        server_type: ServerType,
        last_update_time: i64,
        last_write_date: i64,
    ) -> Self {
        Self {
            member_id,
            address: address.into(),
            server_type,
            last_update_time,
            last_write_date,
            idle_write_period: DEFAULT_IDLE_WRITE_PERIOD,
        }
    }

    /// Override the idle write period (per-deployment tuning).
    pub fn with_idle_write_period(mut self, seconds: i64) -> Self {
        self.idle_write_period = seconds;
        self
    }

    /// Seconds between receipt of this description and the member's last
    /// known write, on the observing clock.
    ///
    /// Subtracting the primary's value cancels the observation-delay and
    /// clock-skew terms common to both members, leaving replication lag.
    pub fn observed_write_lag(&self) -> i64 {
        self.last_update_time - self.last_write_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn desc(server_type: ServerType) -> ServerDescription {
        ServerDescription::new(Uuid::new_v4(), "db0:7878", server_type, 100, 95)
    }

    #[test]
    fn test_new_uses_default_idle_write_period() {
        let s = desc(ServerType::Secondary);
        assert_eq!(s.idle_write_period, DEFAULT_IDLE_WRITE_PERIOD);
    }

    #[test]
    fn test_with_idle_write_period_overrides_default() {
        let s = desc(ServerType::Secondary).with_idle_write_period(5);
        assert_eq!(s.idle_write_period, 5);
    }

    #[test]
    fn test_observed_write_lag() {
        let s = desc(ServerType::Secondary);
        assert_eq!(s.observed_write_lag(), 5);
    }

    #[test]
    fn test_role_predicates() {
        assert!(ServerType::Primary.is_primary());
        assert!(!ServerType::Primary.is_secondary());
        assert!(ServerType::Secondary.is_secondary());
        assert!(!ServerType::Secondary.is_primary());
        assert!(!ServerType::Arbiter.is_primary());
        assert!(!ServerType::Arbiter.is_secondary());
    }

    #[test]
    fn test_server_type_names() {
        assert_eq!(ServerType::Primary.as_str(), "PRIMARY");
        assert_eq!(ServerType::Secondary.as_str(), "SECONDARY");
        assert_eq!(ServerType::Arbiter.as_str(), "ARBITER");
        assert_eq!(ServerType::Other.as_str(), "OTHER");
        assert_eq!(ServerType::Unknown.as_str(), "UNKNOWN");
        assert_eq!(ServerType::Ghost.as_str(), "GHOST");
    }
}
