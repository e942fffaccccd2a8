//! Topology Snapshot Model
//!
//! Client-side view of a replica set, as assembled by the monitoring loop:
//! - A `ServerDescription` is immutable, one per member per heartbeat
//! - A `Selection` is immutable; filtering copies, never mutates
//! - All timestamps in a snapshot share the observing client's clock,
//!   so cross-member comparisons are meaningful

mod selection;
mod server_description;

pub use selection::{Selection, DEFAULT_HEARTBEAT_FREQUENCY};
pub use server_description::{ServerDescription, ServerType, DEFAULT_IDLE_WRITE_PERIOD};
