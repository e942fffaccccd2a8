//! aeroclient - Replica-set server selection for AeroDB clients
//!
//! Staleness-bounding stage of the server-selection pipeline.

pub mod observability;
pub mod selection;
pub mod topology;
