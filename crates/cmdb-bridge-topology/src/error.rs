//! Error types for topology lookups

use std::num::ParseIntError;

/// Errors raised by the topology lookups
#[derive(Debug, thiserror::Error)]
pub enum TopologyError {
    /// A path of the batch did not match the tree; carries the joined path
    #[error("topology path does not exist: {path}")]
    PathNotFound { path: String },

    /// Every requested IP that is not a host of the business
    #[error(
        "cc.search_host reports IPs that do not belong to the current business: {}",
        .ips.join(",")
    )]
    HostsNotInBusiness { ips: Vec<String> },

    #[error("invalid instance id '{token}': {source}")]
    InvalidInstanceId {
        token: String,
        source: ParseIntError,
    },

    #[error("unexpected payload: {0}")]
    UnexpectedPayload(String),
}
