// Error types for CmdbClient

use cmdb_bridge_common::ApiFailure;
use cmdb_bridge_topology::TopologyError;

/// Errors that can occur during CMDB client operations
#[derive(Debug, thiserror::Error)]
pub enum CmdbError {
    /// The gateway answered with `result: false`
    #[error(transparent)]
    ApiFailed(#[from] ApiFailure),

    /// Lookup over a fetched payload failed (unmatched path, unknown IPs, ...)
    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error("All servers failed")]
    AllServersFailed,

    #[error("Request failed with status {status}: {body}")]
    RequestFailed { status: u16, body: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, CmdbError>;
