// cmdb-bridge-client: CMDB gateway HTTP client and pipeline step operations

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod model;

pub use api::CmdbApi;
pub use client::CmdbClient;
pub use config::CmdbClientConfig;
pub use error::{CmdbError, Result};
pub use http::CmdbHttpClient;
