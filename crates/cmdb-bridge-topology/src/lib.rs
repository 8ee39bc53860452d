//! CMDB Bridge Topology - pure lookups over CMDB payloads
//!
//! This crate provides:
//! - Parsing of operator-entered topology path text
//! - Path matching against a business instance topology tree
//! - Set lookup for a module instance
//! - Front-end id normalization
//! - Host id lookup by inner IP
//! - Property option formatting
//!
//! Nothing here performs I/O. Payloads are fetched by the client crate and
//! handed in by reference.

pub mod error;
pub mod host;
pub mod ids;
pub mod path;
pub mod property;
pub mod tree;

pub use error::TopologyError;
pub use host::{HostInfo, HostRecord, host_ids_by_inner_ip};
pub use ids::{FrontendId, normalize_frontend_ids};
pub use path::{ParsedPath, match_paths, parse_path_text, resolve_path_text};
pub use property::{ObjectAttribute, format_property_options};
pub use tree::{TopologyNode, find_ancestor_set_id};
