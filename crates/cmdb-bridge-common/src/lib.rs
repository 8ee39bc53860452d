//! CMDB Bridge Common - Shared types and utilities
//!
//! This crate provides the foundational pieces used across the bridge crates:
//! - The step result envelope handed to the pipeline engine
//! - The CMDB gateway response envelope and its failure type
//! - Object type and API name constants
//! - Logging initialisation

pub mod constants;
pub mod error;
pub mod logging;
pub mod model;

// Re-exports for convenience
pub use error::ApiFailure;
pub use logging::{LoggingConfig, init_logging};
pub use model::{ApiResponse, StepResult};
