//! Console logging setup for hosts embedding the bridge.
//!
//! The bridge crates only emit `tracing` events. A host that does not install
//! its own subscriber can call [`init_logging`] once at startup.
//!
//! `RUST_LOG` takes precedence over the configured level. Without it the
//! level comes from `CMDB_LOG_LEVEL` (see [`LoggingConfig::from_env`]).

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Console log level when `RUST_LOG` is not set
    pub level: Level,
    /// Include the event target (module path)
    pub with_target: bool,
    /// Emit ANSI colors
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            with_target: true,
            ansi: true,
        }
    }
}

impl LoggingConfig {
    /// Create from environment variables.
    pub fn from_env() -> Self {
        let level = std::env::var("CMDB_LOG_LEVEL")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(Level::INFO);

        let ansi = std::env::var("CMDB_LOG_ANSI")
            .map(|v| v.to_lowercase() != "false" && v != "0")
            .unwrap_or(true);

        Self {
            level,
            ansi,
            ..Default::default()
        }
    }

    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }
}

/// Install the global console subscriber.
///
/// Returns `false` when a global subscriber was already installed, in which
/// case nothing changes.
pub fn init_logging(config: &LoggingConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.to_string()));
    let console_layer = fmt::layer()
        .with_target(config.with_target)
        .with_ansi(config.ansi)
        .with_filter(filter);

    Registry::default().with(console_layer).try_init().is_ok()
}
