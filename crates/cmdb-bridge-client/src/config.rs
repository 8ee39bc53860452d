// Configuration for CmdbClient

use ::config::{Config, Environment, File};
use cmdb_bridge_common::constants::{DEFAULT_SUPPLIER_ACCOUNT, api_path};
use serde::Deserialize;

/// Configuration for the CMDB gateway client
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct CmdbClientConfig {
    /// Gateway addresses (e.g. ["http://paas.example.com"]); tried in order on failure
    pub server_addrs: Vec<String>,
    /// Application code registered with the gateway
    pub app_code: String,
    /// Application secret registered with the gateway
    pub app_secret: String,
    /// Operator the calls are made on behalf of
    pub username: String,
    /// Supplier account sent with every request (default: "0")
    pub supplier_account: String,
    /// Connection timeout in milliseconds (default: 5000)
    pub connect_timeout_ms: u64,
    /// Read timeout in milliseconds (default: 30000)
    pub read_timeout_ms: u64,
    /// Path prefix of the CMDB component APIs
    pub api_prefix: String,
}

impl Default for CmdbClientConfig {
    fn default() -> Self {
        Self {
            server_addrs: vec!["http://127.0.0.1:80".to_string()],
            app_code: String::new(),
            app_secret: String::new(),
            username: "admin".to_string(),
            supplier_account: DEFAULT_SUPPLIER_ACCOUNT.to_string(),
            connect_timeout_ms: 5000,
            read_timeout_ms: 30000,
            api_prefix: api_path::DEFAULT_PREFIX.to_string(),
        }
    }
}

impl CmdbClientConfig {
    /// Create a new config with a single server address
    pub fn new(server_addr: &str) -> Self {
        Self {
            server_addrs: vec![server_addr.to_string()],
            ..Default::default()
        }
    }

    /// Create a config with multiple server addresses
    pub fn with_servers(server_addrs: Vec<String>) -> Self {
        Self {
            server_addrs,
            ..Default::default()
        }
    }

    /// Set application credentials
    pub fn with_app(mut self, app_code: &str, app_secret: &str) -> Self {
        self.app_code = app_code.to_string();
        self.app_secret = app_secret.to_string();
        self
    }

    /// Set the operator name
    pub fn with_username(mut self, username: &str) -> Self {
        self.username = username.to_string();
        self
    }

    pub fn with_supplier_account(mut self, supplier_account: &str) -> Self {
        self.supplier_account = supplier_account.to_string();
        self
    }

    /// Set timeouts
    pub fn with_timeouts(mut self, connect_ms: u64, read_ms: u64) -> Self {
        self.connect_timeout_ms = connect_ms;
        self.read_timeout_ms = read_ms;
        self
    }

    pub fn with_api_prefix(mut self, prefix: &str) -> Self {
        self.api_prefix = prefix.to_string();
        self
    }

    /// Load from an optional config file overlaid with `CMDB_*` environment
    /// variables (e.g. `CMDB_APP_CODE`, `CMDB_SERVER_ADDRS=http://a,http://b`).
    ///
    /// Keys missing from both sources keep their defaults.
    pub fn load(path: Option<&str>) -> Result<Self, ::config::ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::with_name(path));
        }
        builder
            .add_source(
                Environment::with_prefix("CMDB")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("server_addrs"),
            )
            .build()?
            .try_deserialize()
    }

    /// Reject configurations the client cannot work with
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.server_addrs.is_empty() {
            anyhow::bail!("at least one server address is required");
        }
        if let Some(addr) = self
            .server_addrs
            .iter()
            .find(|addr| !addr.starts_with("http://") && !addr.starts_with("https://"))
        {
            anyhow::bail!("server address '{}' must start with http:// or https://", addr);
        }
        Ok(())
    }
}
