//! HTTP transport for the CMDB gateway
//!
//! Adds gateway credentials to every request, applies timeouts, and fails
//! over to the next configured server when a request cannot be sent.

use std::{sync::RwLock, time::Duration};

use cmdb_bridge_common::constants::{AUTHORIZATION_HEADER, LANGUAGE_HEADER};
use reqwest::{Client, Response};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::json;
use tracing::{debug, error, warn};

use crate::{
    config::CmdbClientConfig,
    error::{CmdbError, Result},
};

/// HTTP client with gateway authentication and failover support
pub struct CmdbHttpClient {
    client: Client,
    config: CmdbClientConfig,
    authorization: String,
    current_server_index: RwLock<usize>,
}

impl CmdbHttpClient {
    /// Create a new HTTP client
    pub fn new(config: CmdbClientConfig) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .timeout(Duration::from_millis(config.read_timeout_ms))
            .build()?;

        let authorization = serde_json::to_string(&json!({
            "bk_app_code": config.app_code,
            "bk_app_secret": config.app_secret,
            "bk_username": config.username,
        }))?;

        Ok(Self {
            client,
            config,
            authorization,
            current_server_index: RwLock::new(0),
        })
    }

    pub fn config(&self) -> &CmdbClientConfig {
        &self.config
    }

    /// Get the current server URL
    fn current_server(&self) -> String {
        let index = *self
            .current_server_index
            .read()
            .unwrap_or_else(|e| e.into_inner());
        self.config.server_addrs[index].clone()
    }

    /// Switch to the next server (for failover)
    fn switch_to_next_server(&self) {
        let mut index = self
            .current_server_index
            .write()
            .unwrap_or_else(|e| e.into_inner());
        *index = (*index + 1) % self.config.server_addrs.len();
        debug!("Switched to server index: {}", *index);
    }

    /// Build full URL with the API prefix
    fn build_url(&self, path: &str) -> String {
        let base_url = self.current_server();
        let prefix = self.config.api_prefix.trim_end_matches('/');

        if prefix.is_empty() {
            format!("{}{}", base_url.trim_end_matches('/'), path)
        } else {
            format!(
                "{}/{}{}",
                base_url.trim_end_matches('/'),
                prefix.trim_start_matches('/'),
                path
            )
        }
    }

    /// Make a POST request with JSON body.
    ///
    /// `locale`, when given, selects the response language for this request only.
    pub async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        locale: Option<&str>,
    ) -> Result<T> {
        let max_retries = self.config.server_addrs.len();
        let mut last_error: Option<CmdbError> = None;

        for _ in 0..max_retries {
            let url = self.build_url(path);
            debug!("POST {}", url);

            let mut request = self
                .client
                .post(&url)
                .header(AUTHORIZATION_HEADER, &self.authorization)
                .json(body);
            if let Some(locale) = locale {
                request = request.header(LANGUAGE_HEADER, locale);
            }

            match request.send().await {
                Ok(response) => return self.handle_response(response).await,
                Err(e) => {
                    warn!("Request failed: {}, switching to next server", e);
                    self.switch_to_next_server();
                    last_error = Some(e.into());
                }
            }
        }

        Err(last_error.unwrap_or(CmdbError::AllServersFailed))
    }

    /// Handle response and parse JSON
    async fn handle_response<T: DeserializeOwned>(&self, response: Response) -> Result<T> {
        let status = response.status();

        if status.is_success() {
            let result = response.json::<T>().await?;
            Ok(result)
        } else {
            let body = response.text().await.unwrap_or_default();
            error!("Request failed with status {}: {}", status, body);
            Err(CmdbError::RequestFailed {
                status: status.as_u16(),
                body,
            })
        }
    }
}
