//! Upstream failure type shared by the bridge crates

/// A CMDB gateway response that came back with `result: false`.
///
/// The display string is what the pipeline shows to the operator, so it names
/// the API, the request parameters, and the upstream message.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("CMDB API {api} returned failure, params: {params}, error: {message}")]
pub struct ApiFailure {
    pub api: String,
    pub params: String,
    pub code: i64,
    pub message: String,
}

impl ApiFailure {
    pub fn new(api: &str, params: &serde_json::Value, code: i64, message: &str) -> Self {
        Self {
            api: api.to_string(),
            params: params.to_string(),
            code,
            message: message.to_string(),
        }
    }
}
