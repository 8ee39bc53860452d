//! Front-end instance id normalization
//!
//! Tree selectors in the step form submit either bare ids (`7`, `"7"`) or
//! composite tokens such as `"module_7"`.

use std::fmt;

use cmdb_bridge_common::constants::FRONTEND_ID_SEPARATOR;
use serde::{Deserialize, Serialize};

use crate::error::TopologyError;

/// An id as submitted by the front end
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FrontendId {
    Number(i64),
    Token(String),
}

impl FrontendId {
    /// Resolve to a numeric instance id.
    ///
    /// A token with exactly one `_` yields the part after it. Anything else,
    /// including tokens with several `_`, is parsed whole.
    pub fn instance_id(&self) -> Result<i64, TopologyError> {
        match self {
            FrontendId::Number(id) => Ok(*id),
            FrontendId::Token(token) => {
                let parts: Vec<&str> = token.split(FRONTEND_ID_SEPARATOR).collect();
                let raw = if parts.len() == 2 { parts[1] } else { token.as_str() };
                raw.trim()
                    .parse::<i64>()
                    .map_err(|source| TopologyError::InvalidInstanceId {
                        token: token.clone(),
                        source,
                    })
            }
        }
    }
}

impl fmt::Display for FrontendId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrontendId::Number(id) => write!(f, "{}", id),
            FrontendId::Token(token) => f.write_str(token),
        }
    }
}

impl From<i64> for FrontendId {
    fn from(value: i64) -> Self {
        FrontendId::Number(value)
    }
}

impl From<&str> for FrontendId {
    fn from(value: &str) -> Self {
        FrontendId::Token(value.to_string())
    }
}

/// Normalize a list of front-end ids; `None` yields an empty list.
pub fn normalize_frontend_ids(ids: Option<&[FrontendId]>) -> Result<Vec<i64>, TopologyError> {
    ids.unwrap_or_default()
        .iter()
        .map(FrontendId::instance_id)
        .collect()
}
