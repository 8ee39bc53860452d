// Common envelope types

use std::fmt::Display;

use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::error::ApiFailure;

/// Response envelope returned by every CMDB gateway API
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub result: bool,
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
    pub data: Option<T>,
}

impl<T: DeserializeOwned + Default> ApiResponse<T> {
    /// Unwrap the payload, turning `result: false` into an [`ApiFailure`].
    ///
    /// A successful response with a null `data` yields `T::default()`.
    pub fn into_data(self, api: &str, params: &serde_json::Value) -> Result<T, ApiFailure> {
        if !self.result {
            return Err(ApiFailure::new(api, params, self.code, &self.message));
        }
        Ok(self.data.unwrap_or_default())
    }
}

/// Outcome envelope consumed by the pipeline engine.
///
/// Serializes as `{"result": true, "data": ...}` or
/// `{"result": false, "message": "..."}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StepResult<T> {
    pub result: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> StepResult<T> {
    pub fn success(data: T) -> Self {
        Self {
            result: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            result: false,
            data: None,
            message: Some(message.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.result
    }
}

impl<T, E: Display> From<Result<T, E>> for StepResult<T> {
    fn from(value: Result<T, E>) -> Self {
        match value {
            Ok(data) => Self::success(data),
            Err(e) => Self::failure(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_api_response_success() {
        let json = r#"{"result":true,"code":0,"message":"success","data":[1,2]}"#;
        let resp: ApiResponse<Vec<i64>> = serde_json::from_str(json).unwrap();
        let data = resp.into_data("cc.test", &json!({})).unwrap();
        assert_eq!(data, vec![1, 2]);
    }

    #[test]
    fn test_api_response_null_data_defaults() {
        let json = r#"{"result":true,"code":0,"message":"","data":null}"#;
        let resp: ApiResponse<Vec<i64>> = serde_json::from_str(json).unwrap();
        assert!(resp.into_data("cc.test", &json!({})).unwrap().is_empty());
    }

    #[test]
    fn test_api_response_failure() {
        let json = r#"{"result":false,"code":1199048,"message":"biz not found","data":null}"#;
        let resp: ApiResponse<Vec<i64>> = serde_json::from_str(json).unwrap();
        let err = resp
            .into_data("cc.search_biz_inst_topo", &json!({"bk_biz_id": 9}))
            .unwrap_err();
        assert_eq!(err.api, "cc.search_biz_inst_topo");
        assert_eq!(err.code, 1199048);
        assert!(err.to_string().contains("biz not found"));
    }

    #[test]
    fn test_step_result_serialization() {
        let ok: StepResult<Vec<i64>> = StepResult::success(vec![3]);
        assert_eq!(
            serde_json::to_value(&ok).unwrap(),
            json!({"result": true, "data": [3]})
        );

        let failed: StepResult<Vec<i64>> = StepResult::failure("no such path: a>b");
        assert_eq!(
            serde_json::to_value(&failed).unwrap(),
            json!({"result": false, "message": "no such path: a>b"})
        );
    }

    #[test]
    fn test_step_result_from_result() {
        let ok: StepResult<i64> = Ok::<i64, String>(7).into();
        assert!(ok.is_success());
        assert_eq!(ok.data, Some(7));

        let failed: StepResult<i64> = Err::<i64, String>("boom".to_string()).into();
        assert!(!failed.is_success());
        assert_eq!(failed.data, None);
        assert_eq!(failed.message.as_deref(), Some("boom"));
    }
}
