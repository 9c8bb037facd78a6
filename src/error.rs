//! API Errors

use serde::Deserialize;
use thiserror::Error;

/// Errors surfaced by the remote API client
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("configuration error: {0}")]
    Config(String),
    /// 401 from the API; the session is no longer valid
    #[error("unauthorized")]
    Unauthorized,
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("invalid response: {0}")]
    Decode(String),
}

/// Error envelope returned by the API for failed requests
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default)]
    pub error_code: Option<i64>,
    #[serde(default)]
    pub time_stamp: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub validations: Vec<String>,
}

impl ApiError {
    /// Map a non-success status and its body to an error
    pub fn from_status(status: u16, body: &str) -> Self {
        if status == 401 {
            return ApiError::Unauthorized;
        }
        let message = serde_json::from_str::<ErrorResponse>(body)
            .map(|envelope| {
                if envelope.validations.is_empty() {
                    envelope.error
                } else {
                    format!("{} ({})", envelope.error, envelope.validations.join("; "))
                }
            })
            .unwrap_or_else(|_| "Request failed".to_string());
        ApiError::Rejected { status, message }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}
