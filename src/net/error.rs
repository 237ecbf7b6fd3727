//! Uniform error surface for API calls.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// What an API call can fail with.
///
/// Call sites pattern-match instead of inspecting raw status codes:
/// `NotFound` routinely means "no resource created yet" for profile and
/// resume lookups. `Unauthorized` is reported to the caller; the
/// pipeline never reacts to it by logging the session out.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("not authorized")]
    Unauthorized,
    #[error("not found")]
    NotFound,
    #[error("{message}")]
    Api { status: u16, message: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify a non-success response status with its raw body.
    pub fn from_status(status: u16, body: &str) -> Self {
        match status {
            401 => Self::Unauthorized,
            404 => Self::NotFound,
            _ => Self::Api {
                status,
                message: error_message(status, body),
            },
        }
    }
}

/// Servers report failures as `{"message": ...}`; fall back to the raw
/// body text, then to a status-derived default.
fn error_message(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = value.get("message").and_then(|m| m.as_str()) {
            return message.to_owned();
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("request failed with status {status}")
    } else {
        trimmed.to_owned()
    }
}
