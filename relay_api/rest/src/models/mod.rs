use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

pub mod contact;

/// Envelope wrapped around every response body.
#[derive(Debug, Serialize)]
pub struct ApiResponse<D = ()> {
    pub success: bool,
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<D>,
    /// Description of the underlying failure, if it is safe to expose.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl ApiResponse {
    pub fn success(message: &'static str) -> Self {
        Self::new(true, message)
    }

    pub fn failure(message: &'static str) -> Self {
        Self::new(false, message)
    }

    fn new(success: bool, message: &'static str) -> Self {
        Self {
            success,
            message,
            data: None,
            error: None,
            timestamp: None,
        }
    }
}

impl<D> ApiResponse<D> {
    pub fn with_data<T>(self, data: T) -> ApiResponse<T> {
        ApiResponse {
            success: self.success,
            message: self.message,
            data: Some(data),
            error: self.error,
            timestamp: self.timestamp,
        }
    }

    pub fn with_error(self, error: impl std::fmt::Display) -> Self {
        Self {
            error: Some(error.to_string()),
            ..self
        }
    }

    /// Same shape as javascript's `Date.prototype.toISOString`.
    pub fn with_timestamp(self, timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp: Some(timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)),
            ..self
        }
    }
}
