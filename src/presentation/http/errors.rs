//! HTTP error handling and response conversion.
//!
//! Every non-2xx response leaves through [`AppError`] and is rendered as
//! `{ "error": "<message>" }`. Upstream and encoding failures only ever show a
//! generic message; their detail goes to the log.

use crate::domain::shared::errors::DomainError;
use axum::{
    Json,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

pub const GENERIC_SERVER_ERROR: &str = "An unexpected error occurred. Please try again.";
pub const ENCODE_SERVER_ERROR: &str = "Failed to encode the response payload.";
pub const COUNTRY_NOT_FOUND: &str = "Country not found for the provided ISO code.";

/// Application-level errors returned from handlers.
#[derive(Debug)]
pub enum AppError {
    /// Resource not found (404). Carries the client-facing message.
    NotFound(String),

    /// Malformed path or query (400). Carries the client-facing message.
    BadRequest(String),

    /// Upstream service failed or sent unusable data (500).
    Upstream(String),

    /// Response serialization failed (500).
    Encoding(String),

    /// Only GET is served (501).
    MethodNotSupported(Method),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            Self::Upstream(msg) => write!(f, "Upstream error: {}", msg),
            Self::Encoding(msg) => write!(f, "Encoding error: {}", msg),
            Self::MethodNotSupported(method) => write!(f, "Method not supported: {}", method),
        }
    }
}

impl AppError {
    /// Get the appropriate HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(_) | Self::Encoding(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::MethodNotSupported(_) => StatusCode::NOT_IMPLEMENTED,
        }
    }

    /// Get a user-safe error message (without implementation details).
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound(msg) => msg.clone(),
            Self::BadRequest(msg) => msg.clone(),
            Self::Upstream(_) => GENERIC_SERVER_ERROR.into(),
            Self::Encoding(_) => ENCODE_SERVER_ERROR.into(),
            Self::MethodNotSupported(method) => format!(
                "REST Method '{}' not supported. Currently only '{}' is supported.",
                method,
                Method::GET
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.user_message();

        match status {
            StatusCode::INTERNAL_SERVER_ERROR => {
                tracing::error!("error={}", self);
            }
            StatusCode::BAD_REQUEST | StatusCode::NOT_FOUND | StatusCode::NOT_IMPLEMENTED => {
                tracing::warn!("error={}", self);
            }
            _ => {
                tracing::info!("error={}", self);
            }
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}

// === Domain Error Conversion ===

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidInput(msg) => AppError::BadRequest(msg),
            DomainError::NotFound(detail) => {
                tracing::info!(not_found = %detail);
                AppError::NotFound(COUNTRY_NOT_FOUND.into())
            }
            DomainError::UpstreamUnavailable(detail) => {
                tracing::error!(upstream_unavailable = %detail);
                AppError::Upstream(detail)
            }
            DomainError::UpstreamInvalidData(detail) => {
                tracing::error!(upstream_invalid_data = %detail);
                AppError::Upstream(detail)
            }
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Encoding(err.to_string())
    }
}
