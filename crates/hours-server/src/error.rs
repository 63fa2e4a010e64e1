//! Error types for the HTTP service.
//!
//! Engine errors are mapped to HTTP statuses here, in one place. Every error
//! response has the body `{"error": "<message>"}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use hours_engine::HoursError;
use serde_json::json;
use thiserror::Error;

/// The main error type for hours-server operations.
#[derive(Error, Debug)]
pub enum ServerError {
    /// An engine operation failed.
    #[error(transparent)]
    Hours(#[from] HoursError),

    /// The request was malformed before reaching the engine.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    /// Binding or serving failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for hours-server operations.
pub type Result<T> = std::result::Result<T, ServerError>;

impl From<figment::Error> for ServerError {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl ServerError {
    /// HTTP status for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Hours(e) if e.is_invalid_argument() => StatusCode::BAD_REQUEST,
            Self::Hours(e) if e.is_not_found() => StatusCode::NOT_FOUND,
            Self::Hours(e) if e.is_transient() => StatusCode::SERVICE_UNAVAILABLE,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::warn!(status = status.as_u16(), error = %self, "request failed");
        } else {
            tracing::debug!(status = status.as_u16(), error = %self, "request rejected");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
