//! Error types and HTTP error response handling.
//!
//! Domain outcomes such as an unknown API key or an emoji without stored
//! analysis are ordinary values, not errors. Only infrastructure failures
//! end up here, and every one of them becomes a generic 500 response.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Database operation failed (e.g., connection error, query error).
    ///
    /// This wraps any sqlx::Error using the `#[from]` attribute, which
    /// automatically implements `From<sqlx::Error> for AppError`.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Convert AppError into an HTTP response.
///
/// The failure is logged here, since this is the single point every handler
/// error passes through.
///
/// # Response Format
///
/// ```json
/// {
///   "error": "Database error: pool timed out while waiting for an open connection"
/// }
/// ```
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Error processing request");

        let body = Json(json!({ "error": self.to_string() }));

        (self.status(), body).into_response()
    }
}
