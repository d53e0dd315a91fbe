//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (query string, URL params)
//! 2. Delegates to a service
//! 3. Returns a JSON response, or an `AppError` rendered as a 500

/// API key validation endpoint
pub mod auth;
/// Emoji interpretation endpoint
pub mod emoji;
/// Service health endpoint
pub mod health;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the complete HTTP router.
///
/// # Routes
///
/// - `GET /health` - Health check
/// - `POST /api/auth/validate` - Validate an API key
/// - `GET /emoji/interpret/{emoji_input}` - Interpret an emoji
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/api/auth/validate", post(auth::validate_api_key))
        .route("/emoji/interpret/{emoji_input}", get(emoji::interpret_emoji))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
