//! API key validation endpoint.

use crate::{
    error::AppError,
    models::api_key::{ApiKeyValidationResponse, ValidateApiKeyParams},
    services::api_key_service,
    state::AppState,
};
use axum::{
    Json,
    extract::{Query, State},
};

/// Validate an API key.
///
/// # Endpoint
///
/// `POST /api/auth/validate?api_key=<key>`
///
/// # Response
///
/// - **Success (200 OK)**: Validation outcome, valid or not
/// - **Error (500)**: Lookup failed
///
/// ```json
/// {
///   "is_valid": false,
///   "user_id": null,
///   "message": "API key is invalid or not active."
/// }
/// ```
pub async fn validate_api_key(
    State(state): State<AppState>,
    Query(params): Query<ValidateApiKeyParams>,
) -> Result<Json<ApiKeyValidationResponse>, AppError> {
    let response = api_key_service::validate_api_key(state.store.as_ref(), &params.api_key).await?;

    Ok(Json(response))
}
