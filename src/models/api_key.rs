//! API Key model and validation response types.
//!
//! API keys are provisioned by an external process. This service only reads them to answer "is this key usable, and whose is it?".

use serde::{Deserialize, Serialize};

/// Message returned when the key is unknown or deactivated.
pub const INVALID_KEY_MESSAGE: &str = "API key is invalid or not active.";

/// Message returned when the key exists and is active.
pub const VALID_KEY_MESSAGE: &str = "API key validation successful.";

/// Represents an API key record from the database.
///
/// # Database Table
///
/// Maps to the `api_keys` table with columns:
/// - `key`: The API key string itself (unique)
/// - `user_id`: Identifier of the user owning the key
/// - `is_active`: Whether the key is currently valid
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ApiKey {
    /// The key string, matched exactly against the caller's input
    pub key: String,

    /// Owning user
    pub user_id: String,

    /// Whether this API key is currently active
    ///
    /// Inactive keys are reported as invalid. This provides a way to revoke access without deleting the record.
    pub is_active: bool,
}

/// Query parameters for `POST /api/auth/validate`.
#[derive(Debug, Deserialize)]
pub struct ValidateApiKeyParams {
    pub api_key: String,
}

/// Result of an API key validation attempt.
///
/// # JSON Example
///
/// ```json
/// {
///   "is_valid": true,
///   "user_id": "u1",
///   "message": "API key validation successful."
/// }
/// ```
///
/// `user_id` is `null` whenever `is_valid` is false.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiKeyValidationResponse {
    pub is_valid: bool,
    pub user_id: Option<String>,
    pub message: String,
}

impl ApiKeyValidationResponse {
    /// Response for a missing or inactive key. Both cases are indistinguishable to the caller.
    pub fn invalid() -> Self {
        Self {
            is_valid: false,
            user_id: None,
            message: INVALID_KEY_MESSAGE.to_string(),
        }
    }

    /// Response for an active key owned by `user_id`.
    pub fn valid(user_id: String) -> Self {
        Self {
            is_valid: true,
            user_id: Some(user_id),
            message: VALID_KEY_MESSAGE.to_string(),
        }
    }
}

/// Convert an optional database record into the validation outcome.
impl From<Option<ApiKey>> for ApiKeyValidationResponse {
    fn from(record: Option<ApiKey>) -> Self {
        match record {
            Some(api_key) if api_key.is_active => Self::valid(api_key.user_id),
            _ => Self::invalid(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn invalid_response_serializes_null_user() {
        let body = serde_json::to_value(ApiKeyValidationResponse::invalid()).unwrap();
        assert_eq!(
            body,
            json!({
                "is_valid": false,
                "user_id": null,
                "message": "API key is invalid or not active."
            })
        );
    }

    #[test]
    fn inactive_record_is_invalid() {
        let record = ApiKey {
            key: "abc123".to_string(),
            user_id: "u1".to_string(),
            is_active: false,
        };
        assert_eq!(
            ApiKeyValidationResponse::from(Some(record)),
            ApiKeyValidationResponse::invalid()
        );
    }
}
