//! API key validation service.

use tracing::debug;

use crate::{db::Store, error::AppError, models::api_key::ApiKeyValidationResponse};

/// Validate an API key.
///
/// # Process
///
/// 1. Look up the key by exact match
/// 2. Report it valid only if the record exists and is active
///
/// A missing key and an inactive key produce the same response.
///
/// # Errors
///
/// - `Database`: the lookup itself failed
pub async fn validate_api_key(
    store: &dyn Store,
    api_key: &str,
) -> Result<ApiKeyValidationResponse, AppError> {
    let record = store.find_api_key(api_key).await?;

    debug!(
        found = record.is_some(),
        active = record.as_ref().is_some_and(|r| r.is_active),
        "API key lookup complete"
    );

    Ok(record.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::memory::MemoryStore;
    use crate::models::api_key::{INVALID_KEY_MESSAGE, VALID_KEY_MESSAGE};

    #[tokio::test]
    async fn unknown_key_is_invalid() {
        let store = MemoryStore::default();

        let result = validate_api_key(&store, "abc123").await.unwrap();
        assert!(!result.is_valid);
        assert_eq!(result.user_id, None);
        assert_eq!(result.message, INVALID_KEY_MESSAGE);
    }

    #[tokio::test]
    async fn inactive_key_is_invalid() {
        let store = MemoryStore::default().with_api_key("abc123", "u1", false);

        let result = validate_api_key(&store, "abc123").await.unwrap();
        assert_eq!(result, ApiKeyValidationResponse::invalid());
    }

    #[tokio::test]
    async fn active_key_returns_owner() {
        let store = MemoryStore::default().with_api_key("abc123", "u1", true);

        let result = validate_api_key(&store, "abc123").await.unwrap();
        assert!(result.is_valid);
        assert_eq!(result.user_id.as_deref(), Some("u1"));
        assert_eq!(result.message, VALID_KEY_MESSAGE);
    }

    #[tokio::test]
    async fn match_is_exact() {
        let store = MemoryStore::default().with_api_key("abc123", "u1", true);

        let result = validate_api_key(&store, "ABC123").await.unwrap();
        assert!(!result.is_valid);
    }

    #[tokio::test]
    async fn lookup_failure_propagates() {
        let store = MemoryStore::failing();

        let err = validate_api_key(&store, "abc123").await.unwrap_err();
        assert!(matches!(err, AppError::Database(sqlx::Error::PoolClosed)));
    }
}
