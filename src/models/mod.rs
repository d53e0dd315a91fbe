//! Data models representing database entities and API payloads.

/// API key record and validation response
pub mod api_key;
/// Emoji query records and interpretation response
pub mod emoji;
