//! Business logic services.
//!
//! Services contain the request logic separated from HTTP handlers. Each one
//! reads through the `Store` seam and returns domain values or `AppError`.

pub mod api_key_service;
pub mod demojize;
pub mod emoji_service;
