//! Shared application state.

use std::sync::Arc;

use crate::db::Store;

/// State handed to every handler through axum's `State` extractor.
///
/// Holds nothing mutable; the store is the only shared resource.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }
}
