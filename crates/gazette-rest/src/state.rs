//! Application state for Axum handlers.

use gazette_service::{ArticleService, AuthService};
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub article_service: Arc<dyn ArticleService>,
    pub auth_service: Arc<dyn AuthService>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(
        article_service: Arc<dyn ArticleService>,
        auth_service: Arc<dyn AuthService>,
    ) -> Self {
        Self {
            article_service,
            auth_service,
        }
    }
}
