//! Shared application state.

use std::sync::Arc;

use crate::application::services::LinkService;

/// Process-wide state injected into every handler.
///
/// Constructed once in [`crate::server::run`] and cloned per request by
/// axum; handlers receive the datastore handle through the service rather
/// than through module-level globals.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
}

impl AppState {
    /// Creates the application state.
    pub fn new(link_service: Arc<LinkService>) -> Self {
        Self { link_service }
    }
}
