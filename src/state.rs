//! Shared application state.

use std::sync::Arc;

use crate::router::RequestRouter;

/// State handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub router: Arc<RequestRouter>,
}

impl AppState {
    pub fn new(router: Arc<RequestRouter>) -> Self {
        Self { router }
    }
}
