//! API route configuration.

use axum::Router;
use axum::routing::any;

use crate::api::handlers::{routine_item_handler, routines_handler};
use crate::state::AppState;

/// Routine resource routes.
///
/// # Endpoints
///
/// - `GET    /routines`       - List all routines
/// - `POST   /routines`       - Create a routine
/// - `GET    /routines/{id}`  - Fetch a single routine
/// - `PUT    /routines/{id}`  - Replace a routine
/// - `DELETE /routines/{id}`  - Delete a routine
///
/// Registered with `any(..)` so the router's unsupported-method 400 applies
/// instead of Axum's automatic 405.
pub fn routine_routes() -> Router<AppState> {
    Router::new()
        .route("/routines", any(routines_handler))
        .route("/routines/{id}", any(routine_item_handler))
}
