//! HTTP handlers that feed requests into the [`crate::router::RequestRouter`].
//!
//! The handlers stay deliberately thin: they translate the Axum request into
//! the router's generic shape and return its response verbatim. Both routes
//! are registered with `any(..)` so method dispatch — including the 400 for
//! unsupported methods — stays with the router instead of Axum's 405.

use axum::extract::{Path, State};
use axum::http::{header, Method, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::router::{RouterResponse, RoutineRequest};
use crate::state::AppState;

/// Collection-level operations.
///
/// # Endpoint
///
/// `ANY /routines` — `GET` lists, `POST` creates, anything else is rejected
/// by the router with 400.
pub async fn routines_handler(
    State(state): State<AppState>,
    method: Method,
    body: String,
) -> Response {
    let request = RoutineRequest {
        method: method.as_str().to_string(),
        resource_id: None,
        body: non_empty(body),
    };

    into_http(state.router.handle(request).await)
}

/// Item-level operations.
///
/// # Endpoint
///
/// `ANY /routines/{id}` — `GET`, `PUT` and `DELETE` on a single routine.
pub async fn routine_item_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    method: Method,
    body: String,
) -> Response {
    let request = RoutineRequest {
        method: method.as_str().to_string(),
        resource_id: Some(id),
        body: non_empty(body),
    };

    into_http(state.router.handle(request).await)
}

fn non_empty(body: String) -> Option<String> {
    if body.is_empty() { None } else { Some(body) }
}

/// Maps the router's generic response onto an HTTP response. A 204 drops the
/// envelope, since HTTP forbids a body on No Content.
fn into_http(response: RouterResponse) -> Response {
    let status =
        StatusCode::from_u16(response.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    if status == StatusCode::NO_CONTENT {
        return status.into_response();
    }

    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        response.body,
    )
        .into_response()
}
