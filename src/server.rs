//! HTTP server initialization and runtime setup.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;

use crate::config::Config;
use crate::infrastructure::memory::InMemoryRoutineService;
use crate::router::{RequestRouter, TracingLogger};
use crate::routes::app_router;
use crate::state::AppState;

/// Runs the HTTP server with the given configuration.
///
/// Wires the request router to the in-memory routine service and the
/// tracing-backed request logger, then serves the Axum application.
///
/// # Errors
///
/// Returns an error if the bind address is invalid, binding fails, or the
/// server hits a runtime error.
pub async fn run(config: Config) -> Result<()> {
    let service = Arc::new(InMemoryRoutineService::new());
    let router = Arc::new(RequestRouter::new(service, Arc::new(TracingLogger)));
    let state = AppState::new(router);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
