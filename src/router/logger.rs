//! Logging capability injected into the router.
//!
//! The router never talks to a process-global logger: it logs through a
//! capability handed to it at construction and scoped to its lifetime.

use crate::error::ServiceError;
use crate::router::request::RoutineRequest;

/// One informational line per inbound request, one error line per caught
/// failure. Implementations must be infallible; logging can never change
/// the response the router produces.
#[cfg_attr(test, mockall::automock)]
pub trait RequestLogger: Send + Sync {
    /// Records the raw inbound request.
    fn request(&self, request: &RoutineRequest);

    /// Records a failure the router converted into a 500 response.
    fn failure(&self, error: &ServiceError);
}

/// Forwards to the `tracing` macros.
pub struct TracingLogger;

impl RequestLogger for TracingLogger {
    fn request(&self, request: &RoutineRequest) {
        tracing::info!(
            method = %request.method,
            resource_id = ?request.resource_id,
            body = ?request.body,
            "inbound routine request"
        );
    }

    fn failure(&self, error: &ServiceError) {
        tracing::error!(error = %error, "routine request failed");
    }
}
