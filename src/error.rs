//! Error taxonomy shared by the request router and routine services.

use thiserror::Error;

/// Failure surfaced by a [`crate::domain::services::RoutineService`].
///
/// "Not found" is deliberately not a variant: lookups report a missing id
/// through their return value (`Ok(None)` / `Ok(false)`), which the router
/// maps to 404. The two variants here carry different HTTP meanings —
/// validation failures become 400, everything else becomes 500.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Caller-supplied fields were malformed or semantically invalid.
    #[error("{0}")]
    Validation(String),

    /// The backing store or another collaborator failed.
    #[error("{0}")]
    Internal(String),
}

impl ServiceError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl From<validator::ValidationErrors> for ServiceError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}
