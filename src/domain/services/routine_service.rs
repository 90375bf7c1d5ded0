//! Service trait the request router dispatches into.

use async_trait::async_trait;

use crate::domain::entities::{NewRoutine, Routine, UpdateRoutine};
use crate::error::ServiceError;

/// Storage-backed operations on the routine collection.
///
/// Lookups distinguish "absent" from failure: `get`, `update` and `delete`
/// report a missing id through their return value rather than the error
/// channel, so callers can map the two outcomes to different status codes
/// without this trait knowing anything about HTTP.
///
/// # Implementations
///
/// - [`crate::infrastructure::memory::InMemoryRoutineService`]
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoutineService: Send + Sync {
    /// Fetches a single routine by id.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Internal`] if the backing store fails.
    async fn get(&self, id: &str) -> Result<Option<Routine>, ServiceError>;

    /// Lists every stored routine.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Internal`] if the backing store fails.
    async fn list(&self) -> Result<Vec<Routine>, ServiceError>;

    /// Validates and stores a new routine.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Validation`] if the fields are rejected.
    async fn create(&self, fields: NewRoutine) -> Result<Routine, ServiceError>;

    /// Replaces an existing routine's fields.
    ///
    /// Returns `Ok(None)` when no routine has the given id.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Validation`] if the fields are rejected.
    async fn update(
        &self,
        id: &str,
        fields: UpdateRoutine,
    ) -> Result<Option<Routine>, ServiceError>;

    /// Removes a routine. Returns `true` iff a routine existed and was removed.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Internal`] if the backing store fails.
    async fn delete(&self, id: &str) -> Result<bool, ServiceError>;
}
