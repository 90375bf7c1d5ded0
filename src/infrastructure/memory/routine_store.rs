//! HashMap-backed routine service.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use validator::Validate;

use crate::domain::entities::{NewRoutine, Routine, UpdateRoutine};
use crate::domain::services::RoutineService;
use crate::error::ServiceError;

/// Keeps every routine in a process-local map.
///
/// Stands in for a real table in development and in the HTTP-level tests;
/// persistence is a collaborator concern, not part of this crate's core.
/// Lock poisoning surfaces as [`ServiceError::Internal`] rather than a panic.
#[derive(Default)]
pub struct InMemoryRoutineService {
    routines: RwLock<HashMap<String, Routine>>,
}

impl InMemoryRoutineService {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RoutineService for InMemoryRoutineService {
    async fn get(&self, id: &str) -> Result<Option<Routine>, ServiceError> {
        let routines = self.routines.read().map_err(poisoned)?;
        Ok(routines.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<Routine>, ServiceError> {
        let routines = self.routines.read().map_err(poisoned)?;
        Ok(routines.values().cloned().collect())
    }

    async fn create(&self, fields: NewRoutine) -> Result<Routine, ServiceError> {
        fields.validate()?;

        let routine = Routine::create(fields);
        let mut routines = self.routines.write().map_err(poisoned)?;
        routines.insert(routine.id.clone(), routine.clone());
        Ok(routine)
    }

    async fn update(
        &self,
        id: &str,
        fields: UpdateRoutine,
    ) -> Result<Option<Routine>, ServiceError> {
        fields.validate()?;

        let mut routines = self.routines.write().map_err(poisoned)?;
        let Some(existing) = routines.get(id) else {
            return Ok(None);
        };

        let updated = existing.replace(fields);
        routines.insert(id.to_string(), updated.clone());
        Ok(Some(updated))
    }

    async fn delete(&self, id: &str) -> Result<bool, ServiceError> {
        let mut routines = self.routines.write().map_err(poisoned)?;
        Ok(routines.remove(id).is_some())
    }
}

fn poisoned<T>(_: PoisonError<T>) -> ServiceError {
    ServiceError::internal("routine store lock poisoned")
}
