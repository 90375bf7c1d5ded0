//! Traits for the collaborators the router is wired to.

mod routine_service;

pub use routine_service::RoutineService;

#[cfg(test)]
pub use routine_service::MockRoutineService;
