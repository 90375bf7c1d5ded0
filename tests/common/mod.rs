#![allow(dead_code)]

use std::sync::Arc;

use routines_manager::infrastructure::memory::InMemoryRoutineService;
use routines_manager::router::{RequestRouter, TracingLogger};
use routines_manager::state::AppState;

/// State wired to a fresh in-memory routine service.
pub fn create_test_state() -> AppState {
    let service = Arc::new(InMemoryRoutineService::new());
    let router = Arc::new(RequestRouter::new(service, Arc::new(TracingLogger)));
    AppState::new(router)
}
