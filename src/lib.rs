//! # Routines Manager
//!
//! A small CRUD service for managing personal routines, built with Axum.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The `Routine` entity, typed write
//!   payloads, and the `RoutineService` collaborator trait
//! - **Router** ([`router`]) - The method × id × existence dispatch that maps
//!   every request onto a status code and a `{message, data}` envelope
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory service
//!   implementation
//! - **API Layer** ([`api`]) - Thin Axum handlers feeding the router
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional configuration
//! export LISTEN="0.0.0.0:3000"
//! export LOG_FORMAT="text"
//!
//! cargo run
//! ```
//!
//! ## Response Shape
//!
//! Every routine endpoint answers with the same envelope:
//!
//! ```json
//! {
//!   "message": "Successfully retrieved routine at GET /routines/42",
//!   "data": { "id": "42", "name": "Exercise", "...": "..." }
//! }
//! ```
//!
//! `data` is `null` on error, not-found and delete paths. Numeric fields use
//! decimal-safe encoding and never pass through binary floating point.

pub mod api;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod router;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::ServiceError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::domain::entities::{NewRoutine, Routine, UpdateRoutine};
    pub use crate::domain::services::RoutineService;
    pub use crate::error::ServiceError;
    pub use crate::infrastructure::memory::InMemoryRoutineService;
    pub use crate::router::{Envelope, RequestRouter, RouterResponse, RoutineRequest};
    pub use crate::state::AppState;
}
