//! In-memory implementations of the domain collaborator traits.

mod routine_store;

pub use routine_store::InMemoryRoutineService;
