//! Core business entities.

mod routine;

pub use routine::{NewRoutine, Routine, UpdateRoutine};
