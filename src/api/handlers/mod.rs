//! HTTP request handlers.

mod health;
mod routines;

pub use health::health_handler;
pub use routines::{routine_item_handler, routines_handler};
