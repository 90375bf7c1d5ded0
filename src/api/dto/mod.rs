//! Response DTOs for endpoints that do not go through the router envelope.

pub mod health;
