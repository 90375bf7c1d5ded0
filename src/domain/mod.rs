//! Domain layer: entities and collaborator traits.

pub mod entities;
pub mod services;
