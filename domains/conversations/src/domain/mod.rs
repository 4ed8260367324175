//! Domain layer: entities, input validation, and timestamp normalization

pub mod entities;
pub mod timestamp;
