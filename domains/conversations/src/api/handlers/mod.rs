//! Facade operations, grouped by entity

pub mod conversations;
pub mod messages;
