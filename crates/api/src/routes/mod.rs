//! HTTP route handlers.

pub mod equipment;
pub mod facilities;
pub mod health;
pub mod refresh;
