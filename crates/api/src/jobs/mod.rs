//! Background job scheduler and job implementations.

mod refresh_fleet;
mod scheduler;

pub use refresh_fleet::RefreshFleetJob;
pub use scheduler::{Job, JobScheduler};
