//! Telemetry sources for the fleet telemetry backend.
//!
//! This crate contains:
//! - The `TelemetrySource` trait and its file, HTTP and in-memory implementations
//! - The concurrent fetch barrier that assembles one `TelemetrySnapshot`
//! - Input sanitation and fetch metrics

pub mod cycle;
pub mod error;
pub mod file;
pub mod http;
pub mod memory;
pub mod metrics;
pub mod sanitize;
pub mod source;

pub use cycle::{aggregate, fetch_snapshot};
pub use error::SourceError;
pub use file::JsonFileSource;
pub use http::HttpSource;
pub use memory::StaticSource;
pub use source::{resource_name, TelemetrySource};
