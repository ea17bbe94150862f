//! Shared utilities for the fleet telemetry backend.
//!
//! This crate provides common functionality used across all other crates:
//! - Coordinate validation for positions and facilities
//! - Hourly rate validation for equipment model rate tables

pub mod validation;
