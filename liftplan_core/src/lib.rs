#![forbid(unsafe_code)]

//! Core domain model for the LiftPlan training program catalog.
//!
//! This crate provides:
//! - Domain types (programs, exercises, rep prescriptions, muscle groups)
//! - The built-in program catalog and its validation
//! - Schedule selection for a program and weekly day-count
//! - Configuration and logging setup

pub mod error;
pub mod types;
pub mod catalog;
pub mod schedule;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use catalog::{build_default_catalog, default_catalog, Catalog};
pub use config::Config;
pub use schedule::{Schedule, ScheduledSession};
