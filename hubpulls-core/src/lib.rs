//! # hubpulls-core
//!
//! Core library for hubpulls - Docker Hub pull-count tracking.
//!
//! This library provides:
//! - Domain types for repositories, snapshots, and interval diffs
//! - A paginated fetcher for the registry listing API
//! - Flat-file snapshot and interval stores
//! - Configuration management
//! - Logging infrastructure
//!
//! ## Example
//!
//! ```rust,no_run
//! use hubpulls_core::{Config, Pipeline};
//!
//! let config = Config::load().expect("failed to load config");
//! let pipeline = Pipeline::from_config(&config).expect("failed to build pipeline");
//!
//! let report = pipeline.run(true).expect("run failed");
//! println!("{} repositories", report.records);
//! ```

// Re-export commonly used items at the crate root
pub use config::Config;
pub use error::{Error, Result};
pub use pipeline::{Pipeline, RunReport};
pub use types::*;

// Public modules
pub mod config;
pub mod diff;
pub mod error;
pub mod fetch;
pub mod format;
pub mod logging;
pub mod pipeline;
pub mod rank;
pub mod store;
pub mod types;
