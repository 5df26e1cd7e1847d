//! license-collector crate
//!
//! This crate is an implementation detail of the `license-collector` tool. It turns the
//! `.lic` metadata files scattered across a source tree into a single HTML attribution
//! report.
//!
//! # Module Organization
//!
//! - [`metadata`]: Discovery and parsing of `.lic` metadata files
//! - [`aggregator`]: Grouping and deduplication of records by license type
//! - [`licenses`]: Resolution of license texts from disk and the bundled set
//! - [`reports`]: HTML fragment rendering and template composition
//! - [`pipeline`]: The end-to-end scan, parse, aggregate, render run
//! - [`commands`]: Command-line interface and orchestration

/// Result type alias using `ohno::AppError` as the default error type.
pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

pub mod aggregator;
pub mod commands;
pub mod error;
pub mod licenses;
pub mod metadata;
pub mod pipeline;
pub mod reports;

mod path_utils;
mod text;

pub use crate::commands::{Host, run};
pub use crate::error::Error;
pub use crate::pipeline::{ParseErrorPolicy, RunSummary, Settings, collect_licenses};
