//! benchviz-core: Data model for benchmark result charts
//!
//! This crate provides the types shared by the renderer and the CLI,
//! including:
//!
//! - Benchmark documents as written by the benchmark runner
//! - The flat record table and group pattern selection
//! - Unit conversion and relative performance against a baseline
//! - File name sanitization, configuration and error handling

#![warn(clippy::all)]

pub mod config;
pub mod document;
pub mod error;
pub mod pattern;
pub mod record;
pub mod relative;
pub mod sanitize;
pub mod units;

pub use config::{Patterns, ReportConfig};
pub use document::{BenchmarkDocument, BenchmarkEntry, StatSummary};
pub use error::{Error, Result};
pub use pattern::GroupPattern;
pub use record::{Record, RecordTable, Stat};
pub use relative::{relative_performance, RelativePerformance, DEFAULT_BASELINE};
pub use sanitize::{query_type_file_name, sanitize_group};
pub use units::{nanos_to_millis, NANOS_PER_MILLI};
