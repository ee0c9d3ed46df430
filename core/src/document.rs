//! Benchmark result documents
//!
//! The input is the JSON report written by a benchmark run: a top-level
//! `benchmarks` array where every entry carries the engine name, the query
//! group and a block of timing statistics in nanoseconds. Any extra keys the
//! runner emits are ignored.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Top-level benchmark document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BenchmarkDocument {
    /// Entries in the order the runner wrote them
    pub benchmarks: Vec<BenchmarkEntry>,
}

/// Timing statistics of one engine for one query group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkEntry {
    /// Engine or driver identifier
    pub name: String,
    /// Query or operation description
    pub group: String,
    /// Timing summary in nanoseconds
    pub stats: StatSummary,
}

/// Timing summary, all values in nanoseconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatSummary {
    /// Mean
    pub avg: f64,
    /// Fastest sample
    pub min: f64,
    /// Slowest sample
    pub max: f64,
    /// Median
    pub p50: f64,
    /// 75th percentile
    pub p75: f64,
    /// 99th percentile
    pub p99: f64,
}

impl BenchmarkDocument {
    /// Load a document from a JSON file
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Parse a document from any reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let document: Self = serde_json::from_reader(reader)?;
        tracing::debug!("Parsed {} benchmark entries", document.benchmarks.len());
        Ok(document)
    }

    /// Parse a document from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.benchmarks.len()
    }

    /// Check if the document has no entries
    pub fn is_empty(&self) -> bool {
        self.benchmarks.is_empty()
    }
}
