//! Report configuration types

use crate::error::{Error, Result};
use crate::pattern::{GroupPattern, BULK_READ_PATTERN, OPERATIONS_PATTERN, QUERY_TYPES_PATTERN};
use crate::relative::DEFAULT_BASELINE;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Report configuration
///
/// Names the baseline engine, the group patterns that bucket records into
/// charts and the directory the images are written to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Engine the relative performance chart compares against
    pub baseline: String,

    /// Groups shown in the basic queries and relative performance charts
    pub bulk_read_pattern: String,

    /// Groups shown in the distribution chart
    pub operations_pattern: String,

    /// Groups that get their own per-query chart
    pub query_types_pattern: String,

    /// Directory the images are written to
    pub output_dir: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            baseline: DEFAULT_BASELINE.to_string(),
            bulk_read_pattern: BULK_READ_PATTERN.to_string(),
            operations_pattern: OPERATIONS_PATTERN.to_string(),
            query_types_pattern: QUERY_TYPES_PATTERN.to_string(),
            output_dir: PathBuf::from("."),
        }
    }
}

/// Compiled group patterns of a [`ReportConfig`]
#[derive(Debug, Clone)]
pub struct Patterns {
    pub bulk_read: GroupPattern,
    pub operations: GroupPattern,
    pub query_types: GroupPattern,
}

impl ReportConfig {
    /// Load a configuration from a JSON file; missing keys keep their defaults
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    /// Set the baseline engine
    pub fn with_baseline(mut self, baseline: impl Into<String>) -> Self {
        self.baseline = baseline.into();
        self
    }

    /// Set the output directory
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Compile the group patterns
    pub fn patterns(&self) -> Result<Patterns> {
        Ok(Patterns {
            bulk_read: GroupPattern::new(&self.bulk_read_pattern)?,
            operations: GroupPattern::new(&self.operations_pattern)?,
            query_types: GroupPattern::new(&self.query_types_pattern)?,
        })
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.baseline.trim().is_empty() {
            return Err(Error::Config("baseline name must not be empty".into()));
        }

        self.patterns()?;
        Ok(())
    }
}
