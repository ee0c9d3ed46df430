//! Group name patterns
//!
//! Records are bucketed into charts by searching their group string with a
//! regular expression. The search is unanchored: a pattern matches if it
//! occurs anywhere in the group.

use crate::error::Result;
use regex::Regex;

/// Full-table `findMany` reads
pub const BULK_READ_PATTERN: &str = r"movies.findMany\(\) \(all";

/// Single-row writes and lookups
pub const OPERATIONS_PATTERN: &str = "update|findUnique";

/// Limited scans and filtered queries
pub const QUERY_TYPES_PATTERN: &str = "take: 2000|where";

/// Compiled group pattern
#[derive(Debug, Clone)]
pub struct GroupPattern {
    regex: Regex,
}

impl GroupPattern {
    /// Compile a pattern
    pub fn new(pattern: &str) -> Result<Self> {
        Ok(Self {
            regex: Regex::new(pattern)?,
        })
    }

    /// Check whether the pattern occurs anywhere in `group`
    pub fn is_match(&self, group: &str) -> bool {
        self.regex.is_match(group)
    }

    /// Source text of the pattern
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}
