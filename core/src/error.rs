//! Error types for benchviz-core

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Reading an input or configuration file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The benchmark document or config is not valid JSON, or misses a field
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A group pattern failed to compile
    #[error("invalid group pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// The baseline engine has no record among the selected rows
    #[error("baseline '{baseline}' not found among selected records")]
    MissingBaseline {
        /// Engine name that was looked up
        baseline: String,
    },

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
