//! Speedup relative to a baseline engine

use crate::error::{Error, Result};
use crate::record::RecordTable;

/// Engine every other engine is compared against
pub const DEFAULT_BASELINE: &str = "Native QE with tokio-postgres";

/// Relative speed of one record against the baseline
#[derive(Debug, Clone, PartialEq)]
pub struct RelativePerformance {
    /// Engine name
    pub name: String,
    /// `baseline_avg / avg`; above 1.0 means faster than the baseline
    pub ratio: f64,
}

/// Compute `baseline_avg / avg` for every record in `table`
///
/// The baseline is the first record named `baseline`. Fails with
/// [`Error::MissingBaseline`] if no record carries that name.
pub fn relative_performance(table: &RecordTable, baseline: &str) -> Result<Vec<RelativePerformance>> {
    let baseline_avg = table
        .find_by_name(baseline)
        .map(|r| r.avg)
        .ok_or_else(|| Error::MissingBaseline {
            baseline: baseline.to_string(),
        })?;

    Ok(table
        .iter()
        .map(|r| RelativePerformance {
            name: r.name.clone(),
            ratio: baseline_avg / r.avg,
        })
        .collect())
}
