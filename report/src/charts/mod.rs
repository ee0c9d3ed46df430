//! Chart definitions
//!
//! Each chart selects its records from the full table, derives the values it
//! plots and names its output files. Planning never touches the filesystem.

mod basic;
mod distribution;
mod query_types;
mod relative;

pub use basic::BasicQueriesChart;
pub use distribution::DistributionChart;
pub use query_types::PerQueryTypeCharts;
pub use relative::RelativePerformanceChart;

use crate::visualization::{Bar, Plot};
use benchviz_core::{Record, RecordTable};

/// A chart category that turns the record table into images
pub trait Chart {
    /// Short name used in logs and error messages
    fn name(&self) -> &'static str;

    /// Select and derive the data of every image this chart produces
    fn plan(&self, table: &RecordTable) -> benchviz_core::Result<Vec<Plot>>;
}

/// One bar per distinct engine name, in first-seen order
///
/// Engines that appear more than once are averaged.
pub(crate) fn bars_by_name<'a, I, F>(records: I, value: F) -> Vec<Bar>
where
    I: IntoIterator<Item = &'a Record>,
    F: Fn(&Record) -> f64,
{
    let mut sums: Vec<(String, f64, usize)> = Vec::new();
    for record in records {
        let v = value(record);
        match sums.iter_mut().find(|(name, _, _)| *name == record.name) {
            Some((_, sum, count)) => {
                *sum += v;
                *count += 1;
            }
            None => sums.push((record.name.clone(), v, 1)),
        }
    }

    sums.into_iter()
        .map(|(label, sum, count)| Bar {
            label,
            value: if count == 1 { sum } else { sum / count as f64 },
        })
        .collect()
}


#[cfg(test)]
mod tests {
    use super::test_support::table;
    use super::*;

    #[test]
    fn test_bars_by_name_keeps_single_values() {
        let table = table(&[("A", "g", 3.0), ("B", "g", 5.0)]);
        let bars = bars_by_name(&table, |r| r.avg);
        assert_eq!(
            bars,
            vec![
                Bar { label: "A".into(), value: 3.0 },
                Bar { label: "B".into(), value: 5.0 },
            ]
        );
    }

    #[test]
    fn test_bars_by_name_averages_duplicates() {
        let table = table(&[("A", "g1", 2.0), ("B", "g1", 5.0), ("A", "g2", 4.0)]);
        let bars = bars_by_name(&table, |r| r.avg);
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].label, "A");
        assert_eq!(bars[0].value, 3.0);
    }
}
