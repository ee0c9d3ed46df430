//! Speedup of every engine over the baseline on the bulk read query

use super::{bars_by_name, Chart};
use crate::figure::Figure;
use crate::visualization::{BarPlot, Plot};
use benchviz_core::{relative_performance, GroupPattern, Record, RecordTable};

pub struct RelativePerformanceChart {
    pattern: GroupPattern,
    baseline: String,
}

impl RelativePerformanceChart {
    pub const FILE_NAME: &'static str = "relative_performance.png";
    const FIGURE: Figure = Figure::new(10.0, 6.0);

    pub fn new(pattern: GroupPattern, baseline: impl Into<String>) -> Self {
        Self {
            pattern,
            baseline: baseline.into(),
        }
    }
}

impl Chart for RelativePerformanceChart {
    fn name(&self) -> &'static str {
        "relative performance"
    }

    /// Fails with `MissingBaseline` when no selected record carries the
    /// baseline name.
    fn plan(&self, table: &RecordTable) -> benchviz_core::Result<Vec<Plot>> {
        let selected = table.select(&self.pattern);
        let relative = relative_performance(&selected, &self.baseline)?;

        // Reuse the per-name averaging on a table of ratios
        let ratios: Vec<Record> = selected
            .iter()
            .zip(&relative)
            .map(|(record, rel)| Record {
                avg: rel.ratio,
                ..record.clone()
            })
            .collect();

        Ok(vec![Plot::Bar(BarPlot {
            file_name: Self::FILE_NAME.to_string(),
            title: "Relative Performance (compared to Native)".to_string(),
            x_desc: Some("name".to_string()),
            y_desc: "Relative Speed (higher is better)".to_string(),
            figure: Self::FIGURE,
            bars: bars_by_name(&ratios, |r| r.avg),
            value_labels: false,
            reference_line: Some(1.0),
        })])
    }
}
