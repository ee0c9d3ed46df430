//! Average time of the bulk read query per engine

use super::{bars_by_name, Chart};
use crate::figure::Figure;
use crate::visualization::{BarPlot, Plot};
use benchviz_core::{GroupPattern, RecordTable, Stat};

pub struct BasicQueriesChart {
    pattern: GroupPattern,
}

impl BasicQueriesChart {
    pub const FILE_NAME: &'static str = "basic_queries_comparison.png";
    const FIGURE: Figure = Figure::new(12.0, 6.0);

    pub fn new(pattern: GroupPattern) -> Self {
        Self { pattern }
    }
}

impl Chart for BasicQueriesChart {
    fn name(&self) -> &'static str {
        "basic queries"
    }

    fn plan(&self, table: &RecordTable) -> benchviz_core::Result<Vec<Plot>> {
        let selected = table.select(&self.pattern);
        if selected.is_empty() {
            tracing::warn!(
                "No records match '{}', rendering an empty basic queries chart",
                self.pattern.as_str()
            );
        }

        Ok(vec![Plot::Bar(BarPlot {
            file_name: Self::FILE_NAME.to_string(),
            title: "Average Execution Time for Basic Queries".to_string(),
            x_desc: Some("name".to_string()),
            y_desc: "Time (ms)".to_string(),
            figure: Self::FIGURE,
            bars: bars_by_name(&selected, |r| r.millis(Stat::Avg)),
            value_labels: false,
            reference_line: None,
        })])
    }
}
