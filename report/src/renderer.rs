//! Report orchestration

use crate::charts::{
    BasicQueriesChart, Chart, DistributionChart, PerQueryTypeCharts, RelativePerformanceChart,
};
use anyhow::{Context, Result};
use benchviz_core::{RecordTable, ReportConfig};
use std::path::{Path, PathBuf};

/// Renders every chart category into an output directory
///
/// Charts run one after another in a fixed order: basic queries,
/// distribution, query types, relative performance. Each image is planned,
/// drawn and written before the next one starts, so a failure leaves the
/// earlier images on disk.
pub struct ReportRenderer {
    output_dir: PathBuf,
    charts: Vec<Box<dyn Chart>>,
}

impl ReportRenderer {
    /// Create a renderer with the four standard charts
    pub fn new(config: &ReportConfig) -> Result<Self> {
        config.validate().context("Invalid report configuration")?;
        let patterns = config.patterns()?;

        let charts: Vec<Box<dyn Chart>> = vec![
            Box::new(BasicQueriesChart::new(patterns.bulk_read.clone())),
            Box::new(DistributionChart::new(patterns.operations)),
            Box::new(PerQueryTypeCharts::new(patterns.query_types)),
            Box::new(RelativePerformanceChart::new(
                patterns.bulk_read,
                config.baseline.clone(),
            )),
        ];

        Ok(Self {
            output_dir: config.output_dir.clone(),
            charts,
        })
    }

    /// Directory the images are written to
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Names of the configured charts, in render order
    pub fn chart_names(&self) -> Vec<&'static str> {
        self.charts.iter().map(|c| c.name()).collect()
    }

    /// Render all charts; returns the written image paths in order
    pub fn render(&self, table: &RecordTable) -> Result<Vec<PathBuf>> {
        std::fs::create_dir_all(&self.output_dir).with_context(|| {
            format!("Failed to create output directory: {}", self.output_dir.display())
        })?;

        let mut written = Vec::new();
        for chart in &self.charts {
            written.extend(self.render_chart(chart.as_ref(), table)?);
        }

        tracing::info!("Rendered {} charts into {}", written.len(), self.output_dir.display());
        Ok(written)
    }

    /// Plan and render a single chart category
    pub fn render_chart(&self, chart: &dyn Chart, table: &RecordTable) -> Result<Vec<PathBuf>> {
        let plots = chart
            .plan(table)
            .with_context(|| format!("Failed to prepare {} chart", chart.name()))?;

        let mut written = Vec::with_capacity(plots.len());
        for plot in plots {
            let path = self.output_dir.join(plot.file_name());
            plot.render(&path)
                .with_context(|| format!("Failed to render chart: {}", path.display()))?;
            tracing::info!("Wrote {}", path.display());
            written.push(path);
        }

        Ok(written)
    }
}
