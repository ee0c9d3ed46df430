//! Report generation for benchmark results
//!
//! This crate turns a [`RecordTable`](benchviz_core::RecordTable) into:
//!
//! - A bar chart of the bulk read query per engine
//! - A grouped box plot of single-row operations
//! - One labelled bar chart per query type
//! - A relative performance chart against a baseline engine
//! - A CSV export of the derived table

#![warn(clippy::all)]

pub mod charts;
pub mod figure;
pub mod output;
pub mod renderer;
pub mod visualization;

pub use charts::{
    BasicQueriesChart, Chart, DistributionChart, PerQueryTypeCharts, RelativePerformanceChart,
};
pub use figure::Figure;
pub use output::CsvExporter;
pub use renderer::ReportRenderer;
pub use visualization::{Bar, BarPlot, BoxCell, BoxPlot, Plot};
