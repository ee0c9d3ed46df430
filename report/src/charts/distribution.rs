//! Spread of single-row operations, grouped by operation and engine

use super::Chart;
use crate::figure::Figure;
use crate::visualization::{BoxCell, BoxPlot, Plot};
use benchviz_core::{GroupPattern, RecordTable, Stat};
use std::collections::HashMap;

pub struct DistributionChart {
    pattern: GroupPattern,
}

impl DistributionChart {
    pub const FILE_NAME: &'static str = "operation_distribution.png";
    const FIGURE: Figure = Figure::new(15.0, 8.0);

    pub fn new(pattern: GroupPattern) -> Self {
        Self { pattern }
    }
}

impl Chart for DistributionChart {
    fn name(&self) -> &'static str {
        "operation distribution"
    }

    fn plan(&self, table: &RecordTable) -> benchviz_core::Result<Vec<Plot>> {
        let selected = table.select(&self.pattern);
        if selected.is_empty() {
            tracing::warn!(
                "No records match '{}', rendering an empty distribution chart",
                self.pattern.as_str()
            );
        }

        let groups = selected.groups();
        let hues = selected.names();
        // Every selected record's group and name is present by construction
        let group_index: HashMap<&str, usize> =
            groups.iter().enumerate().map(|(idx, g)| (*g, idx)).collect();
        let hue_index: HashMap<&str, usize> =
            hues.iter().enumerate().map(|(idx, h)| (*h, idx)).collect();
        let mut cells: Vec<BoxCell> = Vec::new();

        for record in &selected {
            let group = group_index[record.group.as_str()];
            let hue = hue_index[record.name.as_str()];
            let avg_ms = record.millis(Stat::Avg);
            tracing::debug!(
                "{} / {}: avg {:.3} ms, p50 {:.3} ms, p75 {:.3} ms, p99 {:.3} ms",
                record.group,
                record.name,
                avg_ms,
                record.millis(Stat::P50),
                record.millis(Stat::P75),
                record.millis(Stat::P99)
            );

            match cells.iter_mut().find(|c| c.group == group && c.hue == hue) {
                Some(cell) => cell.samples.push(avg_ms),
                None => cells.push(BoxCell {
                    group,
                    hue,
                    samples: vec![avg_ms],
                }),
            }
        }

        Ok(vec![Plot::Box(BoxPlot {
            file_name: Self::FILE_NAME.to_string(),
            title: "Distribution of Execution Times by Operation".to_string(),
            y_desc: "Time (ms)".to_string(),
            figure: Self::FIGURE,
            groups: groups.into_iter().map(String::from).collect(),
            hues: hues.into_iter().map(String::from).collect(),
            cells,
        })])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::test_support::table;
    use benchviz_core::pattern::OPERATIONS_PATTERN;

    const UPDATE: &str = "prisma.movie.update(...)";
    const FIND_UNIQUE: &str =
        "prisma.movie.findUnique({ where: { ... }, include: { cast: { take: 3, } } })";

    fn plan(table: &RecordTable) -> BoxPlot {
        let chart = DistributionChart::new(GroupPattern::new(OPERATIONS_PATTERN).unwrap());
        let mut plots = chart.plan(table).unwrap();
        assert_eq!(plots.len(), 1);
        match plots.remove(0) {
            Plot::Box(plot) => plot,
            other => panic!("Expected a box plot, got {:?}", other),
        }
    }

    #[test]
    fn test_groups_on_x_engines_as_hue() {
        let table = table(&[
            ("A", UPDATE, 1_000_000.0),
            ("B", UPDATE, 3_000_000.0),
            ("A", FIND_UNIQUE, 500_000.0),
            ("B", FIND_UNIQUE, 250_000.0),
            ("A", "movies.findMany() (all - 25000)", 9.0),
        ]);
        let plot = plan(&table);

        assert_eq!(plot.file_name, "operation_distribution.png");
        assert_eq!(plot.groups, vec![UPDATE.to_string(), FIND_UNIQUE.to_string()]);
        assert_eq!(plot.hues, vec!["A".to_string(), "B".to_string()]);
        assert_eq!(plot.cells.len(), 4);
        assert_eq!(plot.cell(0, 1).unwrap().samples, vec![3.0]);
        assert_eq!(plot.cell(1, 0).unwrap().samples, vec![0.5]);
        assert_eq!(plot.figure.pixels(), (1500, 800));
    }

    #[test]
    fn test_repeated_rows_share_a_cell() {
        let table = table(&[
            ("A", UPDATE, 1_000_000.0),
            ("A", UPDATE, 2_000_000.0),
            ("A", UPDATE, 4_000_000.0),
        ]);
        let plot = plan(&table);

        assert_eq!(plot.cells.len(), 1);
        assert_eq!(plot.cell(0, 0).unwrap().samples, vec![1.0, 2.0, 4.0]);
    }

    #[test]
    fn test_hue_first_seen_in_later_group() {
        let table = table(&[
            ("A", UPDATE, 1_000_000.0),
            ("A", FIND_UNIQUE, 2_000_000.0),
            ("C", FIND_UNIQUE, 4_000_000.0),
            ("B", UPDATE, 8_000_000.0),
        ]);
        let plot = plan(&table);

        assert_eq!(plot.hues, vec!["A".to_string(), "C".to_string(), "B".to_string()]);
        assert_eq!(plot.cell(1, 1).unwrap().samples, vec![4.0]);
        assert_eq!(plot.cell(0, 2).unwrap().samples, vec![8.0]);
        assert!(plot.cell(0, 1).is_none());
        assert!(plot.cell(1, 2).is_none());
    }

    #[test]
    fn test_no_match_plans_empty_chart() {
        let plot = plan(&table(&[("A", "movies.findMany() (all - 25000)", 1.0)]));
        assert!(plot.groups.is_empty());
        assert!(plot.cells.is_empty());
    }
}
