//! One labelled bar chart per query type

use super::{bars_by_name, Chart};
use crate::figure::Figure;
use crate::visualization::{BarPlot, Plot};
use benchviz_core::{query_type_file_name, GroupPattern, RecordTable, Stat};

pub struct PerQueryTypeCharts {
    pattern: GroupPattern,
}

impl PerQueryTypeCharts {
    const FIGURE: Figure = Figure::new(10.0, 6.0).with_dpi(300);

    pub fn new(pattern: GroupPattern) -> Self {
        Self { pattern }
    }
}

impl Chart for PerQueryTypeCharts {
    fn name(&self) -> &'static str {
        "query types"
    }

    fn plan(&self, table: &RecordTable) -> benchviz_core::Result<Vec<Plot>> {
        let selected = table.select(&self.pattern);

        let plots: Vec<Plot> = selected
            .partition_by_group()
            .into_iter()
            .map(|(group, records)| {
                Plot::Bar(BarPlot {
                    file_name: query_type_file_name(&group),
                    bars: bars_by_name(&records, |r| r.millis(Stat::Avg)),
                    title: group,
                    x_desc: None,
                    y_desc: "Time (ms)".to_string(),
                    figure: Self::FIGURE,
                    value_labels: true,
                    reference_line: None,
                })
            })
            .collect();

        tracing::debug!("Planned {} query type charts", plots.len());
        Ok(plots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::test_support::table;
    use crate::visualization::Bar;
    use benchviz_core::pattern::QUERY_TYPES_PATTERN;

    fn plan(table: &RecordTable) -> Vec<BarPlot> {
        let chart = PerQueryTypeCharts::new(GroupPattern::new(QUERY_TYPES_PATTERN).unwrap());
        chart
            .plan(table)
            .unwrap()
            .into_iter()
            .map(|plot| match plot {
                Plot::Bar(plot) => plot,
                other => panic!("Expected a bar plot, got {:?}", other),
            })
            .collect()
    }

    #[test]
    fn test_shared_group_gives_one_chart_with_two_bars() {
        let table = table(&[
            ("A", "findMany where X", 1_250_000.0),
            ("B", "findMany where X", 2_500_000.0),
        ]);
        let plots = plan(&table);

        assert_eq!(plots.len(), 1);
        assert_eq!(plots[0].file_name, "query_type_findMany_where_X.png");
        assert_eq!(plots[0].title, "findMany where X");
        assert_eq!(
            plots[0].bars,
            vec![
                Bar { label: "A".into(), value: 1.25 },
                Bar { label: "B".into(), value: 2.5 },
            ]
        );
        assert!(plots[0].value_labels);
        assert!(plots[0].x_desc.is_none());
    }

    #[test]
    fn test_one_chart_per_group_in_first_seen_order() {
        let table = table(&[
            ("A", "movies.findMany({ take: 2000 })", 1.0),
            ("A", "movies.findMany({ where: {...}, take: 2000 })", 1.0),
            ("B", "movies.findMany({ take: 2000 })", 1.0),
            ("A", "prisma.movie.update(...)", 1.0),
        ]);
        let plots = plan(&table);

        let names: Vec<&str> = plots.iter().map(|p| p.file_name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "query_type_movies.findMany_take:_2000_.png",
                "query_type_movies.findMany_where:__take:_2000_.png",
            ]
        );
        assert_eq!(plots[0].bars.len(), 2);
        assert_eq!(plots[1].bars.len(), 1);
    }

    #[test]
    fn test_rendered_at_300_dpi() {
        let plots = plan(&table(&[("A", "where", 1.0)]));
        assert_eq!(plots[0].figure.dpi, 300);
        assert_eq!(plots[0].figure.pixels(), (3000, 1800));
    }

    #[test]
    fn test_file_names_are_clean() {
        let table = table(&[
            ("A", "prisma.review.findMany({ where: { author: { ... } }, take: 100 }) (to-one)", 1.0),
            ("A", "movies.findMany({ include: { cast: true } take: 2000 }) (m2m)", 1.0),
        ]);
        for plot in plan(&table) {
            let name = plot.file_name;
            assert!(!name.contains(' '));
            assert!(!name.contains(['(', ')', '{', '}', ',']));
            assert!(!name.contains("..."));
        }
    }

    #[test]
    fn test_no_match_plans_nothing() {
        assert!(plan(&table(&[("A", "movies.findMany() (all - 25000)", 1.0)])).is_empty());
    }
}
