//! Flat record table derived from a benchmark document

use crate::document::{BenchmarkDocument, BenchmarkEntry};
use crate::pattern::GroupPattern;
use crate::units::nanos_to_millis;
use serde::{Deserialize, Serialize};

/// Statistic selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stat {
    Avg,
    Min,
    Max,
    P50,
    P75,
    P99,
}

impl Stat {
    /// All statistics in column order
    pub const ALL: [Stat; 6] = [Stat::Avg, Stat::Min, Stat::Max, Stat::P50, Stat::P75, Stat::P99];

    /// Column name of the raw value
    pub fn column(&self) -> &'static str {
        match self {
            Stat::Avg => "avg",
            Stat::Min => "min",
            Stat::Max => "max",
            Stat::P50 => "p50",
            Stat::P75 => "p75",
            Stat::P99 => "p99",
        }
    }

    /// Column name of the millisecond value
    pub fn millis_column(&self) -> &'static str {
        match self {
            Stat::Avg => "avg_ms",
            Stat::Min => "min_ms",
            Stat::Max => "max_ms",
            Stat::P50 => "p50_ms",
            Stat::P75 => "p75_ms",
            Stat::P99 => "p99_ms",
        }
    }
}

/// One benchmark entry flattened into a row, values in nanoseconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub group: String,
    pub avg: f64,
    pub min: f64,
    pub max: f64,
    pub p50: f64,
    pub p75: f64,
    pub p99: f64,
}

impl Record {
    /// Raw value of a statistic in nanoseconds
    pub fn value(&self, stat: Stat) -> f64 {
        match stat {
            Stat::Avg => self.avg,
            Stat::Min => self.min,
            Stat::Max => self.max,
            Stat::P50 => self.p50,
            Stat::P75 => self.p75,
            Stat::P99 => self.p99,
        }
    }

    /// Value of a statistic in milliseconds
    pub fn millis(&self, stat: Stat) -> f64 {
        nanos_to_millis(self.value(stat))
    }
}

impl From<&BenchmarkEntry> for Record {
    fn from(entry: &BenchmarkEntry) -> Self {
        Self {
            name: entry.name.clone(),
            group: entry.group.clone(),
            avg: entry.stats.avg,
            min: entry.stats.min,
            max: entry.stats.max,
            p50: entry.stats.p50,
            p75: entry.stats.p75,
            p99: entry.stats.p99,
        }
    }
}

/// Ordered, immutable collection of records
///
/// Selection and partitioning return new tables; the source table is never
/// modified.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordTable {
    records: Vec<Record>,
}

impl RecordTable {
    /// Build a table with one record per document entry, in input order
    pub fn from_document(document: &BenchmarkDocument) -> Self {
        Self {
            records: document.benchmarks.iter().map(Record::from).collect(),
        }
    }

    /// Build a table from existing records
    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Get the number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Get an iterator over the records
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Records whose group matches the pattern
    pub fn select(&self, pattern: &GroupPattern) -> RecordTable {
        let records: Vec<Record> = self
            .records
            .iter()
            .filter(|r| pattern.is_match(&r.group))
            .cloned()
            .collect();

        tracing::debug!(
            "Pattern '{}' selected {} of {} records",
            pattern.as_str(),
            records.len(),
            self.records.len()
        );

        RecordTable { records }
    }

    /// Distinct group values in first-seen order
    pub fn groups(&self) -> Vec<&str> {
        let mut groups: Vec<&str> = Vec::new();
        for record in &self.records {
            if !groups.contains(&record.group.as_str()) {
                groups.push(&record.group);
            }
        }
        groups
    }

    /// Distinct engine names in first-seen order
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for record in &self.records {
            if !names.contains(&record.name.as_str()) {
                names.push(&record.name);
            }
        }
        names
    }

    /// Split into one table per distinct group, in first-seen order
    pub fn partition_by_group(&self) -> Vec<(String, RecordTable)> {
        self.groups()
            .into_iter()
            .map(|group| {
                let records = self
                    .records
                    .iter()
                    .filter(|r| r.group == group)
                    .cloned()
                    .collect();
                (group.to_string(), RecordTable { records })
            })
            .collect()
    }

    /// First record with the given engine name
    pub fn find_by_name(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name == name)
    }
}

impl<'a> IntoIterator for &'a RecordTable {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::StatSummary;

    fn entry(name: &str, group: &str, avg: f64) -> BenchmarkEntry {
        BenchmarkEntry {
            name: name.to_string(),
            group: group.to_string(),
            stats: StatSummary {
                avg,
                min: avg * 0.5,
                max: avg * 2.0,
                p50: avg,
                p75: avg * 1.25,
                p99: avg * 1.9,
            },
        }
    }

    fn sample_document() -> BenchmarkDocument {
        BenchmarkDocument {
            benchmarks: vec![
                entry("A", "movies.findMany() (all - 25000)", 2_000_000.0),
                entry("B", "movies.findMany() (all - 25000)", 4_000_000.0),
                entry("A", "prisma.movie.update(...)", 500_000.0),
                entry("B", "prisma.movie.update(...)", 750_000.0),
                entry("A", "movies.findMany({ take: 2000 })", 1_000_000.0),
            ],
        }
    }

    #[test]
    fn test_one_record_per_entry() {
        let doc = sample_document();
        let table = RecordTable::from_document(&doc);
        assert_eq!(table.len(), doc.len());

        let empty = RecordTable::from_document(&BenchmarkDocument::default());
        assert!(empty.is_empty());
    }

    #[test]
    fn test_records_keep_input_order() {
        let table = RecordTable::from_document(&sample_document());
        let avgs: Vec<f64> = table.iter().map(|r| r.avg).collect();
        assert_eq!(
            avgs,
            vec![2_000_000.0, 4_000_000.0, 500_000.0, 750_000.0, 1_000_000.0]
        );
    }

    #[test]
    fn test_millis_conversion_is_exact() {
        let table = RecordTable::from_document(&sample_document());
        for record in &table {
            for stat in Stat::ALL {
                assert_eq!(record.millis(stat), record.value(stat) / 1_000_000.0);
            }
        }
        assert_eq!(table.find_by_name("A").unwrap().millis(Stat::Avg), 2.0);
    }

    #[test]
    fn test_select_copies_matching_rows() {
        let table = RecordTable::from_document(&sample_document());
        let pattern = GroupPattern::new("update").unwrap();
        let selected = table.select(&pattern);

        assert_eq!(selected.len(), 2);
        assert!(selected.iter().all(|r| r.group == "prisma.movie.update(...)"));
        // Source untouched
        assert_eq!(table.len(), 5);
    }

    #[test]
    fn test_select_nothing() {
        let table = RecordTable::from_document(&sample_document());
        let pattern = GroupPattern::new("aggregate").unwrap();
        assert!(table.select(&pattern).is_empty());
    }

    #[test]
    fn test_partition_by_group_first_seen_order() {
        let table = RecordTable::from_document(&sample_document());
        let partitions = table.partition_by_group();

        let groups: Vec<&str> = partitions.iter().map(|(g, _)| g.as_str()).collect();
        assert_eq!(
            groups,
            vec![
                "movies.findMany() (all - 25000)",
                "prisma.movie.update(...)",
                "movies.findMany({ take: 2000 })",
            ]
        );
        assert_eq!(partitions[0].1.len(), 2);
        assert_eq!(partitions[2].1.len(), 1);
    }

    #[test]
    fn test_names_first_seen_order() {
        let table = RecordTable::from_document(&sample_document());
        assert_eq!(table.names(), vec!["A", "B"]);
    }

    #[test]
    fn test_find_by_name() {
        let table = RecordTable::from_document(&sample_document());
        assert_eq!(table.find_by_name("B").unwrap().avg, 4_000_000.0);
        assert!(table.find_by_name("C").is_none());
    }

    #[test]
    fn test_stat_columns() {
        let columns: Vec<&str> = Stat::ALL.iter().map(|s| s.column()).collect();
        assert_eq!(columns, vec!["avg", "min", "max", "p50", "p75", "p99"]);
        assert_eq!(Stat::P99.millis_column(), "p99_ms");
    }
}
