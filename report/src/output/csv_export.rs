//! CSV export of the derived record table

use anyhow::Result;
use benchviz_core::{RecordTable, Stat};
use csv::Writer;
use std::fs::File;
use std::path::Path;

pub struct CsvExporter;

impl CsvExporter {
    /// Export every record with raw and millisecond columns
    pub fn export(table: &RecordTable, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        let mut wtr = Writer::from_writer(file);

        // Write headers
        let mut header = vec!["name", "group"];
        header.extend(Stat::ALL.iter().map(|s| s.column()));
        header.extend(Stat::ALL.iter().map(|s| s.millis_column()));
        wtr.write_record(&header)?;

        // Write data rows
        for record in table {
            let mut row = vec![record.name.clone(), record.group.clone()];
            row.extend(Stat::ALL.iter().map(|s| record.value(*s).to_string()));
            row.extend(Stat::ALL.iter().map(|s| record.millis(*s).to_string()));
            wtr.write_record(&row)?;
        }

        wtr.flush()?;
        tracing::debug!("Exported {} records to {}", table.len(), path.display());
        Ok(())
    }
}
