//! Output formats for the derived record table

pub mod csv_export;

pub use csv_export::CsvExporter;
