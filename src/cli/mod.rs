//! CLI argument parsing and command dispatch

use anyhow::{Context, Result};
use benchviz_core::{BenchmarkDocument, RecordTable, ReportConfig, DEFAULT_BASELINE};
use benchviz_report::{CsvExporter, ReportRenderer};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

/// benchviz - Render benchmark results into comparison charts
#[derive(Parser, Debug)]
#[command(name = "benchviz")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Render options used when no subcommand is given
    #[command(flatten)]
    pub render: RenderArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render all charts (the default)
    Render(RenderArgs),
    /// Export the derived record table as CSV
    Export {
        /// Path to results file
        #[arg(short, long, default_value = "results.json", env = "BENCHVIZ_INPUT")]
        input: PathBuf,
        /// Path of the CSV file to write
        #[arg(short, long, default_value = "records.csv")]
        output: PathBuf,
    },
    /// Check that a results file can be charted
    Validate {
        /// Path to results file
        #[arg(short, long, default_value = "results.json", env = "BENCHVIZ_INPUT")]
        input: PathBuf,
        /// Baseline engine for the relative performance chart
        #[arg(short, long, env = "BENCHVIZ_BASELINE")]
        baseline: Option<String>,
    },
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Path to results file
    #[arg(short, long, default_value = "results.json", env = "BENCHVIZ_INPUT")]
    pub input: PathBuf,

    /// Directory the images are written to
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Baseline engine for the relative performance chart
    #[arg(short, long, env = "BENCHVIZ_BASELINE")]
    pub baseline: Option<String>,

    /// JSON report configuration; flags override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl RenderArgs {
    /// Merge the config file (if any) with the command-line overrides
    fn report_config(&self) -> Result<ReportConfig> {
        let mut config = match &self.config {
            Some(path) => ReportConfig::from_path(path)
                .with_context(|| format!("Failed to load config from: {}", path.display()))?,
            None => ReportConfig::default(),
        };

        if let Some(dir) = &self.output_dir {
            config = config.with_output_dir(dir);
        }
        if let Some(baseline) = &self.baseline {
            config = config.with_baseline(baseline);
        }
        Ok(config)
    }
}

impl Cli {
    /// Run the selected command
    pub fn run(&self) -> Result<()> {
        match &self.command {
            None => render(&self.render),
            Some(Commands::Render(args)) => render(args),
            Some(Commands::Export { input, output }) => export(input, output),
            Some(Commands::Validate { input, baseline }) => {
                validate(input, baseline.as_deref().unwrap_or(DEFAULT_BASELINE))
            }
        }
    }
}

fn load_table(input: &Path) -> Result<RecordTable> {
    let document = BenchmarkDocument::from_path(input)
        .with_context(|| format!("Failed to load results from: {}", input.display()))?;
    let table = RecordTable::from_document(&document);
    tracing::info!("Loaded {} records from {}", table.len(), input.display());
    Ok(table)
}

fn render(args: &RenderArgs) -> Result<()> {
    let config = args.report_config()?;
    let renderer = ReportRenderer::new(&config)?;
    let table = load_table(&args.input)?;

    tracing::info!("Rendering charts into {}", renderer.output_dir().display());
    let written = renderer.render(&table)?;

    println!("\nGenerated charts:");
    for path in &written {
        println!("✓ {}", path.display());
    }
    println!();

    Ok(())
}

fn export(input: &Path, output: &Path) -> Result<()> {
    let table = load_table(input)?;
    CsvExporter::export(&table, output)
        .with_context(|| format!("Failed to export CSV to: {}", output.display()))?;
    println!("✓ CSV exported to: {}", output.display());
    Ok(())
}

fn validate(input: &Path, baseline: &str) -> Result<()> {
    let config = ReportConfig::default().with_baseline(baseline);
    config.validate()?;
    let patterns = config.patterns()?;
    let table = load_table(input)?;

    let bulk = table.select(&patterns.bulk_read);
    let operations = table.select(&patterns.operations);
    let query_types = table.select(&patterns.query_types);

    println!("\n{}", "=".repeat(70));
    println!("   Results Check: {}", input.display());
    println!("{}", "=".repeat(70));
    println!("  Records:              {}", table.len());
    println!("  Engines:              {}", table.names().len());
    println!("  Groups:               {}", table.groups().len());
    println!("  Bulk reads:           {}", bulk.len());
    println!("  Operations:           {}", operations.len());
    println!(
        "  Query types:          {} ({} charts)",
        query_types.len(),
        query_types.groups().len()
    );

    let has_baseline = bulk.find_by_name(baseline).is_some();
    println!(
        "  Baseline:             {} ({})",
        baseline,
        if has_baseline { "found" } else { "missing" }
    );
    println!("{}", "=".repeat(70));
    println!();

    if !has_baseline {
        anyhow::bail!(
            "Baseline '{}' has no bulk read record; the relative performance chart would fail",
            baseline
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const RESULTS: &str = r#"{"benchmarks": [
        {"name": "A", "group": "movies.findMany() (all - 25000)",
         "stats": {"avg": 2000000, "min": 1, "max": 1, "p50": 1, "p75": 1, "p99": 1}}
    ]}"#;

    fn results_file() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", RESULTS).unwrap();
        file
    }

    #[test]
    fn test_default_command_is_none() {
        let cli = Cli::parse_from(["benchviz"]);
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_default_render_reads_flags() {
        let cli = Cli::parse_from(["benchviz", "--output-dir", "charts", "-i", "bench.json"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.render.input, PathBuf::from("bench.json"));
        let config = cli.render.report_config().unwrap();
        assert_eq!(config.output_dir, PathBuf::from("charts"));
    }

    #[test]
    fn test_default_render_reads_env() {
        std::env::set_var("BENCHVIZ_BASELINE", "Baseline from env");
        let cli = Cli::parse_from(["benchviz"]);
        std::env::remove_var("BENCHVIZ_BASELINE");

        assert!(cli.command.is_none());
        let config = cli.render.report_config().unwrap();
        assert_eq!(config.baseline, "Baseline from env");
    }

    #[test]
    fn test_parse_render_args() {
        let cli = Cli::parse_from([
            "benchviz",
            "-v",
            "render",
            "--input",
            "bench.json",
            "--output-dir",
            "charts",
            "--baseline",
            "Query compiler with pg driver adapter",
        ]);
        assert!(cli.verbose);
        let Some(Commands::Render(args)) = cli.command else {
            panic!("Expected render command");
        };
        assert_eq!(args.input, PathBuf::from("bench.json"));

        let config = args.report_config().unwrap();
        assert_eq!(config.output_dir, PathBuf::from("charts"));
        assert_eq!(config.baseline, "Query compiler with pg driver adapter");
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"baseline": "From file", "output_dir": "from-file"}}"#).unwrap();

        let args = RenderArgs {
            input: PathBuf::from("results.json"),
            output_dir: Some(PathBuf::from("from-flag")),
            baseline: None,
            config: Some(file.path().to_path_buf()),
        };
        let config = args.report_config().unwrap();
        assert_eq!(config.baseline, "From file");
        assert_eq!(config.output_dir, PathBuf::from("from-flag"));
    }

    #[test]
    fn test_export_command() {
        let input = results_file();
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("records.csv");

        export(input.path(), &output).unwrap();
        let csv = std::fs::read_to_string(&output).unwrap();
        assert!(csv.starts_with("name,group,avg"));
        assert_eq!(csv.lines().count(), 2);
    }

    #[test]
    fn test_validate_reports_missing_baseline() {
        let input = results_file();
        assert!(validate(input.path(), "A").is_ok());
        assert!(validate(input.path(), DEFAULT_BASELINE).is_err());
    }

    #[test]
    fn test_missing_input_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_table(&dir.path().join("results.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to load results"));
    }
}
