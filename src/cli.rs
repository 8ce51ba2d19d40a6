//! CLI argument parsing for Vigia

use crate::config::ReportMode;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for classification results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable counts (default)
    Text,
    /// JSON format for machine parsing
    Json,
    /// CSV format, one row per report
    Csv,
}

#[derive(Parser, Debug)]
#[command(name = "vigia")]
#[command(version)]
#[command(about = "Classify reports as safe, with optional single-level fault tolerance", long_about = None)]
pub struct Cli {
    /// Report file, one report per line (reads stdin when omitted or "-")
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Which counts to produce (overrides config file)
    #[arg(short = 'm', long = "mode", value_enum)]
    pub mode: Option<ReportMode>,

    /// Output format
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Smallest allowed step between adjacent levels (overrides config file)
    #[arg(long = "min-step", value_name = "N")]
    pub min_step: Option<u64>,

    /// Largest allowed step between adjacent levels (overrides config file)
    #[arg(long = "max-step", value_name = "N")]
    pub max_step: Option<u64>,

    /// Worker threads for report evaluation (overrides config file)
    #[arg(short = 'j', long = "jobs", value_name = "N")]
    pub jobs: Option<usize>,

    /// TOML configuration file
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug tracing output on stderr
    #[arg(long = "debug")]
    pub debug: bool,
}

impl Cli {
    /// Input path, or `None` for stdin
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.input
            .as_ref()
            .filter(|path| path.as_os_str() != "-")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["vigia"]);
        assert!(cli.input.is_none());
        assert!(cli.mode.is_none());
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(!cli.debug);
    }

    #[test]
    fn test_cli_parses_input() {
        let cli = Cli::parse_from(["vigia", "reports.txt"]);
        assert_eq!(cli.input_path(), Some(&PathBuf::from("reports.txt")));
    }

    #[test]
    fn test_cli_dash_means_stdin() {
        let cli = Cli::parse_from(["vigia", "-"]);
        assert!(cli.input_path().is_none());
    }

    #[test]
    fn test_cli_mode_flag() {
        let cli = Cli::parse_from(["vigia", "--mode", "tolerant"]);
        assert_eq!(cli.mode, Some(ReportMode::Tolerant));

        let cli = Cli::parse_from(["vigia", "-m", "strict"]);
        assert_eq!(cli.mode, Some(ReportMode::Strict));
    }

    #[test]
    fn test_cli_step_overrides() {
        let cli = Cli::parse_from(["vigia", "--min-step", "2", "--max-step", "5"]);
        assert_eq!(cli.min_step, Some(2));
        assert_eq!(cli.max_step, Some(5));
    }

    #[test]
    fn test_cli_jobs_and_format() {
        let cli = Cli::parse_from(["vigia", "-j", "4", "--format", "csv", "in.txt"]);
        assert_eq!(cli.jobs, Some(4));
        assert_eq!(cli.format, OutputFormat::Csv);
    }

    #[test]
    fn test_cli_rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["vigia", "--mode", "lenient"]).is_err());
    }
}
