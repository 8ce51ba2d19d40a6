use anyhow::{Context, Result};
use clap::Parser;
use std::io::Read;
use tracing_subscriber::EnvFilter;
use vigia::cli::{Cli, OutputFormat};
use vigia::config::ClassifierConfig;
use vigia::csv_output::CsvOutput;
use vigia::json_output::JsonOutput;
use vigia::parser::{parse_numbered, ParsedReport, ReportParser};
use vigia::summary::RunSummary;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Config file (if any) with command-line overrides applied
fn resolve_config(args: &Cli) -> Result<ClassifierConfig> {
    let mut config = match &args.config {
        Some(path) => ClassifierConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ClassifierConfig::default(),
    };

    if let Some(mode) = args.mode {
        config.mode = mode;
    }
    if let Some(min) = args.min_step {
        config.step.min = min;
    }
    if let Some(max) = args.max_step {
        config.step.max = max;
    }
    if let Some(jobs) = args.jobs {
        config.jobs = jobs;
    }

    config.validate()?;
    Ok(config)
}

fn read_reports(args: &Cli) -> Result<Vec<ParsedReport>> {
    match args.input_path() {
        Some(path) => Ok(ReportParser::from_file(path)?),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read reports from stdin")?;
            Ok(parse_numbered(&text)?)
        }
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Initialize tracing if --debug flag is set
    init_tracing(args.debug);

    let config = resolve_config(&args)?;
    tracing::debug!("resolved config: {:?}", config);

    let reports = read_reports(&args)?;
    let summary = RunSummary::build(&reports, &config);

    match args.format {
        OutputFormat::Text => print!("{}", summary.to_text()),
        OutputFormat::Json => println!("{}", JsonOutput::new(&summary).to_json()?),
        OutputFormat::Csv => print!("{}", CsvOutput::new(&summary).to_csv()),
    }

    Ok(())
}
