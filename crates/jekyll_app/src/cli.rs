//! Command line front-end: JSON content dump in, Jekyll tree out.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use export_logging::{export_info, LogDestination};
use jekyll_engine::{load_dump, ExportOptions, ExportReport, Exporter};
use log::LevelFilter;

/// Exit status when the run completed but some items failed.
const PARTIAL_FAILURE: u8 = 2;

/// jekyll-export - turn a content store dump into a Jekyll site tree
#[derive(Parser, Debug)]
#[command(name = "jekyll-export", version, about, long_about = None)]
pub struct Cli {
    /// JSON dump of the content store (site settings and records)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Directory that receives `_config.yml`, `_posts/` and the pages
    #[arg(short, long)]
    pub output: PathBuf,

    /// Directory for posts, relative to the output directory
    #[arg(long, default_value = "_posts")]
    pub posts_dir: String,

    /// Skip re-parsing serialized documents before writing them
    #[arg(long)]
    pub no_verify: bool,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Also write the log to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

impl Cli {
    fn options(&self) -> ExportOptions {
        ExportOptions {
            posts_dir: self.posts_dir.clone(),
            verify_round_trip: !self.no_verify,
            ..ExportOptions::default()
        }
    }
}

pub fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let destination = match &cli.log_file {
        Some(path) => LogDestination::Both(path.clone()),
        None => LogDestination::Terminal,
    };
    if !export_logging::initialize(destination, cli.log_level.into()) {
        eprintln!("warning: logging is disabled");
    }

    let source = load_dump(&cli.input)
        .with_context(|| format!("loading content dump {}", cli.input.display()))?;
    export_info!("Loaded {} records from {:?}", source.len(), cli.input);

    let exporter = Exporter::new(Arc::new(source)).with_options(cli.options());
    let report = exporter
        .run(&cli.output)
        .with_context(|| format!("exporting to {}", cli.output.display()))?;

    print_report(&report);
    if report.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(PARTIAL_FAILURE))
    }
}

fn print_report(report: &ExportReport) {
    for path in &report.written {
        println!("wrote {}", path.display());
    }
    if let Some(path) = &report.config_path {
        println!("wrote {}", path.display());
    }
    for warning in &report.warnings {
        eprintln!("warning: {warning}");
    }
    for failure in &report.failures {
        eprintln!("failed: {}: {}", failure.item, failure.error);
    }
    println!(
        "{} documents written, {} warnings, {} failures",
        report.written.len(),
        report.warnings.len(),
        report.failures.len()
    );
}
