//! futurelint CLI tool.
//!
//! Usage:
//! ```bash
//! futurelint [OPTIONS] <PATHS>...
//! ```
//!
//! Exit codes: 0 clean, 1 at least one violation, 2 operational failures
//! only, 64 (EX_USAGE) when no input paths are given.

use anyhow::{Context, Result};
use clap::Parser;
use futurelint_core::{Analyzer, NullSink, StderrSink, ViolationSink};
use futurelint_rules::default_rules;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod config_resolver;
mod output;

/// Exit code for a usage error (no input supplied), after BSD sysexits.
const EX_USAGE: i32 = 64;

/// Forward-compatibility checker for Python 2-era sources
#[derive(Parser)]
#[command(name = "futurelint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Files or directories to check (directories are recursed for .py files)
    paths: Vec<PathBuf>,

    /// Target Python 2.6+, where the with_statement import is implied
    #[arg(long)]
    py26: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Don't report violations on stderr as they are found
    #[arg(short, long)]
    quiet: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

/// Output format for lint results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary.
    #[default]
    Text,
    /// JSON output.
    Json,
    /// One-line-per-violation compact format.
    Compact,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if cli.paths.is_empty() {
        eprintln!("usage: futurelint [OPTIONS] <PATHS>...");
        eprintln!("futurelint: no input files or directories");
        std::process::exit(EX_USAGE);
    }

    let working_dir = std::env::current_dir().context("cannot determine working directory")?;
    let source = config_resolver::resolve(&working_dir, cli.config.as_deref());
    let config = source.load()?;

    // CLI flags override config values.
    let py26 = cli.py26 || config.py26;
    let quiet = cli.quiet || config.quiet;

    let mut builder = Analyzer::builder().paths(cli.paths).config(config);
    for rule in default_rules(py26) {
        builder = builder.rule_box(rule);
    }
    let analyzer = builder.build().context("failed to build analyzer")?;

    tracing::debug!("checking with {} rule(s)", analyzer.rule_count());

    let mut stderr_sink = StderrSink;
    let mut null_sink = NullSink;
    let sink: &mut dyn ViolationSink = if quiet {
        &mut null_sink
    } else {
        &mut stderr_sink
    };

    let result = analyzer.analyze(sink).context("analysis failed")?;

    output::print(&result, cli.format)?;

    if result.has_violations() {
        std::process::exit(1);
    }
    if result.has_failures() {
        std::process::exit(2);
    }

    Ok(())
}
