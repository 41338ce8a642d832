use anyhow::Result;
use clap::Parser;
use regex::Regex;
use std::path::PathBuf;
use std::process;

use keylint_core::config::Config;
use keylint_core::reporting;
use keylint_core::scan;

#[derive(Parser)]
#[command(name = "keylint")]
#[command(about = "Detects hard-coded private keys in JavaScript and TypeScript sources")]
struct Cli {
    /// Files or directories to scan
    #[arg(default_value = ".")]
    paths: Vec<PathBuf>,

    /// Emit the report as JSON instead of the console format
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(long, short)]
    verbose: bool,

    /// Only scan paths matching this regex (repeatable)
    #[arg(long)]
    include: Vec<String>,

    /// Skip paths matching this regex (repeatable)
    #[arg(long)]
    exclude: Vec<String>,

    /// Path to a keylint.toml overriding rule settings
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::new();
    config.json = cli.json;
    config.verbose = cli.verbose;
    for pattern in &cli.include {
        config.include_patterns.push(Regex::new(pattern)?);
    }
    for pattern in &cli.exclude {
        config.exclude_patterns.push(Regex::new(pattern)?);
    }
    if let Some(path) = &cli.config {
        config.apply_file(path)?;
    }

    let report = scan::scan(&cli.paths, &config);

    if config.json {
        reporting::print_json(&report)?;
    } else {
        reporting::print_report(&report, &config);
    }

    if report.has_issues() {
        process::exit(1);
    }
    Ok(())
}
