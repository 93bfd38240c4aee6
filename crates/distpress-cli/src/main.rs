// SPDX-License-Identifier: AGPL-3.0
// Copyright (C) 2026 Distpress Contributors

//! `distpress` — compress already-built output files in place
//!
//! Walks a build output directory, compresses the files selected by
//! pattern and size policy, writes each result as a sibling
//! (`app.js` → `app.js.gz`) and reports the size reduction.

mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use distpress_config::{Config, ConfigLoader, Validator, DEFAULT_CONFIG_FILE};
use distpress_pipeline::{FreshnessCache, Pipeline, PipelineOptions, RunSummary};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "distpress")]
#[command(version, about = "Post-build artifact compressor")]
#[command(
    long_about = "Distpress compresses already-built output files in place: it selects files \
by pattern and size policy, writes each compressed result as a sibling file \
(app.js -> app.js.gz) and reports the size reduction."
)]
#[command(author = "Distpress Contributors")]
struct Cli {
    /// Directory of build output to compress
    #[arg(value_name = "DIR", default_value = "dist")]
    dir: PathBuf,

    /// Configuration file (default: distpress.toml if present)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Compression algorithm: gzip, brotli, deflate or deflate-raw
    #[arg(short, long, value_name = "ALGO")]
    algorithm: Option<String>,

    /// Output suffix appended to each compressed file (e.g. "gz")
    #[arg(long, value_name = "EXT")]
    ext: Option<String>,

    /// Minimum file size in bytes; strictly smaller files are skipped
    #[arg(short, long, value_name = "BYTES")]
    threshold: Option<u64>,

    /// Glob pattern selecting files to compress (repeatable)
    #[arg(short, long, value_name = "GLOB")]
    pattern: Vec<String>,

    /// Remove each original file after its bytes are read
    #[arg(long)]
    delete_original: bool,

    /// Decompress each written sibling and verify it matches the source
    #[arg(long)]
    check: bool,

    /// Suppress the report
    #[arg(short, long)]
    quiet: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Emit the run summary as JSON on stdout
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", style("error:").red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let mut config = load_config(&cli).await?;
    merge_cli_overrides(&cli, &mut config)?;

    let log_level = if cli.verbose {
        "debug"
    } else {
        config.log.level.as_str()
    };
    logging::init_tracing(log_level, &config.log.format)?;

    config.validate()?;

    let mut options = PipelineOptions::from_settings(&config.compression)?;
    options.verify = cli.check;

    let enabled = options.enabled;
    let cache = FreshnessCache::new();
    let summary = Pipeline::new(options).run(&cli.dir, &cache).await?;
    tracing::debug!(
        results = summary.results.len(),
        failures = summary.failures.len(),
        skipped = summary.skipped,
        "run complete"
    );

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary.to_json())?);
    } else if !cli.quiet {
        print_outcome(&summary, enabled);
    }

    Ok(if summary.failures.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

async fn load_config(cli: &Cli) -> Result<Config> {
    let loader = ConfigLoader::without_validation();
    let config = match &cli.config {
        Some(path) => loader
            .load_with_overrides(path)
            .await
            .with_context(|| format!("loading {}", path.display()))?,
        None => loader.load_optional(DEFAULT_CONFIG_FILE).await?,
    };
    Ok(config)
}

fn merge_cli_overrides(cli: &Cli, config: &mut Config) -> Result<()> {
    let settings = &mut config.compression;
    if let Some(name) = &cli.algorithm {
        settings.algorithm = name
            .parse()
            .with_context(|| format!("--algorithm {}", name))?;
    }
    if let Some(ext) = &cli.ext {
        settings.output_extension = Some(ext.clone());
    }
    if let Some(threshold) = cli.threshold {
        settings.size_threshold = threshold;
    }
    if !cli.pattern.is_empty() {
        settings.patterns = cli.pattern.clone();
    }
    if cli.delete_original {
        settings.delete_original = true;
    }
    if cli.quiet || cli.json {
        settings.verbose = false;
    }
    Ok(())
}

fn print_outcome(summary: &RunSummary, enabled: bool) {
    if !enabled {
        println!("{} compression disabled", style("-").dim());
        return;
    }

    if !summary.failures.is_empty() {
        println!(
            "{} {} file(s) failed to compress",
            style("✗").red().bold(),
            summary.failures.len()
        );
    }

    if summary.results.is_empty() {
        if summary.skipped > 0 {
            println!(
                "{} nothing to do, {} file(s) unchanged since last run",
                style("✓").green(),
                summary.skipped
            );
        } else if summary.failures.is_empty() {
            println!("{} nothing to compress", style("-").dim());
        }
        return;
    }

    println!(
        "{} compressed {} file(s) to {:.2}% of their original size",
        style("✓").green().bold(),
        summary.results.len(),
        summary.total_percentage()
    );
}
