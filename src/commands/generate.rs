//! Generate command implementation
//!
//! Expands the input globs into an ordered list of source files, reads their
//! sizes, runs the aggregation pipeline, and writes the generated unity
//! files (or reports what would be written under `--dry-run`).

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use unitygen::aggregate::{aggregate, Aggregation};
use unitygen::config;
use unitygen::error::Error;
use unitygen::toolchain::HostToolchain;
use unitygen::unit::{units_from_paths, SourceUnit};
use unitygen::writer::{DiskWriter, MemoryWriter};

/// Arguments for the generate command
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Path to config file
    #[arg(short, long, value_name = "PATH", env = "UNITYGEN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output directory (overrides the configured one)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Base name for generated files (overrides the configured one)
    #[arg(short, long, value_name = "NAME")]
    pub base_name: Option<String>,

    /// Show what would be generated without writing anything
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Glob patterns selecting the source files to aggregate, in order
    #[arg(value_name = "GLOB", required = true)]
    pub sources: Vec<String>,
}

/// Execute the generate command
pub fn execute(args: GenerateArgs) -> Result<()> {
    let config_path = args
        .config
        .unwrap_or_else(|| PathBuf::from(".unitygen.yaml"));

    let mut config = config::from_file(&config_path)
        .with_context(|| format!("Failed to load config '{}'", config_path.display()))?;

    if let Some(output) = args.output {
        config.output_directory = output;
    }
    if let Some(base_name) = args.base_name {
        config.base_name = base_name;
    }

    let units = collect_units(&args.sources)?;
    log::debug!("Collected {} source files from {} globs", units.len(), args.sources.len());

    let toolchain = HostToolchain::new(config.requires_companion_file);

    let result = if args.dry_run {
        let mut writer = MemoryWriter::new();
        let result = aggregate(&units, &config, &toolchain, &mut writer)?;
        println!("DRY RUN - no files written");
        result
    } else {
        let mut writer = DiskWriter;
        aggregate(&units, &config, &toolchain, &mut writer)?
    };

    print_summary(&result);
    Ok(())
}

/// Expand glob patterns into source units, preserving argument order.
///
/// Matches within one glob keep the order the pattern iterator yields them,
/// so the aggregation input order is deterministic for a given invocation.
fn collect_units(patterns: &[String]) -> Result<Vec<SourceUnit>> {
    let mut paths = Vec::new();
    for pattern in patterns {
        let matches = glob::glob(pattern)
            .map_err(Error::Glob)
            .with_context(|| format!("Invalid glob pattern '{}'", pattern))?;
        for entry in matches {
            let path = entry.with_context(|| format!("Failed to read glob match for '{}'", pattern))?;
            if path.is_file() {
                paths.push(path);
            }
        }
    }
    Ok(units_from_paths(paths)?)
}

fn print_summary(result: &Aggregation) {
    if result.units.is_empty() {
        println!("No source files matched; nothing to generate");
        return;
    }

    println!("Generated {} unity file(s):", result.units.len());
    for unit in &result.units {
        println!(
            "  {} ({} bytes: {})",
            unit.path.display(),
            unit.relative_cost,
            unit.description
        );
        if let Some(companion) = &unit.companion_path {
            println!("    companion: {}", companion.display());
        }
    }
    if let Some(pch) = &result.pch_header_name {
        println!("PCH header: {}", pch);
    }
}
