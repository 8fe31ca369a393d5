//! Check command implementation
//!
//! Loads the configuration and reports the effective settings, so users can
//! verify what an aggregation run would use without running one.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use unitygen::config;

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Path to config file
    #[arg(short, long, value_name = "PATH", env = "UNITYGEN_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Execute the check command
pub fn execute(args: CheckArgs) -> Result<()> {
    let config_path = args
        .config
        .unwrap_or_else(|| PathBuf::from(".unitygen.yaml"));

    let config = config::from_file(&config_path)
        .with_context(|| format!("Failed to load config '{}'", config_path.display()))?;

    println!("Configuration loaded successfully");
    println!("  base_name: {}", config.base_name);
    println!("  output_directory: {}", config.output_directory.display());
    println!("  bytes_per_unity_file: {}", config.bytes_per_unity_file);
    if config.bytes_per_unity_file == 0 {
        println!("  note: zero threshold always forces a single unity file");
    }
    println!("  stress_test_single_unit: {}", config.stress_test_single_unit);
    println!("  pch_enabled: {}", config.pch_enabled);
    if let Some(pch) = &config.pch_header_path {
        println!("  pch_header_path: {}", pch.display());
    }
    println!("  requires_companion_file: {}", config.requires_companion_file);
    println!("  single_unit_multiplier: {}", config.single_unit_multiplier);
    println!("  isolation_marker: {}", config.isolation_marker);

    Ok(())
}
