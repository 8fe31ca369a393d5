//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;

/// Unitygen - Aggregate C++ sources into unity compilation units
#[derive(Parser, Debug)]
#[command(name = "unitygen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "info")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate unity files from the given source file globs
    Generate(commands::generate::GenerateArgs),

    /// Check configuration validity and report effective settings
    Check(commands::check::CheckArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        env_logger::Builder::new()
            .parse_filters(&self.log_level)
            .try_init()
            .ok();

        match self.command {
            Commands::Generate(args) => commands::generate::execute(args),
            Commands::Check(args) => commands::check::execute(args),
        }
    }
}
