//! Command-line interface for Settle

use clap::Parser;
use std::path::PathBuf;

pub mod report;

/// Settle - Configuration resolution with a safe fallback
#[derive(Parser)]
#[command(
    name = "settle",
    version,
    about = "Resolve application configuration from a JSON file with a built-in safe fallback",
    long_about = "Settle loads the application configuration from a JSON document next to the \
                  executable. When the document is missing it continues with a built-in default \
                  configuration and records that default in a fallback artifact for inspection."
)]
pub struct Cli {
    /// Path to the configuration file (default: app_settings.json next to the executable)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Where to record the defaults when the configuration file is missing
    #[arg(long, value_name = "PATH")]
    pub fallback: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Color output: auto, always, never
    #[arg(long, default_value = "auto")]
    pub color: String,
}
