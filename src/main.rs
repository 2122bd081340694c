//! Settle CLI
//!
//! Command-line entry point for the Settle configuration resolver.

use clap::Parser;
use colored::Colorize;
use settle::cli::{report, Cli};

fn main() {
    let cli = Cli::parse();

    match cli.color.as_str() {
        "always" => colored::control::set_override(true),
        "never" => colored::control::set_override(false),
        _ => {},
    }

    // Initialize logging
    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    if let Err(err) = report::execute(&cli) {
        eprintln!();
        eprintln!(
            "{} {}",
            "✗".red().bold(),
            "Failed to load application configuration".red().bold()
        );
        eprintln!("  Error: {err}");
        std::process::exit(1);
    }
}
