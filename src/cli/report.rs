//! Resolved-configuration report
//!
//! The single command of the binary: resolve the configuration, print
//! the warning block when the built-in defaults were used, print every
//! key/value pair, and show the request the application would make.

use crate::cli::Cli;
use crate::config::{AppConfig, ConfigLoader, ConfigSource};
use anyhow::Result;
use colored::Colorize;
use serde_json::Value;
use std::path::Path;

/// Width of the key column in the configuration report
const KEY_COLUMN_WIDTH: usize = 25;

/// Execute one run: resolve, report, simulate
pub fn execute(cli: &Cli) -> Result<()> {
    let loader = build_loader(cli)?;

    println!(
        "Looking for configuration file at: {}",
        loader.config_path().display()
    );

    let resolved = loader.load_or_default()?;

    if let ConfigSource::BuiltinDefaults { artifact } = &resolved.source {
        print_missing_warning(loader.config_path(), artifact.as_deref());
    }

    print_report(&resolved.config);
    print_simulated_request(&resolved.config);

    Ok(())
}

/// Build the loader from the CLI overrides, falling back to the conventional paths
fn build_loader(cli: &Cli) -> Result<ConfigLoader> {
    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => ConfigLoader::default_config_path()?,
    };

    let fallback_path = cli
        .fallback
        .clone()
        .unwrap_or_else(ConfigLoader::default_fallback_path);

    Ok(ConfigLoader::new(config_path, fallback_path))
}

fn print_missing_warning(config_path: &Path, artifact: Option<&Path>) {
    println!();
    println!(
        "{} {}",
        "⚠".yellow().bold(),
        "The configuration file is MISSING.".yellow().bold()
    );
    println!(
        "  Full path: {}",
        config_path.display().to_string().cyan()
    );
    println!("  Continuing with the built-in default configuration.");

    match artifact {
        Some(path) => println!(
            "  Defaults recorded to {} for inspection.",
            path.display().to_string().cyan()
        ),
        None => println!("  {}", "The fallback copy could not be written.".dimmed()),
    }
}

fn print_report(config: &AppConfig) {
    println!();
    println!(
        "{} {}",
        "✓".green(),
        "Configuration loaded successfully".green().bold()
    );
    println!("  Config values:");

    if config.is_empty() {
        println!("  {}", "(no configuration values)".dimmed());
        return;
    }

    for (key, value) in config.iter() {
        println!(
            "  {:<width$} : {}",
            key,
            format_value(value),
            width = KEY_COLUMN_WIDTH
        );
    }
}

fn print_simulated_request(config: &AppConfig) {
    let endpoint = field_display(config, "api_endpoint");
    let api_key = field_display(config, "api_key");

    println!();
    println!("  Simulated request (no network I/O is performed):");
    println!(
        "  GET {} (Authorization: Bearer {})",
        endpoint.cyan(),
        api_key.cyan()
    );
    println!(
        "  {}",
        "In a real run, the application would issue this request.".dimmed()
    );
}

/// Value of `key` rendered for the request line, `(not set)` when absent
fn field_display(config: &AppConfig, key: &str) -> String {
    config
        .get(key)
        .map(format_value)
        .unwrap_or_else(|| "(not set)".to_string())
}

/// Render a configuration value for display: strings bare, everything else compact JSON
fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
