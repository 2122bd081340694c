//! Configuration types and loading for Settle
//!
//! This module owns the configuration mapping itself and the loader
//! that resolves it from disk with a safe built-in fallback.

pub mod app_config;
pub mod loader;

// Re-export commonly used items
pub use app_config::AppConfig;
pub use loader::{ConfigLoader, ConfigSource, ResolvedConfig};
