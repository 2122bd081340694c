//! Settle - configuration resolution with a safe fallback
//!
//! Settle loads an application's configuration from a JSON document next
//! to the executable. When the document is missing it falls back to a
//! built-in default configuration and records that default in a fallback
//! artifact, so a run can always be inspected afterwards. Any other
//! failure (malformed JSON, permission errors) is fatal.
//!
//! # Core Behavior
//!
//! - **Explicit paths**: the loader is handed both the document path and
//!   the artifact path; nothing is resolved from ambient process state
//! - **Order-preserving mapping**: the configuration keeps the key order
//!   of the source document, with no schema imposed on the values
//! - **Classified errors**: a missing file is a distinct, recoverable
//!   error variant; everything else propagates unchanged
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use settle::ConfigLoader;
//!
//! let loader = ConfigLoader::new("app_settings.json", "default_config_fallback.json");
//! let resolved = loader.load_or_default()?;
//!
//! if resolved.used_defaults() {
//!     println!("configuration file was missing, using defaults");
//! }
//! for (key, value) in resolved.config.iter() {
//!     println!("{key} : {value}");
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;

// Re-export commonly used types
pub use crate::config::{AppConfig, ConfigLoader, ConfigSource, ResolvedConfig};
pub use crate::error::{Result, SettleError};

/// Current version of Settle
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
