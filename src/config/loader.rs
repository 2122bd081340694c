//! Configuration loading with a built-in fallback
//!
//! Reads the primary JSON document from an explicit path. A missing
//! file is recoverable: the loader returns the built-in defaults and
//! records them in a fallback artifact for later inspection. Every
//! other failure (malformed JSON, permission errors, invalid UTF-8)
//! propagates to the caller.

use crate::config::AppConfig;
use crate::error::{Result, SettleError};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File name of the primary configuration document, expected next to the executable
pub const CONFIG_FILE_NAME: &str = "app_settings.json";

/// File name of the fallback artifact, resolved against the working directory
pub const FALLBACK_FILE_NAME: &str = "default_config_fallback.json";

/// Where a resolved configuration came from
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    /// Parsed from the configuration file at this path
    File(PathBuf),
    /// Built-in defaults; `artifact` is the fallback copy, if the write succeeded
    BuiltinDefaults { artifact: Option<PathBuf> },
}

/// A resolved configuration together with its provenance
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub config: AppConfig,
    pub source: ConfigSource,
}

impl ResolvedConfig {
    /// True when the run fell back to the built-in defaults
    pub fn used_defaults(&self) -> bool {
        matches!(self.source, ConfigSource::BuiltinDefaults { .. })
    }
}

/// Loads the application configuration from disk
///
/// Both paths are explicit so callers (and tests) never depend on
/// ambient process state; the associated helpers compute the
/// conventional defaults.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_path: PathBuf,
    fallback_path: PathBuf,
}

impl ConfigLoader {
    /// Create a loader for the given primary document and fallback artifact paths
    pub fn new(config_path: impl Into<PathBuf>, fallback_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
            fallback_path: fallback_path.into(),
        }
    }

    /// Path of the primary configuration document
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Path the fallback artifact is written to
    pub fn fallback_path(&self) -> &Path {
        &self.fallback_path
    }

    /// Default location of the primary document: `app_settings.json`
    /// in the directory containing the running executable
    pub fn default_config_path() -> Result<PathBuf> {
        let exe = std::env::current_exe()?;
        let dir = exe.parent().ok_or(SettleError::ExeDirectoryNotFound)?;
        Ok(dir.join(CONFIG_FILE_NAME))
    }

    /// Default location of the fallback artifact, relative to the working directory
    pub fn default_fallback_path() -> PathBuf {
        PathBuf::from(FALLBACK_FILE_NAME)
    }

    /// Read and parse the primary document, classifying a missing file
    /// separately from every other failure
    pub fn read(&self) -> Result<AppConfig> {
        let content = match std::fs::read_to_string(&self.config_path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(SettleError::config_not_found(&self.config_path));
            },
            Err(e) => return Err(e.into()),
        };

        let config: AppConfig = serde_json::from_str(&content)
            .map_err(|e| SettleError::config_parse_failed(&self.config_path, e.to_string()))?;

        Ok(config)
    }

    /// Resolve the configuration: the parsed file when present, the
    /// built-in defaults otherwise
    ///
    /// On the fallback path the defaults are also written to the
    /// fallback artifact. That write is best-effort: a failure is
    /// logged and the run continues with the in-memory defaults.
    pub fn load_or_default(&self) -> Result<ResolvedConfig> {
        match self.read() {
            Ok(config) => {
                debug!("loaded configuration from {}", self.config_path.display());
                Ok(ResolvedConfig {
                    config,
                    source: ConfigSource::File(self.config_path.clone()),
                })
            },
            Err(err) if err.is_not_found() => {
                warn!(
                    "configuration file missing at {}, using built-in defaults",
                    self.config_path.display()
                );

                let config = AppConfig::default();
                let artifact = match self.write_fallback(&config) {
                    Ok(()) => Some(self.fallback_path.clone()),
                    Err(e) => {
                        warn!(
                            "could not write fallback artifact to {}: {}",
                            self.fallback_path.display(),
                            e
                        );
                        None
                    },
                };

                Ok(ResolvedConfig {
                    config,
                    source: ConfigSource::BuiltinDefaults { artifact },
                })
            },
            Err(err) => Err(err),
        }
    }

    /// Write the fallback artifact recording which defaults were used
    fn write_fallback(&self, config: &AppConfig) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = self.fallback_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let content = config.to_json_pretty()?;
        std::fs::write(&self.fallback_path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn loader_in(dir: &TempDir) -> ConfigLoader {
        ConfigLoader::new(
            dir.path().join(CONFIG_FILE_NAME),
            dir.path().join(FALLBACK_FILE_NAME),
        )
    }

    #[test]
    fn test_read_classifies_missing_file() {
        let temp = TempDir::new().unwrap();
        let loader = loader_in(&temp);

        let err = loader.read().unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains(CONFIG_FILE_NAME));
    }

    #[test]
    fn test_read_classifies_malformed_json() {
        let temp = TempDir::new().unwrap();
        let loader = loader_in(&temp);
        std::fs::write(loader.config_path(), "not json").unwrap();

        let err = loader.read().unwrap_err();
        assert!(!err.is_not_found());
        assert!(matches!(err, SettleError::ConfigParseFailed { .. }));
    }

    #[test]
    fn test_read_rejects_non_mapping_top_level() {
        let temp = TempDir::new().unwrap();
        let loader = loader_in(&temp);
        std::fs::write(loader.config_path(), "[1, 2, 3]").unwrap();

        let err = loader.read().unwrap_err();
        assert!(matches!(err, SettleError::ConfigParseFailed { .. }));
    }

    #[test]
    fn test_default_config_path_is_exe_adjacent() {
        let path = ConfigLoader::default_config_path().unwrap();

        assert_eq!(path.file_name().unwrap(), CONFIG_FILE_NAME);
        let exe = std::env::current_exe().unwrap();
        assert_eq!(path.parent(), exe.parent());
    }

    #[test]
    fn test_default_fallback_path_is_relative() {
        let path = ConfigLoader::default_fallback_path();

        assert!(path.is_relative());
        assert_eq!(path, PathBuf::from(FALLBACK_FILE_NAME));
    }
}
