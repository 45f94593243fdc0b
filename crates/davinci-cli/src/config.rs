//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Config file (`--config <FILE>`, else the default location)
//! 3. Built-in defaults (always present)

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{CliError, CliResult};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for new sub-themes.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
    /// Starterkit settings.
    pub starterkits: StarterkitsConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub destination: Option<PathBuf>,
    pub description: Option<String>,
    pub starterkit: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StarterkitsConfig {
    /// Where installed starterkits live.  Overrides the env var and the
    /// install-location lookup.
    pub root: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration.
    ///
    /// An explicitly passed `--config` file must exist and parse; the
    /// default location is optional and silently skipped when absent.
    pub fn load(config_file: Option<&PathBuf>) -> CliResult<Self> {
        match config_file {
            Some(path) => Self::from_file(path),
            None => {
                let path = Self::config_path();
                if path.is_file() {
                    Self::from_file(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &PathBuf) -> CliResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| CliError::ConfigError {
            message: format!("cannot read '{}'", path.display()),
            source: Some(Box::new(e)),
        })?;
        toml::from_str(&raw).map_err(|e| CliError::ConfigError {
            message: format!("cannot parse '{}'", path.display()),
            source: Some(Box::new(e)),
        })
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.davinci.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("org", "da-vinci", "davinci")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".davinci.toml"))
    }

    /// The starterkits root directory.
    ///
    /// Priority: config `starterkits.root` > `DAVINCI_STARTERKITS` env var >
    /// `starterkits/` beside the executable > `./starterkits`.
    pub fn starterkit_root(&self) -> PathBuf {
        if let Some(root) = &self.starterkits.root {
            return root.clone();
        }
        if let Ok(env_root) = std::env::var("DAVINCI_STARTERKITS") {
            if !env_root.is_empty() {
                return PathBuf::from(env_root);
            }
        }
        if let Ok(exe) = std::env::current_exe() {
            if let Some(dir) = exe.parent() {
                let beside = dir.join("starterkits");
                if beside.is_dir() {
                    return beside;
                }
            }
        }
        PathBuf::from("./starterkits")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_empty() {
        let cfg = AppConfig::default();
        assert!(cfg.defaults.destination.is_none());
        assert!(cfg.defaults.starterkit.is_none());
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn load_without_file_returns_defaults() {
        // The default config location almost certainly does not exist in the
        // test environment; absent files are not an error.
        let cfg = AppConfig::load(None);
        assert!(cfg.is_ok());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let path = PathBuf::from("/definitely/not/here/davinci.toml");
        assert!(matches!(
            AppConfig::load(Some(&path)),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn partial_file_parses() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("davinci.toml");
        std::fs::write(&path, "[defaults]\nstarterkit = \"minimal\"\n").unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.defaults.starterkit.as_deref(), Some("minimal"));
        assert!(cfg.defaults.destination.is_none());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("davinci.toml");
        std::fs::write(&path, "not = [valid").unwrap();

        assert!(matches!(
            AppConfig::load(Some(&path)),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn config_root_wins_over_fallbacks() {
        let cfg = AppConfig {
            starterkits: StarterkitsConfig {
                root: Some(PathBuf::from("/opt/kits")),
            },
            ..AppConfig::default()
        };
        assert_eq!(cfg.starterkit_root(), PathBuf::from("/opt/kits"));
    }

    #[test]
    fn config_path_is_non_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
