//! EDR configuration.
//!
//! Loaded from `<data dir>/config.toml`. Every field has a default, so a
//! missing file is the default configuration. The data dir is `~/.edr`
//! unless `EDR_HOME` points elsewhere.

use std::path::{Path, PathBuf};
use std::time::Duration;
use std::{env, fs, io};

use serde::Deserialize;

/// Errors reading the configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid config at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// EDR configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    /// How long the loading screen stays up.
    pub loading_delay_ms: u64,

    /// Simulated payment processing time.
    pub payment_delay_ms: u64,

    /// Pause on the payment confirmation before showing tickets.
    pub redirect_delay_ms: u64,

    /// Simulated baggage label scan time.
    pub scan_delay_ms: u64,

    /// Default `tracing` filter when `EDR_LOG` is unset.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            loading_delay_ms: 3000,
            payment_delay_ms: 2000,
            redirect_delay_ms: 2000,
            scan_delay_ms: 2000,
            log_filter: "info".to_string(),
        }
    }
}

impl Config {
    /// Load config from `<data dir>/config.toml`, or defaults when absent.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load config from an explicit path. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The config file path: `<data dir>/config.toml`.
    pub fn path() -> Option<PathBuf> {
        data_dir().map(|d| d.join("config.toml"))
    }

    pub fn loading_delay(&self) -> Duration {
        Duration::from_millis(self.loading_delay_ms)
    }

    pub fn payment_delay(&self) -> Duration {
        Duration::from_millis(self.payment_delay_ms)
    }

    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }

    pub fn scan_delay(&self) -> Duration {
        Duration::from_millis(self.scan_delay_ms)
    }
}

/// Root of everything EDR writes: `$EDR_HOME`, else `~/.edr`.
pub fn data_dir() -> Option<PathBuf> {
    if let Ok(home) = env::var("EDR_HOME")
        && !home.is_empty()
    {
        return Some(PathBuf::from(home));
    }
    dirs::home_dir().map(|h| h.join(".edr"))
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.loading_delay(), Duration::from_secs(3));
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "payment-delay-ms = 10\nlog-filter = \"edr=debug\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.payment_delay(), Duration::from_millis(10));
        assert_eq!(config.log_filter, "edr=debug");
        assert_eq!(config.scan_delay_ms, 2000);
    }

    #[test]
    fn invalid_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "payment-delay-ms = \"soon\"\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "payment-delay = 10\n").unwrap();

        assert!(Config::load_from(&path).is_err());
    }
}
