//! Host configuration loaded from a TOML file.
//!
//! ```toml
//! [pipeline]
//! max_concurrent_requests = 3
//! request_delay_ms = [1500, 3500]
//! backends = ["duckduckgo", "bing", "google"]
//!
//! [export]
//! dir = "/home/me/leads"
//!
//! [logging]
//! log_dir = "/home/me/.local/share/transferlead/logs"
//! filter = "transferlead=debug,lead_search=info"
//! ```
//!
//! Every section and field is optional; missing values take their
//! defaults.

use std::path::{Path, PathBuf};

use lead_search::PipelineConfig;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Proxy variables consulted, in order, when no proxy is configured.
pub const PROXY_ENV_VARS: &[&str] = &["TRANSFERLEAD_PROXY", "HTTPS_PROXY", "HTTP_PROXY"];

/// Full host configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Search and crawl behaviour.
    pub pipeline: PipelineConfig,
    pub export: ExportConfig,
    pub logging: LoggingConfig,
}

/// Where exported lead files are written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory for `leads_<id>.csv` / `leads_<id>.json`. Created on demand.
    pub dir: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            dir: default_export_dir(),
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Adds a daily-rolling log file in this directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<PathBuf>,
    /// `EnvFilter` directives. `RUST_LOG` takes precedence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
    }

    /// Save configuration to a TOML file, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or the config cannot be serialized.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).map_err(|e| AppError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load the config for a run.
    ///
    /// An explicit `path` must exist. Without one, the default path is
    /// used if present, otherwise defaults. Proxy environment variables
    /// are applied and the pipeline section is validated.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be loaded or fails validation.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = Self::default_config_path();
                if default_path.is_file() {
                    Self::from_file(&default_path)?
                } else {
                    Self::default()
                }
            }
        };
        config.apply_proxy_env(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Fill `pipeline.proxy` from the first non-empty proxy variable.
    ///
    /// A proxy already set in the file wins.
    pub fn apply_proxy_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if self.pipeline.proxy.is_some() {
            return;
        }
        self.pipeline.proxy = PROXY_ENV_VARS
            .iter()
            .filter_map(|key| lookup(key))
            .map(|value| value.trim().to_owned())
            .find(|value| !value.is_empty());
    }

    /// # Errors
    ///
    /// Returns [`AppError::Lead`] if the pipeline section is invalid.
    pub fn validate(&self) -> Result<()> {
        self.pipeline.validate()?;
        Ok(())
    }

    /// Returns the default config file path: `<config dir>/transferlead/config.toml`.
    ///
    /// `TRANSFERLEAD_CONFIG_DIR` overrides the directory.
    pub fn default_config_path() -> PathBuf {
        if let Some(dir) = std::env::var_os("TRANSFERLEAD_CONFIG_DIR") {
            return PathBuf::from(dir).join("config.toml");
        }
        dirs::config_dir()
            .map(|d| d.join("transferlead"))
            .unwrap_or_else(|| PathBuf::from("/tmp/transferlead-config"))
            .join("config.toml")
    }
}

/// `<data dir>/transferlead/exports`, or `./exports` when there is no data dir.
pub fn default_export_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("transferlead").join("exports"))
        .unwrap_or_else(|| PathBuf::from("exports"))
}
