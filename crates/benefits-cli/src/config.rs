//! Dashboard configuration
//!
//! Sources, later ones winning: `config/default`, `config/local`, the file
//! given with `--config`, then `BENEFITS_*` environment variables
//! (`BENEFITS_FIXTURES_PATH`, `BENEFITS_LOGGING__LEVEL`, ...).

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Fixture file replacing the built-in benefit set
    pub fixtures_path: Option<PathBuf>,

    /// Logging configuration
    pub logging: LoggingConfig,

    /// Terminal UI configuration
    pub ui: UiConfig,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset
    pub level: String,

    /// `pretty` or `json`
    pub format: String,

    /// Append log output to this file instead of stderr
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
        }
    }
}

/// Terminal UI settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Input poll interval in milliseconds
    pub tick_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { tick_ms: default_tick_ms() }
    }
}

impl UiConfig {
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_tick_ms() -> u64 {
    150
}

impl DashboardConfig {
    /// Load configuration from config files and the environment
    pub fn load(config_path: Option<&Path>) -> anyhow::Result<Self> {
        // Load .env file if present
        let _ = dotenvy::dotenv();

        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false));

        if let Some(path) = config_path {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("BENEFITS")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().context("reading configuration")?;
        let loaded: DashboardConfig = config
            .try_deserialize()
            .context("invalid configuration")?;
        tracing::debug!(?loaded, "configuration loaded");
        Ok(loaded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("benefits-cli-{}-{}", std::process::id(), name));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn defaults() {
        let config = DashboardConfig::default();
        assert!(config.fixtures_path.is_none());
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
        assert_eq!(config.ui.tick(), Duration::from_millis(150));
    }

    #[test]
    fn explicit_toml_file_overrides_defaults() {
        let path = temp_file(
            "override.toml",
            "fixtures_path = \"plans/2026.json\"\n\n[logging]\nformat = \"json\"\n\n[ui]\ntick_ms = 40\n",
        );
        let config = DashboardConfig::load(Some(&path)).unwrap();
        assert_eq!(config.fixtures_path, Some(PathBuf::from("plans/2026.json")));
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.ui.tick_ms, 40);
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let path = std::env::temp_dir().join("benefits-cli-does-not-exist.toml");
        assert!(DashboardConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn zero_tick_is_floored() {
        let ui = UiConfig { tick_ms: 0 };
        assert_eq!(ui.tick(), Duration::from_millis(1));
    }
}
