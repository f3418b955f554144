//! Configuration module
//!
//! Reads `~/.config/espi-store/config.toml` (or the file named by
//! `ESPI_CONFIG`). Every section is optional; a missing file yields the
//! defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::infrastructure::DatabaseConfig;
use crate::shared::errors::InfraError;

/// `[database]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSection {
    pub url: String,
    pub auto_migrate: bool,
}

impl Default for DatabaseSection {
    fn default() -> Self {
        let defaults = DatabaseConfig::default();
        Self {
            url: defaults.url,
            auto_migrate: defaults.auto_migrate,
        }
    }
}

/// `[logging]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Filter used when `RUST_LOG` is not set
    pub level: String,
    /// Emit JSON lines instead of human readable output
    pub json: bool,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub database: DatabaseSection,
    pub logging: LoggingSection,
}

impl AppConfig {
    /// Load from `path`. A missing file is not an error.
    pub fn load(path: &Path) -> Result<Self, InfraError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .map_err(|e| InfraError::Config(format!("{}: {e}", path.display())))?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self, InfraError> {
        toml::from_str(contents).map_err(|e| InfraError::Config(e.to_string()))
    }

    /// Apply `DATABASE_URL` if set.
    pub fn with_env_overrides(self) -> Self {
        self.with_database_url(std::env::var("DATABASE_URL").ok())
    }

    fn with_database_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            self.database.url = url;
        }
        self
    }

    pub fn database_config(&self) -> DatabaseConfig {
        DatabaseConfig {
            url: self.database.url.clone(),
            auto_migrate: self.database.auto_migrate,
        }
    }
}

/// `$ESPI_CONFIG`, else `~/.config/espi-store/config.toml`.
pub fn default_config_path() -> PathBuf {
    if let Ok(path) = std::env::var("ESPI_CONFIG") {
        return PathBuf::from(path);
    }
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("espi-store")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let cfg = AppConfig::parse("").unwrap();
        assert_eq!(cfg, AppConfig::default());
        assert_eq!(cfg.database.url, "sqlite://./espi.db?mode=rwc");
        assert!(cfg.database.auto_migrate);
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let cfg = AppConfig::parse(
            r#"
            [database]
            url = "postgres://espi@localhost/espi"

            [logging]
            json = true
            "#,
        )
        .unwrap();
        assert_eq!(cfg.database.url, "postgres://espi@localhost/espi");
        assert!(cfg.database.auto_migrate);
        assert!(cfg.logging.json);
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        let err = AppConfig::parse("[database\nurl = 1").unwrap_err();
        assert!(matches!(err, InfraError::Config(_)));
    }

    #[test]
    fn missing_file_gives_defaults() {
        let cfg = AppConfig::load(Path::new("/nonexistent/espi-store/config.toml")).unwrap();
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn database_url_override() {
        let cfg = AppConfig::default().with_database_url(Some("sqlite::memory:".into()));
        assert_eq!(cfg.database_config().url, "sqlite::memory:");
        let cfg = AppConfig::default().with_database_url(Some("  ".into()));
        assert_eq!(cfg.database.url, "sqlite://./espi.db?mode=rwc");
    }

    #[test]
    fn default_path_ends_in_app_dir() {
        if std::env::var("ESPI_CONFIG").is_err() {
            assert!(default_config_path().ends_with("espi-store/config.toml"));
        }
    }
}
