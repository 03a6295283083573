//! Application configuration with layered loading.
//!
//! This module provides configuration management using figment for layered
//! configuration loading from multiple sources:
//!
//! 1. Environment variables (FEED_CACHE_*)
//! 2. TOML config file (if FEED_CACHE_CONFIG_FILE set)
//! 3. Built-in defaults

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

mod validation;

pub use validation::ConfigError;

/// Which durable store holds the feed cache.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// JSON snapshot file, replaced atomically on every save.
    #[default]
    File,
    /// Single-record SQLite database.
    Sqlite,
}

/// Application configuration with layered loading.
///
/// Loading precedence (highest wins):
/// 1. Environment variables (FEED_CACHE_*)
/// 2. TOML config file (if FEED_CACHE_CONFIG_FILE set)
/// 3. Built-in defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Store realization to use.
    ///
    /// Set via FEED_CACHE_BACKEND environment variable (`file` or `sqlite`).
    #[serde(default)]
    pub backend: StoreBackend,

    /// Path of the JSON snapshot used by the file backend.
    ///
    /// Set via FEED_CACHE_FILE_PATH environment variable.
    #[serde(default = "default_file_path")]
    pub file_path: PathBuf,

    /// Path of the SQLite database used by the sqlite backend.
    ///
    /// Set via FEED_CACHE_DB_PATH environment variable.
    #[serde(default = "default_db_path")]
    pub db_path: PathBuf,
}

fn default_file_path() -> PathBuf {
    PathBuf::from("./feed-cache.json")
}

fn default_db_path() -> PathBuf {
    PathBuf::from("./feed-cache.sqlite")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { backend: StoreBackend::default(), file_path: default_file_path(), db_path: default_db_path() }
    }
}

impl AppConfig {
    /// Path of the resource the selected backend persists to.
    pub fn store_path(&self) -> &Path {
        match self.backend {
            StoreBackend::File => &self.file_path,
            StoreBackend::Sqlite => &self.db_path,
        }
    }

    /// Load configuration from all sources with layered precedence.
    ///
    /// Priority (highest wins):
    /// 1. Environment variables prefixed with `FEED_CACHE_`
    /// 2. TOML file from `FEED_CACHE_CONFIG_FILE` (if set)
    /// 3. Built-in defaults via `Default::default()`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Configuration file cannot be read
    /// - Environment variables cannot be parsed
    /// - Validation fails after loading
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Ok(config_path) = std::env::var("FEED_CACHE_CONFIG_FILE") {
            figment = figment.merge(Toml::file(&config_path));
        }

        figment = figment.merge(
            Env::prefixed("FEED_CACHE_")
                .ignore(&["CONFIG_FILE"])
                .map(|key| key.as_str().to_lowercase().into())
                .split("__"),
        );

        let config: Self = figment.extract().map_err(|e| ConfigError::LoadFailed(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }
}
