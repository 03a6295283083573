//! Configuration validation rules.
//!
//! This module provides validation logic for `AppConfig` values
//! after they have been loaded from environment, files, or defaults.

use crate::config::AppConfig;
use thiserror::Error;

/// Configuration validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    LoadFailed(String),

    #[error("invalid configuration: {field} - {reason}")]
    Invalid { field: String, reason: String },
}

impl AppConfig {
    /// Validate configuration values after loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if:
    /// - `file_path` or `db_path` is empty
    /// - `file_path` names a directory
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.file_path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid { field: "file_path".into(), reason: "must not be empty".into() });
        }
        if self.file_path.file_name().is_none() {
            return Err(ConfigError::Invalid { field: "file_path".into(), reason: "must name a file".into() });
        }

        if self.db_path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid { field: "db_path".into(), reason: "must not be empty".into() });
        }

        if self.file_path == self.db_path {
            tracing::warn!(
                path = %self.file_path.display(),
                "file_path and db_path point at the same resource; only one backend may use it"
            );
        }

        Ok(())
    }
}
