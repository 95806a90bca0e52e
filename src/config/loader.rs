//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading directory
//! settings from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{DirectoryError, DirectoryResult};

use super::types::DirectoryConfig;

/// Loads directory configuration from YAML.
///
/// # Example
///
/// ```no_run
/// use staff_directory::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./staff.yaml").unwrap();
/// println!("Data file: {}", loader.config().data_file.display());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: DirectoryConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing or unreadable (`ConfigNotFound`)
    /// - The file contains invalid YAML or wrongly typed fields (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> DirectoryResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| DirectoryError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml(&content).map_err(|message| DirectoryError::ConfigParseError {
            path: path_str,
            message,
        })
    }

    /// Builds a loader from YAML text.
    fn from_yaml(content: &str) -> Result<Self, String> {
        // An empty document means "all defaults".
        if content.trim().is_empty() {
            return Ok(Self {
                config: DirectoryConfig::default(),
            });
        }

        serde_yaml::from_str(content)
            .map(|config| Self { config })
            .map_err(|e| e.to_string())
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &DirectoryConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> DirectoryConfig {
        self.config
    }
}
