//! Configuration types for the staff directory.
//!
//! This module contains the strongly-typed configuration structure that is
//! deserialized from a YAML configuration file.

use std::path::PathBuf;

use serde::Deserialize;

use crate::storage::DEFAULT_DATA_FILE;

/// Settings for opening a directory.
///
/// Every field is optional in YAML; missing fields take their defaults.
///
/// ```yaml
/// data_file: /var/lib/staff/employee_data.csv
/// seed_missing_file: false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DirectoryConfig {
    /// Path of the employee data file.
    pub data_file: PathBuf,
    /// Whether to write seed records when the data file does not exist.
    pub seed_missing_file: bool,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            seed_missing_file: true,
        }
    }
}
