//! Configuration loading for the staff directory.
//!
//! This module loads the data file location and seeding policy from a YAML
//! file.
//!
//! # Example
//!
//! ```no_run
//! use staff_directory::config::ConfigLoader;
//! use staff_directory::directory::Directory;
//!
//! let config = ConfigLoader::load("./staff.yaml")?.into_config();
//! let directory = Directory::from_config(&config)?;
//! println!("{} employees", directory.len());
//! # Ok::<(), staff_directory::error::DirectoryError>(())
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::DirectoryConfig;
