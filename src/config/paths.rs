//! Path management for the travels manager
//!
//! ## Path Resolution Order
//!
//! 1. `--file <PATH>` on the command line (see `main.rs`)
//! 2. `TRAVELS_DB_FILE` environment variable (if set and not empty)
//! 3. `db.csv` in the current working directory

use std::path::{Path, PathBuf};

use crate::error::TravelError;

/// Name of the data file when nothing else is configured
pub const DEFAULT_FILE_NAME: &str = "db.csv";

/// Environment variable overriding the data file location
pub const FILE_ENV_VAR: &str = "TRAVELS_DB_FILE";

/// Manages the paths used by the travels manager
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TravelPaths {
    data_file: PathBuf,
}

impl TravelPaths {
    /// Resolve paths from the environment, falling back to `db.csv`
    pub fn new() -> Self {
        let data_file = std::env::var(FILE_ENV_VAR)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_FILE_NAME));

        Self { data_file }
    }

    /// Use an explicit data file (command line override, tests)
    ///
    /// # Errors
    ///
    /// Returns an error if the path is empty or names a directory.
    pub fn with_file(data_file: impl Into<PathBuf>) -> Result<Self, TravelError> {
        let data_file = data_file.into();

        if data_file.as_os_str().is_empty() {
            return Err(TravelError::Config("Data file path is empty".into()));
        }
        if data_file.is_dir() {
            return Err(TravelError::Config(format!(
                "Data file path is a directory: {}",
                data_file.display()
            )));
        }

        Ok(Self { data_file })
    }

    /// Get the path of the delimited data file
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }
}

impl Default for TravelPaths {
    fn default() -> Self {
        Self::new()
    }
}
