//! Path management for findash
//!
//! Resolves the locations of the two collection snapshots. Each collection
//! has a read-only baseline file at the data directory root (shipped seed
//! data) and a higher-precedence scratch file under `scratch/` that receives
//! all writes.
//!
//! ## Path Resolution Order
//!
//! 1. `FINDASH_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/findash` or `~/.config/findash`
//! 3. Windows: `%APPDATA%\findash`

use std::path::PathBuf;

use crate::error::FindashError;

/// Manages all paths used by findash
#[derive(Debug, Clone)]
pub struct StorePaths {
    /// Base directory for all findash data
    base_dir: PathBuf,
}

impl StorePaths {
    /// Create a new StorePaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, FindashError> {
        let base_dir = if let Ok(custom) = std::env::var("FINDASH_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create StorePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/findash/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the scratch directory, where all writes land
    pub fn scratch_dir(&self) -> PathBuf {
        self.base_dir.join("scratch")
    }

    /// Get the path to the baseline users.csv
    pub fn users_baseline(&self) -> PathBuf {
        self.base_dir.join("users.csv")
    }

    /// Get the path to the scratch users.csv
    pub fn users_scratch(&self) -> PathBuf {
        self.scratch_dir().join("users.csv")
    }

    /// Get the path to the baseline transactions.csv
    pub fn transactions_baseline(&self) -> PathBuf {
        self.base_dir.join("transactions.csv")
    }

    /// Get the path to the scratch transactions.csv
    pub fn transactions_scratch(&self) -> PathBuf {
        self.scratch_dir().join("transactions.csv")
    }

    /// Ensure the base and scratch directories exist
    pub fn ensure_directories(&self) -> Result<(), FindashError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FindashError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.scratch_dir())
            .map_err(|e| FindashError::Io(format!("Failed to create scratch directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, FindashError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
    Ok(config_base.join("findash"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, FindashError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| FindashError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("findash"))
}
