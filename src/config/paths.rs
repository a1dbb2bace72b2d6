//! Path management for sealbox
//!
//! ## Path Resolution Order
//!
//! 1. `SEALBOX_HOME` environment variable (if set)
//! 2. The platform configuration directory, via `directories`
//!    (`~/.config/sealbox` on Linux, `%APPDATA%\sealbox\config` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::SealError;

/// Environment variable that overrides the base directory
pub const HOME_ENV: &str = "SEALBOX_HOME";

/// Manages all paths used by sealbox
#[derive(Debug, Clone)]
pub struct SealboxPaths {
    base_dir: PathBuf,
}

impl SealboxPaths {
    /// Create a new SealboxPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, SealError> {
        let base_dir = match std::env::var_os(HOME_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create SealboxPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), SealError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SealError::Io(format!("Failed to create base directory: {}", e)))
    }

    /// Check if sealbox has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, SealError> {
    ProjectDirs::from("", "", "sealbox")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| SealError::Config("Could not determine a home directory".into()))
}
