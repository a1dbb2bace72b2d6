//! User settings for sealbox
//!
//! Holds CLI defaults only. Keys are never written to the settings file.

use serde::{Deserialize, Serialize};

use super::paths::SealboxPaths;
use crate::crypto::KeySize;
use crate::error::SealError;

/// User settings for sealbox
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Key size used by `keygen` when `--size` is not given
    #[serde(default)]
    pub default_key_size: KeySize,

    /// Exchange envelopes as base64 text unless `--binary` is passed
    #[serde(default = "default_text_envelopes")]
    pub text_envelopes: bool,

    /// Log filter directive used when `SEALBOX_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_text_envelopes() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_key_size: KeySize::default(),
            text_envelopes: default_text_envelopes(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &SealboxPaths) -> Result<Self, SealError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)?;
            let settings: Settings = serde_json::from_str(&contents)?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SealboxPaths) -> Result<(), SealError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(paths.settings_file(), contents)?;

        Ok(())
    }
}
