//! Key resolution for CLI commands
//!
//! Keys are read from `--key-file`, `--key`, or `SEALBOX_KEY`, in that
//! order. They are decoded from base64 and never persisted.

use std::path::PathBuf;

use clap::Args;

use crate::crypto::{Key, SecretString};
use crate::error::{SealError, SealResult};

/// Environment variable holding a base64 key
pub const KEY_ENV: &str = "SEALBOX_KEY";

/// Where to find the key for a seal/open command
#[derive(Args, Clone, Default)]
pub struct KeyArgs {
    /// Base64 key (prefer SEALBOX_KEY or --key-file to keep it out of shell history)
    #[arg(short, long, env = "SEALBOX_KEY", hide_env_values = true)]
    pub key: Option<String>,

    /// File containing a base64 key
    #[arg(long, value_name = "PATH")]
    pub key_file: Option<PathBuf>,
}

impl KeyArgs {
    /// Load and validate the key
    pub fn resolve(&self) -> SealResult<Key> {
        let text = match (&self.key_file, &self.key) {
            (Some(path), _) => std::fs::read_to_string(path)
                .map(SecretString::new)
                .map_err(|e| {
                    SealError::Io(format!("Failed to read key file {}: {}", path.display(), e))
                })?,
            (None, Some(key)) => SecretString::new(key.as_str()),
            (None, None) => {
                return Err(SealError::Config(format!(
                    "No key given: pass --key, --key-file, or set {}",
                    KEY_ENV
                )))
            }
        };

        Key::from_base64(text.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::KeySize;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_inline_key() {
        let key = Key::generate(KeySize::Aes128).unwrap();
        let args = KeyArgs {
            key: Some(key.to_base64().as_str().to_string()),
            key_file: None,
        };
        assert_eq!(args.resolve().unwrap().as_bytes(), key.as_bytes());
    }

    #[test]
    fn test_key_file_wins_and_is_trimmed() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("key.b64");
        let key = Key::generate(KeySize::Aes256).unwrap();
        std::fs::write(&path, format!("{}\n", key.to_base64().as_str())).unwrap();

        let args = KeyArgs {
            key: Some("ignored".into()),
            key_file: Some(path),
        };
        assert_eq!(args.resolve().unwrap().as_bytes(), key.as_bytes());
    }

    #[test]
    fn test_missing_key() {
        assert!(matches!(
            KeyArgs::default().resolve(),
            Err(SealError::Config(_))
        ));
    }

    #[test]
    fn test_bad_key_length() {
        let args = KeyArgs {
            key: Some("AAAA".into()),
            key_file: None,
        };
        assert!(matches!(
            args.resolve(),
            Err(SealError::InvalidKeyLength(3))
        ));
    }
}
