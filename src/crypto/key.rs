//! Symmetric key material
//!
//! A [`Key`] is a validated AES key of 16, 24, or 32 bytes. The bytes are
//! zeroed when the key is dropped and never appear in `Debug` output.

use std::fmt;

use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::error::{SealError, SealResult};

use super::random::fill_random;
use super::secure_memory::SecretString;

/// AES key size, selecting the cipher variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum KeySize {
    /// 16-byte key, AES-128-GCM
    Aes128,
    /// 24-byte key, AES-192-GCM
    Aes192,
    /// 32-byte key, AES-256-GCM (default)
    #[default]
    Aes256,
}

impl KeySize {
    /// Resolve the key size for a key of `len` bytes
    pub fn from_len(len: usize) -> SealResult<Self> {
        match len {
            16 => Ok(Self::Aes128),
            24 => Ok(Self::Aes192),
            32 => Ok(Self::Aes256),
            other => Err(SealError::InvalidKeyLength(other)),
        }
    }

    /// Key length in bytes
    pub const fn byte_len(self) -> usize {
        match self {
            Self::Aes128 => 16,
            Self::Aes192 => 24,
            Self::Aes256 => 32,
        }
    }

    /// Key length in bits
    pub const fn bits(self) -> usize {
        self.byte_len() * 8
    }
}

impl fmt::Display for KeySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AES-{}-GCM", self.bits())
    }
}

/// A symmetric AES key
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Key {
    bytes: Vec<u8>,
    #[zeroize(skip)]
    size: KeySize,
}

impl Key {
    /// Wrap raw key bytes, validating the length
    pub fn new(bytes: impl Into<Vec<u8>>) -> SealResult<Self> {
        let mut bytes = bytes.into();
        match KeySize::from_len(bytes.len()) {
            Ok(size) => Ok(Self { bytes, size }),
            Err(e) => {
                bytes.zeroize();
                Err(e)
            }
        }
    }

    /// Generate a fresh random key
    pub fn generate(size: KeySize) -> SealResult<Self> {
        let mut bytes = vec![0u8; size.byte_len()];
        fill_random(&mut bytes)?;
        Ok(Self { bytes, size })
    }

    /// Decode a key from standard base64 text
    pub fn from_base64(text: &str) -> SealResult<Self> {
        let bytes = Zeroizing::new(STANDARD.decode(text)?);
        Self::new(bytes.as_slice())
    }

    /// Encode the key as standard base64 text
    pub fn to_base64(&self) -> SecretString {
        SecretString::new(STANDARD.encode(&self.bytes))
    }

    /// Get the key bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Get the key size
    pub fn size(&self) -> KeySize {
        self.size
    }
}

impl AsRef<[u8]> for Key {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

// Don't print the key bytes in Debug output
impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Key").field("size", &self.size).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_size_from_len() {
        assert_eq!(KeySize::from_len(16).unwrap(), KeySize::Aes128);
        assert_eq!(KeySize::from_len(24).unwrap(), KeySize::Aes192);
        assert_eq!(KeySize::from_len(32).unwrap(), KeySize::Aes256);
        for bad in [0, 15, 17, 31, 33, 64] {
            assert!(matches!(
                KeySize::from_len(bad),
                Err(SealError::InvalidKeyLength(n)) if n == bad
            ));
        }
    }

    #[test]
    fn test_key_size_display() {
        assert_eq!(KeySize::Aes128.to_string(), "AES-128-GCM");
        assert_eq!(KeySize::Aes256.to_string(), "AES-256-GCM");
        assert_eq!(KeySize::Aes192.bits(), 192);
    }

    #[test]
    fn test_key_size_serde() {
        let json = serde_json::to_string(&KeySize::Aes192).unwrap();
        assert_eq!(json, "\"aes192\"");
        let parsed: KeySize = serde_json::from_str("\"aes128\"").unwrap();
        assert_eq!(parsed, KeySize::Aes128);
    }

    #[test]
    fn test_key_new_validates_length() {
        assert!(Key::new(vec![0u8; 32]).is_ok());
        assert!(matches!(
            Key::new(vec![0u8; 15]),
            Err(SealError::InvalidKeyLength(15))
        ));
    }

    #[test]
    fn test_key_base64_round_trip() {
        let key = Key::generate(KeySize::Aes192).unwrap();
        let text = key.to_base64();
        let parsed = Key::from_base64(text.as_str()).unwrap();
        assert_eq!(parsed.as_bytes(), key.as_bytes());
        assert_eq!(parsed.size(), KeySize::Aes192);
    }

    #[test]
    fn test_key_from_bad_base64() {
        assert!(matches!(
            Key::from_base64("not base64!"),
            Err(SealError::InvalidEncoding(_))
        ));
    }

    #[test]
    fn test_key_debug_redacted() {
        let key = Key::new(vec![0xAB; 16]).unwrap();
        let debug = format!("{:?}", key);
        assert!(debug.contains("Aes128"));
        assert!(!debug.contains("171"));
        assert!(!debug.to_lowercase().contains("ab"));
    }
}
