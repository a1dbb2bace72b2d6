//! Reusable AES-GCM cipher handle
//!
//! A [`Sealer`] holds the key schedule for one key so that callers sealing
//! many messages under the same key do not rebuild it on every call. It is
//! immutable after construction and can be shared across threads.

use std::fmt;

use aes_gcm::aead::consts::U12;
use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::aes::Aes192;
use aes_gcm::{Aes128Gcm, Aes256Gcm, AesGcm, Nonce};
use tracing::debug;

use crate::error::{SealError, SealResult};

use super::envelope::{self, NONCE_LEN};
use super::key::KeySize;
use super::random::fill_random;

type Aes192Gcm = AesGcm<Aes192, U12>;

#[derive(Clone)]
enum Cipher {
    Aes128(Aes128Gcm),
    Aes192(Aes192Gcm),
    Aes256(Aes256Gcm),
}

impl Cipher {
    fn new(key: &[u8], size: KeySize) -> SealResult<Self> {
        let invalid = |_| SealError::InvalidKeyLength(key.len());
        Ok(match size {
            KeySize::Aes128 => Self::Aes128(Aes128Gcm::new_from_slice(key).map_err(invalid)?),
            KeySize::Aes192 => Self::Aes192(Aes192Gcm::new_from_slice(key).map_err(invalid)?),
            KeySize::Aes256 => Self::Aes256(Aes256Gcm::new_from_slice(key).map_err(invalid)?),
        })
    }

    fn encrypt(&self, nonce: &[u8], plaintext: &[u8]) -> Result<Vec<u8>, aes_gcm::Error> {
        let nonce = Nonce::<U12>::from_slice(nonce);
        match self {
            Self::Aes128(c) => c.encrypt(nonce, plaintext),
            Self::Aes192(c) => c.encrypt(nonce, plaintext),
            Self::Aes256(c) => c.encrypt(nonce, plaintext),
        }
    }

    fn decrypt(&self, nonce: &[u8], body: &[u8]) -> Result<Vec<u8>, aes_gcm::Error> {
        let nonce = Nonce::<U12>::from_slice(nonce);
        match self {
            Self::Aes128(c) => c.decrypt(nonce, body),
            Self::Aes192(c) => c.decrypt(nonce, body),
            Self::Aes256(c) => c.decrypt(nonce, body),
        }
    }
}

/// AES-GCM key schedule bound to a single key
#[derive(Clone)]
pub struct Sealer {
    cipher: Cipher,
    size: KeySize,
}

impl Sealer {
    /// Build a sealer for a 16, 24, or 32 byte key
    pub fn new(key: impl AsRef<[u8]>) -> SealResult<Self> {
        let key = key.as_ref();
        let size = KeySize::from_len(key.len())?;
        let cipher = Cipher::new(key, size)?;
        Ok(Self { cipher, size })
    }

    /// The cipher variant selected by the key
    pub fn key_size(&self) -> KeySize {
        self.size
    }

    /// Seal `plaintext` into `nonce || ciphertext || tag`
    ///
    /// A fresh random nonce is drawn for every call.
    pub fn seal(&self, plaintext: &[u8]) -> SealResult<Vec<u8>> {
        let mut nonce = [0u8; NONCE_LEN];
        fill_random(&mut nonce)?;

        let body = self
            .cipher
            .encrypt(&nonce, plaintext)
            .map_err(|_| SealError::PlaintextTooLarge(plaintext.len()))?;

        debug!(
            cipher = %self.size,
            plaintext_len = plaintext.len(),
            "sealed envelope"
        );
        Ok(envelope::join(&nonce, &body))
    }

    /// Authenticate and decrypt an envelope
    ///
    /// Nothing is returned unless the tag verifies.
    pub fn open(&self, sealed: &[u8]) -> SealResult<Vec<u8>> {
        let (nonce, body) = envelope::split(sealed)?;
        let plaintext = self
            .cipher
            .decrypt(nonce, body)
            .map_err(|_| SealError::AuthenticationFailed)?;

        debug!(
            cipher = %self.size,
            envelope_len = sealed.len(),
            "opened envelope"
        );
        Ok(plaintext)
    }
}

// Key schedules stay out of Debug output
impl fmt::Debug for Sealer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sealer").field("size", &self.size).finish()
    }
}
