//! Secure random byte generation
//!
//! All randomness comes from the operating system CSPRNG. A failed draw is
//! reported as [`SealError::EntropyUnavailable`] and never retried or
//! replaced by a weaker source.

use aes_gcm::aead::rand_core::RngCore;
use aes_gcm::aead::OsRng;
use base64::{engine::general_purpose::STANDARD, Engine};

use crate::error::{SealError, SealResult};

use super::key::{Key, KeySize};
use super::secure_memory::SecretString;

/// Fill `buf` with bytes from the OS entropy source
pub fn fill_random(buf: &mut [u8]) -> SealResult<()> {
    OsRng
        .try_fill_bytes(buf)
        .map_err(|e| SealError::EntropyUnavailable(e.to_string()))
}

/// Draw `length` random bytes from the OS entropy source
pub fn generate_random_bytes(length: usize) -> SealResult<Vec<u8>> {
    let mut bytes = vec![0u8; length];
    fill_random(&mut bytes)?;
    Ok(bytes)
}

/// Mint a fresh key of the given size
pub fn generate_key(size: KeySize) -> SealResult<Key> {
    Key::generate(size)
}

/// Draw `length` random bytes and return them as standard base64
///
/// Intended for minting text keys for [`seal_text`](super::seal_text). The
/// length is not checked here; an unusable length is rejected when the key
/// is first used.
pub fn generate_key_text(length: usize) -> SealResult<SecretString> {
    let bytes = zeroize::Zeroizing::new(generate_random_bytes(length)?);
    Ok(SecretString::new(STANDARD.encode(bytes.as_slice())))
}
