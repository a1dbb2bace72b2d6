//! AES-GCM seal/open
//!
//! Single-call helpers that build a fresh [`Sealer`] for each call. Use a
//! [`Sealer`] directly when the same key seals many messages.
//!
//! The `_text` variants exchange keys and envelopes as standard base64 so
//! they can travel through text-only channels.

use zeroize::Zeroizing;

use crate::error::{SealError, SealResult};

use super::envelope;
use super::key::Key;
use super::sealer::Sealer;

/// Seal `plaintext` under `key` into `nonce || ciphertext || tag`
pub fn seal(plaintext: &[u8], key: impl AsRef<[u8]>) -> SealResult<Vec<u8>> {
    Sealer::new(key)?.seal(plaintext)
}

/// Authenticate and decrypt an envelope produced by [`seal`]
pub fn open(sealed: &[u8], key: impl AsRef<[u8]>) -> SealResult<Vec<u8>> {
    Sealer::new(key)?.open(sealed)
}

/// Seal `plaintext` under a base64 key, returning a base64 envelope
pub fn seal_text(plaintext: impl AsRef<[u8]>, key: &str) -> SealResult<String> {
    let key = Key::from_base64(key)?;
    let sealed = seal(plaintext.as_ref(), &key)?;
    Ok(envelope::encode_text(&sealed))
}

/// Open a base64 envelope under a base64 key
///
/// Both inputs are decoded before any cryptographic work starts.
pub fn open_text(sealed: &str, key: &str) -> SealResult<Vec<u8>> {
    let key = decode_key(key)?;
    let sealed = envelope::decode_text(sealed)?;
    open(&sealed, key.as_slice())
}

/// Open a base64 envelope and decode the plaintext as UTF-8
pub fn open_text_string(sealed: &str, key: &str) -> SealResult<String> {
    let plaintext = open_text(sealed, key)?;
    String::from_utf8(plaintext).map_err(|e| SealError::InvalidUtf8(e.utf8_error().to_string()))
}

fn decode_key(key: &str) -> SealResult<Zeroizing<Vec<u8>>> {
    use base64::{engine::general_purpose::STANDARD, Engine};
    STANDARD
        .decode(key)
        .map(Zeroizing::new)
        .map_err(|e| SealError::InvalidEncoding(format!("key is not valid base64: {}", e)))
}
