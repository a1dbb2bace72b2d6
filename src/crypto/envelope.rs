//! Sealed envelope framing
//!
//! Binary layout:
//!
//! ```text
//! [NONCE(12)][CIPHERTEXT(N)][TAG(16)]
//! ```
//!
//! The text form is the binary envelope encoded as standard base64 with
//! padding (RFC 4648), for config files, URLs and JSON fields.

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::error::{SealError, SealResult};

/// Size of the AES-GCM nonce in bytes (96 bits)
pub const NONCE_LEN: usize = 12;

/// Size of the AES-GCM authentication tag in bytes (128 bits)
pub const TAG_LEN: usize = 16;

/// Smallest structurally valid envelope: a nonce and a tag around empty ciphertext
pub const MIN_ENVELOPE_LEN: usize = NONCE_LEN + TAG_LEN;

/// Length of the envelope produced for a plaintext of `plaintext_len` bytes
pub const fn sealed_len(plaintext_len: usize) -> usize {
    NONCE_LEN + plaintext_len + TAG_LEN
}

/// Split an envelope into its nonce and the ciphertext-with-tag body
///
/// Anything shorter than [`MIN_ENVELOPE_LEN`] is rejected here, before any
/// authentication is attempted.
pub fn split(envelope: &[u8]) -> SealResult<(&[u8], &[u8])> {
    if envelope.len() < MIN_ENVELOPE_LEN {
        return Err(SealError::EnvelopeTooShort(envelope.len()));
    }
    Ok(envelope.split_at(NONCE_LEN))
}

/// Join a nonce and a ciphertext-with-tag body into one envelope
pub fn join(nonce: &[u8; NONCE_LEN], body: &[u8]) -> Vec<u8> {
    let mut envelope = Vec::with_capacity(NONCE_LEN + body.len());
    envelope.extend_from_slice(nonce);
    envelope.extend_from_slice(body);
    envelope
}

/// Encode a binary envelope as base64 text
pub fn encode_text(envelope: &[u8]) -> String {
    STANDARD.encode(envelope)
}

/// Decode a base64 text envelope back to bytes
pub fn decode_text(text: &str) -> SealResult<Vec<u8>> {
    STANDARD
        .decode(text)
        .map_err(|e| SealError::InvalidEncoding(format!("envelope is not valid base64: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sealed_len() {
        assert_eq!(sealed_len(0), MIN_ENVELOPE_LEN);
        assert_eq!(sealed_len(13), 41);
    }

    #[test]
    fn test_split_rejects_short_envelopes() {
        for len in [0, 11, 12, 20, 27] {
            let envelope = vec![0u8; len];
            assert!(matches!(
                split(&envelope),
                Err(SealError::EnvelopeTooShort(n)) if n == len
            ));
        }
    }

    #[test]
    fn test_split_minimum_envelope() {
        let envelope: Vec<u8> = (0..MIN_ENVELOPE_LEN as u8).collect();
        let (nonce, body) = split(&envelope).unwrap();
        assert_eq!(nonce, &envelope[..NONCE_LEN]);
        assert_eq!(body.len(), TAG_LEN);
    }

    #[test]
    fn test_join_then_split() {
        let nonce = [7u8; NONCE_LEN];
        let body = [9u8; 20];
        let envelope = join(&nonce, &body);
        let (n, b) = split(&envelope).unwrap();
        assert_eq!(n, nonce);
        assert_eq!(b, body);
    }

    #[test]
    fn test_text_uses_padded_standard_alphabet() {
        let text = encode_text(&[0xFB, 0xFF]);
        assert_eq!(text, "+/8=");
        assert_eq!(decode_text(&text).unwrap(), vec![0xFB, 0xFF]);
    }

    #[test]
    fn test_decode_text_rejects_garbage() {
        assert!(matches!(
            decode_text("%%%"),
            Err(SealError::InvalidEncoding(_))
        ));
        // URL-safe alphabet is not accepted
        assert!(matches!(
            decode_text("-_8="),
            Err(SealError::InvalidEncoding(_))
        ));
    }
}
