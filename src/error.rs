//! Custom error types for sealbox
//!
//! This module defines the error hierarchy for the codec and the CLI using
//! thiserror for ergonomic error definitions.

use thiserror::Error;

use crate::crypto::envelope::MIN_ENVELOPE_LEN;

/// The main error type for sealbox operations
#[derive(Error, Debug)]
pub enum SealError {
    /// Key is not 16, 24, or 32 bytes long
    #[error("Invalid key length: expected 16, 24, or 32 bytes, got {0}")]
    InvalidKeyLength(usize),

    /// Envelope cannot even hold a nonce and a tag
    #[error("Envelope too short: expected at least {min} bytes, got {0}", min = MIN_ENVELOPE_LEN)]
    EnvelopeTooShort(usize),

    /// Tag verification failed (wrong key, tampering, or corruption)
    #[error("Authentication failed: invalid key or corrupted data")]
    AuthenticationFailed,

    /// Base64 text could not be decoded
    #[error("Invalid encoding: {0}")]
    InvalidEncoding(String),

    /// The OS entropy source could not supply random bytes
    #[error("Entropy unavailable: {0}")]
    EntropyUnavailable(String),

    /// Plaintext exceeds the AES-GCM single-message limit
    #[error("Plaintext too large: {0} bytes")]
    PlaintextTooLarge(usize),

    /// Opened plaintext is not valid UTF-8
    #[error("Invalid UTF-8 in decrypted data: {0}")]
    InvalidUtf8(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl SealError {
    /// Check if this error means the envelope failed authentication
    pub fn is_authentication_failure(&self) -> bool {
        matches!(self, Self::AuthenticationFailed)
    }

    /// Check if this error was caused by malformed caller input
    ///
    /// These are rejected before any cryptographic work is attempted.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidKeyLength(_) | Self::EnvelopeTooShort(_) | Self::InvalidEncoding(_)
        )
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for SealError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SealError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<base64::DecodeError> for SealError {
    fn from(err: base64::DecodeError) -> Self {
        Self::InvalidEncoding(err.to_string())
    }
}

/// Result type alias for sealbox operations
pub type SealResult<T> = Result<T, SealError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SealError::InvalidKeyLength(15);
        assert_eq!(
            err.to_string(),
            "Invalid key length: expected 16, 24, or 32 bytes, got 15"
        );
    }

    #[test]
    fn test_envelope_too_short_display() {
        let err = SealError::EnvelopeTooShort(20);
        assert_eq!(
            err.to_string(),
            "Envelope too short: expected at least 28 bytes, got 20"
        );
    }

    #[test]
    fn test_classification() {
        assert!(SealError::AuthenticationFailed.is_authentication_failure());
        assert!(!SealError::AuthenticationFailed.is_input_error());
        assert!(SealError::EnvelopeTooShort(3).is_input_error());
        assert!(SealError::InvalidEncoding("bad".into()).is_input_error());
        assert!(!SealError::EntropyUnavailable("os".into()).is_input_error());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let seal_err: SealError = io_err.into();
        assert!(matches!(seal_err, SealError::Io(_)));
    }

    #[test]
    fn test_from_decode_error() {
        use base64::{engine::general_purpose::STANDARD, Engine};
        let decode_err = STANDARD.decode("***").unwrap_err();
        let seal_err: SealError = decode_err.into();
        assert!(matches!(seal_err, SealError::InvalidEncoding(_)));
    }
}
