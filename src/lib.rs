//! sealbox - AES-GCM sealed envelopes
//!
//! This library seals byte payloads into self-contained authenticated
//! envelopes and opens them again, plus a secure random byte generator for
//! nonces and key material.
//!
//! # Envelope format
//!
//! ```text
//! [NONCE(12)][CIPHERTEXT(N)][TAG(16)]
//! ```
//!
//! Keys are 16, 24, or 32 bytes and select AES-128/192/256-GCM. The text
//! forms of keys and envelopes are standard base64 with padding.
//!
//! # Architecture
//!
//! - `crypto`: envelope codec, key type, random byte generation
//! - `error`: custom error types
//! - `config`: configuration and path management for the CLI
//! - `logging`: tracing subscriber setup for the CLI
//! - `cli`: command handlers for the `sealbox` binary
//!
//! # Example
//!
//! ```rust
//! use sealbox::crypto::{generate_key, open, seal, KeySize};
//!
//! let key = generate_key(KeySize::Aes256)?;
//! let sealed = seal(b"Hello, world!", &key)?;
//! assert_eq!(sealed.len(), 12 + 13 + 16);
//! assert_eq!(open(&sealed, &key)?, b"Hello, world!");
//! # Ok::<(), sealbox::SealError>(())
//! ```

pub mod cli;
pub mod config;
pub mod crypto;
pub mod error;
pub mod logging;

pub use error::{SealError, SealResult};
