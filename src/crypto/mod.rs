//! Cryptographic functions for sealbox
//!
//! Provides AES-GCM sealed envelopes (128/192/256-bit keys) and a secure
//! random byte generator backed by the operating system's entropy source.

pub mod encryption;
pub mod envelope;
pub mod key;
pub mod random;
pub mod sealer;
pub mod secure_memory;

pub use encryption::{open, open_text, open_text_string, seal, seal_text};
pub use envelope::{MIN_ENVELOPE_LEN, NONCE_LEN, TAG_LEN};
pub use key::{Key, KeySize};
pub use random::{fill_random, generate_key, generate_key_text, generate_random_bytes};
pub use sealer::Sealer;
pub use secure_memory::SecretString;
