//! Diagnostic logging
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the binary. Output goes to stderr so stdout stays free for envelopes
//! and plaintext.

use tracing_subscriber::EnvFilter;

use crate::error::{SealError, SealResult};

/// Environment variable that overrides the configured log filter
pub const LOG_ENV: &str = "SEALBOX_LOG";

/// Build the log filter from `SEALBOX_LOG`, falling back to `default_directive`
pub fn build_filter(default_directive: &str) -> SealResult<EnvFilter> {
    let directive = match std::env::var(LOG_ENV) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => default_directive.to_string(),
    };

    EnvFilter::try_new(&directive)
        .map_err(|e| SealError::Config(format!("Invalid log filter '{}': {}", directive, e)))
}

/// Install the global stderr subscriber
pub fn init(default_directive: &str) -> SealResult<()> {
    let filter = build_filter(default_directive)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| SealError::Config(format!("Failed to initialize logging: {}", e)))
}
