//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the codec.

pub mod codec;
pub mod io;
pub mod keygen;
pub mod keys;

pub use codec::{handle_open_command, handle_seal_command, CodecArgs};
pub use keygen::{handle_keygen_command, handle_random_command, KeygenArgs, RandomArgs};
pub use keys::KeyArgs;
