//! Configuration module for sealbox
//!
//! This module provides configuration management including:
//! - Platform-aware path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::SealboxPaths;
pub use settings::Settings;
