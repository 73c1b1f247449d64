//! Configuration Module
//!
//! Imports and exports the bot configuration as TOML for backup/restore.

pub mod loader;

pub use loader::{export_config, load_config, ConfigFileError};
