//! Adapters Layer - Collaborator Implementations
//!
//! This module contains implementations of the port traits:
//! - Alerts: tracing-backed event notifier
//! - Catalog: static in-memory asset catalog
//! - CLI: command-line interface

pub mod alerts;
pub mod catalog;
pub mod cli;

pub use alerts::LogNotifier;
pub use catalog::StaticCatalog;
pub use cli::{CliApp, Command, DemoCmd, ExportCmd, ValidateCmd};
