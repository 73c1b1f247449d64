//! CLI Adapter
//!
//! Command-line interface for the sniper dashboard core.
//! Uses clap derive macros for argument parsing.

mod commands;

pub use commands::{CliApp, Command, DemoCmd, ExportCmd, ValidateCmd};
