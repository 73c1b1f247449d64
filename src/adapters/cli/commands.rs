//! CLI Command Definitions
//!
//! Argument structures for the sniperdash binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// sniperdash - dashboard core for a DeFi token sniper bot
#[derive(Parser, Debug)]
#[command(
    name = "sniperdash",
    version = env!("CARGO_PKG_VERSION"),
    about = "Dashboard core for a DeFi token sniper bot",
    long_about = "Drives the sniper dashboard model: validated configuration, monitored \
                  assets, the transaction ledger, and the analytics derived from them."
)]
pub struct CliApp {
    /// The command to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Seed the core with fixture data and print the dashboard
    Demo(DemoCmd),

    /// Validate a configuration file
    Validate(ValidateCmd),

    /// Write the default configuration to a file
    Export(ExportCmd),
}

/// Run the fixture demo
#[derive(Parser, Debug)]
pub struct DemoCmd {
    /// Emit the dashboard snapshot as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Validate a configuration file
#[derive(Parser, Debug)]
pub struct ValidateCmd {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE", default_value = "config.toml")]
    pub config: PathBuf,
}

/// Export the default configuration
#[derive(Parser, Debug)]
pub struct ExportCmd {
    /// Output path
    #[arg(short, long, value_name = "FILE", default_value = "config.toml")]
    pub out: PathBuf,
}
