//! Sniperdash - DeFi Sniper Bot Dashboard Core
//!
//! The state and aggregation model behind the sniper dashboard: validated
//! configuration, monitored assets, the transaction ledger, run/stop
//! lifecycle, and the analytics derived from them. All I/O lives in the
//! surrounding collaborators; this crate only holds state and computes.
//!
//! # Modules
//!
//! - `domain`: core logic (ConfigStore, AssetMonitorSet, TransactionLedger,
//!   AnalyticsEngine, BotLifecycle)
//! - `ports`: trait abstractions (Notifier, AssetCatalog)
//! - `adapters`: collaborator implementations (LogNotifier, StaticCatalog, CLI)
//! - `application`: the DashboardCore facade
//! - `config`: TOML import/export for backup/restore

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
