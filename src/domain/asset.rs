//! Monitored Assets
//!
//! The set of coins the sniper currently watches. Symbols are unique;
//! insertion order is kept only for stable display.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A watched coin with its display metadata and last-known quote,
/// copied from the catalog at add time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitoredAsset {
    pub symbol: String,
    pub name: String,
    pub logo: String,
    pub price_usd: f64,
    pub change_24h_pct: f64,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MonitorError {
    #[error("unknown asset '{0}': not in the catalog")]
    UnknownAsset(String),
}

#[derive(Debug, Default)]
pub struct AssetMonitorSet {
    assets: Vec<MonitoredAsset>,
}

impl AssetMonitorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an asset. Returns false (no-op) if the symbol is already
    /// watched, so a double add is equivalent to a single one.
    pub fn add(&mut self, asset: MonitoredAsset) -> bool {
        if self.contains(&asset.symbol) {
            return false;
        }
        self.assets.push(asset);
        true
    }

    /// Remove by symbol. Returns false if the symbol was absent.
    pub fn remove(&mut self, symbol: &str) -> bool {
        let before = self.assets.len();
        self.assets.retain(|a| a.symbol != symbol);
        self.assets.len() < before
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.assets.iter().any(|a| a.symbol == symbol)
    }

    /// Watched assets in insertion order.
    pub fn list(&self) -> &[MonitoredAsset] {
        &self.assets
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}
