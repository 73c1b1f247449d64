//! Wallet Holdings
//!
//! Current balance and USD value per asset. The snapshot is refreshed as a
//! whole unit, never patched in place, so readers cannot observe a
//! half-updated wallet.

use serde::{Deserialize, Serialize};

/// A single asset balance in the wallet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    pub symbol: String,
    pub balance: f64,
    pub usd_value: f64,
}

impl Holding {
    pub fn new(symbol: impl Into<String>, balance: f64, usd_value: f64) -> Self {
        Self {
            symbol: symbol.into(),
            balance,
            usd_value,
        }
    }
}

/// Whole-unit snapshot of the wallet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HoldingsSnapshot {
    holdings: Vec<Holding>,
}

impl HoldingsSnapshot {
    pub fn new(holdings: Vec<Holding>) -> Self {
        Self { holdings }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn holdings(&self) -> &[Holding] {
        &self.holdings
    }

    pub fn get(&self, symbol: &str) -> Option<&Holding> {
        self.holdings.iter().find(|h| h.symbol == symbol)
    }

    pub fn total_value_usd(&self) -> f64 {
        self.holdings.iter().map(|h| h.usd_value).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }
}
