use std::sync::{Arc, Mutex};

use crate::domain::events::BotEvent;

use super::catalog::{AssetCatalog, AssetInfo};
use super::notifier::Notifier;

/// Mock notifier that records every delivered event in order.
#[derive(Debug, Default, Clone)]
pub struct MockNotifier {
    events: Arc<Mutex<Vec<BotEvent>>>,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded events, oldest first.
    pub fn events(&self) -> Vec<BotEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }
}

impl Notifier for MockNotifier {
    fn notify(&self, event: BotEvent) {
        self.events.lock().unwrap().push(event);
    }
}

/// Mock catalog that records lookups and serves controlled responses.
#[derive(Debug, Default, Clone)]
pub struct MockCatalog {
    assets: Arc<Mutex<Vec<AssetInfo>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to register a known asset.
    pub fn with_asset(self, symbol: &str, price_usd: f64, change_24h_pct: f64) -> Self {
        self.assets.lock().unwrap().push(AssetInfo {
            symbol: symbol.to_string(),
            name: format!("{symbol} Coin"),
            logo: "?".to_string(),
            price_usd,
            change_24h_pct,
        });
        self
    }

    /// Get all recorded lookups.
    pub fn get_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl AssetCatalog for MockCatalog {
    fn lookup(&self, symbol: &str) -> Option<AssetInfo> {
        self.calls.lock().unwrap().push(symbol.to_string());
        self.assets
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.symbol == symbol)
            .cloned()
    }

    fn symbols(&self) -> Vec<String> {
        self.assets.lock().unwrap().iter().map(|a| a.symbol.clone()).collect()
    }
}
