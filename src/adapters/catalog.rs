//! Static Asset Catalog
//!
//! In-memory catalog seeded with the dashboard's default coin list. A real
//! deployment would back this with a price feed; the core only ever sees
//! the `AssetCatalog` trait.

use crate::ports::catalog::{AssetCatalog, AssetInfo};

/// Catalog over a fixed asset list.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    assets: Vec<AssetInfo>,
}

impl StaticCatalog {
    pub fn new(assets: Vec<AssetInfo>) -> Self {
        Self { assets }
    }

    /// The default coin list shown in the dashboard's asset picker.
    pub fn with_defaults() -> Self {
        let coin = |symbol: &str, name: &str, logo: &str, price_usd: f64, change_24h_pct: f64| {
            AssetInfo {
                symbol: symbol.to_string(),
                name: name.to_string(),
                logo: logo.to_string(),
                price_usd,
                change_24h_pct,
            }
        };

        Self::new(vec![
            coin("ETH", "Ethereum", "\u{27e0}", 2387.45, 2.34),
            coin("BTC", "Bitcoin", "\u{20bf}", 43250.67, -1.23),
            coin("PEPE", "Pepe", "\u{1f438}", 0.00000123, 15.67),
            coin("SHIB", "Shiba Inu", "\u{1f415}", 0.00000856, -3.45),
            coin("DOGE", "Dogecoin", "\u{1f436}", 0.087, 5.23),
        ])
    }
}

impl AssetCatalog for StaticCatalog {
    fn lookup(&self, symbol: &str) -> Option<AssetInfo> {
        self.assets.iter().find(|a| a.symbol == symbol).cloned()
    }

    fn symbols(&self) -> Vec<String> {
        self.assets.iter().map(|a| a.symbol.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog() {
        let catalog = StaticCatalog::with_defaults();
        assert_eq!(catalog.symbols().len(), 5);

        let eth = catalog.lookup("ETH").unwrap();
        assert_eq!(eth.name, "Ethereum");
        assert!(catalog.lookup("FLOKI").is_none());
    }
}
