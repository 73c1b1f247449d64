use serde::{Deserialize, Serialize};

use crate::domain::asset::MonitoredAsset;

/// Metadata and last-known quote for a symbol the price/metadata
/// collaborator knows about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetInfo {
    pub symbol: String,
    pub name: String,
    pub logo: String,
    pub price_usd: f64,
    pub change_24h_pct: f64,
}

impl From<AssetInfo> for MonitoredAsset {
    fn from(info: AssetInfo) -> Self {
        MonitoredAsset {
            symbol: info.symbol,
            name: info.name,
            logo: info.logo,
            price_usd: info.price_usd,
            change_24h_pct: info.change_24h_pct,
        }
    }
}

/// Catalog of known assets. Adding a symbol the catalog does not know
/// fails with `MonitorError::UnknownAsset`.
pub trait AssetCatalog: Send + Sync {
    fn lookup(&self, symbol: &str) -> Option<AssetInfo>;

    /// Every known symbol, in catalog order.
    fn symbols(&self) -> Vec<String>;
}
