//! Bot Configuration
//!
//! Validated sniper settings: network/provider selection, wallet binding,
//! trading parameters, and risk thresholds. Updates go through an explicit
//! stage/commit cycle; a failed commit leaves the prior configuration
//! untouched.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Ethereum,
    Bsc,
    Polygon,
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Ethereum => write!(f, "ethereum"),
            Network::Bsc => write!(f, "bsc"),
            Network::Polygon => write!(f, "polygon"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RpcProvider {
    Alchemy,
    Infura,
    Quicknode,
}

impl fmt::Display for RpcProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RpcProvider::Alchemy => write!(f, "alchemy"),
            RpcProvider::Infura => write!(f, "infura"),
            RpcProvider::Quicknode => write!(f, "quicknode"),
        }
    }
}

/// Complete bot configuration.
///
/// Percentage fields are 0-100, amounts are non-negative, and the wallet
/// address (once connected) is a 0x-prefixed 40-hex-digit string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BotConfig {
    pub network: Network,
    pub rpc_provider: RpcProvider,
    /// None until a wallet is connected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet_address: Option<String>,
    pub slippage_pct: f64,
    pub buy_amount_eth: f64,
    pub gas_price_gwei: f64,
    pub max_gas_price_gwei: f64,
    pub take_profit_pct: f64,
    pub stop_loss_pct: f64,
    pub min_liquidity_eth: f64,
    pub max_buy_tax_pct: f64,
    pub max_sell_tax_pct: f64,
    pub anti_honeypot: bool,
    pub auto_sell: bool,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            network: Network::Ethereum,
            rpc_provider: RpcProvider::Alchemy,
            wallet_address: None,
            slippage_pct: 5.0,
            buy_amount_eth: 0.1,
            gas_price_gwei: 20.0,
            max_gas_price_gwei: 100.0,
            take_profit_pct: 50.0,
            stop_loss_pct: 20.0,
            min_liquidity_eth: 5.0,
            max_buy_tax_pct: 10.0,
            max_sell_tax_pct: 10.0,
            anti_honeypot: true,
            auto_sell: false,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{field} must be 0-100, got {value}")]
    PercentOutOfRange { field: &'static str, value: f64 },

    #[error("{field} must be >= 0, got {value}")]
    NegativeAmount { field: &'static str, value: f64 },

    #[error("wallet address must be 0x followed by 40 hex digits, got '{0}'")]
    MalformedAddress(String),

    #[error("gas price {gas} gwei exceeds max gas price {max} gwei")]
    GasAboveMax { gas: f64, max: f64 },
}

fn is_valid_address(addr: &str) -> bool {
    match addr.strip_prefix("0x") {
        Some(hex) => hex.len() == 40 && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

impl BotConfig {
    /// Validate all fields. NaN fails the range checks.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let percents = [
            ("slippage_pct", self.slippage_pct),
            ("take_profit_pct", self.take_profit_pct),
            ("stop_loss_pct", self.stop_loss_pct),
            ("max_buy_tax_pct", self.max_buy_tax_pct),
            ("max_sell_tax_pct", self.max_sell_tax_pct),
        ];
        for (field, value) in percents {
            if !(0.0..=100.0).contains(&value) {
                return Err(ValidationError::PercentOutOfRange { field, value });
            }
        }

        let amounts = [
            ("buy_amount_eth", self.buy_amount_eth),
            ("gas_price_gwei", self.gas_price_gwei),
            ("max_gas_price_gwei", self.max_gas_price_gwei),
            ("min_liquidity_eth", self.min_liquidity_eth),
        ];
        for (field, value) in amounts {
            if !(value >= 0.0) {
                return Err(ValidationError::NegativeAmount { field, value });
            }
        }

        if self.gas_price_gwei > self.max_gas_price_gwei {
            return Err(ValidationError::GasAboveMax {
                gas: self.gas_price_gwei,
                max: self.max_gas_price_gwei,
            });
        }

        if let Some(ref addr) = self.wallet_address {
            if !is_valid_address(addr) {
                return Err(ValidationError::MalformedAddress(addr.clone()));
            }
        }

        Ok(())
    }
}

/// Partial update from the settings form. Unset fields keep their current
/// value; an empty wallet address string clears the binding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigPatch {
    pub network: Option<Network>,
    pub rpc_provider: Option<RpcProvider>,
    pub wallet_address: Option<String>,
    pub slippage_pct: Option<f64>,
    pub buy_amount_eth: Option<f64>,
    pub gas_price_gwei: Option<f64>,
    pub max_gas_price_gwei: Option<f64>,
    pub take_profit_pct: Option<f64>,
    pub stop_loss_pct: Option<f64>,
    pub min_liquidity_eth: Option<f64>,
    pub max_buy_tax_pct: Option<f64>,
    pub max_sell_tax_pct: Option<f64>,
    pub anti_honeypot: Option<bool>,
    pub auto_sell: Option<bool>,
}

impl ConfigPatch {
    pub fn apply(&self, base: &BotConfig) -> BotConfig {
        let mut next = base.clone();
        if let Some(network) = self.network {
            next.network = network;
        }
        if let Some(provider) = self.rpc_provider {
            next.rpc_provider = provider;
        }
        if let Some(ref addr) = self.wallet_address {
            next.wallet_address = if addr.is_empty() { None } else { Some(addr.clone()) };
        }
        if let Some(v) = self.slippage_pct {
            next.slippage_pct = v;
        }
        if let Some(v) = self.buy_amount_eth {
            next.buy_amount_eth = v;
        }
        if let Some(v) = self.gas_price_gwei {
            next.gas_price_gwei = v;
        }
        if let Some(v) = self.max_gas_price_gwei {
            next.max_gas_price_gwei = v;
        }
        if let Some(v) = self.take_profit_pct {
            next.take_profit_pct = v;
        }
        if let Some(v) = self.stop_loss_pct {
            next.stop_loss_pct = v;
        }
        if let Some(v) = self.min_liquidity_eth {
            next.min_liquidity_eth = v;
        }
        if let Some(v) = self.max_buy_tax_pct {
            next.max_buy_tax_pct = v;
        }
        if let Some(v) = self.max_sell_tax_pct {
            next.max_sell_tax_pct = v;
        }
        if let Some(v) = self.anti_honeypot {
            next.anti_honeypot = v;
        }
        if let Some(v) = self.auto_sell {
            next.auto_sell = v;
        }
        next
    }
}

/// Holds the committed configuration. `stage` produces a validated
/// candidate without committing; `commit` swaps it in transactionally.
#[derive(Debug, Default)]
pub struct ConfigStore {
    current: BotConfig,
}

impl ConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with an already-validated configuration (e.g. an
    /// imported backup).
    pub fn with_config(config: BotConfig) -> Result<Self, ValidationError> {
        config.validate()?;
        Ok(Self { current: config })
    }

    pub fn get(&self) -> BotConfig {
        self.current.clone()
    }

    /// Merge a partial update over the current configuration and validate
    /// the result. Nothing is committed.
    pub fn stage(&self, patch: &ConfigPatch) -> Result<BotConfig, ValidationError> {
        let candidate = patch.apply(&self.current);
        candidate.validate()?;
        Ok(candidate)
    }

    /// Replace the current configuration with a candidate. Either all
    /// fields update or none: on validation failure the prior configuration
    /// is retained unchanged.
    pub fn commit(&mut self, candidate: BotConfig) -> Result<BotConfig, ValidationError> {
        candidate.validate()?;
        self.current = candidate.clone();
        Ok(candidate)
    }
}
