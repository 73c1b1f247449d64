//! Dashboard Core
//!
//! Facade owning one of each component and wiring their events to the
//! notifier. All mutation from the UI-driven caller funnels through here;
//! each component sits behind its own lock, so mutations are serialized
//! per component and readers always see a consistent snapshot. Locks are
//! released before the notifier is invoked.

use std::sync::{Arc, Mutex};

use chrono::Utc;
use serde::Serialize;

use crate::domain::analytics::{
    asset_rollups, period_pnl, portfolio_distribution, AssetRollup, PeriodPnl, PortfolioSlice,
    TradeStats,
};
use crate::domain::asset::{AssetMonitorSet, MonitorError, MonitoredAsset};
use crate::domain::config::{BotConfig, ConfigPatch, ConfigStore, ValidationError};
use crate::domain::events::BotEvent;
use crate::domain::ledger::{LedgerError, TransactionLedger, TxFilter};
use crate::domain::lifecycle::{BotLifecycle, BotState};
use crate::domain::portfolio::HoldingsSnapshot;
use crate::domain::transaction::{NewTransaction, TradeOutcome, Transaction, TransactionId};
use crate::ports::catalog::AssetCatalog;
use crate::ports::notifier::Notifier;

/// Everything the dashboard needs for one render.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub state: BotState,
    pub config: BotConfig,
    pub monitors: Vec<MonitoredAsset>,
    pub stats: TradeStats,
    pub rollups: Vec<AssetRollup>,
    pub distribution: Vec<PortfolioSlice>,
    pub period: PeriodPnl,
}

/// Single entry point for the presentation layer.
pub struct DashboardCore {
    config: Mutex<ConfigStore>,
    monitors: Mutex<AssetMonitorSet>,
    ledger: Mutex<TransactionLedger>,
    lifecycle: Mutex<BotLifecycle>,
    holdings: Mutex<HoldingsSnapshot>,
    catalog: Arc<dyn AssetCatalog>,
    notifier: Arc<dyn Notifier>,
}

impl DashboardCore {
    pub fn new(catalog: Arc<dyn AssetCatalog>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            config: Mutex::new(ConfigStore::new()),
            monitors: Mutex::new(AssetMonitorSet::new()),
            ledger: Mutex::new(TransactionLedger::new()),
            lifecycle: Mutex::new(BotLifecycle::new()),
            holdings: Mutex::new(HoldingsSnapshot::empty()),
            catalog,
            notifier,
        }
    }

    /// Seed with an already-validated configuration (e.g. an imported
    /// backup).
    pub fn with_config(self, config: BotConfig) -> Result<Self, ValidationError> {
        *self.config.lock().unwrap() = ConfigStore::with_config(config)?;
        Ok(self)
    }

    // --- Configuration ---

    pub fn config(&self) -> BotConfig {
        self.config.lock().unwrap().get()
    }

    /// Merge a partial update over the current configuration and validate
    /// it without committing.
    pub fn stage_config(&self, patch: &ConfigPatch) -> Result<BotConfig, ValidationError> {
        self.config.lock().unwrap().stage(patch)
    }

    /// Commit a configuration candidate. Transactional: on failure the
    /// prior configuration is retained and no event is emitted.
    pub fn save_config(&self, candidate: BotConfig) -> Result<BotConfig, ValidationError> {
        let committed = self.config.lock().unwrap().commit(candidate)?;
        tracing::debug!(network = %committed.network, "configuration committed");
        self.notifier.notify(BotEvent::ConfigChanged);
        Ok(committed)
    }

    // --- Monitored assets ---

    /// Start watching a symbol. Fails with `UnknownAsset` when the catalog
    /// has no such symbol; returns false (and emits nothing) when the
    /// symbol is already watched.
    pub fn add_monitor(&self, symbol: &str) -> Result<bool, MonitorError> {
        let info = self
            .catalog
            .lookup(symbol)
            .ok_or_else(|| MonitorError::UnknownAsset(symbol.to_string()))?;

        let added = self.monitors.lock().unwrap().add(info.into());
        if added {
            tracing::debug!(symbol, "asset added to monitor set");
            self.notifier.notify(BotEvent::AssetAdded {
                symbol: symbol.to_string(),
            });
        }
        Ok(added)
    }

    /// Stop watching a symbol. Returns false (and emits nothing) when it
    /// was not watched.
    pub fn remove_monitor(&self, symbol: &str) -> bool {
        let removed = self.monitors.lock().unwrap().remove(symbol);
        if removed {
            tracing::debug!(symbol, "asset removed from monitor set");
            self.notifier.notify(BotEvent::AssetRemoved {
                symbol: symbol.to_string(),
            });
        }
        removed
    }

    /// Watched assets in insertion order.
    pub fn monitors(&self) -> Vec<MonitoredAsset> {
        self.monitors.lock().unwrap().list().to_vec()
    }

    // --- Ledger ---

    /// Record a trade attempt. Events are only emitted on resolution.
    pub fn record_transaction(&self, entry: NewTransaction) -> TransactionId {
        let id = self.ledger.lock().unwrap().append(entry);
        tracing::debug!(%id, "transaction recorded");
        id
    }

    /// Resolve a pending entry to its terminal status and notify.
    pub fn resolve_transaction(
        &self,
        id: TransactionId,
        outcome: TradeOutcome,
        pnl_pct: Option<f64>,
    ) -> Result<(), LedgerError> {
        self.ledger.lock().unwrap().resolve(id, outcome, pnl_pct)?;
        self.notifier.notify(BotEvent::TransactionResolved {
            id,
            status: outcome.into(),
            pnl_pct,
        });
        Ok(())
    }

    /// Matching entries, oldest first, as an owned snapshot.
    pub fn transactions(&self, filter: &TxFilter) -> Vec<Transaction> {
        self.ledger.lock().unwrap().query(filter)
    }

    // --- Holdings ---

    /// Replace the wallet snapshot as a whole unit.
    pub fn refresh_holdings(&self, snapshot: HoldingsSnapshot) {
        *self.holdings.lock().unwrap() = snapshot;
    }

    pub fn holdings(&self) -> HoldingsSnapshot {
        self.holdings.lock().unwrap().clone()
    }

    // --- Lifecycle ---

    /// Start the bot. Emits a lifecycle event only when the state actually
    /// flipped; returns the state after the call either way.
    pub fn start(&self) -> BotState {
        let change = self.lifecycle.lock().unwrap().start();
        if let Some(change) = change {
            tracing::info!(from = %change.from, to = %change.to, "bot started");
            self.notifier.notify(BotEvent::LifecycleChanged {
                state: change.to,
                message: change.message.to_string(),
            });
            return change.to;
        }
        self.state()
    }

    /// Stop the bot. No-op (and no event) when already stopped.
    pub fn stop(&self) -> BotState {
        let change = self.lifecycle.lock().unwrap().stop();
        if let Some(change) = change {
            tracing::info!(from = %change.from, to = %change.to, "bot stopped");
            self.notifier.notify(BotEvent::LifecycleChanged {
                state: change.to,
                message: change.message.to_string(),
            });
            return change.to;
        }
        self.state()
    }

    pub fn state(&self) -> BotState {
        self.lifecycle.lock().unwrap().state()
    }

    // --- Analytics (recomputed per call) ---

    pub fn stats(&self) -> TradeStats {
        TradeStats::from_ledger(&self.ledger_snapshot())
    }

    pub fn rollups(&self) -> Vec<AssetRollup> {
        asset_rollups(&self.ledger_snapshot())
    }

    pub fn distribution(&self) -> Vec<PortfolioSlice> {
        portfolio_distribution(&self.holdings())
    }

    pub fn period(&self) -> PeriodPnl {
        period_pnl(&self.ledger_snapshot(), Utc::now())
    }

    /// One consistent snapshot of everything a render needs.
    pub fn dashboard(&self) -> DashboardSnapshot {
        let ledger = self.ledger_snapshot();
        DashboardSnapshot {
            state: self.state(),
            config: self.config(),
            monitors: self.monitors(),
            stats: TradeStats::from_ledger(&ledger),
            rollups: asset_rollups(&ledger),
            distribution: self.distribution(),
            period: period_pnl(&ledger, Utc::now()),
        }
    }

    fn ledger_snapshot(&self) -> Vec<Transaction> {
        self.ledger.lock().unwrap().snapshot()
    }
}
