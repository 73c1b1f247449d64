//! Core Events
//!
//! The sole notification surface of the core. Consumers (the toast/alert
//! UI) subscribe through the `Notifier` port; the core never depends on
//! how events are displayed.

use serde::Serialize;
use std::fmt;

use super::lifecycle::BotState;
use super::transaction::{TransactionId, TxStatus};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum BotEvent {
    /// A configuration commit succeeded.
    ConfigChanged,
    AssetAdded {
        symbol: String,
    },
    AssetRemoved {
        symbol: String,
    },
    /// The run/stop state actually flipped.
    LifecycleChanged {
        state: BotState,
        message: String,
    },
    /// A pending ledger entry reached a terminal status.
    TransactionResolved {
        id: TransactionId,
        status: TxStatus,
        pnl_pct: Option<f64>,
    },
}

impl fmt::Display for BotEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BotEvent::ConfigChanged => write!(f, "Bot configuration has been updated"),
            BotEvent::AssetAdded { symbol } => write!(f, "{symbol} is now being monitored"),
            BotEvent::AssetRemoved { symbol } => write!(f, "{symbol} is no longer being monitored"),
            BotEvent::LifecycleChanged { message, .. } => write!(f, "{message}"),
            BotEvent::TransactionResolved { id, status, pnl_pct } => match pnl_pct {
                Some(pnl) => write!(f, "Transaction {id} resolved {status} ({pnl:+.1}%)"),
                None => write!(f, "Transaction {id} resolved {status}"),
            },
        }
    }
}
