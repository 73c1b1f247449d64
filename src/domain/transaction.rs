use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ledger-assigned identifier, unique and monotonically increasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TransactionId(pub u64);

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TradeDirection {
    Buy,
    Sell,
}

impl fmt::Display for TradeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeDirection::Buy => write!(f, "BUY"),
            TradeDirection::Sell => write!(f, "SELL"),
        }
    }
}

/// Settlement status of a ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TxStatus {
    Pending,
    Success,
    Failed,
}

impl TxStatus {
    /// Terminal statuses are final; a terminal entry never mutates again.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, TxStatus::Pending)
    }
}

impl fmt::Display for TxStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TxStatus::Pending => write!(f, "PENDING"),
            TxStatus::Success => write!(f, "SUCCESS"),
            TxStatus::Failed => write!(f, "FAILED"),
        }
    }
}

/// Terminal outcome used when resolving a pending entry.
///
/// A separate type from `TxStatus` so "resolve back to pending" is
/// unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeOutcome {
    Success,
    Failed,
}

impl From<TradeOutcome> for TxStatus {
    fn from(outcome: TradeOutcome) -> Self {
        match outcome {
            TradeOutcome::Success => TxStatus::Success,
            TradeOutcome::Failed => TxStatus::Failed,
        }
    }
}

/// A trade attempt handed to the ledger for recording.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub timestamp: DateTime<Utc>,
    pub symbol: String,
    pub direction: TradeDirection,
    pub amount: f64,
    pub price_usd: f64,
    pub gas_eth: f64,
    pub status: TxStatus,
    pub pnl_pct: Option<f64>,
    pub tx_hash: String,
}

impl NewTransaction {
    /// A trade attempt still awaiting confirmation.
    pub fn pending(
        timestamp: DateTime<Utc>,
        symbol: impl Into<String>,
        direction: TradeDirection,
        amount: f64,
        price_usd: f64,
        gas_eth: f64,
        tx_hash: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            symbol: symbol.into(),
            direction,
            amount,
            price_usd,
            gas_eth,
            status: TxStatus::Pending,
            pnl_pct: None,
            tx_hash: tx_hash.into(),
        }
    }

    /// A trade attempt that was already terminal at submission.
    pub fn settled(
        timestamp: DateTime<Utc>,
        symbol: impl Into<String>,
        direction: TradeDirection,
        amount: f64,
        price_usd: f64,
        gas_eth: f64,
        outcome: TradeOutcome,
        pnl_pct: Option<f64>,
        tx_hash: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            symbol: symbol.into(),
            direction,
            amount,
            price_usd,
            gas_eth,
            status: outcome.into(),
            pnl_pct,
            tx_hash: tx_hash.into(),
        }
    }
}

/// An immutable ledger entry. Owned exclusively by the ledger; everything
/// else reads clones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub timestamp: DateTime<Utc>,
    pub symbol: String,
    pub direction: TradeDirection,
    pub amount: f64,
    pub price_usd: f64,
    pub gas_eth: f64,
    pub status: TxStatus,
    /// Present only once a matching closing trade resolved.
    pub pnl_pct: Option<f64>,
    pub tx_hash: String,
}

impl Transaction {
    pub fn is_resolved(&self) -> bool {
        self.status.is_terminal()
    }

    /// Traded volume in USD (amount x price).
    pub fn volume_usd(&self) -> f64 {
        self.amount * self.price_usd
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} @ ${} ({})",
            self.id, self.direction, self.amount, self.symbol, self.price_usd, self.status
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts() -> DateTime<Utc> {
        "2024-01-09T14:32:15Z".parse().unwrap()
    }

    #[test]
    fn test_pending_entry_has_no_pnl() {
        let entry = NewTransaction::pending(ts(), "FLOKI", TradeDirection::Buy, 0.08, 196.30, 0.006, "0x5555");
        assert_eq!(entry.status, TxStatus::Pending);
        assert_eq!(entry.pnl_pct, None);
    }

    #[test]
    fn test_settled_entry_carries_outcome() {
        let entry = NewTransaction::settled(
            ts(),
            "PEPE",
            TradeDirection::Buy,
            0.1,
            245.50,
            0.005,
            TradeOutcome::Success,
            Some(15.2),
            "0x1234",
        );
        assert_eq!(entry.status, TxStatus::Success);
        assert_eq!(entry.pnl_pct, Some(15.2));
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(!TxStatus::Pending.is_terminal());
        assert!(TxStatus::Success.is_terminal());
        assert!(TxStatus::Failed.is_terminal());
    }

    #[test]
    fn test_outcome_conversion() {
        assert_eq!(TxStatus::from(TradeOutcome::Success), TxStatus::Success);
        assert_eq!(TxStatus::from(TradeOutcome::Failed), TxStatus::Failed);
    }

    #[test]
    fn test_volume() {
        let tx = Transaction {
            id: TransactionId(1),
            timestamp: ts(),
            symbol: "PEPE".to_string(),
            direction: TradeDirection::Buy,
            amount: 2.0,
            price_usd: 100.0,
            gas_eth: 0.005,
            status: TxStatus::Success,
            pnl_pct: Some(15.2),
            tx_hash: "0x1234".to_string(),
        };
        assert_eq!(tx.volume_usd(), 200.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", TradeDirection::Buy), "BUY");
        assert_eq!(format!("{}", TxStatus::Failed), "FAILED");
        assert_eq!(format!("{}", TransactionId(42)), "#42");
    }
}
