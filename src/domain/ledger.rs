//! Transaction Ledger
//!
//! Append-only, time-ordered record of trade attempts and their outcomes.
//! Entries are exclusively owned here; queries hand out owned snapshots so
//! readers are never affected by appends made after the query began.

use chrono::{DateTime, Utc};
use thiserror::Error;

use super::transaction::{NewTransaction, TradeOutcome, Transaction, TransactionId, TxStatus};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("transaction {0} not found in ledger")]
    NotFound(TransactionId),

    #[error("transaction {0} is already resolved")]
    AlreadyResolved(TransactionId),
}

/// Query criteria for the ledger. All set criteria are ANDed.
#[derive(Debug, Clone, Default)]
pub struct TxFilter {
    status: Option<TxStatus>,
    symbol: Option<String>,
    since: Option<DateTime<Utc>>,
    until: Option<DateTime<Utc>>,
}

impl TxFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(mut self, status: TxStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Inclusive lower bound on the entry timestamp.
    pub fn since(mut self, at: DateTime<Utc>) -> Self {
        self.since = Some(at);
        self
    }

    /// Inclusive upper bound on the entry timestamp.
    pub fn until(mut self, at: DateTime<Utc>) -> Self {
        self.until = Some(at);
        self
    }

    fn matches(&self, tx: &Transaction) -> bool {
        if let Some(status) = self.status {
            if tx.status != status {
                return false;
            }
        }
        if let Some(ref symbol) = self.symbol {
            if tx.symbol != *symbol {
                return false;
            }
        }
        if let Some(since) = self.since {
            if tx.timestamp < since {
                return false;
            }
        }
        if let Some(until) = self.until {
            if tx.timestamp > until {
                return false;
            }
        }
        true
    }
}

/// Append-only trade record. Ids are assigned at append time and never
/// reused; resolution transitions PENDING to a terminal status exactly once.
#[derive(Debug, Default)]
pub struct TransactionLedger {
    entries: Vec<Transaction>,
    next_id: u64,
}

impl TransactionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a trade attempt, assigning its id and ordered position.
    /// Ties in timestamp are broken by insertion order.
    pub fn append(&mut self, entry: NewTransaction) -> TransactionId {
        self.next_id += 1;
        let id = TransactionId(self.next_id);
        self.entries.push(Transaction {
            id,
            timestamp: entry.timestamp,
            symbol: entry.symbol,
            direction: entry.direction,
            amount: entry.amount,
            price_usd: entry.price_usd,
            gas_eth: entry.gas_eth,
            status: entry.status,
            pnl_pct: entry.pnl_pct,
            tx_hash: entry.tx_hash,
        });
        id
    }

    /// Transition a PENDING entry to a terminal status.
    ///
    /// Fails with `AlreadyResolved` on a second call for the same id, no
    /// matter the arguments. Cancellation is an ordinary resolve to FAILED.
    pub fn resolve(
        &mut self,
        id: TransactionId,
        outcome: TradeOutcome,
        pnl_pct: Option<f64>,
    ) -> Result<(), LedgerError> {
        let entry = self
            .entries
            .iter_mut()
            .find(|tx| tx.id == id)
            .ok_or(LedgerError::NotFound(id))?;

        if entry.status.is_terminal() {
            return Err(LedgerError::AlreadyResolved(id));
        }

        entry.status = outcome.into();
        entry.pnl_pct = pnl_pct;
        Ok(())
    }

    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.entries.iter().find(|tx| tx.id == id)
    }

    /// Matching entries in ledger order (oldest first), as an owned
    /// snapshot independent of later appends.
    pub fn query(&self, filter: &TxFilter) -> Vec<Transaction> {
        self.entries
            .iter()
            .filter(|tx| filter.matches(tx))
            .cloned()
            .collect()
    }

    /// The whole ledger as an owned snapshot, oldest first.
    pub fn snapshot(&self) -> Vec<Transaction> {
        self.entries.clone()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::transaction::TradeDirection;

    fn ts(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    fn pending(symbol: &str, at: &str) -> NewTransaction {
        NewTransaction::pending(ts(at), symbol, TradeDirection::Buy, 0.1, 100.0, 0.005, "0xabcd")
    }

    #[test]
    fn test_append_assigns_monotonic_ids() {
        let mut ledger = TransactionLedger::new();
        let a = ledger.append(pending("PEPE", "2024-01-09T14:00:00Z"));
        let b = ledger.append(pending("SHIB", "2024-01-09T14:01:00Z"));
        assert!(b > a);
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn test_resolve_pending_once() {
        let mut ledger = TransactionLedger::new();
        let id = ledger.append(pending("PEPE", "2024-01-09T14:00:00Z"));

        ledger.resolve(id, TradeOutcome::Success, Some(15.2)).unwrap();
        let tx = ledger.get(id).unwrap();
        assert_eq!(tx.status, TxStatus::Success);
        assert_eq!(tx.pnl_pct, Some(15.2));
    }

    #[test]
    fn test_resolve_twice_fails() {
        let mut ledger = TransactionLedger::new();
        let id = ledger.append(pending("PEPE", "2024-01-09T14:00:00Z"));

        ledger.resolve(id, TradeOutcome::Success, Some(15.2)).unwrap();
        let err = ledger.resolve(id, TradeOutcome::Failed, None).unwrap_err();
        assert_eq!(err, LedgerError::AlreadyResolved(id));

        // First resolution stands untouched.
        let tx = ledger.get(id).unwrap();
        assert_eq!(tx.status, TxStatus::Success);
        assert_eq!(tx.pnl_pct, Some(15.2));
    }

    #[test]
    fn test_resolve_unknown_id() {
        let mut ledger = TransactionLedger::new();
        let err = ledger
            .resolve(TransactionId(99), TradeOutcome::Failed, None)
            .unwrap_err();
        assert_eq!(err, LedgerError::NotFound(TransactionId(99)));
    }

    #[test]
    fn test_resolve_entry_created_terminal_fails() {
        let mut ledger = TransactionLedger::new();
        let id = ledger.append(NewTransaction::settled(
            ts("2024-01-09T14:00:00Z"),
            "PEPE",
            TradeDirection::Buy,
            0.1,
            100.0,
            0.005,
            TradeOutcome::Success,
            Some(15.2),
            "0x1234",
        ));
        let err = ledger.resolve(id, TradeOutcome::Failed, None).unwrap_err();
        assert_eq!(err, LedgerError::AlreadyResolved(id));
    }

    #[test]
    fn test_query_filters_and_order() {
        let mut ledger = TransactionLedger::new();
        let a = ledger.append(pending("PEPE", "2024-01-09T14:00:00Z"));
        ledger.append(pending("SHIB", "2024-01-09T14:05:00Z"));
        let c = ledger.append(pending("PEPE", "2024-01-09T14:10:00Z"));
        ledger.resolve(a, TradeOutcome::Success, Some(3.0)).unwrap();

        let pepe = ledger.query(&TxFilter::new().symbol("PEPE"));
        assert_eq!(pepe.len(), 2);
        assert_eq!(pepe[0].id, a);
        assert_eq!(pepe[1].id, c);

        let succeeded = ledger.query(&TxFilter::new().status(TxStatus::Success));
        assert_eq!(succeeded.len(), 1);

        let windowed = ledger.query(
            &TxFilter::new()
                .since(ts("2024-01-09T14:01:00Z"))
                .until(ts("2024-01-09T14:06:00Z")),
        );
        assert_eq!(windowed.len(), 1);
        assert_eq!(windowed[0].symbol, "SHIB");
    }

    #[test]
    fn test_query_is_a_snapshot() {
        let mut ledger = TransactionLedger::new();
        ledger.append(pending("PEPE", "2024-01-09T14:00:00Z"));

        let before = ledger.query(&TxFilter::new());
        ledger.append(pending("SHIB", "2024-01-09T14:05:00Z"));

        assert_eq!(before.len(), 1);
        assert_eq!(ledger.query(&TxFilter::new()).len(), 2);
    }
}
