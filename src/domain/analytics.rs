//! Analytics Engine
//!
//! Pure projections over a ledger snapshot and the current holdings.
//! Nothing here mutates state, and no input — including an empty ledger or
//! a zero-valued wallet — produces NaN or infinity: the dashboard must
//! always have something to render.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use super::portfolio::HoldingsSnapshot;
use super::transaction::Transaction;

/// Best or worst resolved trade, with the asset that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TradeExtreme {
    pub symbol: String,
    pub pnl_pct: f64,
}

/// Aggregate trade statistics for the overview screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TradeStats {
    /// Count of terminal (SUCCESS or FAILED) entries.
    pub total_trades: usize,
    /// Count of terminal entries with P&L > 0.
    pub profitable_trades: usize,
    /// profitable / total x 100; 0 when there are no terminal entries.
    pub win_rate_pct: f64,
    /// Sum of P&L across every entry carrying a P&L value.
    pub total_pnl_pct: f64,
    /// Mean P&L of winning entries; 0 if there are none.
    pub avg_gain_pct: f64,
    /// Mean P&L of losing entries; 0 if there are none.
    pub avg_loss_pct: f64,
    /// Summed traded volume (amount x price) of terminal entries.
    pub total_volume_usd: f64,
    /// None means "no data".
    pub best_trade: Option<TradeExtreme>,
    /// None means "no data".
    pub worst_trade: Option<TradeExtreme>,
}

impl TradeStats {
    pub fn from_ledger(entries: &[Transaction]) -> Self {
        let mut stats = TradeStats::default();
        let mut gains = 0.0;
        let mut gain_count = 0usize;
        let mut losses = 0.0;
        let mut loss_count = 0usize;

        for tx in entries {
            if tx.is_resolved() {
                stats.total_trades += 1;
                stats.total_volume_usd += tx.volume_usd();
            }

            let pnl = match tx.pnl_pct {
                Some(pnl) => pnl,
                None => continue,
            };

            stats.total_pnl_pct += pnl;
            if pnl > 0.0 {
                if tx.is_resolved() {
                    stats.profitable_trades += 1;
                }
                gains += pnl;
                gain_count += 1;
            } else if pnl < 0.0 {
                losses += pnl;
                loss_count += 1;
            }

            if tx.is_resolved() {
                match stats.best_trade {
                    Some(ref best) if best.pnl_pct >= pnl => {}
                    _ => {
                        stats.best_trade = Some(TradeExtreme {
                            symbol: tx.symbol.clone(),
                            pnl_pct: pnl,
                        })
                    }
                }
                match stats.worst_trade {
                    Some(ref worst) if worst.pnl_pct <= pnl => {}
                    _ => {
                        stats.worst_trade = Some(TradeExtreme {
                            symbol: tx.symbol.clone(),
                            pnl_pct: pnl,
                        })
                    }
                }
            }
        }

        if stats.total_trades > 0 {
            stats.win_rate_pct = stats.profitable_trades as f64 / stats.total_trades as f64 * 100.0;
        }
        if gain_count > 0 {
            stats.avg_gain_pct = gains / gain_count as f64;
        }
        if loss_count > 0 {
            stats.avg_loss_pct = losses / loss_count as f64;
        }

        stats
    }
}

/// Per-asset aggregate over resolved entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssetRollup {
    pub symbol: String,
    pub trades: usize,
    pub pnl_pct: f64,
    pub volume_usd: f64,
}

/// Group resolved entries by symbol and rank them: summed P&L descending,
/// ties by trade count descending, then symbol ascending. The ordering is
/// a total order, so re-running on the same snapshot yields the identical
/// ranking.
pub fn asset_rollups(entries: &[Transaction]) -> Vec<AssetRollup> {
    let mut rollups: Vec<AssetRollup> = Vec::new();

    for tx in entries.iter().filter(|tx| tx.is_resolved()) {
        let idx = match rollups.iter().position(|r| r.symbol == tx.symbol) {
            Some(idx) => idx,
            None => {
                rollups.push(AssetRollup {
                    symbol: tx.symbol.clone(),
                    trades: 0,
                    pnl_pct: 0.0,
                    volume_usd: 0.0,
                });
                rollups.len() - 1
            }
        };
        let rollup = &mut rollups[idx];
        rollup.trades += 1;
        rollup.pnl_pct += tx.pnl_pct.unwrap_or(0.0);
        rollup.volume_usd += tx.volume_usd();
    }

    rollups.sort_by(|a, b| {
        b.pnl_pct
            .partial_cmp(&a.pnl_pct)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(b.trades.cmp(&a.trades))
            .then(a.symbol.cmp(&b.symbol))
    });
    rollups
}

/// One asset's share of the portfolio.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioSlice {
    pub symbol: String,
    pub usd_value: f64,
    pub share_pct: f64,
}

/// Portfolio distribution in holding order. A zero-valued portfolio yields
/// all-zero shares, not NaN.
pub fn portfolio_distribution(snapshot: &HoldingsSnapshot) -> Vec<PortfolioSlice> {
    let total = snapshot.total_value_usd();

    snapshot
        .holdings()
        .iter()
        .map(|h| PortfolioSlice {
            symbol: h.symbol.clone(),
            usd_value: h.usd_value,
            share_pct: if total > 0.0 {
                h.usd_value / total * 100.0
            } else {
                0.0
            },
        })
        .collect()
}

/// Summed P&L over the trailing day, week, and month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PeriodPnl {
    pub day_pnl_pct: f64,
    pub week_pnl_pct: f64,
    pub month_pnl_pct: f64,
}

/// P&L of entries carrying a P&L value within the trailing 24h / 7d / 30d
/// windows ending at `now`.
pub fn period_pnl(entries: &[Transaction], now: DateTime<Utc>) -> PeriodPnl {
    let day_start = now - Duration::hours(24);
    let week_start = now - Duration::days(7);
    let month_start = now - Duration::days(30);

    let mut period = PeriodPnl::default();
    for tx in entries {
        let pnl = match tx.pnl_pct {
            Some(pnl) => pnl,
            None => continue,
        };
        if tx.timestamp > now {
            continue;
        }
        if tx.timestamp >= month_start {
            period.month_pnl_pct += pnl;
        }
        if tx.timestamp >= week_start {
            period.week_pnl_pct += pnl;
        }
        if tx.timestamp >= day_start {
            period.day_pnl_pct += pnl;
        }
    }
    period
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::portfolio::Holding;
    use crate::domain::transaction::{TradeDirection, Transaction, TransactionId, TxStatus};
    use approx::assert_relative_eq;

    fn ts(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    fn resolved(
        id: u64,
        symbol: &str,
        direction: TradeDirection,
        amount: f64,
        price: f64,
        pnl: Option<f64>,
        at: &str,
    ) -> Transaction {
        Transaction {
            id: TransactionId(id),
            timestamp: ts(at),
            symbol: symbol.to_string(),
            direction,
            amount,
            price_usd: price,
            gas_eth: 0.005,
            status: TxStatus::Success,
            pnl_pct: pnl,
            tx_hash: "0x1234".to_string(),
        }
    }

    fn pending(id: u64, symbol: &str, at: &str) -> Transaction {
        let mut tx = resolved(id, symbol, TradeDirection::Buy, 0.1, 100.0, None, at);
        tx.status = TxStatus::Pending;
        tx
    }

    #[test]
    fn test_two_trade_scenario() {
        // One winning PEPE buy, one losing SHIB sell.
        let ledger = vec![
            resolved(1, "PEPE", TradeDirection::Buy, 0.1, 245.50, Some(15.2), "2024-01-09T14:32:15Z"),
            resolved(2, "SHIB", TradeDirection::Sell, 1.0, 180.0, Some(-8.5), "2024-01-09T14:28:43Z"),
        ];

        let stats = TradeStats::from_ledger(&ledger);
        assert_eq!(stats.total_trades, 2);
        assert_eq!(stats.profitable_trades, 1);
        assert_relative_eq!(stats.win_rate_pct, 50.0);
        assert_relative_eq!(stats.total_pnl_pct, 6.7, epsilon = 1e-9);
        assert_relative_eq!(stats.avg_gain_pct, 15.2);
        assert_relative_eq!(stats.avg_loss_pct, -8.5);

        let best = stats.best_trade.unwrap();
        assert_eq!(best.symbol, "PEPE");
        assert_relative_eq!(best.pnl_pct, 15.2);

        let worst = stats.worst_trade.unwrap();
        assert_eq!(worst.symbol, "SHIB");
        assert_relative_eq!(worst.pnl_pct, -8.5);
    }

    #[test]
    fn test_empty_ledger_degrades_to_zeros() {
        let stats = TradeStats::from_ledger(&[]);
        assert_eq!(stats.total_trades, 0);
        assert_eq!(stats.win_rate_pct, 0.0);
        assert_eq!(stats.total_pnl_pct, 0.0);
        assert_eq!(stats.avg_gain_pct, 0.0);
        assert_eq!(stats.avg_loss_pct, 0.0);
        assert_eq!(stats.best_trade, None);
        assert_eq!(stats.worst_trade, None);
        assert!(stats.win_rate_pct.is_finite());
    }

    #[test]
    fn test_pending_entries_are_excluded() {
        let ledger = vec![
            pending(1, "FLOKI", "2024-01-09T14:20:55Z"),
            resolved(2, "PEPE", TradeDirection::Buy, 0.1, 245.50, Some(15.2), "2024-01-09T14:32:15Z"),
        ];

        let stats = TradeStats::from_ledger(&ledger);
        assert_eq!(stats.total_trades, 1);
        assert_relative_eq!(stats.total_pnl_pct, 15.2);
        // Volume counts terminal entries only.
        assert_relative_eq!(stats.total_volume_usd, 0.1 * 245.50);
    }

    #[test]
    fn test_failed_trade_without_pnl() {
        let mut failed = resolved(1, "DOGE", TradeDirection::Buy, 0.05, 122.75, None, "2024-01-09T14:25:10Z");
        failed.status = TxStatus::Failed;
        let stats = TradeStats::from_ledger(&[failed]);

        assert_eq!(stats.total_trades, 1);
        assert_eq!(stats.profitable_trades, 0);
        assert_eq!(stats.win_rate_pct, 0.0);
        assert_eq!(stats.total_pnl_pct, 0.0);
        assert_eq!(stats.best_trade, None);
    }

    #[test]
    fn test_rollup_ranking() {
        let ledger = vec![
            resolved(1, "SHIB", TradeDirection::Buy, 1.0, 100.0, Some(10.0), "2024-01-09T10:00:00Z"),
            resolved(2, "PEPE", TradeDirection::Buy, 1.0, 150.0, Some(20.0), "2024-01-09T11:00:00Z"),
            resolved(3, "PEPE", TradeDirection::Sell, 1.0, 150.0, Some(14.2), "2024-01-09T12:00:00Z"),
            resolved(4, "DOGE", TradeDirection::Buy, 1.0, 50.0, Some(10.0), "2024-01-09T13:00:00Z"),
        ];

        let rollups = asset_rollups(&ledger);
        let order: Vec<&str> = rollups.iter().map(|r| r.symbol.as_str()).collect();
        assert_eq!(order, vec!["PEPE", "DOGE", "SHIB"]);

        assert_eq!(rollups[0].trades, 2);
        assert_relative_eq!(rollups[0].pnl_pct, 34.2, epsilon = 1e-9);
        assert_relative_eq!(rollups[0].volume_usd, 300.0);

        // DOGE and SHIB tie on P&L and count; symbol ascending decides.
        assert_eq!(rollups[1].trades, 1);
        assert_eq!(rollups[2].trades, 1);
    }

    #[test]
    fn test_rollup_ranking_is_reproducible() {
        let ledger = vec![
            resolved(1, "BBB", TradeDirection::Buy, 1.0, 10.0, Some(5.0), "2024-01-09T10:00:00Z"),
            resolved(2, "AAA", TradeDirection::Buy, 1.0, 10.0, Some(5.0), "2024-01-09T11:00:00Z"),
            resolved(3, "CCC", TradeDirection::Buy, 1.0, 10.0, Some(5.0), "2024-01-09T12:00:00Z"),
        ];

        let first = asset_rollups(&ledger);
        let second = asset_rollups(&ledger);
        assert_eq!(first, second);

        let order: Vec<&str> = first.iter().map(|r| r.symbol.as_str()).collect();
        assert_eq!(order, vec!["AAA", "BBB", "CCC"]);
    }

    #[test]
    fn test_distribution_shares() {
        let snapshot = HoldingsSnapshot::new(vec![
            Holding::new("ETH", 3.45, 750.0),
            Holding::new("PEPE", 1_000_000.0, 250.0),
        ]);

        let slices = portfolio_distribution(&snapshot);
        assert_relative_eq!(slices[0].share_pct, 75.0);
        assert_relative_eq!(slices[1].share_pct, 25.0);
    }

    #[test]
    fn test_zero_value_portfolio_has_zero_shares() {
        let snapshot = HoldingsSnapshot::new(vec![
            Holding::new("ETH", 0.0, 0.0),
            Holding::new("PEPE", 0.0, 0.0),
        ]);

        for slice in portfolio_distribution(&snapshot) {
            assert_eq!(slice.share_pct, 0.0);
            assert!(slice.share_pct.is_finite());
        }
    }

    #[test]
    fn test_period_buckets() {
        let now = ts("2024-01-31T00:00:00Z");
        let ledger = vec![
            resolved(1, "PEPE", TradeDirection::Buy, 1.0, 10.0, Some(1.0), "2024-01-30T22:00:00Z"),
            resolved(2, "SHIB", TradeDirection::Buy, 1.0, 10.0, Some(2.0), "2024-01-28T00:00:00Z"),
            resolved(3, "DOGE", TradeDirection::Buy, 1.0, 10.0, Some(4.0), "2024-01-11T00:00:00Z"),
            resolved(4, "OLD", TradeDirection::Buy, 1.0, 10.0, Some(8.0), "2023-11-01T00:00:00Z"),
        ];

        let period = period_pnl(&ledger, now);
        assert_relative_eq!(period.day_pnl_pct, 1.0);
        assert_relative_eq!(period.week_pnl_pct, 3.0);
        assert_relative_eq!(period.month_pnl_pct, 7.0);
    }
}
