//! Trade ledger
//!
//! Append-only store of executed trades. Records are immutable once
//! written; only an administrative reset clears them.

use rust_decimal::Decimal;
use types::trade::Trade;

/// Append-only trade ledger
#[derive(Debug, Clone, Default)]
pub struct TradeLedger {
    trades: Vec<Trade>,
}

impl TradeLedger {
    /// Create a new empty ledger
    pub fn new() -> Self {
        Self { trades: Vec::new() }
    }

    /// Record an executed trade.
    ///
    /// Silently records nothing for a non-positive price or quantity; the
    /// matching walk never produces such values, but the guard stays.
    pub fn record(&mut self, price: Decimal, quantity: i64) {
        if price <= Decimal::ZERO || quantity <= 0 {
            return;
        }
        self.trades.push(Trade::new(price, quantity));
    }

    /// All trades in chronological order (stable on equal timestamps)
    pub fn list(&self) -> Vec<Trade> {
        let mut trades = self.trades.clone();
        trades.sort_by_key(|trade| trade.trade_time);
        trades
    }

    /// Empty the ledger (administrative reset)
    pub fn clear(&mut self) {
        self.trades.clear();
    }

    pub fn len(&self) -> usize {
        self.trades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trades.is_empty()
    }
}
