//! Executed trade records
//!
//! A trade is created exactly once per match event and is immutable after
//! creation; only a full administrative reset removes trades.

use crate::ids::TradeId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An executed trade between an incoming order and a resting order.
///
/// The price is the resting order's price (the incoming order takes
/// whatever price is posted).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    pub id: TradeId,
    pub price: Decimal,
    pub quantity: i64,
    pub trade_time: DateTime<Utc>,
}

impl Trade {
    /// Create a new trade record stamped with the current time
    pub fn new(price: Decimal, quantity: i64) -> Self {
        Self {
            id: TradeId::new(),
            price,
            quantity,
            trade_time: Utc::now(),
        }
    }
}
