//! Reference price source
//!
//! The matching engine reads the current market price synchronously; the
//! value is either a fixed configured price (test/mock mode) or the last
//! value a background fetch task wrote into a single shared slot. Nothing
//! else crosses the boundary between the fetch job and the engine.

use rust_decimal::Decimal;
use std::sync::{Arc, PoisonError, RwLock};

/// Single-slot, read-mostly cell holding the last fetched price.
///
/// Writes come from the periodic fetch task, reads from the matching
/// engine. A poisoned lock degrades to the last stored value.
#[derive(Debug)]
pub struct PriceCell {
    slot: RwLock<Decimal>,
}

impl PriceCell {
    pub fn new(initial: Decimal) -> Self {
        Self {
            slot: RwLock::new(initial),
        }
    }

    /// Replace the stored price
    pub fn store(&self, price: Decimal) {
        let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        *slot = price;
    }

    /// Read the most recently stored price
    pub fn load(&self) -> Decimal {
        *self.slot.read().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Where the engine gets its reference price from
#[derive(Debug)]
pub enum ReferencePriceSource {
    /// Fixed configured value, used when no external feed is wired up
    Fixed(Decimal),
    /// Shared slot written by the periodic external fetch task
    Feed(Arc<PriceCell>),
}

impl ReferencePriceSource {
    /// Current reference market price
    pub fn current_price(&self) -> Decimal {
        match self {
            ReferencePriceSource::Fixed(price) => *price,
            ReferencePriceSource::Feed(cell) => cell.load(),
        }
    }
}
