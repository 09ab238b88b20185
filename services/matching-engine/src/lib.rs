//! Matching engine for the single-security exchange simulator
//!
//! Validates incoming bids and offers against a band around the reference
//! market price, matches them against the opposite book in price-time
//! priority, records resulting trades, and books any unmatched residual.
//!
//! **Key invariants:**
//! - Price-time priority strictly enforced
//! - Trades always execute at the resting order's price
//! - Conservation of quantity: fills + residual = accepted quantity
//! - One order's match is a single atomic unit of work

pub mod book;
pub mod engine;
pub mod ledger;
pub mod price;
pub mod validation;

pub use engine::Exchange;
pub use price::{PriceCell, ReferencePriceSource};
