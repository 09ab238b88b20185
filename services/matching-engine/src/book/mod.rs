//! Order book module
//!
//! One owned container per side. Each book holds the orders it rests,
//! exposes priority-ordered eligibility queries, and is only ever mutated
//! through its own methods during a matching walk.

pub mod bid_book;
pub mod offer_book;

pub use bid_book::BidBook;
pub use offer_book::OfferBook;

use thiserror::Error;
use types::ids::OrderId;

/// Removal misses are an expected outcome, not a failure; the message is
/// the informational text surfaced to callers.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BookError {
    #[error("Bid with id {0} was not found.")]
    BidNotFound(OrderId),

    #[error("Offer with id {0} was not found.")]
    OfferNotFound(OrderId),
}
