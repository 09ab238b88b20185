//! Order types
//!
//! An incoming request is resolved by the transport layer into a typed
//! [`OrderRequest`]; the matching engine never sees raw payloads. Accepted
//! residual quantity rests in a book as an [`Order`].

use crate::ids::OrderId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Order side (buyer or seller)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Buy order
    Bid,
    /// Sell order
    Offer,
}

impl Side {
    /// Get the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Side::Bid => Side::Offer,
            Side::Offer => Side::Bid,
        }
    }

    /// Lowercase noun used mid-sentence ("bid" / "offer")
    pub fn noun(&self) -> &'static str {
        match self {
            Side::Bid => "bid",
            Side::Offer => "offer",
        }
    }

    /// Capitalized noun used at sentence start ("Bid" / "Offer")
    pub fn title(&self) -> &'static str {
        match self {
            Side::Bid => "Bid",
            Side::Offer => "Offer",
        }
    }
}

/// Typed payload for a submitted bid or offer.
///
/// A request body that cannot be deserialized into this shape is a
/// structural error and never reaches the matching engine. A non-integral
/// quantity fails here; a non-positive one fails business validation later.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct OrderRequest {
    pub price: Decimal,
    pub quantity: i64,
}

/// A resting order in one of the two books.
///
/// `quantity` stays above zero while the order rests; partial fills
/// decrement it and a fill to zero removes the order from its book.
/// `price` is always the 2-decimal truncated submission price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub side: Side,
    pub price: Decimal,
    pub quantity: i64,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Create a new resting order with a fresh id and the current timestamp
    pub fn new(side: Side, price: Decimal, quantity: i64) -> Self {
        Self {
            id: OrderId::new(),
            side,
            price,
            quantity,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_opposite() {
        assert_eq!(Side::Bid.opposite(), Side::Offer);
        assert_eq!(Side::Offer.opposite(), Side::Bid);
    }

    #[test]
    fn test_side_nouns() {
        assert_eq!(Side::Bid.noun(), "bid");
        assert_eq!(Side::Offer.title(), "Offer");
    }

    #[test]
    fn test_order_request_from_json() {
        let request: OrderRequest = serde_json::from_str(r#"{"price": 100.5, "quantity": 10}"#).unwrap();
        assert_eq!(request.price, Decimal::new(1005, 1));
        assert_eq!(request.quantity, 10);
    }

    #[test]
    fn test_order_request_rejects_fractional_quantity() {
        let result = serde_json::from_str::<OrderRequest>(r#"{"price": 100, "quantity": 10.5}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_order_request_rejects_missing_field() {
        let result = serde_json::from_str::<OrderRequest>(r#"{"price": 100}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_order_serializes_camel_case() {
        let order = Order::new(Side::Bid, Decimal::new(10050, 2), 5);
        let json = serde_json::to_value(&order).unwrap();
        assert!(json.get("createdAt").is_some());
        assert_eq!(json["side"], "bid");
        assert_eq!(json["quantity"], 5);
    }
}
