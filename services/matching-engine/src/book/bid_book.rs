//! Bid (buy-side) order book
//!
//! Flat backing store with id lookup. Eligibility is recomputed fresh for
//! every incoming offer, so no persistent price index is kept; sorting a
//! snapshot per query is fine at this scale.

use rust_decimal::Decimal;
use types::ids::OrderId;
use types::order::Order;

use super::BookError;

/// Resting buy orders.
///
/// An incoming offer fills against the highest-paying bid first; among
/// equal prices the earliest submitted bid wins.
#[derive(Debug, Clone, Default)]
pub struct BidBook {
    orders: Vec<Order>,
}

impl BidBook {
    /// Create a new empty bid book
    pub fn new() -> Self {
        Self { orders: Vec::new() }
    }

    /// Append a bid. Ids are caller-guaranteed unique, so no duplicate check.
    pub fn add(&mut self, order: Order) {
        self.orders.push(order);
    }

    /// Point lookup by id
    pub fn find_by_id(&self, id: OrderId) -> Option<&Order> {
        self.orders.iter().find(|order| order.id == id)
    }

    /// Remove the bid with the given id, returning it.
    ///
    /// A miss is a normal outcome and comes back as [`BookError::BidNotFound`].
    pub fn remove_by_id(&mut self, id: OrderId) -> Result<Order, BookError> {
        match self.orders.iter().position(|order| order.id == id) {
            Some(index) => Ok(self.orders.remove(index)),
            None => Err(BookError::BidNotFound(id)),
        }
    }

    /// Decrement the resting quantity of a partially filled bid
    pub fn reduce_quantity(&mut self, id: OrderId, amount: i64) -> Result<(), BookError> {
        let order = self
            .orders
            .iter_mut()
            .find(|order| order.id == id)
            .ok_or(BookError::BidNotFound(id))?;
        order.quantity -= amount;
        Ok(())
    }

    /// Ids of all bids an incoming offer at `price_limit` may fill against:
    /// price >= limit, ordered by price descending, ties oldest first.
    pub fn eligible(&self, price_limit: Decimal) -> Vec<OrderId> {
        let mut matches: Vec<&Order> = self
            .orders
            .iter()
            .filter(|order| order.price >= price_limit)
            .collect();
        matches.sort_by(|a, b| b.price.cmp(&a.price).then(a.created_at.cmp(&b.created_at)));
        matches.into_iter().map(|order| order.id).collect()
    }

    /// All resting bids in submission order
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Empty the book (administrative reset)
    pub fn clear(&mut self) {
        self.orders.clear();
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
