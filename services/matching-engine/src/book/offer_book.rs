//! Offer (sell-side) order book
//!
//! Mirror of the bid book: flat backing store with id lookup, eligibility
//! recomputed per incoming bid.

use rust_decimal::Decimal;
use types::ids::OrderId;
use types::order::Order;

use super::BookError;

/// Resting sell orders.
///
/// An incoming bid fills against the cheapest offer first; among equal
/// prices the earliest submitted offer wins.
#[derive(Debug, Clone, Default)]
pub struct OfferBook {
    orders: Vec<Order>,
}

impl OfferBook {
    /// Create a new empty offer book
    pub fn new() -> Self {
        Self { orders: Vec::new() }
    }

    /// Append an offer. Ids are caller-guaranteed unique, so no duplicate check.
    pub fn add(&mut self, order: Order) {
        self.orders.push(order);
    }

    /// Point lookup by id
    pub fn find_by_id(&self, id: OrderId) -> Option<&Order> {
        self.orders.iter().find(|order| order.id == id)
    }

    /// Remove the offer with the given id, returning it.
    ///
    /// A miss is a normal outcome and comes back as [`BookError::OfferNotFound`].
    pub fn remove_by_id(&mut self, id: OrderId) -> Result<Order, BookError> {
        match self.orders.iter().position(|order| order.id == id) {
            Some(index) => Ok(self.orders.remove(index)),
            None => Err(BookError::OfferNotFound(id)),
        }
    }

    /// Decrement the resting quantity of a partially filled offer
    pub fn reduce_quantity(&mut self, id: OrderId, amount: i64) -> Result<(), BookError> {
        let order = self
            .orders
            .iter_mut()
            .find(|order| order.id == id)
            .ok_or(BookError::OfferNotFound(id))?;
        order.quantity -= amount;
        Ok(())
    }

    /// Ids of all offers an incoming bid at `price_limit` may fill against:
    /// price <= limit, ordered by price ascending, ties oldest first.
    pub fn eligible(&self, price_limit: Decimal) -> Vec<OrderId> {
        let mut matches: Vec<&Order> = self
            .orders
            .iter()
            .filter(|order| order.price <= price_limit)
            .collect();
        matches.sort_by(|a, b| a.price.cmp(&b.price).then(a.created_at.cmp(&b.created_at)));
        matches.into_iter().map(|order| order.id).collect()
    }

    /// All resting offers in submission order
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
