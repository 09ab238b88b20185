//! Exchange dispatcher
//!
//! Owns the two books, the trade ledger, and the reference price source.
//! Handling one incoming order is a single synchronous unit of work:
//! validate, walk the opposite book in priority order, record trades,
//! book the residual, compose the response. Callers serving concurrent
//! clients must serialize calls; the walk mutates book contents.

use rust_decimal::Decimal;

use types::ids::OrderId;
use types::numeric::{display_price, truncate_price};
use types::order::{Order, OrderRequest, Side};
use types::response::Response;
use types::trade::Trade;

use crate::book::{BidBook, OfferBook};
use crate::ledger::TradeLedger;
use crate::price::ReferencePriceSource;
use crate::validation;

/// The matching engine for a single security
#[derive(Debug)]
pub struct Exchange {
    bids: BidBook,
    offers: OfferBook,
    ledger: TradeLedger,
    price_source: ReferencePriceSource,
}

impl Exchange {
    /// Create an exchange backed by the given reference price source
    pub fn new(price_source: ReferencePriceSource) -> Self {
        Self {
            bids: BidBook::new(),
            offers: OfferBook::new(),
            ledger: TradeLedger::new(),
            price_source,
        }
    }

    /// Create an exchange with a fixed reference price (test/mock mode)
    pub fn with_fixed_price(price: Decimal) -> Self {
        Self::new(ReferencePriceSource::Fixed(price))
    }

    /// Current reference market price
    pub fn current_price(&self) -> Decimal {
        self.price_source.current_price()
    }

    /// Handle an incoming bid: validate it against the price band, fill it
    /// against resting offers (cheapest first, oldest first on ties), and
    /// book any residual quantity.
    pub fn handle_bid(&mut self, request: OrderRequest) -> Response {
        let price = truncate_price(request.price);
        if let Err(reject) = validation::validate_bid(price, request.quantity, self.current_price())
        {
            return Response::rejected(reject.to_string());
        }

        let mut order = Order::new(Side::Bid, price, request.quantity);
        let original_quantity = order.quantity;
        let mut fills = String::new();

        for id in self.offers.eligible(order.price) {
            let Some(resting) = self.offers.find_by_id(id) else {
                continue;
            };
            let resting_price = resting.price;
            let resting_quantity = resting.quantity;

            if order.quantity == resting_quantity {
                self.ledger.record(resting_price, order.quantity);
                fills.push_str(&trade_clause(Side::Offer, id, resting_price, order.quantity));
                let _ = self.offers.remove_by_id(id);
                order.quantity = 0;
                break;
            } else if order.quantity < resting_quantity {
                self.ledger.record(resting_price, order.quantity);
                fills.push_str(&trade_clause(Side::Offer, id, resting_price, order.quantity));
                let _ = self.offers.reduce_quantity(id, order.quantity);
                order.quantity = 0;
                break;
            } else {
                self.ledger.record(resting_price, resting_quantity);
                fills.push_str(&trade_clause(Side::Offer, id, resting_price, resting_quantity));
                let _ = self.offers.remove_by_id(id);
                order.quantity -= resting_quantity;
            }
        }

        let record_id = order.id;
        let message = placement_message(Side::Bid, order.price, original_quantity, &fills);
        if order.quantity > 0 {
            self.bids.add(order);
        }
        Response::placed(message, record_id)
    }

    /// Handle an incoming offer: the mirror of [`Exchange::handle_bid`],
    /// filling against resting bids (highest first, oldest first on ties).
    pub fn handle_offer(&mut self, request: OrderRequest) -> Response {
        let price = truncate_price(request.price);
        if let Err(reject) =
            validation::validate_offer(price, request.quantity, self.current_price())
        {
            return Response::rejected(reject.to_string());
        }

        let mut order = Order::new(Side::Offer, price, request.quantity);
        let original_quantity = order.quantity;
        let mut fills = String::new();

        for id in self.bids.eligible(order.price) {
            let Some(resting) = self.bids.find_by_id(id) else {
                continue;
            };
            let resting_price = resting.price;
            let resting_quantity = resting.quantity;

            if order.quantity == resting_quantity {
                self.ledger.record(resting_price, order.quantity);
                fills.push_str(&trade_clause(Side::Bid, id, resting_price, order.quantity));
                let _ = self.bids.remove_by_id(id);
                order.quantity = 0;
                break;
            } else if order.quantity < resting_quantity {
                self.ledger.record(resting_price, order.quantity);
                fills.push_str(&trade_clause(Side::Bid, id, resting_price, order.quantity));
                let _ = self.bids.reduce_quantity(id, order.quantity);
                order.quantity = 0;
                break;
            } else {
                self.ledger.record(resting_price, resting_quantity);
                fills.push_str(&trade_clause(Side::Bid, id, resting_price, resting_quantity));
                let _ = self.bids.remove_by_id(id);
                order.quantity -= resting_quantity;
            }
        }

        let record_id = order.id;
        let message = placement_message(Side::Offer, order.price, original_quantity, &fills);
        if order.quantity > 0 {
            self.offers.add(order);
        }
        Response::placed(message, record_id)
    }

    /// All recorded trades in chronological order
    pub fn list_trades(&self) -> Vec<Trade> {
        self.ledger.list()
    }

    /// All resting bids in submission order
    pub fn list_bids(&self) -> &[Order] {
        self.bids.orders()
    }

    /// All resting offers in submission order
    pub fn list_offers(&self) -> &[Order] {
        self.offers.orders()
    }

    /// Clear both books and the ledger (administrative/test operation)
    pub fn reset(&mut self) {
        self.bids.clear();
        self.offers.clear();
        self.ledger.clear();
    }
}

/// Success message header; reports the originally requested quantity even
/// when the order was partially or fully matched.
fn placement_message(side: Side, price: Decimal, original_quantity: i64, fills: &str) -> String {
    format!(
        "{} successfully placed with the price of {} and quantity of {}.{}",
        side.title(),
        display_price(price),
        original_quantity,
        fills
    )
}

/// One clause per executed fill, priced at the resting order's price
fn trade_clause(resting_side: Side, resting_id: OrderId, price: Decimal, quantity: i64) -> String {
    format!(
        " Trade made with {} {} with price {} and quantity {}.",
        resting_side.noun(),
        resting_id,
        display_price(price),
        quantity
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn exchange_at_100() -> Exchange {
        Exchange::with_fixed_price(Decimal::from(100))
    }

    fn request(price: &str, quantity: i64) -> OrderRequest {
        OrderRequest {
            price: dec(price),
            quantity,
        }
    }

    #[test]
    fn test_bid_books_when_no_offers_rest() {
        let mut exchange = exchange_at_100();

        let response = exchange.handle_bid(request("100", 100));

        assert!(response.success);
        assert_eq!(
            response.success_message.as_deref(),
            Some("Bid successfully placed with the price of 100 and quantity of 100.")
        );
        assert!(response.record_id.is_some());
        assert_eq!(exchange.list_bids().len(), 1);
        assert!(exchange.list_trades().is_empty());
    }

    #[test]
    fn test_full_match_empties_both_sides() {
        // Scenario: equal price and quantity meet head on
        let mut exchange = exchange_at_100();
        exchange.handle_bid(request("100", 100));

        let response = exchange.handle_offer(request("100", 100));

        assert!(response.success);
        let trades = exchange.list_trades();
        assert_eq!(trades.len(), 1);
        assert_eq!(trades[0].price, Decimal::from(100));
        assert_eq!(trades[0].quantity, 100);
        assert!(exchange.list_bids().is_empty());
        assert!(exchange.list_offers().is_empty());
    }

    #[test]
    fn test_partial_fill_leaves_residual_bid() {
        let mut exchange = exchange_at_100();
        exchange.handle_bid(request("100", 200));

        exchange.handle_offer(request("100", 100));

        let trades = exchange.list_trades();
        assert_eq!(trades.len(), 1);
        assert_eq!(trades[0].quantity, 100);

        let bids = exchange.list_bids();
        assert_eq!(bids.len(), 1);
        assert_eq!(bids[0].quantity, 100);
        assert!(exchange.list_offers().is_empty());
    }

    #[test]
    fn test_incoming_offer_takes_highest_bid_first() {
        let mut exchange = exchange_at_100();
        exchange.handle_bid(request("90", 10));
        exchange.handle_bid(request("100", 10));
        exchange.handle_bid(request("110", 10));

        exchange.handle_offer(request("90", 10));

        let trades = exchange.list_trades();
        assert_eq!(trades.len(), 1);
        assert_eq!(trades[0].price, Decimal::from(110));
        assert_eq!(exchange.list_bids().len(), 2);
    }

    #[test]
    fn test_incoming_bid_takes_cheapest_offer_first() {
        let mut exchange = exchange_at_100();
        exchange.handle_offer(request("110", 10));
        exchange.handle_offer(request("100", 10));
        exchange.handle_offer(request("90", 10));

        exchange.handle_bid(request("110", 10));

        let trades = exchange.list_trades();
        assert_eq!(trades.len(), 1);
        assert_eq!(trades[0].price, Decimal::from(90));
        assert_eq!(exchange.list_offers().len(), 2);
    }

    #[test]
    fn test_equal_prices_fill_oldest_first() {
        let mut exchange = exchange_at_100();
        let first = exchange.handle_bid(request("100", 10)).record_id.unwrap();
        let second = exchange.handle_bid(request("100", 10)).record_id.unwrap();

        exchange.handle_offer(request("100", 10));

        let bids = exchange.list_bids();
        assert_eq!(bids.len(), 1);
        assert_eq!(bids[0].id, second);
        assert_ne!(bids[0].id, first);
    }

    #[test]
    fn test_offer_sweeps_multiple_bids() {
        // Three-way split: the offer clears the best bid entirely, then
        // partially fills the next one, leaving lower bids untouched
        let reference = Decimal::from(100);
        let mut exchange = Exchange::with_fixed_price(reference);

        let bid1 = exchange.handle_bid(request("100", 100)).record_id.unwrap();
        // 80 is below the band; never books
        let rejected = exchange.handle_offer(request("80", 200));
        assert!(!rejected.success);
        let bid2 = exchange.handle_bid(request("101", 200)).record_id.unwrap();
        exchange.handle_bid(request("95", 50));
        exchange.handle_bid(request("100", 30));

        let response = exchange.handle_offer(request("100", 250));
        assert!(response.success);

        let trades = exchange.list_trades();
        assert_eq!(trades.len(), 2);
        assert_eq!(trades[0].price, Decimal::from(101));
        assert_eq!(trades[0].quantity, 200);
        assert_eq!(trades[1].price, Decimal::from(100));
        assert_eq!(trades[1].quantity, 50);

        // bid2 is gone, bid1 kept its residual, the late/low bids are untouched
        let bids = exchange.list_bids();
        assert!(bids.iter().all(|bid| bid.id != bid2));
        assert_eq!(
            bids.iter().find(|bid| bid.id == bid1).unwrap().quantity,
            50
        );
        assert_eq!(bids.len(), 3);
        assert!(exchange.list_offers().is_empty());
    }

    #[test]
    fn test_success_message_reports_original_quantity_and_fills() {
        let mut exchange = exchange_at_100();
        let resting = exchange.handle_bid(request("100", 100)).record_id.unwrap();

        let response = exchange.handle_offer(request("100", 150));

        let message = response.success_message.unwrap();
        assert_eq!(
            message,
            format!(
                "Offer successfully placed with the price of 100 and quantity of 150. \
                 Trade made with bid {resting} with price 100 and quantity 100."
            )
        );
        // Residual 50 rests as an offer
        assert_eq!(exchange.list_offers()[0].quantity, 50);
    }

    #[test]
    fn test_trade_clause_uses_resting_price() {
        // Incoming bid at 105 hits an offer resting at 95: the trade and
        // the clause both carry 95, never the incoming price
        let mut exchange = exchange_at_100();
        let resting = exchange.handle_offer(request("95", 10)).record_id.unwrap();

        let response = exchange.handle_bid(request("105", 10));

        let message = response.success_message.unwrap();
        assert_eq!(
            message,
            format!(
                "Bid successfully placed with the price of 105 and quantity of 10. \
                 Trade made with offer {resting} with price 95 and quantity 10."
            )
        );
        assert_eq!(exchange.list_trades()[0].price, Decimal::from(95));
    }

    #[test]
    fn test_submitted_price_is_truncated_before_matching() {
        let mut exchange = exchange_at_100();

        let response = exchange.handle_bid(request("100.999", 10));

        assert!(response.success);
        assert_eq!(
            response.success_message.as_deref(),
            Some("Bid successfully placed with the price of 100.99 and quantity of 10.")
        );
        assert_eq!(exchange.list_bids()[0].price, dec("100.99"));
    }

    #[test]
    fn test_rejected_bid_has_no_side_effects() {
        let mut exchange = exchange_at_100();

        let response = exchange.handle_bid(request("110.01", 10));

        assert!(!response.success);
        assert_eq!(
            response.error_message.as_deref(),
            Some("Bid price is too high. Highest accepted price at the moment is 110.")
        );
        assert!(response.record_id.is_none());
        assert!(exchange.list_bids().is_empty());
        assert!(exchange.list_trades().is_empty());
    }

    #[test]
    fn test_rejected_offer_has_no_side_effects() {
        let mut exchange = exchange_at_100();
        exchange.handle_bid(request("100", 10));

        let response = exchange.handle_offer(request("80", 0));

        assert!(!response.success);
        assert_eq!(
            response.error_message.as_deref(),
            Some("Something went terribly wrong, offer quantity AND offer price were invalid")
        );
        assert!(exchange.list_offers().is_empty());
        assert!(exchange.list_trades().is_empty());
    }

    #[test]
    fn test_fully_matched_order_still_gets_record_id() {
        let mut exchange = exchange_at_100();
        exchange.handle_bid(request("100", 10));

        let response = exchange.handle_offer(request("100", 10));

        assert!(response.record_id.is_some());
        assert!(exchange.list_offers().is_empty());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut exchange = exchange_at_100();
        exchange.handle_bid(request("100", 10));
        exchange.handle_offer(request("100", 5));
        exchange.handle_offer(request("110", 5));

        exchange.reset();

        assert!(exchange.list_bids().is_empty());
        assert!(exchange.list_offers().is_empty());
        assert!(exchange.list_trades().is_empty());
    }

    #[test]
    fn test_resting_order_absorbs_multiple_incoming_orders() {
        let mut exchange = exchange_at_100();
        exchange.handle_bid(request("100", 100));

        exchange.handle_offer(request("100", 30));
        exchange.handle_offer(request("100", 30));

        let trades = exchange.list_trades();
        assert_eq!(trades.len(), 2);
        assert_eq!(exchange.list_bids()[0].quantity, 40);
    }

    proptest! {
        // Conservation: fills plus residuals equal accepted quantity
        #[test]
        fn matched_plus_resting_equals_accepted(
            orders in prop::collection::vec(
                (0u8..2, 9000i64..=11000, 1i64..100),
                1..40,
            )
        ) {
            let mut exchange = exchange_at_100();
            let mut accepted = 0i64;

            for (side, cents, quantity) in orders {
                let request = OrderRequest {
                    price: Decimal::new(cents, 2),
                    quantity,
                };
                let response = if side == 0 {
                    exchange.handle_bid(request)
                } else {
                    exchange.handle_offer(request)
                };
                prop_assert!(response.success);
                accepted += quantity;
            }

            let traded: i64 = exchange.list_trades().iter().map(|t| t.quantity).sum();
            let resting: i64 = exchange
                .list_bids()
                .iter()
                .chain(exchange.list_offers().iter())
                .map(|o| o.quantity)
                .sum();

            // Every executed trade consumes quantity from both sides
            prop_assert_eq!(2 * traded + resting, accepted);
        }
    }
}
