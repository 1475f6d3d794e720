//! Order book operations like adding, canceling and inspecting orders

use super::book::OrderBook;
use super::error::OrderBookError;
use super::order::{Order, OrderId, OrderIds};
use super::trade::Trades;
use tracing::trace;

impl OrderBook {
    /// Submit an order to the book and match it to exhaustion, returning the
    /// trades it produced. An empty sequence means the order was rejected
    /// (duplicate identifier, infeasible market or fill-and-kill submission)
    /// or found no cross and came to rest.
    pub fn add_order(&self, order: Order) -> Result<Trades, OrderBookError> {
        trace!("adding order {}", order);
        let mut state = self.shared().state.lock();
        state.submit(order)
    }

    /// Cancel a resting order by identifier. Unknown identifiers are a no-op.
    pub fn cancel_order(&self, order_id: OrderId) {
        let mut state = self.shared().state.lock();
        state.cancel(order_id);
    }

    /// Cancel a batch of orders under a single lock acquisition. Used by the
    /// expiration scheduler; unknown identifiers are skipped.
    pub fn cancel_orders(&self, order_ids: &OrderIds) {
        let mut state = self.shared().state.lock();
        for &order_id in order_ids {
            state.cancel(order_id);
        }
    }

    /// The number of resting orders
    pub fn len(&self) -> usize {
        self.shared().state.lock().len()
    }

    /// Whether the book holds no resting orders
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look up a resting order by identifier, returning a copy of its
    /// current state
    pub fn get_order(&self, order_id: OrderId) -> Option<Order> {
        let state = self.shared().state.lock();
        state.orders.get(&order_id).map(|entry| entry.order.clone())
    }
}
