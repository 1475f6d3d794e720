//! Order modification: an immutable change request replacing a resting order.

use super::book::OrderBook;
use super::error::OrderBookError;
use super::order::{Order, OrderId, OrderKind, Price, Quantity, Side};
use super::trade::Trades;
use tracing::trace;

/// A change request for a resting order. Applying it cancels the existing
/// order and resubmits a replacement with this request's side, price and
/// quantity, carrying the existing order's kind. The replacement goes through
/// the normal submission path, so it takes a new position in time priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderModify {
    order_id: OrderId,
    side: Side,
    price: Price,
    quantity: Quantity,
}

impl OrderModify {
    /// Create a change request for the order with the given identifier
    pub fn new(order_id: OrderId, side: Side, price: Price, quantity: Quantity) -> Self {
        Self {
            order_id,
            side,
            price,
            quantity,
        }
    }

    /// Identifier of the order being replaced
    pub fn order_id(&self) -> OrderId {
        self.order_id
    }

    /// The replacement side
    pub fn side(&self) -> Side {
        self.side
    }

    /// The replacement price
    pub fn price(&self) -> Price {
        self.price
    }

    /// The replacement quantity
    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Build the replacement order, carrying over the existing order's kind
    pub fn to_order(&self, kind: OrderKind) -> Result<Order, OrderBookError> {
        Order::limit(kind, self.order_id, self.side, self.price, self.quantity)
    }
}

impl OrderBook {
    /// Replace a resting order with the request's side, price and quantity,
    /// keeping its kind. The existing order is cancelled first and the
    /// replacement submitted through the normal add path, all under one lock
    /// acquisition. Unknown identifiers are a no-op returning no trades.
    pub fn modify_order(&self, request: OrderModify) -> Result<Trades, OrderBookError> {
        let mut state = self.shared().state.lock();

        let Some(kind) = state
            .orders
            .get(&request.order_id())
            .map(|entry| entry.order.kind())
        else {
            trace!("modify for unknown order {}", request.order_id());
            return Ok(Trades::new());
        };

        // Validate the replacement before touching the book, so a rejected
        // request leaves the existing order resting untouched.
        let replacement = request.to_order(kind)?;
        state.cancel(request.order_id());
        state.submit(replacement)
    }
}
