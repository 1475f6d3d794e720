//! Execution records produced by the matching engine.

use super::order::{OrderId, Price, Quantity};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One side's view of an execution: the order that traded, that order's own
/// limit price (not a negotiated execution price) and the traded quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeInfo {
    /// Identifier of the order on this side of the trade
    pub order_id: OrderId,
    /// This side's own order price
    pub price: Price,
    /// Quantity exchanged
    pub quantity: Quantity,
}

impl TradeInfo {
    /// Create a trade record for one side of an execution
    pub fn new(order_id: OrderId, price: Price, quantity: Quantity) -> Self {
        Self {
            order_id,
            price,
            quantity,
        }
    }
}

/// A single execution between the front bid and front ask at the touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    /// The bid side of the execution
    pub bid: TradeInfo,
    /// The ask side of the execution
    pub ask: TradeInfo,
}

impl Trade {
    /// Create a trade from its two sides
    pub fn new(bid: TradeInfo, ask: TradeInfo) -> Self {
        Self { bid, ask }
    }

    /// The quantity exchanged; identical on both sides
    pub fn quantity(&self) -> Quantity {
        self.bid.quantity
    }
}

impl fmt::Display for Trade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "trade {} x (bid {} @ {} / ask {} @ {})",
            self.quantity(),
            self.bid.order_id,
            self.bid.price,
            self.ask.order_id,
            self.ask.price
        )
    }
}

/// The sequence of trades produced by one submission
pub type Trades = Vec<Trade>;
