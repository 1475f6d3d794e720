//! Order domain types: sides, order kinds and the resting order entity.

use super::error::OrderBookError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Price in minor currency units. Signed so spreads and differences stay in-domain.
pub type Price = i64;

/// Order quantity. Zero is rejected at construction.
pub type Quantity = u64;

/// Caller-assigned order identifier, expected unique per book.
pub type OrderId = u64;

/// A batch of order identifiers, as used by batch cancellation.
pub type OrderIds = Vec<OrderId>;

/// The side of an order in the book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Buy side (bids)
    Buy,
    /// Sell side (asks)
    Sell,
}

impl Side {
    /// Returns the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => write!(f, "BUY"),
            Side::Sell => write!(f, "SELL"),
        }
    }
}

/// The kind of an order, deciding its submission and lifetime semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderKind {
    /// Pegged to the worst opposite price at submission, then converted to GoodTillCancel
    Market,
    /// Rests until filled or cancelled
    GoodTillCancel,
    /// Executes immediately and completely or not at all; never rests
    FillAndKill,
    /// Rests until filled, cancelled, or expired at the next day boundary
    GoodForDay,
}

impl fmt::Display for OrderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderKind::Market => write!(f, "MKT"),
            OrderKind::GoodTillCancel => write!(f, "GTC"),
            OrderKind::FillAndKill => write!(f, "FAK"),
            OrderKind::GoodForDay => write!(f, "GFD"),
        }
    }
}

/// A single order. The identity, side and initial quantity are fixed at
/// construction; only the remaining quantity decreases as fills occur, and a
/// Market order may have its price resolved exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    kind: OrderKind,
    id: OrderId,
    side: Side,
    /// `None` only while a Market order awaits price resolution
    price: Option<Price>,
    initial_quantity: Quantity,
    remaining_quantity: Quantity,
}

impl Order {
    /// Create a new order. Fails if the quantity is zero, or if a non-market
    /// order is given no price.
    pub fn new(
        kind: OrderKind,
        id: OrderId,
        side: Side,
        price: Option<Price>,
        quantity: Quantity,
    ) -> Result<Self, OrderBookError> {
        if quantity == 0 {
            return Err(OrderBookError::InvalidQuantity { order_id: id });
        }
        if kind != OrderKind::Market && price.is_none() {
            return Err(OrderBookError::InvalidOperation {
                message: format!("order {id} of kind {kind} requires a limit price"),
            });
        }
        Ok(Self {
            kind,
            id,
            side,
            price,
            initial_quantity: quantity,
            remaining_quantity: quantity,
        })
    }

    /// Create a limit-priced order of the given kind.
    pub fn limit(
        kind: OrderKind,
        id: OrderId,
        side: Side,
        price: Price,
        quantity: Quantity,
    ) -> Result<Self, OrderBookError> {
        Self::new(kind, id, side, Some(price), quantity)
    }

    /// Create a market order with no price yet.
    pub fn market(id: OrderId, side: Side, quantity: Quantity) -> Result<Self, OrderBookError> {
        Self::new(OrderKind::Market, id, side, None, quantity)
    }

    /// The caller-assigned identifier
    pub fn id(&self) -> OrderId {
        self.id
    }

    /// The side of the order
    pub fn side(&self) -> Side {
        self.side
    }

    /// The current kind of the order
    pub fn kind(&self) -> OrderKind {
        self.kind
    }

    /// The limit price, or `None` for a Market order whose price is unresolved
    pub fn price(&self) -> Option<Price> {
        self.price
    }

    /// The quantity the order was created with
    pub fn initial_quantity(&self) -> Quantity {
        self.initial_quantity
    }

    /// The quantity still open
    pub fn remaining_quantity(&self) -> Quantity {
        self.remaining_quantity
    }

    /// The quantity traded away so far
    pub fn filled_quantity(&self) -> Quantity {
        self.initial_quantity - self.remaining_quantity
    }

    /// Whether the order is fully filled
    pub fn is_filled(&self) -> bool {
        self.remaining_quantity == 0
    }

    /// Reduce the remaining quantity by a matched amount. Filling beyond the
    /// remaining quantity signals a matching bug and is reported as an error.
    pub(crate) fn fill(&mut self, quantity: Quantity) -> Result<(), OrderBookError> {
        if quantity > self.remaining_quantity {
            return Err(OrderBookError::Overfill {
                order_id: self.id,
                requested: quantity,
                remaining: self.remaining_quantity,
            });
        }
        self.remaining_quantity -= quantity;
        Ok(())
    }

    /// Resolve a Market order to a concrete price, converting it to
    /// GoodTillCancel. Valid at most once, and only while the kind is Market.
    pub(crate) fn to_good_till_cancel(&mut self, price: Price) -> Result<(), OrderBookError> {
        if self.kind != OrderKind::Market {
            return Err(OrderBookError::InvalidOperation {
                message: format!(
                    "order {} has kind {}, only market orders can have their price adjusted",
                    self.id, self.kind
                ),
            });
        }
        self.price = Some(price);
        self.kind = OrderKind::GoodTillCancel;
        Ok(())
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.price {
            Some(price) => write!(
                f,
                "{} {} {} {}/{} @ {}",
                self.kind, self.side, self.id, self.remaining_quantity, self.initial_quantity, price
            ),
            None => write!(
                f,
                "{} {} {} {}/{} @ -",
                self.kind, self.side, self.id, self.remaining_quantity, self.initial_quantity
            ),
        }
    }
}
