//! Order book error types

use super::order::{OrderId, Quantity};
use std::fmt;

/// Errors that can occur within the OrderBook.
///
/// Benign outcomes (duplicate identifier on add, unknown identifier on
/// cancel or modify, an infeasible Market or FillAndKill submission) are not
/// errors; those operations return empty results instead. The variants here
/// cover construction errors and contract violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderBookError {
    /// Order constructed with a zero quantity
    InvalidQuantity {
        /// Identifier of the offending order
        order_id: OrderId,
    },

    /// Operation not permitted for the order's kind or state
    InvalidOperation {
        /// Description of the error
        message: String,
    },

    /// An order was asked to fill beyond its remaining quantity. This
    /// indicates a matching-engine bug, not an expected runtime condition.
    Overfill {
        /// Identifier of the order being filled
        order_id: OrderId,
        /// Quantity the fill requested
        requested: Quantity,
        /// Quantity the order still had open
        remaining: Quantity,
    },
}

impl fmt::Display for OrderBookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderBookError::InvalidQuantity { order_id } => {
                write!(f, "Order {} must have a positive quantity", order_id)
            }
            OrderBookError::InvalidOperation { message } => {
                write!(f, "Invalid operation: {}", message)
            }
            OrderBookError::Overfill {
                order_id,
                requested,
                remaining,
            } => {
                write!(
                    f,
                    "Order {} cannot be filled for {} with only {} remaining",
                    order_id, requested, remaining
                )
            }
        }
    }
}

impl std::error::Error for OrderBookError {}
