//! OrderBook implementation for managing price levels and order matching.

pub mod book;
mod depth;
mod error;
mod expiration;
mod matching;
mod modifications;
mod operations;
mod order;
mod snapshot;
mod trade;

pub use book::OrderBook;
pub use error::OrderBookError;
pub use modifications::OrderModify;
pub use order::{Order, OrderId, OrderIds, OrderKind, Price, Quantity, Side};
pub use snapshot::{DepthSnapshot, LevelSnapshot};
pub use trade::{Trade, TradeInfo, Trades};
