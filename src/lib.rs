//! # Single-Instrument Limit Order Matching Engine
//!
//! A deterministic, in-process limit order book for one instrument. Callers
//! submit buy and sell orders; the book keeps price-ordered FIFO queues of
//! resting orders and produces trade executions according to price-time
//! priority. It is intended as the matching core of an exchange simulator or
//! backtester: no wire protocol, no persistence, just matching semantics.
//!
//! ## Key Features
//!
//! - **Price-time priority matching**: among crossing orders, better prices
//!   trade first and, within a price, the earliest-submitted order trades
//!   first. Each execution reports each side's own order price.
//!
//! - **Four order kinds**: good-till-cancel, good-for-day, fill-and-kill
//!   (all-or-nothing, never rests) and market orders, which peg to the worst
//!   opposite price at submission and convert to good-till-cancel.
//!
//! - **Aggregated depth accounting**: per-price remaining quantity and order
//!   counts are maintained alongside the queues, so fill-and-kill feasibility
//!   is decided in time proportional to the number of price levels rather
//!   than the number of orders, and depth snapshots are cheap.
//!
//! - **Coarse-grained thread safety**: one exclusive lock serializes every
//!   operation, reads included, so the trade stream is the deterministic
//!   outcome of the submission sequence no matter which threads submitted.
//!
//! - **Good-for-day expiration**: a background scheduler per book cancels all
//!   good-for-day orders at the next local day boundary, and is signalled,
//!   woken and joined when the book is dropped.
//!
//! ## Example
//!
//! ```
//! use matchbook_rs::{Order, OrderBook, OrderKind, Side};
//!
//! let book = OrderBook::new("BTC-USDT");
//!
//! let bid = Order::limit(OrderKind::GoodTillCancel, 1, Side::Buy, 10_000, 5).unwrap();
//! assert!(book.add_order(bid).unwrap().is_empty()); // rests, no cross
//!
//! let ask = Order::limit(OrderKind::GoodTillCancel, 2, Side::Sell, 10_000, 3).unwrap();
//! let trades = book.add_order(ask).unwrap();
//! assert_eq!(trades.len(), 1);
//! assert_eq!(trades[0].quantity(), 3);
//! assert_eq!(book.len(), 1); // the bid rests with 2 remaining
//! ```

pub mod orderbook;

mod utils;

pub use orderbook::{
    DepthSnapshot, LevelSnapshot, Order, OrderBook, OrderBookError, OrderId, OrderIds, OrderKind,
    OrderModify, Price, Quantity, Side, Trade, TradeInfo, Trades,
};
pub use utils::current_time_millis;
