//! Core OrderBook implementation for managing price levels and orders

use super::depth::DepthTracker;
use super::expiration;
use super::order::{Order, OrderId, OrderKind, Price, Side};
use super::snapshot::{DepthSnapshot, LevelSnapshot};
use crate::utils::current_time_millis;
use parking_lot::{Condvar, Mutex};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use std::thread::JoinHandle;
use tracing::{debug, trace};

/// FIFO queue of one price level, keyed by insertion sequence number.
/// Ascending key order is time priority; the sequence number recorded in the
/// registry makes targeted removal cheap without scanning the queue.
pub(super) type LevelQueue = BTreeMap<u64, OrderId>;

/// Registry entry: the canonical owner of a resting order, together with its
/// exact position (price level and insertion sequence) in the book.
#[derive(Debug)]
pub(super) struct OrderEntry {
    pub(super) order: Order,
    pub(super) price: Price,
    pub(super) seq: u64,
}

/// All structural state of the book. Every access goes through the one
/// exclusive lock in [`BookShared`]; the methods here assume the lock is held.
#[derive(Debug)]
pub(super) struct BookState {
    /// Bid price levels; the best bid is the last key
    pub(super) bids: BTreeMap<Price, LevelQueue>,
    /// Ask price levels; the best ask is the first key
    pub(super) asks: BTreeMap<Price, LevelQueue>,
    /// Order registry: identifier to order and queue position
    pub(super) orders: HashMap<OrderId, OrderEntry>,
    /// Aggregate quantity and order count per active price
    pub(super) depth: DepthTracker,
    next_seq: u64,
}

impl BookState {
    pub(super) fn new() -> Self {
        Self {
            bids: BTreeMap::new(),
            asks: BTreeMap::new(),
            orders: HashMap::new(),
            depth: DepthTracker::new(),
            next_seq: 0,
        }
    }

    /// Number of resting orders
    pub(super) fn len(&self) -> usize {
        self.orders.len()
    }

    /// Highest bid price, if the bid side is non-empty
    pub(super) fn best_bid(&self) -> Option<Price> {
        self.bids.keys().next_back().copied()
    }

    /// Lowest ask price, if the ask side is non-empty
    pub(super) fn best_ask(&self) -> Option<Price> {
        self.asks.keys().next().copied()
    }

    /// Lowest bid price; the peg target for market sells
    pub(super) fn worst_bid(&self) -> Option<Price> {
        self.bids.keys().next().copied()
    }

    /// Highest ask price; the peg target for market buys
    pub(super) fn worst_ask(&self) -> Option<Price> {
        self.asks.keys().next_back().copied()
    }

    fn side_levels_mut(&mut self, side: Side) -> &mut BTreeMap<Price, LevelQueue> {
        match side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        }
    }

    /// The oldest order identifier at the given price level
    pub(super) fn front_order(&self, side: Side, price: Price) -> Option<OrderId> {
        let levels = match side {
            Side::Buy => &self.bids,
            Side::Sell => &self.asks,
        };
        levels
            .get(&price)
            .and_then(|queue| queue.values().next().copied())
    }

    /// Append an order to the back of its price level, preserving time
    /// priority, and record its position in the registry.
    pub(super) fn insert(&mut self, order: Order, price: Price) {
        let seq = self.next_seq;
        self.next_seq += 1;
        let side = order.side();
        let quantity = order.remaining_quantity();
        let id = order.id();

        self.side_levels_mut(side)
            .entry(price)
            .or_default()
            .insert(seq, id);
        self.orders.insert(id, OrderEntry { order, price, seq });
        self.depth.on_add(side, price, quantity);
        trace!("inserted order {} at {} on {}", id, price, side);
    }

    /// Remove an order from the registry and its level queue, deleting the
    /// level if it becomes empty. Depth accounting is left to the caller: the
    /// cancellation and matching paths charge the aggregator differently.
    pub(super) fn unlink(&mut self, order_id: OrderId) -> Option<Order> {
        let entry = self.orders.remove(&order_id)?;
        let side = entry.order.side();
        let levels = self.side_levels_mut(side);
        if let Some(queue) = levels.get_mut(&entry.price) {
            queue.remove(&entry.seq);
            if queue.is_empty() {
                levels.remove(&entry.price);
            }
        }
        Some(entry.order)
    }

    /// Cancel a resting order: unlink it and release its remaining quantity
    /// from the aggregate depth. No-op if the identifier is unknown.
    pub(super) fn cancel(&mut self, order_id: OrderId) -> Option<Order> {
        let (side, price, held) = self
            .orders
            .get(&order_id)
            .map(|entry| (entry.order.side(), entry.price, entry.order.remaining_quantity()))?;
        let order = self.unlink(order_id)?;
        self.depth.on_remove(side, price, held);
        trace!("cancelled order {}", order_id);
        Some(order)
    }

    /// Identifiers of all resting orders of the given kind
    pub(super) fn orders_with_kind(&self, kind: OrderKind) -> Vec<OrderId> {
        self.orders
            .values()
            .filter(|entry| entry.order.kind() == kind)
            .map(|entry| entry.order.id())
            .collect()
    }
}

/// State shared between the caller-facing book handle and the expiration
/// scheduler thread: the lock over the structural state, plus the shutdown
/// flag and condition variable for the scheduler's interruptible sleep.
pub(super) struct BookShared {
    pub(super) state: Mutex<BookState>,
    pub(super) shutdown: Mutex<bool>,
    pub(super) wake: Condvar,
}

/// A single-instrument limit order book with price-time priority matching.
///
/// All mutating operations and all queries are serialized by one exclusive
/// lock, so the trades produced are the deterministic outcome of the sequence
/// of submitted operations regardless of which threads submitted them. A
/// background scheduler expires good-for-day orders at the next day boundary;
/// dropping the book signals it, wakes it and joins it before the state is
/// released.
pub struct OrderBook {
    /// The symbol or identifier for this order book
    symbol: String,
    shared: Arc<BookShared>,
    expiration_thread: Option<JoinHandle<()>>,
}

impl OrderBook {
    /// Create a new order book for the given symbol and start its expiration
    /// scheduler.
    pub fn new(symbol: &str) -> Self {
        let shared = Arc::new(BookShared {
            state: Mutex::new(BookState::new()),
            shutdown: Mutex::new(false),
            wake: Condvar::new(),
        });
        let scheduler_shared = Arc::clone(&shared);
        let expiration_thread = std::thread::spawn(move || expiration::run(scheduler_shared));
        debug!("order book {} created", symbol);

        Self {
            symbol: symbol.to_string(),
            shared,
            expiration_thread: Some(expiration_thread),
        }
    }

    /// Get the symbol of this order book
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub(super) fn shared(&self) -> &BookShared {
        &self.shared
    }

    /// Get the best bid price, if any
    pub fn best_bid(&self) -> Option<Price> {
        self.shared.state.lock().best_bid()
    }

    /// Get the best ask price, if any
    pub fn best_ask(&self) -> Option<Price> {
        self.shared.state.lock().best_ask()
    }

    /// Get the spread (best ask - best bid)
    pub fn spread(&self) -> Option<Price> {
        let state = self.shared.state.lock();
        match (state.best_bid(), state.best_ask()) {
            (Some(bid), Some(ask)) => Some(ask - bid),
            _ => None,
        }
    }

    /// Get the mid price (average of best bid and best ask)
    pub fn mid_price(&self) -> Option<f64> {
        let state = self.shared.state.lock();
        match (state.best_bid(), state.best_ask()) {
            (Some(bid), Some(ask)) => Some((bid as f64 + ask as f64) / 2.0),
            _ => None,
        }
    }

    /// Create a snapshot of the aggregated depth: ordered bid and ask levels,
    /// best price first on each side.
    pub fn create_snapshot(&self) -> DepthSnapshot {
        let state = self.shared.state.lock();

        let bids: Vec<LevelSnapshot> = state
            .depth
            .side_levels(Side::Buy)
            .iter()
            .rev()
            .map(|(&price, level)| LevelSnapshot {
                price,
                quantity: level.quantity,
                orders: level.orders,
            })
            .collect();

        let asks: Vec<LevelSnapshot> = state
            .depth
            .side_levels(Side::Sell)
            .iter()
            .map(|(&price, level)| LevelSnapshot {
                price,
                quantity: level.quantity,
                orders: level.orders,
            })
            .collect();

        DepthSnapshot {
            symbol: self.symbol.clone(),
            timestamp: current_time_millis(),
            bids,
            asks,
        }
    }
}

impl Drop for OrderBook {
    fn drop(&mut self) {
        {
            let mut shutdown = self.shared.shutdown.lock();
            *shutdown = true;
        }
        self.shared.wake.notify_all();
        if let Some(handle) = self.expiration_thread.take() {
            let _ = handle.join();
        }
        debug!("order book {} shut down", self.symbol);
    }
}
