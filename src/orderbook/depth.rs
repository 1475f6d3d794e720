//! Aggregated per-price depth accounting.
//!
//! Tracks, for every active price on each side, the total remaining quantity
//! and the number of live orders. This is what makes the fill-and-kill
//! feasibility check run in time proportional to the number of price levels
//! rather than the number of orders, and it serves the depth snapshot
//! directly. It must always reconcile with the sum of remaining quantities
//! actually resting at the corresponding level.

use super::order::{Price, Quantity, Side};
use std::collections::BTreeMap;
use tracing::error;

/// Subtract a matched or released amount from an aggregate. An underflow
/// means the tracker and the registry have diverged; it is reported rather
/// than silently clamped.
fn deduct(aggregate: u64, amount: u64, price: Price, what: &str) -> u64 {
    match aggregate.checked_sub(amount) {
        Some(rest) => rest,
        None => {
            debug_assert!(
                false,
                "depth {what} underflow at {price}: {amount} from {aggregate}"
            );
            error!(
                "depth {} underflow at {}: deducting {} from {}",
                what, price, amount, aggregate
            );
            0
        }
    }
}

/// Aggregate state of one price level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(super) struct LevelDepth {
    /// Total remaining quantity across all orders at this price
    pub quantity: Quantity,
    /// Number of live orders at this price
    pub orders: u64,
}

/// Per-side aggregate depth, keyed by price
#[derive(Debug, Default)]
pub(super) struct DepthTracker {
    bids: BTreeMap<Price, LevelDepth>,
    asks: BTreeMap<Price, LevelDepth>,
}

impl DepthTracker {
    pub(super) fn new() -> Self {
        Self::default()
    }

    /// The aggregate levels for one side, in ascending price order
    pub(super) fn side_levels(&self, side: Side) -> &BTreeMap<Price, LevelDepth> {
        match side {
            Side::Buy => &self.bids,
            Side::Sell => &self.asks,
        }
    }

    fn side_levels_mut(&mut self, side: Side) -> &mut BTreeMap<Price, LevelDepth> {
        match side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        }
    }

    /// An order came to rest at the given price
    pub(super) fn on_add(&mut self, side: Side, price: Price, quantity: Quantity) {
        let level = self.side_levels_mut(side).entry(price).or_default();
        level.orders += 1;
        level.quantity += quantity;
    }

    /// An order at the given price traded without being fully filled
    pub(super) fn on_match(&mut self, side: Side, price: Price, traded: Quantity) {
        if let Some(level) = self.side_levels_mut(side).get_mut(&price) {
            level.quantity = deduct(level.quantity, traded, price, "quantity");
        }
    }

    /// An order left the given price level: fully filled (pass the traded
    /// amount) or cancelled (pass its remaining quantity). The level entry is
    /// deleted exactly when its order count reaches zero.
    pub(super) fn on_remove(&mut self, side: Side, price: Price, held: Quantity) {
        let levels = self.side_levels_mut(side);
        if let Some(level) = levels.get_mut(&price) {
            level.orders = deduct(level.orders, 1, price, "order count");
            level.quantity = deduct(level.quantity, held, price, "quantity");
            if level.orders == 0 {
                levels.remove(&price);
            }
        }
    }

    /// The aggregate at one price, if any order rests there
    pub(super) fn level(&self, side: Side, price: Price) -> Option<LevelDepth> {
        self.side_levels(side).get(&price).copied()
    }
}
