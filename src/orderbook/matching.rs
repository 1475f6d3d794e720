//! Contains the core matching engine logic for the order book.

use super::book::BookState;
use super::error::OrderBookError;
use super::order::{Order, OrderId, OrderKind, Price, Quantity, Side};
use super::trade::{Trade, TradeInfo, Trades};
use tracing::{error, trace};

impl BookState {
    /// True iff an order of the given side and price would cross the best
    /// opposite price: a buy at P matches when P >= best ask, a sell at P
    /// matches when P <= best bid.
    pub(super) fn can_match(&self, side: Side, price: Price) -> bool {
        match side {
            Side::Buy => self.best_ask().is_some_and(|best_ask| price >= best_ask),
            Side::Sell => self.best_bid().is_some_and(|best_bid| price <= best_bid),
        }
    }

    /// Feasibility pre-check for fill-and-kill orders. Walks the opposite
    /// side's aggregate depth from the best price toward worse ones,
    /// accumulating quantity from every level within the order's limit (the
    /// limit is inclusive), and returns true as soon as the accumulated
    /// quantity covers the request. Runs in time proportional to the number
    /// of opposing price levels, not the number of orders.
    pub(super) fn can_fully_fill(&self, side: Side, price: Price, quantity: Quantity) -> bool {
        if !self.can_match(side, price) {
            return false;
        }

        let levels = self.depth.side_levels(side.opposite());
        let mut accumulated: Quantity = 0;
        match side {
            Side::Buy => {
                // Opposing asks, cheapest first
                for (&level_price, level) in levels.iter() {
                    if level_price > price {
                        break;
                    }
                    accumulated += level.quantity;
                    if accumulated >= quantity {
                        return true;
                    }
                }
            }
            Side::Sell => {
                // Opposing bids, highest first
                for (&level_price, level) in levels.iter().rev() {
                    if level_price < price {
                        break;
                    }
                    accumulated += level.quantity;
                    if accumulated >= quantity {
                        return true;
                    }
                }
            }
        }
        false
    }

    /// Remaining quantity of a registered order; registry and level queues
    /// must agree on membership, so a miss here is a corrupted book.
    fn remaining_of(&self, order_id: OrderId) -> Result<Quantity, OrderBookError> {
        self.orders
            .get(&order_id)
            .map(|entry| entry.order.remaining_quantity())
            .ok_or_else(|| OrderBookError::InvalidOperation {
                message: format!("order {order_id} vanished during matching"),
            })
    }

    /// Reduce an order's remaining quantity by a matched amount and settle the
    /// aggregate depth for it. Returns whether the order became fully filled.
    fn apply_fill(&mut self, order_id: OrderId, quantity: Quantity) -> Result<bool, OrderBookError> {
        let entry = self
            .orders
            .get_mut(&order_id)
            .ok_or_else(|| OrderBookError::InvalidOperation {
                message: format!("order {order_id} vanished during matching"),
            })?;
        let side = entry.order.side();
        let price = entry.price;
        entry.order.fill(quantity)?;
        let filled = entry.order.is_filled();
        if filled {
            self.depth.on_remove(side, price, quantity);
        } else {
            self.depth.on_match(side, price, quantity);
        }
        Ok(filled)
    }

    /// The crossing loop. While the best bid price reaches the best ask
    /// price, the oldest order on each side of the touch trades the minimum
    /// of their remaining quantities; fully filled orders are retired and
    /// emptied levels removed. Terminates because every iteration strictly
    /// reduces the total resting quantity.
    pub(super) fn match_orders(&mut self) -> Result<Trades, OrderBookError> {
        let mut trades = Trades::new();

        loop {
            let (Some(bid_price), Some(ask_price)) = (self.best_bid(), self.best_ask()) else {
                break;
            };
            if bid_price < ask_price {
                break;
            }

            let (Some(bid_id), Some(ask_id)) = (
                self.front_order(Side::Buy, bid_price),
                self.front_order(Side::Sell, ask_price),
            ) else {
                break;
            };

            let bid_remaining = self.remaining_of(bid_id)?;
            let ask_remaining = self.remaining_of(ask_id)?;
            let quantity = bid_remaining.min(ask_remaining);

            let bid_filled = self.apply_fill(bid_id, quantity)?;
            let ask_filled = self.apply_fill(ask_id, quantity)?;

            trades.push(Trade::new(
                TradeInfo::new(bid_id, bid_price, quantity),
                TradeInfo::new(ask_id, ask_price, quantity),
            ));
            trace!(
                "matched {} between bid {} @ {} and ask {} @ {}",
                quantity, bid_id, bid_price, ask_id, ask_price
            );

            if bid_filled {
                self.unlink(bid_id);
            }
            if ask_filled {
                self.unlink(ask_id);
            }
        }

        Ok(trades)
    }

    /// Submission path shared by add and modify, run under the book lock.
    ///
    /// Evaluated in order: duplicate identifiers are rejected; market orders
    /// are pegged to the worst opposite price and converted to
    /// good-till-cancel, or rejected if the opposite side is empty;
    /// fill-and-kill orders are rejected unless they can match and be filled
    /// completely. Anything surviving is inserted and matched to exhaustion.
    /// Rejections are benign and return no trades.
    pub(super) fn submit(&mut self, mut order: Order) -> Result<Trades, OrderBookError> {
        if self.orders.contains_key(&order.id()) {
            trace!("rejecting duplicate order id {}", order.id());
            return Ok(Trades::new());
        }

        if order.kind() == OrderKind::Market {
            let peg = match order.side() {
                Side::Buy => self.worst_ask(),
                Side::Sell => self.worst_bid(),
            };
            let Some(peg) = peg else {
                trace!("rejecting market order {}: opposite side empty", order.id());
                return Ok(Trades::new());
            };
            order.to_good_till_cancel(peg)?;
        }

        let price = order
            .price()
            .ok_or_else(|| OrderBookError::InvalidOperation {
                message: format!("order {} has no resolved price", order.id()),
            })?;

        if order.kind() == OrderKind::FillAndKill
            && !(self.can_match(order.side(), price)
                && self.can_fully_fill(order.side(), price, order.remaining_quantity()))
        {
            trace!(
                "rejecting fill-and-kill order {}: cannot fill {} at {}",
                order.id(),
                order.remaining_quantity(),
                price
            );
            return Ok(Trades::new());
        }

        self.insert(order, price);
        let trades = self.match_orders();
        if let Err(ref err) = trades {
            error!("matching aborted: {}", err);
        }
        trades
    }
}
