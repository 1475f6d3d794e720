//! Background expiration of good-for-day orders.
//!
//! One scheduler thread per book, started at construction. It sleeps until
//! the next local day boundary plus a short grace period, using an
//! interruptible condvar wait so a shutdown request wakes it immediately, and
//! on every natural wakeup cancels all resting good-for-day orders as one
//! batch under a single lock acquisition.

use super::book::{BookShared, BookState};
use super::order::OrderKind;
use crate::utils::duration_until_next_day;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Slack past the computed day boundary before pruning starts
const EXPIRATION_GRACE: Duration = Duration::from_millis(100);

/// Cancel every resting good-for-day order, returning how many were removed.
/// Expects the book lock to be held for the whole batch.
pub(super) fn expire_day_orders(state: &mut BookState) -> usize {
    let expired = state.orders_with_kind(OrderKind::GoodForDay);
    for &order_id in &expired {
        state.cancel(order_id);
    }
    expired.len()
}

/// Scheduler loop. Exits as soon as the shutdown flag is observed set.
pub(super) fn run(shared: Arc<BookShared>) {
    debug!("expiration scheduler started");
    loop {
        let wait = duration_until_next_day() + EXPIRATION_GRACE;
        debug!("expiration scheduler sleeping for {:?}", wait);
        {
            let mut shutdown = shared.shutdown.lock();
            if *shutdown {
                break;
            }
            shared.wake.wait_for(&mut shutdown, wait);
            if *shutdown {
                break;
            }
        }

        let mut state = shared.state.lock();
        let expired = expire_day_orders(&mut state);
        if expired > 0 {
            info!("expired {} good-for-day orders at day boundary", expired);
        }
    }
    debug!("expiration scheduler stopped");
}
