//! Tests exercising the book from multiple threads. The single exclusive
//! lock serializes every operation, so totals must come out exact no matter
//! how the threads interleave.

#[cfg(test)]
mod tests {
    use matchbook_rs::{Order, OrderBook, OrderKind, Side};
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_concurrent_adds_all_land() {
        let book = Arc::new(OrderBook::new("TEST"));
        let threads = 4;
        let orders_per_thread = 100u64;

        let mut handles = Vec::new();
        for t in 0..threads {
            let book = Arc::clone(&book);
            handles.push(thread::spawn(move || {
                for i in 0..orders_per_thread {
                    let id = t * orders_per_thread + i;
                    // Non-crossing: bids strictly below all asks
                    let order =
                        Order::limit(OrderKind::GoodTillCancel, id, Side::Buy, 90, 1).unwrap();
                    book.add_order(order).unwrap();
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(book.len(), (threads * orders_per_thread) as usize);
        let snapshot = book.create_snapshot();
        assert_eq!(snapshot.total_bid_quantity(), threads * orders_per_thread);
    }

    #[test]
    fn test_concurrent_adds_and_cancels_balance_out() {
        let book = Arc::new(OrderBook::new("TEST"));
        let ids: Vec<u64> = (0..200).collect();

        for &id in &ids {
            let order = Order::limit(OrderKind::GoodTillCancel, id, Side::Sell, 110, 2).unwrap();
            book.add_order(order).unwrap();
        }

        let mut handles = Vec::new();
        for chunk in ids.chunks(50) {
            let book = Arc::clone(&book);
            let chunk: Vec<u64> = chunk.to_vec();
            handles.push(thread::spawn(move || {
                for id in chunk {
                    book.cancel_order(id);
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        assert!(book.is_empty(), "Every order was cancelled exactly once");
        assert_eq!(book.best_ask(), None);
    }

    #[test]
    fn test_concurrent_matching_conserves_quantity() {
        let book = Arc::new(OrderBook::new("TEST"));
        let per_side = 100u64;

        let buyer = {
            let book = Arc::clone(&book);
            thread::spawn(move || {
                let mut traded = 0u64;
                for i in 0..per_side {
                    let order =
                        Order::limit(OrderKind::GoodTillCancel, i, Side::Buy, 100, 3).unwrap();
                    let trades = book.add_order(order).unwrap();
                    traded += trades.iter().map(|trade| trade.quantity()).sum::<u64>();
                }
                traded
            })
        };
        let seller = {
            let book = Arc::clone(&book);
            thread::spawn(move || {
                let mut traded = 0u64;
                for i in 0..per_side {
                    let order = Order::limit(
                        OrderKind::GoodTillCancel,
                        per_side + i,
                        Side::Sell,
                        100,
                        3,
                    )
                    .unwrap();
                    let trades = book.add_order(order).unwrap();
                    traded += trades.iter().map(|trade| trade.quantity()).sum::<u64>();
                }
                traded
            })
        };

        let traded = buyer.join().unwrap() + seller.join().unwrap();
        let snapshot = book.create_snapshot();
        let resting = snapshot.total_bid_quantity() + snapshot.total_ask_quantity();
        assert_eq!(
            resting + 2 * traded,
            2 * per_side * 3,
            "Submitted quantity is either resting or traded away"
        );
    }
}
