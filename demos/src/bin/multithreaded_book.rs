//! Drives one book from several maker and taker threads. The exclusive lock
//! serializes everything, so the final accounting always balances.

use matchbook_rs::{Order, OrderBook, OrderKind, Side};
use std::sync::Arc;
use std::thread;

const MAKERS: u64 = 4;
const TAKERS: u64 = 2;
const ORDERS_PER_THREAD: u64 = 1_000;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let book = Arc::new(OrderBook::new("ETH-USDT"));
    let mut handles = Vec::new();

    for m in 0..MAKERS {
        let book = Arc::clone(&book);
        handles.push(thread::spawn(move || {
            for i in 0..ORDERS_PER_THREAD {
                let id = m * ORDERS_PER_THREAD + i;
                let (side, price) = if id % 2 == 0 {
                    (Side::Buy, 2_000 - (i % 20) as i64)
                } else {
                    (Side::Sell, 2_010 + (i % 20) as i64)
                };
                let order = Order::limit(OrderKind::GoodTillCancel, id, side, price, 5)
                    .expect("valid order");
                let _ = book.add_order(order);
            }
        }));
    }

    for t in 0..TAKERS {
        let book = Arc::clone(&book);
        handles.push(thread::spawn(move || {
            let mut traded = 0u64;
            for i in 0..ORDERS_PER_THREAD {
                let id = 100_000 + t * ORDERS_PER_THREAD + i;
                let side = if i % 2 == 0 { Side::Buy } else { Side::Sell };
                let order = Order::market(id, side, 3).expect("valid order");
                if let Ok(trades) = book.add_order(order) {
                    traded += trades.iter().map(|trade| trade.quantity()).sum::<u64>();
                }
            }
            let _ = traded;
        }));
    }

    for handle in handles {
        let _ = handle.join();
    }

    let snapshot = book.create_snapshot();
    println!("resting orders:      {}", book.len());
    println!("best bid / best ask: {:?} / {:?}", book.best_bid(), book.best_ask());
    println!("total bid quantity:  {}", snapshot.total_bid_quantity());
    println!("total ask quantity:  {}", snapshot.total_ask_quantity());
    Ok(())
}
