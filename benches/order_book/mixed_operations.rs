use criterion::Criterion;
use matchbook_rs::{Order, OrderBook, OrderKind, OrderModify, Side};
use std::hint::black_box;

/// Register benchmarks for mixed/realistic order book operations
pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("OrderBook - Mixed Operations");

    // Benchmark a realistic trading scenario with mixed operations
    group.bench_function("realistic_trading_scenario", |b| {
        b.iter(|| {
            let order_book = OrderBook::new("TEST-SYMBOL");

            // Phase 1: seed both sides of the book
            for i in 0..50u64 {
                let bid = Order::limit(
                    OrderKind::GoodTillCancel,
                    i,
                    Side::Buy,
                    990 + (i % 10) as i64,
                    10,
                )
                .unwrap();
                let ask = Order::limit(
                    OrderKind::GoodTillCancel,
                    100 + i,
                    Side::Sell,
                    1010 + (i % 10) as i64,
                    10,
                )
                .unwrap();
                let _ = black_box(order_book.add_order(bid));
                let _ = black_box(order_book.add_order(ask));
            }

            // Phase 2: cross the spread with aggressive orders
            for i in 0..20u64 {
                let aggressor = Order::limit(
                    OrderKind::GoodTillCancel,
                    200 + i,
                    Side::Buy,
                    1010 + (i % 5) as i64,
                    15,
                )
                .unwrap();
                let _ = black_box(order_book.add_order(aggressor));
            }

            // Phase 3: reprice and cancel part of the remaining book
            for i in 0..20u64 {
                let _ = black_box(
                    order_book.modify_order(OrderModify::new(i, Side::Buy, 995, 10)),
                );
                order_book.cancel_order(100 + i);
            }

            let _ = black_box(order_book.create_snapshot());
        })
    });

    group.finish();
}
