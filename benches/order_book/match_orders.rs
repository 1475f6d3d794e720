use criterion::{BenchmarkId, Criterion};
use matchbook_rs::{Order, OrderBook, OrderKind, Side};
use std::hint::black_box;

/// Register all benchmarks for matching orders against resting liquidity
pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("OrderBook - Match Orders");

    // One aggressive order sweeping a pre-populated single level
    group.bench_function("match_against_single_level", |b| {
        b.iter_with_setup(
            || {
                let order_book = OrderBook::new("TEST-SYMBOL");
                for i in 0..100u64 {
                    let order =
                        Order::limit(OrderKind::GoodTillCancel, i, Side::Sell, 1000, 10).unwrap();
                    order_book.add_order(order).unwrap();
                }
                order_book
            },
            |order_book| {
                let aggressor =
                    Order::limit(OrderKind::GoodTillCancel, 10_000, Side::Buy, 1000, 1000)
                        .unwrap();
                let _ = black_box(order_book.add_order(aggressor));
            },
        )
    });

    // One aggressive order walking multiple price levels
    group.bench_function("match_across_levels", |b| {
        b.iter_with_setup(
            || {
                let order_book = OrderBook::new("TEST-SYMBOL");
                for i in 0..100u64 {
                    let order = Order::limit(
                        OrderKind::GoodTillCancel,
                        i,
                        Side::Sell,
                        1000 + (i % 20) as i64,
                        10,
                    )
                    .unwrap();
                    order_book.add_order(order).unwrap();
                }
                order_book
            },
            |order_book| {
                let aggressor =
                    Order::limit(OrderKind::GoodTillCancel, 10_000, Side::Buy, 1019, 1000)
                        .unwrap();
                let _ = black_box(order_book.add_order(aggressor));
            },
        )
    });

    // Fill-and-kill feasibility check over varying level counts
    for levels in [10, 50, 200].iter() {
        group.bench_with_input(
            BenchmarkId::new("fill_and_kill_feasibility", levels),
            levels,
            |b, &levels| {
                b.iter_with_setup(
                    || {
                        let order_book = OrderBook::new("TEST-SYMBOL");
                        for i in 0..levels as u64 {
                            let order = Order::limit(
                                OrderKind::GoodTillCancel,
                                i,
                                Side::Sell,
                                1000 + i as i64,
                                5,
                            )
                            .unwrap();
                            order_book.add_order(order).unwrap();
                        }
                        order_book
                    },
                    |order_book| {
                        let fak = Order::limit(
                            OrderKind::FillAndKill,
                            10_000,
                            Side::Buy,
                            1000 + levels as i64,
                            5 * levels as u64,
                        )
                        .unwrap();
                        let _ = black_box(order_book.add_order(fak));
                    },
                )
            },
        );
    }

    group.finish();
}
