use criterion::{BenchmarkId, Criterion};
use matchbook_rs::{Order, OrderBook, OrderKind, Side};
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::{Duration, Instant};

/// Register benchmarks that measure contention on the book's single lock
pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("OrderBook - Contention Patterns");

    // Test with different read/write ratios
    for read_ratio in [0, 50, 95].iter() {
        // Fixed at 4 threads to keep the benchmark portable
        let thread_count = 4;

        group.bench_with_input(
            BenchmarkId::new("read_write_ratio", read_ratio),
            read_ratio,
            |b, &read_ratio| {
                b.iter_custom(|iters| measure_read_write_contention(thread_count, iters, read_ratio));
            },
        );
    }

    group.finish();
}

/// Measures time for operations with different read/write ratios
/// read_ratio = percentage of read operations (0-100)
fn measure_read_write_contention(
    thread_count: usize,
    iterations: u64,
    read_ratio: usize,
) -> Duration {
    let order_book = Arc::new(OrderBook::new("TEST-SYMBOL"));
    let barrier = Arc::new(Barrier::new(thread_count + 1)); // +1 for main thread

    // Pre-populate with orders to read against
    for i in 0..500u64 {
        let order = Order::limit(
            OrderKind::GoodTillCancel,
            i,
            Side::Buy,
            900 + (i % 50) as i64,
            10,
        )
        .unwrap();
        order_book.add_order(order).unwrap();
    }

    let per_thread = iterations.max(1);
    let mut handles = Vec::with_capacity(thread_count);
    for t in 0..thread_count {
        let order_book = Arc::clone(&order_book);
        let barrier = Arc::clone(&barrier);
        handles.push(thread::spawn(move || {
            barrier.wait();
            for i in 0..per_thread {
                // Deterministic mix of reads and writes per the ratio
                if (i % 100) < read_ratio as u64 {
                    let _ = order_book.best_bid();
                    let _ = order_book.len();
                } else {
                    let id = 1_000 + t as u64 * per_thread + i;
                    let order =
                        Order::limit(OrderKind::GoodTillCancel, id, Side::Buy, 850, 1).unwrap();
                    let _ = order_book.add_order(order);
                    order_book.cancel_order(id);
                }
            }
        }));
    }

    barrier.wait();
    let start = Instant::now();
    for handle in handles {
        let _ = handle.join();
    }
    start.elapsed()
}
