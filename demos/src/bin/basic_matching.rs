use matchbook_rs::{Order, OrderBook, OrderKind, OrderModify, Side};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let book = OrderBook::new("BTC-USDT");

    // Seed a small two-sided book
    book.add_order(Order::limit(OrderKind::GoodTillCancel, 1, Side::Buy, 99_950, 5)?)?;
    book.add_order(Order::limit(OrderKind::GoodTillCancel, 2, Side::Buy, 99_900, 8)?)?;
    book.add_order(Order::limit(OrderKind::GoodTillCancel, 3, Side::Sell, 100_050, 5)?)?;
    book.add_order(Order::limit(OrderKind::GoodTillCancel, 4, Side::Sell, 100_100, 8)?)?;

    println!("best bid: {:?}", book.best_bid());
    println!("best ask: {:?}", book.best_ask());
    println!("spread:   {:?}", book.spread());

    // An aggressive sell crosses the spread and trades against the best bid
    let trades = book.add_order(Order::limit(
        OrderKind::GoodTillCancel,
        5,
        Side::Sell,
        99_950,
        3,
    )?)?;
    for trade in &trades {
        println!("{trade}");
    }

    // A fill-and-kill order too large for the book is rejected outright
    let trades = book.add_order(Order::limit(OrderKind::FillAndKill, 6, Side::Buy, 100_100, 50)?)?;
    println!("fill-and-kill trades: {} (rejected)", trades.len());

    // A market buy pegs to the worst ask and sweeps what it can
    let trades = book.add_order(Order::market(7, Side::Buy, 10)?)?;
    println!("market buy produced {} trades", trades.len());

    // Reprice the remaining bid
    book.modify_order(OrderModify::new(2, Side::Buy, 99_925, 8))?;

    println!("orders resting: {}", book.len());
    println!("snapshot: {:?}", book.create_snapshot());
    Ok(())
}
