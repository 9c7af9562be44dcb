//! Railway Pipeline Example
//!
//! Demonstrates composing a multi-stage pipeline where each stage may fail,
//! then aggregating several independent pipelines with `combine!`.
//!
//! Run with: `cargo run --example railway_pipeline`

use outcome_rail::prelude::*;

#[derive(Debug, Clone)]
struct Order {
    id: u64,
    quantity: u32,
}

fn fetch_order(id: u64) -> Outcome<Order, String> {
    if id == 0 {
        Outcome::failure("order id 0 does not exist".to_string())
    } else {
        Outcome::success(Order { id, quantity: (id % 7) as u32 + 1 })
    }
}

fn check_stock(order: Order) -> Outcome<Order, String> {
    if order.quantity > 5 {
        Outcome::failure(format!("insufficient stock for order {}", order.id))
    } else {
        Outcome::success(order)
    }
}

fn price_order(order: Order) -> Outcome<u64, String> {
    Outcome::success(u64::from(order.quantity) * 250)
}

/// One order through the whole rail: any failing stage short-circuits the rest.
fn quote(id: u64) -> Outcome<u64, String> {
    fetch_order(id).and_then(check_stock).and_then(price_order)
}

fn main() {
    println!("=== outcome-rail Railway Pipeline ===\n");

    // Single rail
    for id in [3, 0, 6] {
        let report = quote(id).analyze(
            |total| Outcome::success(format!("order {id}: total {total}")),
            |error| Outcome::success(format!("order {id}: rejected ({error})")),
        );
        println!("{}", report.recover(String::new()));
    }

    // Aggregation: the basket quote needs every order to succeed.
    let basket = combine!(
        |totals: ValueVec<u64>| Outcome::success(totals.iter().sum::<u64>()),
        quote(1),
        quote(2),
        quote(3),
    );
    match basket.into_parts() {
        (Some(total), None) => println!("\nbasket total: {total}"),
        (_, Some(error)) => println!("\nbasket rejected: {error}"),
        _ => unreachable!(),
    }
}
