//! Quick Start Example
//!
//! This example demonstrates the minimal API surface of outcome-rail.
//! No feature flags required - works with the default configuration.
//!
//! Run with: `cargo run --example quick_start`
//!
//! ## What You'll Learn
//!
//! 1. Build outcomes with `success`/`failure` or `into_outcome()`
//! 2. Chain fallible steps with `map` and `and_then`
//! 3. Recover at the edge with `recover`

use outcome_rail::prelude::*;

/// Simulates loading a raw configuration value.
///
/// In a real application, this would be `std::env::var` or a file read.
fn load_raw_port(source: &str) -> Outcome<String, String> {
    match source {
        "env" => Outcome::success("8080".to_string()),
        other => Outcome::failure(format!("unknown config source: {other}")),
    }
}

/// Parses the raw value, converting the native `Result` at the chain head.
fn parse_port(raw: &str) -> Outcome<u16, String> {
    raw.parse::<u16>().map_err(|e| e.to_string()).into_outcome()
}

fn resolve_port(source: &str) -> Outcome<u16, String> {
    load_raw_port(source).and_then(|raw| parse_port(&raw))
}

fn main() {
    println!("=== outcome-rail Quick Start ===\n");

    let port = resolve_port("env").recover(80);
    println!("configured port: {port}");

    match resolve_port("flagfile").into_parts() {
        (Some(port), None) => println!("configured port: {port}"),
        (_, Some(error)) => println!("falling back to default port, cause: {error}"),
        _ => unreachable!(),
    }
}
