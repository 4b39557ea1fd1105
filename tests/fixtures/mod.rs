//! Test fixtures for delivery-planner.
//!
//! Provides hand-costed orders against the reference topology
//! (warehouses C1..C3, hub L1) and small helpers for building orders.

pub mod reference_orders;

pub use reference_orders::*;

use delivery_planner::Order;

/// Builds an order from `(code, quantity)` pairs.
pub fn order(lines: &[(&str, i64)]) -> Order {
    lines
        .iter()
        .map(|(code, quantity)| (code.to_string(), *quantity))
        .collect()
}
