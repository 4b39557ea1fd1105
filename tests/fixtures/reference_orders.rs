//! Orders with costs worked out by hand against the reference topology.
//!
//! Hub distances: C1 3, C2 2.5, C3 2. A leg out of the hub always runs
//! empty at rate 10; the leg back carries that warehouse's pickup.

/// An order alongside its expected minimum cost and winning start.
#[derive(Debug, Clone)]
pub struct CostedOrder {
    pub name: &'static str,
    pub lines: &'static [(&'static str, i64)],
    pub expected_cost: f64,
    /// Starting warehouse of the cheapest route, `None` for the empty order.
    pub expected_start: Option<&'static str>,
}

impl CostedOrder {
    pub const fn new(
        name: &'static str,
        lines: &'static [(&'static str, i64)],
        expected_cost: f64,
        expected_start: Option<&'static str>,
    ) -> Self {
        Self {
            name,
            lines,
            expected_cost,
            expected_start,
        }
    }
}

// ============================================================================
// Single warehouse
// ============================================================================

pub const SINGLE_WAREHOUSE: &[CostedOrder] = &[
    // 3 kg over 3 at rate 10
    CostedOrder::new("one A", &[("A", 1)], 30.0, Some("C1")),
    // 12 kg -> 2 blocks -> rate 26, over 2.5
    CostedOrder::new("one D", &[("D", 1)], 65.0, Some("C2")),
    // 25 kg -> 4 blocks -> rate 42
    CostedOrder::new("one E", &[("E", 1)], 105.0, Some("C2")),
    // A + C = 11 kg -> rate 26, over 3
    CostedOrder::new("A and C", &[("A", 1), ("C", 1)], 78.0, Some("C1")),
    // exactly 5 kg stays at the base rate
    CostedOrder::new("ten G", &[("G", 10)], 20.0, Some("C3")),
    // 5.5 kg starts the first block
    CostedOrder::new("eleven G", &[("G", 11)], 36.0, Some("C3")),
];

// ============================================================================
// Several warehouses
// ============================================================================

pub const MULTI_WAREHOUSE: &[CostedOrder] = &[
    // C1 first: 30 + 25 + 65 = 120; C2 first: 65 + 30 + 30 = 125
    CostedOrder::new("A and D", &[("A", 1), ("D", 1)], 120.0, Some("C1")),
    // 4 kg at each end. C1 first: 30 + 20 + 20 = 70
    CostedOrder::new("B twice, H four times", &[("B", 2), ("H", 4)], 70.0, Some("C1")),
    // returns 30 + 65 + 20, empty legs out to C2 and C3: 25 + 20
    CostedOrder::new("A, D and G", &[("A", 1), ("D", 1), ("G", 1)], 160.0, Some("C1")),
    // C1 13 kg -> 78, C2 52 kg -> 225, C3 3.5 kg -> 20, empty legs 25 + 20
    CostedOrder::new(
        "whole catalog",
        &[
            ("A", 1),
            ("B", 1),
            ("C", 1),
            ("D", 1),
            ("E", 1),
            ("F", 1),
            ("G", 1),
            ("H", 1),
            ("I", 1),
        ],
        368.0,
        Some("C1"),
    ),
    // C2 (2.5 out) beats C3 (2 out) as the start
    CostedOrder::new("D and I", &[("D", 1), ("I", 1)], 105.0, Some("C2")),
];

pub const EMPTY_ORDER: CostedOrder = CostedOrder::new("empty", &[], 0.0, None);
