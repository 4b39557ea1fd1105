//! Weight-tiered transport rate.
//!
//! Up to [`BASE_ALLOWANCE_KG`] the vehicle runs at [`BASE_RATE`] per unit of
//! distance. Every further started block of [`BLOCK_KG`] adds [`BLOCK_RATE`].

/// Rate per distance unit for loads up to the base allowance.
pub const BASE_RATE: f64 = 10.0;

/// Load carried at the base rate, in kilograms.
pub const BASE_ALLOWANCE_KG: f64 = 5.0;

/// Size of each surcharge block above the allowance, in kilograms.
pub const BLOCK_KG: f64 = 5.0;

/// Surcharge per started block.
pub const BLOCK_RATE: f64 = 8.0;

/// Per-distance rate for a vehicle carrying `weight` kilograms.
pub fn cost_per_distance(weight: f64) -> f64 {
    if weight <= BASE_ALLOWANCE_KG {
        return BASE_RATE;
    }
    let blocks = started_blocks(weight - BASE_ALLOWANCE_KG, BLOCK_KG);
    BASE_RATE + blocks * BLOCK_RATE
}

/// Exact `ceil(excess / block)` for positive `excess`.
///
/// The float quotient can round onto an integer when `excess` sits a hair
/// above a block boundary, so the result is checked against `excess` directly
/// rather than trusting `ceil` on the quotient.
fn started_blocks(excess: f64, block: f64) -> f64 {
    let whole = (excess / block).floor();
    if whole * block < excess { whole + 1.0 } else { whole }
}
