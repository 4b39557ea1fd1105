//! Core lookup traits for the delivery planner.
//!
//! The solver only needs two read-only views of the static data: a product
//! catalog and a distance lookup. Both are small enough that the concrete
//! tables in [`crate::catalog`] and [`crate::distance`] are the usual
//! implementations, but tests and alternative data sources can plug in here.

use crate::catalog::Product;
use crate::route::Location;

/// Resolves product codes to their static reference data.
pub trait ProductCatalog {
    /// Returns the product for `code`, or `None` when it is not stocked.
    fn product(&self, code: &str) -> Option<&Product>;
}

/// Provides the travel distance between two locations.
pub trait DistanceLookup {
    /// Distance from `from` to `to`, or `None` when the pair is undefined.
    fn distance(&self, from: &Location, to: &Location) -> Option<f64>;
}
