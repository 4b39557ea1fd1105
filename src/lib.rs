//! delivery-planner
//!
//! Minimum-cost pickup routing for orders served from a few warehouses
//! through a single delivery hub.

pub mod traits;
pub mod catalog;
pub mod distance;
pub mod cost;
pub mod route;
pub mod solver;
pub mod config;
pub mod error;

pub use config::{Topology, TopologyConfig};
pub use error::{ConfigError, RoutingError};
pub use solver::{compute_min_cost, DeliveryPlan, Order, Planner, SolveOptions};
