use thiserror::Error;

use crate::route::Location;

/// Failures while planning a single order.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RoutingError {
    #[error("Product {0} not found")]
    UnknownProduct(String),

    /// The topology has no distance for a leg the route generator produced.
    #[error("No distance defined between {from} and {to}")]
    MissingDistance { from: Location, to: Location },

    #[error("Order spans {active} warehouses, at most {limit} are supported")]
    TooManyWarehouses { active: usize, limit: usize },
}

/// Failures while loading or validating a topology.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read topology file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid topology JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Topology has no warehouses")]
    NoWarehouses,

    #[error("Warehouse {0} is listed more than once")]
    DuplicateWarehouse(Location),

    #[error("Hub {0} cannot also be a warehouse")]
    HubIsWarehouse(Location),

    #[error("Product {product} is stocked at unknown warehouse {warehouse}")]
    UnknownWarehouse { product: String, warehouse: Location },

    #[error("Product {product} has invalid unit weight {weight}")]
    InvalidWeight { product: String, weight: f64 },

    #[error("Distance entry references unknown location {0}")]
    UnknownLocation(Location),

    #[error("Invalid distance {distance} between {from} and {to}")]
    InvalidDistance { from: Location, to: Location, distance: f64 },

    #[error("Conflicting distances between {from} and {to}: {first} and {second}")]
    ConflictingDistance {
        from: Location,
        to: Location,
        first: f64,
        second: f64,
    },

    #[error("Warehouse {warehouse} has no distance to hub {hub}")]
    MissingHubDistance { warehouse: Location, hub: Location },
}
