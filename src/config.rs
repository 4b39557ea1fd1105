//! Topology configuration: warehouses, hub, catalog and distances.
//!
//! [`TopologyConfig`] is the serializable form, with the reference instance
//! as its default. [`TopologyConfig::build`] validates it into an immutable
//! [`Topology`] that the solver borrows for every order.

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Product};
use crate::distance::DistanceTable;
use crate::error::ConfigError;
use crate::route::Location;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductConfig {
    pub warehouse: Location,
    /// Unit weight in kilograms.
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceConfig {
    pub from: Location,
    pub to: Location,
    pub distance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopologyConfig {
    pub hub: Location,
    pub warehouses: Vec<Location>,
    pub products: BTreeMap<String, ProductConfig>,
    pub distances: Vec<DistanceConfig>,
}

impl Default for TopologyConfig {
    fn default() -> Self {
        let product = |warehouse: &str, weight: f64| ProductConfig {
            warehouse: Location::from(warehouse),
            weight,
        };
        let distance = |from: &str, to: &str, distance: f64| DistanceConfig {
            from: Location::from(from),
            to: Location::from(to),
            distance,
        };

        Self {
            hub: Location::from("L1"),
            warehouses: vec!["C1".into(), "C2".into(), "C3".into()],
            products: BTreeMap::from([
                ("A".to_string(), product("C1", 3.0)),
                ("B".to_string(), product("C1", 2.0)),
                ("C".to_string(), product("C1", 8.0)),
                ("D".to_string(), product("C2", 12.0)),
                ("E".to_string(), product("C2", 25.0)),
                ("F".to_string(), product("C2", 15.0)),
                ("G".to_string(), product("C3", 0.5)),
                ("H".to_string(), product("C3", 1.0)),
                ("I".to_string(), product("C3", 2.0)),
            ]),
            distances: vec![
                distance("C1", "L1", 3.0),
                distance("C2", "L1", 2.5),
                distance("C3", "L1", 2.0),
                distance("C1", "C2", 4.0),
                distance("C2", "C3", 3.0),
                distance("C1", "C3", 7.0),
            ],
        }
    }
}

impl TopologyConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Validates the configuration and freezes it into a [`Topology`].
    pub fn build(&self) -> Result<Topology, ConfigError> {
        if self.warehouses.is_empty() {
            return Err(ConfigError::NoWarehouses);
        }

        let mut warehouse_set = HashSet::new();
        for warehouse in &self.warehouses {
            if !warehouse_set.insert(warehouse) {
                return Err(ConfigError::DuplicateWarehouse(warehouse.clone()));
            }
        }
        if warehouse_set.contains(&self.hub) {
            return Err(ConfigError::HubIsWarehouse(self.hub.clone()));
        }

        let mut catalog = Catalog::new();
        for (code, product) in &self.products {
            if !warehouse_set.contains(&product.warehouse) {
                return Err(ConfigError::UnknownWarehouse {
                    product: code.clone(),
                    warehouse: product.warehouse.clone(),
                });
            }
            if !product.weight.is_finite() || product.weight <= 0.0 {
                return Err(ConfigError::InvalidWeight {
                    product: code.clone(),
                    weight: product.weight,
                });
            }
            catalog.insert(Product {
                code: code.clone(),
                warehouse: product.warehouse.clone(),
                unit_weight: product.weight,
            });
        }

        let mut distances = DistanceTable::new();
        for entry in &self.distances {
            for endpoint in [&entry.from, &entry.to] {
                if endpoint != &self.hub && !warehouse_set.contains(endpoint) {
                    return Err(ConfigError::UnknownLocation(endpoint.clone()));
                }
            }
            if entry.from == entry.to || !entry.distance.is_finite() || entry.distance < 0.0 {
                return Err(ConfigError::InvalidDistance {
                    from: entry.from.clone(),
                    to: entry.to.clone(),
                    distance: entry.distance,
                });
            }
            if let Some(first) = distances.insert(entry.from.clone(), entry.to.clone(), entry.distance) {
                if first != entry.distance {
                    return Err(ConfigError::ConflictingDistance {
                        from: entry.from.clone(),
                        to: entry.to.clone(),
                        first,
                        second: entry.distance,
                    });
                }
            }
        }

        // Routes only ever travel between a warehouse and the hub.
        for warehouse in &self.warehouses {
            if !distances.contains(warehouse, &self.hub) {
                return Err(ConfigError::MissingHubDistance {
                    warehouse: warehouse.clone(),
                    hub: self.hub.clone(),
                });
            }
        }

        Ok(Topology {
            hub: self.hub.clone(),
            warehouses: self.warehouses.clone(),
            catalog,
            distances,
        })
    }
}

/// Validated, read-only static data shared by every planning call.
#[derive(Debug, Clone)]
pub struct Topology {
    hub: Location,
    warehouses: Vec<Location>,
    catalog: Catalog,
    distances: DistanceTable,
}

impl Topology {
    /// The reference instance: warehouses C1..C3 around hub L1.
    pub fn reference() -> Self {
        match TopologyConfig::default().build() {
            Ok(topology) => topology,
            Err(err) => unreachable!("reference topology is valid: {err}"),
        }
    }

    pub fn hub(&self) -> &Location {
        &self.hub
    }

    /// Warehouses in configuration order.
    pub fn warehouses(&self) -> &[Location] {
        &self.warehouses
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn distances(&self) -> &DistanceTable {
        &self.distances
    }
}
