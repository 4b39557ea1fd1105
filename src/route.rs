//! Locations and routes.
//!
//! A route is the ordered list of stops a vehicle makes: it starts at a
//! warehouse, alternates through the delivery hub and the other warehouses,
//! and ends at the hub. Costing walks it leg by leg.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A named stop: either a warehouse or the delivery hub.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Location(String);

impl Location {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Location {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Location {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// An ordered sequence of location visits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Route {
    stops: Vec<Location>,
}

impl Route {
    /// Creates a route from its stops, in visiting order.
    pub fn new(stops: Vec<Location>) -> Self {
        Self { stops }
    }

    /// The route of an order with nothing to pick up: no stops, no legs.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn stops(&self) -> &[Location] {
        &self.stops
    }

    pub fn into_stops(self) -> Vec<Location> {
        self.stops
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// First stop, i.e. the starting warehouse.
    pub fn start(&self) -> Option<&Location> {
        self.stops.first()
    }

    /// Consecutive `(from, to)` pairs.
    pub fn legs(&self) -> impl Iterator<Item = (&Location, &Location)> {
        self.stops.windows(2).map(|pair| (&pair[0], &pair[1]))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, stop) in self.stops.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{stop}")?;
        }
        Ok(())
    }
}
