//! Symmetric distance table between named locations.
//!
//! Distances are stored once per unordered pair, so a lookup in either
//! direction returns the same value.

use std::collections::HashMap;

use crate::route::Location;
use crate::traits::DistanceLookup;

/// Distance table keyed by unordered location pair.
#[derive(Debug, Clone, Default)]
pub struct DistanceTable {
    distances: HashMap<(Location, Location), f64>,
}

impl DistanceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the distance between `a` and `b` in both directions.
    ///
    /// Returns the previously stored distance for the pair, if any.
    pub fn insert(&mut self, a: Location, b: Location, distance: f64) -> Option<f64> {
        self.distances.insert(Self::key(a, b), distance)
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, a: impl Into<Location>, b: impl Into<Location>, distance: f64) -> Self {
        self.insert(a.into(), b.into(), distance);
        self
    }

    pub fn get(&self, a: &Location, b: &Location) -> Option<f64> {
        let key = if a <= b {
            (a.clone(), b.clone())
        } else {
            (b.clone(), a.clone())
        };
        self.distances.get(&key).copied()
    }

    pub fn contains(&self, a: &Location, b: &Location) -> bool {
        self.get(a, b).is_some()
    }

    /// Number of stored unordered pairs.
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Stored pairs, each reported once.
    pub fn pairs(&self) -> impl Iterator<Item = (&Location, &Location, f64)> {
        self.distances.iter().map(|((a, b), d)| (a, b, *d))
    }

    fn key(a: Location, b: Location) -> (Location, Location) {
        if a <= b { (a, b) } else { (b, a) }
    }
}

impl DistanceLookup for DistanceTable {
    fn distance(&self, from: &Location, to: &Location) -> Option<f64> {
        self.get(from, to)
    }
}
