//! Minimum-cost route search for a single order.
//!
//! The search is exhaustive: every active warehouse is tried as the start,
//! and every ordering of the remaining active warehouses is costed. That is
//! `k * (k-1)!` candidates for `k` active warehouses, which is trivial for the
//! reference topology (k <= 3) and grows factorially beyond it, so
//! [`SolveOptions::max_active_warehouses`] caps how many an order may span.

use std::collections::BTreeMap;

use itertools::Itertools;
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::Topology;
use crate::cost::cost_per_distance;
use crate::error::RoutingError;
use crate::route::{Location, Route};
use crate::traits::{DistanceLookup, ProductCatalog};

/// Product code to requested quantity.
///
/// Quantities are not validated: a zero or negative quantity still marks its
/// warehouse as active but adds no weight.
pub type Order = BTreeMap<String, i64>;

#[derive(Debug, Clone)]
pub struct SolveOptions {
    /// Reject orders spanning more distinct warehouses than this.
    pub max_active_warehouses: usize,
    /// Evaluate starting warehouses on the rayon pool.
    pub parallel: bool,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            max_active_warehouses: 8, // 7! = 5040 routes per start
            parallel: true,
        }
    }
}

/// One requested product, resolved against the catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderLine {
    pub product: String,
    pub quantity: i64,
    pub unit_weight: f64,
}

/// An order split by home warehouse.
///
/// Covers every warehouse of the topology, in topology order; warehouses
/// with nothing to pick up have an empty line list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupedOrder {
    groups: Vec<(Location, Vec<OrderLine>)>,
}

impl GroupedOrder {
    /// Lines to pick up at `location`; empty for the hub and idle warehouses.
    pub fn items_at(&self, location: &Location) -> &[OrderLine] {
        self.groups
            .iter()
            .find(|(warehouse, _)| warehouse == location)
            .map(|(_, lines)| lines.as_slice())
            .unwrap_or(&[])
    }

    /// Warehouses with at least one line, in topology order.
    pub fn active_warehouses(&self) -> Vec<Location> {
        self.groups
            .iter()
            .filter(|(_, lines)| !lines.is_empty())
            .map(|(warehouse, _)| warehouse.clone())
            .collect()
    }

    pub fn groups(&self) -> &[(Location, Vec<OrderLine>)] {
        &self.groups
    }
}

/// Best route found for an order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeliveryPlan {
    pub minimum_cost: f64,
    pub route: Route,
}

/// Splits `order` into per-warehouse line lists.
///
/// Fails on the first product code missing from the catalog; nothing is
/// returned for the rest of the order in that case.
pub fn group_order<C>(
    order: &Order,
    catalog: &C,
    warehouses: &[Location],
) -> Result<GroupedOrder, RoutingError>
where
    C: ProductCatalog,
{
    let mut groups: Vec<(Location, Vec<OrderLine>)> = warehouses
        .iter()
        .map(|warehouse| (warehouse.clone(), Vec::new()))
        .collect();

    for (code, &quantity) in order {
        let product = catalog
            .product(code)
            .ok_or_else(|| RoutingError::UnknownProduct(code.clone()))?;

        let line = OrderLine {
            product: code.clone(),
            quantity,
            unit_weight: product.unit_weight,
        };

        match groups.iter_mut().find(|(warehouse, _)| *warehouse == product.warehouse) {
            Some((_, lines)) => lines.push(line),
            // Catalogs built from a validated topology never hit this.
            None => groups.push((product.warehouse.clone(), vec![line])),
        }
    }

    Ok(GroupedOrder { groups })
}

/// Every route from `start` through the other active warehouses.
///
/// Each route is `start, (hub, w)..., hub`, one per ordering of the other
/// warehouses; with none left it is just `[start, hub]`.
pub fn generate_routes(start: &Location, active: &[Location], hub: &Location) -> Vec<Route> {
    let others: Vec<&Location> = active.iter().filter(|w| *w != start).unique().collect();
    if others.is_empty() {
        return vec![Route::new(vec![start.clone(), hub.clone()])];
    }
    let count = others.len();

    others
        .into_iter()
        .permutations(count)
        .map(|ordering| {
            let mut stops = Vec::with_capacity(2 * ordering.len() + 2);
            stops.push(start.clone());
            for warehouse in ordering {
                stops.push(hub.clone());
                stops.push(warehouse.clone());
            }
            stops.push(hub.clone());
            Route::new(stops)
        })
        .collect()
}

/// Cargo on board, as `(unit weight, count, origin)` entries.
#[derive(Debug, Default)]
struct CarriedItems {
    items: Vec<(f64, i64, Location)>,
}

impl CarriedItems {
    fn pick_up(&mut self, origin: &Location, lines: &[OrderLine]) {
        for line in lines {
            if line.quantity > 0 {
                self.items.push((line.unit_weight, line.quantity, origin.clone()));
            }
        }
    }

    fn total_weight(&self) -> f64 {
        self.items
            .iter()
            .map(|(weight, count, _)| weight * *count as f64)
            .sum()
    }

    fn drop_off(&mut self) {
        self.items.clear();
    }
}

/// Transport cost of driving `route` with the pickups in `grouped`.
///
/// Goods are loaded when leaving a warehouse and unloaded on reaching the
/// hub, so each leg is charged at the rate for what is on board during it.
pub fn evaluate_route<D>(
    route: &Route,
    grouped: &GroupedOrder,
    hub: &Location,
    distances: &D,
) -> Result<f64, RoutingError>
where
    D: DistanceLookup,
{
    let mut carried = CarriedItems::default();
    let mut total_cost = 0.0;

    for (from, to) in route.legs() {
        carried.pick_up(from, grouped.items_at(from));

        let distance = distances
            .distance(from, to)
            .ok_or_else(|| RoutingError::MissingDistance {
                from: from.clone(),
                to: to.clone(),
            })?;
        total_cost += cost_per_distance(carried.total_weight()) * distance;

        if to == hub {
            carried.drop_off();
        }
    }

    Ok(total_cost)
}

/// Cheapest candidate so far; `seq` orders candidates for tie-breaking.
#[derive(Debug, Clone)]
struct Candidate {
    cost: f64,
    seq: (usize, usize),
    route: Route,
}

impl Candidate {
    fn better(self, other: Candidate) -> Candidate {
        if other.cost < self.cost || (other.cost == self.cost && other.seq < self.seq) {
            other
        } else {
            self
        }
    }
}

/// Plans orders against a borrowed [`Topology`].
#[derive(Debug, Clone)]
pub struct Planner<'a> {
    topology: &'a Topology,
    options: SolveOptions,
}

impl<'a> Planner<'a> {
    pub fn new(topology: &'a Topology) -> Self {
        Self {
            topology,
            options: SolveOptions::default(),
        }
    }

    pub fn with_options(mut self, options: SolveOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &SolveOptions {
        &self.options
    }

    /// Minimum transport cost for `order`.
    pub fn compute_min_cost(&self, order: &Order) -> Result<f64, RoutingError> {
        self.plan(order).map(|plan| plan.minimum_cost)
    }

    /// Minimum transport cost for `order` together with a route achieving it.
    ///
    /// Ties go to the earliest start in topology order, then the earliest
    /// permutation, regardless of whether the search ran in parallel.
    pub fn plan(&self, order: &Order) -> Result<DeliveryPlan, RoutingError> {
        let topology = self.topology;
        let grouped = group_order(order, topology.catalog(), topology.warehouses())?;
        let active = grouped.active_warehouses();
        debug!(?active, "grouped order");

        if active.is_empty() {
            info!(minimum_cost = 0.0, "empty order");
            return Ok(DeliveryPlan {
                minimum_cost: 0.0,
                route: Route::empty(),
            });
        }

        let limit = self.options.max_active_warehouses;
        if active.len() > limit {
            warn!(active = active.len(), limit, "order spans too many warehouses");
            return Err(RoutingError::TooManyWarehouses {
                active: active.len(),
                limit,
            });
        }

        let best_from = |(start_idx, start): (usize, &Location)| -> Result<Option<Candidate>, RoutingError> {
            let mut best: Option<Candidate> = None;
            for (route_idx, route) in generate_routes(start, &active, topology.hub())
                .into_iter()
                .enumerate()
            {
                let cost = evaluate_route(&route, &grouped, topology.hub(), topology.distances())?;
                debug!(%start, %route, cost, "evaluated route");
                let candidate = Candidate {
                    cost,
                    seq: (start_idx, route_idx),
                    route,
                };
                best = Some(match best {
                    Some(current) => current.better(candidate),
                    None => candidate,
                });
            }
            Ok(best)
        };

        let best = if self.options.parallel {
            active
                .par_iter()
                .enumerate()
                .map(best_from)
                .try_reduce(|| None, |a, b| Ok(pick(a, b)))?
        } else {
            active
                .iter()
                .enumerate()
                .map(best_from)
                .try_fold(None, |a, b| b.map(|b| pick(a, b)))?
        };

        // Every start yields at least one route, so `best` is set here.
        let plan = match best {
            Some(candidate) => DeliveryPlan {
                minimum_cost: candidate.cost,
                route: candidate.route,
            },
            None => DeliveryPlan {
                minimum_cost: 0.0,
                route: Route::empty(),
            },
        };

        info!(minimum_cost = plan.minimum_cost, route = %plan.route, "planned order");
        Ok(plan)
    }
}

fn pick(a: Option<Candidate>, b: Option<Candidate>) -> Option<Candidate> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.better(b)),
        (a, None) => a,
        (None, b) => b,
    }
}

/// Minimum transport cost for `order` using default [`SolveOptions`].
pub fn compute_min_cost(topology: &Topology, order: &Order) -> Result<f64, RoutingError> {
    Planner::new(topology).compute_min_cost(order)
}
