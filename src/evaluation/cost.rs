//! Route cost reporter.

use std::fmt;

use crate::distance::DistanceMatrix;
use crate::models::{Parcel, Route, StopMarker};

/// Per-route totals, parallel to the routes they were computed from.
///
/// Cost is distance with unit weight; both are reported so callers can
/// tell them apart once a cost model is introduced.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteCosts {
    pub costs: Vec<f64>,
    pub distances: Vec<f64>,
}

/// What a detailed cost entry refers to.
#[derive(Debug, Clone, PartialEq)]
pub enum LegLabel {
    ReturnToDepot,
    Customer(String),
    Total,
}

impl fmt::Display for LegLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LegLabel::ReturnToDepot => write!(f, "Return to Depot"),
            LegLabel::Customer(id) => write!(f, "Customer {id}"),
            LegLabel::Total => write!(f, "Total"),
        }
    }
}

/// One line of a route's cost breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct CostEntry {
    pub label: LegLabel,
    pub cost: f64,
    pub parcels: u64,
}

/// Computes leg and route costs from a precomputed distance matrix.
///
/// # Examples
///
/// ```
/// use parcel_routing::models::{Parcel, Point, Route, Stop};
/// use parcel_routing::distance::DistanceMatrix;
/// use parcel_routing::evaluation::CostReporter;
///
/// let parcels = vec![Parcel::new("C1", Point::new(3.0, 4.0), 2)];
/// let dm = DistanceMatrix::from_locations(Point::new(0.0, 0.0), &parcels);
///
/// let mut route = Route::new("DA_1");
/// route.push_stop(Stop::depot());
/// route.push_stop(Stop::parcel(0, 2));
/// route.push_stop(Stop::depot());
///
/// let reporter = CostReporter::new(&parcels, &dm);
/// assert!((reporter.route_cost(&route) - 10.0).abs() < 1e-10);
/// ```
pub struct CostReporter<'a> {
    parcels: &'a [Parcel],
    distances: &'a DistanceMatrix,
}

impl<'a> CostReporter<'a> {
    /// Creates a reporter over the run's parcels and matrix.
    pub fn new(parcels: &'a [Parcel], distances: &'a DistanceMatrix) -> Self {
        Self { parcels, distances }
    }

    /// Sum of leg distances along a route, starting from the depot.
    pub fn route_cost(&self, route: &Route) -> f64 {
        let mut current = StopMarker::Depot;
        let mut total = 0.0;
        for stop in route.stops() {
            total += self.distances.leg(current, stop.marker);
            current = stop.marker;
        }
        total
    }

    /// Cost and distance of every route.
    pub fn route_costs(&self, routes: &[Route]) -> RouteCosts {
        let costs: Vec<f64> = routes.iter().map(|r| self.route_cost(r)).collect();
        RouteCosts {
            distances: costs.clone(),
            costs,
        }
    }

    /// Leg-by-leg breakdown of one route.
    ///
    /// Zero-length legs (e.g. depot to depot) are left out. The last entry
    /// is always [`LegLabel::Total`] with the summed cost and the units
    /// delivered along the whole route.
    ///
    /// # Panics
    ///
    /// Panics if the route visits a parcel index outside this reporter's
    /// parcel list.
    pub fn route_details(&self, route: &Route) -> Vec<CostEntry> {
        let mut entries = Vec::new();
        let mut current = StopMarker::Depot;
        let mut total = 0.0;

        for stop in route.stops() {
            let cost = self.distances.leg(current, stop.marker);
            if cost > 0.0 {
                let (label, parcels) = match stop.marker {
                    StopMarker::Depot => (LegLabel::ReturnToDepot, 0),
                    StopMarker::Parcel(k) => (
                        LegLabel::Customer(self.parcels[k].customer_id().to_string()),
                        u64::from(stop.delivered),
                    ),
                };
                entries.push(CostEntry {
                    label,
                    cost,
                    parcels,
                });
                total += cost;
            }
            current = stop.marker;
        }

        entries.push(CostEntry {
            label: LegLabel::Total,
            cost: total,
            parcels: route.total_delivered(),
        });
        entries
    }

    /// Leg-by-leg breakdown of every route.
    ///
    /// # Panics
    ///
    /// See [`route_details`](Self::route_details).
    pub fn detailed_route_costs(&self, routes: &[Route]) -> Vec<Vec<CostEntry>> {
        routes.iter().map(|r| self.route_details(r)).collect()
    }
}
