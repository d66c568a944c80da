//! Route and stop types.

use std::fmt;

/// Where a stop takes place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StopMarker {
    /// The shared depot.
    Depot,
    /// A parcel, by index into the parcel list.
    Parcel(usize),
}

impl StopMarker {
    /// Row/column of this stop in a distance matrix built over
    /// `{depot} ∪ parcels` (depot = 0, parcel `k` = `k + 1`).
    pub fn matrix_index(&self) -> usize {
        match self {
            StopMarker::Depot => 0,
            StopMarker::Parcel(k) => k + 1,
        }
    }

    /// Returns `true` for the depot marker.
    pub fn is_depot(&self) -> bool {
        matches!(self, StopMarker::Depot)
    }
}

impl fmt::Display for StopMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopMarker::Depot => write!(f, "DEPOT"),
            StopMarker::Parcel(k) => write!(f, "parcel_{k}"),
        }
    }
}

/// A single stop and the parcel units handed over there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stop {
    /// Stop location.
    pub marker: StopMarker,
    /// Units delivered at this stop (0 at the depot).
    pub delivered: u32,
}

impl Stop {
    /// A depot stop.
    pub fn depot() -> Self {
        Self {
            marker: StopMarker::Depot,
            delivered: 0,
        }
    }

    /// A delivery stop at parcel `index`.
    pub fn parcel(index: usize, delivered: u32) -> Self {
        Self {
            marker: StopMarker::Parcel(index),
            delivered,
        }
    }
}

/// An ordered sequence of stops driven by a single delivery agent.
///
/// Once construction completes a route begins and ends with a depot stop.
/// Depot stops in between mark a return for reloading.
///
/// # Examples
///
/// ```
/// use parcel_routing::models::{Route, Stop, StopMarker};
///
/// let mut route = Route::new("DA_1");
/// route.push_stop(Stop::depot());
/// route.push_stop(Stop::parcel(0, 3));
/// route.push_stop(Stop::depot());
/// assert_eq!(route.len(), 3);
/// assert_eq!(route.markers(), vec![StopMarker::Depot, StopMarker::Parcel(0), StopMarker::Depot]);
/// assert_eq!(route.total_delivered(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    agent_id: String,
    stops: Vec<Stop>,
    total_distance: f64,
}

impl Route {
    /// Creates an empty route for the given agent.
    pub fn new(agent_id: impl Into<String>) -> Self {
        Self {
            agent_id: agent_id.into(),
            stops: Vec::new(),
            total_distance: 0.0,
        }
    }

    /// Appends a stop.
    pub fn push_stop(&mut self, stop: Stop) {
        self.stops.push(stop);
    }

    /// Agent driving this route.
    pub fn agent_id(&self) -> &str {
        &self.agent_id
    }

    /// Stops in visiting order.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Number of stops, depot stops included.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Returns `true` if no stop has been recorded.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Stop markers in visiting order.
    pub fn markers(&self) -> Vec<StopMarker> {
        self.stops.iter().map(|s| s.marker).collect()
    }

    /// Units delivered at each stop, parallel to [`markers`](Self::markers).
    pub fn parcels_delivered(&self) -> Vec<u32> {
        self.stops.iter().map(|s| s.delivered).collect()
    }

    /// Total units delivered along the route.
    pub fn total_delivered(&self) -> u64 {
        self.stops.iter().map(|s| u64::from(s.delivered)).sum()
    }

    /// Number of stops at parcels.
    pub fn num_deliveries(&self) -> usize {
        self.stops.iter().filter(|s| !s.marker.is_depot()).count()
    }

    /// Number of depot returns between the opening and closing depot stops.
    pub fn num_reloads(&self) -> usize {
        let depots = self.stops.iter().filter(|s| s.marker.is_depot()).count();
        depots.saturating_sub(2)
    }

    /// Returns `true` if the route opens and closes at the depot.
    pub fn is_closed(&self) -> bool {
        self.stops.len() >= 2
            && self.stops.first().is_some_and(|s| s.marker.is_depot())
            && self.stops.last().is_some_and(|s| s.marker.is_depot())
    }

    /// Load carried out of the depot on each trip.
    pub fn trip_loads(&self) -> Vec<u32> {
        let mut loads = Vec::new();
        let mut current = 0;
        for stop in self.stops.iter().skip(1) {
            if stop.marker.is_depot() {
                loads.push(current);
                current = 0;
            } else {
                current += stop.delivered;
            }
        }
        loads
    }

    /// Distance travelled (set by the constructor).
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Sets the travelled distance.
    pub fn set_total_distance(&mut self, d: f64) {
        self.total_distance = d;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_trip_route() -> Route {
        let mut r = Route::new("DA_2");
        r.push_stop(Stop::depot());
        r.push_stop(Stop::parcel(4, 3));
        r.push_stop(Stop::parcel(1, 2));
        r.push_stop(Stop::depot());
        r.push_stop(Stop::parcel(4, 1));
        r.push_stop(Stop::depot());
        r
    }

    #[test]
    fn test_route_empty() {
        let r = Route::new("DA_1");
        assert!(r.is_empty());
        assert_eq!(r.len(), 0);
        assert_eq!(r.agent_id(), "DA_1");
        assert_eq!(r.total_distance(), 0.0);
        assert_eq!(r.total_delivered(), 0);
        assert!(!r.is_closed());
    }

    #[test]
    fn test_route_parallel_sequences() {
        let r = two_trip_route();
        assert_eq!(
            r.markers(),
            vec![
                StopMarker::Depot,
                StopMarker::Parcel(4),
                StopMarker::Parcel(1),
                StopMarker::Depot,
                StopMarker::Parcel(4),
                StopMarker::Depot,
            ]
        );
        assert_eq!(r.parcels_delivered(), vec![0, 3, 2, 0, 1, 0]);
        assert_eq!(r.total_delivered(), 6);
        assert_eq!(r.num_deliveries(), 3);
    }

    #[test]
    fn test_route_trips() {
        let r = two_trip_route();
        assert!(r.is_closed());
        assert_eq!(r.num_reloads(), 1);
        assert_eq!(r.trip_loads(), vec![5, 1]);
    }

    #[test]
    fn test_marker_matrix_index() {
        assert_eq!(StopMarker::Depot.matrix_index(), 0);
        assert_eq!(StopMarker::Parcel(0).matrix_index(), 1);
        assert_eq!(StopMarker::Parcel(9).matrix_index(), 10);
    }

    #[test]
    fn test_marker_display() {
        assert_eq!(StopMarker::Depot.to_string(), "DEPOT");
        assert_eq!(StopMarker::Parcel(3).to_string(), "parcel_3");
    }
}
