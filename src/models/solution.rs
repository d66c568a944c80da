//! Construction result.

use super::{Route, StopMarker};

/// The outcome of one planning run.
///
/// Holds one route per agent in fleet order. If the iteration cap was
/// reached before all demand was met, the leftover parcels and units are
/// reported here rather than as an error.
///
/// # Examples
///
/// ```
/// use parcel_routing::models::{Route, Solution};
///
/// let sol = Solution::new(vec![Route::new("DA_1")], vec![2], 3, 10);
/// assert_eq!(sol.num_routes(), 1);
/// assert_eq!(sol.undelivered_units(), 3);
/// assert!(!sol.is_complete());
/// ```
#[derive(Debug, Clone)]
pub struct Solution {
    routes: Vec<Route>,
    unassigned: Vec<usize>,
    undelivered_units: u64,
    iterations: usize,
}

impl Solution {
    /// Creates a solution.
    pub fn new(
        routes: Vec<Route>,
        unassigned: Vec<usize>,
        undelivered_units: u64,
        iterations: usize,
    ) -> Self {
        Self {
            routes,
            unassigned,
            undelivered_units,
            iterations,
        }
    }

    /// Routes in fleet order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Number of routes (one per agent).
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Per-agent stop markers.
    pub fn route_markers(&self) -> Vec<Vec<StopMarker>> {
        self.routes.iter().map(Route::markers).collect()
    }

    /// Per-agent delivered counts, parallel to [`route_markers`](Self::route_markers).
    pub fn parcels_delivered(&self) -> Vec<Vec<u32>> {
        self.routes.iter().map(Route::parcels_delivered).collect()
    }

    /// Indices of parcels with demand left.
    pub fn unassigned(&self) -> &[usize] {
        &self.unassigned
    }

    /// Number of parcels with demand left.
    pub fn num_unassigned(&self) -> usize {
        self.unassigned.len()
    }

    /// Units not delivered when the run stopped.
    pub fn undelivered_units(&self) -> u64 {
        self.undelivered_units
    }

    /// Returns `true` if all demand was delivered.
    pub fn is_complete(&self) -> bool {
        self.undelivered_units == 0
    }

    /// Round-robin iterations performed.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Units delivered across all routes.
    pub fn total_delivered(&self) -> u64 {
        self.routes.iter().map(Route::total_delivered).sum()
    }

    /// Distance travelled across all routes.
    pub fn total_distance(&self) -> f64 {
        self.routes.iter().map(Route::total_distance).sum()
    }
}
