//! Planning run orchestration.

use tracing::info;

use crate::config::PlannerConfig;
use crate::constructive::round_robin_greedy;
use crate::distance::DistanceMatrix;
use crate::error::ConfigurationError;
use crate::evaluation::{CostLedger, CostReporter};
use crate::models::{total_units, Fleet, Parcel, Point, Solution};

/// Owns everything a planning run reads and writes.
///
/// The distance matrix is built once on construction, before any delivery
/// happens. Capacity per agent may be lowered by the configured
/// [`CapacityPolicy`](crate::config::CapacityPolicy).
///
/// # Examples
///
/// ```
/// use parcel_routing::config::{CapacityPolicy, PlannerConfig};
/// use parcel_routing::models::{Parcel, Point};
/// use parcel_routing::planner::Planner;
///
/// let parcels = vec![
///     Parcel::new("C1", Point::new(10.0, 0.0), 3),
///     Parcel::new("C2", Point::new(0.0, 10.0), 2),
/// ];
/// let config = PlannerConfig {
///     capacity_policy: CapacityPolicy::disabled(),
///     ..PlannerConfig::default()
/// };
/// let mut planner = Planner::new(Point::new(0.0, 0.0), parcels, 1, 5, config).unwrap();
/// planner.set_max_distances(&[100.0]).unwrap();
///
/// let solution = planner.plan().unwrap();
/// assert_eq!(solution.total_delivered(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct Planner {
    depot: Point,
    parcels: Vec<Parcel>,
    distances: DistanceMatrix,
    fleet: Fleet,
    config: PlannerConfig,
}

impl Planner {
    /// Prepares a run over `parcels` with `num_agents` identical agents.
    pub fn new(
        depot: Point,
        parcels: Vec<Parcel>,
        num_agents: usize,
        capacity_per_agent: u32,
        config: PlannerConfig,
    ) -> Result<Self, ConfigurationError> {
        config.validate()?;
        let distances = DistanceMatrix::from_locations(depot, &parcels);

        let units = total_units(&parcels);
        let capacity = config
            .capacity_policy
            .adjust(num_agents, capacity_per_agent, units);
        if capacity != capacity_per_agent {
            info!(
                requested = capacity_per_agent,
                adjusted = capacity,
                total_units = units,
                "reduced capacity per agent"
            );
        }
        let fleet = Fleet::new(num_agents, capacity, None)?;

        Ok(Self {
            depot,
            parcels,
            distances,
            fleet,
            config,
        })
    }

    /// Assigns each agent's range limit by position.
    pub fn set_max_distances(&mut self, values: &[f64]) -> Result<(), ConfigurationError> {
        self.fleet.set_max_distances(values)
    }

    /// Runs the route constructor.
    pub fn plan(&mut self) -> Result<Solution, ConfigurationError> {
        round_robin_greedy(
            &self.parcels,
            &self.distances,
            &mut self.fleet,
            &self.config.greedy,
        )
    }

    /// Cost reporter over this run's parcels and matrix.
    pub fn cost_reporter(&self) -> CostReporter<'_> {
        CostReporter::new(&self.parcels, &self.distances)
    }

    /// Text ledger for a solution produced by this planner.
    pub fn ledger(&self, solution: &Solution) -> CostLedger {
        CostLedger::new(&self.cost_reporter(), solution.routes(), self.fleet.agents())
    }

    pub fn depot(&self) -> Point {
        self.depot
    }

    pub fn parcels(&self) -> &[Parcel] {
        &self.parcels
    }

    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }
}
