//! Round-robin greedy construction with forced depot returns.
//!
//! Agents take turns in fleet order. On its turn an agent either drives to
//! the best reachable parcel or, when it is full or nothing is reachable,
//! returns to the depot and unloads. A candidate is reachable only if the
//! agent can still get back to the depot within its range afterwards.
//!
//! Candidates are scored by `units - distance * distance_weight`: the number
//! of units the agent can hand over dominates, and leg distance only breaks
//! ties. Equal scores go to the lowest parcel index.
//!
//! # Complexity
//!
//! O(I · m · n) where I = n · m · `iteration_factor` is the iteration cap,
//! m the number of agents and n the number of parcels.

use tracing::{debug, info, instrument, warn, Level};

use crate::config::GreedyParams;
use crate::distance::DistanceMatrix;
use crate::error::ConfigurationError;
use crate::models::{DeliveryAgent, DemandLedger, Fleet, Parcel, Solution, Stop, StopMarker};

/// Where an agent is between turns.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Position {
    AtDepot,
    AtParcel(usize),
}

impl Position {
    fn marker(self) -> StopMarker {
        match self {
            Position::AtDepot => StopMarker::Depot,
            Position::AtParcel(k) => StopMarker::Parcel(k),
        }
    }
}

/// Per-agent run state not kept on the agent itself.
#[derive(Debug, Clone, Copy)]
struct Cursor {
    position: Position,
    travelled: f64,
    max_distance: f64,
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    parcel: usize,
    units: u32,
    leg: f64,
    score: f64,
}

/// Builds one route per agent by round-robin greedy assignment.
///
/// Every agent's route and load are reset first; on return each agent holds
/// its finished route, which starts and ends at the depot. Demand left when
/// the iteration cap runs out is reported on the [`Solution`].
///
/// # Errors
///
/// [`ConfigurationError::MaxDistancesNotSet`] if any agent has no range
/// limit.
///
/// # Examples
///
/// ```
/// use parcel_routing::config::GreedyParams;
/// use parcel_routing::constructive::round_robin_greedy;
/// use parcel_routing::distance::DistanceMatrix;
/// use parcel_routing::models::{Fleet, Parcel, Point, StopMarker};
///
/// let depot = Point::new(0.0, 0.0);
/// let parcels = vec![
///     Parcel::new("C1", Point::new(10.0, 0.0), 3),
///     Parcel::new("C2", Point::new(0.0, 10.0), 2),
/// ];
/// let dm = DistanceMatrix::from_locations(depot, &parcels);
/// let mut fleet = Fleet::new(1, 5, Some(100.0)).unwrap();
///
/// let sol = round_robin_greedy(&parcels, &dm, &mut fleet, &GreedyParams::default()).unwrap();
/// assert!(sol.is_complete());
/// assert_eq!(
///     sol.routes()[0].markers(),
///     vec![StopMarker::Depot, StopMarker::Parcel(0), StopMarker::Parcel(1), StopMarker::Depot]
/// );
/// ```
#[instrument(skip_all, level = Level::DEBUG, fields(parcels = parcels.len(), agents = fleet.len()))]
pub fn round_robin_greedy(
    parcels: &[Parcel],
    distances: &DistanceMatrix,
    fleet: &mut Fleet,
    params: &GreedyParams,
) -> Result<Solution, ConfigurationError> {
    let limits = fleet.max_distances()?;
    debug_assert_eq!(distances.size(), parcels.len() + 1);

    fleet.reset();
    let mut ledger = DemandLedger::new(parcels);
    let mut cursors: Vec<Cursor> = limits
        .into_iter()
        .map(|max_distance| Cursor {
            position: Position::AtDepot,
            travelled: 0.0,
            max_distance,
        })
        .collect();

    let max_iterations = parcels
        .len()
        .saturating_mul(fleet.len())
        .saturating_mul(params.iteration_factor);
    let mut iterations = 0;

    info!(
        parcels = parcels.len(),
        units = ledger.undelivered_units(),
        agents = fleet.len(),
        max_iterations,
        "starting route construction"
    );

    while !ledger.is_empty() && iterations < max_iterations {
        iterations += 1;
        for (agent, cursor) in fleet.agents_mut().iter_mut().zip(cursors.iter_mut()) {
            if ledger.is_empty() {
                break;
            }
            take_turn(agent, cursor, &mut ledger, distances, params);
        }
    }

    for (agent, cursor) in fleet.agents_mut().iter_mut().zip(cursors.iter_mut()) {
        close_route(agent, cursor, distances);
    }

    let undelivered = ledger.undelivered_units();
    if undelivered > 0 {
        warn!(
            iterations,
            undelivered_units = undelivered,
            unassigned_parcels = ledger.num_unassigned(),
            "iteration cap reached with demand left"
        );
    } else {
        info!(iterations, "all parcels assigned");
    }

    let routes = fleet.agents().iter().map(|a| a.route().clone()).collect();
    Ok(Solution::new(
        routes,
        ledger.unassigned_indices(),
        undelivered,
        iterations,
    ))
}

fn take_turn(
    agent: &mut DeliveryAgent,
    cursor: &mut Cursor,
    ledger: &mut DemandLedger,
    distances: &DistanceMatrix,
    params: &GreedyParams,
) {
    if agent.route().is_empty() {
        agent.route_mut().push_stop(Stop::depot());
    }

    let candidate = if agent.is_full() {
        None
    } else {
        best_candidate(agent, cursor, ledger, distances, params)
    };

    let Some(candidate) = candidate else {
        return_to_depot(agent, cursor, distances);
        return;
    };

    let delivered = ledger.deliver(candidate.parcel, candidate.units);
    agent.take_load(delivered);
    agent
        .route_mut()
        .push_stop(Stop::parcel(candidate.parcel, delivered));
    cursor.travelled += candidate.leg;
    cursor.position = Position::AtParcel(candidate.parcel);

    debug!(
        agent = agent.id(),
        parcel = candidate.parcel,
        delivered,
        load = agent.load(),
        travelled = cursor.travelled,
        "assigned parcel"
    );
}

fn best_candidate(
    agent: &DeliveryAgent,
    cursor: &Cursor,
    ledger: &DemandLedger,
    distances: &DistanceMatrix,
    params: &GreedyParams,
) -> Option<Candidate> {
    let from = cursor.position.marker();
    let remaining_capacity = agent.remaining_capacity();
    let mut best: Option<Candidate> = None;

    for parcel in ledger.unassigned() {
        let to = StopMarker::Parcel(parcel);
        let leg = distances.leg(from, to);
        let back = distances.leg(to, StopMarker::Depot);
        if cursor.travelled + leg + back > cursor.max_distance {
            continue;
        }

        let units = remaining_capacity.min(ledger.remaining(parcel));
        let score = f64::from(units) - leg * params.distance_weight;
        // strict comparison keeps the lowest index on ties
        if best.map_or(true, |b| score > b.score) {
            best = Some(Candidate {
                parcel,
                units,
                leg,
                score,
            });
        }
    }

    best
}

fn return_to_depot(agent: &mut DeliveryAgent, cursor: &mut Cursor, distances: &DistanceMatrix) {
    if let Position::AtParcel(_) = cursor.position {
        cursor.travelled += distances.leg(cursor.position.marker(), StopMarker::Depot);
        cursor.position = Position::AtDepot;
        agent.route_mut().push_stop(Stop::depot());
        debug!(
            agent = agent.id(),
            unloaded = agent.load(),
            travelled = cursor.travelled,
            "returned to depot"
        );
    }
    agent.unload();
}

fn close_route(agent: &mut DeliveryAgent, cursor: &mut Cursor, distances: &DistanceMatrix) {
    if agent.route().is_empty() {
        agent.route_mut().push_stop(Stop::depot());
    }
    match cursor.position {
        Position::AtParcel(_) => return_to_depot(agent, cursor, distances),
        Position::AtDepot => {
            if agent.route().len() == 1 {
                agent.route_mut().push_stop(Stop::depot());
            }
            agent.unload();
        }
    }
    agent.route_mut().set_total_distance(cursor.travelled);
}
