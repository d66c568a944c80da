use parcel_routing::config::GreedyParams;
use parcel_routing::constructive::round_robin_greedy;
use parcel_routing::distance::DistanceMatrix;
use parcel_routing::evaluation::CostReporter;
use parcel_routing::models::{total_units, Fleet, Parcel, Point, Solution, StopMarker};
use proptest::prelude::*;

fn arb_point() -> impl Strategy<Value = Point> {
    (0.0..100.0f64, 0.0..100.0f64).prop_map(|(x, y)| Point::new(x, y))
}

fn arb_parcels(max: usize) -> impl Strategy<Value = Vec<Parcel>> {
    prop::collection::vec((arb_point(), 1u32..=5), 1..=max).prop_map(|items| {
        items
            .into_iter()
            .enumerate()
            .map(|(i, (p, q))| Parcel::new(format!("C{}", i + 1), p, q))
            .collect()
    })
}

fn delivered_per_parcel(solution: &Solution, n: usize) -> Vec<u32> {
    let mut delivered = vec![0; n];
    for route in solution.routes() {
        for stop in route.stops() {
            if let StopMarker::Parcel(k) = stop.marker {
                delivered[k] += stop.delivered;
            }
        }
    }
    delivered
}

proptest! {
    #[test]
    fn matrix_symmetric_zero_diagonal(depot in arb_point(), parcels in arb_parcels(20)) {
        let dm = DistanceMatrix::from_locations(depot, &parcels);
        prop_assert_eq!(dm.size(), parcels.len() + 1);
        for i in 0..dm.size() {
            prop_assert_eq!(dm.get(i, i), 0.0);
            for j in 0..dm.size() {
                prop_assert_eq!(dm.get(i, j), dm.get(j, i));
            }
        }
    }

    #[test]
    fn routes_closed_and_within_capacity(
        depot in arb_point(),
        parcels in arb_parcels(15),
        agents in 1usize..5,
        capacity in 1u32..8,
        max_distance in 0.0..400.0f64,
    ) {
        let dm = DistanceMatrix::from_locations(depot, &parcels);
        let mut fleet = Fleet::new(agents, capacity, Some(max_distance)).expect("valid fleet");
        let solution = round_robin_greedy(&parcels, &dm, &mut fleet, &GreedyParams::default())
            .expect("max distances set");

        prop_assert_eq!(solution.num_routes(), agents);
        for route in solution.routes() {
            prop_assert!(route.is_closed());
            prop_assert!(route.trip_loads().iter().all(|&load| load <= capacity));
            prop_assert!(route.total_distance() <= max_distance + 1e-9);
        }

        let delivered = delivered_per_parcel(&solution, parcels.len());
        for (parcel, &units) in parcels.iter().zip(&delivered) {
            prop_assert!(units <= parcel.quantity());
        }
        let total: u64 = delivered.iter().map(|&u| u64::from(u)).sum();
        prop_assert_eq!(total + solution.undelivered_units(), total_units(&parcels));
    }

    #[test]
    fn ample_fleet_delivers_everything_in_one_pass(
        depot in arb_point(),
        parcels in arb_parcels(15),
        agents in 1usize..4,
    ) {
        let dm = DistanceMatrix::from_locations(depot, &parcels);
        let capacity = u32::try_from(total_units(&parcels)).expect("small instance");
        let mut fleet = Fleet::new(agents, capacity, Some(f64::INFINITY)).expect("valid fleet");
        let solution = round_robin_greedy(&parcels, &dm, &mut fleet, &GreedyParams::default())
            .expect("max distances set");

        prop_assert!(solution.is_complete());
        let delivered = delivered_per_parcel(&solution, parcels.len());
        for (parcel, &units) in parcels.iter().zip(&delivered) {
            prop_assert_eq!(units, parcel.quantity());
        }
        for route in solution.routes() {
            prop_assert_eq!(route.num_reloads(), 0);
        }
    }

    #[test]
    fn short_range_assigns_nothing(depot in arb_point(), parcels in arb_parcels(10), agents in 1usize..4) {
        let dm = DistanceMatrix::from_locations(depot, &parcels);
        let nearest = (1..dm.size()).map(|k| dm.get(0, k)).fold(f64::INFINITY, f64::min);
        prop_assume!(nearest > 1e-6);

        let mut fleet = Fleet::new(agents, 5, Some(nearest * 1.999)).expect("valid fleet");
        let solution = round_robin_greedy(&parcels, &dm, &mut fleet, &GreedyParams::default())
            .expect("max distances set");

        prop_assert_eq!(solution.total_delivered(), 0);
        prop_assert_eq!(solution.undelivered_units(), total_units(&parcels));
        for route in solution.routes() {
            prop_assert_eq!(route.markers(), vec![StopMarker::Depot, StopMarker::Depot]);
        }
    }

    #[test]
    fn route_costs_match_construction_and_repeat(
        depot in arb_point(),
        parcels in arb_parcels(12),
        agents in 1usize..4,
        capacity in 1u32..6,
    ) {
        let dm = DistanceMatrix::from_locations(depot, &parcels);
        let mut fleet = Fleet::new(agents, capacity, Some(500.0)).expect("valid fleet");
        let solution = round_robin_greedy(&parcels, &dm, &mut fleet, &GreedyParams::default())
            .expect("max distances set");

        let reporter = CostReporter::new(&parcels, &dm);
        let first = reporter.route_costs(solution.routes());
        let second = reporter.route_costs(solution.routes());
        for ((a, b), route) in first.costs.iter().zip(&second.costs).zip(solution.routes()) {
            prop_assert_eq!(a.to_bits(), b.to_bits());
            prop_assert_eq!(a.to_bits(), route.total_distance().to_bits());
        }
    }
}
