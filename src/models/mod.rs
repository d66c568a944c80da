//! Domain model types for parcel delivery routing.
//!
//! Points and parcels describe the demand, delivery agents and the fleet
//! describe supply, routes are ordered stop sequences, and the ledger
//! tracks what is still owed during a run.

mod agent;
mod demand;
mod parcel;
mod point;
mod route;
mod solution;

pub use agent::{random_max_distances, DeliveryAgent, Fleet};
pub use demand::DemandLedger;
pub use parcel::{total_units, Parcel};
pub use point::Point;
pub use route::{Route, Stop, StopMarker};
pub use solution::Solution;
