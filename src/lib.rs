//! # parcel-routing
//!
//! Assigns parcel deliveries to a fleet of capacity- and range-limited
//! delivery agents and builds one depot-to-depot route per agent.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Point, Parcel, DeliveryAgent, Fleet, Route, Solution)
//! - [`distance`] — Euclidean distance and the precomputed distance matrix
//! - [`constructive`] — Round-robin greedy route construction
//! - [`evaluation`] — Route cost reporting and the text cost ledger
//! - [`planner`] — Orchestration of a single planning run
//! - [`job`] — Running a plan on a background worker
//! - [`io`] — Parcel file persistence
//! - [`generate`] — Random points and parcels
//! - [`config`] — Tunable planner parameters
//! - [`error`] — Error types

pub mod config;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod generate;
pub mod io;
pub mod job;
pub mod models;
pub mod planner;
