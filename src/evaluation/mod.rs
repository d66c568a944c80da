//! Route cost evaluation and reporting.

mod cost;
mod ledger;

pub use cost::{CostEntry, CostReporter, LegLabel, RouteCosts};
pub use ledger::CostLedger;
