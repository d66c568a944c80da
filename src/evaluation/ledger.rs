//! Human-readable cost ledger.

use std::fmt;

use super::{CostEntry, CostReporter, LegLabel};
use crate::models::{DeliveryAgent, Route};

struct RouteSection {
    agent_id: String,
    entries: Vec<CostEntry>,
    distance: f64,
    max_distance: Option<f64>,
}

/// Textual per-agent cost breakdown.
///
/// ```text
/// Route for DA_1:
///   Customer C1 (Parcels: 3): 10.00
///   Return to Depot (Parcels: 0): 10.00
///   Total Cost: 20.00
///   Total Distance: 20.00
///   Total Parcels Delivered: 3
///   Max Distance: 100.00
/// ```
pub struct CostLedger {
    sections: Vec<RouteSection>,
}

impl CostLedger {
    /// Builds the ledger for routes paired with the agents that drove them.
    pub fn new(reporter: &CostReporter<'_>, routes: &[Route], agents: &[DeliveryAgent]) -> Self {
        let costs = reporter.route_costs(routes);
        let sections = routes
            .iter()
            .zip(reporter.detailed_route_costs(routes))
            .zip(costs.distances)
            .enumerate()
            .map(|(i, ((route, entries), distance))| RouteSection {
                agent_id: route.agent_id().to_string(),
                entries,
                distance,
                max_distance: agents.get(i).and_then(DeliveryAgent::max_distance),
            })
            .collect();
        Self { sections }
    }

    /// Agents whose route is longer than their range limit.
    pub fn over_range(&self) -> Vec<&str> {
        self.sections
            .iter()
            .filter(|s| s.max_distance.is_some_and(|max| s.distance > max))
            .map(|s| s.agent_id.as_str())
            .collect()
    }
}

impl fmt::Display for CostLedger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for section in &self.sections {
            writeln!(f, "Route for {}:", section.agent_id)?;
            for entry in &section.entries {
                match entry.label {
                    LegLabel::Total => {
                        writeln!(f, "  Total Cost: {:.2}", entry.cost)?;
                        writeln!(f, "  Total Distance: {:.2}", section.distance)?;
                        writeln!(f, "  Total Parcels Delivered: {}", entry.parcels)?;
                        if let Some(max) = section.max_distance {
                            writeln!(f, "  Max Distance: {max:.2}")?;
                            if section.distance > max {
                                writeln!(f, "  WARNING: Max distance exceeded!")?;
                            }
                        }
                    }
                    _ => writeln!(
                        f,
                        "  {} (Parcels: {}): {:.2}",
                        entry.label, entry.parcels, entry.cost
                    )?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
