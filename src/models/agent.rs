//! Delivery agents and the fleet they form.

use rand::Rng;

use super::Route;
use crate::error::ConfigurationError;

/// A delivery agent with a load capacity and a travel range.
///
/// `load` and `route` are run state written by the route constructor.
/// The load returns to zero whenever the agent returns to the depot.
///
/// # Examples
///
/// ```
/// use parcel_routing::models::DeliveryAgent;
///
/// let agent = DeliveryAgent::new("DA_1", 10).with_max_distance(150.0);
/// assert_eq!(agent.capacity(), 10);
/// assert_eq!(agent.max_distance(), Some(150.0));
/// assert_eq!(agent.remaining_capacity(), 10);
/// ```
#[derive(Debug, Clone)]
pub struct DeliveryAgent {
    id: String,
    capacity: u32,
    max_distance: Option<f64>,
    load: u32,
    route: Route,
}

impl DeliveryAgent {
    /// Creates an idle agent with no range limit set.
    pub fn new(id: impl Into<String>, capacity: u32) -> Self {
        let id = id.into();
        Self {
            route: Route::new(id.clone()),
            id,
            capacity,
            max_distance: None,
            load: 0,
        }
    }

    /// Sets the maximum travel distance.
    pub fn with_max_distance(mut self, max: f64) -> Self {
        self.max_distance = Some(max);
        self
    }

    /// Agent ID.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Maximum load per trip.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Maximum travel distance, if set.
    pub fn max_distance(&self) -> Option<f64> {
        self.max_distance
    }

    /// Sets the maximum travel distance.
    pub fn set_max_distance(&mut self, max: f64) {
        self.max_distance = Some(max);
    }

    /// Units carried on the current trip.
    pub fn load(&self) -> u32 {
        self.load
    }

    /// Units that still fit on the current trip.
    pub fn remaining_capacity(&self) -> u32 {
        self.capacity.saturating_sub(self.load)
    }

    /// Returns `true` when no more units fit on the current trip.
    pub fn is_full(&self) -> bool {
        self.load >= self.capacity
    }

    /// Route built in the most recent run.
    pub fn route(&self) -> &Route {
        &self.route
    }

    pub(crate) fn route_mut(&mut self) -> &mut Route {
        &mut self.route
    }

    /// Adds units to the current trip.
    pub(crate) fn take_load(&mut self, units: u32) {
        self.load += units;
        debug_assert!(self.load <= self.capacity);
    }

    /// Empties the vehicle (on arrival at the depot).
    pub(crate) fn unload(&mut self) {
        self.load = 0;
    }

    /// Clears run state before a new run.
    pub(crate) fn reset(&mut self) {
        self.load = 0;
        self.route = Route::new(self.id.clone());
    }
}

/// The ordered set of agents taking part in a run.
///
/// Order matters: the route constructor visits agents round-robin in
/// fleet order.
#[derive(Debug, Clone)]
pub struct Fleet {
    agents: Vec<DeliveryAgent>,
}

impl Fleet {
    /// Creates `count` identical agents named `DA_1`, `DA_2`, ... in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use parcel_routing::models::Fleet;
    ///
    /// let fleet = Fleet::new(3, 10, None).unwrap();
    /// let ids: Vec<&str> = fleet.agents().iter().map(|a| a.id()).collect();
    /// assert_eq!(ids, vec!["DA_1", "DA_2", "DA_3"]);
    /// assert!(fleet.max_distances().is_err());
    /// ```
    pub fn new(
        count: usize,
        capacity_per_agent: u32,
        default_max_distance: Option<f64>,
    ) -> Result<Self, ConfigurationError> {
        if count == 0 {
            return Err(ConfigurationError::NoAgents);
        }
        if capacity_per_agent == 0 {
            return Err(ConfigurationError::ZeroCapacity);
        }
        let agents = (1..=count)
            .map(|i| {
                let agent = DeliveryAgent::new(format!("DA_{i}"), capacity_per_agent);
                match default_max_distance {
                    Some(max) => agent.with_max_distance(max),
                    None => agent,
                }
            })
            .collect();
        Ok(Self { agents })
    }

    /// Assigns range limits by position.
    ///
    /// Fails if the number of values differs from the number of agents; in
    /// that case no agent is modified.
    pub fn set_max_distances(&mut self, values: &[f64]) -> Result<(), ConfigurationError> {
        if values.len() != self.agents.len() {
            return Err(ConfigurationError::MaxDistanceCountMismatch {
                expected: self.agents.len(),
                actual: values.len(),
            });
        }
        for (agent, &max) in self.agents.iter_mut().zip(values) {
            agent.set_max_distance(max);
        }
        Ok(())
    }

    /// Range limit of every agent, in fleet order.
    ///
    /// Fails with [`ConfigurationError::MaxDistancesNotSet`] if any agent
    /// has none.
    pub fn max_distances(&self) -> Result<Vec<f64>, ConfigurationError> {
        self.agents
            .iter()
            .map(|a| a.max_distance().ok_or(ConfigurationError::MaxDistancesNotSet))
            .collect()
    }

    /// Agents in round-robin order.
    pub fn agents(&self) -> &[DeliveryAgent] {
        &self.agents
    }

    pub(crate) fn agents_mut(&mut self) -> &mut [DeliveryAgent] {
        &mut self.agents
    }

    /// Number of agents.
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    /// Always `false` for a constructed fleet.
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub(crate) fn reset(&mut self) {
        self.agents.iter_mut().for_each(DeliveryAgent::reset);
    }
}

/// Draws `count` range limits uniformly from `[min, max]`.
pub fn random_max_distances<R: Rng>(
    rng: &mut R,
    count: usize,
    min: f64,
    max: f64,
) -> Result<Vec<f64>, ConfigurationError> {
    if !min.is_finite() || !max.is_finite() || min > max {
        return Err(ConfigurationError::InvalidDistanceRange { min, max });
    }
    Ok((0..count).map(|_| rng.random_range(min..=max)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_agent_new() {
        let a = DeliveryAgent::new("DA_1", 10);
        assert_eq!(a.id(), "DA_1");
        assert_eq!(a.capacity(), 10);
        assert_eq!(a.load(), 0);
        assert!(a.max_distance().is_none());
        assert!(a.route().is_empty());
        assert_eq!(a.route().agent_id(), "DA_1");
    }

    #[test]
    fn test_agent_load_cycle() {
        let mut a = DeliveryAgent::new("DA_1", 5);
        a.take_load(3);
        assert_eq!(a.remaining_capacity(), 2);
        assert!(!a.is_full());
        a.take_load(2);
        assert!(a.is_full());
        a.unload();
        assert_eq!(a.load(), 0);
    }

    #[test]
    fn test_fleet_ids_in_order() {
        let fleet = Fleet::new(4, 7, Some(120.0)).expect("valid");
        assert_eq!(fleet.len(), 4);
        assert_eq!(fleet.agents()[3].id(), "DA_4");
        assert!(fleet.agents().iter().all(|a| a.capacity() == 7));
        assert_eq!(fleet.max_distances().expect("set"), vec![120.0; 4]);
    }

    #[test]
    fn test_fleet_rejects_empty_or_zero_capacity() {
        assert_eq!(Fleet::new(0, 5, None).unwrap_err(), ConfigurationError::NoAgents);
        assert_eq!(
            Fleet::new(2, 0, None).unwrap_err(),
            ConfigurationError::ZeroCapacity
        );
    }

    #[test]
    fn test_set_max_distances() {
        let mut fleet = Fleet::new(2, 5, None).expect("valid");
        assert_eq!(
            fleet.max_distances().unwrap_err(),
            ConfigurationError::MaxDistancesNotSet
        );
        fleet.set_max_distances(&[50.0, 80.0]).expect("matching length");
        assert_eq!(fleet.agents()[0].max_distance(), Some(50.0));
        assert_eq!(fleet.agents()[1].max_distance(), Some(80.0));
    }

    #[test]
    fn test_set_max_distances_length_mismatch() {
        let mut fleet = Fleet::new(3, 5, None).expect("valid");
        let err = fleet.set_max_distances(&[50.0]).unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::MaxDistanceCountMismatch {
                expected: 3,
                actual: 1
            }
        );
        assert!(fleet.agents().iter().all(|a| a.max_distance().is_none()));
    }

    #[test]
    fn test_random_max_distances() {
        let mut rng = StdRng::seed_from_u64(7);
        let values = random_max_distances(&mut rng, 5, 100.0, 200.0).expect("valid range");
        assert_eq!(values.len(), 5);
        assert!(values.iter().all(|&v| (100.0..=200.0).contains(&v)));
    }

    #[test]
    fn test_random_max_distances_invalid_range() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(matches!(
            random_max_distances(&mut rng, 2, 200.0, 100.0),
            Err(ConfigurationError::InvalidDistanceRange { .. })
        ));
    }
}
