//! Planner configuration.
//!
//! All fields have defaults, so a JSON config only needs the values it
//! overrides:
//!
//! ```json
//! { "greedy": { "distance_weight": 0.0001 }, "capacity_policy": { "enabled": false } }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// Largest accepted `iteration_factor`.
pub const MAX_ITERATION_FACTOR: usize = 1_000;

/// Parameters of the round-robin greedy constructor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GreedyParams {
    /// Weight of the leg distance in the candidate score
    /// `units - distance * distance_weight`. Must stay small enough that the
    /// distance term never outweighs one parcel unit at the deployment's
    /// coordinate scale.
    pub distance_weight: f64,
    /// The iteration cap is `parcels × agents × iteration_factor`.
    pub iteration_factor: usize,
}

impl Default for GreedyParams {
    fn default() -> Self {
        Self {
            distance_weight: 0.001,
            iteration_factor: 2,
        }
    }
}

/// Shrinks per-agent capacity when the fleet could carry all demand in one
/// trip each, so that runs exercise depot returns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CapacityPolicy {
    pub enabled: bool,
    /// Fraction of total demand the whole fleet may carry per trip.
    pub reduction_factor: f64,
}

impl Default for CapacityPolicy {
    fn default() -> Self {
        Self {
            enabled: true,
            reduction_factor: 0.7,
        }
    }
}

impl CapacityPolicy {
    /// A policy that never changes capacity.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Per-agent capacity after applying the policy.
    ///
    /// When `agents × capacity ≥ total_units` the result is
    /// `max(1, floor(reduction_factor × total_units / agents))`; otherwise
    /// `capacity` is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use parcel_routing::config::CapacityPolicy;
    ///
    /// let policy = CapacityPolicy::default();
    /// assert_eq!(policy.adjust(2, 10, 15), 5);
    /// assert_eq!(policy.adjust(2, 5, 15), 5);
    /// ```
    pub fn adjust(&self, agents: usize, capacity: u32, total_units: u64) -> u32 {
        if !self.enabled || agents == 0 {
            return capacity;
        }
        let fleet_capacity = agents as u64 * u64::from(capacity);
        if fleet_capacity < total_units {
            return capacity;
        }
        let reduced = (total_units as f64 * self.reduction_factor / agents as f64).floor();
        (reduced as u32).max(1)
    }
}

/// Everything tunable about a planning run.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub greedy: GreedyParams,
    pub capacity_policy: CapacityPolicy,
}

impl PlannerConfig {
    /// Parses a JSON config and validates it.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigurationError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| ConfigurationError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a JSON config file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigurationError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            ConfigurationError::InvalidConfig(format!("{}: {e}", path.display()))
        })?;
        Self::from_json_str(&json)
    }

    /// Rejects values the constructor cannot work with.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let weight = self.greedy.distance_weight;
        if !weight.is_finite() || weight < 0.0 {
            return Err(ConfigurationError::InvalidConfig(format!(
                "distance_weight must be finite and non-negative, got {weight}"
            )));
        }
        let iteration_factor = self.greedy.iteration_factor;
        if !(1..=MAX_ITERATION_FACTOR).contains(&iteration_factor) {
            return Err(ConfigurationError::InvalidConfig(format!(
                "iteration_factor must be in 1..={MAX_ITERATION_FACTOR}, got {iteration_factor}"
            )));
        }
        let factor = self.capacity_policy.reduction_factor;
        if !(factor > 0.0 && factor <= 1.0) {
            return Err(ConfigurationError::InvalidConfig(format!(
                "reduction_factor must be in (0, 1], got {factor}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PlannerConfig::default();
        assert_eq!(config.greedy.distance_weight, 0.001);
        assert_eq!(config.greedy.iteration_factor, 2);
        assert!(config.capacity_policy.enabled);
        assert_eq!(config.capacity_policy.reduction_factor, 0.7);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_adjust_reduces_when_fleet_covers_demand() {
        let policy = CapacityPolicy::default();
        // 2 × 10 ≥ 15 → floor(0.7 × 15 / 2) = 5
        assert_eq!(policy.adjust(2, 10, 15), 5);
        // exactly equal also triggers: 1 × 5 ≥ 5 → floor(3.5) = 3
        assert_eq!(policy.adjust(1, 5, 5), 3);
    }

    #[test]
    fn test_adjust_keeps_capacity_when_short() {
        let policy = CapacityPolicy::default();
        assert_eq!(policy.adjust(2, 5, 11), 5);
    }

    #[test]
    fn test_adjust_never_below_one() {
        let policy = CapacityPolicy::default();
        assert_eq!(policy.adjust(10, 10, 3), 1);
        assert_eq!(policy.adjust(3, 4, 0), 1);
    }

    #[test]
    fn test_adjust_disabled() {
        assert_eq!(CapacityPolicy::disabled().adjust(2, 10, 15), 10);
    }

    #[test]
    fn test_from_json_partial() {
        let config =
            PlannerConfig::from_json_str(r#"{ "greedy": { "distance_weight": 0.0001 } }"#)
                .expect("valid json");
        assert_eq!(config.greedy.distance_weight, 0.0001);
        assert_eq!(config.greedy.iteration_factor, 2);
        assert!(config.capacity_policy.enabled);
    }

    #[test]
    fn test_from_json_invalid_values() {
        assert!(matches!(
            PlannerConfig::from_json_str(r#"{ "greedy": { "iteration_factor": 0 } }"#),
            Err(ConfigurationError::InvalidConfig(_))
        ));
        assert!(matches!(
            PlannerConfig::from_json_str(r#"{ "capacity_policy": { "reduction_factor": 1.5 } }"#),
            Err(ConfigurationError::InvalidConfig(_))
        ));
        assert!(matches!(
            PlannerConfig::from_json_str(
                r#"{ "greedy": { "iteration_factor": 18446744073709551615 } }"#
            ),
            Err(ConfigurationError::InvalidConfig(_))
        ));
        assert!(matches!(
            PlannerConfig::from_json_str("not json"),
            Err(ConfigurationError::InvalidConfig(_))
        ));
    }
}
