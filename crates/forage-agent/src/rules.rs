//! Movement rules shared by every agent of a run.

use crate::trail::TrailPolicy;
use forage_space::Connectivity;
use serde::{Deserialize, Serialize};

/// Run-level movement constants.
///
/// `Default` matches the reference trail experiment: 8-connected moves,
/// diagonal return steps, trails enabled, proportional trail following.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementRules {
    /// Move set for search steps and trail candidates.
    pub connectivity: Connectivity,
    /// Whether the return step may move on both axes at once. `None`
    /// follows the connectivity.
    pub diagonal_return: Option<bool>,
    /// Lay and follow pheromone trails.
    pub trail_enabled: bool,
    /// Strategy for following a detectable trail.
    pub trail_policy: TrailPolicy,
}

impl Default for MovementRules {
    fn default() -> Self {
        Self::with_trails(Connectivity::Eight, TrailPolicy::Proportional)
    }
}

impl MovementRules {
    /// Plain random walk with no trails.
    pub fn random_walk(connectivity: Connectivity) -> Self {
        Self {
            connectivity,
            diagonal_return: None,
            trail_enabled: false,
            trail_policy: TrailPolicy::default(),
        }
    }

    /// Trail laying and following with the given strategy.
    pub fn with_trails(connectivity: Connectivity, trail_policy: TrailPolicy) -> Self {
        Self {
            connectivity,
            diagonal_return: None,
            trail_enabled: true,
            trail_policy,
        }
    }

    /// Effective diagonal-return flag.
    pub fn diagonal_return(&self) -> bool {
        self.diagonal_return
            .unwrap_or_else(|| self.connectivity.allows_diagonal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagonal_return_follows_connectivity() {
        assert!(!MovementRules::random_walk(Connectivity::Four).diagonal_return());
        assert!(MovementRules::random_walk(Connectivity::Eight).diagonal_return());
    }

    #[test]
    fn explicit_flag_wins() {
        let rules = MovementRules {
            diagonal_return: Some(false),
            ..MovementRules::with_trails(Connectivity::Eight, TrailPolicy::Greedy)
        };
        assert!(!rules.diagonal_return());
    }

    #[test]
    fn default_is_trail_experiment() {
        let r = MovementRules::default();
        assert_eq!(r.connectivity, Connectivity::Eight);
        assert_eq!(r.trail_policy, TrailPolicy::Proportional);
        assert!(r.trail_enabled);
        assert!(r.diagonal_return());
    }
}
