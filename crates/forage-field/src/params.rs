//! Pheromone dynamics parameters and the deposit combination rule.

use forage_core::ConfigError;
use serde::{Deserialize, Serialize};

/// How a direct deposit combines with the concentration already in a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepositPolicy {
    /// `new = max(existing, amount)`. Repeated deposits never accumulate.
    #[default]
    MaxCombine,
    /// `new = existing + amount`. Accumulates up to the ceiling.
    SaturatingAdd,
}

impl DepositPolicy {
    /// Combine `amount` into `existing`, then cap at `ceiling` if one is set.
    ///
    /// The result is never negative.
    pub fn combine(self, existing: f64, amount: f64, ceiling: Option<f64>) -> f64 {
        let raw = match self {
            Self::MaxCombine => existing.max(amount),
            Self::SaturatingAdd => existing + amount,
        };
        let capped = match ceiling {
            Some(max) => raw.min(max),
            None => raw,
        };
        capped.max(0.0)
    }
}

/// Parameters of the pheromone field.
///
/// `Default` is the reference trail experiment: start level 100, floor 25,
/// 10% evaporation per tick, ceiling 1000, halo radius 2.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PheromoneParams {
    /// Concentration laid at the pickup end of a delivered path.
    pub start: f64,
    /// Detectability floor. Cells below it are zeroed by evaporation and
    /// deposits below it are skipped.
    pub min_detectable: f64,
    /// Fraction lost per tick, in `[0, 1)`.
    pub evaporation_rate: f64,
    /// Optional saturation ceiling.
    pub max: Option<f64>,
    /// Optional Chebyshev radius cap for the diffusion halo.
    pub diffusion_distance: Option<u32>,
}

impl Default for PheromoneParams {
    fn default() -> Self {
        Self {
            start: 100.0,
            min_detectable: 25.0,
            evaporation_rate: 0.10,
            max: Some(1000.0),
            diffusion_distance: Some(2),
        }
    }
}

impl PheromoneParams {
    /// Check every level and rate.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.start.is_finite() || self.start < 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "pheromone_start",
                reason: format!("must be finite and >= 0, got {}", self.start),
            });
        }
        if !self.min_detectable.is_finite() || self.min_detectable < 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "pheromone_min_detectable",
                reason: format!("must be finite and >= 0, got {}", self.min_detectable),
            });
        }
        if !self.evaporation_rate.is_finite() || !(0.0..1.0).contains(&self.evaporation_rate) {
            return Err(ConfigError::InvalidParameter {
                name: "evaporation_rate",
                reason: format!("must be in [0, 1), got {}", self.evaporation_rate),
            });
        }
        if let Some(max) = self.max {
            if !max.is_finite() || max < 0.0 {
                return Err(ConfigError::InvalidParameter {
                    name: "pheromone_max",
                    reason: format!("must be finite and >= 0, got {max}"),
                });
            }
            if max < self.min_detectable {
                return Err(ConfigError::InvalidParameter {
                    name: "pheromone_max",
                    reason: format!(
                        "ceiling {max} is below the detectability floor {}",
                        self.min_detectable
                    ),
                });
            }
        }
        Ok(())
    }
}
