use crate::utils::error::Result;
use crate::utils::validation::{validate_tolerance, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_SADDLE_TOLERANCE: f64 = 1e-9;
pub const DEFAULT_DUAL_TOLERANCE: f64 = 1e-6;
pub const DEFAULT_PROBABILITY_TOLERANCE: f64 = 1e-6;

/// Numeric tolerances used by the solving stages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Max |α − β| still treated as a saddle point, in payoff units.
    /// Games with very small payoffs need a smaller value.
    pub saddle_tolerance: f64,
    /// Max disagreement between the two LP game values.
    pub dual_tolerance: f64,
    /// LP variables down to `-probability_tolerance` are clamped to zero
    /// before normalizing; anything lower is rejected.
    pub probability_tolerance: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            saddle_tolerance: DEFAULT_SADDLE_TOLERANCE,
            dual_tolerance: DEFAULT_DUAL_TOLERANCE,
            probability_tolerance: DEFAULT_PROBABILITY_TOLERANCE,
        }
    }
}

impl Validate for SolverConfig {
    fn validate(&self) -> Result<()> {
        validate_tolerance("solver.saddle_tolerance", self.saddle_tolerance, 0.0, 0.1)?;
        validate_tolerance("solver.dual_tolerance", self.dual_tolerance, 0.0, 0.1)?;
        validate_tolerance(
            "solver.probability_tolerance",
            self.probability_tolerance,
            0.0,
            0.1,
        )?;
        Ok(())
    }
}
