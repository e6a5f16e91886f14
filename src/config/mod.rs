mod persistence;

pub use persistence::{load_config, save_config};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SupplementError};
use crate::planner::constants::{
    DEFAULT_MAX_SOLUTIONS, DEFAULT_TOLERANCE, DIMENSION_STEP_CM, MAX_VOLUME_CM3,
};

/// Runtime-configurable recommendation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommenderConfig {
    /// Residual below which a food pair is accepted.
    pub tolerance: f64,
    /// Number of ranked recommendations to return.
    pub max_solutions: usize,
    /// Volume limit per food in cm³.
    pub max_volume_cm3: f64,
    /// Scan step of the cuboid search in cm.
    pub dimension_step_cm: f64,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_solutions: DEFAULT_MAX_SOLUTIONS,
            max_volume_cm3: MAX_VOLUME_CM3,
            dimension_step_cm: DIMENSION_STEP_CM,
        }
    }
}

impl RecommenderConfig {
    /// Reject settings the solver cannot work with.
    pub fn validate(&self) -> Result<()> {
        if !(self.tolerance > 0.0) {
            return Err(SupplementError::InvalidInput(format!(
                "tolerance must be positive, got {}",
                self.tolerance
            )));
        }
        if self.max_solutions == 0 {
            return Err(SupplementError::InvalidInput(
                "max_solutions must be at least 1".to_string(),
            ));
        }
        if !(self.max_volume_cm3.is_finite() && self.max_volume_cm3 > 0.0) {
            return Err(SupplementError::InvalidInput(format!(
                "max_volume_cm3 must be positive, got {}",
                self.max_volume_cm3
            )));
        }
        if !(self.dimension_step_cm.is_finite() && self.dimension_step_cm > 0.0) {
            return Err(SupplementError::InvalidInput(format!(
                "dimension_step_cm must be positive, got {}",
                self.dimension_step_cm
            )));
        }
        Ok(())
    }

    /// Format settings as a compact string for display.
    pub fn display(&self) -> String {
        format!(
            "tol={:.1} max={} vol={:.1}cm3 step={:.2}cm",
            self.tolerance, self.max_solutions, self.max_volume_cm3, self.dimension_step_cm
        )
    }
}
