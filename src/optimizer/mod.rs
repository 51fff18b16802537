pub mod backend;
pub mod constants;
pub mod foods;
pub mod goal;
pub mod recipes;

use std::time::Duration;

use crate::error::{DietError, Result};

pub use backend::{
    solve_with_timeout, LpBackend, MicroLpBackend, ModelSpec, RangeConstraint, SolveOutcome,
    SolverFailure, VariableSpec,
};
pub use foods::{optimize_foods, Allocation, FoodPlan};
pub use goal::{Goal, Sense};
pub use recipes::optimize_recipe;

/// Total-calorie window for an optimization call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalorieBounds {
    pub min: f64,
    pub max: f64,
}

impl CalorieBounds {
    /// Build bounds from optional user input, applying defaults.
    pub fn new(min: Option<f64>, max: Option<f64>) -> Result<Self> {
        let min = min.unwrap_or(constants::DEFAULT_MIN_CALORIES);
        let max = max.unwrap_or(constants::DEFAULT_MAX_CALORIES);

        if min < 0.0 || max < 0.0 {
            return Err(DietError::InvalidInput(
                "calorie bounds must be non-negative".to_string(),
            ));
        }
        if min > max {
            return Err(DietError::InvalidInput(format!(
                "min calories ({min}) exceeds max calories ({max})"
            )));
        }

        Ok(Self { min, max })
    }
}

impl Default for CalorieBounds {
    fn default() -> Self {
        Self {
            min: constants::DEFAULT_MIN_CALORIES,
            max: constants::DEFAULT_MAX_CALORIES,
        }
    }
}

/// Per-call solver settings.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    pub timeout: Duration,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            timeout: constants::DEFAULT_SOLVER_TIMEOUT,
        }
    }
}
