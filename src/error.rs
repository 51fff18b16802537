use thiserror::Error;

use crate::optimizer::SolverFailure;

#[derive(Debug, Error)]
pub enum DietError {
    #[error(
        "unknown goal '{0}' (expected one of: maximize_protein, minimize_calories, \
         minimize_fat, minimize_cholesterol, maximize_fiber, minimize_carbs)"
    )]
    UnknownGoal(String),

    #[error("no solution satisfies the calorie bounds and quantity limits")]
    Infeasible,

    #[error(transparent)]
    Solver(#[from] SolverFailure),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

pub type Result<T> = std::result::Result<T, DietError>;
