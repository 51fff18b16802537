use tracing::debug;

use crate::error::{DietError, Result};
use crate::models::RecipeMacroRow;
use crate::optimizer::backend::{
    solve_with_timeout, MicroLpBackend, ModelSpec, RangeConstraint, SolveOutcome, SolverFailure,
    VariableSpec,
};
use crate::optimizer::constants::BINARY_SELECT_THRESHOLD;
use crate::optimizer::{CalorieBounds, Goal, SolverConfig};

/// Pick exactly one recipe from the candidate rows, optimizing the goal
/// nutrient subject to the calorie window.
///
/// There is no skip option: when every candidate's calories fall outside the
/// window the problem is infeasible.
pub fn optimize_recipe(
    rows: &[RecipeMacroRow],
    goal: Goal,
    bounds: CalorieBounds,
    config: &SolverConfig,
) -> Result<RecipeMacroRow> {
    if rows.is_empty() {
        return Err(DietError::Infeasible);
    }

    for row in rows {
        if !row.is_valid() {
            return Err(DietError::InvalidInput(format!(
                "recipe row '{}' has negative values or an inconsistent match count",
                row.recipe
            )));
        }
    }

    let (nutrient, sense) = goal.target();

    let variables = rows
        .iter()
        .map(|row| VariableSpec {
            lower: 0.0,
            upper: 1.0,
            binary: true,
            objective_weight: row.nutrients.get(nutrient),
        })
        .collect();

    let select_one = RangeConstraint {
        terms: (0..rows.len()).map(|index| (index, 1.0)).collect(),
        min: Some(1.0),
        max: Some(1.0),
    };

    let calorie_window = RangeConstraint {
        terms: rows
            .iter()
            .enumerate()
            .map(|(index, row)| (index, row.nutrients.calories))
            .collect(),
        min: Some(bounds.min),
        max: Some(bounds.max),
    };

    let model = ModelSpec {
        sense,
        variables,
        constraints: vec![select_one, calorie_window],
    };

    debug!(candidates = rows.len(), %goal, "solving recipe selection");

    let values = match solve_with_timeout(MicroLpBackend, model, config.timeout)? {
        SolveOutcome::Optimal(values) => values,
        SolveOutcome::Infeasible => return Err(DietError::Infeasible),
    };

    let selected = values
        .iter()
        .position(|value| *value > BINARY_SELECT_THRESHOLD)
        .ok_or_else(|| {
            SolverFailure::Backend("optimal solution selected no recipe".to_string())
        })?;

    Ok(rows[selected].clone())
}
