use serde::{Deserialize, Serialize};

use crate::error::DietError;
use crate::models::{FoodItem, Nutrients, RecipeMacroRow};
use crate::optimizer::{
    optimize_foods, optimize_recipe, Allocation, CalorieBounds, Goal, SolverConfig,
};

/// A single optimization request, as accepted by `mealsolver solve`.
#[derive(Debug, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SolveRequest {
    /// Allocate grams across available foods.
    Foods {
        foods: Vec<FoodItem>,
        goal: Goal,
        min_calories: Option<f64>,
        max_calories: Option<f64>,
    },

    /// Select one recipe from pre-aggregated macro rows.
    Recipes {
        recipes: Vec<RecipeMacroRow>,
        goal: Goal,
        min_calories: Option<f64>,
        max_calories: Option<f64>,
    },
}

/// Response envelope. The `status` tag separates the error taxonomy:
/// infeasibility, solver infrastructure failure, and bad requests are
/// distinct outcomes.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SolveResponse {
    FoodPlan {
        allocations: Vec<Allocation>,
        totals: Nutrients,
    },
    RecipeChoice {
        selected: RecipeMacroRow,
    },
    Infeasible {
        message: String,
    },
    SolverError {
        message: String,
    },
    InvalidRequest {
        message: String,
    },
}

/// Run one request against the optimizer core.
pub fn handle_request(request: SolveRequest, config: &SolverConfig) -> SolveResponse {
    match request {
        SolveRequest::Foods {
            foods,
            goal,
            min_calories,
            max_calories,
        } => {
            let bounds = match CalorieBounds::new(min_calories, max_calories) {
                Ok(bounds) => bounds,
                Err(err) => return error_response(err),
            };
            match optimize_foods(&foods, goal, bounds, config) {
                Ok(plan) => SolveResponse::FoodPlan {
                    allocations: plan.allocations,
                    totals: plan.totals,
                },
                Err(err) => error_response(err),
            }
        }
        SolveRequest::Recipes {
            recipes,
            goal,
            min_calories,
            max_calories,
        } => {
            let bounds = match CalorieBounds::new(min_calories, max_calories) {
                Ok(bounds) => bounds,
                Err(err) => return error_response(err),
            };
            match optimize_recipe(&recipes, goal, bounds, config) {
                Ok(selected) => SolveResponse::RecipeChoice { selected },
                Err(err) => error_response(err),
            }
        }
    }
}

fn error_response(err: DietError) -> SolveResponse {
    match err {
        DietError::Infeasible => SolveResponse::Infeasible {
            message: err.to_string(),
        },
        DietError::Solver(_) => SolveResponse::SolverError {
            message: err.to_string(),
        },
        other => SolveResponse::InvalidRequest {
            message: other.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_food_request_roundtrip() {
        let request: SolveRequest = serde_json::from_str(
            r#"{
                "mode": "foods",
                "foods": [
                    {"name": "Chicken breast", "calories": 165, "protein_g": 31,
                     "fat_g": 3.6, "cholesterol_mg": 85, "available_grams": 200}
                ],
                "goal": "maximize_protein",
                "min_calories": 0,
                "max_calories": 1000
            }"#,
        )
        .unwrap();

        let response = handle_request(request, &SolverConfig::default());
        match response {
            SolveResponse::FoodPlan { allocations, totals } => {
                assert_eq!(allocations.len(), 1);
                assert!((allocations[0].grams - 200.0).abs() < 1e-6);
                assert!((totals.protein_g - 62.0).abs() < 1e-6);
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn test_recipe_request_infeasible() {
        let request: SolveRequest = serde_json::from_str(
            r#"{
                "mode": "recipes",
                "recipes": [
                    {"recipe": "A", "calories": 1500, "protein_g": 40,
                     "ingredients_matched": 3, "ingredients_total": 3}
                ],
                "goal": "maximize_protein",
                "max_calories": 1000
            }"#,
        )
        .unwrap();

        let response = handle_request(request, &SolverConfig::default());
        assert!(matches!(response, SolveResponse::Infeasible { .. }));
    }

    #[test]
    fn test_unknown_goal_rejected_at_parse() {
        let result = serde_json::from_str::<SolveRequest>(
            r#"{"mode": "foods", "foods": [], "goal": "maximize_vibes"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_bounds_reported_as_invalid_request() {
        let request: SolveRequest = serde_json::from_str(
            r#"{"mode": "foods", "foods": [], "goal": "maximize_protein",
                "min_calories": 500, "max_calories": 100}"#,
        )
        .unwrap();

        let response = handle_request(request, &SolverConfig::default());
        assert!(matches!(response, SolveResponse::InvalidRequest { .. }));
    }

    #[test]
    fn test_response_status_tags() {
        let response = SolveResponse::Infeasible {
            message: "no solution".to_string(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "infeasible");
    }
}
