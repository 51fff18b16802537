use serde::Serialize;
use tracing::debug;

use crate::error::{DietError, Result};
use crate::models::{round2, FoodItem, Nutrients};
use crate::optimizer::backend::{
    solve_with_timeout, MicroLpBackend, ModelSpec, RangeConstraint, SolveOutcome, VariableSpec,
};
use crate::optimizer::constants::GRAMS_EPSILON;
use crate::optimizer::{CalorieBounds, Goal, SolverConfig};

/// Grams of one food in an optimal plan.
#[derive(Debug, Clone, Serialize)]
pub struct Allocation {
    pub food: String,
    pub grams: f64,
}

/// Food-mode optimization result: per-food grams plus nutrient totals.
#[derive(Debug, Clone, Serialize)]
pub struct FoodPlan {
    pub allocations: Vec<Allocation>,
    pub totals: Nutrients,
}

impl FoodPlan {
    pub fn empty() -> Self {
        Self {
            allocations: Vec::new(),
            totals: Nutrients::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.allocations.is_empty()
    }
}

/// Choose grams of each available food to optimize the goal nutrient inside
/// the calorie window.
///
/// One continuous variable per food, bounded by `available_grams`; nutrient
/// values are per 100 g, so every coefficient is scaled by 1/100. Returns
/// `DietError::Infeasible` when the window is unreachable, which is distinct
/// from an optimal empty allocation.
pub fn optimize_foods(
    foods: &[FoodItem],
    goal: Goal,
    bounds: CalorieBounds,
    config: &SolverConfig,
) -> Result<FoodPlan> {
    for food in foods {
        if !food.is_valid() {
            return Err(DietError::InvalidInput(format!(
                "food '{}' has negative nutrient or quantity values",
                food.name
            )));
        }
    }

    if foods.is_empty() {
        // Nothing to allocate. The empty plan is a valid optimum only when
        // the window admits zero calories.
        if bounds.min <= 0.0 {
            return Ok(FoodPlan::empty());
        }
        return Err(DietError::Infeasible);
    }

    let (nutrient, sense) = goal.target();

    let variables = foods
        .iter()
        .map(|food| VariableSpec {
            lower: 0.0,
            upper: food.available_grams,
            binary: false,
            objective_weight: food.nutrients.get(nutrient) / 100.0,
        })
        .collect();

    let calorie_window = RangeConstraint {
        terms: foods
            .iter()
            .enumerate()
            .map(|(index, food)| (index, food.nutrients.calories / 100.0))
            .collect(),
        min: Some(bounds.min),
        max: Some(bounds.max),
    };

    let model = ModelSpec {
        sense,
        variables,
        constraints: vec![calorie_window],
    };

    debug!(foods = foods.len(), %goal, "solving food allocation");

    let values = match solve_with_timeout(MicroLpBackend, model, config.timeout)? {
        SolveOutcome::Optimal(values) => values,
        SolveOutcome::Infeasible => return Err(DietError::Infeasible),
    };

    let mut totals = Nutrients::default();
    let mut allocations = Vec::new();
    for (food, grams) in foods.iter().zip(values) {
        totals.add_scaled(&food.nutrients, grams / 100.0);
        if grams > GRAMS_EPSILON {
            allocations.push(Allocation {
                food: food.name.clone(),
                grams: round2(grams),
            });
        }
    }

    Ok(FoodPlan {
        allocations,
        totals: totals.rounded(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::assert_float_absolute_eq;

    fn chicken_breast() -> FoodItem {
        FoodItem::new(
            "Chicken breast",
            Nutrients {
                calories: 165.0,
                protein_g: 31.0,
                carbs_g: 0.0,
                fat_g: 3.6,
                fiber_g: 0.0,
                cholesterol_mg: 85.0,
            },
            200.0,
        )
    }

    fn white_rice() -> FoodItem {
        FoodItem::new(
            "Rice, white, cooked",
            Nutrients {
                calories: 130.0,
                protein_g: 2.7,
                carbs_g: 28.0,
                fat_g: 0.3,
                fiber_g: 0.4,
                cholesterol_mg: 0.0,
            },
            300.0,
        )
    }

    #[test]
    fn test_maximize_protein_consumes_all_chicken() {
        let foods = vec![chicken_breast()];
        let bounds = CalorieBounds::new(Some(0.0), Some(1000.0)).unwrap();
        let plan =
            optimize_foods(&foods, Goal::MaximizeProtein, bounds, &SolverConfig::default())
                .unwrap();

        assert_eq!(plan.allocations.len(), 1);
        assert_float_absolute_eq!(plan.allocations[0].grams, 200.0, 1e-6);
        assert_float_absolute_eq!(plan.totals.protein_g, 62.0, 1e-6);
        assert_float_absolute_eq!(plan.totals.calories, 330.0, 1e-6);
    }

    #[test]
    fn test_allocation_never_exceeds_available() {
        let foods = vec![chicken_breast(), white_rice()];
        let bounds = CalorieBounds::new(Some(0.0), Some(5000.0)).unwrap();
        let plan =
            optimize_foods(&foods, Goal::MaximizeProtein, bounds, &SolverConfig::default())
                .unwrap();

        for allocation in &plan.allocations {
            let food = foods.iter().find(|f| f.name == allocation.food).unwrap();
            assert!(allocation.grams <= food.available_grams + 1e-6);
        }
    }

    #[test]
    fn test_calorie_window_respected() {
        let foods = vec![chicken_breast(), white_rice()];
        let bounds = CalorieBounds::new(Some(200.0), Some(400.0)).unwrap();
        let plan =
            optimize_foods(&foods, Goal::MaximizeProtein, bounds, &SolverConfig::default())
                .unwrap();

        assert!(plan.totals.calories >= 200.0 - 1e-6);
        assert!(plan.totals.calories <= 400.0 + 1e-6);
    }

    #[test]
    fn test_unreachable_window_is_infeasible() {
        // 200 g of chicken caps out at 330 calories.
        let foods = vec![chicken_breast()];
        let bounds = CalorieBounds::new(Some(2000.0), Some(3000.0)).unwrap();
        let result =
            optimize_foods(&foods, Goal::MaximizeProtein, bounds, &SolverConfig::default());

        assert!(matches!(result, Err(DietError::Infeasible)));
    }

    #[test]
    fn test_minimize_calories_yields_empty_allocation() {
        // With a zero-admitting window, the minimum is to eat nothing. That
        // is an optimal empty plan, not infeasibility.
        let foods = vec![chicken_breast(), white_rice()];
        let bounds = CalorieBounds::default();
        let plan =
            optimize_foods(&foods, Goal::MinimizeCalories, bounds, &SolverConfig::default())
                .unwrap();

        assert!(plan.is_empty());
        assert_float_absolute_eq!(plan.totals.calories, 0.0, 1e-6);
    }

    #[test]
    fn test_empty_food_list() {
        let bounds = CalorieBounds::default();
        let plan = optimize_foods(&[], Goal::MaximizeProtein, bounds, &SolverConfig::default())
            .unwrap();
        assert!(plan.is_empty());

        let strict = CalorieBounds::new(Some(100.0), Some(200.0)).unwrap();
        let result = optimize_foods(&[], Goal::MaximizeProtein, strict, &SolverConfig::default());
        assert!(matches!(result, Err(DietError::Infeasible)));
    }

    #[test]
    fn test_negative_input_rejected() {
        let mut food = chicken_breast();
        food.nutrients.protein_g = -5.0;
        let result = optimize_foods(
            &[food],
            Goal::MaximizeProtein,
            CalorieBounds::default(),
            &SolverConfig::default(),
        );
        assert!(matches!(result, Err(DietError::InvalidInput(_))));
    }
}
