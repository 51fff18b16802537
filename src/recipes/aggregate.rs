use tracing::debug;

use crate::matching::constants::MACRO_INCLUSION_FRACTION;
use crate::matching::find_best_match;
use crate::models::{FoodItem, Nutrients, RecipeDefinition, RecipeMacroRow};

/// Minimum number of matched ingredients for a macro row to be kept.
pub fn macro_inclusion_minimum(total_ingredients: usize) -> usize {
    let required = (total_ingredients as f64 * MACRO_INCLUSION_FRACTION).round() as usize;
    required.max(1)
}

/// Build the macro row for one recipe, or `None` when too few ingredients
/// resolve to an available food.
///
/// Each matched ingredient contributes `nutrient * grams / 100`; unmatched
/// ingredients contribute nothing.
pub fn aggregate_recipe(
    recipe: &RecipeDefinition,
    available_foods: &[FoodItem],
) -> Option<RecipeMacroRow> {
    let total = recipe.ingredients.len();
    let mut nutrients = Nutrients::default();
    let mut matched = 0;

    for ingredient in &recipe.ingredients {
        if let Some(food) = find_best_match(&ingredient.name, available_foods) {
            nutrients.add_scaled(&food.nutrients, ingredient.grams / 100.0);
            matched += 1;
        }
    }

    if matched < macro_inclusion_minimum(total) {
        debug!(
            recipe = recipe.name.as_str(),
            matched, total, "dropping recipe, too few ingredient matches"
        );
        return None;
    }

    Some(RecipeMacroRow {
        recipe: recipe.name.clone(),
        nutrients,
        ingredients_matched: matched,
        ingredients_total: total,
    })
}

/// Macro rows for every recipe that clears the inclusion threshold.
pub fn aggregate_macros(
    recipes: &[RecipeDefinition],
    available_foods: &[FoodItem],
) -> Vec<RecipeMacroRow> {
    recipes
        .iter()
        .filter_map(|recipe| aggregate_recipe(recipe, available_foods))
        .collect()
}
