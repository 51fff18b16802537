use tracing::debug;

use crate::matching::constants::MAKEABLE_FRACTION;
use crate::matching::extract_base_name;
use crate::models::{FoodItem, RecipeDefinition};

/// Whether a recipe can be approximated from the available foods.
///
/// An ingredient counts as found when its base name and some food's base
/// name contain one another or share a first token. The recipe is makeable
/// when at least `MAKEABLE_FRACTION` of its ingredients are found. Empty
/// ingredient or food lists are never makeable.
pub fn is_makeable<S: AsRef<str>>(recipe_ingredients: &[S], available_foods: &[FoodItem]) -> bool {
    if recipe_ingredients.is_empty() || available_foods.is_empty() {
        return false;
    }

    let food_bases: Vec<String> = available_foods
        .iter()
        .map(|food| extract_base_name(&food.name))
        .collect();

    let found = recipe_ingredients
        .iter()
        .filter(|ingredient| {
            let base = extract_base_name(ingredient.as_ref());
            food_bases.iter().any(|food_base| ingredient_found(&base, food_base))
        })
        .count();

    let fraction = found as f64 / recipe_ingredients.len() as f64;
    fraction >= MAKEABLE_FRACTION
}

fn ingredient_found(ingredient_base: &str, food_base: &str) -> bool {
    if ingredient_base.is_empty() || food_base.is_empty() {
        return false;
    }
    if ingredient_base.contains(food_base) || food_base.contains(ingredient_base) {
        return true;
    }
    ingredient_base.split_whitespace().next() == food_base.split_whitespace().next()
}

/// Recipes from the catalog that are makeable from the available foods.
pub fn filter_makeable(
    catalog: &[RecipeDefinition],
    available_foods: &[FoodItem],
) -> Vec<RecipeDefinition> {
    catalog
        .iter()
        .filter(|recipe| {
            let makeable = is_makeable(&recipe.ingredient_names(), available_foods);
            if !makeable {
                debug!(recipe = recipe.name.as_str(), "recipe not makeable");
            }
            makeable
        })
        .cloned()
        .collect()
}
