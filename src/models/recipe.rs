use serde::{Deserialize, Serialize};

use crate::models::Nutrients;

/// One required ingredient of a recipe, by catalog-style name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientSpec {
    pub name: String,
    pub grams: f64,
}

/// A static recipe: ordered ingredient list with required grams.
///
/// Never mutated at runtime. Ingredient order is preserved because match
/// tie-breaking depends on iteration order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeDefinition {
    pub name: String,
    pub ingredients: Vec<IngredientSpec>,
}

impl RecipeDefinition {
    pub fn ingredient_names(&self) -> Vec<&str> {
        self.ingredients.iter().map(|i| i.name.as_str()).collect()
    }
}

/// A recipe's aggregate nutrition profile, derived from matched ingredients.
///
/// Recomputed whenever the food list or recipe set changes; never persisted.
/// Invariant: `ingredients_matched <= ingredients_total`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeMacroRow {
    pub recipe: String,

    #[serde(flatten)]
    pub nutrients: Nutrients,

    pub ingredients_matched: usize,

    pub ingredients_total: usize,
}

impl RecipeMacroRow {
    pub fn is_valid(&self) -> bool {
        self.nutrients.is_valid() && self.ingredients_matched <= self.ingredients_total
    }
}
