pub mod food;
pub mod recipe;

pub use food::{round2, FoodItem, Nutrient, Nutrients};
pub use recipe::{IngredientSpec, RecipeDefinition, RecipeMacroRow};
