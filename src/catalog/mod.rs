pub mod provider;
pub mod usda;

pub use provider::{FoodCatalog, FoodNutrition, FoodSuggestion};
pub use usda::UsdaCatalog;
