use crate::error::Result;
use crate::models::Nutrients;

/// A search hit from the food catalog.
#[derive(Debug, Clone)]
pub struct FoodSuggestion {
    pub id: u64,
    pub name: String,
}

/// Raw per-100g nutrient profile for a catalog food.
#[derive(Debug, Clone)]
pub struct FoodNutrition {
    pub name: String,
    pub nutrients: Nutrients,
}

/// External food catalog: free-text search plus nutrient lookup by id.
///
/// Callers treat failures as "no data" for the session; a provider error
/// never aborts an interactive flow.
pub trait FoodCatalog {
    fn search_suggestions(&self, query: &str) -> Result<Vec<FoodSuggestion>>;

    fn fetch_nutrition(&self, id: u64) -> Result<FoodNutrition>;
}
