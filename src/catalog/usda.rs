use std::time::Duration;

use serde_json::Value;
use tracing::debug;

use crate::catalog::provider::{FoodCatalog, FoodNutrition, FoodSuggestion};
use crate::error::Result;
use crate::models::{Nutrient, Nutrients};

pub const DEFAULT_BASE_URL: &str = "https://api.nal.usda.gov/fdc/v1";

const SEARCH_PAGE_SIZE: &str = "10";
const SEARCH_DATA_TYPE: &str = "Foundation";
const HTTP_TIMEOUT: Duration = Duration::from_secs(15);

/// FoodData Central nutrient ids for the six tracked dimensions.
fn nutrient_field(id: u64) -> Option<Nutrient> {
    match id {
        1008 => Some(Nutrient::Calories),
        1003 => Some(Nutrient::Protein),
        1005 => Some(Nutrient::Carbs),
        1004 => Some(Nutrient::Fat),
        1079 => Some(Nutrient::Fiber),
        1253 => Some(Nutrient::Cholesterol),
        _ => None,
    }
}

/// USDA FoodData Central client.
pub struct UsdaCatalog {
    client: reqwest::blocking::Client,
    api_key: String,
    base_url: String,
}

impl UsdaCatalog {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into(),
        })
    }

    /// Key from `USDA_API_KEY`, falling back to the public demo key.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("USDA_API_KEY").unwrap_or_else(|_| "DEMO_KEY".to_string());
        Self::new(api_key)
    }
}

impl FoodCatalog for UsdaCatalog {
    fn search_suggestions(&self, query: &str) -> Result<Vec<FoodSuggestion>> {
        let url = format!("{}/foods/search", self.base_url);
        let body: Value = self
            .client
            .get(&url)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("query", query),
                ("dataType", SEARCH_DATA_TYPE),
                ("pageSize", SEARCH_PAGE_SIZE),
            ])
            .send()?
            .error_for_status()?
            .json()?;

        let suggestions = parse_search_response(&body);
        debug!(query, hits = suggestions.len(), "catalog search");
        Ok(suggestions)
    }

    fn fetch_nutrition(&self, id: u64) -> Result<FoodNutrition> {
        let url = format!("{}/food/{}", self.base_url, id);
        let body: Value = self
            .client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .send()?
            .error_for_status()?
            .json()?;

        Ok(parse_nutrition_response(&body))
    }
}

/// Extract `{fdcId, description}` pairs; malformed entries are skipped.
pub fn parse_search_response(body: &Value) -> Vec<FoodSuggestion> {
    body.get("foods")
        .and_then(Value::as_array)
        .map(|foods| {
            foods
                .iter()
                .filter_map(|food| {
                    let id = food.get("fdcId")?.as_u64()?;
                    let name = food.get("description")?.as_str()?.to_string();
                    Some(FoodSuggestion { id, name })
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Extract the tracked nutrients; anything missing stays at zero.
pub fn parse_nutrition_response(body: &Value) -> FoodNutrition {
    let name = body
        .get("description")
        .and_then(Value::as_str)
        .unwrap_or("Unknown")
        .to_string();

    let mut nutrients = Nutrients::default();
    if let Some(entries) = body.get("foodNutrients").and_then(Value::as_array) {
        for entry in entries {
            let id = entry
                .get("nutrient")
                .and_then(|nutrient| nutrient.get("id"))
                .and_then(Value::as_u64);
            let Some(field) = id.and_then(nutrient_field) else {
                continue;
            };
            let amount = entry.get("amount").and_then(Value::as_f64).unwrap_or(0.0);
            nutrients.set(field, amount);
        }
    }

    FoodNutrition { name, nutrients }
}
