use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::FoodItem;

/// Owns the foods selected during a session.
///
/// Insertion order is preserved: matching tie-breaks depend on first-seen
/// order, so this is a `Vec` rather than a map. The core optimization and
/// matching functions take the list by reference and keep no state of their
/// own between calls.
#[derive(Debug, Default)]
pub struct SessionManager {
    foods: Vec<FoodItem>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing list, deduplicating by lowercase name
    /// (last occurrence wins, earliest position kept).
    pub fn with_foods(foods: Vec<FoodItem>) -> Self {
        let mut manager = Self::new();
        for food in foods {
            manager.add(food);
        }
        manager
    }

    /// Load a food list from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let foods: Vec<FoodItem> = serde_json::from_str(&content)?;
        Ok(Self::with_foods(foods))
    }

    /// Add a food. A food with the same name (case-insensitive) is replaced
    /// in place, keeping its original position.
    pub fn add(&mut self, food: FoodItem) {
        let key = food.key();
        match self.foods.iter_mut().find(|existing| existing.key() == key) {
            Some(existing) => *existing = food,
            None => self.foods.push(food),
        }
    }

    /// Remove a food by name (case-insensitive).
    pub fn remove(&mut self, name: &str) -> Option<FoodItem> {
        let key = name.to_lowercase();
        let index = self.foods.iter().position(|food| food.key() == key)?;
        Some(self.foods.remove(index))
    }

    pub fn get(&self, name: &str) -> Option<&FoodItem> {
        let key = name.to_lowercase();
        self.foods.iter().find(|food| food.key() == key)
    }

    /// The session's foods, in insertion order.
    pub fn foods(&self) -> &[FoodItem] {
        &self.foods
    }

    /// Calories available if every food were eaten in full.
    pub fn total_available_calories(&self) -> f64 {
        self.foods
            .iter()
            .map(|food| food.nutrients.calories * food.available_grams / 100.0)
            .sum()
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}
