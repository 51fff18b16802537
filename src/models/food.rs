use serde::{Deserialize, Serialize};

/// The six tracked nutrient dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nutrient {
    Calories,
    Protein,
    Carbs,
    Fat,
    Fiber,
    Cholesterol,
}

impl Nutrient {
    pub const ALL: [Nutrient; 6] = [
        Nutrient::Calories,
        Nutrient::Protein,
        Nutrient::Carbs,
        Nutrient::Fat,
        Nutrient::Fiber,
        Nutrient::Cholesterol,
    ];

    /// Display label, with unit.
    pub fn label(self) -> &'static str {
        match self {
            Nutrient::Calories => "Calories",
            Nutrient::Protein => "Protein (g)",
            Nutrient::Carbs => "Carbs (g)",
            Nutrient::Fat => "Fat (g)",
            Nutrient::Fiber => "Fiber (g)",
            Nutrient::Cholesterol => "Cholesterol (mg)",
        }
    }
}

/// A nutrient profile. When attached to a food, values are per 100 g.
///
/// Missing fields deserialize to 0 ("nutrient unknown" is zero, not an error).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrients {
    #[serde(default)]
    pub calories: f64,

    #[serde(default)]
    pub protein_g: f64,

    #[serde(default)]
    pub carbs_g: f64,

    #[serde(default)]
    pub fat_g: f64,

    #[serde(default)]
    pub fiber_g: f64,

    #[serde(default)]
    pub cholesterol_mg: f64,
}

impl Nutrients {
    pub fn get(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Calories => self.calories,
            Nutrient::Protein => self.protein_g,
            Nutrient::Carbs => self.carbs_g,
            Nutrient::Fat => self.fat_g,
            Nutrient::Fiber => self.fiber_g,
            Nutrient::Cholesterol => self.cholesterol_mg,
        }
    }

    pub fn set(&mut self, nutrient: Nutrient, value: f64) {
        match nutrient {
            Nutrient::Calories => self.calories = value,
            Nutrient::Protein => self.protein_g = value,
            Nutrient::Carbs => self.carbs_g = value,
            Nutrient::Fat => self.fat_g = value,
            Nutrient::Fiber => self.fiber_g = value,
            Nutrient::Cholesterol => self.cholesterol_mg = value,
        }
    }

    /// Accumulate `other * factor` into self. Used for grams/100 scaling.
    pub fn add_scaled(&mut self, other: &Nutrients, factor: f64) {
        self.calories += other.calories * factor;
        self.protein_g += other.protein_g * factor;
        self.carbs_g += other.carbs_g * factor;
        self.fat_g += other.fat_g * factor;
        self.fiber_g += other.fiber_g * factor;
        self.cholesterol_mg += other.cholesterol_mg * factor;
    }

    /// Copy with every field rounded to 2 decimals.
    pub fn rounded(&self) -> Nutrients {
        Nutrients {
            calories: round2(self.calories),
            protein_g: round2(self.protein_g),
            carbs_g: round2(self.carbs_g),
            fat_g: round2(self.fat_g),
            fiber_g: round2(self.fiber_g),
            cholesterol_mg: round2(self.cholesterol_mg),
        }
    }

    /// All fields non-negative.
    pub fn is_valid(&self) -> bool {
        Nutrient::ALL.iter().all(|&n| self.get(n) >= 0.0)
    }
}

/// Round to 2 decimal places.
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// A food the user has on hand, with its catalog nutrient profile per 100 g.
///
/// Immutable once added to a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodItem {
    pub name: String,

    #[serde(flatten)]
    pub nutrients: Nutrients,

    pub available_grams: f64,
}

impl FoodItem {
    pub fn new(name: impl Into<String>, nutrients: Nutrients, available_grams: f64) -> Self {
        Self {
            name: name.into(),
            nutrients,
            available_grams,
        }
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    pub fn is_valid(&self) -> bool {
        self.nutrients.is_valid() && self.available_grams >= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Nutrients {
        Nutrients {
            calories: 165.0,
            protein_g: 31.0,
            carbs_g: 0.0,
            fat_g: 3.6,
            fiber_g: 0.0,
            cholesterol_mg: 85.0,
        }
    }

    #[test]
    fn test_get_matches_fields() {
        let n = sample();
        assert_eq!(n.get(Nutrient::Calories), 165.0);
        assert_eq!(n.get(Nutrient::Protein), 31.0);
        assert_eq!(n.get(Nutrient::Cholesterol), 85.0);
    }

    #[test]
    fn test_add_scaled() {
        let mut total = Nutrients::default();
        total.add_scaled(&sample(), 2.0);
        assert!((total.calories - 330.0).abs() < 1e-9);
        assert!((total.protein_g - 62.0).abs() < 1e-9);
    }

    #[test]
    fn test_rounded() {
        let mut n = Nutrients::default();
        n.calories = 1.005;
        n.protein_g = 2.349;
        let r = n.rounded();
        assert_eq!(r.protein_g, 2.35);
    }

    #[test]
    fn test_missing_fields_default_to_zero() {
        let item: FoodItem =
            serde_json::from_str(r#"{"name": "Honey", "calories": 304, "available_grams": 50}"#)
                .unwrap();
        assert_eq!(item.nutrients.calories, 304.0);
        assert_eq!(item.nutrients.protein_g, 0.0);
        assert_eq!(item.nutrients.cholesterol_mg, 0.0);
    }

    #[test]
    fn test_is_valid_rejects_negative() {
        let mut item = FoodItem::new("Apple", sample(), 100.0);
        assert!(item.is_valid());
        item.available_grams = -1.0;
        assert!(!item.is_valid());
    }
}
