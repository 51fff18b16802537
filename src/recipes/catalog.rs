use std::fs;
use std::path::Path;

use crate::error::{DietError, Result};
use crate::models::{IngredientSpec, RecipeDefinition};

/// Load a recipe catalog from a JSON file.
///
/// The file holds a list of `{name, ingredients: [{name, grams}]}` entries.
/// Required grams must be positive.
pub fn load_recipes<P: AsRef<Path>>(path: P) -> Result<Vec<RecipeDefinition>> {
    let content = fs::read_to_string(path)?;
    let recipes: Vec<RecipeDefinition> = serde_json::from_str(&content)?;

    for recipe in &recipes {
        for ingredient in &recipe.ingredients {
            if ingredient.grams <= 0.0 {
                return Err(DietError::InvalidInput(format!(
                    "recipe '{}': ingredient '{}' has non-positive grams",
                    recipe.name, ingredient.name
                )));
            }
        }
    }

    Ok(recipes)
}

fn recipe(name: &str, ingredients: &[(&str, f64)]) -> RecipeDefinition {
    RecipeDefinition {
        name: name.to_string(),
        ingredients: ingredients
            .iter()
            .map(|(ingredient, grams)| IngredientSpec {
                name: ingredient.to_string(),
                grams: *grams,
            })
            .collect(),
    }
}

/// The built-in recipe catalog. Ingredient names follow USDA Foundation
/// Foods descriptions so catalog lookups match well.
pub fn builtin_recipes() -> Vec<RecipeDefinition> {
    vec![
        recipe(
            "Grilled Chicken Salad",
            &[
                (
                    "Chicken, broiler or fryers, breast, meat only, cooked, roasted",
                    100.0,
                ),
                ("Lettuce, iceberg, raw", 50.0),
                ("Oil, olive, salad or cooking", 10.0),
            ],
        ),
        recipe(
            "Beef Rice Bowl",
            &[
                (
                    "Beef, ground, 85% lean meat / 15% fat, crumbles, cooked, pan-browned",
                    100.0,
                ),
                ("Rice, white, long-grain, regular, enriched, cooked", 100.0),
                ("Egg, whole, raw, fresh", 50.0),
            ],
        ),
        recipe(
            "Turkey Sandwich",
            &[
                ("Turkey, breast, meat only, roasted", 75.0),
                ("Bread, whole-wheat, commercially prepared", 60.0),
                ("Lettuce, iceberg, raw", 20.0),
            ],
        ),
        recipe(
            "Tofu Stir Fry",
            &[
                ("Tofu, raw, regular, prepared with calcium sulfate", 100.0),
                ("Broccoli, raw", 75.0),
                ("Sauce, soy, made from soy (tamari)", 10.0),
            ],
        ),
        recipe(
            "Salmon & Sweet Potato",
            &[
                ("Fish, salmon, Atlantic, wild, raw", 100.0),
                ("Sweet potato, raw, unprepared", 100.0),
                ("Spinach, raw", 50.0),
            ],
        ),
        recipe(
            "Greek Yogurt Bowl",
            &[
                ("Yogurt, Greek, plain, whole milk", 150.0),
                ("Nuts, almonds", 20.0),
                ("Blueberries, raw", 50.0),
            ],
        ),
        recipe(
            "Avocado Toast",
            &[
                ("Avocados, raw, all commercial varieties", 70.0),
                ("Bread, whole-wheat, commercially prepared", 60.0),
                ("Egg, whole, cooked, fried", 50.0),
            ],
        ),
        recipe(
            "Protein Smoothie",
            &[
                ("Protein powder, whey based", 30.0),
                ("Bananas, raw", 100.0),
                ("Peanut butter, smooth style, with salt", 20.0),
                ("Beverages, almond milk, unsweetened, shelf stable", 200.0),
            ],
        ),
        recipe(
            "Egg Veggie Scramble",
            &[
                ("Egg, whole, raw, fresh", 100.0),
                ("Spinach, raw", 50.0),
                ("Tomatoes, red, ripe, raw, year round average", 50.0),
                ("Mushrooms, white, raw", 50.0),
            ],
        ),
        recipe(
            "Quinoa Power Bowl",
            &[
                ("Quinoa, cooked", 100.0),
                (
                    "Beans, black, mature seeds, cooked, boiled, without salt",
                    75.0,
                ),
                ("Corn, sweet, yellow, raw", 50.0),
                ("Avocados, raw, all commercial varieties", 50.0),
            ],
        ),
        recipe(
            "Oatmeal with Berries",
            &[
                ("Cereals, oats, regular and quick, not fortified, dry", 40.0),
                ("Strawberries, raw", 50.0),
                ("Blueberries, raw", 50.0),
                ("Honey", 15.0),
                ("Milk, whole, 3.25% milkfat, with added vitamin D", 100.0),
            ],
        ),
        recipe(
            "Tuna Salad",
            &[
                ("Fish, tuna, light, canned in water, drained solids", 100.0),
                ("Mayonnaise, regular", 20.0),
                ("Celery, raw", 30.0),
                ("Onions, raw", 20.0),
                ("Lemon juice, raw", 5.0),
            ],
        ),
        recipe(
            "Mediterranean Plate",
            &[
                (
                    "Chickpeas (garbanzo beans, bengal gram), mature seeds, cooked, boiled, without salt",
                    100.0,
                ),
                ("Cucumber, with peel, raw", 75.0),
                ("Tomatoes, red, ripe, raw, year round average", 75.0),
                ("Cheese, feta", 30.0),
                ("Oil, olive, salad or cooking", 15.0),
            ],
        ),
        recipe(
            "Banana Peanut Butter Wrap",
            &[
                ("Tortillas, ready-to-bake or -fry, flour", 50.0),
                ("Bananas, raw", 100.0),
                ("Peanut butter, smooth style, with salt", 30.0),
            ],
        ),
        recipe(
            "Cottage Cheese with Fruit",
            &[
                ("Cheese, cottage, lowfat, 1% milkfat", 150.0),
                ("Peaches, raw", 100.0),
                ("Pineapple, raw, all varieties", 100.0),
                ("Honey", 10.0),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_builtin_catalog_shape() {
        let recipes = builtin_recipes();
        assert_eq!(recipes.len(), 15);
        for recipe in &recipes {
            assert!(!recipe.ingredients.is_empty(), "{} is empty", recipe.name);
            for ingredient in &recipe.ingredients {
                assert!(ingredient.grams > 0.0);
            }
        }
    }

    #[test]
    fn test_load_recipes_roundtrip() {
        let json = r#"[
            {"name": "Toast", "ingredients": [
                {"name": "Bread, whole-wheat, commercially prepared", "grams": 60}
            ]}
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let recipes = load_recipes(file.path()).unwrap();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].name, "Toast");
        assert_eq!(recipes[0].ingredients[0].grams, 60.0);
    }

    #[test]
    fn test_load_recipes_rejects_non_positive_grams() {
        let json = r#"[
            {"name": "Bad", "ingredients": [{"name": "Air", "grams": 0}]}
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        assert!(load_recipes(file.path()).is_err());
    }
}
