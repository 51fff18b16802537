use mealsolver::matching::{extract_base_name, find_best_match};
use mealsolver::models::{FoodItem, Nutrients};
use mealsolver::recipes::{aggregate_macros, builtin_recipes, filter_makeable, is_makeable};

fn food(name: &str, calories: f64, protein_g: f64) -> FoodItem {
    FoodItem::new(
        name,
        Nutrients {
            calories,
            protein_g,
            ..Default::default()
        },
        500.0,
    )
}

/// Foods a user might realistically have committed from catalog lookups.
fn pantry() -> Vec<FoodItem> {
    vec![
        food("Egg, whole, raw, fresh", 143.0, 12.6),
        food("Spinach, raw", 23.0, 2.9),
        food("Tomatoes, roma", 18.0, 0.9),
        food("Mushrooms, white, raw", 22.0, 3.1),
        food("Chicken, broiler or fryers, breast, meat only, cooked, roasted", 165.0, 31.0),
        food("Lettuce, iceberg, raw", 14.0, 0.9),
        food("Oil, olive, salad or cooking", 884.0, 0.0),
    ]
}

#[test]
fn base_name_is_idempotent_over_catalog_names() {
    for recipe in builtin_recipes() {
        for ingredient in &recipe.ingredients {
            let once = extract_base_name(&ingredient.name);
            assert_eq!(
                extract_base_name(&once),
                once,
                "not idempotent for '{}'",
                ingredient.name
            );
        }
    }
}

#[test]
fn tomato_variants_match_each_other() {
    let foods = pantry();
    let matched = find_best_match("Tomatoes, red, ripe, raw, year round average", &foods);
    assert_eq!(matched.unwrap().name, "Tomatoes, roma");
}

#[test]
fn no_match_from_empty_food_list() {
    assert!(find_best_match("Tomatoes, red, ripe, raw", &[]).is_none());
}

#[test]
fn scramble_is_makeable_from_pantry() {
    let ingredients = vec![
        "Egg, whole, raw, fresh",
        "Spinach, raw",
        "Tomatoes, red, ripe, raw, year round average",
        "Mushrooms, white, raw",
    ];
    assert!(is_makeable(&ingredients, &pantry()));
}

#[test]
fn smoothie_is_not_makeable_from_pantry() {
    let ingredients = vec![
        "Protein powder, whey based",
        "Bananas, raw",
        "Peanut butter, smooth style, with salt",
        "Beverages, almond milk, unsweetened, shelf stable",
    ];
    assert!(!is_makeable(&ingredients, &pantry()));
}

#[test]
fn builtin_catalog_filters_to_makeable_subset() {
    let makeable = filter_makeable(&builtin_recipes(), &pantry());

    let names: Vec<&str> = makeable.iter().map(|r| r.name.as_str()).collect();
    assert!(names.contains(&"Egg Veggie Scramble"), "names: {names:?}");
    assert!(names.contains(&"Grilled Chicken Salad"), "names: {names:?}");
    assert!(!names.contains(&"Protein Smoothie"), "names: {names:?}");
}

#[test]
fn aggregated_rows_have_consistent_counts_and_scaling() {
    let foods = pantry();
    let makeable = filter_makeable(&builtin_recipes(), &foods);
    let rows = aggregate_macros(&makeable, &foods);

    assert!(!rows.is_empty());
    for row in &rows {
        assert!(row.ingredients_matched <= row.ingredients_total);
        assert!(row.nutrients.is_valid(), "negative totals in {}", row.recipe);
    }

    // The scramble matches all four ingredients from this pantry:
    // 100 g egg + 50 g spinach + 50 g tomato + 50 g mushroom.
    let scramble = rows.iter().find(|r| r.recipe == "Egg Veggie Scramble").unwrap();
    assert_eq!(scramble.ingredients_matched, 4);
    let expected_calories = 143.0 + 23.0 * 0.5 + 18.0 * 0.5 + 22.0 * 0.5;
    assert!((scramble.nutrients.calories - expected_calories).abs() < 1e-9);
}
