use crate::models::{FoodItem, Nutrient, RecipeDefinition, RecipeMacroRow};
use crate::optimizer::FoodPlan;

fn print_totals(title: &str, nutrients: &crate::models::Nutrients) {
    println!();
    println!("--- {} ---", title);
    for nutrient in Nutrient::ALL {
        println!("{:<18} {:>10.2}", nutrient.label(), nutrients.get(nutrient));
    }
}

/// Display a food allocation plan.
pub fn display_food_plan(plan: &FoodPlan) {
    if plan.is_empty() {
        println!("Optimal plan: eat nothing (the empty allocation satisfies the bounds).");
        return;
    }

    println!();
    println!("=== Optimal food plan ===");
    println!();

    let max_name_len = plan
        .allocations
        .iter()
        .map(|a| a.food.len())
        .max()
        .unwrap_or(10);

    for allocation in &plan.allocations {
        println!(
            "  {:<width$} {:>9.2} g",
            allocation.food,
            allocation.grams,
            width = max_name_len
        );
    }

    print_totals("Nutrient totals", &plan.totals);
    println!();
}

/// Display the selected recipe with its ingredient list and macros.
pub fn display_recipe_result(selected: &RecipeMacroRow, definition: Option<&RecipeDefinition>) {
    println!();
    println!("=== Best recipe: {} ===", selected.recipe);

    if let Some(definition) = definition {
        println!();
        println!("Ingredients:");
        for ingredient in &definition.ingredients {
            println!("  - {}: {:.0} g", ingredient.name, ingredient.grams);
        }
    }

    println!();
    println!(
        "Matched {} of {} ingredients.",
        selected.ingredients_matched, selected.ingredients_total
    );
    print_totals("Macros", &selected.nutrients);
    println!();
}

/// Display the macro table for candidate recipes.
pub fn display_macro_rows(rows: &[RecipeMacroRow]) {
    if rows.is_empty() {
        println!("No recipes with enough ingredient matches.");
        return;
    }

    println!();
    println!("=== Candidate recipes ({}) ===", rows.len());
    println!();

    let max_name_len = rows.iter().map(|r| r.recipe.len()).max().unwrap_or(10);

    for row in rows {
        println!(
            "  {:<width$} {:>8.0} cal  P {:>6.1}  C {:>6.1}  F {:>6.1}  matched {}/{}",
            row.recipe,
            row.nutrients.calories,
            row.nutrients.protein_g,
            row.nutrients.carbs_g,
            row.nutrients.fat_g,
            row.ingredients_matched,
            row.ingredients_total,
            width = max_name_len
        );
    }

    println!();
}

/// Display the recipe catalog.
pub fn display_recipe_catalog(recipes: &[RecipeDefinition]) {
    println!();
    println!("=== Recipe catalog ({} recipes) ===", recipes.len());
    println!();

    for recipe in recipes {
        println!("{}", recipe.name);
        for ingredient in &recipe.ingredients {
            println!("  - {}: {:.0} g", ingredient.name, ingredient.grams);
        }
        println!();
    }
}

/// Display the session's selected foods.
pub fn display_session(foods: &[FoodItem]) {
    if foods.is_empty() {
        println!("Selected foods: (none)");
        return;
    }

    println!();
    println!("=== Selected foods ({}) ===", foods.len());
    println!();

    for food in foods {
        println!(
            "  {} - {:.0} g on hand, {:.0} cal/100g, P {:.1} C {:.1} F {:.1}",
            food.name,
            food.available_grams,
            food.nutrients.calories,
            food.nutrients.protein_g,
            food.nutrients.carbs_g,
            food.nutrients.fat_g
        );
    }

    println!();
}
