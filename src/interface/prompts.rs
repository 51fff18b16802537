use dialoguer::{Confirm, Input, Select};
use tracing::warn;

use crate::catalog::FoodCatalog;
use crate::error::{DietError, Result};
use crate::models::FoodItem;
use crate::optimizer::constants::{DEFAULT_MAX_CALORIES, DEFAULT_MIN_CALORIES};
use crate::optimizer::{CalorieBounds, Goal};
use crate::state::SessionManager;

/// Which optimization mode to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanMode {
    Foods,
    Recipes,
}

fn parse_number(input: &str) -> Result<f64> {
    input
        .trim()
        .parse()
        .map_err(|_| DietError::InvalidInput(format!("'{input}' is not a number")))
}

/// Search the catalog and add foods to the session until the user is done.
///
/// Provider failures degrade to "no data" with a warning; the session loop
/// keeps going.
pub fn collect_session_foods(
    catalog: &dyn FoodCatalog,
    session: &mut SessionManager,
) -> Result<()> {
    loop {
        let query: String = Input::new()
            .with_prompt("Search for a food (press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let query = query.trim();
        if query.is_empty() {
            break;
        }

        let suggestions = match catalog.search_suggestions(query) {
            Ok(suggestions) => suggestions,
            Err(err) => {
                warn!(%err, "catalog lookup failed");
                println!("Lookup failed, treating as no data. Try again.");
                continue;
            }
        };

        if suggestions.is_empty() {
            println!("No foods found for '{}'.", query);
            continue;
        }

        let mut options: Vec<String> = suggestions.iter().map(|s| s.name.clone()).collect();
        options.push("None of these".to_string());

        let selection = Select::new()
            .with_prompt("Which food?")
            .items(&options)
            .default(0)
            .interact()?;

        if selection >= suggestions.len() {
            continue;
        }

        let nutrition = match catalog.fetch_nutrition(suggestions[selection].id) {
            Ok(nutrition) => nutrition,
            Err(err) => {
                warn!(%err, "nutrition fetch failed");
                println!("Could not fetch nutrition data, skipping this food.");
                continue;
            }
        };

        let grams_input: String = Input::new()
            .with_prompt(format!("Grams of '{}' on hand", nutrition.name))
            .default("100".to_string())
            .interact_text()?;

        let grams = match parse_number(&grams_input) {
            Ok(grams) if grams >= 0.0 => grams,
            _ => {
                println!("Grams must be a non-negative number, skipping this food.");
                continue;
            }
        };

        println!("Added: {} ({:.0} g)", nutrition.name, grams);
        session.add(FoodItem::new(nutrition.name, nutrition.nutrients, grams));
    }

    Ok(())
}

/// Pick the optimization mode.
pub fn prompt_mode() -> Result<PlanMode> {
    let selection = Select::new()
        .with_prompt("Optimize over")
        .items(&["Individual foods", "Recipes"])
        .default(0)
        .interact()?;

    Ok(match selection {
        0 => PlanMode::Foods,
        _ => PlanMode::Recipes,
    })
}

/// Pick a nutrition goal.
pub fn prompt_goal() -> Result<Goal> {
    let labels: Vec<&str> = Goal::ALL.iter().map(|goal| goal.label()).collect();

    let selection = Select::new()
        .with_prompt("Nutrition goal")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(Goal::ALL[selection])
}

/// Collect the calorie window, with defaults.
pub fn prompt_calorie_bounds() -> Result<CalorieBounds> {
    let min_input: String = Input::new()
        .with_prompt("Minimum total calories")
        .default(format!("{DEFAULT_MIN_CALORIES:.0}"))
        .interact_text()?;

    let max_input: String = Input::new()
        .with_prompt("Maximum total calories")
        .default(format!("{DEFAULT_MAX_CALORIES:.0}"))
        .interact_text()?;

    CalorieBounds::new(Some(parse_number(&min_input)?), Some(parse_number(&max_input)?))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
