use std::io::Read;
use std::path::Path;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use mealsolver::api::{handle_request, SolveRequest, SolveResponse};
use mealsolver::catalog::UsdaCatalog;
use mealsolver::cli::{Cli, Command};
use mealsolver::error::{DietError, Result};
use mealsolver::interface::{
    collect_session_foods, display_food_plan, display_macro_rows, display_recipe_catalog,
    display_recipe_result, display_session, prompt_calorie_bounds, prompt_goal, prompt_mode,
    prompt_yes_no, write_macro_rows_csv, PlanMode,
};
use mealsolver::optimizer::{optimize_foods, optimize_recipe, SolverConfig};
use mealsolver::recipes::{aggregate_macros, builtin_recipes, filter_makeable, load_recipes};
use mealsolver::state::SessionManager;
use mealsolver::RecipeDefinition;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan => cmd_plan(cli.recipes.as_deref()),
        Command::Recipes { foods, out } => {
            cmd_recipes(cli.recipes.as_deref(), foods.as_deref(), out.as_deref())
        }
        Command::Solve { request } => cmd_solve(&request),
    }
}

fn load_catalog(path: Option<&str>) -> Result<Vec<RecipeDefinition>> {
    match path {
        Some(path) => load_recipes(path),
        None => Ok(builtin_recipes()),
    }
}

/// Interactive session: collect foods, pick a goal, optimize.
fn cmd_plan(recipes_path: Option<&str>) -> Result<()> {
    let catalog = UsdaCatalog::from_env()?;
    let mut session = SessionManager::new();

    collect_session_foods(&catalog, &mut session)?;

    if session.is_empty() {
        println!("No foods selected.");
        return Ok(());
    }

    display_session(session.foods());
    println!(
        "Up to {:.0} calories available across {} foods.",
        session.total_available_calories(),
        session.len()
    );
    println!();

    let mode = prompt_mode()?;
    let goal = prompt_goal()?;
    let bounds = prompt_calorie_bounds()?;
    let config = SolverConfig::default();

    match mode {
        PlanMode::Foods => match optimize_foods(session.foods(), goal, bounds, &config) {
            Ok(plan) => display_food_plan(&plan),
            Err(DietError::Infeasible) => {
                println!("No combination of the selected foods satisfies those calorie bounds.");
            }
            Err(e) => return Err(e),
        },
        PlanMode::Recipes => {
            let recipe_catalog = load_catalog(recipes_path)?;
            let makeable = filter_makeable(&recipe_catalog, session.foods());

            if makeable.is_empty() {
                println!("No recipes can be made from the selected foods.");
                return Ok(());
            }

            let rows = aggregate_macros(&makeable, session.foods());
            if rows.is_empty() {
                println!("Not enough ingredient matches to profile any recipe.");
                return Ok(());
            }

            display_macro_rows(&rows);

            match optimize_recipe(&rows, goal, bounds, &config) {
                Ok(selected) => {
                    let definition = makeable.iter().find(|r| r.name == selected.recipe);
                    display_recipe_result(&selected, definition);
                }
                Err(DietError::Infeasible) => {
                    println!("No makeable recipe fits the calorie window.");
                }
                Err(e) => return Err(e),
            }

            if prompt_yes_no("Export the macro table to macros.csv?", false)? {
                write_macro_rows_csv(&rows, Path::new("macros.csv"))?;
                println!("Wrote macros.csv");
            }
        }
    }

    Ok(())
}

/// Show the catalog, or the makeable recipes for a foods file.
fn cmd_recipes(
    recipes_path: Option<&str>,
    foods_path: Option<&str>,
    out_path: Option<&str>,
) -> Result<()> {
    let recipe_catalog = load_catalog(recipes_path)?;

    let Some(foods_path) = foods_path else {
        display_recipe_catalog(&recipe_catalog);
        return Ok(());
    };

    let session = SessionManager::from_file(foods_path)?;
    println!("Loaded {} foods from {}", session.len(), foods_path);

    let makeable = filter_makeable(&recipe_catalog, session.foods());
    if makeable.is_empty() {
        println!("No recipes can be made from these foods.");
        return Ok(());
    }

    let rows = aggregate_macros(&makeable, session.foods());
    display_macro_rows(&rows);

    if let Some(out_path) = out_path {
        write_macro_rows_csv(&rows, Path::new(out_path))?;
        println!("Wrote {}", out_path);
    }

    Ok(())
}

/// Non-interactive solve: JSON request in, JSON response out.
fn cmd_solve(request_path: &str) -> Result<()> {
    let content = if request_path == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        std::fs::read_to_string(request_path)?
    };

    let response = match serde_json::from_str::<SolveRequest>(&content) {
        Ok(request) => handle_request(request, &SolverConfig::default()),
        Err(err) => SolveResponse::InvalidRequest {
            message: err.to_string(),
        },
    };

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
