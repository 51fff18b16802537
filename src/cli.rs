use clap::{Parser, Subcommand};

/// mealsolver picks optimal foods or a recipe for a nutrition goal.
#[derive(Parser, Debug)]
#[command(name = "mealsolver")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to a recipe catalog JSON file (defaults to the built-in catalog).
    #[arg(short, long)]
    pub recipes: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactively pick foods, then optimize a nutrition goal.
    Plan,

    /// Show the recipe catalog, or which recipes a foods file can make.
    Recipes {
        /// JSON file with available foods.
        #[arg(long)]
        foods: Option<String>,

        /// Write the macro table to a CSV file.
        #[arg(long)]
        out: Option<String>,
    },

    /// Solve one optimization request from JSON and print the response.
    Solve {
        /// Request JSON path, or '-' for stdin.
        #[arg(long)]
        request: String,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan
    }
}
