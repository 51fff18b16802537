pub mod aggregate;
pub mod catalog;
pub mod feasibility;

pub use aggregate::{aggregate_macros, aggregate_recipe, macro_inclusion_minimum};
pub use catalog::{builtin_recipes, load_recipes};
pub use feasibility::{filter_makeable, is_makeable};
