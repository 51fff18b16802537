pub mod export;
pub mod prompts;
pub mod render;

pub use export::write_macro_rows_csv;
pub use prompts::{
    collect_session_foods, prompt_calorie_bounds, prompt_goal, prompt_mode, prompt_yes_no,
    PlanMode,
};
pub use render::{
    display_food_plan, display_macro_rows, display_recipe_catalog, display_recipe_result,
    display_session,
};
