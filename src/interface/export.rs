use std::path::Path;

use crate::error::Result;
use crate::models::RecipeMacroRow;

/// Write the macro table to a CSV file.
pub fn write_macro_rows_csv(rows: &[RecipeMacroRow], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "recipe",
        "calories",
        "protein_g",
        "carbs_g",
        "fat_g",
        "fiber_g",
        "cholesterol_mg",
        "ingredients_matched",
        "ingredients_total",
    ])?;

    for row in rows {
        wtr.write_record([
            row.recipe.clone(),
            format!("{:.2}", row.nutrients.calories),
            format!("{:.2}", row.nutrients.protein_g),
            format!("{:.2}", row.nutrients.carbs_g),
            format!("{:.2}", row.nutrients.fat_g),
            format!("{:.2}", row.nutrients.fiber_g),
            format!("{:.2}", row.nutrients.cholesterol_mg),
            row.ingredients_matched.to_string(),
            row.ingredients_total.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
