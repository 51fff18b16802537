use crate::matching::constants::{CANONICAL_FOODS, STOPWORDS};

/// Reduce a catalog food name to a normalized base name for comparison.
///
/// Lowercases, keeps only the text before the first comma, drops descriptor
/// words, and collapses to a canonical word when one of the remaining tokens
/// is a known common food. Falls back to the comma-split phrase when
/// filtering removes everything. Idempotent.
pub fn extract_base_name(food_name: &str) -> String {
    let lowered = food_name.to_lowercase();
    let head = lowered.split(',').next().unwrap_or("").trim();

    let kept: Vec<&str> = head
        .split_whitespace()
        .filter(|token| !STOPWORDS.contains(token))
        .collect();

    for token in &kept {
        if let Some(canonical) = canonical_form(token) {
            return canonical;
        }
    }

    if kept.is_empty() {
        head.to_string()
    } else {
        kept.join(" ")
    }
}

/// Look a token up in the common-food table, trying naive singular forms.
fn canonical_form(token: &str) -> Option<String> {
    if CANONICAL_FOODS.contains(token) {
        return Some(token.to_string());
    }
    if let Some(stem) = token.strip_suffix("ies") {
        let singular = format!("{stem}y");
        if CANONICAL_FOODS.contains(singular.as_str()) {
            return Some(singular);
        }
    }
    if let Some(stem) = token.strip_suffix("es") {
        if CANONICAL_FOODS.contains(stem) {
            return Some(stem.to_string());
        }
    }
    if let Some(stem) = token.strip_suffix('s') {
        if CANONICAL_FOODS.contains(stem) {
            return Some(stem.to_string());
        }
    }
    None
}
