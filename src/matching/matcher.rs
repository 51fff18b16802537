use strsim::sorensen_dice;
use tracing::debug;

use crate::matching::base_name::extract_base_name;
use crate::matching::constants::{
    EXACT_MATCH_BONUS, FIRST_TOKEN_BONUS, MATCH_SCORE_THRESHOLD, SUBSTRING_BONUS,
};
use crate::models::FoodItem;

/// Composite similarity score between two base names.
///
/// Sequence-similarity ratio, plus a first-token bonus, plus either the
/// exact-equality bonus or the substring bonus (exact takes precedence).
pub fn match_score(ingredient_base: &str, candidate_base: &str) -> f64 {
    if ingredient_base.is_empty() || candidate_base.is_empty() {
        return 0.0;
    }

    let mut score = sorensen_dice(ingredient_base, candidate_base);

    let first_a = ingredient_base.split_whitespace().next();
    let first_b = candidate_base.split_whitespace().next();
    if first_a.is_some() && first_a == first_b {
        score += FIRST_TOKEN_BONUS;
    }

    if ingredient_base == candidate_base {
        score += EXACT_MATCH_BONUS;
    } else if ingredient_base.contains(candidate_base) || candidate_base.contains(ingredient_base)
    {
        score += SUBSTRING_BONUS;
    }

    score
}

/// Best-matching available food for a recipe ingredient name, if any clears
/// the acceptance threshold. Ties keep the first-seen candidate.
pub fn find_best_match<'a>(ingredient_name: &str, foods: &'a [FoodItem]) -> Option<&'a FoodItem> {
    let ingredient_base = extract_base_name(ingredient_name);

    let mut best_food: Option<&FoodItem> = None;
    let mut best_score = f64::NEG_INFINITY;

    for food in foods {
        let candidate_base = extract_base_name(&food.name);
        let score = match_score(&ingredient_base, &candidate_base);
        if score > best_score {
            best_score = score;
            best_food = Some(food);
        }
    }

    if best_score > MATCH_SCORE_THRESHOLD {
        best_food
    } else {
        if best_food.is_some() {
            debug!(
                ingredient = ingredient_name,
                best_score, "no acceptable match"
            );
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Nutrients;

    fn food(name: &str) -> FoodItem {
        FoodItem::new(name, Nutrients::default(), 100.0)
    }

    #[test]
    fn test_empty_food_list_matches_nothing() {
        assert!(find_best_match("Egg, whole, raw, fresh", &[]).is_none());
    }

    #[test]
    fn test_exact_base_name_match() {
        let foods = vec![food("Lettuce, iceberg, raw"), food("Egg, whole, raw, fresh")];
        let matched = find_best_match("Egg, whole, cooked, fried", &foods).unwrap();
        assert_eq!(matched.name, "Egg, whole, raw, fresh");
    }

    #[test]
    fn test_tomato_variants_match() {
        let foods = vec![food("Tomatoes, roma")];
        let matched = find_best_match("Tomatoes, red, ripe, raw, year round average", &foods);
        assert!(matched.is_some());
    }

    #[test]
    fn test_unrelated_name_rejected() {
        let foods = vec![food("Oil, olive, salad or cooking")];
        assert!(find_best_match("Fish, salmon, Atlantic, wild, raw", &foods).is_none());
    }

    #[test]
    fn test_first_seen_wins_ties() {
        let foods = vec![food("Egg, whole, raw, fresh"), food("Egg, whole, cooked, fried")];
        // Both reduce to "egg" and score identically.
        let matched = find_best_match("Egg, whole, dried", &foods).unwrap();
        assert_eq!(matched.name, "Egg, whole, raw, fresh");
    }

    #[test]
    fn test_exact_bonus_precedence_over_substring() {
        // Equal strings must take only the exact bonus, not both.
        let exact = match_score("chicken", "chicken");
        assert!((exact - (1.0 + FIRST_TOKEN_BONUS + EXACT_MATCH_BONUS)).abs() < 1e-9);

        let substring = match_score("chicken", "chicken soup");
        assert!(substring < exact);
    }

    #[test]
    fn test_tomato_variant_score_clears_threshold() {
        let score = match_score(
            &extract_base_name("Tomatoes, red, ripe, raw, year round average"),
            &extract_base_name("Tomatoes, roma"),
        );
        assert!(score > MATCH_SCORE_THRESHOLD);
    }
}
