use std::collections::HashSet;
use std::sync::LazyLock;

/// Minimum composite score for `find_best_match` to accept a candidate.
pub const MATCH_SCORE_THRESHOLD: f64 = 0.2;

/// Bonus when the first tokens of both base names agree.
pub const FIRST_TOKEN_BONUS: f64 = 0.5;

/// Bonus when both base names are exactly equal.
pub const EXACT_MATCH_BONUS: f64 = 1.0;

/// Bonus when one base name contains the other (skipped on exact equality).
pub const SUBSTRING_BONUS: f64 = 0.3;

/// Fraction of recipe ingredients that must be found for a recipe to count
/// as makeable.
pub const MAKEABLE_FRACTION: f64 = 0.7;

/// Fraction of ingredients that must resolve to a match for a recipe to keep
/// its macro row. Looser than `MAKEABLE_FRACTION` and tuned independently.
pub const MACRO_INCLUSION_FRACTION: f64 = 0.5;

/// Descriptor and preparation words stripped from catalog food names.
const DESCRIPTOR_WORDS: &[&str] = &[
    "raw",
    "cooked",
    "boiled",
    "broiled",
    "roasted",
    "grilled",
    "fried",
    "baked",
    "steamed",
    "smoked",
    "dried",
    "frozen",
    "canned",
    "fresh",
    "ripe",
    "prepared",
    "unprepared",
    "enriched",
    "fortified",
    "sweetened",
    "unsweetened",
    "salted",
    "unsalted",
    "lowfat",
    "nonfat",
    "skim",
    "light",
    "regular",
    "plain",
    "whole",
    "commercial",
    "commercially",
    "red",
    "green",
    "yellow",
    "white",
    "black",
    "brown",
    "purple",
    "with",
    "without",
    "added",
    "in",
    "of",
    "and",
    "or",
    "from",
    "style",
    "based",
];

/// Common foods reduced to a single canonical word when present in a name.
const COMMON_FOODS: &[&str] = &[
    "chicken",
    "beef",
    "turkey",
    "pork",
    "lamb",
    "fish",
    "salmon",
    "tuna",
    "shrimp",
    "egg",
    "rice",
    "bread",
    "pasta",
    "milk",
    "cheese",
    "yogurt",
    "butter",
    "oil",
    "tofu",
    "bean",
    "lentil",
    "chickpea",
    "pea",
    "lettuce",
    "spinach",
    "broccoli",
    "kale",
    "tomato",
    "potato",
    "onion",
    "garlic",
    "carrot",
    "celery",
    "cucumber",
    "pepper",
    "corn",
    "mushroom",
    "avocado",
    "banana",
    "apple",
    "orange",
    "blueberry",
    "strawberry",
    "raspberry",
    "peach",
    "pineapple",
    "grape",
    "lemon",
    "lime",
    "quinoa",
    "oat",
    "honey",
    "mayonnaise",
    "tortilla",
    "almond",
    "walnut",
    "peanut",
    "cashew",
];

pub static STOPWORDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| DESCRIPTOR_WORDS.iter().copied().collect());

pub static CANONICAL_FOODS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| COMMON_FOODS.iter().copied().collect());
