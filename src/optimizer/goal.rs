use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DietError;
use crate::models::Nutrient;

/// Optimization direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sense {
    Maximize,
    Minimize,
}

/// A nutrition goal: one nutrient field bound to one optimization sense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    MaximizeProtein,
    MinimizeCalories,
    MinimizeFat,
    MinimizeCholesterol,
    MaximizeFiber,
    MinimizeCarbs,
}

impl Goal {
    pub const ALL: [Goal; 6] = [
        Goal::MaximizeProtein,
        Goal::MinimizeCalories,
        Goal::MinimizeFat,
        Goal::MinimizeCholesterol,
        Goal::MaximizeFiber,
        Goal::MinimizeCarbs,
    ];

    /// The canonical goal table. Every sign convention flows from here.
    pub fn target(self) -> (Nutrient, Sense) {
        match self {
            Goal::MaximizeProtein => (Nutrient::Protein, Sense::Maximize),
            Goal::MinimizeCalories => (Nutrient::Calories, Sense::Minimize),
            Goal::MinimizeFat => (Nutrient::Fat, Sense::Minimize),
            Goal::MinimizeCholesterol => (Nutrient::Cholesterol, Sense::Minimize),
            Goal::MaximizeFiber => (Nutrient::Fiber, Sense::Maximize),
            Goal::MinimizeCarbs => (Nutrient::Carbs, Sense::Minimize),
        }
    }

    pub fn nutrient(self) -> Nutrient {
        self.target().0
    }

    pub fn sense(self) -> Sense {
        self.target().1
    }

    /// Human-readable label for prompts.
    pub fn label(self) -> &'static str {
        match self {
            Goal::MaximizeProtein => "Maximize protein",
            Goal::MinimizeCalories => "Minimize calories",
            Goal::MinimizeFat => "Minimize fat",
            Goal::MinimizeCholesterol => "Minimize cholesterol",
            Goal::MaximizeFiber => "Maximize fiber",
            Goal::MinimizeCarbs => "Minimize carbs",
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Goal::MaximizeProtein => "maximize_protein",
            Goal::MinimizeCalories => "minimize_calories",
            Goal::MinimizeFat => "minimize_fat",
            Goal::MinimizeCholesterol => "minimize_cholesterol",
            Goal::MaximizeFiber => "maximize_fiber",
            Goal::MinimizeCarbs => "minimize_carbs",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Goal {
    type Err = DietError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Goal::ALL
            .iter()
            .copied()
            .find(|goal| goal.as_str() == s)
            .ok_or_else(|| DietError::UnknownGoal(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_table_covers_all_senses() {
        assert_eq!(
            Goal::MaximizeProtein.target(),
            (Nutrient::Protein, Sense::Maximize)
        );
        assert_eq!(
            Goal::MinimizeCholesterol.target(),
            (Nutrient::Cholesterol, Sense::Minimize)
        );
    }

    #[test]
    fn test_parse_roundtrip() {
        for goal in Goal::ALL {
            let parsed: Goal = goal.to_string().parse().unwrap();
            assert_eq!(parsed, goal);
        }
    }

    #[test]
    fn test_unknown_goal_rejected() {
        let err = "maximize_swagger".parse::<Goal>().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("maximize_swagger"));
        assert!(message.contains("maximize_protein"));
    }

    #[test]
    fn test_serde_snake_case() {
        let goal: Goal = serde_json::from_str("\"minimize_carbs\"").unwrap();
        assert_eq!(goal, Goal::MinimizeCarbs);
        assert!(serde_json::from_str::<Goal>("\"be_healthy\"").is_err());
    }
}
