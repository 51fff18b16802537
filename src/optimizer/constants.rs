use std::time::Duration;

/// Allocations at or below this many grams are dropped from food-mode output.
pub const GRAMS_EPSILON: f64 = 0.01;

/// Calorie window defaults when the caller omits a bound.
pub const DEFAULT_MIN_CALORIES: f64 = 0.0;
pub const DEFAULT_MAX_CALORIES: f64 = 10_000.0;

/// Bounded wait for a single solver invocation.
pub const DEFAULT_SOLVER_TIMEOUT: Duration = Duration::from_secs(10);

/// A binary variable above this value counts as selected.
pub const BINARY_SELECT_THRESHOLD: f64 = 0.5;
