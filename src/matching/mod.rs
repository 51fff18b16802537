pub mod base_name;
pub mod constants;
pub mod matcher;

pub use base_name::extract_base_name;
pub use matcher::{find_best_match, match_score};
