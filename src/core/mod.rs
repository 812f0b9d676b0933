// Core algorithm exports
pub mod distance;
pub mod filters;
pub mod matcher;
pub mod scoring;

use thiserror::Error;

pub use distance::{haversine_distance, calculate_bounding_box, is_within_bounding_box, normalize_lng, EARTH_RADIUS_KM};
pub use filters::{validate_coordinate, validate_candidates, within_radius};
pub use matcher::{Matcher, MatchResult, MATCH_RADIUS_KM};
pub use scoring::{calculate_need_score, rank_by_need};

/// Errors that can occur while matching
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MatchError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
