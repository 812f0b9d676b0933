//! FoodBridge - matching service connecting surplus-food donors with recipient NGOs
//!
//! The core is a pure proximity and need matcher: recipients within a fixed
//! radius of a donation's pickup point, ranked by unmet need.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Matcher, MatchResult, MatchError, MATCH_RADIUS_KM, distance::{haversine_distance, calculate_bounding_box}};
pub use crate::models::{Coordinate, RecipientOrg, DonorOrg, FoodPosting, Match, FindMatchesRequest, FindMatchesResponse};
