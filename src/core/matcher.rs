use crate::models::{Coordinate, FoodPosting, Match, RecipientOrg};
use crate::core::{
    MatchError,
    distance::haversine_distance,
    filters::{validate_candidates, validate_coordinate, within_radius},
    scoring::{calculate_need_score, rank_by_need},
};

/// Fixed match radius in kilometers
pub const MATCH_RADIUS_KM: f64 = 5.0;

/// Result of the matching process
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    /// Recipients within range, highest need first
    pub matches: Vec<Match>,
    pub total_candidates: usize,
}

impl MatchResult {
    /// The top ranked recipient, if anyone is in range
    pub fn best_match(&self) -> Option<&Match> {
        self.matches.first()
    }

    /// True for the "no recipient within range" outcome
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

/// Proximity and need matcher
///
/// # Pipeline Stages
/// 1. Input validation (finite coordinates)
/// 2. Haversine distance and need score per candidate
/// 3. Radius filter
/// 4. Stable ranking by need, descending
///
/// Holds no mutable state; one instance can serve any number of concurrent
/// callers.
#[derive(Debug, Clone, Copy)]
pub struct Matcher {
    radius_km: f64,
}

impl Matcher {
    pub fn new(radius_km: f64) -> Self {
        Self { radius_km }
    }

    pub fn with_default_radius() -> Self {
        Self::new(MATCH_RADIUS_KM)
    }

    pub fn radius_km(&self) -> f64 {
        self.radius_km
    }

    /// Rank the candidates that can receive a donation from `origin`
    ///
    /// An empty candidate list, or one with nobody in range, yields an empty
    /// `MatchResult` rather than an error. Packet counts are never compared
    /// against need.
    ///
    /// # Errors
    /// `MatchError::InvalidInput` if the origin or any candidate location is
    /// not finite.
    pub fn find_matches(
        &self,
        origin: Coordinate,
        candidates: &[RecipientOrg],
    ) -> Result<MatchResult, MatchError> {
        validate_coordinate("origin", origin)?;
        validate_candidates(candidates)?;

        let mut matches: Vec<Match> = candidates
            .iter()
            .filter_map(|ngo| {
                let distance_km = haversine_distance(origin, ngo.location);
                if !within_radius(distance_km, self.radius_km) {
                    tracing::trace!("Excluding {} at {:.2} km", ngo.id, distance_km);
                    return None;
                }

                Some(Match {
                    ngo: ngo.clone(),
                    distance_km,
                    need_score: calculate_need_score(ngo),
                })
            })
            .collect();

        // sort_by is stable: equal needs keep candidate order
        matches.sort_by(rank_by_need);

        Ok(MatchResult {
            matches,
            total_candidates: candidates.len(),
        })
    }

    /// Match a stored posting using its pickup location
    pub fn match_posting(
        &self,
        posting: &FoodPosting,
        candidates: &[RecipientOrg],
    ) -> Result<MatchResult, MatchError> {
        self.find_matches(posting.location, candidates)
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_radius()
    }
}
