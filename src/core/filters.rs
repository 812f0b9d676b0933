use crate::core::MatchError;
use crate::models::{Coordinate, RecipientOrg};

/// Reject coordinates that would turn distances into NaN
///
/// Range is not checked; out-of-range degrees still produce a finite
/// distance.
#[inline]
pub fn validate_coordinate(field: &str, point: Coordinate) -> Result<(), MatchError> {
    if point.is_finite() {
        Ok(())
    } else {
        Err(MatchError::InvalidInput(format!(
            "{} has non-finite coordinates (lat: {}, lng: {})",
            field, point.lat, point.lng
        )))
    }
}

/// Validate every candidate location before any distance is computed
pub fn validate_candidates(candidates: &[RecipientOrg]) -> Result<(), MatchError> {
    match candidates.iter().find(|ngo| !ngo.location.is_finite()) {
        Some(ngo) => validate_coordinate(&format!("candidate '{}'", ngo.id), ngo.location),
        None => Ok(()),
    }
}

/// Radius check, inclusive of the boundary
#[inline]
pub fn within_radius(distance_km: f64, radius_km: f64) -> bool {
    distance_km <= radius_km
}
