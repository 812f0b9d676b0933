use crate::models::{BoundingBox, Coordinate};

/// Earth's radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate the Haversine distance between two points in kilometers
///
/// # Arguments
/// * `from` - First point, degrees
/// * `to` - Second point, degrees
///
/// # Returns
/// Great-circle distance in kilometers, unrounded
#[inline]
pub fn haversine_distance(from: Coordinate, to: Coordinate) -> f64 {
    let lat1_rad = from.lat.to_radians();
    let lat2_rad = to.lat.to_radians();
    let delta_lat = (to.lat - from.lat).to_radians();
    let delta_lng = (to.lng - from.lng).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Wrap a longitude into [-180, 180)
///
/// Haversine only sees longitudes through `sin²(Δλ/2)`, so wrapping never
/// changes a distance.
#[inline]
pub fn normalize_lng(lng: f64) -> f64 {
    (lng + 180.0).rem_euclid(360.0) - 180.0
}

#[inline]
fn is_canonical_lat(lat: f64) -> bool {
    (-90.0..=90.0).contains(&lat)
}

/// Calculate a bounding box that contains every point within `radius_km`
/// great-circle distance of `center`
///
/// Cheaper than Haversine for pre-filtering a store scan. Boxes that would
/// reach a pole or cross the antimeridian widen to the full longitude range,
/// and a center with an out-of-range latitude gets the whole globe.
pub fn calculate_bounding_box(center: Coordinate, radius_km: f64) -> BoundingBox {
    if !is_canonical_lat(center.lat) {
        return BoundingBox::GLOBE;
    }

    // Pad by a hair so points sitting exactly on the radius survive rounding
    let angular = (radius_km / EARTH_RADIUS_KM) * (1.0 + 1e-9);
    let lat_delta = angular.to_degrees();

    let min_lat = center.lat - lat_delta;
    let max_lat = center.lat + lat_delta;

    if min_lat <= -90.0 || max_lat >= 90.0 {
        return BoundingBox {
            min_lat: min_lat.max(-90.0),
            max_lat: max_lat.min(90.0),
            ..BoundingBox::GLOBE
        };
    }

    let ratio = angular.sin() / center.lat.to_radians().cos();
    if ratio >= 1.0 {
        return BoundingBox { min_lat, max_lat, ..BoundingBox::GLOBE };
    }

    let lng_delta = ratio.asin().to_degrees();
    let center_lng = normalize_lng(center.lng);
    let min_lng = center_lng - lng_delta;
    let max_lng = center_lng + lng_delta;

    // Touching ±180 counts as crossing: wrapped points land on -180
    if min_lng <= -180.0 || max_lng >= 180.0 {
        return BoundingBox { min_lat, max_lat, ..BoundingBox::GLOBE };
    }

    BoundingBox { min_lat, max_lat, min_lng, max_lng }
}

/// Check if a point may lie inside a bounding box built by
/// [`calculate_bounding_box`]
///
/// Longitudes are wrapped before comparing. A point whose latitude is out of
/// range (or not a number) cannot be bounded and always passes, leaving the
/// decision to the matcher.
#[inline]
pub fn is_within_bounding_box(point: Coordinate, bbox: &BoundingBox) -> bool {
    if !is_canonical_lat(point.lat) {
        return true;
    }

    let lng = normalize_lng(point.lng);
    point.lat >= bbox.min_lat
        && point.lat <= bbox.max_lat
        && lng >= bbox.min_lng
        && lng <= bbox.max_lng
}
