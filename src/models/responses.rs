use serde::{Deserialize, Serialize};
use crate::models::domain::{Dispatch, Match, OrgRole};

/// Response for the find matches endpoints
///
/// An empty `matches` list is the "no recipient within range" outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindMatchesResponse {
    pub matches: Vec<Match>,
    #[serde(rename = "bestMatch")]
    pub best_match: Option<Match>,
    #[serde(rename = "radiusKm")]
    pub radius_km: f64,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub recipients: usize,
    pub cache: CacheStats,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Match cache statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheStats {
    pub entries: u64,
    pub generation: u64,
    #[serde(rename = "ttlSecs")]
    pub ttl_secs: u64,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// Dispatch history for a donor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchHistoryResponse {
    #[serde(rename = "collegeId")]
    pub college_id: String,
    pub dispatches: Vec<Dispatch>,
    #[serde(rename = "totalPackets")]
    pub total_packets: u64,
}

/// Registration response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationResponse {
    pub id: String,
    pub role: OrgRole,
}
