use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use std::sync::Arc;
use thiserror::Error;
use validator::Validate;

use crate::config::Settings;
use crate::core::{haversine_distance, Matcher, MatchResult};
use crate::models::{Dispatch, DispatchRequest, FindMatchesRequest, FindMatchesResponse, HealthResponse};
use crate::routes::{error_response, match_failed, store_failed, validation_failed};
use crate::services::{default_seed, CacheKey, CacheManager, InMemoryStore, SeedData, SeedError, Store, StoreError};

/// Errors that can occur while building the application state
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Seed error: {0}")]
    Seed(#[from] SeedError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub cache: CacheManager,
    pub matcher: Matcher,
}

impl AppState {
    /// Build the store, cache and matcher described by `settings`
    pub fn from_settings(settings: &Settings) -> Result<Self, StartupError> {
        let mut seed = if settings.store.seed_defaults {
            default_seed()
        } else {
            SeedData::default()
        };

        if let Some(path) = &settings.store.seed_path {
            let extra = SeedData::load_from(path)?;
            tracing::info!(
                "Loaded {} donors and {} recipients from {}",
                extra.donors.len(),
                extra.recipients.len(),
                path.display()
            );
            seed.extend(extra);
        }

        let store = InMemoryStore::with_seed(seed)?;

        Ok(Self {
            store: Arc::new(store),
            cache: CacheManager::new(settings.cache.max_entries, settings.cache.ttl_secs),
            matcher: Matcher::new(settings.matching.radius_km),
        })
    }

    pub(crate) fn response_for(&self, result: MatchResult) -> FindMatchesResponse {
        FindMatchesResponse {
            best_match: result.best_match().cloned(),
            matches: result.matches,
            radius_km: self.matcher.radius_km(),
            total_candidates: result.total_candidates,
        }
    }
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches/find", web::post().to(find_matches))
        .route("/matches/dispatch", web::post().to(dispatch))
        .route("/postings/{id}/matches", web::get().to(posting_matches));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let (status, recipients) = match state.store.recipient_count() {
        Ok(count) => ("healthy", count),
        Err(e) => {
            tracing::warn!("Store unavailable during health check: {}", e);
            ("degraded", 0)
        }
    };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        recipients,
        cache: state.cache.stats(),
        timestamp: chrono::Utc::now(),
    })
}

/// Find matches endpoint
///
/// POST /api/v1/matches/find
///
/// Request body:
/// ```json
/// {
///   "origin": { "lat": 40.7128, "lng": -74.0060 },
///   "candidates": [ ...optional RecipientOrg list... ]
/// }
/// ```
///
/// Without `candidates` the registered recipients are ranked.
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<FindMatchesRequest>,
) -> impl Responder {
    let FindMatchesRequest { origin, candidates } = req.into_inner();

    let candidates = match candidates {
        Some(candidates) => candidates,
        None => match state.store.recipients_near(origin, state.matcher.radius_km()) {
            Ok(candidates) => candidates,
            Err(e) => return store_failed("Failed to load recipients", e),
        },
    };

    tracing::debug!("Matching origin ({}, {}) against {} candidates", origin.lat, origin.lng, candidates.len());

    let result = match state.matcher.find_matches(origin, &candidates) {
        Ok(result) => result,
        Err(e) => {
            tracing::info!("Rejected match request: {}", e);
            return match_failed(e);
        }
    };

    if result.is_empty() {
        tracing::info!("No recipient within {} km of ({}, {})", state.matcher.radius_km(), origin.lat, origin.lng);
    }

    HttpResponse::Ok().json(state.response_for(result))
}

/// Match a stored posting against the registered recipients
///
/// GET /api/v1/postings/{id}/matches
async fn posting_matches(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let posting_id = path.into_inner();
    // Captured before reading recipients so a concurrent registration
    // strands this result under an old generation
    let cache_key = CacheKey::posting_matches(&posting_id, state.cache.generation());

    if let Some(cached) = state.cache.get(&cache_key).await {
        return HttpResponse::Ok().json(cached);
    }

    let posting = match state.store.get_posting(&posting_id) {
        Ok(posting) => posting,
        Err(e) => return store_failed("Failed to fetch posting", e),
    };

    let candidates = match state.store.recipients_near(posting.location, state.matcher.radius_km()) {
        Ok(candidates) => candidates,
        Err(e) => return store_failed("Failed to load recipients", e),
    };

    let result = match state.matcher.match_posting(&posting, &candidates) {
        Ok(result) => result,
        Err(e) => return match_failed(e),
    };

    let response = state.response_for(result);

    tracing::info!(
        "Returning {} matches for posting {} ({} packets from {})",
        response.matches.len(),
        posting.id,
        posting.packets,
        posting.college_name
    );

    state.cache.set(&cache_key, response.clone()).await;

    HttpResponse::Ok().json(response)
}

/// Record sending a posting to a matched recipient
///
/// POST /api/v1/matches/dispatch
///
/// Request body:
/// ```json
/// {
///   "postingId": "string",
///   "ngoId": "string"
/// }
/// ```
///
/// The recipient's stock is left untouched.
async fn dispatch(
    state: web::Data<AppState>,
    req: web::Json<DispatchRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    let posting = match state.store.get_posting(&req.posting_id) {
        Ok(posting) => posting,
        Err(e) => return store_failed("Failed to fetch posting", e),
    };

    let ngo = match state.store.get_recipient(&req.ngo_id) {
        Ok(ngo) => ngo,
        Err(e) => return store_failed("Failed to fetch recipient", e),
    };

    // Only a recipient that would appear in the posting's matches can receive it
    let in_range = match state.matcher.match_posting(&posting, std::slice::from_ref(&ngo)) {
        Ok(result) => !result.is_empty(),
        Err(e) => return match_failed(e),
    };

    if !in_range {
        return error_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            "Recipient out of range",
            format!(
                "{} is farther than {} km from posting {}",
                ngo.id,
                state.matcher.radius_km(),
                posting.id
            ),
        );
    }

    let dispatch = Dispatch {
        id: uuid::Uuid::new_v4().to_string(),
        posting_id: posting.id.clone(),
        college_id: posting.college_id.clone(),
        ngo_id: ngo.id.clone(),
        packets: posting.packets,
        distance_km: haversine_distance(posting.location, ngo.location),
        dispatched_at: chrono::Utc::now(),
    };

    if let Err(e) = state.store.record_dispatch(dispatch.clone()) {
        return store_failed("Failed to record dispatch", e);
    }

    tracing::info!(
        "Dispatched {} packets from posting {} to {} ({:.2} km)",
        dispatch.packets,
        dispatch.posting_id,
        dispatch.ngo_id,
        dispatch.distance_km
    );

    HttpResponse::Created().json(dispatch)
}
