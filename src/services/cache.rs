use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::models::{CacheStats, FindMatchesResponse};

/// In-memory cache of match results per posting
///
/// Matching is pure, so a posting's result only changes when the recipient
/// set does. Keys carry the recipient generation: read it with `generation`
/// *before* loading recipients, and after changing the recipient set call
/// `invalidate_all`, which moves every later reader to a fresh generation.
/// A result computed from the old set can still be written, but only under
/// a key nobody reads again.
#[derive(Clone)]
pub struct CacheManager {
    matches: moka::future::Cache<String, FindMatchesResponse>,
    generation: Arc<AtomicU64>,
    ttl_secs: u64,
}

impl CacheManager {
    /// Create a new cache manager
    pub fn new(max_entries: u64, ttl_secs: u64) -> Self {
        let matches = moka::future::CacheBuilder::new(max_entries)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self {
            matches,
            generation: Arc::new(AtomicU64::new(0)),
            ttl_secs,
        }
    }

    /// Current recipient generation
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    pub async fn get(&self, key: &str) -> Option<FindMatchesResponse> {
        let hit = self.matches.get(key).await;
        if hit.is_some() {
            tracing::trace!("Cache hit: {}", key);
        } else {
            tracing::trace!("Cache miss: {}", key);
        }
        hit
    }

    pub async fn set(&self, key: &str, value: FindMatchesResponse) {
        self.matches.insert(key.to_string(), value).await;
        tracing::trace!("Cache set: {}", key);
    }

    /// Start a new generation and drop every cached result
    pub fn invalidate_all(&self) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.matches.invalidate_all();
        tracing::debug!("Invalidated cached match results, now at generation {}", generation);
    }

    /// Get cache statistics
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.matches.entry_count(),
            generation: self.generation(),
            ttl_secs: self.ttl_secs,
        }
    }
}

/// Cache key builder
pub struct CacheKey;

impl CacheKey {
    /// Build a cache key for a posting's match results at a recipient generation
    pub fn posting_matches(posting_id: &str, generation: u64) -> String {
        format!("matches:{}:{}", generation, posting_id)
    }
}
