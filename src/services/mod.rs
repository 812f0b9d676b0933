// Service exports
pub mod cache;
pub mod seed;
pub mod store;

pub use cache::{CacheManager, CacheKey};
pub use seed::{SeedData, SeedError, default_seed};
pub use store::{Store, InMemoryStore, StoreError};
