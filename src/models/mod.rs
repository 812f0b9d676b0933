// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Coordinate, OrgRole, RecipientOrg, DonorOrg, FoodPosting, Match, Dispatch, BoundingBox};
pub use requests::{FindMatchesRequest, CreatePostingRequest, RegisterRecipientRequest, RegisterDonorRequest, DispatchRequest};
pub use responses::{CacheStats, FindMatchesResponse, HealthResponse, ErrorResponse, DispatchHistoryResponse, RegistrationResponse};
