use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{Coordinate, RecipientOrg};

/// Request to find matches for an ad-hoc origin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindMatchesRequest {
    pub origin: Coordinate,
    /// Candidates to rank. When absent every registered recipient is used.
    #[serde(default)]
    pub candidates: Option<Vec<RecipientOrg>>,
}

/// Request to create a food posting
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePostingRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "college_id", rename = "collegeId")]
    pub college_id: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(range(min = 1))]
    pub packets: u32,
    #[validate(length(min = 1))]
    #[serde(alias = "pickup_address", rename = "pickupAddress")]
    pub pickup_address: String,
    #[validate(range(min = 1))]
    #[serde(alias = "freshness_hours", rename = "freshnessHours")]
    pub freshness_hours: u32,
    #[serde(alias = "image_url", rename = "imageUrl", default)]
    pub image_url: Option<String>,
    /// Pickup location. Defaults to the donor's registered location.
    #[serde(default)]
    pub location: Option<Coordinate>,
}

/// Request to register a recipient organization
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRecipientRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub address: String,
    pub location: Coordinate,
    #[serde(rename = "totalCapacity")]
    pub total_capacity: u32,
    #[serde(rename = "currentFoodStock", default)]
    pub current_food_stock: u32,
    #[serde(rename = "contactInfo", default)]
    pub contact_info: String,
    #[serde(rename = "studentsCount", default)]
    pub students_count: u32,
    #[serde(rename = "staffCount", default)]
    pub staff_count: u32,
}

/// Request to register a donor organization
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterDonorRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub address: String,
    pub location: Coordinate,
    #[validate(email)]
    pub email: String,
    #[serde(rename = "kitchenCapacity", default)]
    pub kitchen_capacity: u32,
}

/// Request to send a posting to a matched recipient
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DispatchRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "posting_id", rename = "postingId")]
    pub posting_id: String,
    #[validate(length(min = 1))]
    #[serde(alias = "ngo_id", rename = "ngoId")]
    pub ngo_id: String,
}
