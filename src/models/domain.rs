use serde::{Deserialize, Serialize};

/// Geographic point in decimal degrees (WGS84)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Both components are finite numbers
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

/// Which side of a donation an organization is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrgRole {
    /// Donor kitchen offering surplus food
    College,
    /// Recipient organization absorbing meals
    Ngo,
}

impl OrgRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrgRole::College => "college",
            OrgRole::Ngo => "ngo",
        }
    }
}

/// Recipient organization (NGO)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipientOrg {
    pub id: String,
    pub name: String,
    pub address: String,
    pub location: Coordinate,
    /// Meals per day the organization can absorb
    #[serde(rename = "totalCapacity")]
    pub total_capacity: u32,
    /// Meals currently held
    #[serde(rename = "currentFoodStock")]
    pub current_food_stock: u32,
    #[serde(rename = "contactInfo", default)]
    pub contact_info: String,
    #[serde(rename = "studentsCount", default)]
    pub students_count: u32,
    #[serde(rename = "staffCount", default)]
    pub staff_count: u32,
}

impl RecipientOrg {
    /// Unmet demand, negative when over-supplied
    #[inline]
    pub fn need_score(&self) -> i64 {
        i64::from(self.total_capacity) - i64::from(self.current_food_stock)
    }
}

/// Donor organization (college kitchen)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonorOrg {
    pub id: String,
    pub name: String,
    pub address: String,
    pub location: Coordinate,
    pub email: String,
    #[serde(rename = "kitchenCapacity", default)]
    pub kitchen_capacity: u32,
}

/// Surplus food offered by a donor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodPosting {
    pub id: String,
    #[serde(rename = "collegeId")]
    pub college_id: String,
    #[serde(rename = "collegeName")]
    pub college_name: String,
    pub description: String,
    pub packets: u32,
    #[serde(rename = "pickupAddress")]
    pub pickup_address: String,
    /// Hours the food stays usable. Advisory only.
    #[serde(rename = "freshnessHours")]
    pub freshness_hours: u32,
    #[serde(rename = "imageUrl", default)]
    pub image_url: Option<String>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub location: Coordinate,
}

/// A recipient within range of a donation, with its ranking inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub ngo: RecipientOrg,
    #[serde(rename = "distanceKm")]
    pub distance_km: f64,
    #[serde(rename = "needScore")]
    pub need_score: i64,
}

/// Record of a donor sending a posting to a matched recipient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dispatch {
    pub id: String,
    #[serde(rename = "postingId")]
    pub posting_id: String,
    #[serde(rename = "collegeId")]
    pub college_id: String,
    #[serde(rename = "ngoId")]
    pub ngo_id: String,
    pub packets: u32,
    #[serde(rename = "distanceKm")]
    pub distance_km: f64,
    #[serde(rename = "dispatchedAt")]
    pub dispatched_at: chrono::DateTime<chrono::Utc>,
}

/// Geospatial bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl BoundingBox {
    /// Every canonical coordinate
    pub const GLOBE: BoundingBox = BoundingBox {
        min_lat: -90.0,
        max_lat: 90.0,
        min_lng: -180.0,
        max_lng: 180.0,
    };
}
