use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::models::{Coordinate, DonorOrg, RecipientOrg};

/// Errors that can occur when loading seed data
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse seed file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid seed data: {0}")]
    Invalid(String),
}

/// Pickup location used by the demo donor "Green Valley University"
pub const NYC_ORIGIN: Coordinate = Coordinate::new(40.7128, -74.0060);

/// Organizations loaded into the store at startup
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub donors: Vec<DonorOrg>,
    #[serde(default)]
    pub recipients: Vec<RecipientOrg>,
}

impl SeedData {
    /// Parse seed data from TOML text
    ///
    /// ```toml
    /// [[recipients]]
    /// id = "ngo1"
    /// name = "Hope Kitchen"
    /// address = "789 Care Street"
    /// location = { lat = 40.7158, lng = -74.0020 }
    /// totalCapacity = 200
    /// currentFoodStock = 50
    /// ```
    pub fn from_toml(text: &str) -> Result<Self, SeedError> {
        let seed: SeedData = toml::from_str(text)?;
        seed.validate()?;
        Ok(seed)
    }

    /// Load seed data from a TOML file
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, SeedError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    /// Append another seed set, keeping order
    pub fn extend(&mut self, other: SeedData) {
        self.donors.extend(other.donors);
        self.recipients.extend(other.recipients);
    }

    fn validate(&self) -> Result<(), SeedError> {
        let bad_donor = self.donors.iter().find(|d| !d.location.is_finite()).map(|d| &d.id);
        let bad_ngo = self.recipients.iter().find(|n| !n.location.is_finite()).map(|n| &n.id);

        match bad_donor.or(bad_ngo) {
            Some(id) => Err(SeedError::Invalid(format!("{} has non-finite coordinates", id))),
            None => Ok(()),
        }
    }
}

/// The demo's static organizations: two colleges and four NGOs
pub fn default_seed() -> SeedData {
    SeedData {
        donors: vec![
            DonorOrg {
                id: "college1".to_string(),
                name: "Green Valley University".to_string(),
                address: "123 University Blvd, Campus Town".to_string(),
                location: NYC_ORIGIN,
                email: "admin@greenvalley.edu".to_string(),
                kitchen_capacity: 500,
            },
            DonorOrg {
                id: "college2".to_string(),
                name: "Metro Technical College".to_string(),
                address: "456 College Ave, Metro City".to_string(),
                location: Coordinate::new(40.7580, -73.9855),
                email: "contact@metrotech.edu".to_string(),
                kitchen_capacity: 300,
            },
        ],
        recipients: vec![
            recipient("ngo1", "Hope Kitchen", "789 Care Street, Campus Town", (40.7158, -74.0020), (200, 50), "+1-234-567-8901", (180, 20)),
            recipient("ngo2", "Meal Bridge Foundation", "321 Help Road, Campus Town", (40.7098, -74.0100), (150, 80), "+1-234-567-8902", (120, 15)),
            recipient("ngo3", "Community Food Network", "555 Charity Lane, Campus Town", (40.7200, -74.0030), (300, 100), "+1-234-567-8903", (250, 30)),
            recipient("ngo4", "Serving Hearts NGO", "888 Kindness Ave, Metro City", (40.7600, -73.9800), (100, 20), "+1-234-567-8904", (80, 10)),
        ],
    }
}

fn recipient(
    id: &str,
    name: &str,
    address: &str,
    (lat, lng): (f64, f64),
    (total_capacity, current_food_stock): (u32, u32),
    contact_info: &str,
    (students_count, staff_count): (u32, u32),
) -> RecipientOrg {
    RecipientOrg {
        id: id.to_string(),
        name: name.to_string(),
        address: address.to_string(),
        location: Coordinate::new(lat, lng),
        total_capacity,
        current_food_stock,
        contact_info: contact_info.to_string(),
        students_count,
        staff_count,
    }
}
