use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;

use crate::core::distance::{calculate_bounding_box, is_within_bounding_box};
use crate::models::{Coordinate, Dispatch, DonorOrg, FoodPosting, OrgRole, RecipientOrg};
use crate::services::seed::SeedData;

/// Errors that can occur when reading or writing the store
#[derive(Debug, Error, PartialEq)]
pub enum StoreError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Store lock poisoned")]
    LockPoisoned,
}

/// Persistence boundary for organizations, postings and dispatches
///
/// Recipient listings preserve registration order, which the matcher relies
/// on to break need-score ties.
pub trait Store: Send + Sync {
    fn list_recipients(&self) -> Result<Vec<RecipientOrg>, StoreError>;

    /// Recipients inside the bounding box of `radius_km` around `center`.
    /// A superset of those within the radius; callers still measure.
    fn recipients_near(&self, center: Coordinate, radius_km: f64) -> Result<Vec<RecipientOrg>, StoreError>;

    fn get_recipient(&self, id: &str) -> Result<RecipientOrg, StoreError>;

    fn insert_recipient(&self, ngo: RecipientOrg) -> Result<(), StoreError>;

    fn recipient_count(&self) -> Result<usize, StoreError>;

    fn get_donor(&self, id: &str) -> Result<DonorOrg, StoreError>;

    fn insert_donor(&self, donor: DonorOrg) -> Result<(), StoreError>;

    fn get_posting(&self, id: &str) -> Result<FoodPosting, StoreError>;

    fn insert_posting(&self, posting: FoodPosting) -> Result<(), StoreError>;

    fn record_dispatch(&self, dispatch: Dispatch) -> Result<(), StoreError>;

    fn dispatches_for_college(&self, college_id: &str) -> Result<Vec<Dispatch>, StoreError>;
}

#[derive(Debug, Default)]
struct Inner {
    recipients: Vec<RecipientOrg>,
    recipient_index: HashMap<String, usize>,
    donors: HashMap<String, DonorOrg>,
    postings: HashMap<String, FoodPosting>,
    dispatches: Vec<Dispatch>,
}

impl Inner {
    /// Role already holding `id`, if any. Ids are unique across both roles.
    fn role_of(&self, id: &str) -> Option<OrgRole> {
        if self.recipient_index.contains_key(id) {
            Some(OrgRole::Ngo)
        } else if self.donors.contains_key(id) {
            Some(OrgRole::College)
        } else {
            None
        }
    }
}

/// Process-local store. State is lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    inner: RwLock<Inner>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with seed organizations
    pub fn with_seed(seed: SeedData) -> Result<Self, StoreError> {
        let store = Self::new();
        for donor in seed.donors {
            store.insert_donor(donor)?;
        }
        for ngo in seed.recipients {
            store.insert_recipient(ngo)?;
        }
        Ok(store)
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Inner>, StoreError> {
        self.inner.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Inner>, StoreError> {
        self.inner.write().map_err(|_| StoreError::LockPoisoned)
    }
}

impl Store for InMemoryStore {
    fn list_recipients(&self) -> Result<Vec<RecipientOrg>, StoreError> {
        Ok(self.read()?.recipients.clone())
    }

    fn recipients_near(&self, center: Coordinate, radius_km: f64) -> Result<Vec<RecipientOrg>, StoreError> {
        let bbox = calculate_bounding_box(center, radius_km);
        let inner = self.read()?;
        Ok(inner
            .recipients
            .iter()
            .filter(|ngo| is_within_bounding_box(ngo.location, &bbox))
            .cloned()
            .collect())
    }

    fn get_recipient(&self, id: &str) -> Result<RecipientOrg, StoreError> {
        let inner = self.read()?;
        inner
            .recipient_index
            .get(id)
            .map(|&idx| inner.recipients[idx].clone())
            .ok_or_else(|| StoreError::NotFound(format!("recipient {}", id)))
    }

    fn insert_recipient(&self, ngo: RecipientOrg) -> Result<(), StoreError> {
        let mut inner = self.write()?;
        if let Some(role) = inner.role_of(&ngo.id) {
            return Err(StoreError::Conflict(format!("id {} already registered as {}", ngo.id, role.as_str())));
        }
        let idx = inner.recipients.len();
        inner.recipient_index.insert(ngo.id.clone(), idx);
        inner.recipients.push(ngo);
        Ok(())
    }

    fn recipient_count(&self) -> Result<usize, StoreError> {
        Ok(self.read()?.recipients.len())
    }

    fn get_donor(&self, id: &str) -> Result<DonorOrg, StoreError> {
        self.read()?
            .donors
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("donor {}", id)))
    }

    fn insert_donor(&self, donor: DonorOrg) -> Result<(), StoreError> {
        let mut inner = self.write()?;
        if let Some(role) = inner.role_of(&donor.id) {
            return Err(StoreError::Conflict(format!("id {} already registered as {}", donor.id, role.as_str())));
        }
        inner.donors.insert(donor.id.clone(), donor);
        Ok(())
    }

    fn get_posting(&self, id: &str) -> Result<FoodPosting, StoreError> {
        self.read()?
            .postings
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("posting {}", id)))
    }

    fn insert_posting(&self, posting: FoodPosting) -> Result<(), StoreError> {
        let mut inner = self.write()?;
        if inner.postings.contains_key(&posting.id) {
            return Err(StoreError::Conflict(format!("posting {} already exists", posting.id)));
        }
        inner.postings.insert(posting.id.clone(), posting);
        Ok(())
    }

    fn record_dispatch(&self, dispatch: Dispatch) -> Result<(), StoreError> {
        self.write()?.dispatches.push(dispatch);
        Ok(())
    }

    fn dispatches_for_college(&self, college_id: &str) -> Result<Vec<Dispatch>, StoreError> {
        Ok(self
            .read()?
            .dispatches
            .iter()
            .filter(|d| d.college_id == college_id)
            .cloned()
            .collect())
    }
}
