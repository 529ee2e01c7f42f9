//! Admin service: composes the authoring pipeline with a content store.
//!
//! Every operation validates first and writes second, so a returned error
//! means the store is exactly as it was. Identity-uniqueness checks live
//! here because only this layer can see the whole collection.

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use atelier_authoring::{
    CategoryInput, EnquiryInput, JourneyInput, apply_category_patch, apply_journey_patch,
    new_category, new_journey_entry, validate_enquiry,
};
use atelier_authoring::normalize::normalize_slug;
use atelier_model::{Enquiry, JourneyEntry, RateCategory};

use crate::config::CatalogConfig;
use crate::error::CatalogError;
use crate::store::ContentStore;

/// The transport-agnostic admin surface over the portfolio content.
#[derive(Debug)]
pub struct CatalogService<S> {
    store: S,
    config: CatalogConfig,
}

impl<S: ContentStore> CatalogService<S> {
    pub fn new(store: S, config: CatalogConfig) -> Self {
        Self { store, config }
    }

    // --- rate categories ---

    pub fn create_category(&self, input: &CategoryInput) -> Result<RateCategory, CatalogError> {
        let category = new_category(input, &self.config.default_currency)?;
        if self.store.get_category(&category.id)?.is_some() {
            return Err(CatalogError::Conflict { id: category.id });
        }
        self.store.put_category(&category)?;
        info!(id = %category.id, "created rate category");
        Ok(category)
    }

    pub fn update_category(
        &self,
        id: &str,
        patch: &CategoryInput,
    ) -> Result<RateCategory, CatalogError> {
        let key = normalize_slug(id);
        let existing = self
            .store
            .get_category(&key)?
            .ok_or_else(|| CatalogError::NotFound { id: key.clone() })?;
        let updated = apply_category_patch(&existing, patch, &self.config.default_currency)?;
        if updated.id != existing.id {
            // Renaming: the new identity must be free before the old
            // document is dropped.
            if self.store.get_category(&updated.id)?.is_some() {
                return Err(CatalogError::Conflict { id: updated.id });
            }
            self.store.put_category(&updated)?;
            self.store.remove_category(&existing.id)?;
        } else {
            self.store.put_category(&updated)?;
        }
        info!(id = %updated.id, "updated rate category");
        Ok(updated)
    }

    pub fn delete_category(&self, id: &str) -> Result<(), CatalogError> {
        let key = normalize_slug(id);
        if self.store.remove_category(&key)? {
            info!(id = %key, "deleted rate category");
            Ok(())
        } else {
            Err(CatalogError::NotFound { id: key })
        }
    }

    pub fn get_category(&self, id: &str) -> Result<RateCategory, CatalogError> {
        let key = normalize_slug(id);
        self.store
            .get_category(&key)?
            .ok_or(CatalogError::NotFound { id: key })
    }

    pub fn list_categories(&self) -> Result<Vec<RateCategory>, CatalogError> {
        Ok(self.store.list_categories()?)
    }

    // --- journey entries ---

    pub fn create_journey_entry(&self, input: &JourneyInput) -> Result<JourneyEntry, CatalogError> {
        let entry = new_journey_entry(input)?;
        if self.store.get_journey(&entry.id)?.is_some() {
            return Err(CatalogError::Conflict { id: entry.id });
        }
        self.store.put_journey(&entry)?;
        info!(id = %entry.id, "created journey entry");
        Ok(entry)
    }

    pub fn update_journey_entry(
        &self,
        id: &str,
        patch: &JourneyInput,
    ) -> Result<JourneyEntry, CatalogError> {
        let key = normalize_slug(id);
        let existing = self
            .store
            .get_journey(&key)?
            .ok_or_else(|| CatalogError::NotFound { id: key.clone() })?;
        let updated = apply_journey_patch(&existing, patch)?;
        if updated.id != existing.id {
            if self.store.get_journey(&updated.id)?.is_some() {
                return Err(CatalogError::Conflict { id: updated.id });
            }
            self.store.put_journey(&updated)?;
            self.store.remove_journey(&existing.id)?;
        } else {
            self.store.put_journey(&updated)?;
        }
        info!(id = %updated.id, "updated journey entry");
        Ok(updated)
    }

    pub fn delete_journey_entry(&self, id: &str) -> Result<(), CatalogError> {
        let key = normalize_slug(id);
        if self.store.remove_journey(&key)? {
            info!(id = %key, "deleted journey entry");
            Ok(())
        } else {
            Err(CatalogError::NotFound { id: key })
        }
    }

    pub fn list_journey(&self) -> Result<Vec<JourneyEntry>, CatalogError> {
        Ok(self.store.list_journey()?)
    }

    // --- enquiries ---

    pub fn submit_enquiry(&self, input: &EnquiryInput) -> Result<Enquiry, CatalogError> {
        let draft = validate_enquiry(input)?;
        let enquiry = Enquiry {
            id: Uuid::new_v4().to_string(),
            name: draft.name,
            email: draft.email,
            message: draft.message,
            category: draft.category,
            submitted_at: Utc::now(),
        };
        self.store.put_enquiry(&enquiry)?;
        info!(id = %enquiry.id, "recorded enquiry");
        Ok(enquiry)
    }

    /// All enquiries, newest first.
    pub fn list_enquiries(&self) -> Result<Vec<Enquiry>, CatalogError> {
        let mut enquiries = self.store.list_enquiries()?;
        enquiries.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
        Ok(enquiries)
    }

    pub fn delete_enquiry(&self, id: &str) -> Result<(), CatalogError> {
        if self.store.remove_enquiry(id)? {
            Ok(())
        } else {
            Err(CatalogError::NotFound { id: id.to_string() })
        }
    }
}
