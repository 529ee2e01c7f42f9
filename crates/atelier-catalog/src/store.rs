//! The content-store abstraction and the in-memory backend.

use std::collections::BTreeMap;
use std::sync::Mutex;

use atelier_model::{Enquiry, JourneyEntry, RateCategory};

use crate::error::StoreError;

/// Document-oriented storage for the three content collections.
///
/// `put` is insert-or-replace; concurrent writers are last-writer-wins. A
/// backend guarantees atomicity per document and nothing more — the service
/// layer adds no locking of its own.
pub trait ContentStore {
    fn list_categories(&self) -> Result<Vec<RateCategory>, StoreError>;
    fn get_category(&self, id: &str) -> Result<Option<RateCategory>, StoreError>;
    fn put_category(&self, category: &RateCategory) -> Result<(), StoreError>;
    /// Returns true if a document was removed.
    fn remove_category(&self, id: &str) -> Result<bool, StoreError>;

    fn list_journey(&self) -> Result<Vec<JourneyEntry>, StoreError>;
    fn get_journey(&self, id: &str) -> Result<Option<JourneyEntry>, StoreError>;
    fn put_journey(&self, entry: &JourneyEntry) -> Result<(), StoreError>;
    fn remove_journey(&self, id: &str) -> Result<bool, StoreError>;

    fn list_enquiries(&self) -> Result<Vec<Enquiry>, StoreError>;
    fn put_enquiry(&self, enquiry: &Enquiry) -> Result<(), StoreError>;
    fn remove_enquiry(&self, id: &str) -> Result<bool, StoreError>;
}

#[derive(Debug, Default)]
struct MemoryInner {
    categories: BTreeMap<String, RateCategory>,
    journey: BTreeMap<String, JourneyEntry>,
    enquiries: BTreeMap<String, Enquiry>,
}

/// Ephemeral in-memory backend, used in tests and as the no-persistence
/// default.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<MemoryInner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_inner<T>(&self, f: impl FnOnce(&mut MemoryInner) -> T) -> T {
        let mut guard = self
            .inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut guard)
    }
}

impl ContentStore for MemoryStore {
    fn list_categories(&self) -> Result<Vec<RateCategory>, StoreError> {
        Ok(self.with_inner(|inner| inner.categories.values().cloned().collect()))
    }

    fn get_category(&self, id: &str) -> Result<Option<RateCategory>, StoreError> {
        Ok(self.with_inner(|inner| inner.categories.get(id).cloned()))
    }

    fn put_category(&self, category: &RateCategory) -> Result<(), StoreError> {
        self.with_inner(|inner| {
            inner
                .categories
                .insert(category.id.clone(), category.clone());
        });
        Ok(())
    }

    fn remove_category(&self, id: &str) -> Result<bool, StoreError> {
        Ok(self.with_inner(|inner| inner.categories.remove(id).is_some()))
    }

    fn list_journey(&self) -> Result<Vec<JourneyEntry>, StoreError> {
        Ok(self.with_inner(|inner| inner.journey.values().cloned().collect()))
    }

    fn get_journey(&self, id: &str) -> Result<Option<JourneyEntry>, StoreError> {
        Ok(self.with_inner(|inner| inner.journey.get(id).cloned()))
    }

    fn put_journey(&self, entry: &JourneyEntry) -> Result<(), StoreError> {
        self.with_inner(|inner| {
            inner.journey.insert(entry.id.clone(), entry.clone());
        });
        Ok(())
    }

    fn remove_journey(&self, id: &str) -> Result<bool, StoreError> {
        Ok(self.with_inner(|inner| inner.journey.remove(id).is_some()))
    }

    fn list_enquiries(&self) -> Result<Vec<Enquiry>, StoreError> {
        Ok(self.with_inner(|inner| inner.enquiries.values().cloned().collect()))
    }

    fn put_enquiry(&self, enquiry: &Enquiry) -> Result<(), StoreError> {
        self.with_inner(|inner| {
            inner.enquiries.insert(enquiry.id.clone(), enquiry.clone());
        });
        Ok(())
    }

    fn remove_enquiry(&self, id: &str) -> Result<bool, StoreError> {
        Ok(self.with_inner(|inner| inner.enquiries.remove(id).is_some()))
    }
}
