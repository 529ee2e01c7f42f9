//! JSON-file store: one document per file.
//!
//! Layout under the store root:
//! `categories/<id>.json`, `journey/<id>.json`, `enquiries/<id>.json`.
//! Writes go through a temp file in the same directory followed by a
//! rename, which is what gives this backend its per-document atomicity.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use atelier_model::{Enquiry, JourneyEntry, RateCategory};

use crate::error::StoreError;
use crate::store::ContentStore;

const CATEGORIES: &str = "categories";
const JOURNEY: &str = "journey";
const ENQUIRIES: &str = "enquiries";

/// File-backed content store rooted at a data directory.
#[derive(Debug, Clone)]
pub struct JsonStore {
    root: PathBuf,
}

impl JsonStore {
    /// Open a store at `root`, creating the collection directories if
    /// needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        for name in [CATEGORIES, JOURNEY, ENQUIRIES] {
            let dir = root.join(name);
            fs::create_dir_all(&dir).map_err(|source| StoreError::io(&dir, source))?;
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn document_path(&self, collection: &str, id: &str) -> Result<PathBuf, StoreError> {
        if !is_safe_document_name(id) {
            return Err(StoreError::InvalidId { id: id.to_string() });
        }
        Ok(self.root.join(collection).join(format!("{id}.json")))
    }

    fn get_document<T: DeserializeOwned>(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<T>, StoreError> {
        let path = self.document_path(collection, id)?;
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(source) if source.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(StoreError::io(&path, source)),
        };
        let document =
            serde_json::from_slice(&bytes).map_err(|source| StoreError::Parse { path, source })?;
        Ok(Some(document))
    }

    fn put_document<T: Serialize>(
        &self,
        collection: &str,
        id: &str,
        document: &T,
    ) -> Result<(), StoreError> {
        let path = self.document_path(collection, id)?;
        let bytes = serde_json::to_vec_pretty(document).map_err(|source| StoreError::Encode {
            id: id.to_string(),
            source,
        })?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, bytes).map_err(|source| StoreError::io(&tmp, source))?;
        fs::rename(&tmp, &path).map_err(|source| StoreError::io(&path, source))?;
        debug!(collection, id, "wrote document");
        Ok(())
    }

    fn remove_document(&self, collection: &str, id: &str) -> Result<bool, StoreError> {
        let path = self.document_path(collection, id)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!(collection, id, "removed document");
                Ok(true)
            }
            Err(source) if source.kind() == ErrorKind::NotFound => Ok(false),
            Err(source) => Err(StoreError::io(&path, source)),
        }
    }

    fn list_documents<T: DeserializeOwned>(&self, collection: &str) -> Result<Vec<T>, StoreError> {
        let dir = self.root.join(collection);
        let entries = fs::read_dir(&dir).map_err(|source| StoreError::io(&dir, source))?;
        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| StoreError::io(&dir, source))?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                paths.push(path);
            }
        }
        // Directory order is platform-dependent; sort for determinism.
        paths.sort();
        let mut documents = Vec::with_capacity(paths.len());
        for path in paths {
            let bytes = fs::read(&path).map_err(|source| StoreError::io(&path, source))?;
            let document = serde_json::from_slice(&bytes)
                .map_err(|source| StoreError::Parse { path, source })?;
            documents.push(document);
        }
        Ok(documents)
    }
}

/// Document ids double as file names, so restrict them to a conservative
/// slug alphabet and refuse anything that could traverse out of the
/// collection directory.
fn is_safe_document_name(id: &str) -> bool {
    !id.is_empty()
        && !id.starts_with('.')
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

impl ContentStore for JsonStore {
    fn list_categories(&self) -> Result<Vec<RateCategory>, StoreError> {
        self.list_documents(CATEGORIES)
    }

    fn get_category(&self, id: &str) -> Result<Option<RateCategory>, StoreError> {
        self.get_document(CATEGORIES, id)
    }

    fn put_category(&self, category: &RateCategory) -> Result<(), StoreError> {
        self.put_document(CATEGORIES, &category.id, category)
    }

    fn remove_category(&self, id: &str) -> Result<bool, StoreError> {
        self.remove_document(CATEGORIES, id)
    }

    fn list_journey(&self) -> Result<Vec<JourneyEntry>, StoreError> {
        self.list_documents(JOURNEY)
    }

    fn get_journey(&self, id: &str) -> Result<Option<JourneyEntry>, StoreError> {
        self.get_document(JOURNEY, id)
    }

    fn put_journey(&self, entry: &JourneyEntry) -> Result<(), StoreError> {
        self.put_document(JOURNEY, &entry.id, entry)
    }

    fn remove_journey(&self, id: &str) -> Result<bool, StoreError> {
        self.remove_document(JOURNEY, id)
    }

    fn list_enquiries(&self) -> Result<Vec<Enquiry>, StoreError> {
        self.list_documents(ENQUIRIES)
    }

    fn put_enquiry(&self, enquiry: &Enquiry) -> Result<(), StoreError> {
        self.put_document(ENQUIRIES, &enquiry.id, enquiry)
    }

    fn remove_enquiry(&self, id: &str) -> Result<bool, StoreError> {
        self.remove_document(ENQUIRIES, id)
    }
}
