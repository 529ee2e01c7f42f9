use std::path::PathBuf;

use atelier_authoring::ValidationError;

/// Failures from a store backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse document {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode document `{id}`: {source}")]
    Encode {
        id: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("id `{id}` is not usable as a document name")]
    InvalidId { id: String },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Failures from admin service operations.
///
/// Every error is local to a single operation and is reported before any
/// write happens, so a failed call never leaves partial state behind.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("identity `{id}` is already in use")]
    Conflict { id: String },

    #[error("no entry with id `{id}`")]
    NotFound { id: String },

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl CatalogError {
    pub fn is_conflict(&self) -> bool {
        matches!(self, CatalogError::Conflict { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound { .. })
    }
}
