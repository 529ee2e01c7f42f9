use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A submitted contact enquiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enquiry {
    /// Unique token assigned at submission time.
    pub id: String,
    pub name: String,
    pub email: String,
    pub message: String,
    /// Optional hint naming a rate category; not verified against the
    /// catalog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub submitted_at: DateTime<Utc>,
}
