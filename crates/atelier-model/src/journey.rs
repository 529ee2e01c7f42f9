use serde::{Deserialize, Serialize};

/// One entry on the journey/timeline page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyEntry {
    /// Unique lowercase slug.
    pub id: String,
    pub title: String,
    /// Free-form period text, e.g. "2019 — 2021".
    #[serde(default)]
    pub period: String,
    /// Ordered, trimmed, non-empty paragraph strings.
    #[serde(default)]
    pub paragraphs: Vec<String>,
}
