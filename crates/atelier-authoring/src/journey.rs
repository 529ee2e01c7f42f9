//! Journey-entry authoring pipeline.

use atelier_model::JourneyEntry;

use crate::error::ValidationError;
use crate::input::JourneyInput;
use crate::normalize::{normalize_paragraphs, normalize_slug, optional_trimmed, required_text};

/// Build a new journey entry from admin input. `id` and `title` are
/// mandatory; the description arrives as a line-broken block or a paragraph
/// array and is normalized either way.
pub fn new_journey_entry(input: &JourneyInput) -> Result<JourneyEntry, ValidationError> {
    let id = normalize_slug(&required_text(input.id.as_deref(), "id")?);
    let title = required_text(input.title.as_deref(), "title")?;
    let period = optional_trimmed(input.period.as_deref()).unwrap_or_default();
    let paragraphs = input
        .paragraphs
        .as_ref()
        .map(normalize_paragraphs)
        .unwrap_or_default();
    Ok(JourneyEntry {
        id,
        title,
        period,
        paragraphs,
    })
}

/// Apply a partial update to a stored journey entry.
pub fn apply_journey_patch(
    existing: &JourneyEntry,
    patch: &JourneyInput,
) -> Result<JourneyEntry, ValidationError> {
    let mut updated = existing.clone();
    if patch.id.is_some() {
        updated.id = normalize_slug(&required_text(patch.id.as_deref(), "id")?);
    }
    if patch.title.is_some() {
        updated.title = required_text(patch.title.as_deref(), "title")?;
    }
    if let Some(period) = patch.period.as_deref() {
        updated.period = period.trim().to_string();
    }
    if let Some(paragraphs) = patch.paragraphs.as_ref() {
        updated.paragraphs = normalize_paragraphs(paragraphs);
    }
    Ok(updated)
}
