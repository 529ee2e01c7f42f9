//! Category authoring pipeline.
//!
//! Turns a loose [`CategoryInput`] into a canonical [`RateCategory`]
//! (create) or into a patched copy of a stored one (partial update).
//! Validation is complete before any value is returned, so a failed call
//! leaves nothing for the caller to persist.

use std::collections::BTreeSet;

use atelier_model::{Deliverable, DeliverableMode, Plan, RateCategory};

use crate::error::ValidationError;
use crate::input::{CategoryInput, DeliverableInput, PlanInput};
use crate::normalize::{
    coerce_flag, coerce_price, normalize_per_plan, normalize_slug, normalize_string_list,
    optional_trimmed, required_text,
};

/// Build a new category from admin input.
///
/// `id`, `label` and `heading` are mandatory; the id is trimmed and
/// lowercased. The identity-uniqueness check against the catalog belongs to
/// the service layer, which owns store access.
pub fn new_category(
    input: &CategoryInput,
    default_currency: &str,
) -> Result<RateCategory, ValidationError> {
    let id = normalize_slug(&required_text(input.id.as_deref(), "id")?);
    let label = required_text(input.label.as_deref(), "label")?;
    let heading = required_text(input.heading.as_deref(), "heading")?;
    let description = optional_trimmed(input.description.as_deref()).unwrap_or_default();
    let tags = input
        .tags
        .as_ref()
        .map(normalize_string_list)
        .unwrap_or_default();
    let plans = normalize_plans(input.plans.as_deref().unwrap_or(&[]), default_currency)?;
    let plan_ids = plan_id_set(&plans);
    let deliverables =
        normalize_deliverables(input.deliverables.as_deref().unwrap_or(&[]), &plan_ids)?;
    Ok(RateCategory {
        id,
        label,
        heading,
        description,
        tags,
        plans,
        deliverables,
    })
}

/// Apply a partial update to a stored category.
///
/// Only fields present in the patch are normalized and applied; omitted
/// fields keep their stored values. Required fields may be replaced but not
/// blanked. A supplied deliverable list is validated against the effective
/// plan list (the patched one when plans are also supplied, the stored one
/// otherwise).
pub fn apply_category_patch(
    existing: &RateCategory,
    patch: &CategoryInput,
    default_currency: &str,
) -> Result<RateCategory, ValidationError> {
    let mut updated = existing.clone();
    if patch.id.is_some() {
        updated.id = normalize_slug(&required_text(patch.id.as_deref(), "id")?);
    }
    if patch.label.is_some() {
        updated.label = required_text(patch.label.as_deref(), "label")?;
    }
    if patch.heading.is_some() {
        updated.heading = required_text(patch.heading.as_deref(), "heading")?;
    }
    if let Some(description) = patch.description.as_deref() {
        updated.description = description.trim().to_string();
    }
    if let Some(tags) = patch.tags.as_ref() {
        updated.tags = normalize_string_list(tags);
    }
    if let Some(plans) = patch.plans.as_deref() {
        updated.plans = normalize_plans(plans, default_currency)?;
    }
    if let Some(deliverables) = patch.deliverables.as_deref() {
        let plan_ids = plan_id_set(&updated.plans);
        updated.deliverables = normalize_deliverables(deliverables, &plan_ids)?;
    }
    Ok(updated)
}

fn plan_id_set(plans: &[Plan]) -> BTreeSet<String> {
    plans.iter().map(|plan| plan.id.clone()).collect()
}

fn normalize_plans(
    inputs: &[PlanInput],
    default_currency: &str,
) -> Result<Vec<Plan>, ValidationError> {
    let mut plans = Vec::with_capacity(inputs.len());
    let mut seen = BTreeSet::new();
    for (index, input) in inputs.iter().enumerate() {
        let id = required_text(input.id.as_deref(), &format!("plans[{index}].id"))?;
        let name = required_text(input.name.as_deref(), &format!("plans[{index}].name"))?;
        if !seen.insert(id.clone()) {
            return Err(ValidationError::new(
                "plans",
                format!("duplicate plan id `{id}`"),
            ));
        }
        plans.push(Plan {
            id,
            name,
            price: coerce_price(input.price.as_ref()),
            currency: optional_trimmed(input.currency.as_deref())
                .unwrap_or_else(|| default_currency.to_string()),
            description: optional_trimmed(input.description.as_deref()).unwrap_or_default(),
            tagline: optional_trimmed(input.tagline.as_deref()).unwrap_or_default(),
            is_featured: coerce_flag(input.is_featured.as_ref()),
            badge_type: optional_trimmed(input.badge_type.as_deref()),
            badge_label: optional_trimmed(input.badge_label.as_deref()),
        });
    }
    Ok(plans)
}

fn normalize_deliverables(
    inputs: &[DeliverableInput],
    plan_ids: &BTreeSet<String>,
) -> Result<Vec<Deliverable>, ValidationError> {
    let mut deliverables = Vec::with_capacity(inputs.len());
    let mut seen = BTreeSet::new();
    for (index, input) in inputs.iter().enumerate() {
        let id = required_text(input.id.as_deref(), &format!("deliverables[{index}].id"))?;
        let label = required_text(
            input.label.as_deref(),
            &format!("deliverables[{index}].label"),
        )?;
        if !seen.insert(id.clone()) {
            return Err(ValidationError::new(
                "deliverables",
                format!("duplicate deliverable id `{id}`"),
            ));
        }
        // Row semantics are text only on an exact "text"; anything else
        // (including absence) keeps the boolean default.
        let mode = match input.mode.as_deref() {
            Some("text") => DeliverableMode::Text,
            _ => DeliverableMode::Boolean,
        };
        let per_plan = input
            .per_plan
            .as_ref()
            .map(|raw| normalize_per_plan(raw, plan_ids, &id))
            .unwrap_or_default();
        deliverables.push(Deliverable {
            id,
            label,
            mode,
            per_plan,
        });
    }
    Ok(deliverables)
}
