//! Per-plan cell map normalization.

use std::collections::{BTreeMap, BTreeSet};

use serde_json::Value;
use tracing::warn;

use atelier_model::CellRaw;

/// Normalize a raw per-plan cell map.
///
/// - `null` values are dropped (key removed).
/// - Strings are trimmed; keys whose value is empty after trim are dropped
///   rather than stored as an empty string.
/// - Booleans and numbers pass through unchanged.
/// - Keys that name no plan in `plan_ids` are dropped with a warning, so a
///   normalized deliverable never carries cells that cannot render.
pub fn normalize_per_plan(
    raw: &BTreeMap<String, Value>,
    plan_ids: &BTreeSet<String>,
    deliverable_id: &str,
) -> BTreeMap<String, CellRaw> {
    let mut cells = BTreeMap::new();
    for (key, value) in raw {
        let plan_id = key.trim();
        let Some(cell) = normalize_cell(value) else {
            continue;
        };
        if !plan_ids.contains(plan_id) {
            warn!(
                deliverable = deliverable_id,
                plan = plan_id,
                "dropping cell for unknown plan id"
            );
            continue;
        }
        cells.insert(plan_id.to_string(), cell);
    }
    cells
}

fn normalize_cell(value: &Value) -> Option<CellRaw> {
    match value {
        Value::Null => None,
        Value::Bool(flag) => Some(CellRaw::Flag(*flag)),
        Value::Number(number) => number.as_f64().map(CellRaw::Number),
        Value::String(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(CellRaw::Text(trimmed.to_string()))
            }
        }
        Value::Array(_) | Value::Object(_) => {
            warn!("dropping non-scalar cell value");
            None
        }
    }
}
