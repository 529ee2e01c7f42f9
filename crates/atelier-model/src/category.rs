use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One rate category: a named group of priced plans compared across an
/// ordered list of deliverable rows.
///
/// The `id` is the immutable identity key, unique across the catalog and
/// always stored as a lowercase slug (e.g. "brand-identity"). List order is
/// significant everywhere: `tags` render in insertion order, `plans` define
/// left-to-right column placement, `deliverables` define row order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateCategory {
    pub id: String,
    pub label: String,
    pub heading: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub plans: Vec<Plan>,
    #[serde(default)]
    pub deliverables: Vec<Deliverable>,
}

impl RateCategory {
    /// Look up a plan by id within this category.
    pub fn plan(&self, plan_id: &str) -> Option<&Plan> {
        self.plans.iter().find(|plan| plan.id == plan_id)
    }

    /// Returns true if `plan_id` names a plan in this category.
    pub fn has_plan(&self, plan_id: &str) -> bool {
        self.plan(plan_id).is_some()
    }

    /// Look up a deliverable row by id within this category.
    pub fn deliverable(&self, deliverable_id: &str) -> Option<&Deliverable> {
        self.deliverables
            .iter()
            .find(|deliverable| deliverable.id == deliverable_id)
    }
}

/// One priced tier within a category.
///
/// `id` is unique within the parent category's plan list and is the key used
/// for deliverable cell lookups.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge_label: Option<String>,
}

fn default_currency() -> String {
    "USD".to_string()
}

/// Declared cell semantics for a whole deliverable row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliverableMode {
    /// Cells are included/absent marks (the default).
    #[default]
    Boolean,
    /// Cells carry literal text values.
    Text,
}

impl DeliverableMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliverableMode::Boolean => "boolean",
            DeliverableMode::Text => "text",
        }
    }
}

impl fmt::Display for DeliverableMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DeliverableMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "boolean" => Ok(DeliverableMode::Boolean),
            "text" => Ok(DeliverableMode::Text),
            _ => Err(format!("Unknown deliverable mode: {s}")),
        }
    }
}

/// One row in the plan-comparison matrix.
///
/// `per_plan` is sparse: a plan id absent from the map is treated identically
/// to an explicit "not included" value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deliverable {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub mode: DeliverableMode,
    #[serde(default)]
    pub per_plan: BTreeMap<String, CellRaw>,
}

impl Deliverable {
    /// The raw cell value stored for a plan, if any.
    pub fn cell(&self, plan_id: &str) -> Option<&CellRaw> {
        self.per_plan.get(plan_id)
    }
}

/// The storage-side value of one comparison cell.
///
/// Persisted documents carry cells as plain JSON scalars, so this is an
/// untagged union over the three shapes admin input can produce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellRaw {
    Flag(bool),
    Number(f64),
    Text(String),
}
