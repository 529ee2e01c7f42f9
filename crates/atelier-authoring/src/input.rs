//! Loosely-typed admin input payloads.
//!
//! These mirror what a web form posts: every field optional, list fields
//! accepted as either a delimited string or an array, numbers accepted as
//! number or string. Untagged unions carry the either/or shapes; the
//! normalization pipeline turns them into canonical model values.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

/// A list field that may arrive as a single comma-separated string or as an
/// ordered array of strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListInput {
    Joined(String),
    Items(Vec<String>),
}

/// A free-text field that may arrive as one block with line breaks or as an
/// ordered array of paragraph strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TextBlockInput {
    Block(String),
    Paragraphs(Vec<String>),
}

/// A numeric field that may arrive as a number or as its string form.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NumberInput {
    Number(f64),
    Text(String),
}

/// A boolean field as posted by form handlers: a real bool, a number, or a
/// string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FlagInput {
    Flag(bool),
    Number(f64),
    Text(String),
}

/// Admin payload for creating or partially updating a rate category.
///
/// On create, `id`, `label` and `heading` are mandatory; on update only the
/// supplied fields are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInput {
    pub id: Option<String>,
    pub label: Option<String>,
    pub heading: Option<String>,
    pub description: Option<String>,
    pub tags: Option<ListInput>,
    pub plans: Option<Vec<PlanInput>>,
    pub deliverables: Option<Vec<DeliverableInput>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanInput {
    pub id: Option<String>,
    pub name: Option<String>,
    pub price: Option<NumberInput>,
    pub currency: Option<String>,
    pub description: Option<String>,
    pub tagline: Option<String>,
    pub is_featured: Option<FlagInput>,
    pub badge_type: Option<String>,
    pub badge_label: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliverableInput {
    pub id: Option<String>,
    pub label: Option<String>,
    pub mode: Option<String>,
    /// Raw cells keyed by plan id; values arrive as arbitrary JSON scalars
    /// (bool, number, string, or null).
    pub per_plan: Option<BTreeMap<String, Value>>,
}

/// Admin payload for creating or partially updating a journey entry.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyInput {
    pub id: Option<String>,
    pub title: Option<String>,
    pub period: Option<String>,
    pub paragraphs: Option<TextBlockInput>,
}

/// A visitor-submitted enquiry, prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnquiryInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
    pub category: Option<String>,
}
