use thiserror::Error;

/// A rejected admin input, carrying enough field-level context for the
/// caller to correct and resubmit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid field `{field}`: {message}")]
pub struct ValidationError {
    /// Dotted path of the offending field, e.g. "heading" or "plans[1].id".
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    pub(crate) fn missing(field: impl Into<String>) -> Self {
        Self::new(field, "required field is missing or blank")
    }
}
