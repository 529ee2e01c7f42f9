//! Enquiry validation.

use crate::error::ValidationError;
use crate::input::EnquiryInput;
use crate::normalize::{optional_trimmed, required_text};

/// A validated enquiry, ready for the service to stamp with an id and a
/// submission time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnquiryDraft {
    pub name: String,
    pub email: String,
    pub message: String,
    pub category: Option<String>,
}

/// Validate a visitor-submitted enquiry.
///
/// `name`, `email` and `message` are required; the email check is shape
/// only (a `@` with characters on both sides), not deliverability.
pub fn validate_enquiry(input: &EnquiryInput) -> Result<EnquiryDraft, ValidationError> {
    let name = required_text(input.name.as_deref(), "name")?;
    let email = required_text(input.email.as_deref(), "email")?;
    if !is_plausible_email(&email) {
        return Err(ValidationError::new(
            "email",
            "not a plausible email address",
        ));
    }
    let message = required_text(input.message.as_deref(), "message")?;
    let category = optional_trimmed(input.category.as_deref()).map(|hint| hint.to_lowercase());
    Ok(EnquiryDraft {
        name,
        email,
        message,
        category,
    })
}

fn is_plausible_email(value: &str) -> bool {
    matches!(value.split_once('@'), Some((local, domain)) if !local.is_empty() && !domain.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_addresses_without_both_sides() {
        assert!(is_plausible_email("hello@studio.example"));
        assert!(!is_plausible_email("hello@"));
        assert!(!is_plausible_email("@studio.example"));
        assert!(!is_plausible_email("hello"));
    }
}
