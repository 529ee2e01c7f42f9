//! Scalar coercion for form-posted values.

use crate::error::ValidationError;
use crate::input::{FlagInput, NumberInput};

/// Trim and lowercase an identity slug.
pub fn normalize_slug(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Require a non-blank text field, returning the trimmed value.
pub fn required_text(value: Option<&str>, field: &str) -> Result<String, ValidationError> {
    match value.map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => Ok(trimmed.to_string()),
        _ => Err(ValidationError::missing(field)),
    }
}

/// Trim an optional text field, mapping blank to `None`.
pub fn optional_trimmed(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|trimmed| !trimmed.is_empty())
        .map(String::from)
}

/// Coerce a price field to a non-negative number.
///
/// Absent or unparseable input defaults to 0; parsed negative values are
/// clamped to 0 to keep the coercion total.
pub fn coerce_price(input: Option<&NumberInput>) -> f64 {
    let parsed = match input {
        None => return 0.0,
        Some(NumberInput::Number(value)) => *value,
        Some(NumberInput::Text(text)) => text.trim().parse::<f64>().unwrap_or(0.0),
    };
    if parsed.is_finite() && parsed > 0.0 {
        parsed
    } else {
        0.0
    }
}

/// Coerce a form-posted flag with JavaScript truthiness: `false`, `0`, NaN
/// and the empty string are false; every other value is true.
pub fn coerce_flag(input: Option<&FlagInput>) -> bool {
    match input {
        None => false,
        Some(FlagInput::Flag(value)) => *value,
        Some(FlagInput::Number(value)) => *value != 0.0 && !value.is_nan(),
        Some(FlagInput::Text(text)) => !text.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_defaults_to_zero() {
        assert_eq!(coerce_price(None), 0.0);
        assert_eq!(
            coerce_price(Some(&NumberInput::Text("not a price".to_string()))),
            0.0
        );
        assert_eq!(coerce_price(Some(&NumberInput::Number(-5.0))), 0.0);
    }

    #[test]
    fn price_parses_string_form() {
        assert_eq!(
            coerce_price(Some(&NumberInput::Text(" 299.5 ".to_string()))),
            299.5
        );
        assert_eq!(coerce_price(Some(&NumberInput::Number(650.0))), 650.0);
    }

    #[test]
    fn flag_uses_js_truthiness() {
        assert!(!coerce_flag(None));
        assert!(coerce_flag(Some(&FlagInput::Flag(true))));
        assert!(!coerce_flag(Some(&FlagInput::Number(0.0))));
        assert!(coerce_flag(Some(&FlagInput::Number(1.0))));
        assert!(!coerce_flag(Some(&FlagInput::Text(String::new()))));
        // Non-empty strings are truthy, even "false".
        assert!(coerce_flag(Some(&FlagInput::Text("false".to_string()))));
    }
}
