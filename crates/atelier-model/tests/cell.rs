//! Unit tests for cell-value resolution.

use atelier_model::{CellDisplay, CellRaw, resolve_cell};

fn text(value: &str) -> Option<CellRaw> {
    Some(CellRaw::Text(value.to_string()))
}

#[test]
fn affirmative_values_are_included() {
    assert_eq!(resolve_cell(Some(&CellRaw::Flag(true))), CellDisplay::Included);
    assert_eq!(resolve_cell(text("check").as_ref()), CellDisplay::Included);
    assert_eq!(resolve_cell(text("Check").as_ref()), CellDisplay::Included);
    assert_eq!(resolve_cell(text("CHECK").as_ref()), CellDisplay::Included);
}

#[test]
fn empty_values_are_absent() {
    assert_eq!(resolve_cell(Some(&CellRaw::Flag(false))), CellDisplay::Absent);
    assert_eq!(resolve_cell(None), CellDisplay::Absent);
    assert_eq!(resolve_cell(text("").as_ref()), CellDisplay::Absent);
    assert_eq!(resolve_cell(text("-").as_ref()), CellDisplay::Absent);
}

#[test]
fn numbers_are_quantified_including_zero() {
    // Numeric 0 is a value, not an absence.
    assert_eq!(
        resolve_cell(Some(&CellRaw::Number(0.0))),
        CellDisplay::Quantified("0".to_string())
    );
    assert_eq!(
        resolve_cell(Some(&CellRaw::Number(2.0))),
        CellDisplay::Quantified("2".to_string())
    );
    assert_eq!(
        resolve_cell(Some(&CellRaw::Number(15.5))),
        CellDisplay::Quantified("15.5".to_string())
    );
}

#[test]
fn other_strings_are_quantified_verbatim() {
    assert_eq!(
        resolve_cell(text("Unlimited").as_ref()),
        CellDisplay::Quantified("Unlimited".to_string())
    );
    assert_eq!(
        resolve_cell(text("0 items").as_ref()),
        CellDisplay::Quantified("0 items".to_string())
    );
    assert_eq!(
        resolve_cell(text("15–30 pages").as_ref()),
        CellDisplay::Quantified("15–30 pages".to_string())
    );
    // Only the exact word "check" is affirmative.
    assert_eq!(
        resolve_cell(text("checked").as_ref()),
        CellDisplay::Quantified("checked".to_string())
    );
}

#[test]
fn display_accessors() {
    assert!(resolve_cell(Some(&CellRaw::Flag(true))).is_included());
    assert!(resolve_cell(None).is_absent());
    assert_eq!(
        resolve_cell(text("5").as_ref()).quantity(),
        Some("5")
    );
    assert_eq!(resolve_cell(None).quantity(), None);
}
