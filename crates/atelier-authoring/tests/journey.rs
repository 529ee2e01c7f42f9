//! Tests for journey-entry authoring and enquiry validation.

use atelier_authoring::{
    EnquiryInput, JourneyInput, apply_journey_patch, new_journey_entry, validate_enquiry,
};
use serde_json::json;

fn journey_input(value: serde_json::Value) -> JourneyInput {
    serde_json::from_value(value).expect("deserialize journey input")
}

fn enquiry_input(value: serde_json::Value) -> EnquiryInput {
    serde_json::from_value(value).expect("deserialize enquiry input")
}

#[test]
fn block_description_becomes_paragraphs() {
    let entry = new_journey_entry(&journey_input(json!({
        "id": "Freelance-Years",
        "title": "Freelance years",
        "period": "2019 — 2021",
        "paragraphs": "Started taking on client work.\n\n  Grew into full identity projects.  \n"
    })))
    .expect("valid entry");
    assert_eq!(entry.id, "freelance-years");
    assert_eq!(
        entry.paragraphs,
        vec![
            "Started taking on client work.",
            "Grew into full identity projects."
        ]
    );
}

#[test]
fn paragraph_array_is_trimmed_and_filtered() {
    let entry = new_journey_entry(&journey_input(json!({
        "id": "studio",
        "title": "Studio",
        "paragraphs": ["  First.  ", "", "Second."]
    })))
    .expect("valid entry");
    assert_eq!(entry.paragraphs, vec!["First.", "Second."]);
    assert_eq!(entry.period, "");
}

#[test]
fn title_is_required() {
    let error = new_journey_entry(&journey_input(json!({"id": "studio"})))
        .expect_err("missing title");
    assert_eq!(error.field, "title");
}

#[test]
fn journey_patch_keeps_omitted_fields() {
    let stored = new_journey_entry(&journey_input(json!({
        "id": "studio",
        "title": "Studio",
        "period": "2021 —",
        "paragraphs": ["Opened the studio."]
    })))
    .expect("valid entry");
    let patched = apply_journey_patch(&stored, &journey_input(json!({"title": "The studio"})))
        .expect("valid patch");
    assert_eq!(patched.title, "The studio");
    assert_eq!(patched.period, "2021 —");
    assert_eq!(patched.paragraphs, vec!["Opened the studio."]);
}

#[test]
fn enquiry_requires_name_email_and_message() {
    for field in ["name", "email", "message"] {
        let mut payload = json!({
            "name": "Ada",
            "email": "ada@example.com",
            "message": "Hello there."
        });
        payload.as_object_mut().expect("object").remove(field);
        let error = validate_enquiry(&enquiry_input(payload)).expect_err("missing field");
        assert_eq!(error.field, field);
    }
}

#[test]
fn enquiry_rejects_implausible_email() {
    let error = validate_enquiry(&enquiry_input(json!({
        "name": "Ada",
        "email": "not-an-address",
        "message": "Hello."
    })))
    .expect_err("bad email");
    assert_eq!(error.field, "email");
}

#[test]
fn enquiry_normalizes_the_category_hint() {
    let draft = validate_enquiry(&enquiry_input(json!({
        "name": "Ada",
        "email": "ada@example.com",
        "message": "Hello.",
        "category": "  Brand-Identity "
    })))
    .expect("valid enquiry");
    assert_eq!(draft.category.as_deref(), Some("brand-identity"));
}
