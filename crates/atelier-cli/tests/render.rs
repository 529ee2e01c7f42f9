//! Rendering tests: the comparison table carries resolved cells.

use std::collections::BTreeMap;

use atelier_cli::render::{
    ABSENT_MARK, INCLUDED_MARK, category_summary_table, comparison_table, enquiry_table,
};
use atelier_model::{CellRaw, Deliverable, DeliverableMode, Enquiry, Plan, RateCategory};
use chrono::{TimeZone, Utc};

fn make_plan(id: &str, name: &str, price: f64) -> Plan {
    Plan {
        id: id.to_string(),
        name: name.to_string(),
        price,
        currency: "USD".to_string(),
        description: String::new(),
        tagline: String::new(),
        is_featured: false,
        badge_type: None,
        badge_label: None,
    }
}

fn make_category() -> RateCategory {
    RateCategory {
        id: "brand-identity".to_string(),
        label: "Brand Identity".to_string(),
        heading: "Brand identity design".to_string(),
        description: String::new(),
        tags: vec!["logo".to_string()],
        plans: vec![
            make_plan("gold", "Gold", 100.0),
            make_plan("silver", "Silver", 299.0),
            make_plan("platinum", "Platinum", 650.0),
        ],
        deliverables: vec![Deliverable {
            id: "logo-concepts".to_string(),
            label: "Logo concepts".to_string(),
            mode: DeliverableMode::Boolean,
            per_plan: BTreeMap::from([
                ("gold".to_string(), CellRaw::Text("-".to_string())),
                ("silver".to_string(), CellRaw::Text("check".to_string())),
                ("platinum".to_string(), CellRaw::Text("5".to_string())),
            ]),
        }],
    }
}

#[test]
fn comparison_table_shows_resolved_cells() {
    let rendered = comparison_table(&make_category()).to_string();
    assert!(rendered.contains("Logo concepts"));
    assert!(rendered.contains(INCLUDED_MARK));
    assert!(rendered.contains(ABSENT_MARK));
    assert!(rendered.contains('5'));
    assert!(rendered.contains("Gold"));
    assert!(rendered.contains("299 USD"));
}

#[test]
fn comparison_table_renders_plans_without_deliverables() {
    let mut category = make_category();
    category.deliverables.clear();
    let rendered = comparison_table(&category).to_string();
    assert!(rendered.contains("Deliverable"));
    assert!(rendered.contains("Platinum"));
}

#[test]
fn summary_table_counts_collections() {
    let rendered = category_summary_table(&[make_category()]).to_string();
    assert!(rendered.contains("brand-identity"));
    assert!(rendered.contains("Brand Identity"));
    assert!(rendered.contains("logo"));
}

#[test]
fn enquiry_table_clamps_the_message() {
    let enquiry = Enquiry {
        id: "e-1".to_string(),
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        message: "word ".repeat(50),
        category: None,
        submitted_at: Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).single().expect("valid time"),
    };
    let rendered = enquiry_table(&[enquiry]).to_string();
    assert!(rendered.contains("ada@example.com"));
    assert!(rendered.contains('…'));
    assert!(rendered.contains("2026-08-06"));
}
