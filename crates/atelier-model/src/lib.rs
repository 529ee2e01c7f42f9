pub mod category;
pub mod cell;
pub mod enquiry;
pub mod featured;
pub mod journey;

pub use category::{CellRaw, Deliverable, DeliverableMode, Plan, RateCategory};
pub use cell::{CellDisplay, resolve_cell};
pub use enquiry::Enquiry;
pub use featured::{featured_plan_index, resolve_featured_plan};
pub use journey::JourneyEntry;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn category_document_shape() {
        let category = RateCategory {
            id: "brand-identity".to_string(),
            label: "Brand Identity".to_string(),
            heading: "Brand identity design".to_string(),
            description: "Logos and systems".to_string(),
            tags: vec!["logo".to_string(), "identity".to_string()],
            plans: vec![Plan {
                id: "gold".to_string(),
                name: "Gold".to_string(),
                price: 299.0,
                currency: "USD".to_string(),
                description: String::new(),
                tagline: String::new(),
                is_featured: true,
                badge_type: None,
                badge_label: None,
            }],
            deliverables: vec![Deliverable {
                id: "logo-concepts".to_string(),
                label: "Logo concepts".to_string(),
                mode: DeliverableMode::Boolean,
                per_plan: BTreeMap::from([(
                    "gold".to_string(),
                    CellRaw::Text("3".to_string()),
                )]),
            }],
        };
        let json = serde_json::to_value(&category).expect("serialize category");
        assert_eq!(json["plans"][0]["isFeatured"], true);
        assert_eq!(json["deliverables"][0]["perPlan"]["gold"], "3");
        assert_eq!(json["deliverables"][0]["mode"], "boolean");
        let round: RateCategory = serde_json::from_value(json).expect("deserialize category");
        assert_eq!(round.id, "brand-identity");
        assert!(round.has_plan("gold"));
    }

    #[test]
    fn cell_raw_reads_plain_scalars() {
        let deliverable: Deliverable = serde_json::from_str(
            r#"{"id":"pages","label":"Pages","perPlan":{"gold":true,"silver":5,"platinum":"Unlimited"}}"#,
        )
        .expect("deserialize deliverable");
        assert_eq!(deliverable.cell("gold"), Some(&CellRaw::Flag(true)));
        assert_eq!(deliverable.cell("silver"), Some(&CellRaw::Number(5.0)));
        assert_eq!(
            deliverable.cell("platinum"),
            Some(&CellRaw::Text("Unlimited".to_string()))
        );
        assert_eq!(deliverable.mode, DeliverableMode::Boolean);
    }
}
