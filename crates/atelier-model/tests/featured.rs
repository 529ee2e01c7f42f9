//! Unit and property tests for featured-plan resolution.

use atelier_model::{Plan, featured_plan_index, resolve_featured_plan};
use proptest::prelude::*;

fn make_plan(id: &str, is_featured: bool) -> Plan {
    Plan {
        id: id.to_string(),
        name: id.to_uppercase(),
        price: 0.0,
        currency: "USD".to_string(),
        description: String::new(),
        tagline: String::new(),
        is_featured,
        badge_type: None,
        badge_label: None,
    }
}

fn unflagged_plans(count: usize) -> Vec<Plan> {
    (0..count)
        .map(|index| make_plan(&format!("plan-{index}"), false))
        .collect()
}

#[test]
fn explicit_flag_wins_regardless_of_position() {
    let plans = vec![
        make_plan("basic", false),
        make_plan("studio", false),
        make_plan("bespoke", true),
    ];
    assert_eq!(resolve_featured_plan(&plans).map(|p| p.id.as_str()), Some("bespoke"));
    assert_eq!(featured_plan_index(&plans), Some(2));
}

#[test]
fn first_flag_wins_when_several_are_set() {
    let plans = vec![
        make_plan("basic", true),
        make_plan("studio", true),
        make_plan("bespoke", false),
    ];
    assert_eq!(resolve_featured_plan(&plans).map(|p| p.id.as_str()), Some("basic"));
}

#[test]
fn three_unflagged_plans_feature_the_middle_one() {
    let plans = unflagged_plans(3);
    assert_eq!(resolve_featured_plan(&plans).map(|p| p.id.as_str()), Some("plan-1"));
    assert_eq!(featured_plan_index(&plans), Some(1));
}

#[test]
fn other_lengths_feature_the_first_plan() {
    for count in [1usize, 2, 4, 5] {
        let plans = unflagged_plans(count);
        assert_eq!(
            resolve_featured_plan(&plans).map(|p| p.id.as_str()),
            Some("plan-0"),
            "length {count}"
        );
    }
}

#[test]
fn empty_list_has_no_featured_plan() {
    assert!(resolve_featured_plan(&[]).is_none());
    assert_eq!(featured_plan_index(&[]), None);
}

proptest! {
    #[test]
    fn unflagged_fallback_is_positional(count in 0usize..12) {
        let plans = unflagged_plans(count);
        let expected = match count {
            0 => None,
            3 => Some(1),
            _ => Some(0),
        };
        prop_assert_eq!(featured_plan_index(&plans), expected);
    }

    #[test]
    fn single_flag_is_always_resolved(count in 1usize..12, flagged in 0usize..12) {
        let flagged = flagged % count;
        let mut plans = unflagged_plans(count);
        plans[flagged].is_featured = true;
        let resolved = resolve_featured_plan(&plans).expect("non-empty list");
        prop_assert_eq!(resolved.id.as_str(), plans[flagged].id.as_str());
        prop_assert_eq!(featured_plan_index(&plans), Some(flagged));
    }

    #[test]
    fn resolution_matches_index_form(count in 0usize..12) {
        let plans = unflagged_plans(count);
        let by_ref = resolve_featured_plan(&plans).map(|p| p.id.clone());
        let by_index = featured_plan_index(&plans).map(|i| plans[i].id.clone());
        prop_assert_eq!(by_ref, by_index);
    }
}
