//! Featured-plan resolution.

use crate::category::Plan;

/// Determine which single plan in an ordered list is visually emphasized.
///
/// 1. The first plan flagged `is_featured`, in list order.
/// 2. Otherwise the middle plan when exactly three exist.
/// 3. Otherwise the first plan.
/// 4. `None` for an empty list.
pub fn resolve_featured_plan(plans: &[Plan]) -> Option<&Plan> {
    if let Some(plan) = plans.iter().find(|plan| plan.is_featured) {
        return Some(plan);
    }
    if plans.len() == 3 {
        return plans.get(1);
    }
    plans.first()
}

/// Index form of [`resolve_featured_plan`], for callers that address plans
/// positionally (e.g. table column highlighting).
pub fn featured_plan_index(plans: &[Plan]) -> Option<usize> {
    if let Some(index) = plans.iter().position(|plan| plan.is_featured) {
        return Some(index);
    }
    if plans.len() == 3 {
        return Some(1);
    }
    if plans.is_empty() { None } else { Some(0) }
}
