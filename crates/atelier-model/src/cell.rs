//! Cell-value resolution for comparison-table rendering.
//!
//! A raw cell value pulled from a deliverable's `per_plan` map resolves to
//! exactly one of three display modes. The predicate chain is explicit and
//! order-sensitive: numeric `0` and the empty string must not collapse
//! together, so no general truthiness coercion is used anywhere.

use crate::category::CellRaw;

/// Display-time resolution of one comparison cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellDisplay {
    /// Render an affirmative mark.
    Included,
    /// Render a dash.
    Absent,
    /// Render the carried string verbatim (e.g. "2", "Unlimited").
    Quantified(String),
}

impl CellDisplay {
    pub fn is_included(&self) -> bool {
        matches!(self, CellDisplay::Included)
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, CellDisplay::Absent)
    }

    /// The literal text for a quantified cell, if this is one.
    pub fn quantity(&self) -> Option<&str> {
        match self {
            CellDisplay::Quantified(text) => Some(text),
            _ => None,
        }
    }
}

/// Resolve a raw cell value to its display mode.
///
/// Total over the whole raw domain, and pure: equivalent inputs always
/// resolve identically.
///
/// - `true` or the case-insensitive string `"check"` resolve to
///   [`CellDisplay::Included`].
/// - `false`, a missing value, the empty string, and the literal `"-"`
///   resolve to [`CellDisplay::Absent`].
/// - Every number resolves to [`CellDisplay::Quantified`]; numeric `0` is a
///   value, not an absence, and renders as `"0"`.
/// - Every other string resolves to [`CellDisplay::Quantified`] carrying the
///   string untransformed.
pub fn resolve_cell(raw: Option<&CellRaw>) -> CellDisplay {
    match raw {
        None => CellDisplay::Absent,
        Some(CellRaw::Flag(true)) => CellDisplay::Included,
        Some(CellRaw::Flag(false)) => CellDisplay::Absent,
        Some(CellRaw::Number(value)) => CellDisplay::Quantified(format_quantity(*value)),
        Some(CellRaw::Text(text)) => {
            if text.is_empty() || text == "-" {
                CellDisplay::Absent
            } else if text.eq_ignore_ascii_case("check") {
                CellDisplay::Included
            } else {
                CellDisplay::Quantified(text.clone())
            }
        }
    }
}

/// Format a numeric cell value without trailing zeros ("2.0" renders as "2",
/// "10.50" as "10.5").
fn format_quantity(value: f64) -> String {
    let s = format!("{value}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}
