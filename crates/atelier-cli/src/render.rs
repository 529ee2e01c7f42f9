//! Table rendering for catalog output.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use atelier_model::{CellDisplay, Enquiry, RateCategory, featured_plan_index, resolve_cell};

/// Mark rendered for an included cell.
pub const INCLUDED_MARK: &str = "✓";
/// Mark rendered for an absent cell.
pub const ABSENT_MARK: &str = "–";

/// Render one category's plan-comparison table: a column per plan, a row
/// per deliverable, the featured plan highlighted.
pub fn comparison_table(category: &RateCategory) -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table);

    let featured = featured_plan_index(&category.plans);
    let mut header = vec![header_cell("Deliverable")];
    for (index, plan) in category.plans.iter().enumerate() {
        let title = format!(
            "{}\n{}",
            plan.name,
            format_price(plan.price, &plan.currency)
        );
        let mut cell = Cell::new(title).set_alignment(CellAlignment::Center);
        if featured == Some(index) {
            cell = cell.fg(Color::Cyan).add_attribute(Attribute::Bold);
        }
        header.push(cell);
    }
    table.set_header(header);

    for deliverable in &category.deliverables {
        let mut row = vec![Cell::new(&deliverable.label)];
        for plan in &category.plans {
            row.push(display_cell(resolve_cell(deliverable.cell(&plan.id))));
        }
        table.add_row(row);
    }
    table
}

/// Render the catalog summary: one row per category.
pub fn category_summary_table(categories: &[RateCategory]) -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![
        header_cell("Id"),
        header_cell("Label"),
        header_cell("Plans"),
        header_cell("Deliverables"),
        header_cell("Tags"),
    ]);
    for category in categories {
        table.add_row(vec![
            Cell::new(&category.id),
            Cell::new(&category.label),
            Cell::new(category.plans.len()).set_alignment(CellAlignment::Right),
            Cell::new(category.deliverables.len()).set_alignment(CellAlignment::Right),
            Cell::new(category.tags.join(", ")),
        ]);
    }
    table
}

/// Render submitted enquiries, with a clamped message preview.
pub fn enquiry_table(enquiries: &[Enquiry]) -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![
        header_cell("Submitted"),
        header_cell("Name"),
        header_cell("Email"),
        header_cell("Category"),
        header_cell("Message"),
    ]);
    for enquiry in enquiries {
        table.add_row(vec![
            Cell::new(enquiry.submitted_at.format("%Y-%m-%d %H:%M")),
            Cell::new(&enquiry.name),
            Cell::new(&enquiry.email),
            Cell::new(enquiry.category.as_deref().unwrap_or("-")),
            Cell::new(preview(&enquiry.message, 60)),
        ]);
    }
    table
}

/// Format a plan price for display, without trailing zeros.
pub fn format_price(price: f64, currency: &str) -> String {
    if price.fract() == 0.0 {
        format!("{price:.0} {currency}")
    } else {
        format!("{price} {currency}")
    }
}

fn display_cell(display: CellDisplay) -> Cell {
    match display {
        CellDisplay::Included => Cell::new(INCLUDED_MARK)
            .set_alignment(CellAlignment::Center)
            .fg(Color::Green),
        CellDisplay::Absent => Cell::new(ABSENT_MARK)
            .set_alignment(CellAlignment::Center)
            .fg(Color::DarkGrey),
        CellDisplay::Quantified(text) => Cell::new(text).set_alignment(CellAlignment::Center),
    }
}

/// Clamp text for a single table cell. Presentation only; stored messages
/// are never truncated.
fn preview(text: &str, max_chars: usize) -> String {
    let flattened = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flattened.chars().count() <= max_chars {
        return flattened;
    }
    let clipped: String = flattened.chars().take(max_chars).collect();
    format!("{}…", clipped.trim_end())
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn apply_table_style(table: &mut Table) {
    table.load_preset(UTF8_FULL_CONDENSED);
    table.apply_modifier(UTF8_ROUND_CORNERS);
    table.apply_modifier(UTF8_SOLID_INNER_BORDERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);
}
