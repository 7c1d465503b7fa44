//! Text rendering of the window for the terminal front end.

use std::fmt::Write;

use crate::state::{FormField, TableRow, HEADERS};
use crate::window::ProductWindow;

const NAME_WIDTH: usize = 32;

/// Draws the form, the table and the status line.
pub fn render(window: &ProductWindow) -> String {
    let mut out = String::new();

    out.push_str("=== Product Manager ===\n");
    for field in [FormField::Id, FormField::Name, FormField::Quantity, FormField::Price] {
        let _ = writeln!(out, "  {:<11} [{}]", field.label(), window.form.get(field));
    }
    out.push('\n');

    let _ = writeln!(
        out,
        "  {:>4}  {:>8}  {:<width$}  {:>10}  {:>12}",
        "#",
        HEADERS[0],
        HEADERS[1],
        HEADERS[2],
        HEADERS[3],
        width = NAME_WIDTH
    );
    let _ = writeln!(out, "  {}", "-".repeat(4 + 2 + 8 + 2 + NAME_WIDTH + 2 + 10 + 2 + 12));

    for (index, row) in window.table.rows().iter().enumerate() {
        out.push_str(&render_row(index + 1, row));
    }
    if window.table.is_empty() {
        out.push_str("  (no products)\n");
    }

    out.push('\n');
    let _ = writeln!(out, "Status: {}", window.status());
    out
}

fn render_row(number: usize, row: &TableRow) -> String {
    format!(
        "  {:>4}  {:>8}  {:<width$}  {:>10}  {:>12}\n",
        number,
        row.id,
        truncate(&row.name, NAME_WIDTH),
        row.quantity,
        row.price,
        width = NAME_WIDTH
    )
}

/// Shortens `text` to `max` characters, marking the cut with `~`.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut short: String = text.chars().take(max - 1).collect();
    short.push('~');
    short
}
