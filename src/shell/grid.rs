//! Plain-text grid rendering for the shell
//!
//! Renders the table as aligned columns with:
//! - 1-based row numbers in a gutter
//! - Header row with a dashed underline
//! - Right-aligned numeric cells
//! - Width capping with ellipsis truncation

use crate::dat::Table;

/// Narrowest a column is drawn, in characters
const MIN_WIDTH: usize = 4;
/// Widest a column is drawn before cell content is truncated
const MAX_WIDTH: usize = 40;
/// Rows sampled when measuring column widths
const WIDTH_SAMPLE_ROWS: usize = 100;

/// Check if a string looks like a number (for right-alignment)
pub fn is_number(s: &str) -> bool {
    if s.is_empty() {
        return false;
    }
    s.parse::<f64>().is_ok()
}

/// Truncate text with ellipsis if too long
pub fn truncate_text(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else if max_chars <= 1 {
        s.chars().take(max_chars).collect()
    } else {
        let mut result: String = s.chars().take(max_chars - 1).collect();
        result.push('…');
        result
    }
}

/// Calculate display widths per column from headers and a row sample
pub fn column_widths(table: &Table) -> Vec<usize> {
    let mut widths = vec![MIN_WIDTH; table.column_count()];

    let sampled = std::iter::once(&table.headers).chain(table.rows.iter().take(WIDTH_SAMPLE_ROWS));
    for row in sampled {
        for (col, cell) in row.iter().enumerate() {
            if col < widths.len() {
                let cell_width = cell.chars().count();
                widths[col] = widths[col].max(cell_width).min(MAX_WIDTH);
            }
        }
    }

    widths
}

/// Render the table as text, showing at most `max_rows` data rows
pub fn render_table(table: &Table, max_rows: usize) -> String {
    if table.is_empty() {
        return "(empty table)\n".to_string();
    }

    let widths = column_widths(table);
    let digits = row_digits(table.rows.len());
    let mut lines = Vec::new();

    if !table.headers.is_empty() {
        lines.push(format_line(&" ".repeat(digits), &table.headers, &widths));
        let rules: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        lines.push(format_line(&" ".repeat(digits), &rules, &widths));
    }

    for (idx, row) in table.rows.iter().take(max_rows).enumerate() {
        let gutter = format!("{:>w$}", idx + 1, w = digits);
        lines.push(format_line(&gutter, row, &widths));
    }

    let hidden = table.rows.len().saturating_sub(max_rows);
    if hidden > 0 {
        lines.push(format!(
            "... {} more row{}",
            hidden,
            if hidden == 1 { "" } else { "s" }
        ));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Gutter width: enough for the largest row number, at least 3 characters
fn row_digits(row_count: usize) -> usize {
    let digits = ((row_count.max(1) as f64).log10().floor() as usize) + 1;
    digits.max(3)
}

fn format_line(gutter: &str, cells: &[String], widths: &[usize]) -> String {
    let mut line = String::from(gutter);
    for (col, cell) in cells.iter().enumerate() {
        let width = widths.get(col).copied().unwrap_or(MIN_WIDTH);
        let text = truncate_text(cell, width);
        line.push_str("  ");
        if is_number(cell) {
            line.push_str(&format!("{:>w$}", text, w = width));
        } else {
            line.push_str(&format!("{:<w$}", text, w = width));
        }
    }
    line.trim_end().to_string()
}
