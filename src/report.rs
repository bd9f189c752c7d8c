//! Column layout shared by the TUI table and the plain `--print` output

use unicode_width::UnicodeWidthStr;

use crate::error::Result;
use crate::palette::{parse, project, resolve, DisplayRow, PaletteStore};

/// Column titles after the palette-name column
pub const WEIGHT_HEADER: &str = "weight";
pub const VALUE_HEADER: &str = "value";

/// Display width of each column (label, weight, value), without padding
pub fn column_widths(header_label: &str, rows: &[DisplayRow]) -> [usize; 3] {
    rows.iter().fold(
        [
            header_label.width(),
            WEIGHT_HEADER.width(),
            VALUE_HEADER.width(),
        ],
        |[label, shade, color], row| {
            [
                label.max(row.label.width()),
                shade.max(row.shade.width()),
                color.max(row.color.width()),
            ]
        },
    )
}

/// Render rows as a plain text table, header first
pub fn plain_table(header_label: &str, rows: &[DisplayRow]) -> String {
    let widths = column_widths(header_label, rows);
    let mut out = String::new();

    let header = [header_label, WEIGHT_HEADER, VALUE_HEADER];
    push_line(&mut out, &header, &widths);
    for row in rows {
        push_line(&mut out, &[row.label, row.shade, row.color], &widths);
    }

    out
}

fn push_line(out: &mut String, cells: &[&str; 3], widths: &[usize; 3]) {
    let mut line = String::new();
    for (cell, width) in cells.iter().zip(widths) {
        line.push_str(cell);
        line.push_str(&" ".repeat(width.saturating_sub(cell.width()) + 2));
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

/// Resolve a single query and format the result for stdout
pub fn print_query(store: &PaletteStore, raw: &str) -> Result<String> {
    let result = resolve(&parse(raw), store);
    let rows = project(&result);
    let resolution = result?;
    Ok(plain_table(resolution.palette_name(), &rows))
}
