//! Plain-text table rendering
//!
//! Renders the roster the way the web table does: a header line plus one row
//! per record, with hidden rows (filtered out by search) simply not printed.
//! The underlying row set keeps them, so a new filter pass can bring them
//! back.

use roster_core::search::TableRow;

/// Format the visible rows under the given headers.
#[must_use]
pub fn render(headers: &[&str], rows: &[TableRow]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows.iter().filter(|r| r.visible) {
        for (i, cell) in row.cells.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }
    }

    let mut out = String::new();
    push_line(&mut out, headers.iter().map(ToString::to_string), &widths);
    push_line(
        &mut out,
        widths.iter().map(|w| "-".repeat(*w)),
        &widths,
    );
    for row in rows.iter().filter(|r| r.visible) {
        push_line(&mut out, row.cells.iter().cloned(), &widths);
    }
    out
}

fn push_line(out: &mut String, cells: impl Iterator<Item = String>, widths: &[usize]) {
    let line: Vec<String> = cells
        .zip(widths.iter().copied())
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_header_and_visible_rows() {
        let rows = vec![
            TableRow::new(vec!["1".to_string(), "Alice".to_string()]),
            TableRow {
                cells: vec!["2".to_string(), "Bob".to_string()],
                visible: false,
            },
        ];
        let text = render(&["ID", "Name"], &rows);
        assert!(text.contains("Alice"));
        assert!(!text.contains("Bob"));
        assert!(text.starts_with("ID"));
    }

    #[test]
    fn pads_columns_to_widest_cell() {
        let rows = vec![TableRow::new(vec![
            "1".to_string(),
            "A Very Long Name".to_string(),
        ])];
        let text = render(&["ID", "Name"], &rows);
        let mut lines = text.lines();
        let header = lines.next().unwrap_or_default();
        assert!(header.contains("Name"));
        let separator = lines.next().unwrap_or_default();
        assert!(separator.contains(&"-".repeat("A Very Long Name".len())));
    }
}
