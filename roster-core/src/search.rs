//! Client-side table search filter
//!
//! A case-insensitive substring filter over the rendered rows. Non-matching
//! rows are hidden by toggling visibility, never removed from the data set;
//! the header line is not part of the row set and is never touched.

/// One rendered table row: its searchable data cells (the actions column has
/// no data counterpart and is not searched) and a visibility toggle.
#[derive(Debug, Clone)]
pub struct TableRow {
    /// Rendered cell texts, in column order.
    pub cells: Vec<String>,
    /// Whether the row is currently shown.
    pub visible: bool,
}

impl TableRow {
    /// A fresh, visible row.
    #[must_use]
    pub fn new(cells: Vec<String>) -> Self {
        Self {
            cells,
            visible: true,
        }
    }
}

/// Apply the search term to every row.
///
/// A row stays visible when any cell contains the lowercased term; an empty
/// term therefore shows every row. Hidden rows are only hidden, the
/// underlying data survives for the next filter pass.
pub fn apply_filter(rows: &mut [TableRow], term: &str) {
    let term = term.to_lowercase();
    for row in rows {
        row.visible = row
            .cells
            .iter()
            .any(|cell| cell.to_lowercase().contains(&term));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<TableRow> {
        vec![
            TableRow::new(vec![
                "CS101".to_string(),
                "Asha Rao".to_string(),
                "asha@example.com".to_string(),
            ]),
            TableRow::new(vec![
                "EE204".to_string(),
                "John Smith".to_string(),
                "john@example.com".to_string(),
            ]),
        ]
    }

    #[test]
    fn hides_rows_without_a_match() {
        let mut rows = rows();
        apply_filter(&mut rows, "asha");
        assert!(rows[0].visible);
        assert!(!rows[1].visible);
    }

    #[test]
    fn match_is_case_insensitive() {
        let mut rows = rows();
        apply_filter(&mut rows, "JOHN");
        assert!(!rows[0].visible);
        assert!(rows[1].visible);
    }

    #[test]
    fn any_column_can_match() {
        let mut rows = rows();
        apply_filter(&mut rows, "ee204");
        assert!(rows[1].visible);
    }

    #[test]
    fn empty_term_shows_everything() {
        let mut rows = rows();
        apply_filter(&mut rows, "zzz");
        apply_filter(&mut rows, "");
        assert!(rows.iter().all(|r| r.visible));
    }

    #[test]
    fn hidden_rows_keep_their_data() {
        let mut rows = rows();
        apply_filter(&mut rows, "asha");
        assert_eq!(rows[1].cells[1], "John Smith");
    }
}
