//! Subcommand implementations, one module per backend dialect

pub mod campus;
pub mod simple;

use roster_core::CoreError;
use roster_core::search::TableRow;

/// Log a failed operation at the level its taxonomy asks for, then hand the
/// error back for display.
pub(crate) fn log_failure(err: &CoreError) {
    if err.is_expected() {
        tracing::warn!("{err}");
    } else {
        tracing::error!("{err}");
    }
}

/// Build table rows from rendered record cells.
pub(crate) fn rows_from_cells(cells: impl Iterator<Item = Vec<String>>) -> Vec<TableRow> {
    cells.map(TableRow::new).collect()
}
