//! First-match row selection.

use crate::html::HtmlTable;
use crate::locate::ColumnMap;
use crate::normalize::normalize_for_compare;

/// Raw cell texts for the row matching the queried destination, keyed by the
/// resolved column roles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedRow {
    pub country_text: String,
    pub visa_text: String,
    pub stay_text: Option<String>,
    pub notes_text: Option<String>,
}

/// Scans data rows in document order and returns the first row whose country
/// cell equals `destination` under comparison normalization.
///
/// The scan is a pure fold with an explicit short-circuit: rows after the
/// first match are never inspected, so a duplicated destination always
/// resolves to the earlier row. Rows with no cells, or too few cells to
/// reach the country column, are skipped.
#[must_use]
pub fn match_destination_row(
    table: &HtmlTable,
    columns: ColumnMap,
    destination: &str,
) -> Option<MatchedRow> {
    let wanted = normalize_for_compare(destination);

    let matched = table.rows.iter().find_map(|cells| {
        if cells.is_empty() {
            return None;
        }
        let country_text = cells.get(columns.country)?;
        if normalize_for_compare(country_text) != wanted {
            return None;
        }
        Some(MatchedRow {
            country_text: country_text.clone(),
            visa_text: cells.get(columns.visa).cloned().unwrap_or_default(),
            stay_text: columns.stay.and_then(|i| cells.get(i).cloned()),
            notes_text: columns.notes.and_then(|i| cells.get(i).cloned()),
        })
    });

    if matched.is_none() {
        tracing::warn!(destination, "no row matched the destination");
    }
    matched
}
