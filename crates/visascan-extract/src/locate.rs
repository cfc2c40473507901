//! Table location and header-to-role resolution.

use crate::html::HtmlTable;

/// Semantic column indices resolved from a table's header row.
///
/// `country` and `visa` are mandatory; `stay` and `notes` degrade the
/// corresponding result fields to `None` when absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub country: usize,
    pub visa: usize,
    pub stay: Option<usize>,
    pub notes: Option<usize>,
}

/// Selects the first table (document order) whose header set contains at
/// least one country/region header and at least one visa header,
/// case-insensitively. Returns `None` when no table qualifies.
#[must_use]
pub fn find_requirements_table(tables: &[HtmlTable]) -> Option<&HtmlTable> {
    let found = tables.iter().find(|table| {
        let headers: Vec<String> = table.headers.iter().map(|h| h.to_lowercase()).collect();
        let has_country = headers
            .iter()
            .any(|h| h.contains("country") || h.contains("region"));
        let has_visa = headers.iter().any(|h| h.contains("visa"));
        has_country && has_visa
    });

    if found.is_none() {
        tracing::warn!(
            tables = tables.len(),
            "no table with country/region and visa headers"
        );
    }
    found
}

/// Maps header cells to roles, left to right. First occurrence wins: a later
/// header matching an already-assigned role is ignored.
///
/// Returns `None` when the country or visa column cannot be resolved.
#[must_use]
pub fn resolve_columns(headers: &[String]) -> Option<ColumnMap> {
    let mut country = None;
    let mut visa = None;
    let mut stay = None;
    let mut notes = None;

    for (index, header) in headers.iter().enumerate() {
        let h = header.to_lowercase();
        if country.is_none() && (h.contains("country") || h.contains("region")) {
            country = Some(index);
        }
        if visa.is_none() && h.contains("visa") {
            visa = Some(index);
        }
        if stay.is_none() && h.contains("allowed stay") {
            stay = Some(index);
        }
        if notes.is_none() && h.contains("notes") {
            notes = Some(index);
        }
    }

    let (Some(country), Some(visa)) = (country, visa) else {
        tracing::warn!("required country/visa columns missing from header row");
        return None;
    };

    Some(ColumnMap {
        country,
        visa,
        stay,
        notes,
    })
}
