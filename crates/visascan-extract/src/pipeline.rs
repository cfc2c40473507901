//! The extraction pipeline: tables → location → columns → row →
//! classification.

use crate::html;
use crate::locate;
use crate::normalize::clean_text;
use crate::row;
use crate::stay::{parse_stay, StayAssessment};
use crate::visa_type::{classify_visa, VisaClassification};

/// Classified fields extracted from the matched destination row.
#[derive(Debug, Clone)]
pub struct RowExtract {
    /// Raw country cell text of the matched row (pre display-normalization).
    pub matched_country_text: String,
    pub visa: VisaClassification,
    pub stay: StayAssessment,
    pub notes: Option<String>,
}

/// Runs the full extraction over one fetched document.
///
/// Every stage soft-fails: a missing table, unresolved required columns, or
/// an unmatched destination all yield `None`, never an error. The visa and
/// stay classifiers run independently on the matched row's cells.
#[must_use]
pub fn extract_requirements(document: &str, destination: &str) -> Option<RowExtract> {
    let tables = html::parse_tables(document);
    tracing::debug!(tables = tables.len(), "parsed document tables");

    let table = locate::find_requirements_table(&tables)?;
    let columns = locate::resolve_columns(&table.headers)?;
    let matched = row::match_destination_row(table, columns, destination)?;
    tracing::info!(country = %matched.country_text, "destination row matched");

    let visa = classify_visa(&matched.visa_text);
    let stay = parse_stay(matched.stay_text.as_deref());
    let notes = matched
        .notes_text
        .as_deref()
        .map(clean_text)
        .filter(|n| !n.is_empty());

    Some(RowExtract {
        matched_country_text: matched.country_text,
        visa,
        stay,
        notes,
    })
}
