//! Assembly of the immutable per-query result record.

use chrono::Utc;
use visascan_core::{AdditionalInfoLink, LookupQuery, VisaResult, VisaType};

use crate::additional_info::ADDITIONAL_INFO_SECTIONS;
use crate::normalize::normalize_for_display;
use crate::pipeline::RowExtract;

/// Builds the seven additional-info links for a source page, in the fixed
/// topic order. Titles are English; localized titles are attached later at
/// the translation boundary.
#[must_use]
pub fn additional_info_links(page_url: &str) -> Vec<AdditionalInfoLink> {
    ADDITIONAL_INFO_SECTIONS
        .iter()
        .map(|section| AdditionalInfoLink {
            key: section.key.to_owned(),
            title: section.title.to_owned(),
            title_localized: None,
            url: format!("{page_url}#{}", section.anchor),
        })
        .collect()
}

/// Combines the query, the source-page URL, and the extraction outcome (or
/// its absence) into one [`VisaResult`], stamping the scrape time.
///
/// No branching beyond field assembly: a `None` extract produces the
/// not-found record with its documented null defaults, and the link list is
/// attached either way.
#[must_use]
pub fn assemble_result(
    query: &LookupQuery,
    page_url: &str,
    extract: Option<RowExtract>,
) -> VisaResult {
    let additional_info_urls = additional_info_links(page_url);
    let nationality = normalize_for_display(&query.nationality);

    match extract {
        Some(row) => VisaResult {
            nationality,
            destination: normalize_for_display(&row.matched_country_text),
            visa_type: row.visa.visa_type,
            visa_type_raw: row.visa.visa_type_raw,
            visa_type_localized: None,
            max_stay_days: row.stay.max_stay_days,
            allowed_stay_text: row.stay.allowed_stay_text,
            allowed_stay_text_localized: None,
            stay_policy: row.stay.stay_policy,
            notes: row.notes,
            notes_localized: None,
            additional_info_urls,
            language: query.language.clone(),
            scraped_at: Utc::now(),
            found: true,
        },
        None => VisaResult {
            nationality,
            destination: normalize_for_display(&query.destination),
            visa_type: VisaType::Other,
            visa_type_raw: String::new(),
            visa_type_localized: None,
            max_stay_days: None,
            allowed_stay_text: None,
            allowed_stay_text_localized: None,
            stay_policy: None,
            notes: None,
            notes_localized: None,
            additional_info_urls,
            language: query.language.clone(),
            scraped_at: Utc::now(),
            found: false,
        },
    }
}
