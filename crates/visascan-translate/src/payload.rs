//! Mapping between a result record and the flat localization payload.
//!
//! The classified text fields plus the seven link titles travel as one flat
//! map; indexed `title_N` keys keep the link order stable across the round
//! trip.

use std::collections::BTreeMap;

use visascan_core::VisaResult;

const KEY_VISA_TYPE: &str = "visaType";
const KEY_NOTES: &str = "notes";
const KEY_ALLOWED_STAY: &str = "allowedStayText";

fn title_key(index: usize) -> String {
    format!("title_{index}")
}

/// Builds the flat payload for a found result: visa label, notes and
/// allowed-stay text when present, and every link title.
#[must_use]
pub fn build_payload(result: &VisaResult) -> BTreeMap<String, String> {
    let mut payload = BTreeMap::new();
    payload.insert(KEY_VISA_TYPE.to_owned(), result.visa_type.label().to_owned());
    if let Some(notes) = &result.notes {
        payload.insert(KEY_NOTES.to_owned(), notes.clone());
    }
    if let Some(stay) = &result.allowed_stay_text {
        payload.insert(KEY_ALLOWED_STAY.to_owned(), stay.clone());
    }
    for (index, link) in result.additional_info_urls.iter().enumerate() {
        payload.insert(title_key(index), link.title.clone());
    }
    payload
}

/// Produces the final record with `*_localized` fields populated from the
/// localized map. Keys missing from the map leave the corresponding field
/// unset; English values are never overwritten.
#[must_use]
pub fn with_localization(
    mut result: VisaResult,
    localized: &BTreeMap<String, String>,
) -> VisaResult {
    result.visa_type_localized = localized.get(KEY_VISA_TYPE).cloned();
    result.notes_localized = localized.get(KEY_NOTES).cloned();
    result.allowed_stay_text_localized = localized.get(KEY_ALLOWED_STAY).cloned();
    for (index, link) in result.additional_info_urls.iter_mut().enumerate() {
        link.title_localized = localized.get(&title_key(index)).cloned();
    }
    result
}
