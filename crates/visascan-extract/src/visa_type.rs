//! Classification of visa-requirement cell text into [`VisaType`].

use visascan_core::VisaType;

use crate::normalize::clean_text;

/// Result of classifying a visa-requirement cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisaClassification {
    pub visa_type: VisaType,
    /// Cleaned (not lowercased) original text, kept for audit even when the
    /// outcome is [`VisaType::Other`].
    pub visa_type_raw: String,
}

/// How a rule's needles must occur in the lowercased cell text.
#[derive(Debug, Clone, Copy)]
enum Needles {
    Any(&'static [&'static str]),
    All(&'static [&'static str]),
}

impl Needles {
    fn matches(self, text: &str) -> bool {
        match self {
            Needles::Any(list) => list.iter().any(|n| text.contains(n)),
            Needles::All(list) => list.iter().all(|n| text.contains(n)),
        }
    }
}

/// Ordered rule list, first match wins. The co-occurrence rule must stay
/// ahead of the single-needle online/e-visa rule: a cell offering both an
/// online visa and a visa on arrival is labelled on-arrival.
const RULES: &[(Needles, VisaType)] = &[
    (
        Needles::Any(&["freedom of movement"]),
        VisaType::FreedomOfMovement,
    ),
    (
        Needles::Any(&["visa not required", "visa-free"]),
        VisaType::VisaFree,
    ),
    (
        Needles::All(&["online visa", "visa on arrival"]),
        VisaType::VisaOnArrival,
    ),
    (Needles::Any(&["online visa", "e-visa"]), VisaType::EVisa),
    (Needles::Any(&["visa on arrival"]), VisaType::VisaOnArrival),
    (Needles::Any(&["visa required"]), VisaType::VisaRequired),
];

/// Classifies a visa-requirement cell.
///
/// The text is cleaned, then matched lowercased against [`RULES`] top-down;
/// no rule matching yields [`VisaType::Other`].
#[must_use]
pub fn classify_visa(text: &str) -> VisaClassification {
    let raw = clean_text(text);
    let lowered = raw.to_lowercase();

    let visa_type = RULES
        .iter()
        .find(|(needles, _)| needles.matches(&lowered))
        .map_or(VisaType::Other, |&(_, outcome)| outcome);

    VisaClassification {
        visa_type,
        visa_type_raw: raw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visa_not_required_is_visa_free() {
        let c = classify_visa("Visa not required");
        assert_eq!(c.visa_type, VisaType::VisaFree);
        assert_eq!(c.visa_type_raw, "Visa not required");
    }

    #[test]
    fn visa_free_spelling_is_visa_free() {
        assert_eq!(classify_visa("Visa-free").visa_type, VisaType::VisaFree);
    }

    #[test]
    fn freedom_of_movement_outranks_everything() {
        let c = classify_visa("Freedom of movement; visa not required");
        assert_eq!(c.visa_type, VisaType::FreedomOfMovement);
    }

    #[test]
    fn e_visa_variants() {
        assert_eq!(
            classify_visa("e-Visa required online").visa_type,
            VisaType::EVisa
        );
        assert_eq!(classify_visa("Online visa").visa_type, VisaType::EVisa);
    }

    #[test]
    fn co_occurrence_prefers_visa_on_arrival() {
        let c = classify_visa("Visa on arrival or online visa");
        assert_eq!(c.visa_type, VisaType::VisaOnArrival);
    }

    #[test]
    fn plain_visa_on_arrival() {
        assert_eq!(
            classify_visa("Visa on arrival").visa_type,
            VisaType::VisaOnArrival
        );
    }

    #[test]
    fn visa_required_is_last_real_rule() {
        assert_eq!(
            classify_visa("Visa required").visa_type,
            VisaType::VisaRequired
        );
    }

    #[test]
    fn visa_not_required_never_falls_through_to_required() {
        // The visa-free rule runs before the visa-required rule and must win.
        assert_eq!(
            classify_visa("Visa not required for 90 days").visa_type,
            VisaType::VisaFree
        );
    }

    #[test]
    fn unknown_text_is_other() {
        let c = classify_visa("Special permit needed");
        assert_eq!(c.visa_type, VisaType::Other);
        assert_eq!(c.visa_type_raw, "Special permit needed");
    }

    #[test]
    fn empty_text_is_other_with_empty_raw() {
        let c = classify_visa("");
        assert_eq!(c.visa_type, VisaType::Other);
        assert_eq!(c.visa_type_raw, "");
    }

    #[test]
    fn matching_is_case_insensitive_but_raw_keeps_case() {
        let c = classify_visa("VISA NOT REQUIRED[3]");
        assert_eq!(c.visa_type, VisaType::VisaFree);
        assert_eq!(c.visa_type_raw, "VISA NOT REQUIRED");
    }
}
