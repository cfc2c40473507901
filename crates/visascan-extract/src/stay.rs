//! Parsing of allowed-stay cell text into a day count and policy shape.

use regex::Regex;
use visascan_core::StayPolicy;

use crate::normalize::clean_text;

/// Parsed allowed-stay fields. All-`None` means the cell was absent or empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StayAssessment {
    pub max_stay_days: Option<u32>,
    pub allowed_stay_text: Option<String>,
    pub stay_policy: Option<StayPolicy>,
}

/// Unit scan order with flat day-conversion factors. A later unit is only
/// tried when every earlier unit's pattern is absent. The 30-day month and
/// 365-day year are deliberately non-calendar and must stay this way for
/// output compatibility.
const UNITS: &[(&str, u32)] = &[("day", 1), ("week", 7), ("month", 30), ("year", 365)];

/// Classifies one allowed-stay cell, statelessly.
///
/// Rule order: unlimited (conditional when qualified by "only") → single
/// duration via [`UNITS`] → range markers ("within"/"per") → unknown.
#[must_use]
pub fn parse_stay(text: Option<&str>) -> StayAssessment {
    let Some(text) = text else {
        return StayAssessment::default();
    };
    let raw = clean_text(text);
    if raw.is_empty() {
        return StayAssessment::default();
    }
    let lowered = raw.to_lowercase();

    if lowered.contains("unlimited") {
        let policy = if lowered.contains("only") {
            StayPolicy::Conditional
        } else {
            StayPolicy::Unlimited
        };
        return StayAssessment {
            max_stay_days: None,
            allowed_stay_text: Some(raw),
            stay_policy: Some(policy),
        };
    }

    for (unit, factor) in UNITS {
        let pattern = Regex::new(&format!(r"(\d+)\s*{unit}")).expect("valid duration regex");
        if let Some(value) = pattern
            .captures(&lowered)
            .and_then(|cap| cap[1].parse::<u32>().ok())
        {
            return StayAssessment {
                max_stay_days: Some(value.saturating_mul(*factor)),
                allowed_stay_text: Some(raw),
                stay_policy: Some(StayPolicy::Fixed),
            };
        }
    }

    if lowered.contains("within") || lowered.contains("per") {
        return StayAssessment {
            max_stay_days: None,
            allowed_stay_text: Some(raw),
            stay_policy: Some(StayPolicy::Range),
        };
    }

    StayAssessment {
        max_stay_days: None,
        allowed_stay_text: Some(raw),
        stay_policy: Some(StayPolicy::Unknown),
    }
}
