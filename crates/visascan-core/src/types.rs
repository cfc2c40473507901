//! Domain types shared across the workspace.
//!
//! The wire format (field names, enum labels) is fixed: downstream consumers
//! of the dataset and key-value records match on these exact strings, so
//! every rename is explicit rather than derived from the Rust identifiers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Closed classification of an entry requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisaType {
    #[serde(rename = "Visa-free")]
    VisaFree,
    #[serde(rename = "Visa on arrival")]
    VisaOnArrival,
    #[serde(rename = "eVisa")]
    EVisa,
    #[serde(rename = "Visa required")]
    VisaRequired,
    #[serde(rename = "Freedom of movement")]
    FreedomOfMovement,
    Other,
}

impl VisaType {
    /// Human-readable label, identical to the serialized form.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            VisaType::VisaFree => "Visa-free",
            VisaType::VisaOnArrival => "Visa on arrival",
            VisaType::EVisa => "eVisa",
            VisaType::VisaRequired => "Visa required",
            VisaType::FreedomOfMovement => "Freedom of movement",
            VisaType::Other => "Other",
        }
    }
}

impl std::fmt::Display for VisaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Shape of a permitted-duration rule.
///
/// Absence of any rule (no stay column, or no match at all) is modelled as
/// `Option<StayPolicy>` on [`VisaResult`], not as an extra variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StayPolicy {
    Fixed,
    Range,
    Conditional,
    Unlimited,
    Unknown,
}

impl std::fmt::Display for StayPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            StayPolicy::Fixed => "fixed",
            StayPolicy::Range => "range",
            StayPolicy::Conditional => "conditional",
            StayPolicy::Unlimited => "unlimited",
            StayPolicy::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// One of the seven fixed supplementary-topic references attached to every
/// result, pointing at a section anchor on the source page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalInfoLink {
    pub key: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_localized: Option<String>,
    pub url: String,
}

/// The aggregate produced exactly once per lookup. Immutable after assembly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisaResult {
    pub nationality: String,
    pub destination: String,
    #[serde(rename = "visaType")]
    pub visa_type: VisaType,
    #[serde(rename = "visaTypeRaw")]
    pub visa_type_raw: String,
    #[serde(
        rename = "visaType_localized",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub visa_type_localized: Option<String>,
    #[serde(rename = "maxStayDays")]
    pub max_stay_days: Option<u32>,
    #[serde(rename = "allowedStayText")]
    pub allowed_stay_text: Option<String>,
    #[serde(
        rename = "allowedStayText_localized",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub allowed_stay_text_localized: Option<String>,
    #[serde(rename = "stayPolicy")]
    pub stay_policy: Option<StayPolicy>,
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes_localized: Option<String>,
    #[serde(rename = "additionalInfoUrls")]
    pub additional_info_urls: Vec<AdditionalInfoLink>,
    pub language: String,
    #[serde(rename = "scrapedAt")]
    pub scraped_at: DateTime<Utc>,
    pub found: bool,
}

/// Validated lookup input.
///
/// `nationality` and `destination` are stored as given (trimmed); display
/// and comparison normalization happen in the extraction crate.
#[derive(Debug, Clone)]
pub struct LookupQuery {
    pub nationality: String,
    pub destination: String,
    pub language: String,
    pub max_fetch_limit: u32,
}

impl LookupQuery {
    /// Builds a query, rejecting blank required fields before anything runs.
    ///
    /// A blank `language` falls back to `"en"`. `max_fetch_limit` must be at
    /// least 1; the pipeline performs exactly one fetch regardless, the limit
    /// is recorded for the output record only.
    ///
    /// # Errors
    ///
    /// - [`CoreError::MissingField`] if `nationality` or `destination` is
    ///   empty after trimming.
    /// - [`CoreError::InvalidFetchLimit`] if `max_fetch_limit` is 0.
    pub fn new(
        nationality: &str,
        destination: &str,
        language: &str,
        max_fetch_limit: u32,
    ) -> Result<Self, CoreError> {
        let nationality = nationality.trim();
        if nationality.is_empty() {
            return Err(CoreError::MissingField("nationality"));
        }
        let destination = destination.trim();
        if destination.is_empty() {
            return Err(CoreError::MissingField("destination"));
        }
        if max_fetch_limit == 0 {
            return Err(CoreError::InvalidFetchLimit(max_fetch_limit));
        }

        let language = language.trim();
        let language = if language.is_empty() { "en" } else { language };

        Ok(Self {
            nationality: nationality.to_owned(),
            destination: destination.to_owned(),
            language: language.to_owned(),
            max_fetch_limit,
        })
    }
}
