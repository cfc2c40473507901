//! Request/response shapes for the localization API.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub(crate) struct LocalizeRequest<'a> {
    #[serde(rename = "sourceLocale")]
    pub source_locale: &'a str,
    #[serde(rename = "targetLocale")]
    pub target_locale: &'a str,
    pub data: &'a BTreeMap<String, String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LocalizeResponse {
    #[serde(default)]
    pub data: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub error: Option<String>,
}
