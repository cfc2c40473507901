//! HTTP client for the external localization service.
//!
//! Sends one flat key→text map per call and returns the localized map. The
//! service is an optional collaborator: any failure here is logged and the
//! run continues with English fields.

use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::TranslateError;
use crate::types::{LocalizeRequest, LocalizeResponse};

const DEFAULT_BASE_URL: &str = "https://engine.lingo.dev/";

/// Client for the localization REST API.
///
/// Use [`TranslateClient::new`] for production or
/// [`TranslateClient::with_base_url`] to point at a mock server in tests.
pub struct TranslateClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl TranslateClient {
    /// Creates a client pointed at the production localization API.
    ///
    /// # Errors
    ///
    /// Returns [`TranslateError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, TranslateError> {
        Self::with_base_url(DEFAULT_BASE_URL, api_key, timeout_secs)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`TranslateError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`TranslateError::ApiError`] if `base_url`
    /// is not a valid URL.
    pub fn with_base_url(
        base_url: &str,
        api_key: &str,
        timeout_secs: u64,
    ) -> Result<Self, TranslateError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        // Normalise: exactly one trailing slash so join() appends the path
        // segment instead of replacing the last one.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| TranslateError::ApiError(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Localizes a flat key→text map from `source_locale` to `target_locale`.
    ///
    /// Keys absent from the response are simply missing from the returned
    /// map; callers treat each key independently.
    ///
    /// # Errors
    ///
    /// - [`TranslateError::UnexpectedStatus`] on a non-2xx response.
    /// - [`TranslateError::ApiError`] if the service reports an error or
    ///   returns no data.
    /// - [`TranslateError::Http`] on network failure.
    /// - [`TranslateError::Deserialize`] if the response body is not the
    ///   expected shape.
    pub async fn localize_map(
        &self,
        data: &BTreeMap<String, String>,
        source_locale: &str,
        target_locale: &str,
    ) -> Result<BTreeMap<String, String>, TranslateError> {
        let url = self
            .base_url
            .join("i18n")
            .map_err(|e| TranslateError::ApiError(format!("invalid endpoint URL: {e}")))?;

        let request = LocalizeRequest {
            source_locale,
            target_locale,
            data,
        };
        tracing::debug!(keys = data.len(), target_locale, "requesting localization");

        let response = self
            .client
            .post(url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TranslateError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let parsed = serde_json::from_str::<LocalizeResponse>(&body).map_err(|e| {
            TranslateError::Deserialize {
                context: format!("localization to {target_locale}"),
                source: e,
            }
        })?;

        if let Some(message) = parsed.error {
            return Err(TranslateError::ApiError(message));
        }

        parsed
            .data
            .ok_or_else(|| TranslateError::ApiError("response contained no data".to_owned()))
    }
}
