//! HTTP client for the reference-document site.
//!
//! Builds the requirements-page URL from a display-normalized nationality
//! and fetches the page body with automatic retry on transient errors. The
//! extraction engine never sees this crate: it receives only the returned
//! HTML text.

use std::time::Duration;

use reqwest::Client;

use crate::error::WikiError;
use crate::retry::retry_with_backoff;

const DEFAULT_BASE_URL: &str = "https://en.wikipedia.org";

/// Client for the visa-requirements reference pages.
///
/// Use [`WikiClient::new`] for production or [`WikiClient::with_base_url`]
/// to point at a mock server in tests.
pub struct WikiClient {
    client: Client,
    base_url: String,
    /// Maximum number of retry attempts after the first failure.
    max_retries: u32,
    /// Base delay in seconds for exponential backoff.
    backoff_base_secs: u64,
}

impl WikiClient {
    /// Creates a client pointed at the production site.
    ///
    /// `max_retries` is the number of additional attempts after the first
    /// failure for retriable errors; set to `0` to disable retries.
    ///
    /// # Errors
    ///
    /// Returns [`WikiError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        timeout_secs: u64,
        user_agent: &str,
        max_retries: u32,
        backoff_base_secs: u64,
    ) -> Result<Self, WikiError> {
        Self::with_base_url(
            DEFAULT_BASE_URL,
            timeout_secs,
            user_agent,
            max_retries,
            backoff_base_secs,
        )
    }

    /// Creates a client with a custom base URL (for testing with wiremock,
    /// or a mirror).
    ///
    /// # Errors
    ///
    /// Returns [`WikiError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn with_base_url(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
        max_retries: u32,
        backoff_base_secs: u64,
    ) -> Result<Self, WikiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
            max_retries,
            backoff_base_secs,
        })
    }

    /// Builds the requirements-page URL for a display-normalized nationality
    /// ("New Zealand" → `.../wiki/Visa_requirements_for_New_Zealand_citizens`).
    /// Whitespace runs become a single underscore.
    #[must_use]
    pub fn requirements_url(&self, nationality_display: &str) -> String {
        let slug = nationality_display
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_");
        format!(
            "{}/wiki/Visa_requirements_for_{slug}_citizens",
            self.base_url
        )
    }

    /// Fetches one requirements page and returns its body, with automatic
    /// retry on transient errors.
    ///
    /// # Errors
    ///
    /// - [`WikiError::NotFound`] — HTTP 404 (not retried).
    /// - [`WikiError::UnexpectedStatus`] — any other non-2xx status
    ///   (5xx retried, 4xx not).
    /// - [`WikiError::Http`] — network or TLS failure after all retries
    ///   exhausted.
    pub async fn fetch_page(&self, url: &str) -> Result<String, WikiError> {
        retry_with_backoff(self.max_retries, self.backoff_base_secs, || {
            let url = url.to_owned();
            async move {
                let response = self
                    .client
                    .get(&url)
                    .header(
                        reqwest::header::ACCEPT,
                        "text/html,application/xhtml+xml;q=0.9,*/*;q=0.8",
                    )
                    .header(reqwest::header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
                    .send()
                    .await?;
                let status = response.status();

                if status == reqwest::StatusCode::NOT_FOUND {
                    return Err(WikiError::NotFound { url });
                }
                if !status.is_success() {
                    return Err(WikiError::UnexpectedStatus {
                        status: status.as_u16(),
                        url,
                    });
                }

                Ok(response.text().await?)
            }
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> WikiClient {
        WikiClient::with_base_url(base, 30, "test-agent/0.1", 0, 0)
            .expect("client construction should not fail")
    }

    #[test]
    fn requirements_url_replaces_spaces_with_underscores() {
        let c = client("https://en.wikipedia.org");
        assert_eq!(
            c.requirements_url("New Zealand"),
            "https://en.wikipedia.org/wiki/Visa_requirements_for_New_Zealand_citizens"
        );
    }

    #[test]
    fn requirements_url_single_word() {
        let c = client("https://en.wikipedia.org");
        assert_eq!(
            c.requirements_url("French"),
            "https://en.wikipedia.org/wiki/Visa_requirements_for_French_citizens"
        );
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let c = client("http://localhost:8080/");
        assert_eq!(
            c.requirements_url("French"),
            "http://localhost:8080/wiki/Visa_requirements_for_French_citizens"
        );
    }
}
