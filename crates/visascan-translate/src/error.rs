use thiserror::Error;

/// Errors returned by the localization-service client.
///
/// Every variant is non-fatal to a lookup run: callers log a warning and
/// keep the English fields.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with an error message or an empty payload.
    #[error("localization API error: {0}")]
    ApiError(String),

    /// Non-2xx response status.
    #[error("unexpected HTTP status {status} from localization API")]
    UnexpectedStatus { status: u16 },

    /// The response body could not be deserialized into the expected shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
