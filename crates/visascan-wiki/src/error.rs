use thiserror::Error;

/// Errors returned by the source-page client.
#[derive(Debug, Error)]
pub enum WikiError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// No requirements page exists for the requested nationality slug.
    #[error("page not found: {url}")]
    NotFound { url: String },

    /// Any other non-2xx response.
    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },
}
