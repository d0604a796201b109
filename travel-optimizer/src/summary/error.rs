//! Summary client error types.

/// Errors that can occur when requesting a trip summary.
///
/// None of these reach the batch caller: they are absorbed into the
/// "Not generated" sentinel by [`generate_summary`](super::generate_summary).
#[derive(Debug, thiserror::Error)]
pub enum SummaryError {
    /// No API key was configured
    #[error("no API key configured (set HUGGINGFACE_API_KEY)")]
    MissingCredential,

    /// The API key can't be sent as a header value
    #[error("API key is not a valid header value")]
    InvalidCredential,

    /// The HTTP client could not be built
    #[error("summary HTTP client unavailable")]
    ClientUnavailable,

    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Authentication failed
    #[error("unauthorized (invalid API key)")]
    Unauthorized,

    /// Rate limited by the API
    #[error("rate limited by summary API")]
    RateLimited,

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// Response parsed but carried no summary
    #[error("summary API returned no summaries")]
    EmptyResponse,
}

impl SummaryError {
    /// Returns true if this failure is expected in normal operation,
    /// i.e. summaries were requested without configuring a key.
    pub fn is_unconfigured(&self) -> bool {
        matches!(self, SummaryError::MissingCredential)
    }
}
