//! Hugging Face inference API client.
//!
//! Sends a short prompt describing a trip to a hosted summarization model
//! and returns the generated text.

use reqwest::header::{AUTHORIZATION, HeaderValue};
use tracing::{debug, warn};

use super::Summarizer;
use super::error::SummaryError;
use super::types::{SummarizeRequest, SummaryItem, SummaryParameters};

/// Default summarization endpoint.
const DEFAULT_BASE_URL: &str =
    "https://api-inference.huggingface.co/models/facebook/bart-large-cnn";

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "HUGGINGFACE_API_KEY";

/// Configuration for the summary client.
#[derive(Debug, Clone)]
pub struct SummaryConfig {
    /// API key for bearer authentication, if any
    pub api_key: Option<String>,
    /// Endpoint URL (defaults to the hosted BART model)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Longest summary the model may produce, in tokens
    pub max_length: u32,
    /// Shortest summary the model may produce, in tokens
    pub min_length: u32,
    /// Returned summaries are cut to this many characters
    pub max_chars: usize,
    /// Ignore system proxy settings
    pub no_proxy: bool,
}

impl SummaryConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.is_empty()),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 10,
            max_length: 60,
            min_length: 20,
            max_chars: 200,
            no_proxy: false,
        }
    }

    /// Create a config with the key from `HUGGINGFACE_API_KEY`.
    ///
    /// An unset or empty variable means no key.
    pub fn from_env() -> Self {
        Self::new(std::env::var(API_KEY_VAR).ok())
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Connect directly, bypassing any system proxy.
    pub fn without_proxy(mut self) -> Self {
        self.no_proxy = true;
        self
    }
}

/// API key state, checked once at construction.
#[derive(Debug, Clone)]
enum Credential {
    Missing,
    Invalid,
    Bearer(HeaderValue),
}

/// Client for the Hugging Face summarization endpoint.
#[derive(Debug, Clone)]
pub struct HuggingFaceClient {
    /// `None` if the HTTP client could not be built
    http: Option<reqwest::Client>,
    base_url: String,
    credential: Credential,
    parameters: SummaryParameters,
    max_chars: usize,
}

impl HuggingFaceClient {
    /// Create a new client.
    ///
    /// Construction never fails. A missing or malformed API key, or an HTTP
    /// client that can't be built, makes every summary request fail without
    /// touching the network, which callers absorb like any other summary
    /// failure.
    pub fn new(config: SummaryConfig) -> Self {
        let credential = match &config.api_key {
            None => Credential::Missing,
            Some(key) => match HeaderValue::from_str(&format!("Bearer {key}")) {
                Ok(mut value) => {
                    value.set_sensitive(true);
                    Credential::Bearer(value)
                }
                Err(_) => Credential::Invalid,
            },
        };

        let mut builder = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs));
        if config.no_proxy {
            builder = builder.no_proxy();
        }

        let http = match builder.build() {
            Ok(http) => Some(http),
            Err(e) => {
                warn!(error = %e, "failed to build summary HTTP client");
                None
            }
        };

        Self {
            http,
            base_url: config.base_url,
            credential,
            parameters: SummaryParameters {
                max_length: config.max_length,
                min_length: config.min_length,
            },
            max_chars: config.max_chars,
        }
    }

    /// Returns true if a usable API key was configured.
    pub fn has_credential(&self) -> bool {
        matches!(self.credential, Credential::Bearer(_))
    }

    /// Why requests can't be sent, if they can't.
    pub fn readiness(&self) -> Result<(), SummaryError> {
        self.ready().map(|_| ())
    }

    fn ready(&self) -> Result<(&reqwest::Client, &HeaderValue), SummaryError> {
        let auth = match &self.credential {
            Credential::Missing => return Err(SummaryError::MissingCredential),
            Credential::Invalid => return Err(SummaryError::InvalidCredential),
            Credential::Bearer(value) => value,
        };
        let http = self.http.as_ref().ok_or(SummaryError::ClientUnavailable)?;
        Ok((http, auth))
    }

    /// Request a summary of `prompt`.
    pub async fn summarize_text(&self, prompt: &str) -> Result<String, SummaryError> {
        let (http, auth) = self.ready()?;

        let request = SummarizeRequest {
            inputs: prompt,
            parameters: self.parameters,
        };

        let response = http
            .post(&self.base_url)
            .header(AUTHORIZATION, auth.clone())
            .json(&request)
            .send()
            .await?;
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(SummaryError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(SummaryError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SummaryError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let items: Vec<SummaryItem> =
            serde_json::from_str(&body).map_err(|e| SummaryError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        let first = items.into_iter().next().ok_or(SummaryError::EmptyResponse)?;
        debug!(chars = first.summary_text.len(), "summary received");

        Ok(first.summary_text.chars().take(self.max_chars).collect())
    }
}

impl Summarizer for HuggingFaceClient {
    async fn summarize(&self, prompt: &str) -> Result<String, SummaryError> {
        self.summarize_text(prompt).await
    }
}
