//! Natural-language trip summaries.
//!
//! A [`Summarizer`] turns a short prompt describing a trip into prose. The
//! batch processor only ever calls [`generate_summary`], which never fails:
//! every problem with the summarizer collapses into [`NOT_GENERATED`].

mod client;
mod error;
#[cfg(test)]
pub(crate) mod stub;
mod types;

use std::future::Future;

use tracing::{debug, warn};

use crate::domain::TravelPath;

pub use client::{API_KEY_VAR, HuggingFaceClient, SummaryConfig};
pub use error::SummaryError;
pub use types::{SummarizeRequest, SummaryItem, SummaryParameters};

/// Summary reported when summaries are disabled or could not be produced.
pub const NOT_GENERATED: &str = "Not generated";

/// Summary reported when summaries are enabled but no path was found.
pub const NO_ROUTES_AVAILABLE: &str = "No routes available";

/// Something that can summarize a trip description.
pub trait Summarizer {
    /// Summarize `prompt`.
    fn summarize(&self, prompt: &str) -> impl Future<Output = Result<String, SummaryError>> + Send;
}

/// Prompt describing a path of `hops` segments taking `total_time_mins`.
///
/// ```
/// use travel_optimizer::summary::summary_prompt;
///
/// assert_eq!(
///     summary_prompt(2, 270),
///     "Summarize travel route: 2 segments, 4h 30m total"
/// );
/// ```
pub fn summary_prompt(hops: usize, total_time_mins: u64) -> String {
    format!(
        "Summarize travel route: {} segments, {}h {}m total",
        hops,
        total_time_mins / 60,
        total_time_mins % 60
    )
}

/// Summary text for `path`.
///
/// Returns [`NOT_GENERATED`] without calling out when `enabled` is false,
/// [`NO_ROUTES_AVAILABLE`] for an empty path, and [`NOT_GENERATED`] if the
/// summarizer fails.
pub async fn generate_summary<S: Summarizer>(
    summarizer: &S,
    path: &TravelPath,
    total_time_mins: u64,
    enabled: bool,
) -> String {
    if !enabled {
        return NOT_GENERATED.to_string();
    }

    if path.is_empty() {
        return NO_ROUTES_AVAILABLE.to_string();
    }

    let prompt = summary_prompt(path.hop_count(), total_time_mins);
    match summarizer.summarize(&prompt).await {
        Ok(summary) => summary,
        Err(e) if e.is_unconfigured() => {
            debug!(error = %e, "summary skipped");
            NOT_GENERATED.to_string()
        }
        Err(e) => {
            warn!(error = %e, hops = path.hop_count(), "summary request failed");
            NOT_GENERATED.to_string()
        }
    }
}
