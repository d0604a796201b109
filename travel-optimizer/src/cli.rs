//! Command-line interface.
//!
//! Reads a batch document, answers every request in it, and renders the
//! results as JSON.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use tracing::{info, warn};

use crate::cache::{CacheConfig, CachedSummarizer};
use crate::document::{DocumentError, load_batch, render_results};
use crate::planner::{BatchConfig, BatchProcessor};
use crate::summary::{API_KEY_VAR, HuggingFaceClient, SummaryConfig, SummaryError};

/// batch travel optimizer: cheapest, fastest or fewest-hop routes for a
/// list of requests over a fixed timetable
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// attach a natural-language summary to each result (true or false)
    #[arg(long = "gen_trip_summary", action = ArgAction::Set, required = true)]
    pub gen_trip_summary: bool,

    /// JSON file with "requests" and "routes" arrays
    #[arg(long, value_name = "FILE")]
    pub input: PathBuf,

    /// override the summarization endpoint
    #[arg(long)]
    pub summary_url: Option<String>,

    /// summarization request timeout in seconds
    #[arg(long)]
    pub summary_timeout_secs: Option<u64>,

    /// maximum number of summaries requested at once
    #[arg(long, default_value_t = BatchConfig::default().summary_batch_size)]
    pub summary_batch_size: usize,
}

/// Run one invocation and return the rendered results.
///
/// The summary API key is read from `HUGGINGFACE_API_KEY`.
pub async fn run(cli: Cli) -> Result<String, DocumentError> {
    run_with_config(cli, SummaryConfig::from_env()).await
}

/// Run one invocation with an explicit summary client configuration.
///
/// Only document errors fail the run; summary problems are reported as
/// warnings and leave each result's summary as "Not generated".
pub async fn run_with_config(
    cli: Cli,
    mut summary_config: SummaryConfig,
) -> Result<String, DocumentError> {
    let batch = load_batch(&cli.input)?;

    if let Some(url) = cli.summary_url {
        summary_config = summary_config.with_base_url(url);
    }
    if let Some(secs) = cli.summary_timeout_secs {
        summary_config = summary_config.with_timeout(secs);
    }

    let client = HuggingFaceClient::new(summary_config);
    if cli.gen_trip_summary {
        match client.readiness() {
            Err(SummaryError::MissingCredential) => {
                warn!("{API_KEY_VAR} not set; summaries will not be generated");
            }
            Err(e) => warn!(error = %e, "summaries will not be generated"),
            Ok(()) => {}
        }
    }

    let summarizer = CachedSummarizer::new(client, &CacheConfig::default());
    let config = BatchConfig::new(cli.gen_trip_summary, cli.summary_batch_size);
    let processor = BatchProcessor::new(&batch.graph, &summarizer, config);

    let results = processor.process(&batch.requests).await;
    info!(
        results = results.len(),
        cached_summaries = summarizer.cache_entry_count(),
        "rendering results"
    );

    render_results(&results)
}
