//! Batch configuration for the planner.

/// Configuration parameters for processing a batch of requests.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Whether to request a natural-language summary for each result.
    pub gen_trip_summary: bool,

    /// Maximum number of summaries requested concurrently.
    /// Higher values finish sooner but press harder on the summary API.
    pub summary_batch_size: usize,
}

impl BatchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(gen_trip_summary: bool, summary_batch_size: usize) -> Self {
        Self {
            gen_trip_summary,
            summary_batch_size,
        }
    }

    /// Default configuration with summaries switched on or off.
    pub fn with_summaries(gen_trip_summary: bool) -> Self {
        Self {
            gen_trip_summary,
            ..Self::default()
        }
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            gen_trip_summary: false,
            summary_batch_size: 8,
        }
    }
}
