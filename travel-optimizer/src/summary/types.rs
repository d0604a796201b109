//! Wire types for the summarization API.

use serde::{Deserialize, Serialize};

/// Body of a summarization request.
#[derive(Debug, Serialize)]
pub struct SummarizeRequest<'a> {
    pub inputs: &'a str,
    pub parameters: SummaryParameters,
}

/// Length limits passed to the summarization model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SummaryParameters {
    pub max_length: u32,
    pub min_length: u32,
}

/// One entry of the summarization response array.
#[derive(Debug, Clone, Deserialize)]
pub struct SummaryItem {
    pub summary_text: String,
}
