//! In-memory summarizer for tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{Summarizer, SummaryError};

/// Summarizer that replies with a fixed text or a fixed error, and records
/// every prompt it receives.
pub(crate) struct StubSummarizer {
    reply: Result<String, fn() -> SummaryError>,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl StubSummarizer {
    pub(crate) fn replying(text: &str) -> Self {
        Self::with_reply(Ok(text.to_string()))
    }

    pub(crate) fn failing(error: fn() -> SummaryError) -> Self {
        Self::with_reply(Err(error))
    }

    fn with_reply(reply: Result<String, fn() -> SummaryError>) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl Summarizer for StubSummarizer {
    async fn summarize(&self, prompt: &str) -> Result<String, SummaryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(make) => Err(make()),
        }
    }
}
