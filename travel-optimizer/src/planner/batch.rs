//! Batch request processing.
//!
//! Answers every request in a batch against one shared route graph. All
//! searches run first, synchronously and in input order; summaries are then
//! fetched in bounded concurrent chunks and attached by position.

use futures::future::join_all;
use indexmap::IndexMap;
use tracing::{debug, info};

use super::aggregate::{Aggregate, aggregate};
use super::config::BatchConfig;
use super::graph::RouteGraph;
use super::search::PathFinder;
use crate::domain::{Criteria, TravelPath, TravelRequest};
use crate::summary::{Summarizer, generate_summary};

/// The answer to one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripResult {
    /// The chosen path, empty if none was found.
    pub schedule: TravelPath,

    /// The criteria the request asked for, echoed back.
    pub criteria: Criteria,

    /// The aggregate the criteria reports, 0 for an empty schedule.
    pub value: u64,

    /// Natural-language summary or one of the summary sentinels.
    pub summary: String,
}

/// Results keyed by request id, in order of each id's first appearance.
pub type BatchResults = IndexMap<String, TripResult>;

/// A request after its search, before summarization.
#[derive(Debug, Clone)]
pub struct PlannedTrip {
    pub request_id: String,
    pub path: TravelPath,
    pub criteria: Criteria,
    pub aggregate: Aggregate,
}

/// Processes batches of requests against a route graph.
pub struct BatchProcessor<'a, S> {
    graph: &'a RouteGraph,
    summarizer: &'a S,
    config: BatchConfig,
}

impl<'a, S: Summarizer> BatchProcessor<'a, S> {
    /// Create a new processor.
    pub fn new(graph: &'a RouteGraph, summarizer: &'a S, config: BatchConfig) -> Self {
        Self {
            graph,
            summarizer,
            config,
        }
    }

    /// Search and aggregate every request, in input order.
    pub fn plan(&self, requests: &[TravelRequest]) -> Vec<PlannedTrip> {
        let finder = PathFinder::new(self.graph);

        requests
            .iter()
            .map(|request| {
                if !request.criteria.is_recognized() {
                    debug!(
                        request_id = %request.id,
                        criteria = %request.criteria,
                        "unrecognised criteria, weighting by time and reporting hops"
                    );
                }

                let outcome =
                    finder.search(&request.source, &request.destination, &request.criteria);
                let aggregate = aggregate(&outcome.path, &request.criteria);

                debug!(
                    request_id = %request.id,
                    source = %request.source,
                    destination = %request.destination,
                    criteria = %request.criteria,
                    hops = outcome.path.hop_count(),
                    value = aggregate.value,
                    entries_popped = outcome.entries_popped,
                    stale_skipped = outcome.stale_skipped,
                    "request planned"
                );

                PlannedTrip {
                    request_id: request.id.clone(),
                    path: outcome.path,
                    criteria: request.criteria.clone(),
                    aggregate,
                }
            })
            .collect()
    }

    /// Answer every request in the batch.
    ///
    /// A later request with an already-seen id replaces the earlier result
    /// but keeps its position.
    pub async fn process(&self, requests: &[TravelRequest]) -> BatchResults {
        // Collapse duplicate ids first so superseded trips are never summarized
        let mut latest: IndexMap<String, PlannedTrip> = IndexMap::with_capacity(requests.len());
        for trip in self.plan(requests) {
            latest.insert(trip.request_id.clone(), trip);
        }
        let trips: Vec<PlannedTrip> = latest.into_values().collect();

        let summaries = self.summarize_all(&trips).await;

        let mut results = BatchResults::with_capacity(trips.len());
        for (trip, summary) in trips.into_iter().zip(summaries) {
            results.insert(
                trip.request_id,
                TripResult {
                    schedule: trip.path,
                    criteria: trip.criteria,
                    value: trip.aggregate.value,
                    summary,
                },
            );
        }

        info!(
            requests = requests.len(),
            results = results.len(),
            unreachable = results.values().filter(|r| r.schedule.is_empty()).count(),
            "batch processed"
        );

        results
    }

    /// One summary per planned trip, in the same order.
    async fn summarize_all(&self, planned: &[PlannedTrip]) -> Vec<String> {
        let enabled = self.config.gen_trip_summary;
        let mut summaries = Vec::with_capacity(planned.len());

        for batch in planned.chunks(self.config.summary_batch_size.max(1)) {
            let futures: Vec<_> = batch
                .iter()
                .map(|trip| {
                    generate_summary(
                        self.summarizer,
                        &trip.path,
                        trip.aggregate.totals.total_time_mins,
                        enabled,
                    )
                })
                .collect();

            summaries.extend(join_all(futures).await);
        }

        summaries
    }
}
