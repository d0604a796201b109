//! Loading batch documents and rendering their results.

use std::path::Path;

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::dto::{BatchDocument, RequestRecord, RouteRecord, TripResultDto};
use super::error::DocumentError;
use crate::domain::{Criteria, Segment, TravelRequest};
use crate::planner::{BatchResults, RouteGraph};

/// A decoded batch: the route graph and the requests to answer against it.
#[derive(Debug, Clone)]
pub struct TravelBatch {
    pub graph: RouteGraph,
    pub requests: Vec<TravelRequest>,
}

/// Read and decode the batch document at `path`.
pub fn load_batch(path: &Path) -> Result<TravelBatch, DocumentError> {
    let text = std::fs::read_to_string(path).map_err(|source| DocumentError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_batch(&text)
}

/// Decode a batch document from JSON text.
pub fn parse_batch(text: &str) -> Result<TravelBatch, DocumentError> {
    let document: BatchDocument = serde_json::from_str(text)?;

    let segments = document
        .routes
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            let record: RouteRecord = decode_record("routes", index, value)?;
            Segment::parse(
                &record.source,
                &record.destination,
                &record.mode,
                &record.departure_time,
                &record.arrival_time,
                record.cost,
            )
            .map_err(|source| DocumentError::InvalidTime { index, source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let requests = document
        .requests
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            let record: RequestRecord = decode_record("requests", index, value)?;
            Ok(TravelRequest::new(
                record.request_id,
                record.source,
                record.destination,
                Criteria::parse(&record.criteria),
            ))
        })
        .collect::<Result<Vec<_>, DocumentError>>()?;

    let graph = RouteGraph::from_segments(segments);
    debug!(
        segments = graph.segment_count(),
        origins = graph.origin_count(),
        requests = requests.len(),
        "batch document loaded"
    );

    Ok(TravelBatch { graph, requests })
}

fn decode_record<T: DeserializeOwned>(
    section: &'static str,
    index: usize,
    value: serde_json::Value,
) -> Result<T, DocumentError> {
    serde_json::from_value(value).map_err(|source| DocumentError::InvalidRecord {
        section,
        index,
        source,
    })
}

/// Render results as a pretty-printed JSON object keyed by request id.
pub fn render_results(results: &BatchResults) -> Result<String, DocumentError> {
    let dtos: IndexMap<&str, TripResultDto> = results
        .iter()
        .map(|(id, result)| (id.as_str(), TripResultDto::from(result)))
        .collect();

    Ok(serde_json::to_string_pretty(&dtos)?)
}
