//! Data transfer objects for the batch document and its results.

use serde::{Deserialize, Serialize};

use crate::domain::Segment;
use crate::planner::TripResult;

/// Top-level shape of the input document.
///
/// Records are kept as raw JSON here and decoded one by one, so a bad
/// record can be reported by its position.
#[derive(Debug, Deserialize)]
pub struct BatchDocument {
    /// Requests to answer (missing means none)
    #[serde(default)]
    pub requests: Vec<serde_json::Value>,

    /// Scheduled segments (missing means none)
    #[serde(default)]
    pub routes: Vec<serde_json::Value>,
}

/// One request record.
#[derive(Debug, Deserialize)]
pub struct RequestRecord {
    /// Key for the result; need not be unique
    pub request_id: String,

    /// Origin city
    pub source: String,

    /// Destination city
    pub destination: String,

    /// "Time", "Cost", "Hops", or any other label
    pub criteria: String,
}

/// One route record.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteRecord {
    /// Origin city
    pub source: String,

    /// Destination city
    pub destination: String,

    /// Transport mode, e.g. "Flight"
    pub mode: String,

    /// Departure time in HH:MM format
    pub departure_time: String,

    /// Arrival time in HH:MM format
    pub arrival_time: String,

    /// Non-negative integer cost
    pub cost: u32,
}

/// One schedule entry in a result, with times echoed as written in the
/// input.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    pub source: String,
    pub destination: String,
    pub mode: String,
    pub departure_time: String,
    pub arrival_time: String,
    pub cost: u32,
}

impl From<&Segment> for ScheduleEntry {
    fn from(segment: &Segment) -> Self {
        Self {
            source: segment.source().to_string(),
            destination: segment.destination().to_string(),
            mode: segment.mode().to_string(),
            departure_time: segment.departure_text().to_string(),
            arrival_time: segment.arrival_text().to_string(),
            cost: segment.cost(),
        }
    }
}

/// The result reported for one request id.
#[derive(Debug, Serialize)]
pub struct TripResultDto {
    /// Segments in travel order, empty if no route was found
    pub schedule: Vec<ScheduleEntry>,

    /// The request's criteria, echoed verbatim
    pub criteria: String,

    /// Total time, total cost, or hop count, per criteria
    pub value: u64,

    /// Summary text or a sentinel
    #[serde(rename = "travelSummary")]
    pub travel_summary: String,
}

impl From<&TripResult> for TripResultDto {
    fn from(result: &TripResult) -> Self {
        Self {
            schedule: result.schedule.iter().map(ScheduleEntry::from).collect(),
            criteria: result.criteria.as_str().to_string(),
            value: result.value,
            travel_summary: result.summary.clone(),
        }
    }
}
