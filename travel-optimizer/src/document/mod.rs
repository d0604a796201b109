//! Batch document input and result output.
//!
//! The input is a JSON object with `requests` and `routes` arrays; the
//! output is a JSON object mapping each request id to its result.

mod dto;
mod error;
mod load;

pub use dto::{BatchDocument, RequestRecord, RouteRecord, ScheduleEntry, TripResultDto};
pub use error::DocumentError;
pub use load::{TravelBatch, load_batch, parse_batch, render_results};
