//! Domain types for the travel optimizer.
//!
//! This module contains the value types the planner works with. All types
//! enforce their invariants at construction time, so code that receives
//! them can trust their validity.

mod city;
mod criteria;
mod error;
mod path;
mod request;
mod segment;
mod time;

pub use city::CityId;
pub use criteria::Criteria;
pub use error::DomainError;
pub use path::TravelPath;
pub use request::TravelRequest;
pub use segment::Segment;
pub use time::{DayMinutes, MINUTES_PER_DAY, TimeError, segment_duration, waiting_time};
