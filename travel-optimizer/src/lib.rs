//! Batch travel optimizer.
//!
//! Given a timetable of scheduled segments between cities and a batch of
//! requests, finds for each request the path that minimises total time,
//! total cost, or number of hops, and optionally attaches a short
//! natural-language summary of the trip.

pub mod cache;
pub mod cli;
pub mod document;
pub mod domain;
pub mod planner;
pub mod summary;
