//! Route planner using criteria-weighted Dijkstra search.
//!
//! This module answers batches of "get me from here to there, optimising
//! for X" requests over a fixed set of scheduled segments. Each request is
//! searched independently against one shared, read-only route graph.

mod aggregate;
mod batch;
mod config;
mod graph;
mod search;

#[cfg(test)]
mod search_tests;

pub use aggregate::{Aggregate, PathTotals, aggregate};
pub use batch::{BatchProcessor, BatchResults, PlannedTrip, TripResult};
pub use config::BatchConfig;
pub use graph::RouteGraph;
pub use search::{PathFinder, SearchOutcome, find_path};
