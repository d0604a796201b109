//! Route graph construction.
//!
//! The graph is a directed multigraph: several segments may join the same
//! pair of cities, and each is kept as its own edge. Outgoing segments are
//! stored per origin city in input order, which the search relies on for
//! reproducible tie-breaking.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::{CityId, Segment};

/// Scheduled segments indexed by origin city.
///
/// A graph is built once per batch and never mutated afterwards, so it can
/// be shared by every search in the batch.
#[derive(Debug, Clone, Default)]
pub struct RouteGraph {
    outgoing: HashMap<CityId, Vec<Arc<Segment>>>,
    segment_count: usize,
}

impl RouteGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from segments in input order.
    ///
    /// # Examples
    ///
    /// ```
    /// use travel_optimizer::domain::{CityId, Segment};
    /// use travel_optimizer::planner::RouteGraph;
    ///
    /// let graph = RouteGraph::from_segments(vec![
    ///     Segment::parse("A", "B", "Bus", "08:00", "10:00", 150).unwrap(),
    ///     Segment::parse("A", "C", "Flight", "09:00", "11:00", 500).unwrap(),
    /// ]);
    ///
    /// let from_a = graph.outgoing(&CityId::new("A"));
    /// assert_eq!(from_a.len(), 2);
    /// assert_eq!(from_a[0].destination().as_str(), "B");
    /// assert!(graph.outgoing(&CityId::new("B")).is_empty());
    /// ```
    pub fn from_segments(segments: impl IntoIterator<Item = Segment>) -> Self {
        let mut graph = Self::new();
        for segment in segments {
            graph.push(segment);
        }
        graph
    }

    fn push(&mut self, segment: Segment) {
        self.outgoing
            .entry(segment.source().clone())
            .or_default()
            .push(Arc::new(segment));
        self.segment_count += 1;
    }

    /// Segments leaving `city`, in input order.
    pub fn outgoing(&self, city: &CityId) -> &[Arc<Segment>] {
        self.outgoing.get(city).map(Vec::as_slice).unwrap_or_default()
    }

    /// Total number of segments.
    pub fn segment_count(&self) -> usize {
        self.segment_count
    }

    /// Number of cities with at least one outgoing segment.
    pub fn origin_count(&self) -> usize {
        self.outgoing.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segment_count == 0
    }
}

impl FromIterator<Segment> for RouteGraph {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Self::from_segments(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(from: &str, to: &str, mode: &str) -> Segment {
        Segment::parse(from, to, mode, "08:00", "09:00", 10).unwrap()
    }

    #[test]
    fn empty_graph() {
        let graph = RouteGraph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.origin_count(), 0);
        assert!(graph.outgoing(&CityId::new("A")).is_empty());
    }

    #[test]
    fn groups_by_origin() {
        let graph: RouteGraph = vec![seg("A", "B", "Bus"), seg("B", "C", "Bus"), seg("A", "C", "Bus")]
            .into_iter()
            .collect();

        assert_eq!(graph.segment_count(), 3);
        assert_eq!(graph.origin_count(), 2);
        assert_eq!(graph.outgoing(&CityId::new("A")).len(), 2);
        assert_eq!(graph.outgoing(&CityId::new("B")).len(), 1);
        assert!(graph.outgoing(&CityId::new("C")).is_empty());
    }

    #[test]
    fn keeps_parallel_segments_in_input_order() {
        let graph = RouteGraph::from_segments(vec![
            seg("A", "B", "Bus"),
            seg("A", "B", "Train"),
            seg("A", "B", "Flight"),
        ]);

        let modes: Vec<&str> = graph
            .outgoing(&CityId::new("A"))
            .iter()
            .map(|s| s.mode())
            .collect();
        assert_eq!(modes, vec!["Bus", "Train", "Flight"]);
    }

    #[test]
    fn city_lookup_is_exact() {
        let graph = RouteGraph::from_segments(vec![seg("Delhi", "Agra", "Train")]);
        assert_eq!(graph.outgoing(&CityId::new("Delhi")).len(), 1);
        assert!(graph.outgoing(&CityId::new("delhi")).is_empty());
    }
}
