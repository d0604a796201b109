//! Criteria-weighted shortest path search.
//!
//! Finds the cheapest path between two cities under the weight function a
//! request selects, using Dijkstra's algorithm over the route graph.
//!
//! Ties are broken deterministically: outgoing segments are relaxed in input
//! order, queue entries of equal weight are popped in the order they were
//! pushed, and a city's best path is only replaced by a strictly cheaper one.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::sync::Arc;

use tracing::{trace, warn};

use crate::domain::{CityId, Criteria, Segment, TravelPath};

use super::graph::RouteGraph;

/// Pending queue entry: a city reached at some cumulative weight.
#[derive(Debug)]
struct QueueEntry {
    weight: u64,
    /// Push order, for first-in-first-out among equal weights.
    seq: u64,
    city: CityId,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so BinaryHeap pops the lightest, then the oldest
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

/// Result of a single search.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// The cheapest path found, empty if none.
    pub path: TravelPath,

    /// Cumulative weight of `path`, or `None` if the destination was not
    /// reached.
    pub weight: Option<u64>,

    /// Number of queue entries popped, stale ones included.
    pub entries_popped: usize,

    /// Number of popped entries discarded as stale.
    pub stale_skipped: usize,
}

/// Shortest path finder over a shared route graph.
///
/// Each search owns its queue and distance maps; the graph is only read.
#[derive(Debug, Clone, Copy)]
pub struct PathFinder<'g> {
    graph: &'g RouteGraph,
}

impl<'g> PathFinder<'g> {
    /// Create a path finder over `graph`.
    pub fn new(graph: &'g RouteGraph) -> Self {
        Self { graph }
    }

    /// Find the cheapest path from `source` to `destination`.
    ///
    /// Returns an empty path when the destination is unreachable, and when
    /// `source == destination`.
    pub fn find_path(
        &self,
        source: &CityId,
        destination: &CityId,
        criteria: &Criteria,
    ) -> TravelPath {
        self.search(source, destination, criteria).path
    }

    /// Run the search and report its statistics along with the path.
    pub fn search(
        &self,
        source: &CityId,
        destination: &CityId,
        criteria: &Criteria,
    ) -> SearchOutcome {
        let mut best: HashMap<CityId, u64> = HashMap::new();
        let mut incoming: HashMap<CityId, Arc<Segment>> = HashMap::new();
        let mut queue = BinaryHeap::new();
        let mut seq = 0u64;

        let mut entries_popped = 0;
        let mut stale_skipped = 0;

        best.insert(source.clone(), 0);
        queue.push(QueueEntry {
            weight: 0,
            seq,
            city: source.clone(),
        });

        while let Some(entry) = queue.pop() {
            entries_popped += 1;

            if entry.city == *destination {
                trace!(
                    source = %source,
                    destination = %destination,
                    criteria = %criteria,
                    weight = entry.weight,
                    entries_popped,
                    "destination settled"
                );
                return SearchOutcome {
                    path: reconstruct(&incoming, source, destination),
                    weight: Some(entry.weight),
                    entries_popped,
                    stale_skipped,
                };
            }

            // Lazy deletion: a cheaper entry for this city was already pushed
            if best
                .get(&entry.city)
                .is_some_and(|&known| entry.weight > known)
            {
                stale_skipped += 1;
                continue;
            }

            for segment in self.graph.outgoing(&entry.city) {
                let candidate = entry.weight + criteria.weight(segment);
                let next = segment.destination();

                let improves = best.get(next).is_none_or(|&known| candidate < known);
                if !improves {
                    continue;
                }

                best.insert(next.clone(), candidate);
                incoming.insert(next.clone(), Arc::clone(segment));
                seq += 1;
                queue.push(QueueEntry {
                    weight: candidate,
                    seq,
                    city: next.clone(),
                });
            }
        }

        trace!(
            source = %source,
            destination = %destination,
            criteria = %criteria,
            entries_popped,
            "destination unreachable"
        );

        SearchOutcome {
            path: TravelPath::empty(),
            weight: None,
            entries_popped,
            stale_skipped,
        }
    }
}

/// Convenience wrapper around [`PathFinder::find_path`].
pub fn find_path(
    graph: &RouteGraph,
    source: &CityId,
    destination: &CityId,
    criteria: &Criteria,
) -> TravelPath {
    PathFinder::new(graph).find_path(source, destination, criteria)
}

/// Walk predecessor segments back from `destination` to `source`.
///
/// The source never gains an incoming segment, since no relaxation can beat
/// its starting weight of zero, so the walk always terminates there.
fn reconstruct(
    incoming: &HashMap<CityId, Arc<Segment>>,
    source: &CityId,
    destination: &CityId,
) -> TravelPath {
    let mut segments = Vec::new();
    let mut city = destination;

    while city != source {
        let Some(segment) = incoming.get(city) else {
            break;
        };
        segments.push(Arc::clone(segment));
        city = segment.source();
    }

    segments.reverse();
    TravelPath::new(segments).unwrap_or_else(|e| {
        warn!(error = %e, "predecessor chain does not connect");
        TravelPath::empty()
    })
}
