//! Unit tests for the criteria-weighted path search.

use super::graph::RouteGraph;
use super::search::{PathFinder, find_path};
use crate::domain::{CityId, Criteria, Segment, TravelPath};

fn city(s: &str) -> CityId {
    CityId::new(s)
}

fn seg(from: &str, to: &str, mode: &str, dep: &str, arr: &str, cost: u32) -> Segment {
    Segment::parse(from, to, mode, dep, arr, cost).unwrap()
}

/// Direct flight A→C versus a two-hop bus A→B→C.
fn direct_vs_two_hop() -> RouteGraph {
    RouteGraph::from_segments(vec![
        seg("A", "C", "Flight", "09:00", "11:00", 500),
        seg("A", "B", "Bus", "08:00", "12:00", 150),
        seg("B", "C", "Bus", "13:00", "17:00", 150),
    ])
}

fn modes(path: &TravelPath) -> Vec<&str> {
    path.iter().map(|s| s.mode()).collect()
}

fn route(path: &TravelPath) -> Vec<&str> {
    let mut cities: Vec<&str> = path.origin().map(|c| c.as_str()).into_iter().collect();
    cities.extend(path.iter().map(|s| s.destination().as_str()));
    cities
}

#[test]
fn time_prefers_direct_flight() {
    let graph = direct_vs_two_hop();
    let path = find_path(&graph, &city("A"), &city("C"), &Criteria::Time);

    assert_eq!(route(&path), vec!["A", "C"]);
    assert_eq!(modes(&path), vec!["Flight"]);
}

#[test]
fn cost_prefers_cheap_buses() {
    let graph = direct_vs_two_hop();
    let outcome = PathFinder::new(&graph).search(&city("A"), &city("C"), &Criteria::Cost);

    assert_eq!(route(&outcome.path), vec!["A", "B", "C"]);
    assert_eq!(outcome.weight, Some(300));
}

#[test]
fn hops_prefers_direct_route() {
    let graph = direct_vs_two_hop();
    let outcome = PathFinder::new(&graph).search(&city("A"), &city("C"), &Criteria::Hops);

    assert_eq!(route(&outcome.path), vec!["A", "C"]);
    assert_eq!(outcome.weight, Some(1));
}

#[test]
fn unrecognized_criteria_searches_by_duration() {
    let graph = direct_vs_two_hop();
    let outcome =
        PathFinder::new(&graph).search(&city("A"), &city("C"), &Criteria::parse("Scenic"));

    assert_eq!(modes(&outcome.path), vec!["Flight"]);
    assert_eq!(outcome.weight, Some(120));
}

#[test]
fn search_weight_ignores_waiting() {
    // A→B→C rides for 240 minutes but waits 22 hours at B; the direct
    // segment rides for 300 minutes with no wait. Only ride time counts.
    let graph = RouteGraph::from_segments(vec![
        seg("A", "C", "Train", "08:00", "13:00", 100),
        seg("A", "B", "Bus", "08:00", "10:00", 50),
        seg("B", "C", "Bus", "08:00", "10:00", 50),
    ]);

    let outcome = PathFinder::new(&graph).search(&city("A"), &city("C"), &Criteria::Time);
    assert_eq!(route(&outcome.path), vec!["A", "B", "C"]);
    assert_eq!(outcome.weight, Some(240));
}

#[test]
fn multi_hop_chain() {
    let graph = RouteGraph::from_segments(vec![
        seg("A", "B", "Bus", "08:00", "10:00", 150),
        seg("B", "C", "Bus", "10:30", "12:30", 150),
    ]);

    let path = find_path(&graph, &city("A"), &city("C"), &Criteria::Time);
    assert_eq!(path.hop_count(), 2);
    assert_eq!(route(&path), vec!["A", "B", "C"]);
}

#[test]
fn unreachable_destination_is_empty() {
    let graph = RouteGraph::from_segments(vec![
        seg("A", "B", "Bus", "08:00", "10:00", 150),
        seg("C", "D", "Bus", "08:00", "10:00", 150),
    ]);

    let outcome = PathFinder::new(&graph).search(&city("A"), &city("D"), &Criteria::Time);
    assert!(outcome.path.is_empty());
    assert_eq!(outcome.weight, None);
}

#[test]
fn unknown_cities_are_unreachable() {
    let graph = direct_vs_two_hop();

    assert!(find_path(&graph, &city("X"), &city("C"), &Criteria::Time).is_empty());
    assert!(find_path(&graph, &city("A"), &city("X"), &Criteria::Time).is_empty());
    assert!(find_path(&RouteGraph::new(), &city("A"), &city("B"), &Criteria::Cost).is_empty());
}

#[test]
fn source_equals_destination_is_empty() {
    let graph = direct_vs_two_hop();
    let outcome = PathFinder::new(&graph).search(&city("A"), &city("A"), &Criteria::Time);

    assert!(outcome.path.is_empty());
    assert_eq!(outcome.weight, Some(0));
    assert_eq!(outcome.entries_popped, 1);
}

#[test]
fn self_loop_is_not_taken_for_same_city() {
    let graph = RouteGraph::from_segments(vec![seg("A", "A", "Ferry", "08:00", "09:00", 10)]);

    assert!(find_path(&graph, &city("A"), &city("A"), &Criteria::Hops).is_empty());
}

#[test]
fn cycles_terminate() {
    let graph = RouteGraph::from_segments(vec![
        seg("A", "B", "Bus", "08:00", "09:00", 10),
        seg("B", "A", "Bus", "09:00", "10:00", 10),
        seg("B", "B", "Bus", "10:00", "10:00", 0),
        seg("B", "C", "Bus", "10:00", "11:00", 10),
        seg("C", "A", "Bus", "11:00", "12:00", 10),
    ]);

    let path = find_path(&graph, &city("A"), &city("C"), &Criteria::Cost);
    assert_eq!(route(&path), vec!["A", "B", "C"]);

    let outcome = PathFinder::new(&graph).search(&city("A"), &city("Z"), &Criteria::Cost);
    assert!(outcome.path.is_empty());
}

#[test]
fn stale_entries_are_skipped() {
    // B is first reached at 10, then improved to 2 via C. The entry at
    // weight 10 surfaces before D (22) and must be discarded.
    let graph = RouteGraph::from_segments(vec![
        seg("A", "B", "Bus", "08:00", "09:00", 10),
        seg("A", "C", "Bus", "08:00", "09:00", 1),
        seg("C", "B", "Bus", "09:00", "10:00", 1),
        seg("B", "D", "Bus", "10:00", "11:00", 20),
    ]);

    let outcome = PathFinder::new(&graph).search(&city("A"), &city("D"), &Criteria::Cost);
    assert_eq!(route(&outcome.path), vec!["A", "C", "B", "D"]);
    assert_eq!(outcome.weight, Some(22));
    assert_eq!(outcome.stale_skipped, 1);
}

#[test]
fn parallel_segments_tie_goes_to_first_listed() {
    let graph = RouteGraph::from_segments(vec![
        seg("A", "B", "Train", "08:00", "10:00", 300),
        seg("A", "B", "Bus", "09:00", "11:00", 100),
    ]);

    for _ in 0..10 {
        let path = find_path(&graph, &city("A"), &city("B"), &Criteria::Time);
        assert_eq!(modes(&path), vec!["Train"]);
    }

    let swapped = RouteGraph::from_segments(vec![
        seg("A", "B", "Bus", "09:00", "11:00", 100),
        seg("A", "B", "Train", "08:00", "10:00", 300),
    ]);
    let path = find_path(&swapped, &city("A"), &city("B"), &Criteria::Time);
    assert_eq!(modes(&path), vec!["Bus"]);
}

#[test]
fn equal_weight_detour_does_not_replace_direct() {
    let graph = RouteGraph::from_segments(vec![
        seg("A", "C", "Bus", "08:00", "09:00", 5),
        seg("A", "B", "Bus", "08:00", "09:00", 60),
        seg("C", "B", "Bus", "09:00", "10:00", 55),
    ]);

    let path = find_path(&graph, &city("A"), &city("B"), &Criteria::Cost);
    assert_eq!(route(&path), vec!["A", "B"]);
}

#[test]
fn zero_weight_edges() {
    let graph = RouteGraph::from_segments(vec![
        seg("A", "B", "Walk", "08:00", "08:00", 0),
        seg("B", "C", "Walk", "08:00", "08:00", 0),
        seg("A", "C", "Taxi", "08:00", "08:10", 0),
    ]);

    let outcome = PathFinder::new(&graph).search(&city("A"), &city("C"), &Criteria::Time);
    assert_eq!(outcome.weight, Some(0));
    assert_eq!(route(&outcome.path), vec!["A", "B", "C"]);
}

mod brute_force {
    use super::*;
    use proptest::prelude::*;

    const CITIES: [&str; 4] = ["P", "Q", "R", "S"];

    fn criteria() -> impl Strategy<Value = Criteria> {
        prop_oneof![
            Just(Criteria::Time),
            Just(Criteria::Cost),
            Just(Criteria::Hops),
            Just(Criteria::parse("Other")),
        ]
    }

    fn segments() -> impl Strategy<Value = Vec<Segment>> {
        let one = (0..4usize, 0..4usize, 0..1440u32, 0..1440u32, 0..400u32).prop_map(
            |(from, to, dep, arr, cost)| {
                Segment::new(
                    city(CITIES[from]),
                    city(CITIES[to]),
                    "Bus",
                    crate::domain::DayMinutes::from_minutes(dep).unwrap(),
                    crate::domain::DayMinutes::from_minutes(arr).unwrap(),
                    cost,
                )
            },
        );
        proptest::collection::vec(one, 0..9)
    }

    /// Cheapest simple path weight by exhaustive enumeration.
    fn cheapest(
        segments: &[Segment],
        at: &CityId,
        destination: &CityId,
        criteria: &Criteria,
        visited: &mut Vec<CityId>,
    ) -> Option<u64> {
        if at == destination {
            return Some(0);
        }
        visited.push(at.clone());
        let mut best: Option<u64> = None;
        for s in segments.iter().filter(|s| s.source() == at) {
            if visited.contains(s.destination()) {
                continue;
            }
            if let Some(rest) = cheapest(segments, s.destination(), destination, criteria, visited)
            {
                let total = criteria.weight(s) + rest;
                best = Some(best.map_or(total, |b| b.min(total)));
            }
        }
        visited.pop();
        best
    }

    proptest! {
        #[test]
        fn matches_exhaustive_search(
            segs in segments(),
            from in 0..4usize,
            to in 0..4usize,
            criteria in criteria(),
        ) {
            prop_assume!(from != to);
            let source = city(CITIES[from]);
            let destination = city(CITIES[to]);

            let expected = cheapest(&segs, &source, &destination, &criteria, &mut Vec::new());
            let graph = RouteGraph::from_segments(segs.clone());
            let outcome = PathFinder::new(&graph).search(&source, &destination, &criteria);

            prop_assert_eq!(outcome.weight, expected);

            match expected {
                None => prop_assert!(outcome.path.is_empty()),
                Some(weight) => {
                    prop_assert_eq!(outcome.path.origin(), Some(&source));
                    prop_assert_eq!(outcome.path.destination(), Some(&destination));
                    let total: u64 = outcome.path.iter().map(|s| criteria.weight(s)).sum();
                    prop_assert_eq!(total, weight);
                    prop_assert!(TravelPath::new(outcome.path.segments().to_vec()).is_ok());
                }
            }
        }
    }
}
