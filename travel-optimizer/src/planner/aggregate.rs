//! Result aggregation for found paths.
//!
//! Totals a path's cost, hops and elapsed time, and picks the value a
//! request's criteria reports.
//!
//! Elapsed time includes the wait at each interchange. The search itself
//! weighs `Time` requests by ride time alone, so the reported total can
//! exceed the weight the path was chosen by.

use crate::domain::{Criteria, TravelPath, waiting_time};

/// Totals over a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PathTotals {
    /// Ride time plus interchange waits, in minutes.
    pub total_time_mins: u64,

    /// Sum of segment costs.
    pub total_cost: u64,

    /// Number of segments.
    pub hops: usize,
}

impl PathTotals {
    /// Compute totals for `path`. An empty path totals zero.
    pub fn of(path: &TravelPath) -> Self {
        let ride: u64 = path.iter().map(|s| u64::from(s.duration())).sum();
        let waiting: u64 = path
            .connections()
            .map(|(arriving, departing)| {
                u64::from(waiting_time(arriving.arrival(), departing.departure()))
            })
            .sum();
        let total_cost = path.iter().map(|s| u64::from(s.cost())).sum();

        Self {
            total_time_mins: ride + waiting,
            total_cost,
            hops: path.hop_count(),
        }
    }
}

/// A path's totals and the value its criteria reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Aggregate {
    pub value: u64,
    pub totals: PathTotals,
}

/// Aggregate `path` under `criteria`.
///
/// `Time` reports total elapsed time, `Cost` the total cost, and anything
/// else (`Hops` or an unrecognised label) the hop count.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use travel_optimizer::domain::{Criteria, Segment, TravelPath};
/// use travel_optimizer::planner::aggregate;
///
/// let path = TravelPath::new(vec![
///     Arc::new(Segment::parse("A", "B", "Bus", "08:00", "10:00", 150).unwrap()),
///     Arc::new(Segment::parse("B", "C", "Bus", "10:30", "12:30", 150).unwrap()),
/// ])
/// .unwrap();
///
/// assert_eq!(aggregate(&path, &Criteria::Time).value, 270);
/// assert_eq!(aggregate(&path, &Criteria::Cost).value, 300);
/// assert_eq!(aggregate(&path, &Criteria::Hops).value, 2);
/// ```
pub fn aggregate(path: &TravelPath, criteria: &Criteria) -> Aggregate {
    let totals = PathTotals::of(path);
    let value = match criteria {
        Criteria::Time => totals.total_time_mins,
        Criteria::Cost => totals.total_cost,
        Criteria::Hops | Criteria::Other(_) => totals.hops as u64,
    };

    Aggregate { value, totals }
}
