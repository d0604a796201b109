//! Travel paths.
//!
//! A `TravelPath` is the schedule returned for one request: zero or more
//! segments chained end to end from the requested source to destination.

use std::sync::Arc;

use super::{CityId, DomainError, Segment};

/// A contiguous sequence of segments.
///
/// # Invariants
///
/// - Consecutive segments connect (destination of one = source of next)
/// - An empty path means no route was found
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TravelPath {
    segments: Vec<Arc<Segment>>,
}

impl TravelPath {
    /// Constructs a path, checking that the segments connect.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a segment does not depart from the city the
    /// previous one arrives at.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use travel_optimizer::domain::{Segment, TravelPath};
    ///
    /// let ab = Arc::new(Segment::parse("A", "B", "Bus", "08:00", "10:00", 150).unwrap());
    /// let bc = Arc::new(Segment::parse("B", "C", "Bus", "10:30", "12:30", 150).unwrap());
    /// let cd = Arc::new(Segment::parse("C", "D", "Bus", "13:00", "14:00", 50).unwrap());
    ///
    /// let path = TravelPath::new(vec![ab.clone(), bc]).unwrap();
    /// assert_eq!(path.hop_count(), 2);
    ///
    /// assert!(TravelPath::new(vec![ab, cd]).is_err());
    /// ```
    pub fn new(segments: Vec<Arc<Segment>>) -> Result<Self, DomainError> {
        for (index, window) in segments.windows(2).enumerate() {
            let expected = window[0].destination();
            let found = window[1].source();
            if expected != found {
                return Err(DomainError::DisconnectedPath {
                    index: index + 1,
                    expected: expected.clone(),
                    found: found.clone(),
                });
            }
        }

        Ok(Self { segments })
    }

    /// The path with no segments.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of segments travelled.
    pub fn hop_count(&self) -> usize {
        self.segments.len()
    }

    /// The segments in travel order.
    pub fn segments(&self) -> &[Arc<Segment>] {
        &self.segments
    }

    pub fn iter(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter().map(|s| s.as_ref())
    }

    /// Origin city, or `None` for an empty path.
    pub fn origin(&self) -> Option<&CityId> {
        self.segments.first().map(|s| s.source())
    }

    /// Final city, or `None` for an empty path.
    pub fn destination(&self) -> Option<&CityId> {
        self.segments.last().map(|s| s.destination())
    }

    /// Each interchange as (arriving segment, departing segment).
    pub fn connections(&self) -> impl Iterator<Item = (&Segment, &Segment)> {
        self.segments
            .windows(2)
            .map(|w| (w[0].as_ref(), w[1].as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(from: &str, to: &str, dep: &str, arr: &str) -> Arc<Segment> {
        Arc::new(Segment::parse(from, to, "Bus", dep, arr, 100).unwrap())
    }

    #[test]
    fn empty_path() {
        let path = TravelPath::empty();
        assert!(path.is_empty());
        assert_eq!(path.hop_count(), 0);
        assert!(path.origin().is_none());
        assert!(path.destination().is_none());
        assert_eq!(path.connections().count(), 0);
        assert_eq!(TravelPath::new(vec![]).unwrap(), path);
    }

    #[test]
    fn connected_path() {
        let path = TravelPath::new(vec![
            seg("A", "B", "08:00", "10:00"),
            seg("B", "C", "10:30", "12:30"),
            seg("C", "D", "13:00", "14:00"),
        ])
        .unwrap();

        assert_eq!(path.hop_count(), 3);
        assert_eq!(path.origin().unwrap().as_str(), "A");
        assert_eq!(path.destination().unwrap().as_str(), "D");

        let hubs: Vec<&str> = path
            .connections()
            .map(|(arriving, departing)| {
                assert_eq!(arriving.destination(), departing.source());
                departing.source().as_str()
            })
            .collect();
        assert_eq!(hubs, vec!["B", "C"]);
    }

    #[test]
    fn disconnected_path_rejected() {
        let err = TravelPath::new(vec![
            seg("A", "B", "08:00", "10:00"),
            seg("B", "C", "10:30", "12:30"),
            seg("X", "D", "13:00", "14:00"),
        ])
        .unwrap_err();

        assert_eq!(
            err.to_string(),
            "segment 2 departs from X but the previous segment arrives at C"
        );
    }

    #[test]
    fn iter_in_travel_order() {
        let path = TravelPath::new(vec![
            seg("A", "B", "08:00", "10:00"),
            seg("B", "A", "11:00", "13:00"),
        ])
        .unwrap();

        let departures: Vec<String> = path.iter().map(|s| s.departure().to_string()).collect();
        assert_eq!(departures, vec!["08:00", "11:00"]);
    }
}
