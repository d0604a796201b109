//! Optimisation criteria for a travel request.

use std::fmt;

use super::Segment;

/// What a request wants minimised.
///
/// Labels are case-sensitive. Any label other than `Time`, `Cost` or `Hops`
/// is kept verbatim as [`Criteria::Other`]: it searches by segment duration
/// like `Time`, but reports the hop count as its value, and the original
/// label is echoed back in the result.
///
/// # Examples
///
/// ```
/// use travel_optimizer::domain::Criteria;
///
/// assert_eq!(Criteria::parse("Cost"), Criteria::Cost);
/// assert_eq!(Criteria::parse("cost"), Criteria::Other("cost".into()));
/// assert_eq!(Criteria::parse("cost").as_str(), "cost");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Criteria {
    /// Minimise elapsed travel time
    Time,
    /// Minimise total fare
    Cost,
    /// Minimise the number of segments
    Hops,
    /// Unrecognised label, weighted as `Time`
    Other(String),
}

impl Criteria {
    /// Interpret a criteria label. Never fails.
    pub fn parse(label: &str) -> Self {
        match label {
            "Time" => Criteria::Time,
            "Cost" => Criteria::Cost,
            "Hops" => Criteria::Hops,
            other => Criteria::Other(other.to_string()),
        }
    }

    /// The label as supplied.
    pub fn as_str(&self) -> &str {
        match self {
            Criteria::Time => "Time",
            Criteria::Cost => "Cost",
            Criteria::Hops => "Hops",
            Criteria::Other(label) => label,
        }
    }

    /// Returns true for `Time`, `Cost` and `Hops`.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Criteria::Other(_))
    }

    /// Edge weight of `segment` under this criteria.
    pub fn weight(&self, segment: &Segment) -> u64 {
        match self {
            Criteria::Cost => u64::from(segment.cost()),
            Criteria::Hops => 1,
            Criteria::Time | Criteria::Other(_) => u64::from(segment.duration()),
        }
    }
}

impl From<&str> for Criteria {
    fn from(label: &str) -> Self {
        Self::parse(label)
    }
}

impl fmt::Display for Criteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CityId, DayMinutes};

    fn segment(dep: &str, arr: &str, cost: u32) -> Segment {
        Segment::new(
            CityId::new("A"),
            CityId::new("B"),
            "Train",
            DayMinutes::parse_hhmm(dep).unwrap(),
            DayMinutes::parse_hhmm(arr).unwrap(),
            cost,
        )
    }

    #[test]
    fn parse_known_labels() {
        assert_eq!(Criteria::parse("Time"), Criteria::Time);
        assert_eq!(Criteria::parse("Cost"), Criteria::Cost);
        assert_eq!(Criteria::parse("Hops"), Criteria::Hops);
    }

    #[test]
    fn labels_are_case_sensitive() {
        assert_eq!(Criteria::parse("time"), Criteria::Other("time".into()));
        assert_eq!(Criteria::parse("HOPS"), Criteria::Other("HOPS".into()));
        assert!(!Criteria::parse("").is_recognized());
    }

    #[test]
    fn label_echoes_input() {
        for label in ["Time", "Cost", "Hops", "Fastest", ""] {
            assert_eq!(Criteria::parse(label).as_str(), label);
            assert_eq!(Criteria::from(label).to_string(), label);
        }
    }

    #[test]
    fn weights_by_criteria() {
        let seg = segment("09:00", "11:00", 500);

        assert_eq!(Criteria::Time.weight(&seg), 120);
        assert_eq!(Criteria::Cost.weight(&seg), 500);
        assert_eq!(Criteria::Hops.weight(&seg), 1);
    }

    #[test]
    fn unrecognized_weighs_like_time() {
        let seg = segment("23:00", "01:30", 80);
        let other = Criteria::parse("Comfort");

        assert_eq!(other.weight(&seg), Criteria::Time.weight(&seg));
        assert_eq!(other.weight(&seg), 150);
    }
}
