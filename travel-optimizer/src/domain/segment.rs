//! Scheduled segments between cities.

use super::time::{DayMinutes, TimeError, segment_duration};
use super::CityId;

/// One scheduled, directed hop between two cities.
///
/// The duration is derived from the departure and arrival times and is
/// never supplied by the caller. Segments are immutable once built.
///
/// The times are also kept as written in the timetable, so results can
/// echo them back unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    source: CityId,
    destination: CityId,
    mode: String,
    departure: DayMinutes,
    arrival: DayMinutes,
    departure_text: String,
    arrival_text: String,
    cost: u32,
    duration: u32,
}

impl Segment {
    /// Creates a segment, deriving its duration.
    pub fn new(
        source: CityId,
        destination: CityId,
        mode: impl Into<String>,
        departure: DayMinutes,
        arrival: DayMinutes,
        cost: u32,
    ) -> Self {
        Self {
            source,
            destination,
            mode: mode.into(),
            departure,
            arrival,
            departure_text: departure.to_string(),
            arrival_text: arrival.to_string(),
            cost,
            duration: segment_duration(departure, arrival),
        }
    }

    /// Creates a segment from "HH:MM" departure and arrival strings.
    ///
    /// # Examples
    ///
    /// ```
    /// use travel_optimizer::domain::Segment;
    ///
    /// let seg = Segment::parse("A", "B", "Flight", "23:30", "01:00", 250).unwrap();
    /// assert_eq!(seg.duration(), 90);
    ///
    /// assert!(Segment::parse("A", "B", "Flight", "9am", "01:00", 250).is_err());
    /// ```
    pub fn parse(
        source: &str,
        destination: &str,
        mode: &str,
        departure: &str,
        arrival: &str,
        cost: u32,
    ) -> Result<Self, TimeError> {
        let departure_time = DayMinutes::parse_hhmm(departure)?;
        let arrival_time = DayMinutes::parse_hhmm(arrival)?;
        Ok(Self {
            departure_text: departure.to_string(),
            arrival_text: arrival.to_string(),
            ..Self::new(
                CityId::new(source),
                CityId::new(destination),
                mode,
                departure_time,
                arrival_time,
                cost,
            )
        })
    }

    /// Origin city.
    pub fn source(&self) -> &CityId {
        &self.source
    }

    /// Destination city.
    pub fn destination(&self) -> &CityId {
        &self.destination
    }

    /// Transport mode, e.g. "Flight" or "Bus".
    pub fn mode(&self) -> &str {
        &self.mode
    }

    pub fn departure(&self) -> DayMinutes {
        self.departure
    }

    pub fn arrival(&self) -> DayMinutes {
        self.arrival
    }

    /// Departure time as written in the timetable.
    pub fn departure_text(&self) -> &str {
        &self.departure_text
    }

    /// Arrival time as written in the timetable.
    pub fn arrival_text(&self) -> &str {
        &self.arrival_text
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Minutes spent travelling, in `[0, 1439]`.
    pub fn duration(&self) -> u32 {
        self.duration
    }
}
