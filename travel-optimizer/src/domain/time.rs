//! Time-of-day handling for scheduled segments.
//!
//! Schedules give departure and arrival times as "HH:MM" strings with no
//! date attached. Durations and connection waits are therefore computed
//! modulo one day: a segment leaving at 23:30 and arriving at 00:15 takes
//! 45 minutes, not minus 23 hours.

use chrono::{NaiveTime, Timelike};
use std::fmt;

/// Number of minutes in one day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time {input:?}: {reason}")]
pub struct TimeError {
    input: String,
    reason: &'static str,
}

impl TimeError {
    fn new(input: &str, reason: &'static str) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }

    /// The string that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// A wall-clock time of day, stored to minute precision.
///
/// # Examples
///
/// ```
/// use travel_optimizer::domain::DayMinutes;
///
/// let t = DayMinutes::parse_hhmm("14:30").unwrap();
/// assert_eq!(t.minutes(), 870);
/// assert_eq!(t.to_string(), "14:30");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DayMinutes(NaiveTime);

impl DayMinutes {
    /// Parse a time from "H:MM" or "HH:MM" format.
    ///
    /// Hour and minute are each one or two digits around a single colon.
    ///
    /// # Examples
    ///
    /// ```
    /// use travel_optimizer::domain::DayMinutes;
    ///
    /// assert!(DayMinutes::parse_hhmm("00:00").is_ok());
    /// assert!(DayMinutes::parse_hhmm("23:59").is_ok());
    /// assert_eq!(DayMinutes::parse_hhmm("9:30").unwrap().minutes(), 570);
    ///
    /// assert!(DayMinutes::parse_hhmm("1430").is_err());
    /// assert!(DayMinutes::parse_hhmm("14:300").is_err());
    /// assert!(DayMinutes::parse_hhmm("24:00").is_err());
    /// ```
    pub fn parse_hhmm(s: &str) -> Result<Self, TimeError> {
        let (hour, minute) = s
            .split_once(':')
            .ok_or_else(|| TimeError::new(s, "expected HH:MM format"))?;

        let hour = parse_clock_field(hour).ok_or_else(|| TimeError::new(s, "invalid hour digits"))?;
        if hour > 23 {
            return Err(TimeError::new(s, "hour must be 0-23"));
        }

        let minute =
            parse_clock_field(minute).ok_or_else(|| TimeError::new(s, "invalid minute digits"))?;
        if minute > 59 {
            return Err(TimeError::new(s, "minute must be 0-59"));
        }

        Self::from_minutes(hour * 60 + minute).ok_or_else(|| TimeError::new(s, "invalid time"))
    }

    /// Build a time from minutes since midnight, or `None` past 23:59.
    pub fn from_minutes(minutes: u32) -> Option<Self> {
        if minutes >= MINUTES_PER_DAY {
            return None;
        }
        NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0).map(Self)
    }

    /// Minutes since midnight, in `[0, 1439]`.
    pub fn minutes(&self) -> u32 {
        self.0.hour() * 60 + self.0.minute()
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Minutes from `self` forward to the next occurrence of `later`.
    ///
    /// Wraps across midnight, and a time compared with itself is 0 rather
    /// than a whole day.
    pub fn minutes_until(&self, later: DayMinutes) -> u32 {
        let diff = later.0.signed_duration_since(self.0).num_minutes();
        diff.rem_euclid(i64::from(MINUTES_PER_DAY)) as u32
    }
}

impl fmt::Debug for DayMinutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DayMinutes({:02}:{:02})", self.hour(), self.minute())
    }
}

impl fmt::Display for DayMinutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Length of a segment in minutes, wrapping past midnight.
///
/// A segment that departs and arrives at the same time of day is
/// zero-length.
pub fn segment_duration(departure: DayMinutes, arrival: DayMinutes) -> u32 {
    departure.minutes_until(arrival)
}

/// Time spent at an interchange between one arrival and the next departure.
pub fn waiting_time(prior_arrival: DayMinutes, next_departure: DayMinutes) -> u32 {
    prior_arrival.minutes_until(next_departure)
}

/// Parse a one- or two-digit ASCII field into a u32.
fn parse_clock_field(field: &str) -> Option<u32> {
    if field.is_empty() || field.len() > 2 {
        return None;
    }
    field
        .chars()
        .try_fold(0, |acc, c| c.to_digit(10).map(|d| acc * 10 + d))
}
