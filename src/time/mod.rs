//! Birth moments and Julian Day conversion
//!
//! A [`BirthMoment`] is a calendar date plus a wall-clock time of day. The
//! pair is treated as a naive timestamp: no timezone conversion is applied
//! anywhere in this crate, so the computed Julian Day reflects the wall-clock
//! reading as-is. This matches how birth data is normally recorded and keeps
//! sign boundaries stable near midnight; it is a deliberate simplification,
//! not a high-precision ephemeris time scale (no leap seconds, no delta-T).

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{DAY_MS, JD_UNIX_EPOCH};

/// A birth date and wall-clock time, combined with no timezone handling
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BirthMoment {
    datetime: NaiveDateTime,
}

impl BirthMoment {
    /// Create a birth moment from a date and an optional "HH:MM" clock string
    ///
    /// The clock string parses permissively: an absent, malformed, or
    /// out-of-range value degrades to 00:00 rather than failing. Hours are
    /// accepted in 0-23 and minutes in 0-59.
    pub fn new(date: NaiveDate, time_of_day: Option<&str>) -> Self {
        let time = time_of_day
            .and_then(Self::parse_clock)
            .unwrap_or(NaiveTime::MIN);
        Self {
            datetime: date.and_time(time),
        }
    }

    /// Create a birth moment at exactly midnight of the given date
    pub fn at_midnight(date: NaiveDate) -> Self {
        Self::new(date, None)
    }

    /// Parse an "HH:MM" string, returning `None` for anything malformed
    fn parse_clock(s: &str) -> Option<NaiveTime> {
        let (h, m) = s.trim().split_once(':')?;
        let hour: u32 = h.trim().parse().ok()?;
        let minute: u32 = m.trim().parse().ok()?;
        NaiveTime::from_hms_opt(hour, minute, 0)
    }

    /// The calendar date component
    pub fn date(&self) -> NaiveDate {
        self.datetime.date()
    }

    /// The combined naive timestamp
    pub fn datetime(&self) -> NaiveDateTime {
        self.datetime
    }

    /// Convert this moment to a continuous Julian Day number
    ///
    /// The naive timestamp's milliseconds since the Unix epoch are scaled to
    /// days and offset so that 1970-01-01T00:00:00 maps to JD 2440587.5.
    /// Strictly monotonic: a later timestamp always yields a larger JD.
    pub fn julian_day(&self) -> f64 {
        let millis = self.datetime.and_utc().timestamp_millis() as f64;
        millis / DAY_MS + JD_UNIX_EPOCH
    }
}

impl fmt::Display for BirthMoment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.datetime.format("%Y-%m-%d %H:%M"))
    }
}
