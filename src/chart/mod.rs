//! Chart façade
//!
//! The entry points the surrounding application calls: compute the basic
//! chart positions (Sun, Moon, and optionally the ascendant) for a birth
//! moment, look up the Moon's sign for an arbitrary date, and compute the
//! lunar node axis. Everything here is a thin composition of the position
//! models; no state, no caching (memoization by JD and coordinate is the
//! caller's concern).

use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::ascendant::ascendant_longitude;
use crate::lunar::{moon_longitude, LunarNodePair};
use crate::solar::sun_longitude;
use crate::time::BirthMoment;
use crate::zodiac::ZodiacPosition;
use crate::{NatalError, Result};

/// A geographic coordinate: latitude positive north, longitude positive east
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    latitude: f64,
    longitude: f64,
}

impl GeoCoordinate {
    /// Create a coordinate, validating the numeric domains
    ///
    /// Latitude must lie in [-90, 90] and longitude in [-180, 180]. Note
    /// that the poles themselves are valid coordinates here but make the
    /// ascendant formula singular; see [`crate::ascendant::ascendant_longitude`].
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(NatalError::InvalidLatitude(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(NatalError::InvalidLongitude(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Latitude in degrees, positive north
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees, positive east
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// The basic positions of a natal chart
///
/// Constructed once per [`compute_chart_basics`] call and immutable.
/// `ascendant` is `None` when no birth coordinate was supplied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPositions {
    pub sun: ZodiacPosition,
    pub moon: ZodiacPosition,
    pub ascendant: Option<ZodiacPosition>,
}

/// Compute the Sun, Moon, and optional ascendant positions for a birth moment
///
/// The moment is converted to a Julian Day once; the solar and lunar models
/// depend only on that JD. The ascendant additionally needs the birth
/// coordinate, so its field is suppressed when `coordinate` is absent.
///
/// # Errors
///
/// Fails only when a coordinate at exactly +/-90 degrees latitude is
/// supplied, where the ascendant formula is singular
/// ([`NatalError::PoleSingularity`]).
pub fn compute_chart_basics(
    moment: &BirthMoment,
    coordinate: Option<GeoCoordinate>,
) -> Result<ChartPositions> {
    let jd = moment.julian_day();

    let sun = sun_longitude(jd);
    let moon = moon_longitude(jd);
    debug!("chart basics for {}: jd={:.6} sun={:.4} moon={:.4}", moment, jd, sun, moon);

    let ascendant = match coordinate {
        Some(coord) => {
            let asc = ascendant_longitude(jd, coord.latitude(), coord.longitude())?;
            debug!(
                "ascendant at ({:.4}, {:.4}): {:.4}",
                coord.latitude(),
                coord.longitude(),
                asc
            );
            Some(ZodiacPosition::from_longitude(asc))
        }
        None => None,
    };

    Ok(ChartPositions {
        sun: ZodiacPosition::from_longitude(sun),
        moon: ZodiacPosition::from_longitude(moon),
        ascendant,
    })
}

/// The Moon's zodiac position at midnight of the given date
///
/// Auxiliary single-body lookup, independent of any birth chart.
pub fn moon_sign_for_date(date: NaiveDate) -> ZodiacPosition {
    let jd = BirthMoment::at_midnight(date).julian_day();
    ZodiacPosition::from_longitude(moon_longitude(jd))
}

/// The mean lunar node axis at midnight of the given date
///
/// Returns `None` when no date is supplied; callers must pass an explicit
/// date rather than relying on an implicit "now".
pub fn lunar_nodes(date: Option<NaiveDate>) -> Option<LunarNodePair> {
    let date = date?;
    let jd = BirthMoment::at_midnight(date).julian_day();
    Some(LunarNodePair::at(jd))
}
