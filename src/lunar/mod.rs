//! Low-precision lunar position and mean lunar nodes
//!
//! The lunar longitude here is a six-term truncation of the full lunar
//! theory: a mean longitude plus the largest periodic corrections (evection,
//! variation, annual equation, and the leading latitude coupling). Accuracy
//! is on the order of a few tenths of a degree. That is sufficient for
//! zodiac sign and degree classification, but callers must not rely on it
//! for sub-arcminute work.

use serde::{Deserialize, Serialize};

use crate::constants::{normalize_degrees, DEG2RAD, J2000, JULIAN_CENTURY_DAYS};
use crate::zodiac::ZodiacPosition;

/// Ecliptic longitude of the Moon in degrees, normalized to [0, 360)
///
/// Total, deterministic function of the Julian Day. See the module
/// documentation for the precision ceiling of this truncated series.
pub fn moon_longitude(jd: f64) -> f64 {
    let n = jd - J2000;

    // Mean longitude, mean anomaly, and mean argument of latitude (degrees)
    let l = normalize_degrees(218.316 + 13.176396 * n);
    let m = normalize_degrees(134.963 + 13.064993 * n);
    let f = normalize_degrees(93.272 + 13.229350 * n);

    let l_rad = l * DEG2RAD;
    let m_rad = m * DEG2RAD;
    let f_rad = f * DEG2RAD;
    // Solar mean anomaly enters through the annual equation term
    let sun_m_rad = (357.528 + 0.9856474 * n) * DEG2RAD;

    let longitude = l
        + 6.289 * m_rad.sin()
        + 1.274 * (2.0 * (l_rad - m_rad)).sin()
        + 0.658 * (2.0 * l_rad).sin()
        + 0.214 * (2.0 * m_rad).sin()
        - 0.186 * sun_m_rad.sin()
        - 0.114 * (2.0 * f_rad).sin();

    normalize_degrees(longitude)
}

/// Mean ecliptic longitude of the lunar North Node in degrees
///
/// Polynomial in Julian centuries since J2000.0; the node regresses through
/// the zodiac with a period of about 18.6 years. Total and deterministic.
pub fn mean_north_node(jd: f64) -> f64 {
    let t = (jd - J2000) / JULIAN_CENTURY_DAYS;

    let longitude = 125.044_555_01 - 1_934.136_184_9 * t + 0.002_076_2 * t * t
        + t.powi(3) / 467_410.0
        - t.powi(4) / 60_616_000.0;

    normalize_degrees(longitude)
}

/// The mean lunar node axis, classified into zodiac positions
///
/// The South Node is always derived as North + 180 degrees, never computed
/// independently, so the opposition invariant holds exactly for any JD.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LunarNodePair {
    pub north: ZodiacPosition,
    pub south: ZodiacPosition,
}

impl LunarNodePair {
    /// Compute the node pair for a Julian Day
    pub fn at(jd: f64) -> Self {
        let north_longitude = mean_north_node(jd);
        Self {
            north: ZodiacPosition::from_longitude(north_longitude),
            south: ZodiacPosition::from_longitude(north_longitude + 180.0),
        }
    }
}
