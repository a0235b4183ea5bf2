//! Greenwich Mean Sidereal Time and mean obliquity of the ecliptic
//!
//! Both quantities are inputs to the ascendant calculation: GMST orients the
//! local horizon against the stars, and the obliquity tilts the ecliptic
//! against the equator.

use crate::constants::{normalize_degrees, J2000, JULIAN_CENTURY_DAYS};

/// Mean obliquity of the ecliptic in degrees for a Julian Day
///
/// Cubic polynomial in Julian centuries since J2000.0; about 23.44 degrees
/// in the current era, decreasing slowly.
pub fn obliquity(jd: f64) -> f64 {
    let t = (jd - J2000) / JULIAN_CENTURY_DAYS;
    23.439_291 - 0.013_004_2 * t - 1.64e-7 * t * t + 5.04e-7 * t.powi(3)
}

/// Greenwich Mean Sidereal Time in degrees, normalized to [0, 360)
pub fn gmst(jd: f64) -> f64 {
    let d = jd - J2000;
    let t = d / JULIAN_CENTURY_DAYS;

    normalize_degrees(
        280.460_618_37 + 360.985_647_366_29 * d + 0.000_387_933 * t * t
            - t.powi(3) / 38_710_000.0,
    )
}
