//! Ascendant calculation
//!
//! The ascendant is the ecliptic degree rising on the eastern horizon at a
//! given time and place. It combines Greenwich sidereal time, the observer's
//! coordinates, and the obliquity of the ecliptic through a
//! spherical-trigonometry formula.

use crate::constants::{normalize_degrees, DEG2RAD, RAD2DEG};
use crate::sidereal::{gmst, obliquity};
use crate::{NatalError, Result};

/// Ecliptic longitude of the ascendant in degrees, normalized to [0, 360)
///
/// `latitude` is geographic latitude in degrees (positive north) and
/// `longitude` is geographic longitude in degrees (positive east).
///
/// The formula is singular at the poles, where `tan(latitude)` diverges, so
/// latitudes at or beyond +/-90 degrees (or non-finite) return
/// [`NatalError::PoleSingularity`] rather than propagating NaN into sign
/// classification.
pub fn ascendant_longitude(jd: f64, latitude: f64, longitude: f64) -> Result<f64> {
    // Written to also reject NaN latitudes
    if !(latitude.abs() < 90.0) {
        return Err(NatalError::PoleSingularity { latitude });
    }

    let lst = normalize_degrees(gmst(jd) + longitude);

    let lst_rad = lst * DEG2RAD;
    let lat_rad = latitude * DEG2RAD;
    let eps_rad = obliquity(jd) * DEG2RAD;

    // atan2 (rather than atan) resolves the quadrant across the full circle
    let numerator = lst_rad.cos();
    let denominator = -(lst_rad.sin() * eps_rad.cos() + lat_rad.tan() * eps_rad.sin());

    Ok(normalize_degrees(numerator.atan2(denominator) * RAD2DEG))
}
