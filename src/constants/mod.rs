//! Constants module for astronomical calculations

use std::f64::consts::PI;

// Time constants
/// Seconds in a day
pub const DAY_S: f64 = 86_400.0;
/// Milliseconds in a day
pub const DAY_MS: f64 = 86_400_000.0;
/// J2000.0 epoch as Julian date (2000-01-01T12:00:00)
pub const J2000: f64 = 2_451_545.0;
/// Unix epoch (1970-01-01T00:00:00) as Julian date
pub const JD_UNIX_EPOCH: f64 = 2_440_587.5;
/// Days in a Julian century
pub const JULIAN_CENTURY_DAYS: f64 = 36_525.0;

// Angles
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD2DEG: f64 = 180.0 / PI;
/// Degrees in a full circle
pub const DEG360: f64 = 360.0;
/// Width of one zodiac sign in degrees
pub const SIGN_WIDTH_DEG: f64 = 30.0;

/// Normalize an angle in degrees into the range [0, 360)
///
/// Valid for any finite input, including large negative angles.
pub fn normalize_degrees(angle: f64) -> f64 {
    angle.rem_euclid(DEG360)
}
