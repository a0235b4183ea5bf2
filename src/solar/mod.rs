//! Low-precision solar position
//!
//! Computes the Sun's apparent ecliptic longitude from a truncated series:
//! mean longitude, mean anomaly, and a two-term equation of center.
//! Accurate to roughly hundredths of a degree, which is far tighter than
//! the 30-degree sign classification downstream requires.

use crate::constants::{normalize_degrees, DEG2RAD, J2000};

/// Apparent ecliptic longitude of the Sun in degrees, normalized to [0, 360)
///
/// Total, deterministic function of the Julian Day; valid for any finite
/// input.
pub fn sun_longitude(jd: f64) -> f64 {
    let n = jd - J2000;

    // Mean longitude and mean anomaly (degrees)
    let l = normalize_degrees(280.460 + 0.9856474 * n);
    let g = normalize_degrees(357.528 + 0.9856003 * n);
    let g_rad = g * DEG2RAD;

    // Equation of center
    let lambda = l + 1.915 * g_rad.sin() + 0.020 * (2.0 * g_rad).sin();

    normalize_degrees(lambda)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rstest::rstest;

    // JD for the given UTC calendar date at 12:00
    fn jd_noon(y: i32, m: u32, d: u32) -> f64 {
        use crate::time::BirthMoment;
        use chrono::NaiveDate;
        let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
        BirthMoment::new(date, Some("12:00")).julian_day()
    }

    // Equinoxes and solstices pin the solar longitude to the quadrant
    // boundaries; the truncated series lands within a degree or two.
    #[rstest]
    #[case(jd_noon(2023, 3, 20), 0.0)]
    #[case(jd_noon(2023, 6, 21), 90.0)]
    #[case(jd_noon(2023, 9, 23), 180.0)]
    #[case(jd_noon(2023, 12, 21), 270.0)]
    #[case(jd_noon(2000, 3, 20), 0.0)]
    #[case(jd_noon(1980, 6, 21), 90.0)]
    fn test_equinox_solstice_longitudes(#[case] jd: f64, #[case] expected: f64) {
        let lon = sun_longitude(jd);
        // Compare on the circle so 359.9 vs 0.0 counts as close
        let diff = (lon - expected + 180.0).rem_euclid(360.0) - 180.0;
        assert_abs_diff_eq!(diff, 0.0, epsilon = 2.0);
    }

    #[test]
    fn test_result_normalized() {
        for i in 0..400 {
            let jd = J2000 + i as f64 * 17.77;
            let lon = sun_longitude(jd);
            assert!((0.0..360.0).contains(&lon));
        }
    }

    #[test]
    fn test_deterministic() {
        let jd = 2_451_545.123_456;
        assert_eq!(sun_longitude(jd), sun_longitude(jd));
    }

    #[test]
    fn test_advances_about_one_degree_per_day() {
        let jd = jd_noon(2015, 4, 10);
        let delta = sun_longitude(jd + 1.0) - sun_longitude(jd);
        assert_abs_diff_eq!(delta, 1.0, epsilon = 0.1);
    }
}
