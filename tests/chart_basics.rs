//! End-to-end tests for the chart façade
//!
//! Exercises the public API the way a host application would, and checks the
//! externally-verifiable astronomical facts (equinox and solstice sign
//! boundaries) against the computed positions.

use approx::assert_abs_diff_eq;
use chrono::NaiveDate;
use natal::constants::normalize_degrees;
use natal::{
    compute_chart_basics, lunar_nodes, moon_sign_for_date, ruler_of, BirthMoment, GeoCoordinate,
    NatalError, Planet, Sign, ZodiacPosition,
};
use rstest::rstest;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// The Sun crosses a quadrant boundary at each equinox and solstice; a birth
// a day or two after the crossing lands firmly inside the new sign.
#[rstest]
#[case(date(2023, 3, 23), Sign::Aries)]
#[case(date(2023, 6, 24), Sign::Cancer)]
#[case(date(2023, 9, 26), Sign::Libra)]
#[case(date(2023, 12, 24), Sign::Capricorn)]
#[case(date(1969, 8, 10), Sign::Leo)]
#[case(date(1990, 11, 10), Sign::Scorpio)]
fn sun_sign_matches_calendar(#[case] birth_date: NaiveDate, #[case] expected: Sign) {
    let moment = BirthMoment::new(birth_date, Some("12:00"));
    let chart = compute_chart_basics(&moment, None).unwrap();
    assert_eq!(chart.sun.sign(), expected, "sun at {}", chart.sun);
}

#[test]
fn solstice_noon_sun_near_quadrant_boundary() {
    let moment = BirthMoment::new(date(2020, 6, 20), Some("22:00"));
    let chart = compute_chart_basics(&moment, None).unwrap();
    let diff = (chart.sun.longitude() - 90.0 + 180.0).rem_euclid(360.0) - 180.0;
    assert_abs_diff_eq!(diff, 0.0, epsilon = 2.0);
}

#[test]
fn millennium_chart_without_coordinate() {
    let moment = BirthMoment::new(date(2000, 1, 1), Some("12:00"));
    let chart = compute_chart_basics(&moment, None).unwrap();

    assert!(chart.ascendant.is_none());
    assert!((0.0..30.0).contains(&chart.sun.degree()));
    assert!((0.0..30.0).contains(&chart.moon.degree()));
    // The Sun sits in Capricorn in early January
    assert_eq!(chart.sun.sign(), Sign::Capricorn);
}

#[test]
fn full_chart_with_coordinate() {
    let moment = BirthMoment::new(date(1994, 4, 18), Some("03:30"));
    let coord = GeoCoordinate::new(40.7128, -74.0060).unwrap();
    let chart = compute_chart_basics(&moment, Some(coord)).unwrap();

    let asc = chart.ascendant.expect("coordinate supplied, ascendant expected");
    assert!((0.0..30.0).contains(&asc.degree()));
    assert!((0.0..360.0).contains(&asc.longitude()));
}

#[test]
fn pole_latitude_is_a_domain_error() {
    let moment = BirthMoment::at_midnight(date(2000, 1, 1));
    for lat in [90.0, -90.0] {
        let coord = GeoCoordinate::new(lat, 0.0).unwrap();
        match compute_chart_basics(&moment, Some(coord)) {
            Err(NatalError::PoleSingularity { latitude }) => {
                assert_abs_diff_eq!(latitude.abs(), 90.0)
            }
            other => panic!("expected pole singularity, got {:?}", other),
        }
    }
}

#[test]
fn node_axis_opposition_holds_across_dates() {
    for year in [1950, 1970, 2000, 2024, 2100] {
        let pair = lunar_nodes(Some(date(year, 5, 17))).unwrap();
        let expected = normalize_degrees(pair.north.longitude() + 180.0);
        assert_abs_diff_eq!(pair.south.longitude(), expected, epsilon = 1e-9);
    }
}

#[test]
fn lunar_nodes_requires_explicit_date() {
    assert!(lunar_nodes(None).is_none());
}

#[test]
fn moon_sign_lookup_moves_day_to_day() {
    // The Moon covers a sign in roughly two and a half days, so positions a
    // week apart must differ
    let a = moon_sign_for_date(date(2023, 1, 1));
    let b = moon_sign_for_date(date(2023, 1, 8));
    assert_ne!(a.sign(), b.sign());
}

#[test]
fn rulership_lookups() {
    assert_eq!(ruler_of("Scorpio"), Planet::Pluto);
    assert_eq!(ruler_of("Aquarius"), Planet::Uranus);
    assert_eq!(ruler_of("Pisces"), Planet::Neptune);
    assert_eq!(ruler_of("bogus"), Planet::Unknown);
}

#[test]
fn classification_is_total_over_extreme_longitudes() {
    for x in [-1e6, -361.0, -0.0001, 0.0, 359.9999, 1e7] {
        let pos = ZodiacPosition::from_longitude(x);
        assert!((0.0..30.0).contains(&pos.degree()), "degree for {}", x);
        assert!((0.0..360.0).contains(&pos.longitude()));
    }
}

#[test]
fn chart_serializes_round_trip() {
    let moment = BirthMoment::new(date(1988, 9, 21), Some("14:05"));
    let coord = GeoCoordinate::new(48.8566, 2.3522).unwrap();
    let chart = compute_chart_basics(&moment, Some(coord)).unwrap();

    let json = serde_json::to_string(&chart).unwrap();
    let back: natal::ChartPositions = serde_json::from_str(&json).unwrap();
    assert_eq!(chart, back);

    let nodes = lunar_nodes(Some(date(1988, 9, 21))).unwrap();
    let json = serde_json::to_string(&nodes).unwrap();
    let back: natal::LunarNodePair = serde_json::from_str(&json).unwrap();
    assert_eq!(nodes, back);
}
