//! Zodiac signs, classification, and rulership lookup
//!
//! Any ecliptic longitude maps to one of twelve fixed 30-degree sectors,
//! starting at Aries and proceeding in increasing-longitude order. The
//! rulership table uses the modern planetary attributions (Scorpio-Pluto,
//! Aquarius-Uranus, Pisces-Neptune); the classical alternates are exposed
//! separately.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::constants::{normalize_degrees, SIGN_WIDTH_DEG};

/// The twelve zodiac signs in zodiacal order starting at Aries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All signs in zodiacal order
pub const SIGNS: [Sign; 12] = [
    Sign::Aries,
    Sign::Taurus,
    Sign::Gemini,
    Sign::Cancer,
    Sign::Leo,
    Sign::Virgo,
    Sign::Libra,
    Sign::Scorpio,
    Sign::Sagittarius,
    Sign::Capricorn,
    Sign::Aquarius,
    Sign::Pisces,
];

impl Sign {
    /// Get the sign's name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Sign::Aries => "Aries",
            Sign::Taurus => "Taurus",
            Sign::Gemini => "Gemini",
            Sign::Cancer => "Cancer",
            Sign::Leo => "Leo",
            Sign::Virgo => "Virgo",
            Sign::Libra => "Libra",
            Sign::Scorpio => "Scorpio",
            Sign::Sagittarius => "Sagittarius",
            Sign::Capricorn => "Capricorn",
            Sign::Aquarius => "Aquarius",
            Sign::Pisces => "Pisces",
        }
    }

    /// Zero-based position in zodiacal order (Aries = 0)
    pub fn index(&self) -> usize {
        SIGNS.iter().position(|s| s == self).unwrap_or(0)
    }

    /// Sign at the given zodiacal index, wrapping modulo 12
    pub fn from_index(index: usize) -> Sign {
        SIGNS[index % 12]
    }

    /// Parse a sign from its name, case-insensitively
    pub fn from_name(name: &str) -> Option<Sign> {
        let trimmed = name.trim();
        SIGNS
            .iter()
            .copied()
            .find(|s| s.name().eq_ignore_ascii_case(trimmed))
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ruling planets, including the luminaries and an explicit unknown sentinel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Planet {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    /// Returned for unrecognized sign names so callers can degrade gracefully
    Unknown,
}

impl Planet {
    /// Get the planet's name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Planet::Sun => "Sun",
            Planet::Moon => "Moon",
            Planet::Mercury => "Mercury",
            Planet::Venus => "Venus",
            Planet::Mars => "Mars",
            Planet::Jupiter => "Jupiter",
            Planet::Saturn => "Saturn",
            Planet::Uranus => "Uranus",
            Planet::Neptune => "Neptune",
            Planet::Pluto => "Pluto",
            Planet::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

lazy_static! {
    /// Modern rulership attributions, built once at first use
    static ref MODERN_RULERS: HashMap<Sign, Planet> = {
        let mut m = HashMap::new();
        m.insert(Sign::Aries, Planet::Mars);
        m.insert(Sign::Taurus, Planet::Venus);
        m.insert(Sign::Gemini, Planet::Mercury);
        m.insert(Sign::Cancer, Planet::Moon);
        m.insert(Sign::Leo, Planet::Sun);
        m.insert(Sign::Virgo, Planet::Mercury);
        m.insert(Sign::Libra, Planet::Venus);
        m.insert(Sign::Scorpio, Planet::Pluto);
        m.insert(Sign::Sagittarius, Planet::Jupiter);
        m.insert(Sign::Capricorn, Planet::Saturn);
        m.insert(Sign::Aquarius, Planet::Uranus);
        m.insert(Sign::Pisces, Planet::Neptune);
        m
    };
}

/// Modern ruling planet of a sign
pub fn ruler(sign: Sign) -> Planet {
    // Table is total over the enum; the fallback is unreachable in practice
    MODERN_RULERS.get(&sign).copied().unwrap_or(Planet::Unknown)
}

/// Modern ruling planet looked up by sign name
///
/// Unrecognized names yield [`Planet::Unknown`] rather than an error, so UI
/// callers can degrade gracefully.
pub fn ruler_of(sign_name: &str) -> Planet {
    match Sign::from_name(sign_name) {
        Some(sign) => ruler(sign),
        None => Planet::Unknown,
    }
}

/// Classical (traditional) ruling planet of a sign
///
/// Differs from the modern table for the three outer-planet signs:
/// Scorpio-Mars, Aquarius-Saturn, Pisces-Jupiter.
pub fn classical_ruler(sign: Sign) -> Planet {
    match sign {
        Sign::Scorpio => Planet::Mars,
        Sign::Aquarius => Planet::Saturn,
        Sign::Pisces => Planet::Jupiter,
        other => ruler(other),
    }
}

/// Classical ruling planet looked up by sign name
pub fn classical_ruler_of(sign_name: &str) -> Planet {
    match Sign::from_name(sign_name) {
        Some(sign) => classical_ruler(sign),
        None => Planet::Unknown,
    }
}

/// An ecliptic longitude classified into a sign and an intra-sign degree
///
/// A pure function of the longitude: `sign` is the 30-degree sector the
/// normalized longitude falls in and `degree` is the offset within it,
/// always in [0, 30).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZodiacPosition {
    longitude: f64,
    sign: Sign,
    degree: f64,
}

impl ZodiacPosition {
    /// Classify an ecliptic longitude in degrees
    ///
    /// Any finite input is first normalized into [0, 360).
    pub fn from_longitude(longitude: f64) -> Self {
        let normalized = normalize_degrees(longitude);
        let index = (normalized / SIGN_WIDTH_DEG).floor() as usize;
        Self {
            longitude: normalized,
            sign: Sign::from_index(index),
            degree: normalized % SIGN_WIDTH_DEG,
        }
    }

    /// The normalized ecliptic longitude, in [0, 360)
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// The sign this longitude falls in
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// The degree offset within the sign, in [0, 30)
    pub fn degree(&self) -> f64 {
        self.degree
    }
}

impl fmt::Display for ZodiacPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}\u{b0} {}", self.degree, self.sign)
    }
}
