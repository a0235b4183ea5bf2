//! Natal: deterministic natal-chart position engine
//!
//! This crate computes the ecliptic longitudes of the Sun, the Moon, the
//! ascendant, and the mean lunar nodes for a birth moment, and classifies
//! each into one of the twelve 30-degree zodiac sectors. Every calculation
//! is a pure function of time (as a Julian Day) and, for the ascendant,
//! a geographic coordinate: no I/O, no shared state, no caching.
//!
//! The solar and lunar models are intentionally truncated low-precision
//! series (hundredths of a degree for the Sun, a few tenths for the Moon),
//! sufficient for sign and degree classification but not for sub-arcminute
//! ephemeris work.

use thiserror::Error;

pub mod ascendant;
pub mod chart;
pub mod constants;
pub mod lunar;
pub mod sidereal;
pub mod solar;
pub mod time;
pub mod zodiac;

// Re-export commonly used types and entry points
pub use chart::{compute_chart_basics, lunar_nodes, moon_sign_for_date, ChartPositions, GeoCoordinate};
pub use lunar::LunarNodePair;
pub use time::BirthMoment;
pub use zodiac::{classical_ruler_of, ruler_of, Planet, Sign, ZodiacPosition};

/// Main error type for the natal library
#[derive(Debug, Error)]
pub enum NatalError {
    /// The ascendant formula is singular at the poles, where tan(latitude)
    /// diverges
    #[error("ascendant is undefined at latitude {latitude}\u{b0}: formula is singular at the poles")]
    PoleSingularity { latitude: f64 },

    #[error("latitude {0}\u{b0} outside [-90, 90]")]
    InvalidLatitude(f64),

    #[error("longitude {0}\u{b0} outside [-180, 180]")]
    InvalidLongitude(f64),
}

/// Result type for natal operations
pub type Result<T> = std::result::Result<T, NatalError>;
