//! Coordinate text validation
//!
//! Pure validators for the free-text form inputs. The submission path
//! checks in a fixed order: latitude, longitude, offset; the first
//! failure is surfaced and later checks are skipped.

use crate::constants::ranges::*;
use crate::coord::Coordinates;
use crate::error::{Error, Result};

/// Parse text to a finite f64
///
/// `f64::from_str` accepts "inf" and "nan" spellings; those never count
/// as a usable coordinate or angle.
fn parse_finite(text: &str) -> Option<f64> {
    let value: f64 = text.trim().parse().ok()?;
    value.is_finite().then_some(value)
}

/// Validate latitude text: finite number in [-90, 90]
pub fn latitude(text: &str) -> Result<f64> {
    match parse_finite(text) {
        Some(v) if (LATITUDE_MIN..=LATITUDE_MAX).contains(&v) => Ok(v),
        _ => Err(Error::InvalidLatitude),
    }
}

/// Validate longitude text: finite number in [-180, 180]
pub fn longitude(text: &str) -> Result<f64> {
    match parse_finite(text) {
        Some(v) if (LONGITUDE_MIN..=LONGITUDE_MAX).contains(&v) => Ok(v),
        _ => Err(Error::InvalidLongitude),
    }
}

/// Validate offset angle text: empty means no offset, otherwise a finite
/// number in [0, 90]
pub fn offset(text: &str) -> Result<Option<f64>> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    match parse_finite(text) {
        Some(v) if (OFFSET_MIN..=OFFSET_MAX).contains(&v) => Ok(Some(v)),
        _ => Err(Error::InvalidOffset),
    }
}

/// Tolerant pair parse for deriving the map position
///
/// Empty or invalid text on either side yields `None` rather than an
/// error; the caller keeps its previous position in that case.
pub fn pair(lat_text: &str, lng_text: &str) -> Option<Coordinates> {
    let lat = latitude(lat_text).ok()?;
    let lng = longitude(lng_text).ok()?;
    Some(Coordinates::new(lat, lng))
}
