//! Geographic coordinates and input validation
//!
//! This module handles:
//! - The `Coordinates` pair used for the map center and marker
//! - Validation of free-text latitude/longitude/offset inputs

pub mod validate;

use serde::{Deserialize, Serialize};

/// A geographic coordinate (latitude, longitude)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// Create new coordinates
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Validate that coordinates are within valid ranges
    ///
    /// Latitude: -90 to 90
    /// Longitude: -180 to 180
    pub fn validate(&self) -> crate::error::Result<()> {
        use crate::constants::ranges::*;

        if !self.lat.is_finite() || self.lat < LATITUDE_MIN || self.lat > LATITUDE_MAX {
            return Err(crate::error::Error::InvalidLatitude);
        }
        if !self.lng.is_finite() || self.lng < LONGITUDE_MIN || self.lng > LONGITUDE_MAX {
            return Err(crate::error::Error::InvalidLongitude);
        }
        Ok(())
    }
}
