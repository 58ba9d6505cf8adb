//! Calculation service boundary
//!
//! Payload and result types for the external solar calculation service,
//! plus the client trait the rest of the crate programs against. The
//! service itself is a remote collaborator; only its wire format lives
//! here.

pub mod http;

use crate::coord::{validate, Coordinates};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Payload sent to the calculation service
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Latitude in degrees
    pub latitude: f64,

    /// Longitude in degrees
    pub longitude: f64,

    /// Mounting offset angle in degrees
    ///
    /// Omitted from the wire entirely when the user supplied no offset;
    /// the service distinguishes "no offset" from a zero offset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset_angle: Option<f64>,
}

impl CalculationRequest {
    /// Build a validated payload from the raw form texts
    ///
    /// Checks run in fixed order: latitude, longitude, offset. The first
    /// failing check's error is returned and later checks are skipped.
    pub fn from_texts(
        latitude_text: &str,
        longitude_text: &str,
        offset_text: &str,
    ) -> Result<Self> {
        let latitude = validate::latitude(latitude_text)?;
        let longitude = validate::longitude(longitude_text)?;
        let offset_angle = validate::offset(offset_text)?;

        Ok(Self {
            latitude,
            longitude,
            offset_angle,
        })
    }

    /// The submitted location as a coordinate pair
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }
}

/// One model's optimal panel orientation
///
/// Pitch is tilt up from horizontal; azimuth is degrees clockwise from
/// north. Both are display conventions of the service, not enforced here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrientationAngles {
    pub optimal_pitch: f64,
    pub optimal_azimuth: f64,
}

/// Aggregated results from all three models the service runs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub pvlib: OrientationAngles,
    pub nrel: OrientationAngles,
    pub liu_jordan: OrientationAngles,
}

/// Trait for calculation service clients
///
/// The orchestrator and server are generic over this so tests can
/// substitute a canned service for the remote one.
pub trait CalculationService: Send + Sync {
    /// Submit a validated payload and return the parsed result
    fn calculate(
        &self,
        request: &CalculationRequest,
    ) -> impl std::future::Future<Output = Result<CalculationResult>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_texts_valid() {
        let req = CalculationRequest::from_texts("43.65", "-79.38", "").unwrap();
        assert_relative_eq!(req.latitude, 43.65);
        assert_relative_eq!(req.longitude, -79.38);
        assert_eq!(req.offset_angle, None);
    }

    #[test]
    fn test_from_texts_with_offset() {
        let req = CalculationRequest::from_texts("43.65", "-79.38", "15").unwrap();
        assert_eq!(req.offset_angle, Some(15.0));
    }

    #[test]
    fn test_from_texts_latitude_checked_first() {
        // Both coordinates invalid: the latitude error wins
        let err = CalculationRequest::from_texts("999", "999", "999").unwrap_err();
        assert!(matches!(err, Error::InvalidLatitude));
    }

    #[test]
    fn test_from_texts_longitude_checked_second() {
        let err = CalculationRequest::from_texts("43.65", "999", "999").unwrap_err();
        assert!(matches!(err, Error::InvalidLongitude));
    }

    #[test]
    fn test_from_texts_offset_checked_last() {
        let err = CalculationRequest::from_texts("43.65", "-79.38", "100").unwrap_err();
        assert!(matches!(err, Error::InvalidOffset));
    }

    #[test]
    fn test_payload_omits_absent_offset() {
        let req = CalculationRequest::from_texts("43.65", "-79.38", "").unwrap();
        let json = serde_json::to_string(&req).unwrap();
        // The field must be absent, not null
        assert!(!json.contains("offset_angle"));
        assert!(!json.contains("null"));
    }

    #[test]
    fn test_payload_keeps_zero_offset() {
        // A zero offset is a real value, distinct from "no offset"
        let req = CalculationRequest::from_texts("43.65", "-79.38", "0").unwrap();
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"offset_angle\":0.0"));
    }

    #[test]
    fn test_coordinates_accessor() {
        let req = CalculationRequest::from_texts("51.5", "-0.1", "").unwrap();
        assert_eq!(req.coordinates(), Coordinates::new(51.5, -0.1));
    }

    #[test]
    fn test_result_deserialization() {
        let json = r#"{
            "pvlib": {"optimal_pitch": 33.9, "optimal_azimuth": 180.0},
            "nrel": {"optimal_pitch": 36.2, "optimal_azimuth": 180.0},
            "liu_jordan": {"optimal_pitch": 43.65, "optimal_azimuth": 180.0}
        }"#;

        let result: CalculationResult = serde_json::from_str(json).unwrap();
        assert_relative_eq!(result.pvlib.optimal_pitch, 33.9);
        assert_relative_eq!(result.nrel.optimal_pitch, 36.2);
        assert_relative_eq!(result.liu_jordan.optimal_pitch, 43.65);
        assert_relative_eq!(result.liu_jordan.optimal_azimuth, 180.0);
    }
}
