//! Error types for solar-orient

use thiserror::Error;

/// Main error type for solar-orient operations
///
/// The three validation variants and `RequestFailed` carry the exact
/// messages shown to the user; everything else is internal detail that
/// gets logged rather than displayed.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Please enter valid latitude (-90 to 90)")]
    InvalidLatitude,

    #[error("Please enter valid longitude (-180 to 180)")]
    InvalidLongitude,

    #[error("Please enter valid Offset Angle (0 to 90)")]
    InvalidOffset,

    #[error("Something went wrong. Try again.")]
    RequestFailed,

    #[error("Google Maps API key not found or invalid.")]
    MissingCredential,

    #[error("Calculation service error: {0}")]
    Service(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Server error: {0}")]
    Server(String),
}

impl Error {
    /// True for the pre-network input validation failures
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::InvalidLatitude | Error::InvalidLongitude | Error::InvalidOffset
        )
    }
}

/// Result type alias for solar-orient operations
pub type Result<T> = std::result::Result<T, Error>;
