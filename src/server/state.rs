//! Server shared state
//!
//! Holds configuration and the calculation service client for the HTTP
//! server.

use crate::calc::http::HttpCalculationService;
use crate::config::Config;

/// Shared state for the HTTP server
pub struct AppState {
    /// Configuration
    pub config: Config,

    /// Client for the external calculation service
    pub service: HttpCalculationService,
}

impl AppState {
    /// Create new application state
    pub fn new(config: Config) -> Self {
        let service = HttpCalculationService::from_config(&config);
        Self { config, service }
    }
}
