//! HTTP client for the external calculation service
//!
//! POSTs the validated payload as JSON and parses the three-model result.
//! Any non-success status is a uniform failure; the body of an error
//! response is not inspected.

use crate::calc::{CalculationRequest, CalculationResult, CalculationService};
use crate::config::Config;
use crate::constants::api::CALCULATE_PATH;
use crate::error::{Error, Result};
use std::time::Duration;

/// Calculation service client over HTTP
#[derive(Debug, Clone)]
pub struct HttpCalculationService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCalculationService {
    /// Create a new client for the service at `base_url`
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Create a client from the configured service settings
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.service.base_url, config.service.timeout_secs)
    }

    /// Full URL of the calculate endpoint
    pub fn calculate_url(&self) -> String {
        format!("{}{}", self.base_url, CALCULATE_PATH)
    }
}

impl CalculationService for HttpCalculationService {
    async fn calculate(&self, request: &CalculationRequest) -> Result<CalculationResult> {
        let response = self
            .client
            .post(self.calculate_url())
            .json(request)
            .send()
            .await
            .map_err(|e| Error::Service(format!("Calculation request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Error::Service(format!(
                "Calculation service returned status: {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| Error::Service(format!("Failed to parse calculation response: {}", e)))
    }
}
