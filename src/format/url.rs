//! URL output formatter

use crate::calc::{CalculationRequest, CalculationResult};
use crate::config::Config;
use crate::error::Result;
use crate::format::OutputFormatter;

/// URL formatter - outputs a map URL for the submitted location
pub struct UrlFormatter;

impl UrlFormatter {
    /// Format URL with optional provider override
    pub fn format_with_provider(
        &self,
        request: &CalculationRequest,
        config: &Config,
        provider: Option<&str>,
    ) -> Result<String> {
        config.format_url(provider, request.latitude, request.longitude)
    }
}

impl OutputFormatter for UrlFormatter {
    fn name(&self) -> &str {
        "url"
    }

    fn description(&self) -> &str {
        "Map URL for the submitted location"
    }

    fn format(
        &self,
        request: &CalculationRequest,
        _result: &CalculationResult,
        config: &Config,
    ) -> Result<String> {
        self.format_with_provider(request, config, None)
    }
}
