//! Output formatters
//!
//! Provides trait-based output formatting for calculation results.

pub mod json;
pub mod text;
pub mod url;

use crate::calc::{CalculationRequest, CalculationResult};
use crate::config::Config;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Information about an output format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatInfo {
    /// Format name
    pub name: String,
    /// Format description
    pub description: String,
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Get the format name
    fn name(&self) -> &str;

    /// Get the format description
    fn description(&self) -> &str;

    /// Format one submission's outcome
    ///
    /// # Arguments
    /// * `request` - The validated payload that was submitted
    /// * `result` - The three-model result returned by the service
    /// * `config` - Application config (for url providers, etc.)
    fn format(
        &self,
        request: &CalculationRequest,
        result: &CalculationResult,
        config: &Config,
    ) -> Result<String>;
}

/// Get a formatter by name
pub fn get_formatter(name: &str) -> Option<Box<dyn OutputFormatter>> {
    match name.to_lowercase().as_str() {
        "json" => Some(Box::new(json::JsonFormatter)),
        "text" => Some(Box::new(text::TextFormatter)),
        "url" => Some(Box::new(url::UrlFormatter)),
        _ => None,
    }
}

/// List all available formatters
pub fn available_formats() -> Vec<FormatInfo> {
    vec![
        FormatInfo {
            name: "json".to_string(),
            description: "Request and results as JSON".to_string(),
        },
        FormatInfo {
            name: "text".to_string(),
            description: "Human-readable text".to_string(),
        },
        FormatInfo {
            name: "url".to_string(),
            description: "Map URL for the submitted location".to_string(),
        },
    ]
}
