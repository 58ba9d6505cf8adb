//! JSON output formatter

use crate::calc::{CalculationRequest, CalculationResult};
use crate::config::Config;
use crate::error::Result;
use crate::format::OutputFormatter;

/// JSON formatter - outputs request and results as pretty-printed JSON
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Request and results as JSON"
    }

    fn format(
        &self,
        request: &CalculationRequest,
        result: &CalculationResult,
        _config: &Config,
    ) -> Result<String> {
        let combined = serde_json::json!({
            "request": request,
            "result": result,
        });
        Ok(serde_json::to_string_pretty(&combined)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::OrientationAngles;

    fn sample() -> (CalculationRequest, CalculationResult) {
        let request = CalculationRequest::from_texts("43.65", "-79.38", "").unwrap();
        let angles = OrientationAngles {
            optimal_pitch: 33.9,
            optimal_azimuth: 180.0,
        };
        let result = CalculationResult {
            pvlib: angles,
            nrel: angles,
            liu_jordan: angles,
        };
        (request, result)
    }

    #[test]
    fn test_json_format() {
        let formatter = JsonFormatter;
        let (request, result) = sample();
        let config = Config::default();

        let output = formatter.format(&request, &result, &config).unwrap();

        // Verify it's valid JSON with both halves present
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert!(parsed.get("request").is_some());
        assert!(parsed.get("result").is_some());
        assert!(parsed["result"].get("pvlib").is_some());
        assert!(parsed["result"].get("nrel").is_some());
        assert!(parsed["result"].get("liu_jordan").is_some());
    }

    #[test]
    fn test_json_format_omits_absent_offset() {
        let formatter = JsonFormatter;
        let (request, result) = sample();
        let config = Config::default();

        let output = formatter.format(&request, &result, &config).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert!(parsed["request"].get("offset_angle").is_none());
    }

    #[test]
    fn test_json_formatter_info() {
        let formatter = JsonFormatter;
        assert_eq!(formatter.name(), "json");
        assert!(!formatter.description().is_empty());
    }
}
