//! Human-readable text output formatter

use crate::calc::{CalculationRequest, CalculationResult, OrientationAngles};
use crate::config::Config;
use crate::error::Result;
use crate::format::OutputFormatter;

/// Text formatter - outputs human-readable summary
pub struct TextFormatter;

fn push_model(output: &mut String, name: &str, angles: &OrientationAngles) {
    output.push_str(&format!(
        "  {:<10} pitch {:.2}°, azimuth {:.2}°\n",
        name, angles.optimal_pitch, angles.optimal_azimuth
    ));
}

impl OutputFormatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Human-readable text"
    }

    fn format(
        &self,
        request: &CalculationRequest,
        result: &CalculationResult,
        _config: &Config,
    ) -> Result<String> {
        let mut output = String::new();

        // Header
        output.push_str("Optimal solar panel orientation\n");
        output.push_str(&format!(
            "Location: ({:.6}, {:.6})\n",
            request.latitude, request.longitude
        ));
        match request.offset_angle {
            Some(offset) => output.push_str(&format!("Offset angle: {}°\n", offset)),
            None => output.push_str("Offset angle: none\n"),
        }
        output.push('\n');

        // Results
        output.push_str("Model results:\n");
        push_model(&mut output, "pvlib:", &result.pvlib);
        push_model(&mut output, "nrel:", &result.nrel);
        push_model(&mut output, "liu_jordan:", &result.liu_jordan);

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (CalculationRequest, CalculationResult) {
        let request = CalculationRequest::from_texts("43.65", "-79.38", "15").unwrap();
        let result = CalculationResult {
            pvlib: OrientationAngles {
                optimal_pitch: 33.9,
                optimal_azimuth: 180.0,
            },
            nrel: OrientationAngles {
                optimal_pitch: 36.2,
                optimal_azimuth: 180.0,
            },
            liu_jordan: OrientationAngles {
                optimal_pitch: 43.65,
                optimal_azimuth: 180.0,
            },
        };
        (request, result)
    }

    #[test]
    fn test_text_format() {
        let formatter = TextFormatter;
        let (request, result) = sample();
        let config = Config::default();

        let output = formatter.format(&request, &result, &config).unwrap();

        assert!(output.contains("Optimal solar panel orientation"));
        assert!(output.contains("Location: (43.650000, -79.380000)"));
        assert!(output.contains("Offset angle: 15°"));
        assert!(output.contains("pvlib:"));
        assert!(output.contains("nrel:"));
        assert!(output.contains("liu_jordan:"));
        assert!(output.contains("pitch 33.90°"));
    }

    #[test]
    fn test_text_format_without_offset() {
        let formatter = TextFormatter;
        let (mut request, result) = sample();
        request.offset_angle = None;
        let config = Config::default();

        let output = formatter.format(&request, &result, &config).unwrap();
        assert!(output.contains("Offset angle: none"));
    }

    #[test]
    fn test_text_formatter_info() {
        let formatter = TextFormatter;
        assert_eq!(formatter.name(), "text");
        assert!(!formatter.description().is_empty());
    }
}
